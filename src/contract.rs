//! Contract catalog: every deployable contract, its fields, and which
//! of those fields live encrypted on chain.
//!
//! Encryption status is part of the contract's compiled interface, so
//! it is declared statically here rather than probed at runtime.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::value::ValueType;

/// Values of the genesis state a fresh deployment must show.
pub const GENESIS_PLAYER_COUNT: u64 = 1;
pub const GENESIS_WEATHER: u64 = 0;

/// Whether a field's on-chain representation is a ciphertext handle or
/// an ordinary plaintext slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Plaintext,
    Encrypted,
}

/// One readable field of a contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    /// Accessor name as exposed by the contract ABI.
    pub accessor: &'static str,
    pub kind: FieldKind,
    pub value_type: ValueType,
}

const CASTLE_FIELDS: &[FieldDef] = &[
    FieldDef {
        accessor: "getPlayerCount",
        kind: FieldKind::Encrypted,
        value_type: ValueType::Uint,
    },
    FieldDef {
        accessor: "getCurrentWeather",
        kind: FieldKind::Encrypted,
        value_type: ValueType::Uint,
    },
    FieldDef {
        accessor: "getCurrentKing",
        kind: FieldKind::Plaintext,
        value_type: ValueType::Address,
    },
];

/// The contracts this toolchain knows how to deploy and read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContractKind {
    KingOfTheCastle,
}

impl ContractKind {
    pub fn name(&self) -> &'static str {
        match self {
            ContractKind::KingOfTheCastle => "KingOfTheCastle",
        }
    }

    pub fn fields(&self) -> &'static [FieldDef] {
        match self {
            ContractKind::KingOfTheCastle => CASTLE_FIELDS,
        }
    }

    pub fn field(&self, accessor: &str) -> Option<&'static FieldDef> {
        self.fields().iter().find(|f| f.accessor == accessor)
    }

    /// Number of constructor arguments the contract takes.
    pub fn constructor_arity(&self) -> usize {
        match self {
            ContractKind::KingOfTheCastle => 0,
        }
    }
}

impl fmt::Display for ContractKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ContractKind {
    type Err = UnknownContract;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "KingOfTheCastle" => Ok(ContractKind::KingOfTheCastle),
            other => Err(UnknownContract(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown contract {0:?}")]
pub struct UnknownContract(pub String);

impl Serialize for ContractKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for ContractKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(D::Error::custom)
    }
}

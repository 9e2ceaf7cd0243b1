//! Wire types shared by the node's HTTP surface and its clients.

use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::contract::ContractKind;
use crate::permit::Permission;
use crate::seal::SealedValue;
use crate::value::FieldValue;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainInfo {
    pub network: String,
    pub chain_id: u64,
    pub height: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceInfo {
    pub address: Address,
    pub balance: u128,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaucetRequest {
    pub address: Address,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaucetGrant {
    pub address: Address,
    pub amount: u128,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployRequest {
    pub contract: ContractKind,
    pub deployer: Address,
    #[serde(default)]
    pub args: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployReceipt {
    pub address: Address,
    pub height: u64,
}

/// Response to a granted permission: hex-encoded unseal key material.
/// Clients feed it into [`crate::seal::UnsealKey::from_hex`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermitGrant {
    pub key_material: String,
}

/// A read call against one accessor of a deployed contract. The
/// permission is only required for encrypted fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallRequest {
    pub contract: Address,
    pub accessor: String,
    pub permission: Option<Permission>,
}

/// What a read call produced: plaintext fields come back in clear,
/// encrypted fields come back sealed to the caller's permit scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallOutcome {
    Plain(FieldValue),
    Sealed(SealedValue),
}

/// Error body every non-2xx node response carries. `code` is the
/// stable machine-readable discriminator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
    pub code: String,
}

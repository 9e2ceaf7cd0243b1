//! 20-byte account and contract addresses.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::AddressError;

pub const ADDRESS_LEN: usize = 20;

const CONTRACT_ADDRESS_DOMAIN: &[u8] = b"CITADEL:ADDR:CONTRACT:V1";

/// Account or contract address. Rendered as `0x` plus 40 lowercase hex
/// digits everywhere it crosses a boundary.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Address(pub [u8; ADDRESS_LEN]);

impl Address {
    /// Address of an ed25519 account: the trailing 20 bytes of the
    /// BLAKE3 hash of the verifying key.
    pub fn from_verifying_key(key: &ed25519_dalek::VerifyingKey) -> Self {
        let digest = blake3::hash(key.as_bytes());
        let mut out = [0u8; ADDRESS_LEN];
        out.copy_from_slice(&digest.as_bytes()[12..32]);
        Address(out)
    }

    /// Deterministic contract address from deployer and deployer nonce.
    pub fn for_contract(deployer: &Address, nonce: u64) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(CONTRACT_ADDRESS_DOMAIN);
        hasher.update(&deployer.0);
        hasher.update(&nonce.to_le_bytes());
        let digest = hasher.finalize();
        let mut out = [0u8; ADDRESS_LEN];
        out.copy_from_slice(&digest.as_bytes()[12..32]);
        Address(out)
    }

    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex_part = s.strip_prefix("0x").ok_or(AddressError::InvalidFormat)?;
        if hex_part.len() != ADDRESS_LEN * 2 {
            return Err(AddressError::InvalidFormat);
        }
        let mut out = [0u8; ADDRESS_LEN];
        hex::decode_to_slice(hex_part, &mut out).map_err(|_| AddressError::InvalidFormat)?;
        Ok(Address(out))
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(D::Error::custom)
    }
}

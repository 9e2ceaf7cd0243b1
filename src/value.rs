//! Typed field values and their canonical byte form.
//!
//! Sealing operates on the canonical encoding so both sides agree on
//! what was authenticated, independent of any JSON framing.

use serde::{Deserialize, Serialize};

use crate::address::{Address, ADDRESS_LEN};
use crate::error::SealError;

const TAG_UINT: u8 = 1;
const TAG_ADDR: u8 = 2;

/// Declared type of a contract field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueType {
    Uint,
    Address,
}

/// A decoded field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldValue {
    Uint(u64),
    Addr(Address),
}

impl FieldValue {
    pub fn value_type(&self) -> ValueType {
        match self {
            FieldValue::Uint(_) => ValueType::Uint,
            FieldValue::Addr(_) => ValueType::Address,
        }
    }

    pub fn as_uint(&self) -> Option<u64> {
        match self {
            FieldValue::Uint(v) => Some(*v),
            FieldValue::Addr(_) => None,
        }
    }

    pub fn as_address(&self) -> Option<Address> {
        match self {
            FieldValue::Addr(a) => Some(*a),
            FieldValue::Uint(_) => None,
        }
    }

    /// Canonical byte encoding: a one-byte type tag followed by the
    /// fixed-width payload.
    pub fn to_plain_bytes(&self) -> Vec<u8> {
        match self {
            FieldValue::Uint(v) => {
                let mut out = Vec::with_capacity(1 + 8);
                out.push(TAG_UINT);
                out.extend_from_slice(&v.to_le_bytes());
                out
            }
            FieldValue::Addr(a) => {
                let mut out = Vec::with_capacity(1 + ADDRESS_LEN);
                out.push(TAG_ADDR);
                out.extend_from_slice(a.as_bytes());
                out
            }
        }
    }

    pub fn from_plain_bytes(bytes: &[u8]) -> Result<Self, SealError> {
        match bytes.split_first() {
            Some((&TAG_UINT, rest)) => {
                let raw: [u8; 8] = rest
                    .try_into()
                    .map_err(|_| SealError::Malformed("uint payload must be 8 bytes"))?;
                Ok(FieldValue::Uint(u64::from_le_bytes(raw)))
            }
            Some((&TAG_ADDR, rest)) => {
                let raw: [u8; ADDRESS_LEN] = rest
                    .try_into()
                    .map_err(|_| SealError::Malformed("address payload must be 20 bytes"))?;
                Ok(FieldValue::Addr(Address(raw)))
            }
            Some(_) => Err(SealError::Malformed("unknown value tag")),
            None => Err(SealError::Malformed("empty payload")),
        }
    }
}

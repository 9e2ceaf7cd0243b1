//! Core error types.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    #[error("address must be a 0x-prefixed string of 40 hex digits")]
    InvalidFormat,
}

/// Failures while unsealing a sealed value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SealError {
    /// The sealed value is bound to a different (contract, bearer) pair
    /// than the presented key material.
    #[error("sealed value is scoped to a different contract or bearer")]
    ScopeMismatch,
    /// Authentication tag did not verify: wrong key material or a
    /// tampered payload. Plaintext is never released on this path.
    #[error("sealed value failed authentication")]
    TagMismatch,
    #[error("sealed payload is malformed: {0}")]
    Malformed(&'static str),
}

/// Failures while verifying a permission's authorization signature.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SignatureError {
    #[error("signature does not verify against the declared public key")]
    Invalid,
    #[error("declared bearer does not match the signing key's address")]
    BearerMismatch,
    #[error("public key bytes are not a valid ed25519 key")]
    MalformedKey,
    #[error("permission expired at unix time {0}")]
    Expired(u64),
}

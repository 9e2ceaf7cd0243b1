// Copyright (c) 2026 Citadel Contributors. Licensed under AGPLv3.

//! Access permits: a signed authorization plus the key material that
//! unseals values scoped to it.
//!
//! The `Permission` half is what travels to the decryption authority;
//! it proves the bearer asked for access to one contract. The returned
//! key material completes the `Permit`, which stays on the client.

use serde::{Deserialize, Serialize};

use crate::address::{Address, ADDRESS_LEN};
use crate::error::{SealError, SignatureError};
use crate::seal::{unseal, SealScope, SealedValue, UnsealKey};
use crate::value::FieldValue;

pub const PERMIT_SIGNING_DOMAIN: &[u8] = b"CITADEL:SIGN:PERMIT:V1";

/// Default permit lifetime: 24 hours.
pub const DEFAULT_VALIDITY_SECS: u64 = 24 * 60 * 60;

/// A signed claim that `bearer` may read sealed state of `contract`
/// until `expires_at` (unix seconds).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    pub bearer: Address,
    pub contract: Address,
    pub issued_at: u64,
    pub expires_at: u64,
    #[serde(with = "hex::serde")]
    pub public_key: [u8; 32],
    #[serde(with = "hex::serde")]
    pub signature: [u8; 64],
}

impl Permission {
    /// Domain-separated bytes the bearer signs.
    pub fn signing_preimage(
        bearer: &Address,
        contract: &Address,
        issued_at: u64,
        expires_at: u64,
    ) -> Vec<u8> {
        let mut out = Vec::with_capacity(PERMIT_SIGNING_DOMAIN.len() + ADDRESS_LEN * 2 + 16);
        out.extend_from_slice(PERMIT_SIGNING_DOMAIN);
        out.extend_from_slice(bearer.as_bytes());
        out.extend_from_slice(contract.as_bytes());
        out.extend_from_slice(&issued_at.to_le_bytes());
        out.extend_from_slice(&expires_at.to_le_bytes());
        out
    }

    /// Check the permission is intact, belongs to the key that signed
    /// it, and has not expired as of `now` (unix seconds).
    pub fn verify(&self, now: u64) -> Result<(), SignatureError> {
        let key = ed25519_dalek::VerifyingKey::from_bytes(&self.public_key)
            .map_err(|_| SignatureError::MalformedKey)?;
        if Address::from_verifying_key(&key) != self.bearer {
            return Err(SignatureError::BearerMismatch);
        }
        if now >= self.expires_at {
            return Err(SignatureError::Expired(self.expires_at));
        }
        let preimage =
            Self::signing_preimage(&self.bearer, &self.contract, self.issued_at, self.expires_at);
        let signature = ed25519_dalek::Signature::from_bytes(&self.signature);
        use ed25519_dalek::Verifier as _;
        key.verify(&preimage, &signature)
            .map_err(|_| SignatureError::Invalid)
    }

    pub fn scope(&self) -> SealScope {
        SealScope {
            contract: self.contract,
            bearer: self.bearer,
        }
    }
}

/// A permission completed with its unseal key material. This is the
/// client-side capability; the key never leaves the process.
#[derive(Clone)]
pub struct Permit {
    permission: Permission,
    key_material: UnsealKey,
}

impl Permit {
    pub fn new(permission: Permission, key_material: UnsealKey) -> Self {
        Permit {
            permission,
            key_material,
        }
    }

    pub fn permission(&self) -> &Permission {
        &self.permission
    }

    pub fn contract(&self) -> Address {
        self.permission.contract
    }

    pub fn bearer(&self) -> Address {
        self.permission.bearer
    }

    /// Unseal a value that was sealed to this permit's scope.
    pub fn unseal(&self, sealed: &SealedValue) -> Result<FieldValue, SealError> {
        unseal(sealed, self.permission.scope(), &self.key_material)
    }
}

impl std::fmt::Debug for Permit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Permit")
            .field("bearer", &self.permission.bearer)
            .field("contract", &self.permission.contract)
            .field("expires_at", &self.permission.expires_at)
            .finish_non_exhaustive()
    }
}

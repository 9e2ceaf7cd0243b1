// Copyright (c) 2026 Citadel Contributors. Licensed under AGPLv3.

//! Sealing: scope-bound authenticated encryption of field values.
//!
//! The coprocessor never releases a raw decrypted value. It seals the
//! value to a `(contract, bearer)` scope using key material only the
//! permit holder can reproduce, and the holder unseals locally. The
//! construction is keyed BLAKE3: an XOF keystream for confidentiality
//! and a keyed hash over scope, nonce and ciphertext for integrity.
//! Tag verification is constant time and runs before any plaintext is
//! produced.

use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::address::{Address, ADDRESS_LEN};
use crate::error::SealError;
use crate::value::FieldValue;

pub const KEY_LEN: usize = 32;
pub const NONCE_LEN: usize = 24;
pub const TAG_LEN: usize = 32;

const KEYSTREAM_DOMAIN: &[u8] = b"CITADEL:SEAL:KEYSTREAM:V1";
const TAG_DOMAIN: &[u8] = b"CITADEL:SEAL:TAG:V1";
const UNSEAL_KEY_CONTEXT: &str = "CITADEL:SEAL:KEY:V1";

/// Opaque unseal key material. Callers treat this as a bearer secret;
/// it never appears in logs or serialized state.
#[derive(Clone, PartialEq, Eq)]
pub struct UnsealKey([u8; KEY_LEN]);

impl UnsealKey {
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        UnsealKey(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub fn from_hex(raw: &str) -> Result<Self, SealError> {
        let mut out = [0u8; KEY_LEN];
        hex::decode_to_slice(raw, &mut out)
            .map_err(|_| SealError::Malformed("key material must be 64 hex digits"))?;
        Ok(UnsealKey(out))
    }
}

impl std::fmt::Debug for UnsealKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("UnsealKey(..)")
    }
}

/// The `(contract, bearer)` pair a sealed value is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SealScope {
    pub contract: Address,
    pub bearer: Address,
}

impl SealScope {
    pub fn bytes(&self) -> [u8; ADDRESS_LEN * 2] {
        let mut out = [0u8; ADDRESS_LEN * 2];
        out[..ADDRESS_LEN].copy_from_slice(self.contract.as_bytes());
        out[ADDRESS_LEN..].copy_from_slice(self.bearer.as_bytes());
        out
    }
}

/// A field value sealed to one scope. The scope travels in clear so a
/// holder can tell a foreign payload apart from a corrupted one; the
/// tag binds it, so lying about the scope only moves the failure from
/// `ScopeMismatch` to `TagMismatch`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SealedValue {
    pub scope: SealScope,
    #[serde(with = "hex::serde")]
    pub nonce: [u8; NONCE_LEN],
    #[serde(with = "hex::serde")]
    pub ciphertext: Vec<u8>,
    #[serde(with = "hex::serde")]
    pub tag: [u8; TAG_LEN],
}

fn keystream(key: &UnsealKey, nonce: &[u8; NONCE_LEN], len: usize) -> Vec<u8> {
    let mut hasher = blake3::Hasher::new_keyed(key.as_bytes());
    hasher.update(KEYSTREAM_DOMAIN);
    hasher.update(nonce);
    let mut out = vec![0u8; len];
    hasher.finalize_xof().fill(&mut out);
    out
}

fn tag(key: &UnsealKey, scope: &SealScope, nonce: &[u8; NONCE_LEN], ciphertext: &[u8]) -> blake3::Hash {
    let mut hasher = blake3::Hasher::new_keyed(key.as_bytes());
    hasher.update(TAG_DOMAIN);
    hasher.update(&scope.bytes());
    hasher.update(nonce);
    hasher.update(ciphertext);
    hasher.finalize()
}

/// Seal `value` to `scope` under `key`. A fresh nonce makes repeated
/// seals of the same value distinct on the wire.
pub fn seal(value: &FieldValue, scope: SealScope, key: &UnsealKey) -> SealedValue {
    let mut nonce = [0u8; NONCE_LEN];
    rand::rngs::OsRng.fill_bytes(&mut nonce);

    let plain = value.to_plain_bytes();
    let mut ciphertext = keystream(key, &nonce, plain.len());
    for (c, p) in ciphertext.iter_mut().zip(plain.iter()) {
        *c ^= p;
    }

    let tag = tag(key, &scope, &nonce, &ciphertext);
    SealedValue {
        scope,
        nonce,
        ciphertext,
        tag: *tag.as_bytes(),
    }
}

/// Unseal a value with `key`, insisting it was sealed to
/// `expected_scope`. Scope is checked first, then the tag; plaintext
/// is only decoded after both pass.
pub fn unseal(
    sealed: &SealedValue,
    expected_scope: SealScope,
    key: &UnsealKey,
) -> Result<FieldValue, SealError> {
    if sealed.scope != expected_scope {
        return Err(SealError::ScopeMismatch);
    }

    let expected = tag(key, &sealed.scope, &sealed.nonce, &sealed.ciphertext);
    // blake3::Hash comparison is constant time.
    if expected != blake3::Hash::from_bytes(sealed.tag) {
        return Err(SealError::TagMismatch);
    }

    let mut plain = keystream(key, &sealed.nonce, sealed.ciphertext.len());
    for (p, c) in plain.iter_mut().zip(sealed.ciphertext.iter()) {
        *p ^= c;
    }
    FieldValue::from_plain_bytes(&plain)
}

/// Derive the unseal key for one scope from the authority's root
/// secret. Deterministic, so re-issuing a permit for the same scope
/// hands back the same key material.
pub fn derive_unseal_key(root: &[u8; KEY_LEN], scope: SealScope) -> UnsealKey {
    let mut material = Vec::with_capacity(KEY_LEN + ADDRESS_LEN * 2);
    material.extend_from_slice(root);
    material.extend_from_slice(&scope.bytes());
    UnsealKey(blake3::derive_key(UNSEAL_KEY_CONTEXT, &material))
}

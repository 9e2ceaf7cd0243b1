use crate::error::SealError;
use crate::seal::{derive_unseal_key, seal, unseal, SealScope, UnsealKey, KEY_LEN};
use crate::signer::Signer;
use crate::value::FieldValue;

fn scope_for(contract_seed: u32, bearer_seed: u32) -> SealScope {
    SealScope {
        contract: Signer::dev(contract_seed).address(),
        bearer: Signer::dev(bearer_seed).address(),
    }
}

#[test]
fn seal_then_unseal_recovers_the_value() {
    let scope = scope_for(10, 11);
    let key = UnsealKey::from_bytes([42u8; KEY_LEN]);
    let value = FieldValue::Uint(7);
    let sealed = seal(&value, scope, &key);
    assert_eq!(unseal(&sealed, scope, &key).unwrap(), value);
}

#[test]
fn fresh_nonce_makes_repeated_seals_distinct() {
    let scope = scope_for(10, 11);
    let key = UnsealKey::from_bytes([42u8; KEY_LEN]);
    let value = FieldValue::Uint(7);
    let first = seal(&value, scope, &key);
    let second = seal(&value, scope, &key);
    assert_ne!(first.nonce, second.nonce);
    assert_ne!(first.ciphertext, second.ciphertext);
}

#[test]
fn unseal_rejects_foreign_scope() {
    let sealed_for = scope_for(10, 11);
    let key = UnsealKey::from_bytes([42u8; KEY_LEN]);
    let sealed = seal(&FieldValue::Uint(7), sealed_for, &key);
    let other_bearer = scope_for(10, 12);
    assert_eq!(
        unseal(&sealed, other_bearer, &key),
        Err(SealError::ScopeMismatch)
    );
}

#[test]
fn relabeled_scope_fails_the_tag_instead() {
    // An attacker rewriting the cleartext scope to match the victim's
    // expectation still cannot pass tag verification.
    let scope = scope_for(10, 11);
    let victim_scope = scope_for(10, 12);
    let key = UnsealKey::from_bytes([42u8; KEY_LEN]);
    let mut sealed = seal(&FieldValue::Uint(7), scope, &key);
    sealed.scope = victim_scope;
    assert_eq!(
        unseal(&sealed, victim_scope, &key),
        Err(SealError::TagMismatch)
    );
}

#[test]
fn unseal_rejects_wrong_key() {
    let scope = scope_for(10, 11);
    let sealed = seal(&FieldValue::Uint(7), scope, &UnsealKey::from_bytes([1u8; KEY_LEN]));
    assert_eq!(
        unseal(&sealed, scope, &UnsealKey::from_bytes([2u8; KEY_LEN])),
        Err(SealError::TagMismatch)
    );
}

#[test]
fn unseal_rejects_tampered_ciphertext() {
    let scope = scope_for(10, 11);
    let key = UnsealKey::from_bytes([42u8; KEY_LEN]);
    let mut sealed = seal(&FieldValue::Uint(7), scope, &key);
    sealed.ciphertext[0] ^= 0xff;
    assert_eq!(unseal(&sealed, scope, &key), Err(SealError::TagMismatch));
}

#[test]
fn derived_keys_are_deterministic_per_scope() {
    let root = [9u8; KEY_LEN];
    let scope = scope_for(10, 11);
    assert_eq!(
        derive_unseal_key(&root, scope),
        derive_unseal_key(&root, scope)
    );
    assert_ne!(
        derive_unseal_key(&root, scope),
        derive_unseal_key(&root, scope_for(10, 12))
    );
    assert_ne!(
        derive_unseal_key(&root, scope),
        derive_unseal_key(&[10u8; KEY_LEN], scope)
    );
}

#[test]
fn key_hex_roundtrips_and_rejects_garbage() {
    let key = UnsealKey::from_bytes([0x5a; KEY_LEN]);
    let restored = UnsealKey::from_hex(&key.to_hex()).unwrap();
    assert_eq!(restored, key);
    assert!(UnsealKey::from_hex("abcd").is_err());
    assert!(UnsealKey::from_hex("not hex at all").is_err());
}

#[test]
fn sealed_value_serde_roundtrips() {
    let scope = scope_for(10, 11);
    let key = UnsealKey::from_bytes([42u8; KEY_LEN]);
    let sealed = seal(&FieldValue::Addr(Signer::dev(3).address()), scope, &key);
    let json = serde_json::to_string(&sealed).unwrap();
    let back: crate::seal::SealedValue = serde_json::from_str(&json).unwrap();
    assert_eq!(back, sealed);
    assert_eq!(unseal(&back, scope, &key).unwrap().as_address(), Some(Signer::dev(3).address()));
}

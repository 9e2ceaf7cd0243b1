use crate::address::{Address, ADDRESS_LEN};
use crate::error::AddressError;
use crate::signer::Signer;

#[test]
fn display_renders_prefixed_lowercase_hex() {
    let mut raw = [0u8; ADDRESS_LEN];
    raw[0] = 0xab;
    raw[19] = 0x01;
    let addr = Address(raw);
    assert_eq!(
        addr.to_string(),
        "0xab00000000000000000000000000000000000001"
    );
}

#[test]
fn parse_roundtrips_display() {
    let addr = Signer::dev(3).address();
    let parsed: Address = addr.to_string().parse().unwrap();
    assert_eq!(parsed, addr);
}

#[test]
fn parse_rejects_malformed_input() {
    for bad in [
        "ab00000000000000000000000000000000000001",
        "0xab0000000000000000000000000000000000000001",
        "0xab000000000000000000000000000000000001",
        "0xzz00000000000000000000000000000000000001",
        "",
        "0x",
    ] {
        assert_eq!(bad.parse::<Address>(), Err(AddressError::InvalidFormat), "{bad:?}");
    }
}

#[test]
fn account_address_is_stable_per_key() {
    let signer = Signer::from_seed([7u8; 32]);
    let again = Signer::from_seed([7u8; 32]);
    assert_eq!(signer.address(), again.address());
    assert_ne!(signer.address(), Signer::from_seed([8u8; 32]).address());
}

#[test]
fn contract_addresses_differ_by_deployer_and_nonce() {
    let a = Signer::dev(0).address();
    let b = Signer::dev(1).address();
    assert_ne!(
        Address::for_contract(&a, 0),
        Address::for_contract(&a, 1)
    );
    assert_ne!(
        Address::for_contract(&a, 0),
        Address::for_contract(&b, 0)
    );
    assert_eq!(
        Address::for_contract(&a, 0),
        Address::for_contract(&a, 0)
    );
}

#[test]
fn serde_uses_display_form() {
    let addr = Signer::dev(0).address();
    let json = serde_json::to_string(&addr).unwrap();
    assert_eq!(json, format!("\"{addr}\""));
    let back: Address = serde_json::from_str(&json).unwrap();
    assert_eq!(back, addr);
}

#[test]
fn serde_rejects_malformed_strings() {
    assert!(serde_json::from_str::<Address>("\"0x1234\"").is_err());
}

//! Local ed25519 account keys.

use crate::address::Address;
use crate::permit::Permission;

const DEV_SIGNER_CONTEXT: &str = "CITADEL:DEV:SIGNER:V1";

/// An account keypair and its derived address.
#[derive(Clone)]
pub struct Signer {
    key: ed25519_dalek::SigningKey,
    address: Address,
}

impl Signer {
    pub fn from_seed(seed: [u8; 32]) -> Self {
        let key = ed25519_dalek::SigningKey::from_bytes(&seed);
        let address = Address::from_verifying_key(&key.verifying_key());
        Signer { key, address }
    }

    /// Well-known development account `index`. Same index, same key,
    /// on every machine.
    pub fn dev(index: u32) -> Self {
        let seed = blake3::derive_key(DEV_SIGNER_CONTEXT, &index.to_le_bytes());
        Signer::from_seed(seed)
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn verifying_key(&self) -> ed25519_dalek::VerifyingKey {
        self.key.verifying_key()
    }

    /// Sign a permission for `contract` with an explicit validity
    /// window. Timestamps are unix seconds; callers own the clock.
    pub fn permission_signed_at(
        &self,
        contract: Address,
        issued_at: u64,
        expires_at: u64,
    ) -> Permission {
        let preimage =
            Permission::signing_preimage(&self.address, &contract, issued_at, expires_at);
        use ed25519_dalek::Signer as _;
        let signature = self.key.sign(&preimage);
        Permission {
            bearer: self.address,
            contract,
            issued_at,
            expires_at,
            public_key: self.key.verifying_key().to_bytes(),
            signature: signature.to_bytes(),
        }
    }
}

impl std::fmt::Debug for Signer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signer")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}

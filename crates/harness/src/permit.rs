//! Permit issuance against the node's decryption authority.

use std::time::{SystemTime, UNIX_EPOCH};

use citadel_core::address::Address;
use citadel_core::permit::{Permit, DEFAULT_VALIDITY_SECS};
use citadel_core::seal::UnsealKey;

use crate::context::NetworkContext;
use crate::errors::PermitError;

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before unix epoch")
        .as_secs()
}

/// Sign a permission for `contract` and trade it with the authority
/// for unseal key material. Asking twice for the same contract yields
/// permits with identical key material, so re-running a workflow never
/// invalidates earlier permits.
pub async fn create_permit(ctx: &NetworkContext, contract: Address) -> Result<Permit, PermitError> {
    let now = unix_now();
    let permission = ctx
        .signer()
        .permission_signed_at(contract, now, now + DEFAULT_VALIDITY_SECS);

    let grant = ctx
        .provider()
        .grant_permit(&permission)
        .await
        .map_err(|err| match err.api_code() {
            Some("signature_rejected") => PermitError::SignatureRejected,
            Some("contract_not_found") => PermitError::ContractNotFound(contract),
            _ => PermitError::AuthorityUnreachable(err.to_string()),
        })?;

    let key = UnsealKey::from_hex(&grant.key_material)
        .map_err(|_| PermitError::AuthorityUnreachable("malformed key material".into()))?;
    tracing::debug!(%contract, bearer = %permission.bearer, "permit issued");
    Ok(Permit::new(permission, key))
}

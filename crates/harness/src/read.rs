//! Reading contract state, sealed or plain.
//!
//! Whether a field is encrypted is part of the contract's compiled
//! interface, so the reader checks its permit requirements before any
//! request leaves the process. Fail-closed: a missing or mismatched
//! permit is an error, never a degraded read.

use citadel_core::address::Address;
use citadel_core::api::{CallOutcome, CallRequest};
use citadel_core::contract::{ContractKind, FieldKind};
use citadel_core::error::SealError;
use citadel_core::permit::Permit;
use citadel_core::value::FieldValue;

use crate::context::NetworkContext;
use crate::errors::{ProviderError, ReadError};

/// Read one field of a deployed contract. Plaintext fields need no
/// permit; encrypted fields need a permit scoped to exactly this
/// contract, and the value only ever travels sealed to that scope.
pub async fn read_field(
    ctx: &NetworkContext,
    contract: ContractKind,
    address: Address,
    accessor: &str,
    permit: Option<&Permit>,
) -> Result<FieldValue, ReadError> {
    let field = contract
        .field(accessor)
        .ok_or_else(|| ReadError::UnknownField(accessor.to_string()))?;

    let value = match field.kind {
        FieldKind::Plaintext => {
            let outcome = ctx
                .provider()
                .call(&CallRequest {
                    contract: address,
                    accessor: accessor.to_string(),
                    permission: None,
                })
                .await
                .map_err(|err| map_call_err(err, accessor))?;
            match outcome {
                CallOutcome::Plain(value) => value,
                CallOutcome::Sealed(_) => {
                    return Err(ReadError::Protocol("sealed answer for a plaintext field"))
                }
            }
        }
        FieldKind::Encrypted => {
            let permit = permit.ok_or_else(|| ReadError::PermitRequired {
                field: accessor.to_string(),
            })?;
            if permit.contract() != address {
                return Err(ReadError::ScopeMismatch);
            }
            let outcome = ctx
                .provider()
                .call(&CallRequest {
                    contract: address,
                    accessor: accessor.to_string(),
                    permission: Some(permit.permission().clone()),
                })
                .await
                .map_err(|err| map_call_err(err, accessor))?;
            let sealed = match outcome {
                CallOutcome::Sealed(sealed) => sealed,
                CallOutcome::Plain(_) => {
                    return Err(ReadError::Protocol("clear answer for an encrypted field"))
                }
            };
            permit.unseal(&sealed).map_err(|err| match err {
                SealError::ScopeMismatch => ReadError::ScopeMismatch,
                SealError::TagMismatch | SealError::Malformed(_) => ReadError::DecryptionFailure,
            })?
        }
    };

    if value.value_type() != field.value_type {
        return Err(ReadError::Protocol("field type mismatch"));
    }
    Ok(value)
}

fn map_call_err(err: ProviderError, accessor: &str) -> ReadError {
    match err.api_code() {
        Some("permission_required") => ReadError::PermitRequired {
            field: accessor.to_string(),
        },
        Some("permission_scope") => ReadError::ScopeMismatch,
        _ => ReadError::CallFailed(err),
    }
}

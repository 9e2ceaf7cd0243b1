// Copyright (c) 2026 Citadel Contributors. Licensed under AGPLv3.
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use citadel_core::address::Address;
use citadel_core::api::ApiErrorBody;
use citadel_core::error::SignatureError;

#[derive(Error, Debug)]
pub enum NodeError {
    #[error("account {0} cannot cover the deployment cost")]
    InsufficientFunds(Address),
    #[error("no contract deployed at {0}")]
    ContractNotFound(Address),
    #[error("contract has no accessor {0:?}")]
    UnknownAccessor(String),
    #[error("constructor takes {expected} arguments, got {got}")]
    ConstructorArity { expected: usize, got: usize },
    #[error("permission rejected: {0}")]
    SignatureRejected(#[from] SignatureError),
    #[error("reading an encrypted field requires a permission")]
    PermissionRequired,
    #[error("permission is scoped to a different contract")]
    PermissionScope,
    #[error("faucet is not available on network {0:?}")]
    FaucetDisabled(String),
}

impl NodeError {
    /// Stable machine-readable code carried in every error body.
    pub fn code(&self) -> &'static str {
        match self {
            NodeError::InsufficientFunds(_) => "insufficient_funds",
            NodeError::ContractNotFound(_) => "contract_not_found",
            NodeError::UnknownAccessor(_) => "unknown_accessor",
            NodeError::ConstructorArity { .. } => "bad_constructor_args",
            NodeError::SignatureRejected(_) => "signature_rejected",
            NodeError::PermissionRequired => "permission_required",
            NodeError::PermissionScope => "permission_scope",
            NodeError::FaucetDisabled(_) => "faucet_disabled",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            NodeError::InsufficientFunds(_) => StatusCode::BAD_REQUEST,
            NodeError::ContractNotFound(_) => StatusCode::NOT_FOUND,
            NodeError::UnknownAccessor(_) => StatusCode::BAD_REQUEST,
            NodeError::ConstructorArity { .. } => StatusCode::BAD_REQUEST,
            NodeError::SignatureRejected(_) => StatusCode::UNAUTHORIZED,
            NodeError::PermissionRequired => StatusCode::UNAUTHORIZED,
            NodeError::PermissionScope => StatusCode::FORBIDDEN,
            NodeError::FaucetDisabled(_) => StatusCode::FORBIDDEN,
        }
    }
}

impl IntoResponse for NodeError {
    fn into_response(self) -> Response {
        let body = Json(ApiErrorBody {
            error: self.to_string(),
            code: self.code().to_string(),
        });
        (self.status(), body).into_response()
    }
}

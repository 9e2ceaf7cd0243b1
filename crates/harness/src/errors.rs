//! Error taxonomy of the harness, one enum per workflow stage.

use thiserror::Error;

use citadel_core::address::Address;

/// Failures talking to the node at all.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("node request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("node rejected the request ({code}): {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
    },
    #[error("could not decode node response: {0}")]
    Decode(String),
}

impl ProviderError {
    /// The node's machine-readable error code, if this was an API
    /// level rejection.
    pub fn api_code(&self) -> Option<&str> {
        match self {
            ProviderError::Api { code, .. } => Some(code),
            _ => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum FundingError {
    /// The account holds nothing and this network has no faucet. The
    /// message carries the remediation, not just the diagnosis.
    #[error("account {address} holds no funds on {network:?}; transfer funds to it or use the faucet at {hint}")]
    Unfunded {
        address: Address,
        network: String,
        hint: &'static str,
    },
    #[error("faucet refused the request: {0}")]
    FaucetRejected(String),
    #[error("node unavailable: {0}")]
    Rpc(#[from] ProviderError),
}

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("registry io: {0}")]
    Io(#[from] std::io::Error),
    #[error("registry format: {0}")]
    Format(#[from] serde_json::Error),
    #[error("registry version {0} is newer than this tool understands")]
    UnknownVersion(u32),
}

#[derive(Error, Debug)]
pub enum DeployError {
    #[error("deployment of {name} rejected: {reason}")]
    Rejected { name: &'static str, reason: String },
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error("node unavailable: {0}")]
    Rpc(#[from] ProviderError),
}

#[derive(Error, Debug)]
pub enum PermitError {
    /// The signer would not (or could not) authorize the permit
    /// request, or the node refused the signature.
    #[error("permit signature was rejected")]
    SignatureRejected,
    #[error("no contract deployed at {0}")]
    ContractNotFound(Address),
    #[error("decryption authority unreachable: {0}")]
    AuthorityUnreachable(String),
}

#[derive(Error, Debug)]
pub enum ReadError {
    #[error("field {field:?} is encrypted; reading it requires a permit")]
    PermitRequired { field: String },
    #[error("permit is scoped to a different contract")]
    ScopeMismatch,
    #[error("sealed value failed to decrypt")]
    DecryptionFailure,
    #[error("contract has no field {0:?}")]
    UnknownField(String),
    #[error("unexpected node response: {0}")]
    Protocol(&'static str),
    #[error("read call failed: {0}")]
    CallFailed(#[from] ProviderError),
}

#[derive(Error, Debug)]
pub enum VerifyError {
    #[error("funding: {0}")]
    Funding(#[from] FundingError),
    #[error("deploy: {0}")]
    Deploy(#[from] DeployError),
    #[error("permit: {0}")]
    Permit(#[from] PermitError),
    #[error("read: {0}")]
    Read(#[from] ReadError),
    #[error("genesis mismatch on {field}: expected {expected}, got {actual}")]
    GenesisMismatch {
        field: &'static str,
        expected: String,
        actual: String,
    },
}

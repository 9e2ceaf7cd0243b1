//! citadel-harness: deployment and verification client for the
//! confidential castle game.
//!
//! The harness drives a node through the full operator workflow: check
//! and top up funding, deploy the contract (idempotently, through a
//! local deployment registry), obtain access permits, read sealed
//! state, and verify the freshly deployed genesis.

pub mod context;
pub mod deploy;
pub mod errors;
pub mod fund;
pub mod permit;
pub mod provider;
pub mod read;
pub mod registry;
pub mod verify;

pub use context::NetworkContext;
pub use deploy::{deploy, DeployOptions};
pub use fund::{ensure_funded, FundingOutcome};
pub use permit::create_permit;
pub use read::read_field;
pub use verify::run_genesis_verification;

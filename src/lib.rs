// Copyright (c) 2026 Citadel Contributors. Licensed under AGPLv3.

//! citadel-core: protocol types for confidential-contract access permits
//! and sealed state reads. Deterministic; all clocks and I/O live at the
//! edges (node, harness).

pub mod address;
pub mod api;
pub mod contract;
pub mod error;
pub mod permit;
pub mod seal;
pub mod signer;
pub mod value;

/// Designated local development network, the only network eligible for
/// faucet auto-funding.
pub const DEV_NETWORK: &str = "localfhenix";

#[cfg(test)]
mod tests;

//! Deployment coordinator.

use chrono::Utc;

use citadel_core::api::DeployRequest;
use citadel_core::contract::ContractKind;

use crate::context::NetworkContext;
use crate::errors::{DeployError, ProviderError};
use crate::registry::{DeploymentRecord, DeploymentRegistry};

#[derive(Debug, Clone, Copy)]
pub struct DeployOptions {
    /// Reuse a recorded deployment instead of submitting a new one.
    /// With this set, a repeated deploy touches the node not at all.
    pub skip_if_already_deployed: bool,
}

impl Default for DeployOptions {
    fn default() -> Self {
        Self {
            skip_if_already_deployed: true,
        }
    }
}

/// Deploy `contract` with `args`, or reuse the deployment the registry
/// already records for this network. Every fresh deployment replaces
/// the registry entry.
pub async fn deploy(
    ctx: &NetworkContext,
    contract: ContractKind,
    args: Vec<String>,
    options: DeployOptions,
) -> Result<DeploymentRecord, DeployError> {
    let name = contract.name();
    let mut registry = DeploymentRegistry::open(ctx.registry_path())?;

    if options.skip_if_already_deployed {
        if let Some(existing) = registry.get(ctx.network(), name) {
            tracing::info!(contract = name, address = %existing.address, "reusing recorded deployment");
            return Ok(existing.clone());
        }
    }

    let receipt = ctx
        .provider()
        .deploy(&DeployRequest {
            contract,
            deployer: ctx.signer().address(),
            args: args.clone(),
        })
        .await
        .map_err(|err| match err {
            ProviderError::Api { message, .. } => DeployError::Rejected {
                name,
                reason: message,
            },
            other => DeployError::Rpc(other),
        })?;

    let record = DeploymentRecord {
        name: name.to_string(),
        network: ctx.network().to_string(),
        address: receipt.address,
        args,
        last_deployed_at: Utc::now(),
    };
    registry.record(record.clone())?;
    tracing::info!(contract = name, address = %record.address, height = receipt.height, "contract deployed");
    Ok(record)
}

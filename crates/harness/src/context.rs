//! Everything one harness run needs: which network, which account,
//! which node, where the deployment registry lives.

use std::path::{Path, PathBuf};

use citadel_core::signer::Signer;

use crate::provider::NodeProvider;

pub struct NetworkContext {
    network: String,
    signer: Signer,
    provider: NodeProvider,
    registry_path: PathBuf,
}

impl NetworkContext {
    pub fn new(
        network: impl Into<String>,
        signer: Signer,
        provider: NodeProvider,
        registry_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            network: network.into(),
            signer,
            provider,
            registry_path: registry_path.into(),
        }
    }

    pub fn network(&self) -> &str {
        &self.network
    }

    /// Whether this context targets the local development network,
    /// the only place the faucet works.
    pub fn is_dev_network(&self) -> bool {
        self.network == citadel_core::DEV_NETWORK
    }

    pub fn signer(&self) -> &Signer {
        &self.signer
    }

    pub fn provider(&self) -> &NodeProvider {
        &self.provider
    }

    pub fn registry_path(&self) -> &Path {
        &self.registry_path
    }
}

use std::net::SocketAddr;

#[derive(Debug, Clone)]
pub struct NodeConfig {
    pub bind_addr: SocketAddr,
    /// Network name reported by the chain and checked by the faucet.
    pub network: String,
    pub chain_id: u64,
    /// Wei credited per faucet drip.
    pub faucet_amount: u128,
    /// Flat gas cost charged for a contract deployment.
    pub deploy_gas_cost: u128,
    /// Seed for the decryption authority's root secret. Unset means a
    /// random root, so permits die with the process.
    pub authority_seed: Option<String>,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:42069".parse().unwrap(),
            network: citadel_core::DEV_NETWORK.to_string(),
            chain_id: 412346,
            faucet_amount: 1_000_000_000_000_000_000,
            deploy_gas_cost: 2_500_000,
            authority_seed: None,
        }
    }
}

impl NodeConfig {
    /// Defaults overlaid with `CITADEL_BIND`, `CITADEL_NETWORK` and
    /// `CITADEL_AUTHORITY_SEED` from the environment.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Ok(bind) = std::env::var("CITADEL_BIND") {
            cfg.bind_addr = bind.parse().expect("CITADEL_BIND must be host:port");
        }
        if let Ok(network) = std::env::var("CITADEL_NETWORK") {
            cfg.network = network;
        }
        if let Ok(seed) = std::env::var("CITADEL_AUTHORITY_SEED") {
            cfg.authority_seed = Some(seed);
        }
        cfg
    }
}

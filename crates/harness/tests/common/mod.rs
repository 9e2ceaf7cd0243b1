use std::path::Path;
use std::sync::Arc;

use tokio::sync::Mutex;

use citadel_core::signer::Signer;
use citadel_harness::context::NetworkContext;
use citadel_harness::provider::NodeProvider;
use citadel_node::config::NodeConfig;
use citadel_node::engine::{ChainEngine, EngineCounters};
use citadel_node::server::{build_router, SharedEngine};

/// An in-process node bound to an ephemeral port, with the engine
/// handle kept so tests can assert on exactly what the node saw.
pub struct TestNode {
    pub url: String,
    pub engine: SharedEngine,
}

impl TestNode {
    pub fn context(&self, network: &str, account: u32, registry: &Path) -> NetworkContext {
        NetworkContext::new(
            network,
            Signer::dev(account),
            NodeProvider::new(self.url.clone()),
            registry,
        )
    }

    pub async fn counters(&self) -> EngineCounters {
        self.engine.lock().await.counters()
    }
}

pub async fn spawn_node(network: &str) -> TestNode {
    let cfg = NodeConfig {
        network: network.to_string(),
        authority_seed: Some("harness-tests".into()),
        ..Default::default()
    };
    let state: SharedEngine = Arc::new(Mutex::new(ChainEngine::new(&cfg)));
    let app = build_router(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestNode {
        url: format!("http://{addr}"),
        engine: state,
    }
}

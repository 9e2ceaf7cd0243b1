// Copyright (c) 2026 Citadel Contributors. Licensed under AGPLv3.
use citadel_node::config::NodeConfig;
use citadel_node::engine::ChainEngine;
use citadel_node::server::{build_router, SharedEngine};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

#[tokio::main]
async fn main() {
    citadel_node::telemetry::init_telemetry();

    let cfg = NodeConfig::from_env();
    tracing::info!(network = %cfg.network, chain_id = cfg.chain_id, "starting citadel node");

    let engine = ChainEngine::new(&cfg);
    let shared_state: SharedEngine = Arc::new(Mutex::new(engine));
    let app = build_router(shared_state);

    let addr = cfg.bind_addr;
    tracing::info!("Listening on {}", addr);
    let listener = TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

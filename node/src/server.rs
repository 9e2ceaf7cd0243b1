// Copyright (c) 2026 Citadel Contributors. Licensed under AGPLv3.
use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use std::sync::Arc;
use tokio::sync::Mutex;

use citadel_core::address::Address;
use citadel_core::api::{
    BalanceInfo, CallOutcome, CallRequest, ChainInfo, DeployReceipt, DeployRequest, FaucetGrant,
    FaucetRequest, PermitGrant,
};
use citadel_core::permit::Permission;

use crate::engine::{now_unix, ChainEngine};
use crate::errors::NodeError;

pub type SharedEngine = Arc<Mutex<ChainEngine>>;

pub fn build_router(state: SharedEngine) -> Router {
    Router::new()
        .route("/v1/chain/info", get(chain_info))
        .route("/v1/balance/:address", get(balance))
        .route("/v1/faucet", post(faucet))
        .route("/v1/deploy", post(deploy))
        .route("/v1/permit", post(permit))
        .route("/v1/call", post(call))
        // Observability
        .route("/metrics", get(metrics_handler))
        .with_state(state)
}

async fn chain_info(State(state): State<SharedEngine>) -> Json<ChainInfo> {
    let engine = state.lock().await;
    Json(engine.info())
}

async fn balance(
    State(state): State<SharedEngine>,
    Path(address): Path<Address>,
) -> Json<BalanceInfo> {
    let engine = state.lock().await;
    Json(BalanceInfo {
        address,
        balance: engine.balance(&address),
    })
}

async fn faucet(
    State(state): State<SharedEngine>,
    Json(payload): Json<FaucetRequest>,
) -> Result<Json<FaucetGrant>, NodeError> {
    let mut engine = state.lock().await;
    let grant = engine.drip(payload.address)?;
    Ok(Json(grant))
}

async fn deploy(
    State(state): State<SharedEngine>,
    Json(payload): Json<DeployRequest>,
) -> Result<Json<DeployReceipt>, NodeError> {
    let mut engine = state.lock().await;
    let receipt = engine.deploy(&payload)?;
    Ok(Json(receipt))
}

async fn permit(
    State(state): State<SharedEngine>,
    Json(payload): Json<Permission>,
) -> Result<Json<PermitGrant>, NodeError> {
    let mut engine = state.lock().await;
    let grant = engine.grant_permit(&payload, now_unix())?;
    Ok(Json(grant))
}

async fn call(
    State(state): State<SharedEngine>,
    Json(payload): Json<CallRequest>,
) -> Result<Json<CallOutcome>, NodeError> {
    let mut engine = state.lock().await;
    let outcome = engine.call(&payload, now_unix())?;
    Ok(Json(outcome))
}

async fn metrics_handler() -> String {
    crate::telemetry::get_metrics()
}

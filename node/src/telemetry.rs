// Copyright (c) 2026 Citadel Contributors. Licensed under AGPLv3.
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

static PROM_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Initialize telemetry (logs + metrics)
pub fn init_telemetry() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "citadel_node=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let builder = PrometheusBuilder::new();
    let handle = builder
        .install_recorder()
        .expect("failed to install Prometheus recorder");

    if PROM_HANDLE.set(handle).is_err() {
        tracing::warn!("Prometheus handle already set. Telemetry re-initialized?");
    }

    metrics::describe_counter!(
        "citadel_faucet_drips_total",
        "Total number of faucet drips credited"
    );
    metrics::describe_counter!(
        "citadel_deployments_total",
        "Total number of contracts deployed"
    );
    metrics::describe_counter!(
        "citadel_permits_granted_total",
        "Total number of access permits granted"
    );
    metrics::describe_counter!(
        "citadel_sealed_reads_total",
        "Total number of encrypted field reads sealed"
    );

    // Ensure at least one metric exists on startup
    metrics::gauge!("citadel_node_up", 1.0);
}

/// Get the Prometheus handle to render metrics
pub fn get_metrics() -> String {
    if let Some(handle) = PROM_HANDLE.get() {
        handle.render()
    } else {
        "# metrics not initialized".to_string()
    }
}

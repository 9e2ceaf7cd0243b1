mod common;

use citadel_core::contract::ContractKind;
use citadel_harness::deploy::{deploy, DeployOptions};
use citadel_harness::errors::DeployError;
use citadel_harness::fund::ensure_funded;
use citadel_harness::registry::DeploymentRegistry;

#[tokio::test]
async fn first_deploy_submits_and_records() {
    let node = common::spawn_node("localfhenix").await;
    let dir = tempfile::tempdir().unwrap();
    let registry_path = dir.path().join("deployments.json");
    let ctx = node.context("localfhenix", 0, &registry_path);

    ensure_funded(&ctx).await.unwrap();
    let record = deploy(
        &ctx,
        ContractKind::KingOfTheCastle,
        vec![],
        DeployOptions::default(),
    )
    .await
    .unwrap();

    assert_eq!(record.name, "KingOfTheCastle");
    assert_eq!(record.network, "localfhenix");
    assert_eq!(node.counters().await.deployments_submitted, 1);

    // The registry file on disk carries the same record.
    let registry = DeploymentRegistry::open(&registry_path).unwrap();
    assert_eq!(
        registry.get("localfhenix", "KingOfTheCastle"),
        Some(&record)
    );
}

#[tokio::test]
async fn repeated_deploy_reuses_the_recorded_instance() {
    let node = common::spawn_node("localfhenix").await;
    let dir = tempfile::tempdir().unwrap();
    let ctx = node.context("localfhenix", 0, &dir.path().join("deployments.json"));

    ensure_funded(&ctx).await.unwrap();
    let first = deploy(
        &ctx,
        ContractKind::KingOfTheCastle,
        vec![],
        DeployOptions::default(),
    )
    .await
    .unwrap();
    let second = deploy(
        &ctx,
        ContractKind::KingOfTheCastle,
        vec![],
        DeployOptions::default(),
    )
    .await
    .unwrap();

    assert_eq!(second.address, first.address);
    // Nothing new was submitted to the node.
    assert_eq!(node.counters().await.deployments_submitted, 1);
}

#[tokio::test]
async fn forced_deploy_replaces_the_recorded_instance() {
    let node = common::spawn_node("localfhenix").await;
    let dir = tempfile::tempdir().unwrap();
    let registry_path = dir.path().join("deployments.json");
    let ctx = node.context("localfhenix", 0, &registry_path);

    ensure_funded(&ctx).await.unwrap();
    let first = deploy(
        &ctx,
        ContractKind::KingOfTheCastle,
        vec![],
        DeployOptions::default(),
    )
    .await
    .unwrap();
    let second = deploy(
        &ctx,
        ContractKind::KingOfTheCastle,
        vec![],
        DeployOptions {
            skip_if_already_deployed: false,
        },
    )
    .await
    .unwrap();

    assert_ne!(second.address, first.address);
    assert_eq!(node.counters().await.deployments_submitted, 2);

    let registry = DeploymentRegistry::open(&registry_path).unwrap();
    assert_eq!(
        registry.get("localfhenix", "KingOfTheCastle").unwrap().address,
        second.address
    );
}

#[tokio::test]
async fn deploy_from_an_unfunded_account_is_rejected() {
    let node = common::spawn_node("localfhenix").await;
    let dir = tempfile::tempdir().unwrap();
    let registry_path = dir.path().join("deployments.json");
    let ctx = node.context("localfhenix", 3, &registry_path);

    let err = deploy(
        &ctx,
        ContractKind::KingOfTheCastle,
        vec![],
        DeployOptions::default(),
    )
    .await
    .unwrap_err();
    assert!(
        matches!(err, DeployError::Rejected { name: "KingOfTheCastle", .. }),
        "got {err:?}"
    );

    // A rejected deployment leaves no registry record behind.
    let registry = DeploymentRegistry::open(&registry_path).unwrap();
    assert!(registry.get("localfhenix", "KingOfTheCastle").is_none());
}

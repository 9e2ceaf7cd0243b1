mod common;

use citadel_core::address::Address;
use citadel_core::api::{CallOutcome, CallRequest};
use citadel_core::contract::ContractKind;
use citadel_core::value::FieldValue;
use citadel_harness::deploy::{deploy, DeployOptions};
use citadel_harness::errors::{PermitError, ReadError};
use citadel_harness::fund::ensure_funded;
use citadel_harness::permit::create_permit;
use citadel_harness::read::read_field;

async fn two_deployments(
    node: &common::TestNode,
    ctx: &citadel_harness::NetworkContext,
) -> (Address, Address) {
    ensure_funded(ctx).await.unwrap();
    let fresh = DeployOptions {
        skip_if_already_deployed: false,
    };
    let first = deploy(ctx, ContractKind::KingOfTheCastle, vec![], fresh)
        .await
        .unwrap();
    let second = deploy(ctx, ContractKind::KingOfTheCastle, vec![], fresh)
        .await
        .unwrap();
    assert_eq!(node.counters().await.deployments_submitted, 2);
    (first.address, second.address)
}

#[tokio::test]
async fn permit_reads_only_the_contract_it_names() {
    let node = common::spawn_node("localfhenix").await;
    let dir = tempfile::tempdir().unwrap();
    let ctx = node.context("localfhenix", 0, &dir.path().join("deployments.json"));
    let (castle_a, castle_b) = two_deployments(&node, &ctx).await;

    let permit = create_permit(&ctx, castle_a).await.unwrap();
    assert_eq!(permit.bearer(), ctx.signer().address());
    assert_eq!(permit.contract(), castle_a);

    let value = read_field(
        &ctx,
        ContractKind::KingOfTheCastle,
        castle_a,
        "getPlayerCount",
        Some(&permit),
    )
    .await
    .unwrap();
    assert_eq!(value, FieldValue::Uint(1));

    let err = read_field(
        &ctx,
        ContractKind::KingOfTheCastle,
        castle_b,
        "getPlayerCount",
        Some(&permit),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ReadError::ScopeMismatch), "got {err:?}");
}

#[tokio::test]
async fn node_refuses_a_permission_for_another_contract() {
    let node = common::spawn_node("localfhenix").await;
    let dir = tempfile::tempdir().unwrap();
    let ctx = node.context("localfhenix", 0, &dir.path().join("deployments.json"));
    let (castle_a, castle_b) = two_deployments(&node, &ctx).await;

    let permit = create_permit(&ctx, castle_a).await.unwrap();

    // Bypass the client-side scope check and present the permission
    // straight to the node.
    let err = ctx
        .provider()
        .call(&CallRequest {
            contract: castle_b,
            accessor: "getPlayerCount".into(),
            permission: Some(permit.permission().clone()),
        })
        .await
        .unwrap_err();
    assert_eq!(err.api_code(), Some("permission_scope"));
    assert_eq!(node.counters().await.sealed_reads, 0);
}

#[tokio::test]
async fn permit_for_an_undeployed_contract_is_refused() {
    let node = common::spawn_node("localfhenix").await;
    let dir = tempfile::tempdir().unwrap();
    let ctx = node.context("localfhenix", 0, &dir.path().join("deployments.json"));

    let nowhere = Address::for_contract(&ctx.signer().address(), 42);
    let err = create_permit(&ctx, nowhere).await.unwrap_err();
    assert!(
        matches!(err, PermitError::ContractNotFound(a) if a == nowhere),
        "got {err:?}"
    );
}

#[tokio::test]
async fn reissued_permits_carry_interchangeable_key_material() {
    let node = common::spawn_node("localfhenix").await;
    let dir = tempfile::tempdir().unwrap();
    let ctx = node.context("localfhenix", 0, &dir.path().join("deployments.json"));

    ensure_funded(&ctx).await.unwrap();
    let record = deploy(
        &ctx,
        ContractKind::KingOfTheCastle,
        vec![],
        DeployOptions::default(),
    )
    .await
    .unwrap();

    let first = create_permit(&ctx, record.address).await.unwrap();
    let second = create_permit(&ctx, record.address).await.unwrap();

    // A value sealed for the second permit opens with the first: the
    // authority derives, not invents, the key material.
    let outcome = ctx
        .provider()
        .call(&CallRequest {
            contract: record.address,
            accessor: "getCurrentWeather".into(),
            permission: Some(second.permission().clone()),
        })
        .await
        .unwrap();
    let sealed = match outcome {
        CallOutcome::Sealed(sealed) => sealed,
        CallOutcome::Plain(_) => panic!("encrypted field returned in clear"),
    };
    assert_eq!(first.unseal(&sealed).unwrap(), FieldValue::Uint(0));
}

#[tokio::test]
async fn another_bearers_permit_does_not_open_foreign_payloads() {
    let node = common::spawn_node("localfhenix").await;
    let dir = tempfile::tempdir().unwrap();
    let alice = node.context("localfhenix", 0, &dir.path().join("alice.json"));
    let bob = node.context("localfhenix", 1, &dir.path().join("bob.json"));

    ensure_funded(&alice).await.unwrap();
    let record = deploy(
        &alice,
        ContractKind::KingOfTheCastle,
        vec![],
        DeployOptions::default(),
    )
    .await
    .unwrap();

    let alice_permit = create_permit(&alice, record.address).await.unwrap();
    let bob_permit = create_permit(&bob, record.address).await.unwrap();

    // Grab a payload sealed for Alice.
    let outcome = alice
        .provider()
        .call(&CallRequest {
            contract: record.address,
            accessor: "getPlayerCount".into(),
            permission: Some(alice_permit.permission().clone()),
        })
        .await
        .unwrap();
    let sealed_for_alice = match outcome {
        CallOutcome::Sealed(sealed) => sealed,
        CallOutcome::Plain(_) => panic!("encrypted field returned in clear"),
    };

    // Bob's permit covers the same contract but a different bearer.
    let err = bob_permit.unseal(&sealed_for_alice).unwrap_err();
    assert_eq!(err, citadel_core::error::SealError::ScopeMismatch);

    // Bob can still read through his own permit.
    let value = read_field(
        &bob,
        ContractKind::KingOfTheCastle,
        record.address,
        "getPlayerCount",
        Some(&bob_permit),
    )
    .await
    .unwrap();
    assert_eq!(value, FieldValue::Uint(1));
}

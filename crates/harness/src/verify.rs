//! Genesis verification: deploy a fresh instance and prove its state
//! is the expected starting position.

use citadel_core::address::Address;
use citadel_core::contract::{ContractKind, GENESIS_PLAYER_COUNT, GENESIS_WEATHER};
use citadel_core::value::FieldValue;

use crate::context::NetworkContext;
use crate::deploy::{deploy, DeployOptions};
use crate::errors::VerifyError;
use crate::fund::ensure_funded;
use crate::permit::create_permit;
use crate::read::read_field;

#[derive(Debug, Clone)]
pub struct FieldCheck {
    pub accessor: &'static str,
    pub expected: String,
    pub actual: String,
    pub ok: bool,
}

#[derive(Debug)]
pub struct GenesisReport {
    pub contract: Address,
    pub deployer: Address,
    pub checks: Vec<FieldCheck>,
}

impl GenesisReport {
    pub fn all_ok(&self) -> bool {
        self.checks.iter().all(|c| c.ok)
    }

    /// Turn the first failing check into an error.
    pub fn ensure_ok(&self) -> Result<(), VerifyError> {
        match self.checks.iter().find(|c| !c.ok) {
            None => Ok(()),
            Some(check) => Err(VerifyError::GenesisMismatch {
                field: check.accessor,
                expected: check.expected.clone(),
                actual: check.actual.clone(),
            }),
        }
    }
}

/// Fund, deploy, permit, read: the full workflow against a fresh
/// contract instance, ending in a report of its genesis state.
pub async fn run_genesis_verification(ctx: &NetworkContext) -> Result<GenesisReport, VerifyError> {
    ensure_funded(ctx).await?;

    // A genesis check is only meaningful against an untouched
    // instance, so never reuse a recorded deployment here.
    let record = deploy(
        ctx,
        ContractKind::KingOfTheCastle,
        vec![],
        DeployOptions {
            skip_if_already_deployed: false,
        },
    )
    .await?;
    let deployer = ctx.signer().address();
    tracing::info!(contract = %record.address, "verifying genesis state");

    let permit = create_permit(ctx, record.address).await?;

    let contract = ContractKind::KingOfTheCastle;
    let player_count = read_field(
        ctx,
        contract,
        record.address,
        "getPlayerCount",
        Some(&permit),
    )
    .await?;
    let weather = read_field(
        ctx,
        contract,
        record.address,
        "getCurrentWeather",
        Some(&permit),
    )
    .await?;
    let king = read_field(ctx, contract, record.address, "getCurrentKing", None).await?;

    let checks = vec![
        check_uint("getPlayerCount", GENESIS_PLAYER_COUNT, &player_count),
        check_uint("getCurrentWeather", GENESIS_WEATHER, &weather),
        check_address("getCurrentKing", deployer, &king),
    ];
    Ok(GenesisReport {
        contract: record.address,
        deployer,
        checks,
    })
}

fn check_uint(accessor: &'static str, expected: u64, actual: &FieldValue) -> FieldCheck {
    FieldCheck {
        accessor,
        expected: expected.to_string(),
        actual: render(actual),
        ok: actual.as_uint() == Some(expected),
    }
}

fn check_address(accessor: &'static str, expected: Address, actual: &FieldValue) -> FieldCheck {
    FieldCheck {
        accessor,
        expected: expected.to_string(),
        actual: render(actual),
        ok: actual.as_address() == Some(expected),
    }
}

fn render(value: &FieldValue) -> String {
    match value {
        FieldValue::Uint(v) => v.to_string(),
        FieldValue::Addr(a) => a.to_string(),
    }
}

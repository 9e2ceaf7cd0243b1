use citadel_core::contract::ContractKind;
use citadel_harness::deploy::{deploy, DeployOptions};
use citadel_harness::errors::FundingError;
use citadel_harness::fund::{ensure_funded, FundingOutcome};
use citadel_harness::NetworkContext;

pub async fn run(ctx: &NetworkContext, force: bool) -> anyhow::Result<()> {
    // Funding gate first. An unfunded account off the dev network is a
    // hard stop with remediation, not a silent no-op.
    match ensure_funded(ctx).await {
        Ok(FundingOutcome::AlreadyFunded { .. }) => {}
        Ok(FundingOutcome::FaucetRequested { amount }) => {
            println!("faucet requested: {amount} wei for {}", ctx.signer().address());
        }
        Err(err @ FundingError::Unfunded { .. }) => {
            println!("\n❌ UNFUNDED\n");
            println!("{err}\n");
            return Err(err.into());
        }
        Err(err) => return Err(err.into()),
    }

    let record = deploy(
        ctx,
        ContractKind::KingOfTheCastle,
        vec![],
        DeployOptions {
            skip_if_already_deployed: !force,
        },
    )
    .await?;

    println!("game contract: {}", record.address);
    Ok(())
}

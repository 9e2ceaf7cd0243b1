use citadel_harness::fund::{ensure_funded, FundingOutcome};
use citadel_harness::NetworkContext;

pub async fn run(ctx: &NetworkContext) -> anyhow::Result<()> {
    match ensure_funded(ctx).await {
        Ok(FundingOutcome::AlreadyFunded { balance }) => {
            println!("\n✅ FUNDED\n");
            println!("Account: {}", ctx.signer().address());
            println!("Balance: {balance} wei\n");
            Ok(())
        }
        Ok(FundingOutcome::FaucetRequested { amount }) => {
            println!("\n✅ FAUCET REQUESTED\n");
            println!("Account: {}", ctx.signer().address());
            println!("Amount:  {amount} wei\n");
            Ok(())
        }
        Err(err) => {
            println!("\n❌ NOT FUNDED\n");
            println!("{err}\n");
            Err(err.into())
        }
    }
}

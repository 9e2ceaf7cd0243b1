//! Funding gate: every workflow starts by making sure the account can
//! pay for its transactions.

use crate::context::NetworkContext;
use crate::errors::{FundingError, ProviderError};

/// Where to send people whose account is empty on a network without a
/// faucet.
pub const FUNDING_HINT: &str = "https://faucet.fhenix.zone";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FundingOutcome {
    /// Balance was already positive; no faucet request was made.
    AlreadyFunded { balance: u128 },
    /// Balance was zero on the dev network; one faucet request went
    /// out.
    FaucetRequested { amount: u128 },
}

/// Check the signer's balance and, on the dev network only, top up a
/// zero balance from the faucet. Off the dev network a zero balance is
/// an error that tells the operator how to fix it.
pub async fn ensure_funded(ctx: &NetworkContext) -> Result<FundingOutcome, FundingError> {
    let address = ctx.signer().address();
    let balance = ctx.provider().balance(&address).await?;
    if balance > 0 {
        tracing::debug!(%address, balance, "account already funded");
        return Ok(FundingOutcome::AlreadyFunded { balance });
    }

    if !ctx.is_dev_network() {
        return Err(FundingError::Unfunded {
            address,
            network: ctx.network().to_string(),
            hint: FUNDING_HINT,
        });
    }

    // Fire the faucet request and trust the drip to land; the next
    // transaction fails loudly if it did not.
    let grant = ctx
        .provider()
        .request_funding(address)
        .await
        .map_err(|err| match err {
            ProviderError::Api { message, .. } => FundingError::FaucetRejected(message),
            other => FundingError::Rpc(other),
        })?;
    tracing::info!(%address, amount = grant.amount, "requested faucet funding");
    Ok(FundingOutcome::FaucetRequested {
        amount: grant.amount,
    })
}

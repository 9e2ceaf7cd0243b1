use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use citadel_cli::commands::{deploy, fund, verify};
use citadel_core::signer::Signer;
use citadel_harness::provider::NodeProvider;
use citadel_harness::NetworkContext;

#[derive(Parser)]
#[command(name = "citadel")]
#[command(about = "Citadel deployment and verification tool for the confidential castle game", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ConnectionArgs {
    /// Node RPC endpoint.
    #[arg(long, default_value = "http://127.0.0.1:42069")]
    node_url: String,

    /// Target network name.
    #[arg(long, default_value = "localfhenix")]
    network: String,

    /// Deployment registry file.
    #[arg(long, default_value = "deployments.json")]
    registry: PathBuf,

    /// Well-known dev account index, used when no seed is given.
    #[arg(long, default_value_t = 0)]
    account: u32,

    /// Hex-encoded 32-byte signing seed (overrides --account).
    #[arg(long)]
    seed: Option<String>,
}

impl ConnectionArgs {
    fn context(&self) -> anyhow::Result<NetworkContext> {
        let signer = match &self.seed {
            Some(seed) => Signer::from_seed(parse_seed(seed)?),
            None => Signer::dev(self.account),
        };
        Ok(NetworkContext::new(
            self.network.clone(),
            signer,
            NodeProvider::new(self.node_url.clone()),
            self.registry.clone(),
        ))
    }
}

fn parse_seed(raw: &str) -> anyhow::Result<[u8; 32]> {
    let mut seed = [0u8; 32];
    hex::decode_to_slice(raw.trim_start_matches("0x"), &mut seed)
        .map_err(|_| anyhow::anyhow!("seed must be 64 hex digits"))?;
    Ok(seed)
}

#[derive(Subcommand)]
enum Commands {
    /// Check the funding gate, then deploy the game contract.
    Deploy {
        #[command(flatten)]
        connection: ConnectionArgs,

        /// Redeploy even if the registry already records an instance.
        #[arg(long)]
        force: bool,
    },
    /// Check the account's funding gate without deploying anything.
    Fund {
        #[command(flatten)]
        connection: ConnectionArgs,
    },
    /// Deploy a fresh instance and verify its genesis state.
    Verify {
        #[command(flatten)]
        connection: ConnectionArgs,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "citadel=info".into()),
        ))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Deploy { connection, force } => {
            deploy::run(&connection.context()?, force).await
        }
        Commands::Fund { connection } => fund::run(&connection.context()?).await,
        Commands::Verify { connection } => verify::run(&connection.context()?).await,
    }
}

//! FraudGuard - Risk Engine Client
//!
//! # Usage
//!
//! ```bash
//! # Score the default transaction against a local engine
//! fraudguard predict
//!
//! # Score the fixed anomalous sample
//! fraudguard predict --sample anomalous
//!
//! # Print a random legitimate-looking sample
//! fraudguard sample legit --json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use fraudguard_client::api::{predict, sample};
use fraudguard_client::constants;
use fraudguard_client::logic::prediction::EngineConfig;

#[derive(Parser)]
#[command(
    name = "fraudguard",
    version,
    about = "FraudGuard - submit synthetic transactions to a risk engine"
)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Risk engine base URL [default: $RISK_ENGINE_URL, then http://localhost:8000]
    #[arg(long, global = true)]
    engine_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a transaction and show the verdict
    Predict(predict::PredictArgs),

    /// Print a generated transaction
    Sample(sample::SampleArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    setup_logging(cli.verbose);
    tracing::debug!("{} v{} starting", constants::APP_NAME, constants::APP_VERSION);

    match cli.command {
        Commands::Predict(args) => {
            let config = match cli.engine_url {
                Some(url) => EngineConfig::new(url),
                None => EngineConfig::from_env(),
            }
            .context("Cannot configure the risk engine client")?;
            predict::run(args, config).await
        }
        Commands::Sample(args) => sample::run(args),
    }
}

/// Setup logging based on verbosity level; `RUST_LOG` wins when set
fn setup_logging(verbosity: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbosity {
        0 => "warn",
        1 => "fraudguard_client=info",
        2 => "fraudguard_client=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_writer(std::io::stderr)
        .init();
}

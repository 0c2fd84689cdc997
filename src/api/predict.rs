//! Predict command - Submit one transaction to the risk engine
//!
//! Usage:
//! ```bash
//! fraudguard predict
//! fraudguard predict --sample anomalous
//! fraudguard predict --set Amount=129.99 --set V14=-3.2 --json
//! ```

use anyhow::{bail, Context, Result};
use clap::Args;
use tracing::debug;

use super::{render, SampleKind};
use crate::logic::prediction::{EngineConfig, RequestOutcome};
use crate::logic::session::Session;

/// Arguments for the predict command
#[derive(Debug, Args)]
pub struct PredictArgs {
    /// Start from a generated sample instead of the default form
    #[arg(long, value_enum)]
    pub sample: Option<SampleKind>,

    /// Override a field, e.g. `--set Amount=12.50` (repeatable)
    #[arg(long = "set", value_name = "FIELD=VALUE", value_parser = parse_assignment)]
    pub set: Vec<(String, String)>,

    /// Print the outcome as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the predict command
pub async fn run(args: PredictArgs, config: EngineConfig) -> Result<()> {
    debug!(url = %config.predict_url(), "Using risk engine");
    let session = Session::new(config).context("Failed to create risk engine client")?;

    match args.sample {
        Some(SampleKind::Legit) => {
            session.generate_legitimate_sample();
        }
        Some(SampleKind::Anomalous) => {
            session.generate_anomalous_sample();
        }
        None => {}
    }

    for (name, raw) in &args.set {
        session
            .set_field_by_name(name, raw)
            .with_context(|| format!("Rejected --set {}={}", name, raw))?;
    }

    let vector = session.vector();
    if !args.json {
        render::print_vector(&vector);
        println!();
    }

    let mut updates = session.subscribe();
    let request = session.submit();
    if updates.borrow_and_update().is_pending() && !args.json {
        eprintln!("Analyzing risk...");
    }
    let outcome = request.await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        render::print_outcome(&outcome);
    }

    if let RequestOutcome::Failed(reason) = outcome {
        bail!(reason);
    }
    Ok(())
}

fn parse_assignment(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=VALUE, got '{}'", s))?;
    if name.trim().is_empty() {
        return Err(format!("missing field name in '{}'", s));
    }
    Ok((name.trim().to_string(), value.trim().to_string()))
}

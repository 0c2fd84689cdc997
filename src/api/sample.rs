//! Sample command - Print a generated transaction
//!
//! Usage:
//! ```bash
//! fraudguard sample legit
//! fraudguard sample anomalous --json
//! ```

use anyhow::Result;
use clap::Args;

use super::{render, SampleKind};
use crate::logic::transaction::{FeatureVector, TransactionForm};

/// Arguments for the sample command
#[derive(Debug, Args)]
pub struct SampleArgs {
    /// Generator to use
    #[arg(value_enum)]
    pub kind: SampleKind,

    /// Print the wire JSON body instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Run the sample command
pub fn run(args: SampleArgs) -> Result<()> {
    let vector = generate(args.kind);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&vector)?);
    } else {
        render::print_vector(&vector);
    }
    Ok(())
}

pub fn generate(kind: SampleKind) -> FeatureVector {
    let mut form = TransactionForm::new();
    match kind {
        SampleKind::Legit => form.generate_legitimate_sample(),
        SampleKind::Anomalous => form.generate_anomalous_sample(),
    }
}

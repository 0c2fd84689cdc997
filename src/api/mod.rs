//! API Module - Operator command surface
//!
//! Structure:
//! - predict.rs: build a transaction, submit it, render the verdict
//! - sample.rs: print a generated transaction
//! - render.rs: terminal rendering shared by both

pub mod predict;
pub mod render;
pub mod sample;

use clap::ValueEnum;

/// Which synthetic generator to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SampleKind {
    /// Legitimate-looking random draw
    Legit,
    /// Fixed vector known to score as fraud
    Anomalous,
}

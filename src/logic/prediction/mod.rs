//! Prediction Module - Client side of the risk engine contract
//!
//! This module handles:
//! - Decoding and validating the engine's Assessment
//! - The single `POST /predict` call
//! - The NotStarted -> Pending -> Succeeded/Failed lifecycle

pub mod assessment;
pub mod engine;
pub mod lifecycle;
pub mod outcome;


pub use assessment::{Assessment, AssessmentDetails};
pub use engine::{EngineConfig, RiskEngineClient};
pub use lifecycle::PredictionClient;
pub use outcome::RequestOutcome;

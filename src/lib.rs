//! FraudGuard Client Library
//!
//! Submit a synthetic transaction to a remote risk engine and interpret the
//! verdict. The engine itself is external; this crate owns the data model,
//! the request lifecycle and the response contract.

pub mod api;
pub mod constants;
pub mod error;
pub mod logic;

pub use error::{ContractError, EngineError, TransportError, ValidationError};
pub use logic::prediction::{Assessment, EngineConfig, PredictionClient, RequestOutcome};
pub use logic::report::{RiskReport, Verdict};
pub use logic::session::Session;
pub use logic::transaction::{Component, FeatureVector, Field, TransactionForm};

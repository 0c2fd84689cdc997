//! Error handling
//!
//! Three families of failure exist on the client side:
//! - `ValidationError`: operator input rejected at the form boundary
//! - `TransportError`: the risk engine could not be reached or answered non-2xx
//! - `ContractError`: the engine answered 2xx but the body is not an Assessment
//!
//! Engine failures collapse to `RequestOutcome::Failed(reason)`; only
//! `EngineError::reason()` ever reaches the presentation layer.

use std::time::Duration;
use thiserror::Error;

use crate::logic::transaction::Field;

pub type EngineResult<T> = Result<T, EngineError>;

/// Operator input that would corrupt the feature vector
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("unknown field '{0}'")]
    UnknownField(String),

    #[error("{field}: '{raw}' is not a number")]
    NotANumber { field: Field, raw: String },

    #[error("{field}: value must be finite")]
    NotFinite { field: Field },

    #[error("{field}: value must not be negative (got {value})")]
    Negative { field: Field, value: f64 },

    #[error("{field}: value must be a whole number (got {value})")]
    NotWholeNumber { field: Field, value: f64 },

    #[error("{field}: value is too large (got {value})")]
    OutOfRange { field: Field, value: f64 },
}

/// Failures talking to the risk engine
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    #[error("risk engine unreachable: {0}")]
    Unreachable(String),

    #[error("risk engine timed out after {0:?}")]
    Timeout(Duration),

    #[error("risk engine returned HTTP {status}")]
    Status { status: u16, body: String },

    #[error("failed to build HTTP client: {0}")]
    Client(String),

    #[error("invalid risk engine URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

/// 2xx response that does not satisfy the Assessment contract
#[derive(Debug, Clone, Error)]
pub enum ContractError {
    #[error("malformed assessment: {0}")]
    Malformed(String),

    #[error("{field} out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },
}

#[derive(Debug, Clone, Error)]
pub enum EngineError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Contract(#[from] ContractError),
}

impl EngineError {
    /// Short operator-facing sentence. Never includes transport internals.
    pub fn reason(&self) -> String {
        match self {
            EngineError::Transport(TransportError::Unreachable(_)) => {
                "Unable to reach the risk engine. Is the backend running?".to_string()
            }
            EngineError::Transport(TransportError::Timeout(timeout)) => format!(
                "The risk engine did not respond within {}s.",
                timeout.as_secs_f64()
            ),
            EngineError::Transport(TransportError::Status { status, .. }) => {
                format!("The risk engine rejected the request (HTTP {}).", status)
            }
            EngineError::Transport(TransportError::Client(_)) => {
                "The risk engine client could not be initialised.".to_string()
            }
            EngineError::Transport(TransportError::InvalidBaseUrl { .. }) => {
                "The risk engine address is not a valid http(s) URL.".to_string()
            }
            EngineError::Contract(_) => {
                "The risk engine returned an incomplete assessment.".to_string()
            }
        }
    }
}

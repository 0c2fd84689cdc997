//! Request Outcome - lifecycle of the last submission

use serde::Serialize;

use super::assessment::Assessment;

/// Exactly one variant holds at any time. This is what the presentation
/// layer renders.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum RequestOutcome {
    #[default]
    NotStarted,
    Pending,
    Succeeded(Assessment),
    Failed(String),
}

impl RequestOutcome {
    pub fn is_pending(&self) -> bool {
        matches!(self, RequestOutcome::Pending)
    }

    /// Succeeded or Failed
    pub fn is_terminal(&self) -> bool {
        matches!(self, RequestOutcome::Succeeded(_) | RequestOutcome::Failed(_))
    }

    pub fn assessment(&self) -> Option<&Assessment> {
        match self {
            RequestOutcome::Succeeded(assessment) => Some(assessment),
            _ => None,
        }
    }

    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            RequestOutcome::Failed(reason) => Some(reason),
            _ => None,
        }
    }

    /// Label for logs
    pub fn state_name(&self) -> &'static str {
        match self {
            RequestOutcome::NotStarted => "not_started",
            RequestOutcome::Pending => "pending",
            RequestOutcome::Succeeded(_) => "succeeded",
            RequestOutcome::Failed(_) => "failed",
        }
    }
}

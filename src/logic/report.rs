//! Risk Report - display-ready interpretation of an Assessment
//!
//! Probabilities are shown as `value * 100`, never re-normalized.

use serde::Serialize;
use std::fmt;

use super::prediction::Assessment;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    Flagged,
    Approved,
}

impl Verdict {
    pub fn summary(self) -> &'static str {
        match self {
            Verdict::Flagged => {
                "This transaction exhibits strong statistical anomalies consistent with known fraud patterns."
            }
            Verdict::Approved => "This transaction falls within normal behavioral parameters.",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Flagged => f.write_str("Flagged"),
            Verdict::Approved => f.write_str("Approved"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskReport {
    pub verdict: Verdict,
    /// `"{risk_level} Risk"`
    pub badge: String,
    pub summary: &'static str,
    /// Fraud probability in percent
    pub score: f64,
    /// Classifier score in percent
    pub pattern_match: f64,
    /// Raw anomaly score
    pub outlier_index: f64,
    pub normalized_anomaly: Option<f64>,
}

impl RiskReport {
    pub fn score_label(&self) -> String {
        format!("{:.1}", self.score)
    }

    pub fn pattern_match_label(&self) -> String {
        format!("{:.2}%", self.pattern_match)
    }

    pub fn outlier_index_label(&self) -> String {
        format!("{:.4}", self.outlier_index)
    }
}

impl From<&Assessment> for RiskReport {
    fn from(assessment: &Assessment) -> Self {
        let verdict = if assessment.is_fraud {
            Verdict::Flagged
        } else {
            Verdict::Approved
        };

        Self {
            verdict,
            badge: format!("{} Risk", assessment.risk_level),
            summary: verdict.summary(),
            score: assessment.fraud_percent(),
            pattern_match: assessment.classifier_percent(),
            outlier_index: assessment.details.anomaly_score,
            normalized_anomaly: assessment.details.normalized_anomaly,
        }
    }
}

//! Risk Engine Client
//!
//! HTTP client for the external risk engine's `POST /predict` endpoint.

use std::time::Duration;
use tracing::{debug, warn};

use super::assessment::Assessment;
use crate::constants;
use crate::error::{EngineResult, TransportError};
use crate::logic::transaction::FeatureVector;

/// Risk engine configuration
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl EngineConfig {
    /// Validated base address: trimmed, no trailing slash, http(s) only
    pub fn new(base_url: impl Into<String>) -> Result<Self, TransportError> {
        let raw = base_url.into();
        let base_url = raw.trim().trim_end_matches('/').to_string();

        let invalid = |reason: &str| TransportError::InvalidBaseUrl {
            url: raw.clone(),
            reason: reason.to_string(),
        };
        if base_url.is_empty() {
            return Err(invalid("empty address"));
        }
        let parsed = reqwest::Url::parse(&base_url).map_err(|e| invalid(&e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
            return Err(invalid("expected http(s)://host[:port]"));
        }

        Ok(Self {
            base_url,
            timeout: Duration::from_secs(constants::DEFAULT_REQUEST_TIMEOUT_SECS),
        })
    }

    /// `RISK_ENGINE_URL`, or the default address when unset or blank
    pub fn from_env() -> Result<Self, TransportError> {
        Self::new(constants::get_engine_url())
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn predict_url(&self) -> String {
        format!("{}{}", self.base_url, constants::PREDICT_PATH)
    }
}

/// Thin wrapper over `reqwest::Client`, one call per prediction
#[derive(Debug, Clone)]
pub struct RiskEngineClient {
    config: EngineConfig,
    http_client: reqwest::Client,
}

impl RiskEngineClient {
    pub fn new(config: EngineConfig) -> Result<Self, TransportError> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| TransportError::Client(e.to_string()))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Score one transaction
    pub async fn predict(&self, vector: &FeatureVector) -> EngineResult<Assessment> {
        let url = self.config.predict_url();
        debug!(url = %url, time = vector.time(), amount = vector.amount(), "Sending prediction request");

        let response = self
            .http_client
            .post(&url)
            .json(vector)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), body = %body, "Risk engine returned an error status");
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let body = response.bytes().await.map_err(|e| self.transport_error(e))?;
        let assessment = Assessment::from_body(&body).map_err(|e| {
            warn!(error = %e, "Risk engine response violates the assessment contract");
            e
        })?;

        debug!(
            is_fraud = assessment.is_fraud,
            risk_level = %assessment.risk_level,
            fraud_probability = assessment.fraud_probability,
            "Assessment received"
        );
        Ok(assessment)
    }

    fn transport_error(&self, err: reqwest::Error) -> TransportError {
        if err.is_timeout() {
            TransportError::Timeout(self.config.timeout)
        } else {
            TransportError::Unreachable(err.to_string())
        }
    }
}

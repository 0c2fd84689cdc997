//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! To change the default risk engine address, only edit this file.

/// Default risk engine URL
///
/// Fallback when `RISK_ENGINE_URL` is not set.
/// The reference engine listens on port 8000.
pub const DEFAULT_ENGINE_URL: &str = "http://localhost:8000";

/// Environment variable holding the risk engine base address
pub const ENGINE_URL_ENV: &str = "RISK_ENGINE_URL";

/// Per-request timeout (seconds)
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Prediction route on the risk engine
pub const PREDICT_PATH: &str = "/predict";

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "FraudGuard";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get risk engine URL from environment or use default
pub fn get_engine_url() -> String {
    engine_url_or_default(std::env::var(ENGINE_URL_ENV).ok())
}

/// Unset or blank values fall back to `DEFAULT_ENGINE_URL`
pub(crate) fn engine_url_or_default(raw: Option<String>) -> String {
    raw.map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_ENGINE_URL.to_string())
}

//! In-process stub risk engine for lifecycle tests

use axum::{http::StatusCode, routing::post, Json, Router};
use serde_json::{json, Value};
use std::time::Duration;

use crate::logic::prediction::{EngineConfig, PredictionClient};

/// Serve `app` on an ephemeral port, returning its base URL
pub(crate) async fn spawn_engine(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Engine answering every prediction with the same status and body
pub(crate) fn fixed_engine(status: StatusCode, body: Value) -> Router {
    Router::new().route(
        "/predict",
        post(move || {
            let body = body.clone();
            async move { (status, Json(body)) }
        }),
    )
}

/// Engine that waits `delay` before answering with a low-risk verdict
pub(crate) fn slow_engine(delay: Duration) -> Router {
    Router::new().route(
        "/predict",
        post(move || async move {
            tokio::time::sleep(delay).await;
            Json(low_risk_body())
        }),
    )
}

/// Address nothing listens on
pub(crate) fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

pub(crate) fn client_for(url: &str) -> PredictionClient {
    let config = EngineConfig::new(url)
        .unwrap()
        .with_timeout(Duration::from_secs(2));
    PredictionClient::new(config).unwrap()
}

pub(crate) fn low_risk_body() -> Value {
    json!({
        "is_fraud": false,
        "risk_level": "Low",
        "fraud_probability": 0.01,
        "details": {"classifier_score": 0.02, "anomaly_score": 0.15}
    })
}

pub(crate) fn flagged_body() -> Value {
    json!({
        "is_fraud": true,
        "risk_level": "CRITICAL",
        "fraud_probability": 0.93,
        "details": {"classifier_score": 0.97, "anomaly_score": 0.0412, "normalized_anomaly": 1.0}
    })
}

//! Session - single owner of the form and the prediction state
//!
//! The presentation layer reads snapshots or subscribes; it never holds the
//! state itself. Regenerating or resetting the form clears the outcome, and
//! any request still in flight is discarded.

use parking_lot::RwLock;
use std::future::Future;
use tokio::sync::watch;
use tracing::info;

use super::prediction::{EngineConfig, PredictionClient, RequestOutcome};
use super::transaction::{FeatureVector, Field, TransactionForm};
use crate::error::{TransportError, ValidationError};

pub struct Session {
    form: RwLock<TransactionForm>,
    client: PredictionClient,
}

impl Session {
    pub fn new(config: EngineConfig) -> Result<Self, TransportError> {
        Ok(Self::with_client(PredictionClient::new(config)?))
    }

    pub fn with_client(client: PredictionClient) -> Self {
        Self {
            form: RwLock::new(TransactionForm::new()),
            client,
        }
    }

    pub fn vector(&self) -> FeatureVector {
        self.form.read().snapshot()
    }

    pub fn outcome(&self) -> RequestOutcome {
        self.client.outcome()
    }

    pub fn subscribe(&self) -> watch::Receiver<RequestOutcome> {
        self.client.subscribe()
    }

    pub fn set_field(&self, field: Field, raw: &str) -> Result<FeatureVector, ValidationError> {
        self.form.write().set_field(field, raw)
    }

    pub fn set_field_by_name(&self, name: &str, raw: &str) -> Result<FeatureVector, ValidationError> {
        self.form.write().set_field_by_name(name, raw)
    }

    pub fn generate_legitimate_sample(&self) -> FeatureVector {
        let vector = self.form.write().generate_legitimate_sample();
        self.client.reset();
        info!(time = vector.time(), amount = vector.amount(), "Legitimate sample generated");
        vector
    }

    pub fn generate_anomalous_sample(&self) -> FeatureVector {
        let vector = self.form.write().generate_anomalous_sample();
        self.client.reset();
        info!(time = vector.time(), "Anomalous sample generated");
        vector
    }

    pub fn reset(&self) -> FeatureVector {
        let vector = self.form.write().reset();
        self.client.reset();
        vector
    }

    /// Freeze the current vector and submit it. `Pending` is visible as soon
    /// as this returns.
    pub fn submit(&self) -> impl Future<Output = RequestOutcome> + Send + '_ {
        let snapshot = self.vector();
        self.client.submit(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::test_support::{client_for, fixed_engine, low_risk_body, slow_engine, spawn_engine};
    use crate::logic::transaction::{Component, ANOMALOUS_COMPONENTS};
    use axum::http::StatusCode;
    use std::time::Duration;

    #[tokio::test]
    async fn test_generation_clears_outcome() {
        let url = spawn_engine(fixed_engine(StatusCode::OK, low_risk_body())).await;
        let session = Session::with_client(client_for(&url));

        let outcome = session.submit().await;
        assert!(outcome.assessment().is_some());
        assert_eq!(session.outcome(), outcome);

        session.generate_legitimate_sample();
        assert_eq!(session.outcome(), RequestOutcome::NotStarted);

        session.submit().await;
        session.generate_anomalous_sample();
        assert_eq!(session.outcome(), RequestOutcome::NotStarted);
        assert_eq!(*session.vector().components(), ANOMALOUS_COMPONENTS);
    }

    #[tokio::test]
    async fn test_regeneration_while_pending() {
        let url = spawn_engine(slow_engine(Duration::from_millis(200))).await;
        let session = Session::with_client(client_for(&url));

        let request = session.submit();
        assert!(session.outcome().is_pending());
        session.generate_anomalous_sample();
        request.await;

        assert_eq!(session.outcome(), RequestOutcome::NotStarted);
    }

    #[tokio::test]
    async fn test_submit_freezes_snapshot() {
        let url = spawn_engine(slow_engine(Duration::from_millis(50))).await;
        let session = Session::with_client(client_for(&url));

        let request = session.submit();
        session
            .set_field(Field::Component(Component::V4), "2.5")
            .unwrap();
        let outcome = request.await;

        // edits do not reset the outcome
        assert_eq!(session.outcome(), outcome);
        assert_eq!(session.vector().component(Component::V4), 2.5);
    }

    #[test]
    fn test_rejected_edit_reports_error() {
        let session = Session::with_client(client_for("http://127.0.0.1:9"));
        let before = session.vector();

        assert!(session.set_field_by_name("Amount", "1,000").is_err());
        assert_eq!(session.vector(), before);
    }
}

//! Prediction Lifecycle
//!
//! Drives the `RequestOutcome` cell for one in-flight request at a time.
//!
//! Concurrency policy: latest submission wins. Every submission (and every
//! reset) takes a new ticket; a response is published only if its ticket is
//! still current when it arrives. Ticket bump and cell write happen inside
//! the watch channel's write lock, so observers can never see a stale
//! terminal state after a newer `Pending`.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::engine::{EngineConfig, RiskEngineClient};
use super::outcome::RequestOutcome;
use crate::error::TransportError;
use crate::logic::transaction::FeatureVector;

pub struct PredictionClient {
    engine: RiskEngineClient,
    state: watch::Sender<RequestOutcome>,
    ticket: AtomicU64,
}

impl PredictionClient {
    pub fn new(config: EngineConfig) -> Result<Self, TransportError> {
        Ok(Self::with_engine(RiskEngineClient::new(config)?))
    }

    pub fn with_engine(engine: RiskEngineClient) -> Self {
        let (state, _) = watch::channel(RequestOutcome::NotStarted);
        Self {
            engine,
            state,
            ticket: AtomicU64::new(0),
        }
    }

    /// Current outcome snapshot
    pub fn outcome(&self) -> RequestOutcome {
        self.state.borrow().clone()
    }

    /// Receiver that observes every published transition
    pub fn subscribe(&self) -> watch::Receiver<RequestOutcome> {
        self.state.subscribe()
    }

    /// Submit a frozen vector.
    ///
    /// `Pending` is published before this returns, i.e. before the future
    /// is first polled. The future resolves to this submission's outcome;
    /// if a newer submission or a reset happened meanwhile, that outcome is
    /// returned but not published.
    pub fn submit(&self, vector: FeatureVector) -> impl Future<Output = RequestOutcome> + Send + '_ {
        let ticket = self.advance(RequestOutcome::Pending);
        info!(ticket, "Submitting transaction to risk engine");

        async move {
            let outcome = match self.engine.predict(&vector).await {
                Ok(assessment) => {
                    info!(
                        ticket,
                        is_fraud = assessment.is_fraud,
                        risk_level = %assessment.risk_level,
                        "Prediction succeeded"
                    );
                    RequestOutcome::Succeeded(assessment)
                }
                Err(e) => {
                    warn!(ticket, error = %e, "Prediction failed");
                    RequestOutcome::Failed(e.reason())
                }
            };

            self.publish(ticket, outcome.clone());
            outcome
        }
    }

    /// Back to `NotStarted`, discarding any in-flight result
    pub fn reset(&self) {
        let next = RequestOutcome::NotStarted;
        let state_name = next.state_name();
        let ticket = self.advance(next);
        debug!(ticket, state = state_name, "Prediction state reset");
    }

    fn advance(&self, next: RequestOutcome) -> u64 {
        let mut ticket = 0;
        self.state.send_modify(|state| {
            ticket = self.ticket.fetch_add(1, Ordering::SeqCst) + 1;
            *state = next;
        });
        ticket
    }

    fn publish(&self, ticket: u64, outcome: RequestOutcome) {
        let state_name = outcome.state_name();
        let published = self.state.send_if_modified(|state| {
            if self.ticket.load(Ordering::SeqCst) == ticket {
                *state = outcome;
                true
            } else {
                false
            }
        });

        if published {
            debug!(ticket, state = state_name, "Prediction outcome published");
        } else {
            debug!(ticket, state = state_name, "Discarding superseded prediction result");
        }
    }
}

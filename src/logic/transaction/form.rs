//! Transaction Form
//!
//! Holds the vector being edited and produces synthetic samples.

use rand::Rng;
use tracing::debug;

use super::layout::{Field, COMPONENT_COUNT};
use super::vector::FeatureVector;
use crate::error::ValidationError;

/// Upper bound (exclusive) for generated `time` values
pub const SAMPLE_TIME_RANGE: u64 = 100_000;

/// Upper bound (exclusive) for generated legitimate amounts
pub const SAMPLE_AMOUNT_RANGE: f64 = 1000.0;

/// Component values known to score as fraud on the reference model.
///
/// Layout order: `V4, V10, V11, V12, V14, V17`. Used for the anomalous
/// sample, which pairs these with a zero amount.
pub const ANOMALOUS_COMPONENTS: [f64; COMPONENT_COUNT] = [6.5, -5.2, 4.1, -8.5, -9.1, -10.5];

/// Amount paired with `ANOMALOUS_COMPONENTS`
pub const ANOMALOUS_AMOUNT: f64 = 0.00;

#[derive(Debug, Clone, Default)]
pub struct TransactionForm {
    vector: FeatureVector,
}

impl TransactionForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vector(&self) -> &FeatureVector {
        &self.vector
    }

    /// Frozen copy handed to the prediction client
    pub fn snapshot(&self) -> FeatureVector {
        self.vector
    }

    /// Edit one field. On rejection the form keeps its prior valid vector.
    pub fn set_field(&mut self, field: Field, raw: &str) -> Result<FeatureVector, ValidationError> {
        let next = self.vector.with_field(field, raw)?;
        debug!(field = %field, value = next.get(field), "Form field updated");
        self.vector = next;
        Ok(next)
    }

    pub fn set_field_by_name(&mut self, name: &str, raw: &str) -> Result<FeatureVector, ValidationError> {
        let field: Field = name.parse()?;
        self.set_field(field, raw)
    }

    pub fn generate_legitimate_sample(&mut self) -> FeatureVector {
        self.generate_legitimate_sample_with(&mut rand::thread_rng())
    }

    /// Uniform draw in the legitimate-looking region, rounded to 2 decimals
    pub fn generate_legitimate_sample_with<R: Rng>(&mut self, rng: &mut R) -> FeatureVector {
        let mut components = [0.0; COMPONENT_COUNT];
        for value in components.iter_mut() {
            *value = round2(rng.gen_range(-1.0..1.0));
        }

        self.vector = FeatureVector::new_unchecked(
            rng.gen_range(0..SAMPLE_TIME_RANGE),
            round2(rng.gen_range(0.0..SAMPLE_AMOUNT_RANGE)),
            components,
        );
        self.vector
    }

    pub fn generate_anomalous_sample(&mut self) -> FeatureVector {
        self.generate_anomalous_sample_with(&mut rand::thread_rng())
    }

    /// Only `time` is random; amount and components are the fixed fixture
    pub fn generate_anomalous_sample_with<R: Rng>(&mut self, rng: &mut R) -> FeatureVector {
        self.vector = FeatureVector::new_unchecked(
            rng.gen_range(0..SAMPLE_TIME_RANGE),
            ANOMALOUS_AMOUNT,
            ANOMALOUS_COMPONENTS,
        );
        self.vector
    }

    pub fn reset(&mut self) -> FeatureVector {
        self.vector = FeatureVector::default();
        self.vector
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

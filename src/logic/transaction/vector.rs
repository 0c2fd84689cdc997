//! Feature Vector - The transaction under evaluation
//!
//! Components live in a fixed-size array indexed by `Component`, so the
//! key set can never grow or shrink. On the wire the vector is flattened to
//! `{"Time", "Amount", "V4", ..., "V17"}`.
//!
//! Fields are private: every public way to obtain a vector (`new`,
//! `with_field`, deserialization) rejects non-finite values and negative
//! `amount`, so a vector that exists is always safe to send.

use serde::{Deserialize, Serialize};

use super::layout::{Component, Field, COMPONENT_COUNT};
use crate::error::ValidationError;

/// Amount shown in a fresh form
pub const DEFAULT_AMOUNT: f64 = 2500.00;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "WireTransaction", try_from = "WireTransaction")]
pub struct FeatureVector {
    time: u64,
    amount: f64,
    components: [f64; COMPONENT_COUNT],
}

impl FeatureVector {
    /// Validated constructor
    pub fn new(
        time: u64,
        amount: f64,
        components: [f64; COMPONENT_COUNT],
    ) -> Result<Self, ValidationError> {
        check_value(Field::Amount, amount)?;
        for component in Component::ALL {
            check_value(Field::Component(component), components[component.index()])?;
        }
        Ok(Self::new_unchecked(time, amount, components))
    }

    /// For values already known to be valid (generators, fixtures)
    pub(crate) fn new_unchecked(time: u64, amount: f64, components: [f64; COMPONENT_COUNT]) -> Self {
        Self {
            time,
            amount,
            components,
        }
    }

    /// Seconds since the reference epoch
    pub fn time(&self) -> u64 {
        self.time
    }

    /// Transaction amount, 2 decimals of meaning
    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn component(&self, component: Component) -> f64 {
        self.components[component.index()]
    }

    /// Values in `COMPONENT_LAYOUT` order
    pub fn components(&self) -> &[f64; COMPONENT_COUNT] {
        &self.components
    }

    /// `(component, value)` pairs in layout order
    pub fn iter_components(&self) -> impl Iterator<Item = (Component, f64)> + '_ {
        Component::ALL.into_iter().map(|c| (c, self.component(c)))
    }

    /// Numeric value of any field, `time` widened to `f64`
    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::Time => self.time as f64,
            Field::Amount => self.amount,
            Field::Component(c) => self.component(c),
        }
    }

    /// Parse `raw` for `field` and return a new vector with only that field
    /// replaced. `self` is never touched, so a rejected edit keeps the prior
    /// valid value.
    pub fn with_field(&self, field: Field, raw: &str) -> Result<FeatureVector, ValidationError> {
        let value: f64 = raw.trim().parse().map_err(|_| ValidationError::NotANumber {
            field,
            raw: raw.to_string(),
        })?;
        check_value(field, value)?;

        let mut next = *self;
        match field {
            Field::Time => {
                if value.fract() != 0.0 {
                    return Err(ValidationError::NotWholeNumber { field, value });
                }
                // 2^64 and above do not fit
                if value >= u64::MAX as f64 {
                    return Err(ValidationError::OutOfRange { field, value });
                }
                next.time = value as u64;
            }
            Field::Amount => next.amount = value,
            Field::Component(c) => next.components[c.index()] = value,
        }
        Ok(next)
    }
}

/// Finite everywhere, non-negative for `time` and `amount`
fn check_value(field: Field, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite { field });
    }
    if matches!(field, Field::Time | Field::Amount) && value < 0.0 {
        return Err(ValidationError::Negative { field, value });
    }
    Ok(())
}

impl Default for FeatureVector {
    fn default() -> Self {
        Self::new_unchecked(0, DEFAULT_AMOUNT, [0.0; COMPONENT_COUNT])
    }
}

// ============================================================================
// WIRE FORMAT
// ============================================================================

/// Flattened JSON body expected by `POST /predict`
#[derive(Debug, Clone, Serialize, Deserialize)]
struct WireTransaction {
    #[serde(rename = "Time")]
    time: u64,
    #[serde(rename = "Amount")]
    amount: f64,
    #[serde(rename = "V4")]
    v4: f64,
    #[serde(rename = "V10")]
    v10: f64,
    #[serde(rename = "V11")]
    v11: f64,
    #[serde(rename = "V12")]
    v12: f64,
    #[serde(rename = "V14")]
    v14: f64,
    #[serde(rename = "V17")]
    v17: f64,
}

impl From<FeatureVector> for WireTransaction {
    fn from(vector: FeatureVector) -> Self {
        let [v4, v10, v11, v12, v14, v17] = vector.components;
        Self {
            time: vector.time,
            amount: vector.amount,
            v4,
            v10,
            v11,
            v12,
            v14,
            v17,
        }
    }
}

impl TryFrom<WireTransaction> for FeatureVector {
    type Error = ValidationError;

    fn try_from(wire: WireTransaction) -> Result<Self, Self::Error> {
        Self::new(
            wire.time,
            wire.amount,
            [wire.v4, wire.v10, wire.v11, wire.v12, wire.v14, wire.v17],
        )
    }
}

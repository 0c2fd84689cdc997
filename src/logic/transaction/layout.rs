//! Component Layout - Centralized Feature Definition
//!
//! **This file controls the transaction schema sent to the risk engine.**
//!
//! The engine reads exactly six principal components next to `Time` and
//! `Amount`. The order below is the storage order inside `FeatureVector`;
//! the wire format is keyed by name, so reordering is safe, but adding or
//! removing a component changes the contract with the engine.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

// ============================================================================
// COMPONENT LAYOUT (Authoritative source)
// ============================================================================

/// Number of principal components in a transaction
pub const COMPONENT_COUNT: usize = 6;

/// Component names in the order they are stored
pub const COMPONENT_LAYOUT: [&str; COMPONENT_COUNT] = ["V4", "V10", "V11", "V12", "V14", "V17"];

/// One of the six principal components the risk engine scores on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Component {
    V4,
    V10,
    V11,
    V12,
    V14,
    V17,
}

impl Component {
    pub const ALL: [Component; COMPONENT_COUNT] = [
        Component::V4,
        Component::V10,
        Component::V11,
        Component::V12,
        Component::V14,
        Component::V17,
    ];

    /// Storage index inside `FeatureVector`
    pub fn index(self) -> usize {
        match self {
            Component::V4 => 0,
            Component::V10 => 1,
            Component::V11 => 2,
            Component::V12 => 3,
            Component::V14 => 4,
            Component::V17 => 5,
        }
    }

    /// Wire name (`"V4"`, `"V10"`, ...)
    pub fn name(self) -> &'static str {
        COMPONENT_LAYOUT[self.index()]
    }

    /// Lookup by wire name, case-insensitive
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// EDITABLE FIELDS
// ============================================================================

/// Any single editable field of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Time,
    Amount,
    Component(Component),
}

impl Field {
    /// All editable fields, in form order
    pub fn all() -> impl Iterator<Item = Field> {
        [Field::Time, Field::Amount]
            .into_iter()
            .chain(Component::ALL.into_iter().map(Field::Component))
    }

    pub fn name(self) -> &'static str {
        match self {
            Field::Time => "Time",
            Field::Amount => "Amount",
            Field::Component(c) => c.name(),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.eq_ignore_ascii_case("time") {
            Ok(Field::Time)
        } else if name.eq_ignore_ascii_case("amount") {
            Ok(Field::Amount)
        } else {
            Component::from_name(name)
                .map(Field::Component)
                .ok_or_else(|| ValidationError::UnknownField(s.to_string()))
        }
    }
}

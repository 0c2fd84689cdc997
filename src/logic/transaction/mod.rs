//! Transaction Module - Data model for the risk engine input
//!
//! - `layout` - Component set and editable fields
//! - `vector` - `FeatureVector` and its wire format
//! - `form` - Editable form state and synthetic sample generators

pub mod form;
pub mod layout;
pub mod vector;


pub use form::{TransactionForm, ANOMALOUS_AMOUNT, ANOMALOUS_COMPONENTS};
pub use layout::{Component, Field, COMPONENT_COUNT, COMPONENT_LAYOUT};
pub use vector::{FeatureVector, DEFAULT_AMOUNT};

//! Logic Module - Client workflow
//!
//! - `transaction/` - Feature vector, form, sample generators
//! - `prediction/` - Risk engine client and request lifecycle
//! - `session` - Coordinator owning form + outcome
//! - `report` - Display-ready view of an Assessment

pub mod prediction;
pub mod report;
pub mod session;
pub mod transaction;

#[cfg(test)]
pub(crate) mod test_support;

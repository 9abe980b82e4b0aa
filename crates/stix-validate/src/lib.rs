//! # stix-validate
//!
//! Fail-slow validation of decoded STIX objects. A successful decode says
//! nothing about completeness; callers ask for a [`ValidationReport`]
//! explicitly and get every defect from one pass.
//!
//! - [`validate_envelope`]: presence of the five required envelope
//!   properties.
//! - [`validate_envelope_strict`]: the above plus identifier format, type
//!   prefix, timestamp format and `modified >= created`.
//! - [`validate_object`] / [`validate_object_strict`]: an envelope pass
//!   followed by the variant's own required properties.

pub mod engine;
pub mod report;

pub use engine::{
    validate_envelope, validate_envelope_strict, validate_object, validate_object_strict,
};
pub use report::ValidationReport;

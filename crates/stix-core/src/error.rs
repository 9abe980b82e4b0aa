//! # Error Hierarchy
//!
//! Structured error types for the STIX object stack, built with `thiserror`.
//! No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! Decoding distinguishes two hard failure classes: the input is not
//! well-formed JSON for the target shape ([`DecodeError::MalformedInput`]),
//! or it is well-formed but carries no usable discriminator
//! ([`DecodeError::InvalidObject`]). Missing envelope properties are *not*
//! errors; they are reported as validation diagnostics.

use thiserror::Error;

/// Top-level error type for the STIX object stack.
#[derive(Error, Debug)]
pub enum StixError {
    /// Decoding a buffer into an object failed.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Domain primitive validation failure.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while turning a byte buffer into a typed object.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The buffer is not well-formed JSON, or cannot be mapped onto the
    /// shape of the selected variant.
    #[error("malformed input: {0}")]
    MalformedInput(#[from] serde_json::Error),

    /// The buffer parsed but does not describe a usable object.
    #[error("invalid STIX object: {0}")]
    InvalidObject(String),
}

impl DecodeError {
    /// True for the structural class (`MalformedInput`).
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedInput(_))
    }
}

/// Validation errors for domain primitives.
///
/// Each primitive enforces its format at construction time. These errors
/// carry the rejected input and the expected format.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Identifier is not of the form `<type>--<uuid>`.
    #[error("invalid identifier: \"{value}\" ({reason})")]
    InvalidIdentifier {
        /// The string that was rejected.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Object type discriminator is empty or uses characters outside `[a-z0-9-]`.
    #[error("invalid object type: \"{0}\" (expected lowercase letters, digits and hyphens)")]
    InvalidObjectType(String),

    /// Timestamp string is not valid RFC 3339.
    #[error("invalid timestamp: \"{value}\" ({reason})")]
    InvalidTimestamp {
        /// The string that failed to parse.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Confidence value outside 0..=100.
    #[error("invalid confidence: {0} (expected 0-100)")]
    InvalidConfidence(u32),
}

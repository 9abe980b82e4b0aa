//! # stix-core — Foundational Types for the STIX Object Stack
//!
//! Leaf crate of the workspace. Defines the primitives every other crate
//! builds on:
//!
//! - **Errors** (`error.rs`): `thiserror` hierarchy separating structural
//!   decode failures from domain primitive validation.
//! - **Identifiers** (`identity.rs`): `<type>--<uuid>` identifiers and the
//!   generator used by fresh object construction.
//! - **Timestamps** (`temporal.rs`): UTC, millisecond-precision timestamps
//!   and the clock used by fresh object construction.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `stix-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod identity;
pub mod temporal;

pub use error::{DecodeError, StixError, ValidationError};
pub use identity::{validate_object_type, Identifier};
pub use temporal::Timestamp;

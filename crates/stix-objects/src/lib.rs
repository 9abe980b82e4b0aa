//! # stix-objects
//!
//! The STIX 2.1 object model and its polymorphic decoder.
//!
//! - [`properties`]: property capsules, each an independent group of
//!   fields with its own presence check.
//! - [`common`]: the envelope every object carries.
//! - [`objects`]: the concrete variants plus the [`CustomObject`] fallback.
//! - [`object`]: the [`StixObject`] capability and the [`AnyObject`] sum.
//! - [`registry`]: the frozen discriminator table.
//! - [`decode`](mod@decode): discriminator peek and dispatch.
//! - [`bundle`]: the transport container.
//!
//! ```
//! use stix_objects::{decode, StixObject};
//!
//! let obj = decode(br#"{"type":"x-acme-widget","spec_version":"2.1"}"#).unwrap();
//! assert_eq!(obj.object_type(), "x-acme-widget");
//! assert!(obj.is_custom());
//! ```

pub mod bundle;
pub mod common;
pub mod decode;
pub mod object;
pub mod objects;
pub mod properties;
pub mod registry;

pub use bundle::{decode_bundle, Bundle};
pub use common::{CommonObjectProperties, ENVELOPE_PROPERTIES, SPEC_VERSION};
pub use decode::{decode, decode_type, is_known_type};
pub use object::{AnyObject, StixObject};
pub use objects::custom::CustomObject;
pub use properties::{PropertyCheck, VerifyPresent};
pub use registry::{is_registered, registered_types, REGISTRY};

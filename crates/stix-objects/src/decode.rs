//! # Two-Pass Decode
//!
//! 1. Peek at the `type` discriminator without decoding anything else.
//! 2. Look it up in [`REGISTRY`](crate::registry::REGISTRY) and run the
//!    variant's full decode, or fall back to [`CustomObject`] when the
//!    discriminator is well-formed but unregistered.
//!
//! Decode never validates. A successful decode says nothing about whether
//! the envelope is complete; that is a separate, explicit call.

use serde_json::{Map, Value};
use tracing::debug;

use stix_core::DecodeError;

use crate::object::AnyObject;
use crate::objects::custom::CustomObject;
use crate::registry::REGISTRY;

/// Object types defined by the exchange format, whether or not they have a
/// typed variant here.
const KNOWN_TYPES: &[&str] = &[
    "attack-pattern",
    "campaign",
    "course-of-action",
    "identity",
    "indicator",
    "infrastructure",
    "intrusion-set",
    "location",
    "malware",
    "marking-definition",
    "note",
    "observed-data",
    "opinion",
    "relationship",
    "report",
    "sighting",
    "threat-actor",
    "tool",
    "vulnerability",
];

/// Read only the `type` discriminator from `data`.
///
/// # Errors
///
/// [`DecodeError::MalformedInput`] if `data` is not a well-formed JSON
/// object or `type` is neither a string nor null,
/// [`DecodeError::InvalidObject`] if `type` is absent, null or empty.
pub fn decode_type(data: &[u8]) -> Result<String, DecodeError> {
    let mut peek: Map<String, Value> = serde_json::from_slice(data)?;
    let object_type = match peek.remove("type") {
        None | Some(Value::Null) => String::new(),
        Some(value) => serde_json::from_value::<String>(value)?,
    };
    if object_type.is_empty() {
        return Err(DecodeError::InvalidObject(
            "the type property is missing or empty".to_string(),
        ));
    }
    Ok(object_type)
}

/// Decode `data` into whichever variant its discriminator names.
///
/// Unregistered discriminators are not an error: they decode into
/// [`AnyObject::Custom`] with every non-envelope property preserved.
pub fn decode(data: &[u8]) -> Result<AnyObject, DecodeError> {
    let object_type = decode_type(data)?;
    match REGISTRY.get(object_type.as_str()) {
        Some(decode_fn) => {
            debug!(object_type = %object_type, "dispatching typed decode");
            decode_fn(data)
        }
        None => {
            debug!(object_type = %object_type, "unregistered type, decoding as custom object");
            CustomObject::decode(data).map(AnyObject::from)
        }
    }
}

/// Whether `object_type` is one of the object types the exchange format
/// defines.
pub fn is_known_type(object_type: &str) -> bool {
    KNOWN_TYPES.contains(&object_type)
}

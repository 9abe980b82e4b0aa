//! # Bundle
//!
//! Transport container: `{"type":"bundle","id":"bundle--…","objects":[…]}`.
//! Each element of `objects` goes through the same two-pass decode as a
//! standalone buffer.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use stix_core::{DecodeError, Identifier};

use crate::decode::decode;
use crate::object::AnyObject;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bundle {
    #[serde(rename = "type")]
    pub object_type: String,
    pub id: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub objects: Vec<AnyObject>,
}

#[derive(Deserialize)]
struct RawBundle {
    #[serde(rename = "type", default)]
    object_type: String,
    #[serde(default)]
    id: String,
    #[serde(default)]
    objects: Vec<Value>,
}

impl Bundle {
    pub const OBJECT_TYPE: &'static str = "bundle";

    /// An empty bundle with a freshly generated identifier.
    pub fn new() -> Self {
        Self {
            object_type: Self::OBJECT_TYPE.to_string(),
            id: Identifier::generate(Self::OBJECT_TYPE).to_string(),
            objects: Vec::new(),
        }
    }

    pub fn add_object(&mut self, object: impl Into<AnyObject>) {
        self.objects.push(object.into());
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Default for Bundle {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode a bundle and every object inside it.
///
/// # Errors
///
/// Fails if the envelope is not a bundle, or on the first element that
/// does not decode; the message carries that element's index.
pub fn decode_bundle(data: &[u8]) -> Result<Bundle, DecodeError> {
    let envelope: Map<String, Value> = serde_json::from_slice(data)?;
    let raw: RawBundle = serde_json::from_value(Value::Object(envelope))?;
    if raw.object_type != Bundle::OBJECT_TYPE {
        return Err(DecodeError::InvalidObject(format!(
            "expected type \"bundle\", found {:?}",
            raw.object_type
        )));
    }

    let mut objects = Vec::with_capacity(raw.objects.len());
    for (index, element) in raw.objects.iter().enumerate() {
        let bytes = serde_json::to_vec(element)?;
        match decode(&bytes) {
            Ok(object) => objects.push(object),
            Err(err) => {
                warn!(index, error = %err, "bundle element failed to decode");
                return Err(DecodeError::InvalidObject(format!(
                    "bundle object {index}: {err}"
                )));
            }
        }
    }

    Ok(Bundle {
        object_type: raw.object_type,
        id: raw.id,
        objects,
    })
}

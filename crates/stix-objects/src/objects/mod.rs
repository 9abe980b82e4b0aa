//! # Object Variants
//!
//! Each module defines one concrete STIX object: the common envelope plus
//! the capsules and plain properties specific to that object type. A
//! variant is a value object. [`new()`](campaign::Campaign::new) stamps
//! the envelope; after that, only the variant's own setters and the
//! setters on its capsules mutate it.
//!
//! Variants with typed decode are registered in [`crate::registry`].
//! Anything else decodes into [`custom::CustomObject`].

pub mod attack_pattern;
pub mod campaign;
pub mod course_of_action;
pub mod custom;
pub mod identity;
pub mod indicator;
pub mod infrastructure;
pub mod intrusion_set;
pub mod location;
pub mod malware;
pub mod note;
pub mod observed_data;
pub mod opinion;
pub mod relationship;
pub mod report;
pub mod sighting;
pub mod threat_actor;
pub mod tool;
pub mod vulnerability;

use serde::de::DeserializeOwned;

use stix_core::DecodeError;

use crate::object::StixObject;

/// Full structural decode of `data` into `T`, refusing a buffer whose
/// discriminator names a different object type.
pub(crate) fn decode_as<T>(data: &[u8], expected: &str) -> Result<T, DecodeError>
where
    T: DeserializeOwned + StixObject,
{
    let object: T = serde_json::from_slice(data)?;
    if object.object_type() != expected {
        return Err(DecodeError::InvalidObject(format!(
            "expected type {expected:?}, found {:?}",
            object.object_type()
        )));
    }
    Ok(object)
}

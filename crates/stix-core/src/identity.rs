//! # Object Identifiers
//!
//! Every STIX object carries an identifier of the form
//! `<object-type>--<uuid>`, e.g.
//! `threat-actor--56f3f0db-b5d5-431c-ae56-c18f02caf500`.
//!
//! [`Identifier::generate`] is the identifier collaborator used when a
//! fresh object is constructed. Decoded objects keep whatever string the
//! producer sent; [`Identifier::parse`] is only used when a caller asks
//! for strict checking.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

const SEPARATOR: &str = "--";

/// A `<type>--<uuid>` object identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identifier(String);

impl Identifier {
    /// Synthesize a new identifier for `object_type` with a random v4 UUID.
    ///
    /// The type prefix is used as given. Run untrusted input through
    /// [`validate_object_type`] first.
    pub fn generate(object_type: &str) -> Self {
        Self(format!("{object_type}{SEPARATOR}{}", Uuid::new_v4()))
    }

    /// Parse and validate an identifier string.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidIdentifier`] if the separator is
    /// missing, the type part is malformed, or the suffix is not a UUID.
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        // A type may itself end in `-` or contain `--`; a UUID never does.
        let Some((object_type, suffix)) = s.rsplit_once(SEPARATOR) else {
            return Err(ValidationError::InvalidIdentifier {
                value: s,
                reason: "missing '--' separator".to_string(),
            });
        };

        if validate_object_type(object_type).is_err() {
            return Err(ValidationError::InvalidIdentifier {
                reason: format!("invalid object type prefix {object_type:?}"),
                value: s,
            });
        }

        if let Err(e) = Uuid::parse_str(suffix) {
            return Err(ValidationError::InvalidIdentifier {
                reason: format!("suffix is not a UUID: {e}"),
                value: s,
            });
        }

        Ok(Self(s))
    }

    /// The object type prefix (the part before the last `--`).
    pub fn object_type(&self) -> &str {
        self.0
            .rsplit_once(SEPARATOR)
            .map(|(t, _)| t)
            .unwrap_or(&self.0)
    }

    /// The UUID suffix.
    pub fn uuid(&self) -> Option<Uuid> {
        self.0
            .rsplit_once(SEPARATOR)
            .and_then(|(_, u)| Uuid::parse_str(u).ok())
    }

    /// Access the identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Identifier {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Identifier> for String {
    fn from(id: Identifier) -> Self {
        id.0
    }
}

/// Check that an object type discriminator is non-empty and uses only
/// lowercase ASCII letters, digits and hyphens.
pub fn validate_object_type(object_type: &str) -> Result<(), ValidationError> {
    let well_formed = !object_type.is_empty()
        && object_type
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if well_formed {
        Ok(())
    } else {
        Err(ValidationError::InvalidObjectType(object_type.to_string()))
    }
}

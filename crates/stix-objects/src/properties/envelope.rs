//! Capsules that make up the common envelope.
//!
//! `type`, `spec_version`, `id`, `created` and `modified` are required on
//! every object; their presence checks fail when the value is empty. The
//! rest are optional and always pass.

use serde::{Deserialize, Serialize};

use stix_core::{Identifier, Timestamp, ValidationError};

use super::{is_false, PropertyCheck, VerifyPresent};

/// The `type` discriminator.
///
/// Set once at construction or decode; there is no setter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeProperty {
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub(crate) object_type: String,
}

impl TypeProperty {
    /// Create the capsule for `object_type`.
    pub fn new(object_type: impl Into<String>) -> Self {
        Self {
            object_type: object_type.into(),
        }
    }

    /// The discriminator value.
    pub fn object_type(&self) -> &str {
        &self.object_type
    }
}

impl VerifyPresent for TypeProperty {
    fn verify_present(&self) -> PropertyCheck {
        PropertyCheck::require("type", !self.object_type.is_empty())
    }
}

/// The `spec_version` property.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpecVersionProperty {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub spec_version: String,
}

impl SpecVersionProperty {
    pub fn set_spec_version(&mut self, version: impl Into<String>) {
        self.spec_version = version.into();
    }
}

impl VerifyPresent for SpecVersionProperty {
    fn verify_present(&self) -> PropertyCheck {
        PropertyCheck::require("spec_version", !self.spec_version.is_empty())
    }
}

/// The `id` property, kept verbatim as received.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdProperty {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub(crate) id: String,
}

impl IdProperty {
    /// Create the capsule from a generated identifier.
    pub fn new(id: &Identifier) -> Self {
        Self {
            id: id.to_string(),
        }
    }

    /// The identifier string.
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl VerifyPresent for IdProperty {
    fn verify_present(&self) -> PropertyCheck {
        PropertyCheck::require("id", !self.id.is_empty())
    }
}

/// The optional `created_by_ref` property.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatedByRefProperty {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub created_by_ref: String,
}

impl CreatedByRefProperty {
    pub fn set_created_by_ref(&mut self, identity: &Identifier) {
        self.created_by_ref = identity.to_string();
    }
}

impl VerifyPresent for CreatedByRefProperty {
    fn verify_present(&self) -> PropertyCheck {
        PropertyCheck::ok()
    }
}

/// The `created` timestamp.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatedProperty {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub created: String,
}

impl CreatedProperty {
    pub fn set_created(&mut self, ts: Timestamp) {
        self.created = ts.to_stix_string();
    }
}

impl VerifyPresent for CreatedProperty {
    fn verify_present(&self) -> PropertyCheck {
        PropertyCheck::require("created", !self.created.is_empty())
    }
}

/// The `modified` timestamp.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModifiedProperty {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub modified: String,
}

impl ModifiedProperty {
    pub fn set_modified(&mut self, ts: Timestamp) {
        self.modified = ts.to_stix_string();
    }
}

impl VerifyPresent for ModifiedProperty {
    fn verify_present(&self) -> PropertyCheck {
        PropertyCheck::require("modified", !self.modified.is_empty())
    }
}

/// The optional `revoked` flag. Omitted on encode when false.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevokedProperty {
    #[serde(skip_serializing_if = "is_false")]
    pub revoked: bool,
}

impl RevokedProperty {
    pub fn set_revoked(&mut self, revoked: bool) {
        self.revoked = revoked;
    }
}

impl VerifyPresent for RevokedProperty {
    fn verify_present(&self) -> PropertyCheck {
        PropertyCheck::ok()
    }
}

/// The optional `labels` list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelsProperty {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
}

impl LabelsProperty {
    pub fn add_label(&mut self, label: impl Into<String>) {
        self.labels.push(label.into());
    }
}

impl VerifyPresent for LabelsProperty {
    fn verify_present(&self) -> PropertyCheck {
        PropertyCheck::ok()
    }
}

/// The optional `confidence` score, 0 through 100.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfidenceProperty {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<u8>,
}

impl ConfidenceProperty {
    /// Set the confidence score.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidConfidence`] above 100.
    pub fn set_confidence(&mut self, confidence: u32) -> Result<(), ValidationError> {
        match u8::try_from(confidence) {
            Ok(c) if c <= 100 => {
                self.confidence = Some(c);
                Ok(())
            }
            _ => Err(ValidationError::InvalidConfidence(confidence)),
        }
    }
}

impl VerifyPresent for ConfidenceProperty {
    fn verify_present(&self) -> PropertyCheck {
        PropertyCheck::ok()
    }
}

/// The optional `lang` tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LangProperty {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub lang: String,
}

impl LangProperty {
    pub fn set_lang(&mut self, lang: impl Into<String>) {
        self.lang = lang.into();
    }
}

impl VerifyPresent for LangProperty {
    fn verify_present(&self) -> PropertyCheck {
        PropertyCheck::ok()
    }
}

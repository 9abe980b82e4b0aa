//! # Common Envelope
//!
//! [`CommonObjectProperties`] is the property set every STIX object
//! carries. It is a flat composition of capsules; variants embed it with
//! `#[serde(flatten)]` and add their own capsules next to it.
//!
//! | property | required |
//! |---|---|
//! | `type` | yes |
//! | `spec_version` | yes |
//! | `id` | yes |
//! | `created` | yes |
//! | `modified` | yes |
//! | `created_by_ref`, `revoked`, `labels`, `confidence`, `lang`, `external_references`, `object_marking_refs`, `granular_markings` | no |

use serde::{Deserialize, Serialize};

use stix_core::{Identifier, Timestamp};

use crate::properties::{
    ConfidenceProperty, CreatedByRefProperty, CreatedProperty, ExternalReferencesProperty,
    IdProperty, LabelsProperty, LangProperty, MarkingProperties, ModifiedProperty,
    RevokedProperty, SpecVersionProperty, TypeProperty,
};

/// Specification version stamped on freshly constructed objects.
pub const SPEC_VERSION: &str = "2.1";

/// JSON keys owned by the envelope.
pub const ENVELOPE_PROPERTIES: &[&str] = &[
    "type",
    "spec_version",
    "id",
    "created_by_ref",
    "created",
    "modified",
    "revoked",
    "labels",
    "confidence",
    "lang",
    "external_references",
    "object_marking_refs",
    "granular_markings",
];

/// The envelope shared by every object variant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonObjectProperties {
    #[serde(flatten)]
    pub object_type: TypeProperty,
    #[serde(flatten)]
    pub spec_version: SpecVersionProperty,
    #[serde(flatten)]
    pub id: IdProperty,
    #[serde(flatten)]
    pub created_by_ref: CreatedByRefProperty,
    #[serde(flatten)]
    pub created: CreatedProperty,
    #[serde(flatten)]
    pub modified: ModifiedProperty,
    #[serde(flatten)]
    pub revoked: RevokedProperty,
    #[serde(flatten)]
    pub labels: LabelsProperty,
    #[serde(flatten)]
    pub confidence: ConfidenceProperty,
    #[serde(flatten)]
    pub lang: LangProperty,
    #[serde(flatten)]
    pub external_references: ExternalReferencesProperty,
    #[serde(flatten)]
    pub markings: MarkingProperties,
}

impl CommonObjectProperties {
    /// Stamp a fresh envelope: discriminator, a generated identifier,
    /// `spec_version`, and `created == modified == now`. Every optional
    /// capsule is left empty.
    pub fn new(object_type: &str) -> Self {
        let now = Timestamp::now();
        let mut common = Self {
            object_type: TypeProperty::new(object_type),
            id: IdProperty::new(&Identifier::generate(object_type)),
            ..Self::default()
        };
        common.spec_version.set_spec_version(SPEC_VERSION);
        common.created.set_created(now);
        common.modified.set_modified(now);
        common
    }

    /// The discriminator.
    pub fn object_type(&self) -> &str {
        self.object_type.object_type()
    }

    /// The identifier string, verbatim.
    pub fn id(&self) -> &str {
        self.id.id()
    }

    pub fn spec_version(&self) -> &str {
        &self.spec_version.spec_version
    }

    pub fn created(&self) -> &str {
        &self.created.created
    }

    pub fn modified(&self) -> &str {
        &self.modified.modified
    }

    /// Bump `modified` to the current time.
    pub fn touch(&mut self) {
        self.modified.set_modified(Timestamp::now());
    }
}

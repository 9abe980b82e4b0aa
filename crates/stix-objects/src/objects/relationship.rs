//! # Relationship
//!
//! A directed, typed link between two objects: `source_ref`
//! `relationship_type` `target_ref`, e.g. an indicator *indicates* malware.

use serde::{Deserialize, Serialize};

use stix_core::{DecodeError, Identifier, Timestamp};

use crate::common::CommonObjectProperties;
use crate::object::StixObject;
use crate::properties::{DescriptionProperty, PropertyCheck};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    #[serde(flatten)]
    pub common: CommonObjectProperties,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub relationship_type: String,
    #[serde(flatten)]
    pub description: DescriptionProperty,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub source_ref: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub target_ref: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub start_time: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub stop_time: String,
}

impl Relationship {
    pub const OBJECT_TYPE: &'static str = "relationship";

    pub fn new() -> Self {
        Self {
            common: CommonObjectProperties::new(Self::OBJECT_TYPE),
            ..Self::default()
        }
    }

    pub fn decode(data: &[u8]) -> Result<Self, DecodeError> {
        super::decode_as(data, Self::OBJECT_TYPE)
    }

    /// Set type, source and target in one call.
    pub fn set_link(
        &mut self,
        relationship_type: impl Into<String>,
        source: &Identifier,
        target: &Identifier,
    ) {
        self.relationship_type = relationship_type.into();
        self.source_ref = source.to_string();
        self.target_ref = target.to_string();
    }

    pub fn set_start_time(&mut self, ts: Timestamp) {
        self.start_time = ts.to_stix_string();
    }

    pub fn set_stop_time(&mut self, ts: Timestamp) {
        self.stop_time = ts.to_stix_string();
    }
}

impl StixObject for Relationship {
    fn common_properties(&self) -> &CommonObjectProperties {
        &self.common
    }

    fn common_properties_mut(&mut self) -> &mut CommonObjectProperties {
        &mut self.common
    }

    fn required_properties(&self) -> Vec<PropertyCheck> {
        vec![
            PropertyCheck::require("relationship_type", !self.relationship_type.is_empty()),
            PropertyCheck::require("source_ref", !self.source_ref.is_empty()),
            PropertyCheck::require("target_ref", !self.target_ref.is_empty()),
        ]
    }
}

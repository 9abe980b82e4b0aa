//! # Sighting
//!
//! A belief that something (usually an indicator) was seen, how often,
//! and by whom.

use serde::{Deserialize, Serialize};

use stix_core::{DecodeError, Identifier};

use crate::common::CommonObjectProperties;
use crate::object::StixObject;
use crate::properties::{is_false, DescriptionProperty, PropertyCheck, SeenProperties};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sighting {
    #[serde(flatten)]
    pub common: CommonObjectProperties,
    #[serde(flatten)]
    pub description: DescriptionProperty,
    #[serde(flatten)]
    pub seen: SeenProperties,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub sighting_of_ref: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub observed_data_refs: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub where_sighted_refs: Vec<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub summary: bool,
}

impl Sighting {
    pub const OBJECT_TYPE: &'static str = "sighting";

    pub fn new() -> Self {
        Self {
            common: CommonObjectProperties::new(Self::OBJECT_TYPE),
            ..Self::default()
        }
    }

    pub fn decode(data: &[u8]) -> Result<Self, DecodeError> {
        super::decode_as(data, Self::OBJECT_TYPE)
    }

    pub fn set_sighting_of_ref(&mut self, object: &Identifier) {
        self.sighting_of_ref = object.to_string();
    }

    pub fn set_count(&mut self, count: u64) {
        self.count = Some(count);
    }

    pub fn add_observed_data_ref(&mut self, observed: &Identifier) {
        self.observed_data_refs.push(observed.to_string());
    }

    pub fn add_where_sighted_ref(&mut self, identity: &Identifier) {
        self.where_sighted_refs.push(identity.to_string());
    }
}

impl StixObject for Sighting {
    fn common_properties(&self) -> &CommonObjectProperties {
        &self.common
    }

    fn common_properties_mut(&mut self) -> &mut CommonObjectProperties {
        &mut self.common
    }

    fn required_properties(&self) -> Vec<PropertyCheck> {
        vec![PropertyCheck::require(
            "sighting_of_ref",
            !self.sighting_of_ref.is_empty(),
        )]
    }
}

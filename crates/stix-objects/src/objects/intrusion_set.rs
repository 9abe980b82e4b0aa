//! # Intrusion Set
//!
//! A grouped set of adversarial behaviors and resources with common
//! properties, believed to be orchestrated by a single organization.

use serde::{Deserialize, Serialize};

use stix_core::DecodeError;

use crate::common::CommonObjectProperties;
use crate::object::StixObject;
use crate::properties::{
    AliasesProperty, DescriptionProperty, GoalsProperty, MotivationProperties, NameProperty,
    PropertyCheck, ResourceLevelProperty, SeenProperties,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntrusionSet {
    #[serde(flatten)]
    pub common: CommonObjectProperties,
    #[serde(flatten)]
    pub name: NameProperty,
    #[serde(flatten)]
    pub description: DescriptionProperty,
    #[serde(flatten)]
    pub aliases: AliasesProperty,
    #[serde(flatten)]
    pub seen: SeenProperties,
    #[serde(flatten)]
    pub goals: GoalsProperty,
    #[serde(flatten)]
    pub resource_level: ResourceLevelProperty,
    #[serde(flatten)]
    pub motivation: MotivationProperties,
}

impl IntrusionSet {
    pub const OBJECT_TYPE: &'static str = "intrusion-set";

    pub fn new() -> Self {
        Self {
            common: CommonObjectProperties::new(Self::OBJECT_TYPE),
            ..Self::default()
        }
    }

    pub fn decode(data: &[u8]) -> Result<Self, DecodeError> {
        super::decode_as(data, Self::OBJECT_TYPE)
    }
}

impl StixObject for IntrusionSet {
    fn common_properties(&self) -> &CommonObjectProperties {
        &self.common
    }

    fn common_properties_mut(&mut self) -> &mut CommonObjectProperties {
        &mut self.common
    }

    fn required_properties(&self) -> Vec<PropertyCheck> {
        vec![self.name.require()]
    }
}

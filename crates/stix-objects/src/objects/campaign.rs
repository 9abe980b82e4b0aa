//! # Campaign
//!
//! A grouping of adversarial behaviors that describes a set of malicious
//! activities or attacks occurring over a period of time against a
//! specific set of targets.

use serde::{Deserialize, Serialize};

use stix_core::DecodeError;

use crate::common::CommonObjectProperties;
use crate::object::StixObject;
use crate::properties::{
    AliasesProperty, DescriptionProperty, NameProperty, PropertyCheck, SeenProperties,
};

/// Campaign = envelope + name + description + aliases + seen window + objective.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Campaign {
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
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub objective: String,
}

impl Campaign {
    pub const OBJECT_TYPE: &'static str = "campaign";

    /// A fresh campaign with a stamped envelope and no optional properties.
    pub fn new() -> Self {
        Self {
            common: CommonObjectProperties::new(Self::OBJECT_TYPE),
            ..Self::default()
        }
    }

    /// Decode a campaign from JSON bytes.
    pub fn decode(data: &[u8]) -> Result<Self, DecodeError> {
        super::decode_as(data, Self::OBJECT_TYPE)
    }

    pub fn set_objective(&mut self, objective: impl Into<String>) {
        self.objective = objective.into();
    }
}

impl StixObject for Campaign {
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

//! # Infrastructure
//!
//! Systems, software services and associated physical or virtual resources
//! supporting some purpose, e.g. C2 servers or botnets.

use serde::{Deserialize, Serialize};

use stix_core::DecodeError;

use crate::common::CommonObjectProperties;
use crate::object::StixObject;
use crate::properties::{
    AliasesProperty, DescriptionProperty, KillChainPhasesProperty, NameProperty, PropertyCheck,
    SeenProperties,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Infrastructure {
    #[serde(flatten)]
    pub common: CommonObjectProperties,
    #[serde(flatten)]
    pub name: NameProperty,
    #[serde(flatten)]
    pub description: DescriptionProperty,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub infrastructure_types: Vec<String>,
    #[serde(flatten)]
    pub aliases: AliasesProperty,
    #[serde(flatten)]
    pub kill_chain_phases: KillChainPhasesProperty,
    #[serde(flatten)]
    pub seen: SeenProperties,
}

impl Infrastructure {
    pub const OBJECT_TYPE: &'static str = "infrastructure";

    pub fn new() -> Self {
        Self {
            common: CommonObjectProperties::new(Self::OBJECT_TYPE),
            ..Self::default()
        }
    }

    pub fn decode(data: &[u8]) -> Result<Self, DecodeError> {
        super::decode_as(data, Self::OBJECT_TYPE)
    }

    pub fn add_infrastructure_type(&mut self, infrastructure_type: impl Into<String>) {
        self.infrastructure_types.push(infrastructure_type.into());
    }
}

impl StixObject for Infrastructure {
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

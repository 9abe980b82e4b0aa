//! # Tool
//!
//! Legitimate software that can be used by threat actors to perform
//! attacks.

use serde::{Deserialize, Serialize};

use stix_core::DecodeError;

use crate::common::CommonObjectProperties;
use crate::object::StixObject;
use crate::properties::{
    AliasesProperty, DescriptionProperty, KillChainPhasesProperty, NameProperty, PropertyCheck,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    #[serde(flatten)]
    pub common: CommonObjectProperties,
    #[serde(flatten)]
    pub name: NameProperty,
    #[serde(flatten)]
    pub description: DescriptionProperty,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tool_types: Vec<String>,
    #[serde(flatten)]
    pub aliases: AliasesProperty,
    #[serde(flatten)]
    pub kill_chain_phases: KillChainPhasesProperty,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub tool_version: String,
}

impl Tool {
    pub const OBJECT_TYPE: &'static str = "tool";

    pub fn new() -> Self {
        Self {
            common: CommonObjectProperties::new(Self::OBJECT_TYPE),
            ..Self::default()
        }
    }

    pub fn decode(data: &[u8]) -> Result<Self, DecodeError> {
        super::decode_as(data, Self::OBJECT_TYPE)
    }

    pub fn add_tool_type(&mut self, tool_type: impl Into<String>) {
        self.tool_types.push(tool_type.into());
    }

    pub fn set_tool_version(&mut self, version: impl Into<String>) {
        self.tool_version = version.into();
    }
}

impl StixObject for Tool {
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

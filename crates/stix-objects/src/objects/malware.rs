//! # Malware
//!
//! A malware instance or family. `name` is only mandatory when the object
//! describes a family (`is_family == true`).

use serde::{Deserialize, Serialize};

use stix_core::{DecodeError, Identifier};

use crate::common::CommonObjectProperties;
use crate::object::StixObject;
use crate::properties::{
    AliasesProperty, DescriptionProperty, KillChainPhasesProperty, NameProperty, PropertyCheck,
    SeenProperties,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Malware {
    #[serde(flatten)]
    pub common: CommonObjectProperties,
    #[serde(flatten)]
    pub name: NameProperty,
    #[serde(flatten)]
    pub description: DescriptionProperty,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub malware_types: Vec<String>,
    #[serde(default)]
    pub is_family: bool,
    #[serde(flatten)]
    pub aliases: AliasesProperty,
    #[serde(flatten)]
    pub kill_chain_phases: KillChainPhasesProperty,
    #[serde(flatten)]
    pub seen: SeenProperties,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub operating_system_refs: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub architecture_execution_envs: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub implementation_languages: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub capabilities: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sample_refs: Vec<String>,
}

impl Malware {
    pub const OBJECT_TYPE: &'static str = "malware";

    pub fn new() -> Self {
        Self {
            common: CommonObjectProperties::new(Self::OBJECT_TYPE),
            ..Self::default()
        }
    }

    pub fn decode(data: &[u8]) -> Result<Self, DecodeError> {
        super::decode_as(data, Self::OBJECT_TYPE)
    }

    pub fn add_malware_type(&mut self, malware_type: impl Into<String>) {
        self.malware_types.push(malware_type.into());
    }

    pub fn set_is_family(&mut self, is_family: bool) {
        self.is_family = is_family;
    }

    pub fn add_capability(&mut self, capability: impl Into<String>) {
        self.capabilities.push(capability.into());
    }

    pub fn add_implementation_language(&mut self, language: impl Into<String>) {
        self.implementation_languages.push(language.into());
    }

    pub fn add_sample_ref(&mut self, sample: &Identifier) {
        self.sample_refs.push(sample.to_string());
    }
}

impl StixObject for Malware {
    fn common_properties(&self) -> &CommonObjectProperties {
        &self.common
    }

    fn common_properties_mut(&mut self) -> &mut CommonObjectProperties {
        &mut self.common
    }

    fn required_properties(&self) -> Vec<PropertyCheck> {
        if self.is_family {
            vec![self.name.require()]
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_family_always_encoded() {
        let m = Malware::new();
        let value = serde_json::to_value(&m).unwrap();
        assert_eq!(value["is_family"], false);
    }

    #[test]
    fn family_needs_name() {
        let mut m = Malware::new();
        assert!(m.required_properties().is_empty());
        m.set_is_family(true);
        assert_eq!(m.required_properties()[0].problems, 1);
        m.name.set_name("Poison Ivy");
        assert_eq!(m.required_properties()[0].problems, 0);
    }
}

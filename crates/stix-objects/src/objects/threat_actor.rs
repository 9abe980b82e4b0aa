//! # Threat Actor
//!
//! Individuals, groups, or organizations believed to be operating with
//! malicious intent.

use serde::{Deserialize, Serialize};

use stix_core::DecodeError;

use crate::common::CommonObjectProperties;
use crate::object::StixObject;
use crate::properties::{
    AliasesProperty, DescriptionProperty, GoalsProperty, MotivationProperties, NameProperty,
    PropertyCheck, ResourceLevelProperty, RolesProperty, SeenProperties,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreatActor {
    #[serde(flatten)]
    pub common: CommonObjectProperties,
    #[serde(flatten)]
    pub name: NameProperty,
    #[serde(flatten)]
    pub description: DescriptionProperty,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub threat_actor_types: Vec<String>,
    #[serde(flatten)]
    pub aliases: AliasesProperty,
    #[serde(flatten)]
    pub seen: SeenProperties,
    #[serde(flatten)]
    pub roles: RolesProperty,
    #[serde(flatten)]
    pub goals: GoalsProperty,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub sophistication: String,
    #[serde(flatten)]
    pub resource_level: ResourceLevelProperty,
    #[serde(flatten)]
    pub motivation: MotivationProperties,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub personal_motivations: Vec<String>,
}

impl ThreatActor {
    pub const OBJECT_TYPE: &'static str = "threat-actor";

    pub fn new() -> Self {
        Self {
            common: CommonObjectProperties::new(Self::OBJECT_TYPE),
            ..Self::default()
        }
    }

    pub fn decode(data: &[u8]) -> Result<Self, DecodeError> {
        super::decode_as(data, Self::OBJECT_TYPE)
    }

    pub fn add_threat_actor_type(&mut self, actor_type: impl Into<String>) {
        self.threat_actor_types.push(actor_type.into());
    }

    pub fn set_sophistication(&mut self, sophistication: impl Into<String>) {
        self.sophistication = sophistication.into();
    }

    pub fn add_personal_motivation(&mut self, motivation: impl Into<String>) {
        self.personal_motivations.push(motivation.into());
    }
}

impl StixObject for ThreatActor {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_reference_actor() {
        let actor = ThreatActor::decode(
            br#"{"type":"threat-actor","id":"threat-actor--56f3f0db-b5d5-431c-ae56-c18f02caf500","spec_version":"2.1","created":"2016-08-08T15:50:10.983Z","modified":"2016-08-08T15:50:10.983Z","name":"Fake BPP","threat_actor_types":["crime-syndicate"],"primary_motivation":"personal-gain"}"#,
        )
        .unwrap();
        assert_eq!(actor.name.name, "Fake BPP");
        assert_eq!(actor.threat_actor_types, vec!["crime-syndicate"]);
        assert_eq!(actor.motivation.primary_motivation, "personal-gain");
        assert_eq!(
            actor.id(),
            "threat-actor--56f3f0db-b5d5-431c-ae56-c18f02caf500"
        );
    }

    #[test]
    fn decode_refuses_other_type() {
        let err = ThreatActor::decode(br#"{"type":"campaign","name":"x"}"#).unwrap_err();
        assert!(!err.is_malformed());
    }
}

//! # Attack Pattern
//!
//! A type of TTP describing a way adversaries attempt to compromise
//! targets, e.g. spear phishing. Usually cross-referenced to an external
//! taxonomy such as CAPEC through `external_references`.

use serde::{Deserialize, Serialize};

use stix_core::DecodeError;

use crate::common::CommonObjectProperties;
use crate::object::StixObject;
use crate::properties::{
    AliasesProperty, DescriptionProperty, KillChainPhasesProperty, NameProperty, PropertyCheck,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackPattern {
    #[serde(flatten)]
    pub common: CommonObjectProperties,
    #[serde(flatten)]
    pub name: NameProperty,
    #[serde(flatten)]
    pub description: DescriptionProperty,
    #[serde(flatten)]
    pub aliases: AliasesProperty,
    #[serde(flatten)]
    pub kill_chain_phases: KillChainPhasesProperty,
}

impl AttackPattern {
    pub const OBJECT_TYPE: &'static str = "attack-pattern";

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

impl StixObject for AttackPattern {
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
    use crate::properties::ExternalReference;

    #[test]
    fn capec_reference_survives_decode() {
        let mut ap = AttackPattern::new();
        ap.name.set_name("Spear Phishing");
        ap.common
            .external_references
            .add_external_reference(ExternalReference::new("capec", "CAPEC-163"));
        let bytes = serde_json::to_vec(&ap).unwrap();
        let back = AttackPattern::decode(&bytes).unwrap();
        assert_eq!(back, ap);
        assert_eq!(
            back.common.external_references.external_references[0].external_id,
            "CAPEC-163"
        );
    }
}

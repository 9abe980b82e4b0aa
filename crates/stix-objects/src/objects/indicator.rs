//! # Indicator
//!
//! A pattern that can be used to detect suspicious or malicious activity.
//!
//! Beyond the envelope, an indicator is only meaningful with a `pattern`,
//! its `pattern_type`, and a `valid_from` time; these are reported by
//! [`StixObject::required_properties`].

use serde::{Deserialize, Serialize};

use stix_core::{DecodeError, Timestamp};

use crate::common::CommonObjectProperties;
use crate::object::StixObject;
use crate::properties::{
    DescriptionProperty, KillChainPhasesProperty, NameProperty, PropertyCheck,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Indicator {
    #[serde(flatten)]
    pub common: CommonObjectProperties,
    #[serde(flatten)]
    pub name: NameProperty,
    #[serde(flatten)]
    pub description: DescriptionProperty,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub indicator_types: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub pattern: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub pattern_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub pattern_version: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub valid_from: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub valid_until: String,
    #[serde(flatten)]
    pub kill_chain_phases: KillChainPhasesProperty,
}

impl Indicator {
    pub const OBJECT_TYPE: &'static str = "indicator";

    pub fn new() -> Self {
        Self {
            common: CommonObjectProperties::new(Self::OBJECT_TYPE),
            ..Self::default()
        }
    }

    pub fn decode(data: &[u8]) -> Result<Self, DecodeError> {
        super::decode_as(data, Self::OBJECT_TYPE)
    }

    pub fn add_indicator_type(&mut self, indicator_type: impl Into<String>) {
        self.indicator_types.push(indicator_type.into());
    }

    /// Set the detection pattern and the language it is written in
    /// (`stix`, `snort`, `yara`, ...).
    pub fn set_pattern(&mut self, pattern: impl Into<String>, pattern_type: impl Into<String>) {
        self.pattern = pattern.into();
        self.pattern_type = pattern_type.into();
    }

    pub fn set_valid_from(&mut self, ts: Timestamp) {
        self.valid_from = ts.to_stix_string();
    }

    pub fn set_valid_until(&mut self, ts: Timestamp) {
        self.valid_until = ts.to_stix_string();
    }
}

impl StixObject for Indicator {
    fn common_properties(&self) -> &CommonObjectProperties {
        &self.common
    }

    fn common_properties_mut(&mut self) -> &mut CommonObjectProperties {
        &mut self.common
    }

    fn required_properties(&self) -> Vec<PropertyCheck> {
        vec![
            PropertyCheck::require("pattern", !self.pattern.is_empty()),
            PropertyCheck::require("pattern_type", !self.pattern_type.is_empty()),
            PropertyCheck::require("valid_from", !self.valid_from.is_empty()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_indicator_encodes_expected_keys() {
        let mut i = Indicator::new();
        i.name.set_name("Malware C2 Indicator 2016");
        i.common.labels.add_label("BadStuff");
        i.set_valid_from(Timestamp::parse("2016-01-01T00:00:00Z").unwrap());
        i.kill_chain_phases
            .add_kill_chain_phase("lockheed-martin-cyber-kill-chain", "delivery");

        let value = serde_json::to_value(&i).unwrap();
        assert_eq!(value["type"], "indicator");
        assert_eq!(value["name"], "Malware C2 Indicator 2016");
        assert_eq!(value["labels"][0], "BadStuff");
        assert_eq!(value["valid_from"], "2016-01-01T00:00:00.000Z");
        assert_eq!(value["kill_chain_phases"][0]["phase_name"], "delivery");
        assert!(value.get("pattern").is_none());
        assert!(value.get("revoked").is_none());
    }

    #[test]
    fn missing_pattern_reported() {
        let mut i = Indicator::new();
        i.set_valid_from(Timestamp::now());
        let problems: usize = i.required_properties().iter().map(|c| c.problems).sum();
        assert_eq!(problems, 2);

        i.set_pattern("[file:hashes.'SHA-256' = 'abc']", "stix");
        let problems: usize = i.required_properties().iter().map(|c| c.problems).sum();
        assert_eq!(problems, 0);
    }
}

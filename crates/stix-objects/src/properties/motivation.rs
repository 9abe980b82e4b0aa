//! Adversary motivation and resourcing capsules.

use serde::{Deserialize, Serialize};

use super::{PropertyCheck, VerifyPresent};

/// `primary_motivation` and `secondary_motivations`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotivationProperties {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub primary_motivation: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub secondary_motivations: Vec<String>,
}

impl MotivationProperties {
    pub fn set_primary_motivation(&mut self, motivation: impl Into<String>) {
        self.primary_motivation = motivation.into();
    }

    pub fn add_secondary_motivation(&mut self, motivation: impl Into<String>) {
        self.secondary_motivations.push(motivation.into());
    }
}

impl VerifyPresent for MotivationProperties {
    fn verify_present(&self) -> PropertyCheck {
        PropertyCheck::ok()
    }
}

/// `resource_level`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceLevelProperty {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub resource_level: String,
}

impl ResourceLevelProperty {
    pub fn set_resource_level(&mut self, level: impl Into<String>) {
        self.resource_level = level.into();
    }
}

impl VerifyPresent for ResourceLevelProperty {
    fn verify_present(&self) -> PropertyCheck {
        PropertyCheck::ok()
    }
}

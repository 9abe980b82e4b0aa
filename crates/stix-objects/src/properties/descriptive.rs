//! Free-text capsules shared by most domain objects.
//!
//! `name` is required on several variants, but whether it is required is
//! decided by the variant, not by the capsule: [`NameProperty`] always
//! passes its own presence check and exposes [`NameProperty::require`] for
//! variants that need it.

use serde::{Deserialize, Serialize};

use super::{PropertyCheck, VerifyPresent};

/// The `name` property.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NameProperty {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
}

impl NameProperty {
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Presence check for variants where `name` is mandatory.
    pub fn require(&self) -> PropertyCheck {
        PropertyCheck::require("name", !self.name.is_empty())
    }
}

impl VerifyPresent for NameProperty {
    fn verify_present(&self) -> PropertyCheck {
        PropertyCheck::ok()
    }
}

/// The `description` property.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescriptionProperty {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl DescriptionProperty {
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }
}

impl VerifyPresent for DescriptionProperty {
    fn verify_present(&self) -> PropertyCheck {
        PropertyCheck::ok()
    }
}

/// The `aliases` list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AliasesProperty {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
}

impl AliasesProperty {
    /// Append an alias. Duplicates are ignored so the list stays a set.
    pub fn add_alias(&mut self, alias: impl Into<String>) {
        let alias = alias.into();
        if !self.aliases.contains(&alias) {
            self.aliases.push(alias);
        }
    }
}

impl VerifyPresent for AliasesProperty {
    fn verify_present(&self) -> PropertyCheck {
        PropertyCheck::ok()
    }
}

/// The `goals` list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoalsProperty {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub goals: Vec<String>,
}

impl GoalsProperty {
    pub fn add_goal(&mut self, goal: impl Into<String>) {
        self.goals.push(goal.into());
    }
}

impl VerifyPresent for GoalsProperty {
    fn verify_present(&self) -> PropertyCheck {
        PropertyCheck::ok()
    }
}

/// The `roles` list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RolesProperty {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<String>,
}

impl RolesProperty {
    pub fn add_role(&mut self, role: impl Into<String>) {
        self.roles.push(role.into());
    }
}

impl VerifyPresent for RolesProperty {
    fn verify_present(&self) -> PropertyCheck {
        PropertyCheck::ok()
    }
}

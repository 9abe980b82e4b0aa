//! # Identity
//!
//! An individual, organization, or group, or a class of them. Identities
//! are what `created_by_ref` points at.

use serde::{Deserialize, Serialize};

use stix_core::DecodeError;

use crate::common::CommonObjectProperties;
use crate::object::StixObject;
use crate::properties::{DescriptionProperty, NameProperty, PropertyCheck, RolesProperty};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    #[serde(flatten)]
    pub common: CommonObjectProperties,
    #[serde(flatten)]
    pub name: NameProperty,
    #[serde(flatten)]
    pub description: DescriptionProperty,
    #[serde(flatten)]
    pub roles: RolesProperty,
    /// `individual`, `group`, `system`, `organization`, `class` or `unknown`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub identity_class: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sectors: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub contact_information: String,
}

impl Identity {
    pub const OBJECT_TYPE: &'static str = "identity";

    pub fn new() -> Self {
        Self {
            common: CommonObjectProperties::new(Self::OBJECT_TYPE),
            ..Self::default()
        }
    }

    pub fn decode(data: &[u8]) -> Result<Self, DecodeError> {
        super::decode_as(data, Self::OBJECT_TYPE)
    }

    pub fn set_identity_class(&mut self, class: impl Into<String>) {
        self.identity_class = class.into();
    }

    pub fn add_sector(&mut self, sector: impl Into<String>) {
        self.sectors.push(sector.into());
    }

    pub fn set_contact_information(&mut self, contact: impl Into<String>) {
        self.contact_information = contact.into();
    }
}

impl StixObject for Identity {
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

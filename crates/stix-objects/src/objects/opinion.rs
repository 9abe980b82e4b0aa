//! # Opinion
//!
//! An assessment of the correctness of the information in other objects,
//! on the scale `strongly-disagree` .. `strongly-agree`.

use serde::{Deserialize, Serialize};

use stix_core::DecodeError;

use crate::common::CommonObjectProperties;
use crate::object::StixObject;
use crate::properties::{ObjectRefsProperty, PropertyCheck};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Opinion {
    #[serde(flatten)]
    pub common: CommonObjectProperties,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub explanation: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub authors: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub opinion: String,
    #[serde(flatten)]
    pub object_refs: ObjectRefsProperty,
}

impl Opinion {
    pub const OBJECT_TYPE: &'static str = "opinion";

    pub fn new() -> Self {
        Self {
            common: CommonObjectProperties::new(Self::OBJECT_TYPE),
            ..Self::default()
        }
    }

    pub fn decode(data: &[u8]) -> Result<Self, DecodeError> {
        super::decode_as(data, Self::OBJECT_TYPE)
    }

    pub fn set_opinion(&mut self, opinion: impl Into<String>) {
        self.opinion = opinion.into();
    }
}

impl StixObject for Opinion {
    fn common_properties(&self) -> &CommonObjectProperties {
        &self.common
    }

    fn common_properties_mut(&mut self) -> &mut CommonObjectProperties {
        &mut self.common
    }

    fn required_properties(&self) -> Vec<PropertyCheck> {
        vec![
            PropertyCheck::require("opinion", !self.opinion.is_empty()),
            self.object_refs.require(),
        ]
    }
}

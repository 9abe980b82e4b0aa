//! # Course of Action
//!
//! A recommendation from a producer to a consumer on the actions they
//! might take in response to intelligence.

use serde::{Deserialize, Serialize};

use stix_core::DecodeError;

use crate::common::CommonObjectProperties;
use crate::object::StixObject;
use crate::properties::{DescriptionProperty, NameProperty, PropertyCheck};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseOfAction {
    #[serde(flatten)]
    pub common: CommonObjectProperties,
    #[serde(flatten)]
    pub name: NameProperty,
    #[serde(flatten)]
    pub description: DescriptionProperty,
}

impl CourseOfAction {
    pub const OBJECT_TYPE: &'static str = "course-of-action";

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

impl StixObject for CourseOfAction {
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

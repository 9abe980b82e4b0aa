//! # Observed Data
//!
//! Raw observations of cyber objects over a window of time.

use serde::{Deserialize, Serialize};

use stix_core::{DecodeError, Timestamp};

use crate::common::CommonObjectProperties;
use crate::object::StixObject;
use crate::properties::{ObjectRefsProperty, PropertyCheck};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservedData {
    #[serde(flatten)]
    pub common: CommonObjectProperties,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub first_observed: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub last_observed: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_observed: Option<u64>,
    #[serde(flatten)]
    pub object_refs: ObjectRefsProperty,
}

impl ObservedData {
    pub const OBJECT_TYPE: &'static str = "observed-data";

    pub fn new() -> Self {
        Self {
            common: CommonObjectProperties::new(Self::OBJECT_TYPE),
            ..Self::default()
        }
    }

    pub fn decode(data: &[u8]) -> Result<Self, DecodeError> {
        super::decode_as(data, Self::OBJECT_TYPE)
    }

    pub fn set_window(&mut self, first: Timestamp, last: Timestamp) {
        self.first_observed = first.to_stix_string();
        self.last_observed = last.to_stix_string();
    }

    pub fn set_number_observed(&mut self, count: u64) {
        self.number_observed = Some(count);
    }
}

impl StixObject for ObservedData {
    fn common_properties(&self) -> &CommonObjectProperties {
        &self.common
    }

    fn common_properties_mut(&mut self) -> &mut CommonObjectProperties {
        &mut self.common
    }

    fn required_properties(&self) -> Vec<PropertyCheck> {
        vec![
            PropertyCheck::require("first_observed", !self.first_observed.is_empty()),
            PropertyCheck::require("last_observed", !self.last_observed.is_empty()),
            PropertyCheck::require("number_observed", self.number_observed.is_some()),
            self.object_refs.require(),
        ]
    }
}

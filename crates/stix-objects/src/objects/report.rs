//! # Report
//!
//! A published collection of threat intelligence about one or more topics.

use serde::{Deserialize, Serialize};

use stix_core::{DecodeError, Timestamp};

use crate::common::CommonObjectProperties;
use crate::object::StixObject;
use crate::properties::{DescriptionProperty, NameProperty, ObjectRefsProperty, PropertyCheck};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    #[serde(flatten)]
    pub common: CommonObjectProperties,
    #[serde(flatten)]
    pub name: NameProperty,
    #[serde(flatten)]
    pub description: DescriptionProperty,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub report_types: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub published: String,
    #[serde(flatten)]
    pub object_refs: ObjectRefsProperty,
}

impl Report {
    pub const OBJECT_TYPE: &'static str = "report";

    pub fn new() -> Self {
        Self {
            common: CommonObjectProperties::new(Self::OBJECT_TYPE),
            ..Self::default()
        }
    }

    pub fn decode(data: &[u8]) -> Result<Self, DecodeError> {
        super::decode_as(data, Self::OBJECT_TYPE)
    }

    pub fn add_report_type(&mut self, report_type: impl Into<String>) {
        self.report_types.push(report_type.into());
    }

    pub fn set_published(&mut self, ts: Timestamp) {
        self.published = ts.to_stix_string();
    }
}

impl StixObject for Report {
    fn common_properties(&self) -> &CommonObjectProperties {
        &self.common
    }

    fn common_properties_mut(&mut self) -> &mut CommonObjectProperties {
        &mut self.common
    }

    fn required_properties(&self) -> Vec<PropertyCheck> {
        vec![
            self.name.require(),
            PropertyCheck::require("published", !self.published.is_empty()),
            self.object_refs.require(),
        ]
    }
}

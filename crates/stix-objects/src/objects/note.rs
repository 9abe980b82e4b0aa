//! # Note
//!
//! Analyst commentary attached to one or more other objects.

use serde::{Deserialize, Serialize};

use stix_core::DecodeError;

use crate::common::CommonObjectProperties;
use crate::object::StixObject;
use crate::properties::{ObjectRefsProperty, PropertyCheck};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    #[serde(flatten)]
    pub common: CommonObjectProperties,
    /// Short summary. `abstract` is a reserved word.
    #[serde(rename = "abstract", default, skip_serializing_if = "String::is_empty")]
    pub summary: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub content: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub authors: Vec<String>,
    #[serde(flatten)]
    pub object_refs: ObjectRefsProperty,
}

impl Note {
    pub const OBJECT_TYPE: &'static str = "note";

    pub fn new() -> Self {
        Self {
            common: CommonObjectProperties::new(Self::OBJECT_TYPE),
            ..Self::default()
        }
    }

    pub fn decode(data: &[u8]) -> Result<Self, DecodeError> {
        super::decode_as(data, Self::OBJECT_TYPE)
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    pub fn add_author(&mut self, author: impl Into<String>) {
        self.authors.push(author.into());
    }
}

impl StixObject for Note {
    fn common_properties(&self) -> &CommonObjectProperties {
        &self.common
    }

    fn common_properties_mut(&mut self) -> &mut CommonObjectProperties {
        &mut self.common
    }

    fn required_properties(&self) -> Vec<PropertyCheck> {
        vec![
            PropertyCheck::require("content", !self.content.is_empty()),
            self.object_refs.require(),
        ]
    }
}

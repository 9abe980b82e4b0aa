//! # Location
//!
//! A geographic location: a region, a country, a street address, or a
//! latitude/longitude point with an optional precision radius in meters.

use serde::{Deserialize, Serialize};

use stix_core::DecodeError;

use crate::common::CommonObjectProperties;
use crate::object::StixObject;
use crate::properties::{DescriptionProperty, NameProperty, PropertyCheck};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(flatten)]
    pub common: CommonObjectProperties,
    #[serde(flatten)]
    pub name: NameProperty,
    #[serde(flatten)]
    pub description: DescriptionProperty,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<f64>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub region: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub country: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub administrative_area: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub city: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub street_address: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub postal_code: String,
}

impl Location {
    pub const OBJECT_TYPE: &'static str = "location";

    pub fn new() -> Self {
        Self {
            common: CommonObjectProperties::new(Self::OBJECT_TYPE),
            ..Self::default()
        }
    }

    pub fn decode(data: &[u8]) -> Result<Self, DecodeError> {
        super::decode_as(data, Self::OBJECT_TYPE)
    }

    pub fn set_coordinates(&mut self, latitude: f64, longitude: f64) {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
    }

    pub fn set_region(&mut self, region: impl Into<String>) {
        self.region = region.into();
    }

    pub fn set_country(&mut self, country: impl Into<String>) {
        self.country = country.into();
    }
}

impl StixObject for Location {
    fn common_properties(&self) -> &CommonObjectProperties {
        &self.common
    }

    fn common_properties_mut(&mut self) -> &mut CommonObjectProperties {
        &mut self.common
    }

    /// One of `region`, `country`, or a latitude/longitude pair must be set.
    fn required_properties(&self) -> Vec<PropertyCheck> {
        let has_point = self.latitude.is_some() && self.longitude.is_some();
        if has_point || !self.region.is_empty() || !self.country.is_empty() {
            vec![PropertyCheck::ok()]
        } else {
            vec![PropertyCheck::problem(
                "one of region, country, or latitude and longitude is required",
            )]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates_satisfy_requirement() {
        let mut loc = Location::new();
        assert_eq!(loc.required_properties()[0].problems, 1);
        loc.set_coordinates(48.8566, 2.3522);
        assert_eq!(loc.required_properties()[0].problems, 0);
    }

    #[test]
    fn decodes_float_coordinates() {
        let loc = Location::decode(
            br#"{"type":"location","latitude":48.8566,"longitude":2.3522,"country":"fr"}"#,
        )
        .unwrap();
        assert_eq!(loc.latitude, Some(48.8566));
        assert_eq!(loc.country, "fr");
    }
}

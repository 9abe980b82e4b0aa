//! # Custom Object
//!
//! Fallback for any discriminator without a registered variant. The
//! envelope is decoded normally; every other top-level key is kept
//! verbatim in [`CustomObject::custom_properties`] and written back out on
//! encode.

use serde::Serialize;
use serde_json::{Map, Value};

use stix_core::DecodeError;

use crate::common::{CommonObjectProperties, ENVELOPE_PROPERTIES};
use crate::object::StixObject;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CustomObject {
    #[serde(flatten)]
    pub common: CommonObjectProperties,
    #[serde(flatten)]
    pub custom_properties: Map<String, Value>,
}

impl CustomObject {
    /// A fresh custom object of `object_type` with an empty property bag.
    pub fn new(object_type: &str) -> Self {
        Self {
            common: CommonObjectProperties::new(object_type),
            custom_properties: Map::new(),
        }
    }

    /// Decode any JSON object, whatever its discriminator.
    ///
    /// Envelope keys always go to [`CommonObjectProperties`], never to the
    /// custom bag. Envelope values equal to their empty default, such as
    /// `"revoked": false` or `"labels": []`, are therefore not written back
    /// out on encode.
    pub fn decode(data: &[u8]) -> Result<Self, DecodeError> {
        let mut map: Map<String, Value> = serde_json::from_slice(data)?;
        let common: CommonObjectProperties = serde_json::from_value(Value::Object(map.clone()))?;
        for key in ENVELOPE_PROPERTIES {
            map.remove(*key);
        }
        Ok(Self {
            common,
            custom_properties: map,
        })
    }

    pub fn set_custom_property(&mut self, key: impl Into<String>, value: Value) {
        self.custom_properties.insert(key.into(), value);
    }

    pub fn custom_property(&self, key: &str) -> Option<&Value> {
        self.custom_properties.get(key)
    }
}

impl StixObject for CustomObject {
    fn common_properties(&self) -> &CommonObjectProperties {
        &self.common
    }

    fn common_properties_mut(&mut self) -> &mut CommonObjectProperties {
        &mut self.common
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_unknown_keys_and_strips_envelope() {
        let obj = CustomObject::decode(
            br#"{"type":"x-acme-widget","id":"x-acme-widget--4527e5de-8572-446a-a57a-706f15467461","spec_version":"2.1","x_acme_color":"red","size":3}"#,
        )
        .unwrap();
        assert_eq!(obj.object_type(), "x-acme-widget");
        assert_eq!(obj.custom_properties.len(), 2);
        assert_eq!(obj.custom_property("x_acme_color"), Some(&Value::from("red")));
        assert!(obj.custom_property("type").is_none());
    }

    #[test]
    fn encode_restores_custom_keys() {
        let mut obj = CustomObject::new("x-acme-widget");
        obj.set_custom_property("x_acme_color", Value::from("blue"));
        let value = serde_json::to_value(&obj).unwrap();
        assert_eq!(value["type"], "x-acme-widget");
        assert_eq!(value["x_acme_color"], "blue");
    }

    #[test]
    fn default_valued_envelope_keys_are_not_reemitted() {
        let obj = CustomObject::decode(br#"{"type":"x-w","revoked":false,"labels":[]}"#).unwrap();
        assert!(obj.custom_properties.is_empty());
        assert_eq!(
            serde_json::to_value(&obj).unwrap(),
            serde_json::json!({"type": "x-w"})
        );
    }

    #[test]
    fn non_object_is_malformed() {
        let err = CustomObject::decode(b"[1,2,3]").unwrap_err();
        assert!(err.is_malformed());
    }
}

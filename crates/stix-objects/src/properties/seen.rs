//! The `first_seen` / `last_seen` interval.

use serde::{Deserialize, Serialize};

use stix_core::Timestamp;

use super::{PropertyCheck, VerifyPresent};

/// Optional observation window shared by campaigns, intrusion sets,
/// threat actors, malware, infrastructure and sightings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeenProperties {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub first_seen: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub last_seen: String,
}

impl SeenProperties {
    pub fn set_first_seen(&mut self, ts: Timestamp) {
        self.first_seen = ts.to_stix_string();
    }

    pub fn set_last_seen(&mut self, ts: Timestamp) {
        self.last_seen = ts.to_stix_string();
    }
}

impl VerifyPresent for SeenProperties {
    fn verify_present(&self) -> PropertyCheck {
        PropertyCheck::ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setters_touch_one_field() {
        let mut seen = SeenProperties::default();
        seen.set_first_seen(Timestamp::parse("2020-01-01T00:00:00Z").unwrap());
        assert_eq!(seen.first_seen, "2020-01-01T00:00:00.000Z");
        assert!(seen.last_seen.is_empty());
    }

    #[test]
    fn decodes_partial_window() {
        let seen: SeenProperties =
            serde_json::from_str(r#"{"last_seen":"2021-05-01T12:00:00.000Z"}"#).unwrap();
        assert!(seen.first_seen.is_empty());
        assert_eq!(seen.last_seen, "2021-05-01T12:00:00.000Z");
    }
}

//! # Discriminator Registry
//!
//! Static map from a `type` discriminator to the full-decode function for
//! its variant. Built once on first use and read-only afterwards; there is
//! no runtime registration.

use std::collections::HashMap;
use std::sync::LazyLock;

use stix_core::DecodeError;

use crate::object::AnyObject;
use crate::objects::{
    attack_pattern::AttackPattern, campaign::Campaign, course_of_action::CourseOfAction,
    identity::Identity, indicator::Indicator, infrastructure::Infrastructure,
    intrusion_set::IntrusionSet, location::Location, malware::Malware, note::Note,
    observed_data::ObservedData, opinion::Opinion, relationship::Relationship, report::Report,
    sighting::Sighting, threat_actor::ThreatActor, tool::Tool, vulnerability::Vulnerability,
};

/// Full structural decode into one registered variant.
pub type DecodeFn = fn(&[u8]) -> Result<AnyObject, DecodeError>;

/// Every type with a typed variant.
pub static REGISTRY: LazyLock<HashMap<&'static str, DecodeFn>> = LazyLock::new(|| {
    let entries: [(&'static str, DecodeFn); 18] = [
        (AttackPattern::OBJECT_TYPE, |data| {
            AttackPattern::decode(data).map(AnyObject::from)
        }),
        (Campaign::OBJECT_TYPE, |data| {
            Campaign::decode(data).map(AnyObject::from)
        }),
        (CourseOfAction::OBJECT_TYPE, |data| {
            CourseOfAction::decode(data).map(AnyObject::from)
        }),
        (Identity::OBJECT_TYPE, |data| {
            Identity::decode(data).map(AnyObject::from)
        }),
        (Indicator::OBJECT_TYPE, |data| {
            Indicator::decode(data).map(AnyObject::from)
        }),
        (Infrastructure::OBJECT_TYPE, |data| {
            Infrastructure::decode(data).map(AnyObject::from)
        }),
        (IntrusionSet::OBJECT_TYPE, |data| {
            IntrusionSet::decode(data).map(AnyObject::from)
        }),
        (Location::OBJECT_TYPE, |data| {
            Location::decode(data).map(AnyObject::from)
        }),
        (Malware::OBJECT_TYPE, |data| {
            Malware::decode(data).map(AnyObject::from)
        }),
        (Note::OBJECT_TYPE, |data| Note::decode(data).map(AnyObject::from)),
        (ObservedData::OBJECT_TYPE, |data| {
            ObservedData::decode(data).map(AnyObject::from)
        }),
        (Opinion::OBJECT_TYPE, |data| {
            Opinion::decode(data).map(AnyObject::from)
        }),
        (Relationship::OBJECT_TYPE, |data| {
            Relationship::decode(data).map(AnyObject::from)
        }),
        (Report::OBJECT_TYPE, |data| {
            Report::decode(data).map(AnyObject::from)
        }),
        (Sighting::OBJECT_TYPE, |data| {
            Sighting::decode(data).map(AnyObject::from)
        }),
        (ThreatActor::OBJECT_TYPE, |data| {
            ThreatActor::decode(data).map(AnyObject::from)
        }),
        (Tool::OBJECT_TYPE, |data| Tool::decode(data).map(AnyObject::from)),
        (Vulnerability::OBJECT_TYPE, |data| {
            Vulnerability::decode(data).map(AnyObject::from)
        }),
    ];
    entries.into_iter().collect()
});

/// Whether `object_type` has a typed variant.
pub fn is_registered(object_type: &str) -> bool {
    REGISTRY.contains_key(object_type)
}

/// Registered discriminators, sorted.
pub fn registered_types() -> Vec<&'static str> {
    let mut types: Vec<&'static str> = REGISTRY.keys().copied().collect();
    types.sort_unstable();
    types
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_covers_typed_variants() {
        assert_eq!(REGISTRY.len(), 18);
        assert!(is_registered("threat-actor"));
        assert!(is_registered("observed-data"));
        assert!(!is_registered("marking-definition"));
        assert!(!is_registered(""));
    }

    #[test]
    fn registered_types_sorted() {
        let types = registered_types();
        assert_eq!(types.first(), Some(&"attack-pattern"));
        assert_eq!(types.last(), Some(&"vulnerability"));
        assert!(types.windows(2).all(|w| w[0] < w[1]));
    }
}

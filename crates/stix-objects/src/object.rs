//! # Polymorphic Object Capability
//!
//! [`StixObject`] is the uniform read surface over every variant: the
//! discriminator, the identifier, the last-modified time and the envelope.
//! [`AnyObject`] is the closed sum the decoder hands back; it implements
//! the same trait by delegating to whichever variant it holds.

use serde::Serialize;

use crate::common::CommonObjectProperties;
use crate::objects::{
    attack_pattern::AttackPattern, campaign::Campaign, course_of_action::CourseOfAction,
    custom::CustomObject, identity::Identity, indicator::Indicator,
    infrastructure::Infrastructure, intrusion_set::IntrusionSet, location::Location,
    malware::Malware, note::Note, observed_data::ObservedData, opinion::Opinion,
    relationship::Relationship, report::Report, sighting::Sighting, threat_actor::ThreatActor,
    tool::Tool, vulnerability::Vulnerability,
};
use crate::properties::PropertyCheck;

/// Capability shared by every object variant.
pub trait StixObject {
    fn common_properties(&self) -> &CommonObjectProperties;

    fn common_properties_mut(&mut self) -> &mut CommonObjectProperties;

    /// The `type` discriminator.
    fn object_type(&self) -> &str {
        self.common_properties().object_type()
    }

    /// The `id`, verbatim as decoded or generated.
    fn id(&self) -> &str {
        self.common_properties().id()
    }

    /// The `modified` timestamp string.
    fn modified(&self) -> &str {
        self.common_properties().modified()
    }

    /// Presence checks for the properties this variant requires beyond the
    /// envelope. Empty for variants with no extra requirements.
    fn required_properties(&self) -> Vec<PropertyCheck> {
        Vec::new()
    }
}

/// A decoded object of any type.
///
/// Encodes exactly as the variant it holds.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnyObject {
    AttackPattern(AttackPattern),
    Campaign(Campaign),
    CourseOfAction(CourseOfAction),
    Identity(Identity),
    Indicator(Indicator),
    Infrastructure(Infrastructure),
    IntrusionSet(IntrusionSet),
    Location(Location),
    Malware(Malware),
    Note(Note),
    ObservedData(ObservedData),
    Opinion(Opinion),
    Relationship(Relationship),
    Report(Report),
    Sighting(Sighting),
    ThreatActor(ThreatActor),
    Tool(Tool),
    Vulnerability(Vulnerability),
    Custom(CustomObject),
}

macro_rules! dispatch {
    ($self:ident, $inner:ident => $body:expr) => {
        match $self {
            AnyObject::AttackPattern($inner) => $body,
            AnyObject::Campaign($inner) => $body,
            AnyObject::CourseOfAction($inner) => $body,
            AnyObject::Identity($inner) => $body,
            AnyObject::Indicator($inner) => $body,
            AnyObject::Infrastructure($inner) => $body,
            AnyObject::IntrusionSet($inner) => $body,
            AnyObject::Location($inner) => $body,
            AnyObject::Malware($inner) => $body,
            AnyObject::Note($inner) => $body,
            AnyObject::ObservedData($inner) => $body,
            AnyObject::Opinion($inner) => $body,
            AnyObject::Relationship($inner) => $body,
            AnyObject::Report($inner) => $body,
            AnyObject::Sighting($inner) => $body,
            AnyObject::ThreatActor($inner) => $body,
            AnyObject::Tool($inner) => $body,
            AnyObject::Vulnerability($inner) => $body,
            AnyObject::Custom($inner) => $body,
        }
    };
}

impl AnyObject {
    /// True when the object fell back to [`CustomObject`].
    pub fn is_custom(&self) -> bool {
        matches!(self, AnyObject::Custom(_))
    }
}

impl StixObject for AnyObject {
    fn common_properties(&self) -> &CommonObjectProperties {
        dispatch!(self, o => o.common_properties())
    }

    fn common_properties_mut(&mut self) -> &mut CommonObjectProperties {
        dispatch!(self, o => o.common_properties_mut())
    }

    fn required_properties(&self) -> Vec<PropertyCheck> {
        dispatch!(self, o => o.required_properties())
    }
}

/// Wrap a concrete variant in [`AnyObject`].
macro_rules! impl_into_any_object {
    ($variant_type:ty, $any_variant:ident) => {
        impl From<$variant_type> for AnyObject {
            fn from(object: $variant_type) -> Self {
                AnyObject::$any_variant(object)
            }
        }
    };
}

impl_into_any_object!(AttackPattern, AttackPattern);
impl_into_any_object!(Campaign, Campaign);
impl_into_any_object!(CourseOfAction, CourseOfAction);
impl_into_any_object!(Identity, Identity);
impl_into_any_object!(Indicator, Indicator);
impl_into_any_object!(Infrastructure, Infrastructure);
impl_into_any_object!(IntrusionSet, IntrusionSet);
impl_into_any_object!(Location, Location);
impl_into_any_object!(Malware, Malware);
impl_into_any_object!(Note, Note);
impl_into_any_object!(ObservedData, ObservedData);
impl_into_any_object!(Opinion, Opinion);
impl_into_any_object!(Relationship, Relationship);
impl_into_any_object!(Report, Report);
impl_into_any_object!(Sighting, Sighting);
impl_into_any_object!(ThreatActor, ThreatActor);
impl_into_any_object!(Tool, Tool);
impl_into_any_object!(Vulnerability, Vulnerability);
impl_into_any_object!(CustomObject, Custom);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delegates_to_variant() {
        let campaign = Campaign::new();
        let id = campaign.id().to_string();
        let any: AnyObject = campaign.into();
        assert_eq!(any.object_type(), "campaign");
        assert_eq!(any.id(), id);
        assert!(!any.is_custom());
        assert_eq!(any.required_properties().len(), 1);
    }

    #[test]
    fn encodes_as_held_variant() {
        let tool = Tool::new();
        let direct = serde_json::to_value(&tool).unwrap();
        let wrapped = serde_json::to_value(AnyObject::from(tool)).unwrap();
        assert_eq!(direct, wrapped);
    }

    #[test]
    fn mutation_through_wrapper() {
        let mut any = AnyObject::from(CustomObject::new("x-thing"));
        any.common_properties_mut().labels.add_label("tagged");
        assert_eq!(any.common_properties().labels.labels, vec!["tagged"]);
        assert!(any.is_custom());
    }
}

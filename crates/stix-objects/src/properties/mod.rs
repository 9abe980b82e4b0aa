//! # Property Capsules
//!
//! A capsule is one self-contained group of STIX properties plus a
//! presence check. Capsules are composed into the common envelope and into
//! object variants with `#[serde(flatten)]`; none of them knows about its
//! siblings or about the object that holds it.
//!
//! Aggregates verify themselves by calling [`VerifyPresent::verify_present`]
//! on each capsule they hold and concatenating the results. There is no
//! hierarchy: a capsule behaves the same in every variant that uses it.

mod descriptive;
mod envelope;
mod motivation;
mod references;
mod seen;

pub use descriptive::{
    AliasesProperty, DescriptionProperty, GoalsProperty, NameProperty, RolesProperty,
};
pub use envelope::{
    ConfidenceProperty, CreatedByRefProperty, CreatedProperty, IdProperty, LabelsProperty,
    LangProperty, ModifiedProperty, RevokedProperty, SpecVersionProperty, TypeProperty,
};
pub use motivation::{MotivationProperties, ResourceLevelProperty};
pub use references::{
    ExternalReference, ExternalReferencesProperty, GranularMarking, KillChainPhase,
    KillChainPhasesProperty, MarkingProperties, ObjectRefsProperty,
};
pub use seen::SeenProperties;

/// Outcome of a single capsule's presence check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyCheck {
    /// Whether the capsule's required content is present.
    pub present: bool,
    /// Number of problems found (0 when present).
    pub problems: usize,
    /// One diagnostic per problem.
    pub messages: Vec<String>,
}

impl PropertyCheck {
    /// A passing check with no diagnostics.
    pub fn ok() -> Self {
        Self {
            present: true,
            problems: 0,
            messages: Vec::new(),
        }
    }

    /// A failing check for a required property that is absent.
    pub fn missing(property: &str) -> Self {
        Self {
            present: false,
            problems: 1,
            messages: vec![format!("the {property} property is required but missing")],
        }
    }

    /// A failing check with a free-form diagnostic, for constraints that
    /// span more than one property.
    pub fn problem(message: impl Into<String>) -> Self {
        Self {
            present: false,
            problems: 1,
            messages: vec![message.into()],
        }
    }

    /// `ok()` if `present`, otherwise `missing(property)`.
    pub fn require(property: &str, present: bool) -> Self {
        if present {
            Self::ok()
        } else {
            Self::missing(property)
        }
    }
}

/// Presence verification exposed by every capsule.
pub trait VerifyPresent {
    /// Report whether this capsule's required content is present.
    ///
    /// Optional capsules always pass.
    fn verify_present(&self) -> PropertyCheck;
}

pub(crate) fn is_false(b: &bool) -> bool {
    !*b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_has_no_messages() {
        let check = PropertyCheck::ok();
        assert!(check.present);
        assert_eq!(check.problems, 0);
        assert!(check.messages.is_empty());
    }

    #[test]
    fn missing_names_the_property() {
        let check = PropertyCheck::missing("modified");
        assert!(!check.present);
        assert_eq!(check.problems, 1);
        assert_eq!(
            check.messages,
            vec!["the modified property is required but missing".to_string()]
        );
    }

    #[test]
    fn require_switches_on_presence() {
        assert_eq!(PropertyCheck::require("name", true), PropertyCheck::ok());
        assert_eq!(
            PropertyCheck::require("name", false),
            PropertyCheck::missing("name")
        );
    }
}

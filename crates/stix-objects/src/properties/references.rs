//! Capsules holding structured references: external references, data
//! markings, kill chain phases, and embedded object references.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use stix_core::Identifier;

use super::{PropertyCheck, VerifyPresent};

/// A pointer to information held outside STIX (a CAPEC entry, a CVE, a
/// vendor report).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalReference {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub source_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub hashes: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub external_id: String,
}

impl ExternalReference {
    /// Reference to `external_id` within `source_name`.
    pub fn new(source_name: impl Into<String>, external_id: impl Into<String>) -> Self {
        Self {
            source_name: source_name.into(),
            external_id: external_id.into(),
            ..Self::default()
        }
    }
}

/// The `external_references` list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalReferencesProperty {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub external_references: Vec<ExternalReference>,
}

impl ExternalReferencesProperty {
    pub fn add_external_reference(&mut self, reference: ExternalReference) {
        self.external_references.push(reference);
    }
}

impl VerifyPresent for ExternalReferencesProperty {
    fn verify_present(&self) -> PropertyCheck {
        PropertyCheck::ok()
    }
}

/// A marking applied to selected parts of an object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GranularMarking {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub lang: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub marking_ref: String,
    pub selectors: Vec<String>,
}

/// `object_marking_refs` and `granular_markings`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkingProperties {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub object_marking_refs: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub granular_markings: Vec<GranularMarking>,
}

impl MarkingProperties {
    pub fn add_object_marking_ref(&mut self, marking: &Identifier) {
        self.object_marking_refs.push(marking.to_string());
    }

    pub fn add_granular_marking(&mut self, marking: GranularMarking) {
        self.granular_markings.push(marking);
    }
}

impl VerifyPresent for MarkingProperties {
    fn verify_present(&self) -> PropertyCheck {
        PropertyCheck::ok()
    }
}

/// A phase in a named kill chain, e.g. `lockheed-martin-cyber-kill-chain` /
/// `delivery`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KillChainPhase {
    pub kill_chain_name: String,
    pub phase_name: String,
}

/// The `kill_chain_phases` list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KillChainPhasesProperty {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub kill_chain_phases: Vec<KillChainPhase>,
}

impl KillChainPhasesProperty {
    pub fn add_kill_chain_phase(
        &mut self,
        kill_chain_name: impl Into<String>,
        phase_name: impl Into<String>,
    ) {
        self.kill_chain_phases.push(KillChainPhase {
            kill_chain_name: kill_chain_name.into(),
            phase_name: phase_name.into(),
        });
    }
}

impl VerifyPresent for KillChainPhasesProperty {
    fn verify_present(&self) -> PropertyCheck {
        PropertyCheck::ok()
    }
}

/// The `object_refs` list used by reports, notes, opinions and observed data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectRefsProperty {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub object_refs: Vec<String>,
}

impl ObjectRefsProperty {
    pub fn add_object_ref(&mut self, object: &Identifier) {
        self.object_refs.push(object.to_string());
    }

    /// Presence check for variants where at least one reference is mandatory.
    pub fn require(&self) -> PropertyCheck {
        PropertyCheck::require("object_refs", !self.object_refs.is_empty())
    }
}

impl VerifyPresent for ObjectRefsProperty {
    fn verify_present(&self) -> PropertyCheck {
        PropertyCheck::ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn external_reference_omits_empty_fields() {
        let r = ExternalReference::new("capec", "CAPEC-163");
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, r#"{"source_name":"capec","external_id":"CAPEC-163"}"#);
    }

    #[test]
    fn kill_chain_phase_add() {
        let mut k = KillChainPhasesProperty::default();
        k.add_kill_chain_phase("lockheed-martin-cyber-kill-chain", "delivery");
        assert_eq!(k.kill_chain_phases.len(), 1);
        assert_eq!(k.kill_chain_phases[0].phase_name, "delivery");
    }

    #[test]
    fn object_refs_require() {
        let mut refs = ObjectRefsProperty::default();
        assert_eq!(refs.require().problems, 1);
        refs.add_object_ref(&Identifier::generate("indicator"));
        assert!(refs.require().present);
    }

    #[test]
    fn markings_decode_granular() {
        let m: MarkingProperties = serde_json::from_str(
            r#"{"granular_markings":[{"marking_ref":"marking-definition--f88d31f6-486f-44da-b317-01333bde0b82","selectors":["description"]}]}"#,
        )
        .unwrap();
        assert_eq!(m.granular_markings[0].selectors, vec!["description"]);
        assert!(m.object_marking_refs.is_empty());
    }
}

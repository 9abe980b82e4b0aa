//! Integration tests for discriminator peek, registry dispatch, and the
//! custom-object fallback, driven through the public crate surface only.

use stix_core::DecodeError;
use stix_objects::{decode, decode_type, registered_types, AnyObject, StixObject};

const THREAT_ACTOR: &str = r#"{"type":"threat-actor","id":"threat-actor--56f3f0db-b5d5-431c-ae56-c18f02caf500","spec_version":"2.1","created":"2016-08-08T15:50:10.983Z","modified":"2016-08-08T15:50:10.983Z","name":"Fake BPP"}"#;

#[test]
fn test_every_registered_type_decodes_to_itself() {
    for object_type in registered_types() {
        let input = format!(r#"{{"type":"{object_type}","spec_version":"2.1"}}"#);
        let obj = decode(input.as_bytes())
            .unwrap_or_else(|e| panic!("{object_type} failed to decode: {e}"));
        assert_eq!(obj.object_type(), object_type);
        assert!(!obj.is_custom(), "{object_type} fell back to custom");
    }
}

#[test]
fn test_missing_or_empty_type_is_invalid_object() {
    for input in [
        r#"{}"#,
        r#"{"type":""}"#,
        r#"{"type":null}"#,
        r#"{"id":"campaign--x"}"#,
    ] {
        assert!(matches!(
            decode(input.as_bytes()),
            Err(DecodeError::InvalidObject(_))
        ));
    }
    assert!(matches!(
        decode_type(b"{}"),
        Err(DecodeError::InvalidObject(_))
    ));
}

#[test]
fn test_malformed_input_fails_regardless_of_type() {
    for input in [
        &br#"{"type":"campaign""#[..],
        br#"{"type":"widget-x",}"#,
        b"",
        b"\xff\xfe",
        br#"["campaign"]"#,
        b"[]",
    ] {
        let err = decode(input).unwrap_err();
        assert!(err.is_malformed(), "{input:?} gave {err}");
    }
}

#[test]
fn test_threat_actor_scenario() {
    let obj = decode(THREAT_ACTOR.as_bytes()).unwrap();
    assert_eq!(obj.id(), "threat-actor--56f3f0db-b5d5-431c-ae56-c18f02caf500");
    assert_eq!(obj.modified(), "2016-08-08T15:50:10.983Z");
    match obj {
        AnyObject::ThreatActor(actor) => assert_eq!(actor.name.name, "Fake BPP"),
        other => panic!("expected threat actor, got {}", other.object_type()),
    }
}

#[test]
fn test_unregistered_type_becomes_custom() {
    let input = br#"{"type":"widget-x","id":"widget-x--0f1a3c6e-8f7e-4f65-9a3b-6d2f1e0b7c11","spec_version":"2.1","created":"2020-01-01T00:00:00.000Z","modified":"2020-01-01T00:00:00.000Z","x_color":"teal"}"#;
    let obj = decode(input).unwrap();
    assert!(obj.is_custom());
    assert_eq!(obj.object_type(), "widget-x");

    let original: serde_json::Value = serde_json::from_slice(input).unwrap();
    let encoded = serde_json::to_value(&obj).unwrap();
    assert_eq!(encoded, original);
}

#[test]
fn test_repeated_decode_yields_independent_objects() {
    let mut first = decode(THREAT_ACTOR.as_bytes()).unwrap();
    let second = decode(THREAT_ACTOR.as_bytes()).unwrap();
    assert_eq!(first, second);

    first.common_properties_mut().labels.add_label("changed");
    assert_ne!(first, second);
    assert!(second.common_properties().labels.labels.is_empty());
}

#[test]
fn test_typed_encode_omits_absent_optionals() {
    let obj = decode(THREAT_ACTOR.as_bytes()).unwrap();
    let value = serde_json::to_value(&obj).unwrap();
    let keys: Vec<&str> = value
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(
        keys,
        vec!["type", "spec_version", "id", "created", "modified", "name"]
    );
}

#[test]
fn test_unknown_keys_on_registered_type_are_dropped() {
    let obj = decode(br#"{"type":"tool","name":"nmap","x_vendor_score":9}"#).unwrap();
    let value = serde_json::to_value(&obj).unwrap();
    assert_eq!(value["name"], "nmap");
    assert!(value.get("x_vendor_score").is_none());
}

//! Property tests for the dispatcher.

use std::collections::BTreeMap;

use proptest::prelude::*;
use stix_objects::{decode, is_registered, StixObject};

proptest! {
    /// Arbitrary bytes either decode or return an error; they never panic.
    #[test]
    fn decode_never_panics(data in proptest::collection::vec(any::<u8>(), 0..256)) {
        let _ = decode(&data);
    }

    /// Arbitrary JSON-ish text with a `type` key never panics either.
    #[test]
    fn decode_never_panics_on_typed_text(t in "[a-z-]{0,20}", tail in ".{0,60}") {
        let input = format!(r#"{{"type":"{t}",{tail}"#);
        let _ = decode(input.as_bytes());
    }

    /// Unregistered discriminators decode as custom objects and encode back
    /// to the same JSON.
    #[test]
    fn unknown_types_round_trip(
        suffix in "[a-z]{1,10}",
        extras in proptest::collection::btree_map("x_[a-z]{1,8}", "[ -~]{0,16}", 0..6),
    ) {
        let object_type = format!("x-{suffix}");
        prop_assume!(!is_registered(&object_type));

        let mut object = serde_json::Map::new();
        object.insert("type".into(), object_type.clone().into());
        object.insert("spec_version".into(), "2.1".into());
        object.insert(
            "id".into(),
            format!("{object_type}--1f2e3d4c-5b6a-4978-8695-a4b3c2d1e0f9").into(),
        );
        object.insert("created".into(), "2021-03-04T05:06:07.089Z".into());
        object.insert("modified".into(), "2021-03-04T05:06:07.089Z".into());
        let extras: BTreeMap<String, String> = extras;
        for (k, v) in extras {
            object.insert(k, v.into());
        }
        let original = serde_json::Value::Object(object);
        let bytes = serde_json::to_vec(&original).unwrap();

        let decoded = decode(&bytes).unwrap();
        prop_assert!(decoded.is_custom());
        prop_assert_eq!(decoded.object_type(), object_type.as_str());
        prop_assert_eq!(serde_json::to_value(&decoded).unwrap(), original);
    }
}

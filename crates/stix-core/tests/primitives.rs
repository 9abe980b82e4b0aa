//! Property tests for identifier and timestamp primitives.
//!
//! Identifiers and timestamps cross the wire as plain strings, so the
//! interesting invariants are that generation always yields something the
//! strict parser accepts, and that parsing never panics on hostile input.

use proptest::prelude::*;
use stix_core::{Identifier, Timestamp};

proptest! {
    /// Every generated identifier parses back with the same type prefix.
    #[test]
    fn generated_identifiers_parse(object_type in "[a-z0-9-]{1,20}") {
        let id = Identifier::generate(&object_type);
        let parsed = Identifier::parse(id.as_str()).unwrap();
        prop_assert_eq!(parsed.object_type(), object_type.as_str());
        prop_assert_eq!(parsed, id);
    }

    /// The identifier parser rejects or accepts, never panics.
    #[test]
    fn identifier_parse_never_panics(s in ".{0,80}") {
        let _ = Identifier::parse(s);
    }

    /// The timestamp parser rejects or accepts, never panics.
    #[test]
    fn timestamp_parse_never_panics(s in ".{0,40}") {
        let _ = Timestamp::parse(&s);
    }

    /// Rendering then parsing a timestamp is lossless at millisecond precision.
    #[test]
    fn timestamp_render_parse_stable(millis in 0i64..4_102_444_800_000i64) {
        let dt = chrono::DateTime::from_timestamp_millis(millis).unwrap();
        let ts = Timestamp::from_datetime(dt);
        let reparsed = Timestamp::parse(&ts.to_stix_string()).unwrap();
        prop_assert_eq!(reparsed, ts);
    }
}

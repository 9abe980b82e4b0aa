//! # Validation Engine
//!
//! Every entry point runs all of its checks and accumulates the results;
//! none of them stops at the first problem. Validation never mutates the
//! object it inspects.

use tracing::debug;

use stix_core::{Identifier, Timestamp};
use stix_objects::{CommonObjectProperties, StixObject, VerifyPresent};

use crate::report::ValidationReport;

/// Presence check of the required envelope properties, in the fixed
/// order type, spec_version, id, created, modified.
pub fn validate_envelope(common: &CommonObjectProperties) -> ValidationReport {
    let mut report = ValidationReport::new();
    report.record(common.object_type.verify_present());
    report.record(common.spec_version.verify_present());
    report.record(common.id.verify_present());
    report.record(common.created.verify_present());
    report.record(common.modified.verify_present());
    debug!(
        object_type = common.object_type(),
        problems = report.problem_count,
        "envelope validated"
    );
    report
}

/// [`validate_envelope`] followed by format checks on the values present:
///
/// - `id` parses as `<type>--<uuid>` and its prefix equals `type`;
/// - `created` and `modified` parse as timestamps;
/// - `modified` is not earlier than `created`.
///
/// Absent values are only reported once, by the presence checks.
pub fn validate_envelope_strict(common: &CommonObjectProperties) -> ValidationReport {
    let mut report = validate_envelope(common);

    if !common.id().is_empty() {
        match Identifier::parse(common.id()) {
            Ok(id) => {
                if !common.object_type().is_empty() && id.object_type() != common.object_type() {
                    report.problem(format!(
                        "the id property {:?} does not match type {:?}",
                        common.id(),
                        common.object_type()
                    ));
                }
            }
            Err(err) => report.problem(format!("the id property is invalid: {err}")),
        }
    }

    let created = parse_timestamp(&mut report, "created", common.created());
    let modified = parse_timestamp(&mut report, "modified", common.modified());
    if let (Some(created), Some(modified)) = (created, modified) {
        if modified < created {
            report.problem(format!(
                "the modified property ({modified}) is earlier than the created property ({created})"
            ));
        }
    }

    debug!(
        object_type = common.object_type(),
        problems = report.problem_count,
        "strict envelope validated"
    );
    report
}

fn parse_timestamp(
    report: &mut ValidationReport,
    property: &str,
    value: &str,
) -> Option<Timestamp> {
    if value.is_empty() {
        return None;
    }
    match Timestamp::parse(value) {
        Ok(ts) => Some(ts),
        Err(err) => {
            report.problem(format!("the {property} property is invalid: {err}"));
            None
        }
    }
}

/// Envelope presence checks followed by the variant's own required
/// properties.
pub fn validate_object<O: StixObject + ?Sized>(object: &O) -> ValidationReport {
    let mut report = validate_envelope(object.common_properties());
    record_required(&mut report, object);
    report
}

/// Strict envelope checks followed by the variant's own required
/// properties.
pub fn validate_object_strict<O: StixObject + ?Sized>(object: &O) -> ValidationReport {
    let mut report = validate_envelope_strict(object.common_properties());
    record_required(&mut report, object);
    report
}

fn record_required<O: StixObject + ?Sized>(report: &mut ValidationReport, object: &O) {
    for check in object.required_properties() {
        report.record(check);
    }
    debug!(
        object_type = object.object_type(),
        problems = report.problem_count,
        "object validated"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use stix_objects::decode;
    use stix_objects::objects::campaign::Campaign;

    fn populated() -> CommonObjectProperties {
        CommonObjectProperties::new("campaign")
    }

    #[test]
    fn fully_populated_envelope_passes() {
        let report = validate_envelope(&populated());
        assert!(report.ok);
        assert_eq!(report.problem_count, 0);
        assert!(report.diagnostics.is_empty());
    }

    #[test]
    fn missing_modified_names_only_modified() {
        let mut common = populated();
        common.modified.modified.clear();
        let report = validate_envelope(&common);
        assert!(!report.ok);
        assert_eq!(report.problem_count, 1);
        assert_eq!(report.diagnostics.len(), 1);
        assert!(report.diagnostics[0].contains("modified"));
        for other in ["type", "spec_version", "id", "created"] {
            assert!(!report.diagnostics[0].contains(&format!("the {other} ")));
        }
    }

    #[test]
    fn empty_envelope_reports_all_in_order() {
        let report = validate_envelope(&CommonObjectProperties::default());
        assert_eq!(report.problem_count, 5);
        let order: Vec<&str> = report
            .diagnostics
            .iter()
            .map(|d| d.split(' ').nth(1).unwrap_or_default())
            .collect();
        assert_eq!(order, ["type", "spec_version", "id", "created", "modified"]);
    }

    #[test]
    fn validation_does_not_mutate() {
        let common = populated();
        let before = common.clone();
        let _ = validate_envelope_strict(&common);
        assert_eq!(common, before);
    }

    #[test]
    fn strict_catches_mismatched_id_prefix() {
        let obj = decode(
            br#"{"type":"campaign","spec_version":"2.1","id":"tool--8e2e2d2b-17d4-4cbf-938f-98ee46b3cd3f","created":"2016-04-06T20:03:00.000Z","modified":"2016-04-06T20:03:00.000Z"}"#,
        )
        .unwrap();
        assert!(validate_envelope(obj.common_properties()).ok);
        let strict = validate_envelope_strict(obj.common_properties());
        assert_eq!(strict.problem_count, 1);
        assert!(strict.diagnostics[0].contains("does not match"));
    }

    #[test]
    fn strict_catches_bad_timestamps_and_ordering() {
        let obj = decode(
            br#"{"type":"campaign","spec_version":"2.1","id":"campaign--8e2e2d2b-17d4-4cbf-938f-98ee46b3cd3f","created":"yesterday","modified":"2016-04-06T20:03:00.000Z"}"#,
        )
        .unwrap();
        let strict = validate_envelope_strict(obj.common_properties());
        assert_eq!(strict.problem_count, 1);
        assert!(strict.diagnostics[0].contains("created"));

        let obj = decode(
            br#"{"type":"campaign","spec_version":"2.1","id":"campaign--8e2e2d2b-17d4-4cbf-938f-98ee46b3cd3f","created":"2016-04-06T20:03:00.000Z","modified":"2015-01-01T00:00:00.000Z"}"#,
        )
        .unwrap();
        let strict = validate_envelope_strict(obj.common_properties());
        assert_eq!(strict.problem_count, 1);
        assert!(strict.diagnostics[0].contains("earlier"));
    }

    #[test]
    fn strict_does_not_double_count_missing_values() {
        let report = validate_envelope_strict(&CommonObjectProperties::default());
        assert_eq!(report.problem_count, 5);
    }

    #[test]
    fn object_validation_adds_variant_requirements() {
        let mut campaign = Campaign::new();
        let report = validate_object(&campaign);
        assert_eq!(report.problem_count, 1);
        assert_eq!(report.diagnostics, vec!["the name property is required but missing"]);

        campaign.name.set_name("Green Group Attacks Against Finance");
        assert!(validate_object(&campaign).ok);
        assert!(validate_object_strict(&campaign).ok);
    }
}

//! # Validate Subcommand
//!
//! Decodes each file and validates every object in it. A file holding a
//! bundle is validated object by object.
//!
//! Presence checks always run. `--strict` adds identifier, timestamp and
//! ordering checks; `--objects` adds each variant's own required
//! properties.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;

use stix_objects::{AnyObject, Bundle, StixObject};
use stix_validate::{
    validate_envelope, validate_envelope_strict, validate_object, validate_object_strict,
    ValidationReport,
};

use crate::config::CliConfig;

/// Arguments for the `stix validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Files holding one STIX object or one bundle each.
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Also check identifier format, timestamp format and modified >= created.
    #[arg(long)]
    pub strict: bool,

    /// Also check the properties each object type requires.
    #[arg(long)]
    pub objects: bool,

    /// Print reports as JSON lines instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Which checks to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidateOptions {
    pub strict: bool,
    pub objects: bool,
}

impl ValidateOptions {
    /// Merge flags over file configuration.
    pub fn resolve(args: &ValidateArgs, config: &CliConfig) -> Self {
        Self {
            strict: args.strict || config.validation.strict,
            objects: args.objects,
        }
    }
}

/// Outcome of validating one file.
#[derive(Debug)]
pub enum FileOutcome {
    /// The file decoded; one report per object, keyed by object id.
    Decoded(Vec<(String, ValidationReport)>),
    /// The file did not decode.
    DecodeFailed(String),
}

impl FileOutcome {
    pub fn is_ok(&self) -> bool {
        match self {
            FileOutcome::Decoded(reports) => reports.iter().all(|(_, r)| r.ok),
            FileOutcome::DecodeFailed(_) => false,
        }
    }
}

/// Execute the validate subcommand.
///
/// Returns exit code: 0 when every object passes, 1 if any report is not
/// ok, 2 if any file fails to decode.
pub fn run_validate(args: &ValidateArgs, config: &CliConfig) -> Result<u8> {
    let options = ValidateOptions::resolve(args, config);
    tracing::info!(
        files = args.files.len(),
        strict = options.strict,
        objects = options.objects,
        "validating"
    );

    let mut had_invalid = false;
    let mut had_decode_failure = false;

    for path in &args.files {
        let outcome = validate_file(path, options)?;
        match &outcome {
            FileOutcome::Decoded(reports) => {
                for (id, report) in reports {
                    had_invalid |= !report.ok;
                    if args.json {
                        let line = serde_json::json!({
                            "file": path.display().to_string(),
                            "id": id,
                            "report": report,
                        });
                        println!("{}", crate::render_json(&line, false)?);
                    } else if report.ok {
                        println!("PASS: {} {id}", path.display());
                    } else {
                        println!("FAIL: {} {id} — {report}", path.display());
                    }
                }
            }
            FileOutcome::DecodeFailed(err) => {
                had_decode_failure = true;
                println!("FAIL: {} — {err}", path.display());
            }
        }
    }

    if had_decode_failure {
        Ok(2)
    } else if had_invalid {
        Ok(1)
    } else {
        Ok(0)
    }
}

/// Decode `path` and validate everything in it.
///
/// I/O errors are returned as errors; decode failures are an outcome.
pub fn validate_file(path: &Path, options: ValidateOptions) -> Result<FileOutcome> {
    let data = crate::read_input(path)?;

    let objects = match stix_objects::decode_type(&data) {
        Ok(t) if t == Bundle::OBJECT_TYPE => match stix_objects::decode_bundle(&data) {
            Ok(bundle) => bundle.objects,
            Err(e) => return Ok(FileOutcome::DecodeFailed(e.to_string())),
        },
        Ok(_) => match stix_objects::decode(&data) {
            Ok(object) => vec![object],
            Err(e) => return Ok(FileOutcome::DecodeFailed(e.to_string())),
        },
        Err(e) => return Ok(FileOutcome::DecodeFailed(e.to_string())),
    };

    let reports = objects
        .iter()
        .map(|object| (object.id().to_string(), validate_one(object, options)))
        .collect();
    Ok(FileOutcome::Decoded(reports))
}

/// Validate one decoded object with the selected checks.
pub fn validate_one(object: &AnyObject, options: ValidateOptions) -> ValidationReport {
    match (options.strict, options.objects) {
        (true, true) => validate_object_strict(object),
        (false, true) => validate_object(object),
        (true, false) => validate_envelope_strict(object.common_properties()),
        (false, false) => validate_envelope(object.common_properties()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CAMPAIGN: &str = r#"{"type":"campaign","spec_version":"2.1","id":"campaign--8e2e2d2b-17d4-4cbf-938f-98ee46b3cd3f","created":"2016-04-06T20:03:00.000Z","modified":"2016-04-06T20:03:00.000Z","name":"Green Group Attacks Against Finance"}"#;

    fn write(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    fn args(files: Vec<PathBuf>) -> ValidateArgs {
        ValidateArgs {
            files,
            strict: false,
            objects: false,
            json: false,
        }
    }

    #[test]
    fn complete_object_exits_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "campaign.json", CAMPAIGN);
        assert_eq!(run_validate(&args(vec![path]), &CliConfig::default()).unwrap(), 0);
    }

    #[test]
    fn incomplete_object_exits_one() {
        let dir = tempfile::tempdir().unwrap();
        let good = write(&dir, "good.json", CAMPAIGN);
        let bad = write(&dir, "bad.json", r#"{"type":"campaign","name":"x"}"#);
        assert_eq!(
            run_validate(&args(vec![good, bad]), &CliConfig::default()).unwrap(),
            1
        );
    }

    #[test]
    fn decode_failure_exits_two() {
        let dir = tempfile::tempdir().unwrap();
        let bad = write(&dir, "bad.json", r#"{"type":"campaign","name":"x"}"#);
        let broken = write(&dir, "broken.json", "{");
        assert_eq!(
            run_validate(&args(vec![bad, broken]), &CliConfig::default()).unwrap(),
            2
        );
    }

    #[test]
    fn missing_file_is_error() {
        let result = run_validate(
            &args(vec![PathBuf::from("/nonexistent/x.json")]),
            &CliConfig::default(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn options_follow_config_and_flags() {
        let mut config = CliConfig::default();
        config.validation.strict = true;
        let opts = ValidateOptions::resolve(&args(vec![]), &config);
        assert!(opts.strict);
        assert!(!opts.objects);
    }

    #[test]
    fn objects_flag_adds_variant_checks() {
        let object = stix_objects::decode(
            br#"{"type":"indicator","spec_version":"2.1","id":"indicator--8e2e2d2b-17d4-4cbf-938f-98ee46b3cd3f","created":"2016-04-06T20:03:00.000Z","modified":"2016-04-06T20:03:00.000Z"}"#,
        )
        .unwrap();
        assert!(validate_one(&object, ValidateOptions::default()).ok);
        let report = validate_one(
            &object,
            ValidateOptions {
                strict: false,
                objects: true,
            },
        );
        assert_eq!(report.problem_count, 3);
    }

    #[test]
    fn strict_and_objects_flags_combine() {
        let object = stix_objects::decode(
            br#"{"type":"indicator","spec_version":"2.1","id":"not-an-id","created":"2016-04-06T20:03:00.000Z","modified":"2016-04-06T20:03:00.000Z"}"#,
        )
        .unwrap();
        let objects_only = validate_one(
            &object,
            ValidateOptions {
                strict: false,
                objects: true,
            },
        );
        let both = validate_one(
            &object,
            ValidateOptions {
                strict: true,
                objects: true,
            },
        );
        assert_eq!(objects_only.problem_count, 3);
        assert!(both.problem_count > objects_only.problem_count);
        assert_eq!(
            both.problem_count,
            validate_object_strict(&object).problem_count
        );
    }

    #[test]
    fn bundle_files_report_each_object() {
        let dir = tempfile::tempdir().unwrap();
        let bundle = format!(
            r#"{{"type":"bundle","id":"bundle--5d0092c5-5f74-4287-9642-33f4c354e56d","objects":[{CAMPAIGN},{{"type":"tool"}}]}}"#
        );
        let path = write(&dir, "bundle.json", &bundle);
        match validate_file(&path, ValidateOptions::default()).unwrap() {
            FileOutcome::Decoded(reports) => {
                assert_eq!(reports.len(), 2);
                assert!(reports[0].1.ok);
                assert!(!reports[1].1.ok);
            }
            FileOutcome::DecodeFailed(e) => panic!("unexpected decode failure: {e}"),
        }
    }

    #[test]
    fn strict_flag_catches_ordering() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            &dir,
            "reversed.json",
            r#"{"type":"tool","spec_version":"2.1","id":"tool--8e2e2d2b-17d4-4cbf-938f-98ee46b3cd3f","created":"2020-01-01T00:00:00.000Z","modified":"2019-01-01T00:00:00.000Z"}"#,
        );
        let outcome = validate_file(&path, ValidateOptions::default()).unwrap();
        assert!(outcome.is_ok());
        let outcome = validate_file(
            &path,
            ValidateOptions {
                strict: true,
                objects: false,
            },
        )
        .unwrap();
        assert!(!outcome.is_ok());
    }
}

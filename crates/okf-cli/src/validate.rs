//! # Validate Subcommand
//!
//! Validates a YAML or JSON document against the JSON Schema of a
//! facility schema, then decodes it into the typed record.
//!
//! Exit codes: 0 valid, 1 violations, 2 the document could not be read
//! or parsed.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use okf_schema::{load_document, Format, RecordValidator, SchemaValidationError};

use crate::SchemaKind;

/// Arguments for the `okf validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Schema the document must satisfy.
    #[arg(value_enum)]
    pub schema: SchemaKind,

    /// Document to validate (`.yaml`, `.yml` or `.json`).
    #[arg(value_name = "PATH")]
    pub path: PathBuf,
}

/// Execute the validate subcommand.
///
/// Returns exit code: 0 on success, 1 on validation failure, 2 on operational error.
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    let registry = args
        .schema
        .registry()
        .with_context(|| format!("failed to build {} type registry", args.schema))?;
    let validator = RecordValidator::new(&registry)
        .with_context(|| format!("failed to compile {} validator", args.schema))?;

    let document = match load_document(&args.path) {
        Ok(document) => document,
        Err(e) => {
            println!("ERROR: {e}");
            return Ok(2);
        }
    };

    match validator.validate_value(&document) {
        Ok(()) => {}
        Err(SchemaValidationError::ValidationFailed { violations, .. }) => {
            println!(
                "FAIL: {} ({} violation(s) against {})",
                args.path.display(),
                violations.len(),
                validator.schema_name()
            );
            println!("{violations}");
            return Ok(1);
        }
        Err(e) => return Err(e).context("validation engine failed"),
    }

    // The schema accepts what the typed record accepts; decoding confirms it.
    let format = Format::from_path(&args.path).unwrap_or(Format::Json);
    let bytes = std::fs::read(&args.path)
        .with_context(|| format!("failed to read {}", args.path.display()))?;
    if let Err(e) = args.schema.check_decode(&bytes, format) {
        println!("FAIL: {}: {e}", args.path.display());
        return Ok(1);
    }

    println!("OK: {}", args.path.display());
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    fn run(schema: SchemaKind, path: PathBuf) -> u8 {
        run_validate(&ValidateArgs { schema, path }).unwrap()
    }

    #[test]
    fn test_valid_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            dir.path(),
            "okw.yaml",
            "name: Fab Lab\ncontact:\n  name: Some Person\nfacility_status: Active\n",
        );
        assert_eq!(run(SchemaKind::Okw, path), 0);
    }

    #[test]
    fn test_upper_case_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            dir.path(),
            "SITE.YAML",
            "name: Fab Lab\ncontact:\n  name: Some Person\n",
        );
        assert_eq!(run(SchemaKind::Okw, path), 0);
    }

    #[test]
    fn test_generated_sample_has_violations() {
        let dir = tempfile::tempdir().unwrap();
        let report = SchemaKind::Okt
            .generate(
                dir.path(),
                &okf_schema::SampleOptions {
                    create_dirs: true,
                    report_violations: false,
                },
            )
            .unwrap();
        assert_eq!(run(SchemaKind::Okt, report.written[0].clone()), 1);
        assert_eq!(run(SchemaKind::Okt, report.written[1].clone()), 1);
    }

    #[test]
    fn test_unknown_status_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            dir.path(),
            "okw.json",
            r#"{"name":"Fab Lab","contact":{"name":"Some Person"},"facility_status":"Open"}"#,
        );
        assert_eq!(run(SchemaKind::Okw, path), 1);
    }

    #[test]
    fn test_bad_phrase_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            dir.path(),
            "okt.yaml",
            "name: Depot\ncontact:\n  name: Some Person\nlocation:\n  what_3_words:\n    coordinates: only.two\n",
        );
        assert_eq!(run(SchemaKind::Okt, path), 1);
    }

    #[test]
    fn test_unreadable_document() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(run(SchemaKind::Okw, dir.path().join("absent.yaml")), 2);
        let path = write(dir.path(), "broken.json", "{ not json");
        assert_eq!(run(SchemaKind::Okw, path), 2);
    }
}

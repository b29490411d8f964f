//! # Sample Generation
//!
//! Builds one example record of a facility schema and writes it in every
//! output format. The validation engine is compiled for each run and the
//! sample is checked against it, but the outcome never gates the
//! output: violations are returned in the report and, when asked for,
//! logged as warnings.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::emit::{EmitError, Encoder, OutputLayout, WriteOptions};
use crate::registry::{RegistryBuilder, RegistryError, TypeRegistry};
use crate::validate::{RecordValidator, ValidationViolations};

/// A facility schema with a root record, a closed registry and a sample.
pub trait FacilitySchema {
    /// The root record type.
    type Record: Serialize + DeserializeOwned;

    /// Output naming for this schema.
    const LAYOUT: OutputLayout;

    /// Builder holding every type reachable from the root record.
    fn registry_builder() -> RegistryBuilder;

    /// The closed type registry.
    fn registry() -> Result<TypeRegistry, RegistryError> {
        Self::registry_builder().build()
    }

    /// The example record written by the generator.
    fn sample() -> Self::Record;
}

/// Switches for one generator run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SampleOptions {
    /// Create the output directory tree when it is missing.
    pub create_dirs: bool,
    /// Log every violation of the sample as a warning.
    pub report_violations: bool,
}

/// Outcome of a generator run.
#[derive(Debug, Clone)]
pub struct SampleReport {
    /// Name of the root record.
    pub schema_name: &'static str,
    /// Files written, in write order.
    pub written: Vec<PathBuf>,
    /// Violations of the sample record. Informational only.
    pub violations: ValidationViolations,
}

/// Generate the sample of `S` under `dir`.
///
/// # Errors
///
/// Fails when the registry is not closed, the validation engine cannot
/// be built, or an output cannot be encoded or written. Files written
/// before a failure are left in place.
pub fn generate<S: FacilitySchema>(
    dir: &Path,
    options: &SampleOptions,
) -> Result<SampleReport, EmitError> {
    let registry = S::registry()?;
    let validator = RecordValidator::new(&registry)?;
    let record = S::sample();

    let violations = validator.violations(&serde_json::to_value(&record)?);
    if options.report_violations {
        for violation in violations.violations() {
            tracing::warn!(
                schema = registry.root_name(),
                path = %violation.instance_path,
                "sample violation: {}",
                violation.message
            );
        }
    }

    let encoder = Encoder::new(&registry, S::LAYOUT);
    let written = encoder.write_all(
        &record,
        dir,
        &WriteOptions {
            create_dirs: options.create_dirs,
        },
    )?;

    tracing::info!(
        schema = registry.root_name(),
        dir = %dir.display(),
        files = written.len(),
        violations = violations.len(),
        "generated sample"
    );

    Ok(SampleReport {
        schema_name: registry.root_name(),
        written,
        violations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use okf_core::{Address, Agent, Contact, Gps, Location, SocialMedia, What3Words};

    struct AgentSchema;

    impl FacilitySchema for AgentSchema {
        type Record = Agent;

        const LAYOUT: OutputLayout = OutputLayout {
            stem: "agent",
            module: "AGENT",
        };

        fn registry_builder() -> RegistryBuilder {
            TypeRegistry::builder::<Agent>()
                .register::<Location>()
                .register::<Address>()
                .register::<Gps>()
                .register::<What3Words>()
                .register::<Contact>()
                .register::<SocialMedia>()
        }

        fn sample() -> Agent {
            let mut agent = Agent::default();
            agent.location.what_3_words.coordinates = "two.words".to_string();
            agent
        }
    }

    #[test]
    fn test_generate_writes_three_files() {
        let dir = tempfile::tempdir().unwrap();
        let options = SampleOptions {
            create_dirs: true,
            report_violations: false,
        };
        let report = generate::<AgentSchema>(dir.path(), &options).unwrap();
        assert_eq!(report.schema_name, "Agent");
        assert_eq!(
            report.written,
            vec![
                dir.path().join("agent.yaml"),
                dir.path().join("agent.json"),
                dir.path().join("src/main/daml/AGENT.daml"),
            ]
        );
    }

    #[test]
    fn test_violations_do_not_gate_output() {
        let dir = tempfile::tempdir().unwrap();
        let options = SampleOptions {
            create_dirs: true,
            report_violations: true,
        };
        let report = generate::<AgentSchema>(dir.path(), &options).unwrap();
        assert!(report.violations.touches("/name"));
        assert!(report.violations.touches("/location/what_3_words/coordinates"));
        assert!(report.written.iter().all(|p| p.is_file()));
    }

    #[test]
    fn test_missing_daml_dir_fails_after_documents() {
        let dir = tempfile::tempdir().unwrap();
        let err = generate::<AgentSchema>(dir.path(), &SampleOptions::default()).unwrap_err();
        match err {
            EmitError::Write { path, .. } => {
                assert_eq!(path, dir.path().join("src/main/daml/AGENT.daml"))
            }
            other => panic!("Expected Write, got: {other}"),
        }
        assert!(dir.path().join("agent.yaml").is_file());
        assert!(dir.path().join("agent.json").is_file());
    }

    #[test]
    fn test_missing_output_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = generate::<AgentSchema>(&dir.path().join("absent"), &SampleOptions::default())
            .unwrap_err();
        assert!(matches!(err, EmitError::Write { .. }), "got: {err}");
    }
}

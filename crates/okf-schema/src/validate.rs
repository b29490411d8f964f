//! # Record Validation
//!
//! Runtime validation of facility records and documents against the
//! JSON Schema rendered from a type registry (Draft 2020-12).
//!
//! ## Registered Formats
//!
//! The three-word phrase rule is registered with the engine as the custom
//! string format `three-word-phrase`, and format assertion is switched on.
//! An empty phrase passes: the rule applies only when a phrase is
//! recorded.
//!
//! ## Violations
//!
//! A failed validation reports every violation with the JSON Pointer of
//! the offending value, the schema path that rejected it and a
//! human-readable message. Validation never mutates or normalises the
//! record.

use std::fmt;
use std::path::Path;

use jsonschema::{ValidationOptions, Validator};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use okf_core::{is_absent_or_three_word_phrase, THREE_WORD_PHRASE_FORMAT};

use crate::json_schema::render_json_schema;
use crate::emit::Format;
use crate::registry::TypeRegistry;

/// Error during record validation.
#[derive(Error, Debug)]
pub enum SchemaValidationError {
    /// The document did not conform to the schema.
    #[error("validation failed against schema '{schema_name}':\n{violations}")]
    ValidationFailed {
        /// Name of the schema that was validated against.
        schema_name: String,
        /// Structured list of individual violations.
        violations: ValidationViolations,
    },

    /// The document file could not be loaded or parsed.
    #[error("document load error for '{path}': {reason}")]
    DocumentLoadError {
        /// Path to the document that failed to load.
        path: String,
        /// Reason the document could not be loaded.
        reason: String,
    },

    /// The compiled validator could not be built (e.g., invalid schema).
    #[error("validator build error for schema '{schema_name}': {reason}")]
    ValidatorBuildError {
        /// Schema name.
        schema_name: String,
        /// Reason the validator could not be built.
        reason: String,
    },

    /// The record could not be converted to a JSON value.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A single validation violation with structured context.
#[derive(Debug, Clone)]
pub struct Violation {
    /// JSON Pointer path to the violating field in the instance.
    pub instance_path: String,
    /// JSON Pointer path within the schema that triggered the error.
    pub schema_path: String,
    /// Human-readable description of the violation.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "  (root): {}", self.message)
        } else {
            write!(f, "  {}: {}", self.instance_path, self.message)
        }
    }
}

/// Collection of validation violations.
#[derive(Debug, Clone, Default)]
pub struct ValidationViolations {
    violations: Vec<Violation>,
}

impl ValidationViolations {
    /// Returns the number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns true if there are no violations.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns a slice of all violations.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Whether any violation points at `instance_path`.
    pub fn touches(&self, instance_path: &str) -> bool {
        self.violations
            .iter()
            .any(|v| v.instance_path == instance_path)
    }
}

impl fmt::Display for ValidationViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

/// A compiled validator for one registry's root record.
///
/// Building the validator renders the registry's JSON Schema and
/// registers the custom formats; validating a record is then a pure
/// function of the record.
pub struct RecordValidator {
    schema_name: String,
    validator: Validator,
}

impl fmt::Debug for RecordValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordValidator")
            .field("schema_name", &self.schema_name)
            .finish_non_exhaustive()
    }
}

impl RecordValidator {
    /// Compile a validator for the registry's root record.
    ///
    /// # Errors
    ///
    /// Returns `SchemaValidationError::ValidatorBuildError` if the rendered
    /// schema cannot be compiled.
    pub fn new(registry: &TypeRegistry) -> Result<Self, SchemaValidationError> {
        let schema_name = registry.root_name().to_string();
        let schema = render_json_schema(registry);

        let validator = build_options().build(&schema).map_err(|e| {
            SchemaValidationError::ValidatorBuildError {
                schema_name: schema_name.clone(),
                reason: e.to_string(),
            }
        })?;

        tracing::debug!(schema = %schema_name, "compiled record validator");

        Ok(Self {
            schema_name,
            validator,
        })
    }

    /// Name of the schema (the root record's type name).
    pub fn schema_name(&self) -> &str {
        &self.schema_name
    }

    /// Collect every violation of `instance`; empty when valid.
    pub fn violations(&self, instance: &Value) -> ValidationViolations {
        let violations = self
            .validator
            .iter_errors(instance)
            .map(|e| Violation {
                instance_path: e.instance_path.to_string(),
                schema_path: e.schema_path.to_string(),
                message: e.to_string(),
            })
            .collect();
        ValidationViolations { violations }
    }

    /// Validate a parsed JSON value.
    ///
    /// # Errors
    ///
    /// Returns `SchemaValidationError::ValidationFailed` with structured
    /// violation details if the document is invalid.
    pub fn validate_value(&self, instance: &Value) -> Result<(), SchemaValidationError> {
        let violations = self.violations(instance);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(SchemaValidationError::ValidationFailed {
                schema_name: self.schema_name.clone(),
                violations,
            })
        }
    }

    /// Validate a typed record.
    pub fn validate<T: Serialize>(&self, record: &T) -> Result<(), SchemaValidationError> {
        let instance = serde_json::to_value(record)?;
        self.validate_value(&instance)
    }

    /// Validate a YAML or JSON document, loading it from a file path.
    ///
    /// The format is chosen from the extension, ignoring case: `.yaml`
    /// or `.yml` for YAML, anything else is read as JSON.
    pub fn validate_file(&self, document_path: &Path) -> Result<(), SchemaValidationError> {
        let instance = load_document(document_path)?;
        self.validate_value(&instance)
            .map_err(|e| match e {
                SchemaValidationError::ValidationFailed { violations, .. } => {
                    SchemaValidationError::ValidationFailed {
                        schema_name: format!("{} ({})", self.schema_name, document_path.display()),
                        violations,
                    }
                }
                other => other,
            })
    }
}

/// Options shared by every record validator: Draft 2020-12 with the
/// three-word phrase registered as an asserted format.
fn build_options() -> ValidationOptions {
    let mut opts = jsonschema::options();
    opts.with_draft(jsonschema::Draft::Draft202012);
    opts.with_format(THREE_WORD_PHRASE_FORMAT, is_absent_or_three_word_phrase);
    opts.should_validate_formats(true);
    opts
}

/// Read a YAML or JSON document into a JSON value.
pub fn load_document(path: &Path) -> Result<Value, SchemaValidationError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        SchemaValidationError::DocumentLoadError {
            path: path.display().to_string(),
            reason: format!("cannot read file: {e}"),
        }
    })?;

    match Format::from_path(path) {
        Some(Format::Yaml) => serde_yaml::from_str(&content).map_err(|e| {
            SchemaValidationError::DocumentLoadError {
                path: path.display().to_string(),
                reason: format!("invalid YAML: {e}"),
            }
        }),
        _ => serde_json::from_str(&content).map_err(|e| {
            SchemaValidationError::DocumentLoadError {
                path: path.display().to_string(),
                reason: format!("invalid JSON: {e}"),
            }
        }),
    }
}

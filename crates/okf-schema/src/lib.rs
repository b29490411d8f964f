//! # okf-schema — Registry, Validation and Encoding
//!
//! Everything that walks descriptor tables generically lives here:
//!
//! - [`registry`]: the closed type registry of a facility schema.
//! - [`json_schema`]: Draft 2020-12 JSON Schema rendering.
//! - [`validate`]: the jsonschema-backed validation engine with the
//!   `three-word-phrase` format registered.
//! - [`daml`]: DAML data-declaration rendering.
//! - [`emit`]: YAML/JSON/DAML encoding, decoding and file output.
//! - [`sample`]: the sample generator shared by every facility schema.
//!
//! ## Crate Policy
//!
//! - Depends only on `okf-core` within the workspace. Facility schemas
//!   plug in through [`FacilitySchema`].
//! - Library errors are `thiserror` enums; no `anyhow` here.

pub mod daml;
pub mod emit;
pub mod json_schema;
pub mod registry;
pub mod sample;
pub mod validate;

pub use daml::{daml_type, declared_types, render_daml};
pub use emit::{decode, EmitError, Encoder, Format, OutputLayout, WriteOptions, DAML_SOURCE_DIR};
pub use json_schema::{render_json_schema, JSON_SCHEMA_DIALECT};
pub use registry::{RegistryBuilder, RegistryError, TypeRegistry};
pub use sample::{generate, FacilitySchema, SampleOptions, SampleReport};
pub use validate::{
    load_document, RecordValidator, SchemaValidationError, ValidationViolations, Violation,
};

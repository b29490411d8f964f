//! # okf-cli — CLI Tool for the Open Knowledge Framework
//!
//! Provides the `okf` command-line interface over the OKW and OKT schemas.
//!
//! ## Subcommands
//!
//! - `okf sample` — write the sample record of each schema as YAML, JSON
//!   and DAML.
//! - `okf enums` — list every closed vocabulary of a schema.
//! - `okf schema` — print a schema as JSON Schema or as a DAML module.
//! - `okf validate` — validate a YAML or JSON document against a schema.
//!
//! ```bash
//! okf sample --output-root samples --create-dirs
//! okf enums okw
//! okf schema okt --format daml
//! okf validate okw samples/okw/okw.yaml
//! ```

pub mod config;
pub mod enums;
pub mod sample;
pub mod schema;
pub mod validate;

use std::fmt;
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use okf_okt::OktSchema;
use okf_okw::OkwSchema;
use okf_schema::{
    decode, generate, EmitError, FacilitySchema, Format, OutputLayout, RegistryError,
    SampleOptions, SampleReport, TypeRegistry,
};

/// A facility schema known to the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaKind {
    /// Open Know Where: manufacturing facilities.
    Okw,
    /// Open Know Terms: carrier and logistics facilities.
    Okt,
}

impl SchemaKind {
    /// Every schema, in generation order.
    pub const ALL: [SchemaKind; 2] = [SchemaKind::Okw, SchemaKind::Okt];

    /// Returns the string representation of this schema.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Okw => "okw",
            Self::Okt => "okt",
        }
    }

    /// Output naming of this schema.
    pub fn layout(&self) -> OutputLayout {
        match self {
            Self::Okw => OkwSchema::LAYOUT,
            Self::Okt => OktSchema::LAYOUT,
        }
    }

    /// The closed type registry of this schema.
    pub fn registry(&self) -> Result<TypeRegistry, RegistryError> {
        match self {
            Self::Okw => OkwSchema::registry(),
            Self::Okt => OktSchema::registry(),
        }
    }

    /// Run the sample generator of this schema.
    pub fn generate(&self, dir: &Path, options: &SampleOptions) -> Result<SampleReport, EmitError> {
        match self {
            Self::Okw => generate::<OkwSchema>(dir, options),
            Self::Okt => generate::<OktSchema>(dir, options),
        }
    }

    /// Decode a document into this schema's typed record, discarding it.
    pub fn check_decode(&self, bytes: &[u8], format: Format) -> Result<(), EmitError> {
        match self {
            Self::Okw => decode::<<OkwSchema as FacilitySchema>::Record>(bytes, format).map(drop),
            Self::Okt => decode::<<OktSchema as FacilitySchema>::Record>(bytes, format).map(drop),
        }
    }
}

impl fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! # Multi-Format Encoding
//!
//! One record, three sibling outputs:
//!
//! | Format | Content | Path under the output directory |
//! |--------|---------|---------------------------------|
//! | YAML | the record, declaration order | `<stem>.yaml` |
//! | JSON | the record, compact single line | `<stem>.json` |
//! | DAML | data declarations for every registered type | `src/main/daml/<MODULE>.daml` |
//!
//! YAML and JSON are encoded straight from the typed record, so both
//! follow field declaration order and expose the same key set. DAML is
//! rendered from the type registry and is write-only.
//!
//! ## Write Failures
//!
//! A failed write is surfaced as [`EmitError::Write`] carrying the path.
//! Files written before the failure are left in place. Missing parent
//! directories are created only when [`WriteOptions::create_dirs`] is set.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::daml::render_daml;
use crate::registry::{RegistryError, TypeRegistry};
use crate::validate::SchemaValidationError;

/// Directory, relative to the output directory, that holds DAML sources.
pub const DAML_SOURCE_DIR: &str = "src/main/daml";

/// Error while encoding, decoding or writing a record.
#[derive(Error, Debug)]
pub enum EmitError {
    /// YAML encoding or decoding failed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The type registry is not closed.
    #[error("type registry error: {0}")]
    Registry(#[from] RegistryError),

    /// The validation engine could not be built.
    #[error("validation engine error: {0}")]
    Validation(#[from] SchemaValidationError),

    /// The format is write-only.
    #[error("{0} documents cannot be decoded")]
    UnsupportedDecode(Format),

    /// Writing an output file failed.
    #[error("failed to write '{}': {source}", path.display())]
    Write {
        /// Path of the file or directory being written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Output format of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// Structured document format.
    Yaml,
    /// Compact interchange format.
    Json,
    /// Contract-description format.
    Daml,
}

impl Format {
    /// Every format, in write order.
    pub const ALL: [Format; 3] = [Format::Yaml, Format::Json, Format::Daml];

    /// Returns the string representation of this format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yaml => "yaml",
            Self::Json => "json",
            Self::Daml => "daml",
        }
    }

    /// File extension used for this format.
    pub fn extension(&self) -> &'static str {
        self.as_str()
    }

    /// Guess the format of a document from its file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension().and_then(|e| e.to_str())?;
        Self::ALL
            .into_iter()
            .find(|f| ext.eq_ignore_ascii_case(f.extension()))
            .or_else(|| ext.eq_ignore_ascii_case("yml").then_some(Self::Yaml))
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            "daml" => Ok(Self::Daml),
            other => Err(format!("unknown output format: {other:?}")),
        }
    }
}

/// File naming of one schema's outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputLayout {
    /// File stem of the YAML and JSON outputs (`okw`).
    pub stem: &'static str,
    /// DAML module name and file stem (`OKW`).
    pub module: &'static str,
}

impl OutputLayout {
    /// Path of the `format` output under `dir`.
    pub fn path(&self, dir: &Path, format: Format) -> PathBuf {
        match format {
            Format::Yaml | Format::Json => {
                dir.join(format!("{}.{}", self.stem, format.extension()))
            }
            Format::Daml => dir
                .join(DAML_SOURCE_DIR)
                .join(format!("{}.{}", self.module, format.extension())),
        }
    }
}

/// Filesystem behaviour of [`Encoder::write_all`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteOptions {
    /// Create missing parent directories before writing.
    pub create_dirs: bool,
}

/// Encodes records of one schema into every output format.
#[derive(Debug, Clone, Copy)]
pub struct Encoder<'a> {
    registry: &'a TypeRegistry,
    layout: OutputLayout,
}

impl<'a> Encoder<'a> {
    /// An encoder for records whose types are held by `registry`.
    pub fn new(registry: &'a TypeRegistry, layout: OutputLayout) -> Self {
        Self { registry, layout }
    }

    /// Encode `record` in `format`.
    pub fn encode<T: Serialize>(&self, record: &T, format: Format) -> Result<Vec<u8>, EmitError> {
        let bytes = match format {
            Format::Yaml => serde_yaml::to_string(record)?.into_bytes(),
            Format::Json => serde_json::to_vec(record)?,
            Format::Daml => render_daml(self.registry, self.layout.module).into_bytes(),
        };
        tracing::debug!(format = %format, bytes = bytes.len(), "encoded record");
        Ok(bytes)
    }

    /// Encode `record` in every format and write the outputs under `dir`.
    ///
    /// Returns the written paths in write order. The first failure stops
    /// the run.
    pub fn write_all<T: Serialize>(
        &self,
        record: &T,
        dir: &Path,
        options: &WriteOptions,
    ) -> Result<Vec<PathBuf>, EmitError> {
        let mut written = Vec::with_capacity(Format::ALL.len());
        for format in Format::ALL {
            let bytes = self.encode(record, format)?;
            let path = self.layout.path(dir, format);
            write_file(&path, &bytes, options)?;
            tracing::info!(path = %path.display(), format = %format, "wrote sample output");
            written.push(path);
        }
        Ok(written)
    }
}

/// Decode a YAML or JSON document into a typed record.
pub fn decode<T: DeserializeOwned>(bytes: &[u8], format: Format) -> Result<T, EmitError> {
    match format {
        Format::Yaml => Ok(serde_yaml::from_slice(bytes)?),
        Format::Json => Ok(serde_json::from_slice(bytes)?),
        Format::Daml => Err(EmitError::UnsupportedDecode(format)),
    }
}

fn write_file(path: &Path, bytes: &[u8], options: &WriteOptions) -> Result<(), EmitError> {
    if options.create_dirs {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| EmitError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    std::fs::write(path, bytes).map_err(|source| EmitError::Write {
        path: path.to_path_buf(),
        source,
    })
}

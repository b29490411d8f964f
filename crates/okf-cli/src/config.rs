//! # Configuration
//!
//! Optional YAML configuration file, passed with `--config`. Every key is
//! optional; command-line flags override the file.
//!
//! ```yaml
//! output_root: samples
//! schemas: [okw, okt]
//! create_dirs: false
//! report_violations: false
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::SchemaKind;

/// Default output root; each schema writes to `<root>/<schema>`.
pub const DEFAULT_OUTPUT_ROOT: &str = "samples";

/// Settings of an `okf` run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OkfConfig {
    /// Root directory of the sample outputs.
    pub output_root: PathBuf,
    /// Schemas generated by `okf sample`, in order.
    pub schemas: Vec<SchemaKind>,
    /// Create missing output directories.
    pub create_dirs: bool,
    /// Log violations of the generated samples as warnings.
    pub report_violations: bool,
}

impl Default for OkfConfig {
    fn default() -> Self {
        Self {
            output_root: PathBuf::from(DEFAULT_OUTPUT_ROOT),
            schemas: SchemaKind::ALL.to_vec(),
            create_dirs: false,
            report_violations: false,
        }
    }
}

impl OkfConfig {
    /// Load the configuration file, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;
        tracing::debug!(path = %path.display(), ?config, "loaded configuration");
        Ok(config)
    }

    /// Output directory of one schema.
    pub fn output_dir(&self, kind: SchemaKind) -> PathBuf {
        self.output_root.join(kind.as_str())
    }
}

//! # Sample Subcommand
//!
//! Runs the sample generator of each selected schema, one after the
//! other, writing `<root>/<schema>/<schema>.yaml`, `.json` and
//! `src/main/daml/<SCHEMA>.daml`. The first failure stops the run; files
//! already written stay in place.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use okf_schema::SampleOptions;

use crate::config::OkfConfig;
use crate::SchemaKind;

/// Arguments for the `okf sample` subcommand.
#[derive(Args, Debug, Default)]
pub struct SampleArgs {
    /// Root directory of the outputs (default: `samples`).
    #[arg(long, value_name = "DIR")]
    pub output_root: Option<PathBuf>,

    /// Schema to generate. Repeat for several; default is every schema.
    #[arg(long, value_enum)]
    pub schema: Vec<SchemaKind>,

    /// Create missing output directories.
    #[arg(long)]
    pub create_dirs: bool,

    /// Log every validation violation of the samples as a warning.
    #[arg(long)]
    pub report_violations: bool,
}

impl SampleArgs {
    /// Apply the flags on top of the configuration file.
    pub fn resolve(&self, config: &OkfConfig) -> OkfConfig {
        OkfConfig {
            output_root: self
                .output_root
                .clone()
                .unwrap_or_else(|| config.output_root.clone()),
            schemas: if self.schema.is_empty() {
                config.schemas.clone()
            } else {
                self.schema.clone()
            },
            create_dirs: self.create_dirs || config.create_dirs,
            report_violations: self.report_violations || config.report_violations,
        }
    }
}

/// Execute the sample subcommand.
///
/// Returns exit code 0 on success; failures are returned as errors.
pub fn run_sample(args: &SampleArgs, config: &OkfConfig) -> Result<u8> {
    let settings = args.resolve(config);
    let options = SampleOptions {
        create_dirs: settings.create_dirs,
        report_violations: settings.report_violations,
    };

    for kind in &settings.schemas {
        let dir = settings.output_dir(*kind);
        let report = kind
            .generate(&dir, &options)
            .with_context(|| format!("failed to generate {kind} sample in {}", dir.display()))?;
        for path in &report.written {
            println!("{}", path.display());
        }
        if !report.violations.is_empty() {
            tracing::info!(
                schema = report.schema_name,
                violations = report.violations.len(),
                "sample does not satisfy its own validation rules"
            );
        }
    }

    Ok(0)
}

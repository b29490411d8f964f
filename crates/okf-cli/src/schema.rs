//! # Schema Subcommand
//!
//! Prints a schema either as a Draft 2020-12 JSON Schema document or as
//! the DAML module written by the sample generator.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use okf_schema::{render_daml, render_json_schema};

use crate::SchemaKind;

/// Output format of `okf schema`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SchemaFormat {
    /// JSON Schema, pretty-printed.
    #[default]
    JsonSchema,
    /// DAML data declarations.
    Daml,
}

/// Arguments for the `okf schema` subcommand.
#[derive(Args, Debug)]
pub struct SchemaArgs {
    /// Schema to print.
    #[arg(value_enum)]
    pub schema: SchemaKind,

    /// Output format.
    #[arg(long, value_enum, default_value_t = SchemaFormat::JsonSchema)]
    pub format: SchemaFormat,
}

/// Execute the schema subcommand.
pub fn run_schema(args: &SchemaArgs) -> Result<u8> {
    println!("{}", render_schema(args.schema, args.format)?);
    Ok(0)
}

/// Render `kind` in `format`.
pub fn render_schema(kind: SchemaKind, format: SchemaFormat) -> Result<String> {
    let registry = kind
        .registry()
        .with_context(|| format!("failed to build {kind} type registry"))?;
    match format {
        SchemaFormat::JsonSchema => serde_json::to_string_pretty(&render_json_schema(&registry))
            .context("failed to serialize JSON Schema"),
        SchemaFormat::Daml => Ok(render_daml(&registry, kind.layout().module)),
    }
}

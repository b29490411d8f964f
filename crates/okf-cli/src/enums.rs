//! # Enums Subcommand
//!
//! Lists every closed vocabulary of a schema with its values, in
//! registry order.

use anyhow::{Context, Result};
use clap::Args;

use okf_core::Shape;

use crate::SchemaKind;

/// Arguments for the `okf enums` subcommand.
#[derive(Args, Debug)]
pub struct EnumsArgs {
    /// Schema whose vocabularies are listed.
    #[arg(value_enum)]
    pub schema: SchemaKind,
}

/// Execute the enums subcommand.
pub fn run_enums(args: &EnumsArgs) -> Result<u8> {
    print!("{}", render_enums(args.schema)?);
    Ok(0)
}

/// One block per vocabulary: its name, then one indented value per line.
pub fn render_enums(kind: SchemaKind) -> Result<String> {
    let registry = kind
        .registry()
        .with_context(|| format!("failed to build {kind} type registry"))?;

    let mut out = String::new();
    for ty in registry.types() {
        let Shape::Variants(variants) = &ty.shape else {
            continue;
        };
        out.push_str(ty.name);
        out.push('\n');
        if variants.is_empty() {
            out.push_str("  (no values)\n");
        }
        for variant in variants {
            out.push_str("  ");
            out.push_str(variant.value);
            out.push('\n');
        }
    }
    Ok(out)
}

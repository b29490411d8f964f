//! # Contract-Description Rendering
//!
//! Renders a type registry as a DAML module of data declarations. The
//! renderer never inspects Rust types: every declaration comes from the
//! registry's descriptor tables, so a nested type that is not registered
//! is caught when the registry is built rather than here.
//!
//! ## Declaration Forms
//!
//! | Descriptor | Declaration |
//! |------------|-------------|
//! | Record with fields | `data T = T with ... deriving (Eq, Show)` |
//! | Record without fields | `data T = T deriving (Eq, Show)` |
//! | Vocabulary with values | `data T = A \| B deriving (Eq, Show)` |
//! | Empty vocabulary, opaque | `type T = Text` |

use okf_core::{FieldType, Shape, TypeDescriptor};

use crate::registry::TypeRegistry;

const DERIVING: &str = "deriving (Eq, Show)";

/// Render the registry as a DAML module named `module`.
///
/// The root record is declared first, followed by every other registered
/// type in registration order.
pub fn render_daml(registry: &TypeRegistry, module: &str) -> String {
    let mut out = format!("module {module} where\n");
    for ty in registry.types() {
        out.push('\n');
        render_declaration(&mut out, ty);
    }
    tracing::debug!(module, types = registry.len(), "rendered contract module");
    out
}

fn render_declaration(out: &mut String, ty: &TypeDescriptor) {
    out.push_str(&format!("-- | {}\n", ty.doc));
    match &ty.shape {
        Shape::Record(fields) if fields.is_empty() => {
            out.push_str(&format!("data {0} = {0} {DERIVING}\n", ty.name));
        }
        Shape::Record(fields) => {
            out.push_str(&format!("data {0} = {0}\n", ty.name));
            out.push_str("  with\n");
            for field in fields.iter() {
                out.push_str(&format!(
                    "    {} : {}\n",
                    field.contract_key,
                    daml_type(&field.ty)
                ));
            }
            out.push_str(&format!("  {DERIVING}\n"));
        }
        Shape::Variants(variants) if variants.is_empty() => {
            out.push_str(&format!("type {} = Text\n", ty.name));
        }
        Shape::Variants(variants) => {
            let constructors: Vec<&str> = variants.iter().map(|v| v.constructor).collect();
            out.push_str(&format!("data {} = {}\n", ty.name, constructors.join(" | ")));
            out.push_str(&format!("  {DERIVING}\n"));
        }
        Shape::Opaque => {
            out.push_str(&format!("type {} = Text\n", ty.name));
        }
    }
}

/// DAML spelling of a field type.
pub fn daml_type(ty: &FieldType) -> String {
    match *ty {
        FieldType::Text => "Text".to_string(),
        FieldType::Integer => "Int".to_string(),
        FieldType::Decimal => "Decimal".to_string(),
        FieldType::Boolean => "Bool".to_string(),
        FieldType::Named(name) => name.to_string(),
        FieldType::Optional(inner) if matches!(inner, FieldType::Optional(_)) => {
            format!("Optional ({})", daml_type(inner))
        }
        FieldType::Optional(inner) => format!("Optional {}", daml_type(inner)),
        FieldType::List(inner) => format!("[{}]", daml_type(inner)),
    }
}

/// Names declared by a rendered module, in declaration order.
///
/// Recognises the `data` and `type` heads produced by [`render_daml`].
pub fn declared_types(module_source: &str) -> Vec<&str> {
    module_source
        .lines()
        .filter_map(|line| {
            line.strip_prefix("data ")
                .or_else(|| line.strip_prefix("type "))
        })
        .filter_map(|rest| rest.split_whitespace().next())
        .collect()
}

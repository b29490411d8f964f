//! # JSON Schema Rendering
//!
//! Renders a closed type registry as a single Draft 2020-12 JSON Schema
//! document: one `$defs` entry per registered type, `$ref` for named
//! references, and field rules translated to schema keywords.
//!
//! | Rule | Keywords |
//! |------|----------|
//! | `Required` | listed in `required`; text also gets `minLength: 1` |
//! | `ThreeWordPhrase` | `format: "three-word-phrase"` |
//! | `Range { min, max }` | `minimum`, `maximum` |
//!
//! The `three-word-phrase` format is not a standard format; validators
//! must register it (see [`crate::validate::RecordValidator`]).

use serde_json::{json, Map, Value};

use okf_core::{FieldDescriptor, FieldType, Rule, Shape, TypeDescriptor, THREE_WORD_PHRASE_FORMAT};

use crate::registry::TypeRegistry;

/// Dialect declared by rendered schemas.
pub const JSON_SCHEMA_DIALECT: &str = "https://json-schema.org/draft/2020-12/schema";

/// Render the registry as a JSON Schema whose root is the registry's root record.
pub fn render_json_schema(registry: &TypeRegistry) -> Value {
    let mut defs = Map::new();
    for ty in registry.types() {
        defs.insert(ty.name.to_string(), type_schema(ty));
    }

    let root = registry.root();
    json!({
        "$schema": JSON_SCHEMA_DIALECT,
        "title": root.name,
        "description": root.doc,
        "$ref": definition_ref(root.name),
        "$defs": defs,
    })
}

fn definition_ref(name: &str) -> String {
    format!("#/$defs/{name}")
}

fn type_schema(ty: &TypeDescriptor) -> Value {
    match &ty.shape {
        Shape::Record(fields) => {
            let mut properties = Map::new();
            let mut required = Vec::new();
            for field in fields.iter() {
                properties.insert(field.key.to_string(), field_schema(field));
                if field.rule == Some(Rule::Required) {
                    required.push(Value::String(field.key.to_string()));
                }
            }
            json!({
                "type": "object",
                "description": ty.doc,
                "properties": properties,
                "required": required,
                "additionalProperties": false,
            })
        }
        Shape::Variants(variants) if variants.is_empty() => {
            // No published values: nothing is accepted.
            json!({ "description": ty.doc, "not": {} })
        }
        Shape::Variants(variants) => {
            let values: Vec<&str> = variants.iter().map(|v| v.value).collect();
            json!({ "type": "string", "description": ty.doc, "enum": values })
        }
        Shape::Opaque => json!({ "description": ty.doc }),
    }
}

fn field_schema(field: &FieldDescriptor) -> Value {
    let mut schema = value_schema(&field.ty);
    if let Value::Object(map) = &mut schema {
        map.insert("description".to_string(), Value::String(field.doc.to_string()));
        match field.rule {
            Some(Rule::Required) if field.ty == FieldType::Text => {
                map.insert("minLength".to_string(), json!(1));
            }
            Some(Rule::ThreeWordPhrase) => {
                map.insert("format".to_string(), json!(THREE_WORD_PHRASE_FORMAT));
            }
            Some(Rule::Range { min, max }) => {
                map.insert("minimum".to_string(), json!(min));
                map.insert("maximum".to_string(), json!(max));
            }
            Some(Rule::Required) | None => {}
        }
    }
    schema
}

fn value_schema(ty: &FieldType) -> Value {
    match *ty {
        FieldType::Text => json!({ "type": "string" }),
        FieldType::Integer => json!({ "type": "integer" }),
        FieldType::Decimal => json!({ "type": "number" }),
        FieldType::Boolean => json!({ "type": "boolean" }),
        FieldType::Named(name) => json!({ "$ref": definition_ref(name) }),
        FieldType::Optional(inner) => json!({
            "anyOf": [{ "type": "null" }, value_schema(inner)],
        }),
        FieldType::List(inner) => json!({ "type": "array", "items": value_schema(inner) }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use okf_core::{
        Address, Agent, Contact, CustomerReview, Describe, FacilityStatus, Gps, Location, Skill,
        SocialMedia, What3Words,
    };

    fn agent_registry() -> TypeRegistry {
        TypeRegistry::builder::<Agent>()
            .register::<Location>()
            .register::<Address>()
            .register::<Gps>()
            .register::<What3Words>()
            .register::<Contact>()
            .register::<SocialMedia>()
            .build()
            .unwrap()
    }

    #[test]
    fn test_root_refers_to_root_definition() {
        let schema = render_json_schema(&agent_registry());
        assert_eq!(schema["$schema"], JSON_SCHEMA_DIALECT);
        assert_eq!(schema["$ref"], "#/$defs/Agent");
        assert_eq!(schema["$defs"].as_object().unwrap().len(), 7);
    }

    #[test]
    fn test_required_text_gets_min_length() {
        let schema = render_json_schema(&agent_registry());
        let agent = &schema["$defs"]["Agent"];
        assert_eq!(agent["required"], json!(["name"]));
        assert_eq!(agent["properties"]["name"]["minLength"], 1);
        assert_eq!(agent["additionalProperties"], false);
        assert_eq!(agent["properties"]["location"]["$ref"], "#/$defs/Location");
    }

    #[test]
    fn test_phrase_rule_becomes_format() {
        let schema = render_json_schema(&agent_registry());
        let coordinates = &schema["$defs"]["What3Words"]["properties"]["coordinates"];
        assert_eq!(coordinates["type"], "string");
        assert_eq!(coordinates["format"], THREE_WORD_PHRASE_FORMAT);
    }

    #[test]
    fn test_range_rule_becomes_bounds() {
        let field = CustomerReview::describe().field_by_key("rating").copied().unwrap();
        let schema = field_schema(&field);
        assert_eq!(schema["type"], "integer");
        assert_eq!(schema["minimum"], 1);
        assert_eq!(schema["maximum"], 5);
    }

    #[test]
    fn test_vocabulary_schemas() {
        let status = type_schema(&FacilityStatus::describe());
        assert_eq!(
            status["enum"],
            json!(["Active", "Planned", "Temporary Closure", "Closed"])
        );
        let skill = type_schema(&Skill::describe());
        assert_eq!(skill["not"], json!({}));
    }

    #[test]
    fn test_optional_and_list_shapes() {
        let optional = value_schema(&FieldType::Optional(&FieldType::Named("FacilityStatus")));
        assert_eq!(optional["anyOf"][0]["type"], "null");
        assert_eq!(optional["anyOf"][1]["$ref"], "#/$defs/FacilityStatus");
        let list = value_schema(&FieldType::List(&FieldType::Text));
        assert_eq!(list["type"], "array");
        assert_eq!(list["items"]["type"], "string");
    }
}

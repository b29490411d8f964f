//! # Field Descriptor Tables
//!
//! Every schema type carries one descriptor table: the type name, its
//! documentation line, and either its fields, its vocabulary variants,
//! or a marker that the type is free-form. Serializers and validators
//! consume the tables generically instead of hardcoding per-field logic.
//!
//! ## Key Invariant
//!
//! A field's `key` is the single name shared by the structured-document
//! (YAML) and compact (JSON) encodings. It must equal the `serde` name
//! of the corresponding Rust field; each schema crate carries a test
//! that serializes the zero value of every record type and compares the
//! produced keys against its table.

use crate::vocabulary::Vocabulary;

/// Shape of a field's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// Free text.
    Text,
    /// Signed integer.
    Integer,
    /// Decimal number (decimal degrees, measurements).
    Decimal,
    /// `true` / `false`.
    Boolean,
    /// Reference to another registered type by name.
    Named(&'static str),
    /// A value that may be absent.
    Optional(&'static FieldType),
    /// An ordered list.
    List(&'static FieldType),
}

impl FieldType {
    /// Name of the registered type this field ultimately refers to, if any.
    pub fn referenced_type(&self) -> Option<&'static str> {
        match *self {
            Self::Named(name) => Some(name),
            Self::Optional(inner) | Self::List(inner) => inner.referenced_type(),
            Self::Text | Self::Integer | Self::Decimal | Self::Boolean => None,
        }
    }
}

/// Validation rule attached to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// The field must be present and, for text, non-empty.
    Required,
    /// When non-empty, the text must be a three-word phrase.
    ThreeWordPhrase,
    /// Integer bounds, both inclusive.
    Range {
        /// Lowest accepted value.
        min: i64,
        /// Highest accepted value.
        max: i64,
    },
}

/// One row of a record's field table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Rust field name.
    pub name: &'static str,
    /// Key shared by the YAML and JSON encodings.
    pub key: &'static str,
    /// Field name in the contract-description (DAML) format.
    pub contract_key: &'static str,
    /// Value shape.
    pub ty: FieldType,
    /// Validation rule, if any.
    pub rule: Option<Rule>,
    /// One-line definition.
    pub doc: &'static str,
}

impl FieldDescriptor {
    /// A field with no validation rule.
    pub const fn new(
        name: &'static str,
        key: &'static str,
        contract_key: &'static str,
        ty: FieldType,
        doc: &'static str,
    ) -> Self {
        Self {
            name,
            key,
            contract_key,
            ty,
            rule: None,
            doc,
        }
    }

    /// Attach a validation rule.
    pub const fn with_rule(mut self, rule: Rule) -> Self {
        self.rule = Some(rule);
        self
    }
}

/// One value of a closed vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantDescriptor {
    /// Identifier form (`TemporaryClosure`).
    pub constructor: &'static str,
    /// Wire string (`Temporary Closure`).
    pub value: &'static str,
}

/// Body of a type descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    /// A record with named fields, in declaration order.
    Record(&'static [FieldDescriptor]),
    /// A closed vocabulary. May be empty.
    Variants(Vec<VariantDescriptor>),
    /// Free-form structured value with no fixed shape.
    Opaque,
}

/// Descriptor of one schema type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    /// Type name, unique within a registry.
    pub name: &'static str,
    /// One-line definition.
    pub doc: &'static str,
    /// Fields, variants, or opaque marker.
    pub shape: Shape,
}

impl TypeDescriptor {
    /// Descriptor of a record type.
    pub const fn record(
        name: &'static str,
        doc: &'static str,
        fields: &'static [FieldDescriptor],
    ) -> Self {
        Self {
            name,
            doc,
            shape: Shape::Record(fields),
        }
    }

    /// Descriptor of a free-form type.
    pub const fn opaque(name: &'static str, doc: &'static str) -> Self {
        Self {
            name,
            doc,
            shape: Shape::Opaque,
        }
    }

    /// Descriptor of a closed vocabulary, listing its values in order.
    pub fn vocabulary<V: Vocabulary>(doc: &'static str) -> Self {
        Self {
            name: V::NAME,
            doc,
            shape: Shape::Variants(
                V::list_values()
                    .iter()
                    .map(|v| VariantDescriptor {
                        constructor: v.constructor(),
                        value: v.as_str(),
                    })
                    .collect(),
            ),
        }
    }

    /// Fields of a record descriptor; empty for other shapes.
    pub fn fields(&self) -> &'static [FieldDescriptor] {
        match self.shape {
            Shape::Record(fields) => fields,
            Shape::Variants(_) | Shape::Opaque => &[],
        }
    }

    /// Look up a field by its shared key.
    pub fn field_by_key(&self, key: &str) -> Option<&'static FieldDescriptor> {
        self.fields().iter().find(|f| f.key == key)
    }

    /// Names of all types this descriptor refers to, in field order,
    /// paired with the referencing field name.
    pub fn references(&self) -> Vec<(&'static str, &'static str)> {
        self.fields()
            .iter()
            .filter_map(|f| f.ty.referenced_type().map(|t| (f.name, t)))
            .collect()
    }
}

/// A schema type that can describe itself.
pub trait Describe {
    /// The type's descriptor table.
    fn describe() -> TypeDescriptor;
}

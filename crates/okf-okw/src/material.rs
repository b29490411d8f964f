//! # Materials and Equipment Properties
//!
//! OKW records materials with an extra classified material type next to
//! the free-text one, and describes machine capabilities through
//! [`EquipmentProperties`].

use serde::{Deserialize, Serialize};

use okf_core::{
    vocabulary_impls, Describe, FieldDescriptor, FieldType, Location, TypeDescriptor, Vocabulary,
};

/// Classified material type. No values published yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaterialType {}

impl Vocabulary for MaterialType {
    const NAME: &'static str = "MaterialType";

    fn list_values() -> &'static [Self] {
        &[]
    }

    fn as_str(&self) -> &'static str {
        match *self {}
    }

    fn constructor(&self) -> &'static str {
        match *self {}
    }
}

vocabulary_impls! {
    MaterialType => "Classified type of a material.",
}

/// A material used or produced by a manufacturing facility.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Material {
    /// Free-text material type, by convention a Wikipedia URL.
    pub material_type: String,
    pub manufacturer: String,
    pub brand: String,
    pub supplier_location: Location,
    pub defined_material_type: Option<MaterialType>,
}

const MATERIAL_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new(
        "material_type",
        "material_type",
        "materialType",
        FieldType::Text,
        "Type of material.",
    ),
    FieldDescriptor::new(
        "manufacturer",
        "manufacturer",
        "manufacturer",
        FieldType::Text,
        "Manufacturer of the material.",
    ),
    FieldDescriptor::new("brand", "brand", "brand", FieldType::Text, "Brand of the material."),
    FieldDescriptor::new(
        "supplier_location",
        "supplier_location",
        "supplierLocation",
        FieldType::Named("Location"),
        "Location of the supplier.",
    ),
    FieldDescriptor::new(
        "defined_material_type",
        "defined_material_type",
        "definedMaterialType",
        FieldType::Optional(&FieldType::Named("MaterialType")),
        "Classified type of the material.",
    ),
];

impl Describe for Material {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::record("Material", "A material used or produced.", MATERIAL_FIELDS)
    }
}

/// Capabilities of a piece of equipment. Lengths are in millimetres.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EquipmentProperties {
    pub axes: i64,
    pub bed_size: i64,
    pub bending_length: i64,
    pub build_volume: i64,
    pub chuck_jaw_diameter: i64,
    pub collet_size: i64,
    pub computer_controlled: bool,
    pub cross_slide_travel: i64,
    pub daylight_opening: i64,
    pub distance_between_centres: i64,
    pub ejector_threads: i64,
    pub extraction_system: bool,
    pub gantry_material: Material,
}

const EQUIPMENT_PROPERTIES_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new("axes", "axes", "axes", FieldType::Integer, "Number of axes."),
    FieldDescriptor::new(
        "bed_size",
        "bed_size",
        "bedSize",
        FieldType::Integer,
        "Bed size of the equipment.",
    ),
    FieldDescriptor::new(
        "bending_length",
        "bending_length",
        "bendingLength",
        FieldType::Integer,
        "Maximum bending length.",
    ),
    FieldDescriptor::new(
        "build_volume",
        "build_volume",
        "buildVolume",
        FieldType::Integer,
        "Build volume.",
    ),
    FieldDescriptor::new(
        "chuck_jaw_diameter",
        "chuck_jaw_diameter",
        "chuckJawDiameter",
        FieldType::Integer,
        "Chuck jaw diameter.",
    ),
    FieldDescriptor::new(
        "collet_size",
        "collet_size",
        "colletSize",
        FieldType::Integer,
        "Collet size.",
    ),
    FieldDescriptor::new(
        "computer_controlled",
        "computer_controlled",
        "computerControlled",
        FieldType::Boolean,
        "Whether the equipment is computer controlled.",
    ),
    FieldDescriptor::new(
        "cross_slide_travel",
        "cross_slide_travel",
        "crossSlideTravel",
        FieldType::Integer,
        "Cross slide travel.",
    ),
    FieldDescriptor::new(
        "daylight_opening",
        "daylight_opening",
        "daylightOpening",
        FieldType::Integer,
        "Daylight opening.",
    ),
    FieldDescriptor::new(
        "distance_between_centres",
        "distance_between_centres",
        "distanceBetweenCentres",
        FieldType::Integer,
        "Distance between centres.",
    ),
    FieldDescriptor::new(
        "ejector_threads",
        "ejector_threads",
        "ejectorThreads",
        FieldType::Integer,
        "Ejector threads.",
    ),
    FieldDescriptor::new(
        "extraction_system",
        "extraction_system",
        "extractionSystem",
        FieldType::Boolean,
        "Whether an extraction system is fitted.",
    ),
    FieldDescriptor::new(
        "gantry_material",
        "gantry_material",
        "gantryMaterial",
        FieldType::Named("Material"),
        "Material of the gantry.",
    ),
];

impl Describe for EquipmentProperties {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::record(
            "EquipmentProperties",
            "Capabilities of a piece of equipment.",
            EQUIPMENT_PROPERTIES_FIELDS,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use okf_core::Shape;

    #[test]
    fn test_material_type_is_empty() {
        assert!(MaterialType::list_values().is_empty());
        assert!("Steel".parse::<MaterialType>().is_err());
        assert_eq!(MaterialType::describe().shape, Shape::Variants(Vec::new()));
    }

    #[test]
    fn test_defined_material_type_defaults_to_null() {
        let json = serde_json::to_value(Material::default()).unwrap();
        assert!(json["defined_material_type"].is_null());
        assert_eq!(json["material_type"], "");
    }

    #[test]
    fn test_material_decodes_partial_document() {
        let material: Material =
            serde_json::from_str(r#"{"brand":"Acme","supplier_location":{"directions":"north"}}"#)
                .unwrap();
        assert_eq!(material.brand, "Acme");
        assert_eq!(material.supplier_location.directions, "north");
        assert!(material.defined_material_type.is_none());
    }

    #[test]
    fn test_unknown_material_type_rejected() {
        let result: Result<Material, _> =
            serde_json::from_str(r#"{"defined_material_type":"Steel"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_equipment_properties_references_material() {
        assert_eq!(
            EquipmentProperties::describe().references(),
            vec![("gantry_material", "Material")]
        );
    }
}

//! # Equipment, Materials and Reviews
//!
//! Value objects describing what a facility has on site and how it is
//! rated. Equipment and material types are recorded as free text (by
//! convention the Wikipedia URL of the equipment type, process or
//! material), not as closed vocabularies.

use serde::{Deserialize, Serialize};

use crate::descriptor::{Describe, FieldDescriptor, FieldType, Rule, TypeDescriptor};
use crate::location::Location;
use crate::vocabulary::Skill;

/// Lowest accepted customer review rating.
pub const MIN_RATING: i64 = 1;
/// Highest accepted customer review rating.
pub const MAX_RATING: i64 = 5;

/// A tool or machine available at a facility.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Equipment {
    /// Classification of the equipment.
    pub equipment_type: String,
    /// Manufacturing process the equipment is capable of.
    pub manufacturing_process: String,
    pub make: String,
    pub model: String,
    pub serial_number: String,
    pub location: Location,
    pub skills_required: Vec<Skill>,
    /// Condition of the equipment, so a user can judge whether it can do the job.
    pub condition: String,
}

const EQUIPMENT_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new(
        "equipment_type",
        "equipment_type",
        "equipmentType",
        FieldType::Text,
        "Classification of the equipment.",
    ),
    FieldDescriptor::new(
        "manufacturing_process",
        "manufacturing_process",
        "manufacturingProcess",
        FieldType::Text,
        "Manufacturing process the equipment is capable of.",
    ),
    FieldDescriptor::new("make", "make", "make", FieldType::Text, "Make of the equipment."),
    FieldDescriptor::new("model", "model", "model", FieldType::Text, "Model of the equipment."),
    FieldDescriptor::new(
        "serial_number",
        "serial_number",
        "serialNumber",
        FieldType::Text,
        "Serial number of the equipment.",
    ),
    FieldDescriptor::new(
        "location",
        "location",
        "location",
        FieldType::Named("Location"),
        "Location of the equipment.",
    ),
    FieldDescriptor::new(
        "skills_required",
        "skills_required",
        "skillsRequired",
        FieldType::List(&FieldType::Named("Skill")),
        "Skills required to operate the equipment.",
    ),
    FieldDescriptor::new(
        "condition",
        "condition",
        "condition",
        FieldType::Text,
        "Condition of the equipment.",
    ),
];

impl Describe for Equipment {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::record(
            "Equipment",
            "The equipment available for use at the facility.",
            EQUIPMENT_FIELDS,
        )
    }
}

/// A material used or produced by a facility.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Material {
    pub material_type: String,
    pub manufacturer: String,
    pub brand: String,
    pub supplier_location: Location,
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
];

impl Describe for Material {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::record("Material", "A material used or produced.", MATERIAL_FIELDS)
    }
}

/// A customer review of a facility.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerReview {
    pub identifier: String,
    /// Between [`MIN_RATING`] and [`MAX_RATING`] inclusive.
    pub rating: i64,
    pub body: String,
}

const CUSTOMER_REVIEW_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new(
        "identifier",
        "identifier",
        "identifier",
        FieldType::Text,
        "Identifier of the review.",
    ),
    FieldDescriptor::new("rating", "rating", "rating", FieldType::Integer, "Rating from 1 to 5.")
        .with_rule(Rule::Range {
            min: MIN_RATING,
            max: MAX_RATING,
        }),
    FieldDescriptor::new("body", "body", "body", FieldType::Text, "Text of the review."),
];

impl Describe for CustomerReview {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::record(
            "CustomerReview",
            "Customer review of the facility.",
            CUSTOMER_REVIEW_FIELDS,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_range_rule() {
        let desc = CustomerReview::describe();
        assert_eq!(
            desc.field_by_key("rating").unwrap().rule,
            Some(Rule::Range { min: 1, max: 5 })
        );
    }

    #[test]
    fn test_review_identifier_key() {
        let review = CustomerReview {
            identifier: "r-1".to_string(),
            rating: 4,
            body: "Helpful staff".to_string(),
        };
        let json = serde_json::to_value(&review).unwrap();
        assert_eq!(json["identifier"], "r-1");
        assert_eq!(json["rating"], 4);
    }

    #[test]
    fn test_equipment_skills_start_empty() {
        let equipment = Equipment::default();
        let json = serde_json::to_value(&equipment).unwrap();
        assert_eq!(json["skills_required"], serde_json::json!([]));
        assert_eq!(
            Equipment::describe().references(),
            vec![("location", "Location"), ("skills_required", "Skill")]
        );
    }

    #[test]
    fn test_material_references_location() {
        assert_eq!(
            Material::describe().references(),
            vec![("supplier_location", "Location")]
        );
    }
}

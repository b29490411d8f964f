//! # The OKW Record
//!
//! One manufacturing facility. Field order is the order in which the
//! record is written in every output format.

use serde::{Deserialize, Serialize};

use okf_core::{
    AccessType, Agent, Certification, CustomerReview, Describe, Equipment, FacilityStatus,
    FieldDescriptor, FieldType, Location, Rule, TypeDescriptor, TypicalBatchSize,
};

use crate::capacity::{CircularEconomy, HumanCapacity, InnovationSpace};
use crate::material::Material;

/// Open Know Where: a manufacturing facility.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Okw {
    pub name: String,
    pub location: Location,
    /// Agent who owns or manages the facility.
    pub owner: Agent,
    /// Agent to contact for enquiries about making.
    pub contact: Agent,
    pub affiliations: Vec<Agent>,
    pub facility_status: Option<FacilityStatus>,
    pub opening_hours: String,
    pub description: String,
    /// ISO 8601 date; year or year-month alone is acceptable.
    pub date_founded: String,
    pub access_type: Option<AccessType>,
    pub wheelchair_accessibility: bool,
    pub equipment: Equipment,
    pub manufacturing_processes: String,
    pub typical_batch_size: Option<TypicalBatchSize>,
    /// Square metres.
    pub size_floor_size: i64,
    pub storage_capacity: String,
    pub typical_materials: Vec<Material>,
    pub certifications: Vec<Certification>,
    pub backup_generator: bool,
    pub uninterrupted_power_supply: bool,
    pub road_access: bool,
    pub loading_dock: bool,
    pub maintenance_schedule: String,
    pub typical_products: Vec<String>,
    pub partner_funder: Agent,
    pub customer_reviews: Vec<CustomerReview>,
    pub circular_economy: CircularEconomy,
    pub human_capacity: HumanCapacity,
    pub innovation_space: InnovationSpace,
}

pub(crate) const OKW_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new("name", "name", "name", FieldType::Text, "Name of the facility.")
        .with_rule(Rule::Required),
    FieldDescriptor::new(
        "location",
        "location",
        "location",
        FieldType::Named("Location"),
        "Location of the facility.",
    ),
    FieldDescriptor::new(
        "owner",
        "owner",
        "owner",
        FieldType::Named("Agent"),
        "Agent who owns or manages the facility.",
    ),
    FieldDescriptor::new(
        "contact",
        "contact",
        "contact",
        FieldType::Named("Agent"),
        "Agent who is the contact for enquiries about making.",
    )
    .with_rule(Rule::Required),
    FieldDescriptor::new(
        "affiliations",
        "affiliations",
        "affiliations",
        FieldType::List(&FieldType::Named("Agent")),
        "Agents the facility is affiliated with.",
    ),
    FieldDescriptor::new(
        "facility_status",
        "facility_status",
        "facilityStatus",
        FieldType::Optional(&FieldType::Named("FacilityStatus")),
        "Status of the facility.",
    ),
    FieldDescriptor::new(
        "opening_hours",
        "opening_hours",
        "openingHours",
        FieldType::Text,
        "Hours in which the facility operates.",
    ),
    FieldDescriptor::new(
        "description",
        "description",
        "description",
        FieldType::Text,
        "Description of the facility.",
    ),
    FieldDescriptor::new(
        "date_founded",
        "date_founded",
        "dateFounded",
        FieldType::Text,
        "Date the facility was founded.",
    ),
    FieldDescriptor::new(
        "access_type",
        "access_type",
        "accessType",
        FieldType::Optional(&FieldType::Named("AccessType")),
        "How the manufacturing equipment is accessed.",
    ),
    FieldDescriptor::new(
        "wheelchair_accessibility",
        "wheelchair_accessibility",
        "wheelchairAccessibility",
        FieldType::Boolean,
        "Whether the facility is wheelchair accessible.",
    ),
    FieldDescriptor::new(
        "equipment",
        "equipment",
        "equipment",
        FieldType::Named("Equipment"),
        "Equipment available for use at the facility.",
    ),
    FieldDescriptor::new(
        "manufacturing_processes",
        "manufacturing_processes",
        "manufacturingProcesses",
        FieldType::Text,
        "Manufacturing processes the facility is capable of.",
    ),
    FieldDescriptor::new(
        "typical_batch_size",
        "typical_batch_size",
        "typicalBatchSize",
        FieldType::Optional(&FieldType::Named("TypicalBatchSize")),
        "Typical batch size output.",
    ),
    FieldDescriptor::new(
        "size_floor_size",
        "size_floor_size",
        "sizeFloorSize",
        FieldType::Integer,
        "Floor size of the facility in square metres.",
    ),
    FieldDescriptor::new(
        "storage_capacity",
        "storage_capacity",
        "storageCapacity",
        FieldType::Text,
        "Storage capacity of the facility.",
    ),
    FieldDescriptor::new(
        "typical_materials",
        "typical_materials",
        "typicalMaterials",
        FieldType::List(&FieldType::Named("Material")),
        "Typical materials used by the facility.",
    ),
    FieldDescriptor::new(
        "certifications",
        "certifications",
        "certifications",
        FieldType::List(&FieldType::Named("Certification")),
        "Certifications obtained by the facility.",
    ),
    FieldDescriptor::new(
        "backup_generator",
        "backup_generator",
        "backupGenerator",
        FieldType::Boolean,
        "Whether the facility has a backup generator.",
    ),
    FieldDescriptor::new(
        "uninterrupted_power_supply",
        "uninterrupted_power_supply",
        "uninterruptedPowerSupply",
        FieldType::Boolean,
        "Whether the facility has an uninterrupted power supply.",
    ),
    FieldDescriptor::new(
        "road_access",
        "road_access",
        "roadAccess",
        FieldType::Boolean,
        "Whether the facility has road access.",
    ),
    FieldDescriptor::new(
        "loading_dock",
        "loading_dock",
        "loadingDock",
        FieldType::Boolean,
        "Whether the facility has a loading dock.",
    ),
    FieldDescriptor::new(
        "maintenance_schedule",
        "maintenance_schedule",
        "maintenanceSchedule",
        FieldType::Text,
        "Maintenance schedule of the facility.",
    ),
    FieldDescriptor::new(
        "typical_products",
        "typical_products",
        "typicalProducts",
        FieldType::List(&FieldType::Text),
        "Typical products produced by the facility.",
    ),
    FieldDescriptor::new(
        "partner_funder",
        "partner_funder",
        "partnerFunder",
        FieldType::Named("Agent"),
        "Agent which partners or funds the facility.",
    ),
    FieldDescriptor::new(
        "customer_reviews",
        "customer_reviews",
        "customerReviews",
        FieldType::List(&FieldType::Named("CustomerReview")),
        "Customer reviews of the facility.",
    ),
    FieldDescriptor::new(
        "circular_economy",
        "circular_economy",
        "circularEconomy",
        FieldType::Named("CircularEconomy"),
        "Circular economy practice of the facility.",
    ),
    FieldDescriptor::new(
        "human_capacity",
        "human_capacity",
        "humanCapacity",
        FieldType::Named("HumanCapacity"),
        "Human capacity of the facility.",
    ),
    FieldDescriptor::new(
        "innovation_space",
        "innovation_space",
        "innovationSpace",
        FieldType::Named("InnovationSpace"),
        "Innovation space of the facility.",
    ),
];

impl Describe for Okw {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::record("OKW", "Open Know Where: a manufacturing facility.", OKW_FIELDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_value_keys_match_field_table() {
        let value = serde_json::to_value(Okw::default()).unwrap();
        let mut keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        let mut expected: Vec<&str> = OKW_FIELDS.iter().map(|f| f.key).collect();
        keys.sort_unstable();
        expected.sort_unstable();
        assert_eq!(keys, expected);
    }

    #[test]
    fn test_name_and_contact_required() {
        let desc = Okw::describe();
        let required: Vec<&str> = desc
            .fields()
            .iter()
            .filter(|f| f.rule == Some(Rule::Required))
            .map(|f| f.key)
            .collect();
        assert_eq!(required, vec!["name", "contact"]);
    }

    #[test]
    fn test_enum_fields_absent_by_default() {
        let value = serde_json::to_value(Okw::default()).unwrap();
        assert!(value["facility_status"].is_null());
        assert!(value["access_type"].is_null());
        assert!(value["typical_batch_size"].is_null());
    }

    #[test]
    fn test_decode_with_status_and_access() {
        let okw: Okw = serde_json::from_str(
            r#"{"name":"Fab Lab","facility_status":"Temporary Closure","access_type":"Shared space"}"#,
        )
        .unwrap();
        assert_eq!(okw.facility_status, Some(FacilityStatus::TemporaryClosure));
        assert_eq!(okw.access_type, Some(AccessType::SharedSpace));
        assert_eq!(okw.name, "Fab Lab");
    }

    #[test]
    fn test_decode_rejects_unknown_status() {
        let result: Result<Okw, _> = serde_json::from_str(r#"{"facility_status":"Open"}"#);
        assert!(result.is_err());
    }
}

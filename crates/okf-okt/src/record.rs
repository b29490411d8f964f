//! # The OKT Record
//!
//! One carrier or logistics facility: its fleet, the services it offers,
//! where it operates and under which permits.

use serde::{Deserialize, Serialize};

use okf_core::{
    opaque_types, Agent, Certification, CustomerReview, Describe, Equipment, FacilityStatus,
    FieldDescriptor, FieldType, Location, Material, Rule, Service, TypeDescriptor,
};

use crate::vehicle::Vehicle;

opaque_types! {
    /// An area served by a carrier.
    GeoShape => "An area served by the carrier.",
    /// A permit held by a carrier.
    Permit => "A permit held by the carrier.",
}

/// Open Know Terms: a carrier or logistics facility.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Okt {
    pub name: String,
    pub description: String,
    pub location: Location,
    pub owner: Agent,
    pub contact: Agent,
    pub affiliations: Vec<Agent>,
    pub facility_status: Option<FacilityStatus>,
    pub opening_hours: String,
    pub vehicles: Vec<Vehicle>,
    pub services: Vec<Service>,
    #[serde(rename = "areasOfService")]
    pub areas_of_service: Vec<GeoShape>,
    pub permits: Vec<Permit>,
    pub date_founded: String,
    pub equipment: Equipment,
    pub typical_materials: Vec<Material>,
    pub certifications: Vec<Certification>,
    pub customer_reviews: Vec<CustomerReview>,
}

pub(crate) const OKT_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new("name", "name", "name", FieldType::Text, "Name of the facility.")
        .with_rule(Rule::Required),
    FieldDescriptor::new(
        "description",
        "description",
        "description",
        FieldType::Text,
        "Description of the facility.",
    ),
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
        "Agent who is the contact for enquiries.",
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
        "vehicles",
        "vehicles",
        "vehicles",
        FieldType::List(&FieldType::Named("Vehicle")),
        "Vehicles operated by the carrier.",
    ),
    FieldDescriptor::new(
        "services",
        "services",
        "services",
        FieldType::List(&FieldType::Named("Service")),
        "Services offered by the carrier.",
    ),
    FieldDescriptor::new(
        "areas_of_service",
        "areasOfService",
        "areasOfService",
        FieldType::List(&FieldType::Named("GeoShape")),
        "Areas served by the carrier.",
    ),
    FieldDescriptor::new(
        "permits",
        "permits",
        "permits",
        FieldType::List(&FieldType::Named("Permit")),
        "Permits held by the carrier.",
    ),
    FieldDescriptor::new(
        "date_founded",
        "date_founded",
        "dateFounded",
        FieldType::Text,
        "Date the facility was founded.",
    ),
    FieldDescriptor::new(
        "equipment",
        "equipment",
        "equipment",
        FieldType::Named("Equipment"),
        "Equipment available at the facility.",
    ),
    FieldDescriptor::new(
        "typical_materials",
        "typical_materials",
        "typicalMaterials",
        FieldType::List(&FieldType::Named("Material")),
        "Typical materials handled by the facility.",
    ),
    FieldDescriptor::new(
        "certifications",
        "certifications",
        "certifications",
        FieldType::List(&FieldType::Named("Certification")),
        "Certifications obtained by the facility.",
    ),
    FieldDescriptor::new(
        "customer_reviews",
        "customer_reviews",
        "customerReviews",
        FieldType::List(&FieldType::Named("CustomerReview")),
        "Customer reviews of the facility.",
    ),
];

impl Describe for Okt {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::record(
            "OKT",
            "Open Know Terms: a carrier or logistics facility.",
            OKT_FIELDS,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_zero_value_keys_match_field_table() {
        let value = serde_json::to_value(Okt::default()).unwrap();
        let mut keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        let mut expected: Vec<&str> = OKT_FIELDS.iter().map(|f| f.key).collect();
        keys.sort_unstable();
        expected.sort_unstable();
        assert_eq!(keys, expected);
    }

    #[test]
    fn test_free_form_values_pass_through() {
        let okt: Okt = serde_json::from_value(json!({
            "name": "Cargo Bikes Ltd",
            "areasOfService": [{ "type": "Polygon", "coordinates": [[0, 0], [1, 1]] }],
            "permits": ["LGV operator licence"],
        }))
        .unwrap();
        assert_eq!(okt.areas_of_service.len(), 1);
        assert_eq!(okt.areas_of_service[0].0["type"], "Polygon");
        assert_eq!(okt.permits[0], Permit(json!("LGV operator licence")));

        let back = serde_json::to_value(&okt).unwrap();
        assert_eq!(back["permits"], json!(["LGV operator licence"]));
    }

    #[test]
    fn test_opaque_descriptors() {
        assert_eq!(GeoShape::describe().name, "GeoShape");
        assert!(Permit::describe().fields().is_empty());
    }
}

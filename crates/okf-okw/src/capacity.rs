//! # Facility Capacity
//!
//! Circular-economy practice, staffing, and the innovation-space side of
//! a manufacturing facility (learning resources, services, footfall).

use serde::{Deserialize, Serialize};

use okf_core::{Describe, FieldDescriptor, FieldType, Service, TypeDescriptor};

use crate::material::Material;

/// Whether and how a facility applies circular economy principles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircularEconomy {
    pub circular_economy: bool,
    pub description: String,
    /// By-products of the facility.
    pub by_products: Vec<Material>,
}

const CIRCULAR_ECONOMY_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new(
        "circular_economy",
        "circular_economy",
        "circularEconomy",
        FieldType::Boolean,
        "Whether circular economy principles are applied.",
    ),
    FieldDescriptor::new(
        "description",
        "description",
        "description",
        FieldType::Text,
        "How circular economy principles are applied.",
    ),
    FieldDescriptor::new(
        "by_products",
        "by_products",
        "byProducts",
        FieldType::List(&FieldType::Named("Material")),
        "By-products produced.",
    ),
];

impl Describe for CircularEconomy {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::record(
            "CircularEconomy",
            "Circular economy practice of the facility.",
            CIRCULAR_ECONOMY_FIELDS,
        )
    }
}

/// Human capacity of a facility.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HumanCapacity {
    /// Headcount in full-time equivalents.
    pub headcount: i64,
    pub maker: String,
}

const HUMAN_CAPACITY_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new(
        "headcount",
        "headcount",
        "headcount",
        FieldType::Integer,
        "Headcount of the facility in FTE.",
    ),
    FieldDescriptor::new("maker", "maker", "maker", FieldType::Text, "Maker."),
];

impl Describe for HumanCapacity {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::record(
            "HumanCapacity",
            "The human capacity of the facility.",
            HUMAN_CAPACITY_FIELDS,
        )
    }
}

/// A learning resource offered by an innovation space. No fields yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningResource {}

impl Describe for LearningResource {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::record(
            "LearningResource",
            "A learning resource offered by the facility.",
            &[],
        )
    }
}

/// The innovation-space side of a facility.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InnovationSpace {
    pub staff: i64,
    pub learning_resources: Vec<LearningResource>,
    pub services: Vec<Service>,
    /// Footfall, a gauge of the facility's scale.
    pub footfall: i64,
    pub residencies: bool,
}

const INNOVATION_SPACE_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new("staff", "staff", "staff", FieldType::Integer, "Number of staff."),
    FieldDescriptor::new(
        "learning_resources",
        "learning_resources",
        "learningResources",
        FieldType::List(&FieldType::Named("LearningResource")),
        "Learning resources offered.",
    ),
    FieldDescriptor::new(
        "services",
        "services",
        "services",
        FieldType::List(&FieldType::Named("Service")),
        "Services offered.",
    ),
    FieldDescriptor::new(
        "footfall",
        "footfall",
        "footfall",
        FieldType::Integer,
        "Footfall at the facility.",
    ),
    FieldDescriptor::new(
        "residencies",
        "residencies",
        "residencies",
        FieldType::Boolean,
        "Whether residencies are offered.",
    ),
];

impl Describe for InnovationSpace {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::record(
            "InnovationSpace",
            "The innovation space of the facility.",
            INNOVATION_SPACE_FIELDS,
        )
    }
}

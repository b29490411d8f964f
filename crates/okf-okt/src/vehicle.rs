//! # Vehicles
//!
//! Carrier vehicles and their measured characteristics. Keys follow the
//! schema.org `Vehicle` and `QuantitativeValue` vocabulary (lowerCamelCase)
//! in every output format.

use serde::{Deserialize, Serialize};

use okf_core::{Describe, FieldDescriptor, FieldType, TypeDescriptor};

/// A measured value, range or unit of some characteristic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QuantitativeValue {
    /// Upper value of the characteristic.
    pub max_value: i64,
    /// Lower value of the characteristic.
    pub min_value: i64,
    /// UN/CEFACT Common Code (3 characters) or a URL.
    pub unit_code: String,
    /// Unit of measurement as free text, when no unit code applies.
    pub unit_text: String,
    pub value: String,
    /// Secondary value qualifying `value`, e.g. a reference temperature.
    pub value_reference: String,
}

const QUANTITATIVE_VALUE_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new(
        "max_value",
        "maxValue",
        "maxValue",
        FieldType::Integer,
        "Upper value of the characteristic.",
    ),
    FieldDescriptor::new(
        "min_value",
        "minValue",
        "minValue",
        FieldType::Integer,
        "Lower value of the characteristic.",
    ),
    FieldDescriptor::new(
        "unit_code",
        "unitCode",
        "unitCode",
        FieldType::Text,
        "Unit of measurement as a UN/CEFACT Common Code or URL.",
    ),
    FieldDescriptor::new(
        "unit_text",
        "unitText",
        "unitText",
        FieldType::Text,
        "Unit of measurement as free text.",
    ),
    FieldDescriptor::new("value", "value", "value", FieldType::Text, "The value."),
    FieldDescriptor::new(
        "value_reference",
        "valueReference",
        "valueReference",
        FieldType::Text,
        "Secondary value qualifying the value.",
    ),
];

impl Describe for QuantitativeValue {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::record(
            "QuantitativeValue",
            "A measured value of some characteristic.",
            QUANTITATIVE_VALUE_FIELDS,
        )
    }
}

/// A vehicle operated by a carrier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Vehicle {
    /// Time to accelerate from a given start velocity to a target velocity.
    pub acceleration_time: QuantitativeValue,
    /// Design and body style (station wagon, hatchback, ...).
    pub body_type: String,
    /// Volume available for cargo; typical units LTR or FTQ.
    pub cargo_volume: QuantitativeValue,
}

const VEHICLE_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new(
        "acceleration_time",
        "accelerationTime",
        "accelerationTime",
        FieldType::Named("QuantitativeValue"),
        "Time needed to accelerate the vehicle.",
    ),
    FieldDescriptor::new(
        "body_type",
        "bodyType",
        "bodyType",
        FieldType::Text,
        "Design and body style of the vehicle.",
    ),
    FieldDescriptor::new(
        "cargo_volume",
        "cargoVolume",
        "cargoVolume",
        FieldType::Named("QuantitativeValue"),
        "Volume available for cargo.",
    ),
];

impl Describe for Vehicle {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::record("Vehicle", "A vehicle operated by the carrier.", VEHICLE_FIELDS)
    }
}

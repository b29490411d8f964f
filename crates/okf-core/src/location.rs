//! # Location Value Objects
//!
//! Postal address, decimal-degree coordinates, free-text directions and
//! a three-word phrase. Informal settlements often have no street
//! address, and communicating raw GPS coordinates is error-prone, so a
//! location can carry any combination of the four.

use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};

use crate::descriptor::{Describe, FieldDescriptor, FieldType, Rule, TypeDescriptor};
use crate::phrase::check_three_word_phrase;

/// Physical or geospatial location of a facility, person or organisation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    pub address: Address,
    pub gps: Gps,
    /// Free-text directions, for places where an address is not enough.
    pub directions: String,
    pub what_3_words: What3Words,
}

const LOCATION_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new(
        "address",
        "address",
        "address",
        FieldType::Named("Address"),
        "Address relating to a facility, person or organisation.",
    ),
    FieldDescriptor::new(
        "gps",
        "gps",
        "gps",
        FieldType::Named("Gps"),
        "The relevant GPS coordinates, in decimal degrees.",
    ),
    FieldDescriptor::new(
        "directions",
        "directions",
        "directions",
        FieldType::Text,
        "Directions to the facility, person or organisation.",
    ),
    FieldDescriptor::new(
        "what_3_words",
        "what_3_words",
        "what3Words",
        FieldType::Named("What3Words"),
        "Three-word phrase for the location.",
    ),
];

impl Describe for Location {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::record("Location", "Location of the facility.", LOCATION_FIELDS)
    }
}

/// A three-word phrase and the language it was recorded in.
///
/// Phrases are not translations of each other across languages, so the
/// language tag travels with the phrase.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct What3Words {
    /// Three dot-separated words, e.g. `table.chair.lamp`.
    #[serde(deserialize_with = "deserialize_phrase")]
    pub coordinates: String,
    /// ISO 639-2 or ISO 639-3 language tag, e.g. `en-gb`.
    pub language: String,
}

/// An empty phrase is "not recorded"; anything else must be a phrase.
fn deserialize_phrase<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let text = String::deserialize(deserializer)?;
    if !text.is_empty() {
        check_three_word_phrase(&text).map_err(de::Error::custom)?;
    }
    Ok(text)
}

const WHAT3WORDS_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new(
        "coordinates",
        "coordinates",
        "coordinates",
        FieldType::Text,
        "The three-word phrase.",
    )
    .with_rule(Rule::ThreeWordPhrase),
    FieldDescriptor::new(
        "language",
        "language",
        "language",
        FieldType::Text,
        "Language the phrase has been recorded in.",
    ),
];

impl Describe for What3Words {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::record(
            "What3Words",
            "Three-word phrase for a location.",
            WHAT3WORDS_FIELDS,
        )
    }
}

/// Postal address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    pub number: String,
    pub street: String,
    pub district: String,
    pub city: String,
    pub region: String,
    pub country: String,
    pub postcode: String,
}

const ADDRESS_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new("number", "number", "number", FieldType::Text, "House or building number."),
    FieldDescriptor::new("street", "street", "street", FieldType::Text, "Street name."),
    FieldDescriptor::new("district", "district", "district", FieldType::Text, "District."),
    FieldDescriptor::new("city", "city", "city", FieldType::Text, "City."),
    FieldDescriptor::new("region", "region", "region", FieldType::Text, "Region or state."),
    FieldDescriptor::new("country", "country", "country", FieldType::Text, "Country."),
    FieldDescriptor::new("postcode", "postcode", "postcode", FieldType::Text, "Postal code."),
];

impl Describe for Address {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::record(
            "Address",
            "Address relating to a facility, person or organisation.",
            ADDRESS_FIELDS,
        )
    }
}

/// GPS coordinates in decimal degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Gps {
    #[serde(serialize_with = "serialize_coordinate")]
    pub latitude: f64,
    #[serde(serialize_with = "serialize_coordinate")]
    pub longitude: f64,
}

/// JSON has no NaN or infinity, so every encoder rejects them alike.
fn serialize_coordinate<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if !value.is_finite() {
        return Err(ser::Error::custom("non-finite coordinate"));
    }
    serializer.serialize_f64(*value)
}

const GPS_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new("latitude", "latitude", "latitude", FieldType::Decimal, "Latitude."),
    FieldDescriptor::new("longitude", "longitude", "longitude", FieldType::Decimal, "Longitude."),
];

impl Describe for Gps {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::record("Gps", "GPS coordinates in decimal degrees.", GPS_FIELDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_value_keys_match_field_table() {
        let value = serde_json::to_value(Location::default()).unwrap();
        let keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        // serde_json without preserve_order sorts keys; compare as sets.
        let mut expected: Vec<&str> = LOCATION_FIELDS.iter().map(|f| f.key).collect();
        expected.sort_unstable();
        let mut keys = keys;
        keys.sort_unstable();
        assert_eq!(keys, expected);
    }

    #[test]
    fn test_coordinates_carry_phrase_rule() {
        let desc = What3Words::describe();
        let field = desc.field_by_key("coordinates").unwrap();
        assert_eq!(field.rule, Some(Rule::ThreeWordPhrase));
    }

    #[test]
    fn test_partial_document_decodes_with_defaults() {
        let loc: Location = serde_json::from_str(
            r#"{"directions": "Behind the market", "what_3_words": {"coordinates": "a.b.c"}}"#,
        )
        .unwrap();
        assert_eq!(loc.directions, "Behind the market");
        assert_eq!(loc.what_3_words.coordinates, "a.b.c");
        assert_eq!(loc.what_3_words.language, "");
        assert_eq!(loc.address, Address::default());
    }

    #[test]
    fn test_malformed_phrase_rejected_on_decode() {
        let err = serde_json::from_str::<What3Words>(r#"{"coordinates": "table.chair"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("found 2"), "got: {err}");
        let err = serde_yaml::from_str::<Location>("what_3_words:\n  coordinates: a.b.c.d\n")
            .unwrap_err();
        assert!(err.to_string().contains("found 4"), "got: {err}");

        let empty: What3Words = serde_json::from_str(r#"{"coordinates": ""}"#).unwrap();
        assert_eq!(empty.coordinates, "");
    }

    #[test]
    fn test_non_finite_coordinates_rejected() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let gps = Gps {
                latitude: 0.0,
                longitude: bad,
            };
            assert!(serde_json::to_string(&gps).is_err());
            assert!(serde_yaml::to_string(&gps).is_err());
        }
    }

    #[test]
    fn test_gps_keys_are_consistent() {
        let gps = Gps {
            latitude: 51.5,
            longitude: -0.12,
        };
        let json = serde_json::to_value(gps).unwrap();
        assert_eq!(json["longitude"], -0.12);
        let yaml = serde_yaml::to_string(&gps).unwrap();
        assert!(yaml.contains("longitude: -0.12"));
    }
}

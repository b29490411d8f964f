//! End-to-end checks of the OKW schema: encoding, registry, contract
//! rendering and validation.

use std::collections::BTreeSet;

use serde::Serialize;
use serde_json::Value;

use okf_core::{
    AccessType, Address, Agent, Contact, CustomerReview, Describe, Equipment, FacilityStatus, Gps,
    Location, SocialMedia, What3Words,
};
use okf_okw::{
    CircularEconomy, EquipmentProperties, HumanCapacity, InnovationSpace, LearningResource,
    Material, Okw, OkwSchema,
};
use okf_schema::{
    declared_types, decode, generate, render_daml, Encoder, FacilitySchema, Format,
    RecordValidator, SampleOptions,
};

fn key_paths(value: &Value, prefix: &str, out: &mut BTreeSet<String>) {
    if let Value::Object(map) = value {
        for (key, child) in map {
            let path = format!("{prefix}/{key}");
            key_paths(child, &path, out);
            out.insert(path);
        }
    }
}

fn leaves(value: &Value, prefix: &str, out: &mut Vec<(String, Value)>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                leaves(child, &format!("{prefix}/{key}"), out);
            }
        }
        other => out.push((prefix.to_string(), other.clone())),
    }
}

fn is_empty_leaf(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

fn populated() -> Okw {
    let mut okw = OkwSchema::sample();
    okw.name = "Fab Lab Barcelona".to_string();
    okw.location = Location {
        address: Address {
            street: "Carrer de Pujades".to_string(),
            number: "102".to_string(),
            city: "Barcelona".to_string(),
            country: "Spain".to_string(),
            ..Address::default()
        },
        gps: Gps {
            latitude: 41.3968,
            longitude: 2.1941,
        },
        directions: "Ground floor".to_string(),
        what_3_words: What3Words {
            coordinates: "table.chair.lamp".to_string(),
            language: "en-gb".to_string(),
        },
    };
    okw.facility_status = Some(FacilityStatus::Active);
    okw.access_type = Some(AccessType::RestrictedWithPublicHours);
    okw.owner = Agent::named("IAAC", "https://iaac.net");
    okw.partner_funder = Agent::named("Fab Foundation", "https://fabfoundation.org");
    okw.affiliations = vec![Agent::named("Fab City", "https://fab.city")];
    okw.typical_products = vec!["brackets".to_string(), "enclosures".to_string()];
    okw.customer_reviews = vec![CustomerReview {
        identifier: "r-1".to_string(),
        rating: 4,
        body: "Helpful staff".to_string(),
    }];
    okw.typical_materials = vec![Material {
        material_type: "https://en.wikipedia.org/wiki/Plywood".to_string(),
        ..Material::default()
    }];
    okw.human_capacity.headcount = 12;
    okw.innovation_space.learning_resources = vec![LearningResource {}];
    okw
}

#[test]
fn test_yaml_round_trip() {
    let registry = OkwSchema::registry().unwrap();
    let encoder = Encoder::new(&registry, OkwSchema::LAYOUT);
    for record in [OkwSchema::sample(), populated()] {
        let yaml = encoder.encode(&record, Format::Yaml).unwrap();
        let decoded: Okw = decode(&yaml, Format::Yaml).unwrap();
        assert_eq!(decoded, record);
    }
}

#[test]
fn test_json_and_yaml_expose_same_keys() {
    let registry = OkwSchema::registry().unwrap();
    let encoder = Encoder::new(&registry, OkwSchema::LAYOUT);
    let record = populated();

    let json: Value =
        serde_json::from_slice(&encoder.encode(&record, Format::Json).unwrap()).unwrap();
    let yaml: Value =
        serde_yaml::from_slice(&encoder.encode(&record, Format::Yaml).unwrap()).unwrap();

    let mut json_keys = BTreeSet::new();
    let mut yaml_keys = BTreeSet::new();
    key_paths(&json, "", &mut json_keys);
    key_paths(&yaml, "", &mut yaml_keys);
    assert_eq!(json_keys, yaml_keys);
    assert!(json_keys.contains("/location/gps/longitude"));
    assert!(json_keys.contains("/contact/social_media/facebook"));
    assert_eq!(json, yaml);
}

#[test]
fn test_sample_files_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let options = SampleOptions {
        create_dirs: true,
        report_violations: false,
    };
    let report = generate::<OkwSchema>(dir.path(), &options).unwrap();
    assert_eq!(report.schema_name, "OKW");
    assert_eq!(report.written.len(), 3);

    let yaml = std::fs::read_to_string(dir.path().join("okw.yaml")).unwrap();
    let doc: Value = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(doc["contact"]["name"], "Some Person");
    assert_eq!(doc["contact"]["website"], "https://example.com");

    let mut all = Vec::new();
    leaves(&doc, "", &mut all);
    let populated: Vec<&str> = all
        .iter()
        .filter(|(_, v)| !is_empty_leaf(v))
        .map(|(p, _)| p.as_str())
        .collect();
    assert_eq!(populated, vec!["/contact/name", "/contact/website"]);

    let json = std::fs::read(dir.path().join("okw.json")).unwrap();
    assert!(!json.contains(&b'\n'));
    let decoded: Okw = decode(&json, Format::Json).unwrap();
    assert_eq!(decoded, OkwSchema::sample());

    let daml = std::fs::read_to_string(dir.path().join("src/main/daml/OKW.daml")).unwrap();
    assert!(daml.starts_with("module OKW where\n"));
}

#[test]
fn test_sample_yaml_layout() {
    let registry = OkwSchema::registry().unwrap();
    let encoder = Encoder::new(&registry, OkwSchema::LAYOUT);
    let yaml = String::from_utf8(encoder.encode(&OkwSchema::sample(), Format::Yaml).unwrap())
        .unwrap();
    let top: Vec<&str> = yaml
        .lines()
        .filter(|l| !l.starts_with(' ') && !l.starts_with('-'))
        .filter_map(|l| l.split(':').next())
        .collect();
    assert_eq!(top[0], "name");
    assert_eq!(top[1], "location");
    assert_eq!(top.last(), Some(&"innovation_space"));
    assert!(yaml.contains("name: ''\n"));
    assert!(yaml.contains("facility_status: null\n"));
    assert!(yaml.contains("affiliations: []\n"));
    assert!(yaml.contains("road_access: false\n"));
}

fn assert_keys_match<T: Serialize + Default + Describe>() {
    let desc = T::describe();
    let value = serde_json::to_value(T::default()).unwrap();
    let keys: BTreeSet<&str> = value
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    let expected: BTreeSet<&str> = desc.fields().iter().map(|f| f.key).collect();
    assert_eq!(keys, expected, "{} keys drifted from its table", desc.name);
}

#[test]
fn test_descriptor_keys_match_serde_keys() {
    assert_keys_match::<Okw>();
    assert_keys_match::<Location>();
    assert_keys_match::<What3Words>();
    assert_keys_match::<Address>();
    assert_keys_match::<Gps>();
    assert_keys_match::<Agent>();
    assert_keys_match::<Contact>();
    assert_keys_match::<SocialMedia>();
    assert_keys_match::<Equipment>();
    assert_keys_match::<EquipmentProperties>();
    assert_keys_match::<Material>();
    assert_keys_match::<CircularEconomy>();
    assert_keys_match::<HumanCapacity>();
    assert_keys_match::<InnovationSpace>();
    assert_keys_match::<LearningResource>();
    assert_keys_match::<CustomerReview>();
}

#[test]
fn test_daml_declares_every_type_once() {
    let registry = OkwSchema::registry().unwrap();
    let daml = render_daml(&registry, "OKW");
    let declared = declared_types(&daml);
    assert_eq!(declared.len(), registry.len());
    assert_eq!(declared[0], "OKW");

    let declared_set: BTreeSet<&str> = declared.iter().copied().collect();
    assert_eq!(declared_set.len(), declared.len());
    for ty in registry.types() {
        for field in ty.fields() {
            if let Some(referenced) = field.ty.referenced_type() {
                assert!(declared_set.contains(referenced), "{referenced} undeclared");
            }
        }
    }
    assert!(daml.contains("    facilityStatus : Optional FacilityStatus\n"));
    assert!(daml.contains("type MaterialType = Text\n"));
    assert!(daml.contains("type Service = Text\n"));
    assert!(daml.contains("data LearningResource = LearningResource deriving (Eq, Show)\n"));
}

#[test]
fn test_sample_violations() {
    let registry = OkwSchema::registry().unwrap();
    let validator = RecordValidator::new(&registry).unwrap();
    let sample = serde_json::to_value(OkwSchema::sample()).unwrap();
    let violations = validator.violations(&sample);
    // Every agent needs a name; the sample only names its contact.
    assert_eq!(violations.len(), 3, "got: {violations}");
    assert!(violations.touches("/name"));
    assert!(violations.touches("/owner/name"));
    assert!(violations.touches("/partner_funder/name"));
    assert!(!violations.touches("/contact/name"));

    validator.validate(&populated()).unwrap();
}

#[test]
fn test_populated_record_violations() {
    let registry = OkwSchema::registry().unwrap();
    let validator = RecordValidator::new(&registry).unwrap();
    let mut record = populated();
    record.location.what_3_words.coordinates = "table.chair".to_string();
    record.customer_reviews[0].rating = 9;
    let violations = validator.violations(&serde_json::to_value(&record).unwrap());
    assert_eq!(violations.len(), 2, "got: {violations}");
    assert!(violations.touches("/location/what_3_words/coordinates"));
    assert!(violations.touches("/customer_reviews/0/rating"));
}

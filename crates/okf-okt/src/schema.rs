//! # OKT Schema
//!
//! The closed type registry and the sample record of Open Know Terms.

use okf_core::{
    Address, Agent, Certification, Contact, CustomerReview, Equipment, FacilityStatus, Gps,
    Location, Material, Service, Skill, SocialMedia, What3Words,
};
use okf_schema::{FacilitySchema, OutputLayout, RegistryBuilder, TypeRegistry};

use crate::record::{GeoShape, Okt, Permit};
use crate::vehicle::{QuantitativeValue, Vehicle};

/// Output naming: `okt.yaml`, `okt.json`, `src/main/daml/OKT.daml`.
pub const OKT_LAYOUT: OutputLayout = OutputLayout {
    stem: "okt",
    module: "OKT",
};

/// The Open Know Terms schema.
#[derive(Debug, Clone, Copy, Default)]
pub struct OktSchema;

impl FacilitySchema for OktSchema {
    type Record = Okt;

    const LAYOUT: OutputLayout = OKT_LAYOUT;

    fn registry_builder() -> RegistryBuilder {
        TypeRegistry::builder::<Okt>()
            .register::<FacilityStatus>()
            .register::<Location>()
            .register::<What3Words>()
            .register::<Address>()
            .register::<Gps>()
            .register::<Agent>()
            .register::<Contact>()
            .register::<SocialMedia>()
            .register::<Skill>()
            .register::<Equipment>()
            .register::<Vehicle>()
            .register::<QuantitativeValue>()
            .register::<Material>()
            .register::<Service>()
            .register::<Permit>()
            .register::<GeoShape>()
            .register::<Certification>()
            .register::<CustomerReview>()
    }

    fn sample() -> Okt {
        Okt {
            contact: Agent::named("Some Person", "https://example.com"),
            ..Okt::default()
        }
    }
}

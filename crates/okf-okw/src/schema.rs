//! # OKW Schema
//!
//! The closed type registry and the sample record of Open Know Where.

use okf_core::{
    AccessType, Address, Agent, Certification, Contact, CustomerReview, Equipment, FacilityStatus,
    Gps, Location, Service, Skill, SocialMedia, TypicalBatchSize, What3Words,
};
use okf_schema::{FacilitySchema, OutputLayout, RegistryBuilder, TypeRegistry};

use crate::capacity::{CircularEconomy, HumanCapacity, InnovationSpace, LearningResource};
use crate::material::{EquipmentProperties, Material, MaterialType};
use crate::record::Okw;

/// Output naming: `okw.yaml`, `okw.json`, `src/main/daml/OKW.daml`.
pub const OKW_LAYOUT: OutputLayout = OutputLayout {
    stem: "okw",
    module: "OKW",
};

/// The Open Know Where schema.
#[derive(Debug, Clone, Copy, Default)]
pub struct OkwSchema;

impl FacilitySchema for OkwSchema {
    type Record = Okw;

    const LAYOUT: OutputLayout = OKW_LAYOUT;

    fn registry_builder() -> RegistryBuilder {
        TypeRegistry::builder::<Okw>()
            .register::<FacilityStatus>()
            .register::<AccessType>()
            .register::<TypicalBatchSize>()
            .register::<Location>()
            .register::<What3Words>()
            .register::<Address>()
            .register::<Gps>()
            .register::<Agent>()
            .register::<Contact>()
            .register::<SocialMedia>()
            .register::<Skill>()
            .register::<Equipment>()
            .register::<EquipmentProperties>()
            .register::<Material>()
            .register::<MaterialType>()
            .register::<CircularEconomy>()
            .register::<HumanCapacity>()
            .register::<InnovationSpace>()
            .register::<LearningResource>()
            .register::<Service>()
            .register::<CustomerReview>()
            .register::<Certification>()
    }

    fn sample() -> Okw {
        Okw {
            contact: Agent::named("Some Person", "https://example.com"),
            ..Okw::default()
        }
    }
}

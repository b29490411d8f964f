//! # okf-okw — Open Know Where
//!
//! The schema of a manufacturing facility: where it is, who runs it,
//! what equipment and materials it has, and how it can be accessed.
//!
//! - [`Okw`] is the root record.
//! - [`OkwSchema`] implements [`okf_schema::FacilitySchema`]: the closed
//!   type registry and the sample written by `okf sample`.
//! - OKW-only types ([`Material`] with its classified [`MaterialType`],
//!   [`EquipmentProperties`], [`CircularEconomy`], [`HumanCapacity`],
//!   [`InnovationSpace`], [`LearningResource`]) live here; shared value
//!   objects come from `okf-core`.

pub mod capacity;
pub mod material;
pub mod record;
pub mod schema;

pub use capacity::{CircularEconomy, HumanCapacity, InnovationSpace, LearningResource};
pub use material::{EquipmentProperties, Material, MaterialType};
pub use record::Okw;
pub use schema::{OkwSchema, OKW_LAYOUT};

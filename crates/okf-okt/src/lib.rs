//! # okf-okt — Open Know Terms
//!
//! The schema of a carrier or logistics facility. It shares location,
//! agent, equipment, material and review types with Open Know Where and
//! adds a fleet of [`Vehicle`]s measured in [`QuantitativeValue`]s.
//! Service areas and permits are free-form values until their structure
//! settles.

pub mod record;
pub mod schema;
pub mod vehicle;

pub use record::{GeoShape, Okt, Permit};
pub use schema::{OktSchema, OKT_LAYOUT};
pub use vehicle::{QuantitativeValue, Vehicle};

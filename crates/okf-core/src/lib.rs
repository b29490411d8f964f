//! # okf-core — Foundational Types for the Open Knowledge Framework
//!
//! The leaf crate of the workspace. It defines the pieces that both
//! facility schemas (Open Know Where and Open Know Terms) are built from:
//!
//! 1. **Closed vocabularies.** `FacilityStatus`, `AccessType` and friends
//!    are exhaustive enums implementing [`Vocabulary`]. Parsing an unknown
//!    string fails with [`OkfError::UnknownVariant`].
//!
//! 2. **Descriptor tables.** Every schema type implements [`Describe`],
//!    returning one [`TypeDescriptor`]: its fields with their shared
//!    YAML/JSON key, contract-format key, value shape and validation
//!    rule. Serializers and validators walk these tables.
//!
//! 3. **The three-word phrase rule.** [`is_three_word_phrase`] is the one
//!    custom field validator of the framework.
//!
//! 4. **Shared value objects.** Location, Agent, Equipment, Material and
//!    CustomerReview are identical in both schemas and live here, as does
//!    the free-form `Service` value.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `okf-*` crates.
//! - No `unsafe` code, no `.unwrap()` outside tests.
//! - Record types derive `Default` and use `#[serde(default)]`, so a
//!   partial document decodes with empty values in the missing fields.

pub mod agent;
pub mod descriptor;
pub mod equipment;
pub mod error;
pub mod location;
pub mod opaque;
pub mod phrase;
pub mod vocabulary;

pub use agent::{Agent, Contact, SocialMedia};
pub use descriptor::{
    Describe, FieldDescriptor, FieldType, Rule, Shape, TypeDescriptor, VariantDescriptor,
};
pub use equipment::{CustomerReview, Equipment, Material, MAX_RATING, MIN_RATING};
pub use error::OkfError;
pub use location::{Address, Gps, Location, What3Words};
pub use opaque::Service;
pub use phrase::{
    check_three_word_phrase, is_absent_or_three_word_phrase, is_three_word_phrase,
    THREE_WORD_PHRASE_FORMAT,
};
pub use vocabulary::{
    AccessType, Certification, FacilityStatus, Skill, TypicalBatchSize, Vocabulary,
};

//! # Closed Vocabularies
//!
//! Enumerated string values used by facility records. Each vocabulary is
//! a closed Rust enum: the legal values are fixed at compile time, every
//! `match` is exhaustive, and construction from an arbitrary string is
//! fallible. A decoded document carrying an unknown status or access
//! type is rejected rather than passed through.
//!
//! Several vocabularies (batch size, certification, skill) have no
//! published values yet. They are uninhabited enums: listing returns an
//! empty sequence and every parse fails, so a record can only leave the
//! corresponding field empty.

use serde::{Deserialize, Serialize};

use crate::error::OkfError;

/// A closed, string-backed vocabulary.
pub trait Vocabulary: Copy + Sized + 'static {
    /// Vocabulary name, used in descriptors and error messages.
    const NAME: &'static str;

    /// All legal values in canonical order.
    fn list_values() -> &'static [Self];

    /// Wire string for this value, as written in YAML and JSON.
    fn as_str(&self) -> &'static str;

    /// Identifier form of this value, used by the contract format.
    fn constructor(&self) -> &'static str;

    /// All legal values as wire strings, in canonical order.
    fn list_value_strings() -> Vec<&'static str> {
        Self::list_values().iter().map(|v| v.as_str()).collect()
    }

    /// Parse a wire string. Case-sensitive, no trimming.
    fn parse_value(s: &str) -> Result<Self, OkfError> {
        Self::list_values()
            .iter()
            .copied()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| OkfError::UnknownVariant {
                vocabulary: Self::NAME,
                value: s.to_string(),
            })
    }
}

/// Status of a facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FacilityStatus {
    /// Operating.
    Active,
    /// Not yet open.
    Planned,
    /// Closed for a limited period.
    #[serde(rename = "Temporary Closure")]
    TemporaryClosure,
    /// Permanently closed.
    Closed,
}

impl Vocabulary for FacilityStatus {
    const NAME: &'static str = "FacilityStatus";

    fn list_values() -> &'static [Self] {
        &[
            Self::Active,
            Self::Planned,
            Self::TemporaryClosure,
            Self::Closed,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Planned => "Planned",
            Self::TemporaryClosure => "Temporary Closure",
            Self::Closed => "Closed",
        }
    }

    fn constructor(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Planned => "Planned",
            Self::TemporaryClosure => "TemporaryClosure",
            Self::Closed => "Closed",
        }
    }
}

/// How the equipment of a facility is accessed.
///
/// For facilities this is used on a general-terms basis: if most
/// equipment is available to members but some requires staff to
/// operate, the facility is `Membership`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessType {
    /// Only certain people (e.g. staff members) can use the equipment.
    Restricted,
    /// The public can use the equipment during limited hours.
    #[serde(rename = "Restricted with public hours")]
    RestrictedWithPublicHours,
    /// Shared workspace; access by qualifying criteria such as desk rental.
    #[serde(rename = "Shared space")]
    SharedSpace,
    /// Anyone may use the equipment; training or other restrictions may apply.
    Public,
    /// Access requires membership open to the public or a demographic.
    Membership,
}

impl Vocabulary for AccessType {
    const NAME: &'static str = "AccessType";

    fn list_values() -> &'static [Self] {
        &[
            Self::Restricted,
            Self::RestrictedWithPublicHours,
            Self::SharedSpace,
            Self::Public,
            Self::Membership,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Restricted => "Restricted",
            Self::RestrictedWithPublicHours => "Restricted with public hours",
            Self::SharedSpace => "Shared space",
            Self::Public => "Public",
            Self::Membership => "Membership",
        }
    }

    fn constructor(&self) -> &'static str {
        match self {
            Self::Restricted => "Restricted",
            Self::RestrictedWithPublicHours => "RestrictedWithPublicHours",
            Self::SharedSpace => "SharedSpace",
            Self::Public => "Public",
            Self::Membership => "Membership",
        }
    }
}

/// Typical batch size output. No values published yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypicalBatchSize {}

impl Vocabulary for TypicalBatchSize {
    const NAME: &'static str = "TypicalBatchSize";

    fn list_values() -> &'static [Self] {
        &[]
    }

    fn as_str(&self) -> &'static str {
        match *self {}
    }

    fn constructor(&self) -> &'static str {
        match *self {}
    }
}

/// Certification held by a facility. No values published yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Certification {}

impl Vocabulary for Certification {
    const NAME: &'static str = "Certification";

    fn list_values() -> &'static [Self] {
        &[]
    }

    fn as_str(&self) -> &'static str {
        match *self {}
    }

    fn constructor(&self) -> &'static str {
        match *self {}
    }
}

/// Skill required to operate a piece of equipment. No values published yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Skill {}

impl Vocabulary for Skill {
    const NAME: &'static str = "Skill";

    fn list_values() -> &'static [Self] {
        &[]
    }

    fn as_str(&self) -> &'static str {
        match *self {}
    }

    fn constructor(&self) -> &'static str {
        match *self {}
    }
}

/// `Display`, `FromStr` and `Describe` for vocabularies, all delegating
/// to the `Vocabulary` implementation.
#[macro_export]
macro_rules! vocabulary_impls {
    ($($ty:ty => $doc:literal),+ $(,)?) => {
        $(
            impl ::std::fmt::Display for $ty {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    f.write_str($crate::Vocabulary::as_str(self))
                }
            }

            impl ::std::str::FromStr for $ty {
                type Err = $crate::OkfError;

                fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                    <$ty as $crate::Vocabulary>::parse_value(s)
                }
            }

            impl $crate::Describe for $ty {
                fn describe() -> $crate::TypeDescriptor {
                    $crate::TypeDescriptor::vocabulary::<$ty>($doc)
                }
            }
        )+
    };
}

vocabulary_impls! {
    FacilityStatus => "Status of the facility.",
    AccessType => "How the manufacturing equipment is accessed.",
    TypicalBatchSize => "Typical batch size output.",
    Certification => "Certification obtained by the facility.",
    Skill => "Skill required to use a piece of equipment.",
}

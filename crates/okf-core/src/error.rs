//! # Error Types
//!
//! Errors raised by the foundational types. All errors use `thiserror`
//! for derive-based `Display` and `Error` implementations.
//!
//! Vocabulary errors name both the vocabulary and the rejected string so
//! that a failure deep inside a decoded document can be traced back to
//! the field that carried it.

use thiserror::Error;

/// Top-level error type for the framework's core types.
#[derive(Error, Debug)]
pub enum OkfError {
    /// A string did not match any value of a closed vocabulary.
    #[error("unknown {vocabulary} value: {value:?}")]
    UnknownVariant {
        /// Vocabulary name (e.g. `FacilityStatus`).
        vocabulary: &'static str,
        /// The rejected input.
        value: String,
    },

    /// A three-word phrase did not split into exactly three segments.
    #[error("invalid three-word phrase {phrase:?}: expected 3 dot-separated words, found {segments}")]
    InvalidPhrase {
        /// The rejected phrase.
        phrase: String,
        /// Number of segments the phrase split into.
        segments: usize,
    },
}

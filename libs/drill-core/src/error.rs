//! Error types for drill-core.

use thiserror::Error;

/// Result type alias using the crate error.
pub type Result<T> = std::result::Result<T, Error>;

/// Conditions the core reports instead of guessing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("malformed syllable {syllable:?}: tone digit {digit} is outside 1-5")]
    MalformedSyllable { syllable: String, digit: char },

    #[error("invalid grade {0}: expected 0 (again), 2 (good) or 3 (easy)")]
    InvalidGrade(u8),

    #[error("invalid tone number {0}: expected 1-5")]
    InvalidTone(u8),
}

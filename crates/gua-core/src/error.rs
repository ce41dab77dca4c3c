//! Error types for the hexagram engine.

use thiserror::Error;

/// Result type for engine operations.
pub type GuaResult<T> = Result<T, GuaError>;

/// Domain validation errors.
///
/// These are precondition failures: the generator never produces them for
/// its own output, so callers should not retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuaError {
    /// An element name did not match any of the five elements.
    #[error("invalid element: {0}")]
    InvalidElement(String),

    /// A trigram name did not match any of the eight trigrams.
    #[error("invalid trigram: {0}")]
    InvalidTrigram(String),

    /// A three-line group contained a value other than 0 or 1.
    #[error("invalid triplet: {0:?}")]
    InvalidTriplet([u8; 3]),

    /// A line value was not 0 (yin) or 1 (yang).
    #[error("invalid line value {value} at index {index}")]
    InvalidLine {
        /// 0-based line index.
        index: usize,
        /// The rejected value.
        value: u8,
    },

    /// A line sequence did not contain exactly six lines.
    #[error("expected 6 lines, got {0}")]
    LineCount(usize),

    /// A changing-line index was outside 0..=5.
    #[error("line index out of range: {0}")]
    LineIndex(usize),

    /// A relation permutation failed to return to its start after 5 steps.
    #[error("{relation} cycle from {start} did not close")]
    CycleNotClosed {
        /// Display name of the relation.
        relation: String,
        /// Display name of the starting element.
        start: String,
    },

    /// A heavenly stem name was not recognised.
    #[error("invalid heavenly stem: {0}")]
    InvalidStem(String),

    /// An earthly branch name was not recognised.
    #[error("invalid earthly branch: {0}")]
    InvalidBranch(String),

    /// A relation name was not recognised.
    #[error("invalid relation: {0}")]
    InvalidRelation(String),

    /// An analysis context name was not recognised.
    #[error("invalid context: {0}")]
    InvalidContext(String),
}

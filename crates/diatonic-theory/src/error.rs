//! Error types for note lookup and chord resolution.

use thiserror::Error;

/// Errors that can occur while deriving scales, chords, or progressions.
///
/// Every derivation is total over the closed twelve-note domain, so these only
/// surface when a caller feeds in a label, index, or degree from outside it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    #[error("unknown note '{label}'")]
    UnknownNote { label: String },
    #[error("root index {index} out of range (expected 0-11)")]
    InvalidRootIndex { index: usize },
    #[error("scale degree {degree} out of range (expected 1-7)")]
    DegreeOutOfRange { degree: i64 },
    #[error("unknown mode '{name}' (expected 'major' or 'minor')")]
    UnknownMode { name: String },
}

/// Common trait for reportable errors.
///
/// Gives each error a stable code and a category so that callers emitting
/// machine-readable output do not have to match on variants.
///
/// # Example
///
/// ```
/// use diatonic_theory::{ErrorCode, TheoryError};
///
/// let err = TheoryError::UnknownNote { label: "H".to_string() };
/// assert_eq!(err.code(), "THEORY_001");
/// assert_eq!(err.category(), "theory");
/// ```
pub trait ErrorCode: std::error::Error {
    /// Stable code such as "THEORY_001".
    fn code(&self) -> &'static str;

    /// Human-readable message. Defaults to the `Display` output.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Category used to group related errors.
    fn category(&self) -> &'static str;
}

impl ErrorCode for TheoryError {
    fn code(&self) -> &'static str {
        match self {
            TheoryError::UnknownNote { .. } => "THEORY_001",
            TheoryError::InvalidRootIndex { .. } => "THEORY_002",
            TheoryError::DegreeOutOfRange { .. } => "THEORY_003",
            TheoryError::UnknownMode { .. } => "THEORY_004",
        }
    }

    fn category(&self) -> &'static str {
        "theory"
    }
}

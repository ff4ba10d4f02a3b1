//! JSON output types for machine-readable CLI output.
//!
//! Every command that accepts `--json` prints exactly one [`CommandOutput`]
//! object to stdout, on success and on failure.

use serde::{Deserialize, Serialize};

use crate::input::InputError;

/// Error codes for CLI operations.
///
/// Library errors pass their own `THEORY_xxx` codes through unchanged.
pub mod error_codes {
    /// Preferences file could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// Preferences file is not valid JSON for the expected shape
    pub const JSON_PARSE: &str = "CLI_002";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "THEORY_003")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Suggestion for fixing the error (if available)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl JsonError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl From<&InputError> for JsonError {
    fn from(err: &InputError) -> Self {
        let json = JsonError::new(err.code(), err.to_string());
        match err {
            InputError::Theory(diatonic_theory::TheoryError::UnknownNote { .. }) => json
                .with_suggestion("use a label such as C, F#, Bb, or an index 0-11 (A = 0)"),
            InputError::Theory(diatonic_theory::TheoryError::DegreeOutOfRange { .. }) => {
                json.with_suggestion("scale degrees run from 1 to 7")
            }
            _ => json,
        }
    }
}

/// JSON envelope shared by `show`, `notes` and `progression`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandOutput {
    /// Whether the command succeeded
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Command result (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
}

impl CommandOutput {
    pub fn success(result: serde_json::Value) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(result),
        }
    }

    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
        }
    }
}

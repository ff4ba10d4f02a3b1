//! Selection input: root arguments and the preferences file.
//!
//! Precedence is explicit flags, then the preferences file, then the
//! built-in defaults (C major, sharps).

use std::path::{Path, PathBuf};

use diatonic_theory::{ErrorCode, Mode, Note, Selection, TheoryError, NOTE_COUNT};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::commands::json_output::error_codes;

/// Root used when neither flags nor preferences name one.
pub const DEFAULT_ROOT: &str = "C";

/// Errors that can occur while turning arguments into a [`Selection`].
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read preferences file {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse preferences file {}: {message}", path.display())]
    JsonParse { path: PathBuf, message: String },
    #[error(transparent)]
    Theory(#[from] TheoryError),
}

impl InputError {
    /// Stable code for JSON output.
    pub fn code(&self) -> &'static str {
        match self {
            InputError::FileRead { .. } => error_codes::FILE_READ,
            InputError::JsonParse { .. } => error_codes::JSON_PARSE,
            InputError::Theory(e) => e.code(),
        }
    }
}

/// Defaults loaded from a JSON preferences file. Every field is optional.
///
/// ```json
/// { "root": "Eb", "mode": "minor", "use_flats": true }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Preferences {
    #[serde(default)]
    pub root: Option<String>,
    #[serde(default)]
    pub mode: Option<Mode>,
    #[serde(default)]
    pub use_flats: Option<bool>,
}

impl Preferences {
    pub fn from_file(path: &Path) -> Result<Self, InputError> {
        let content = std::fs::read_to_string(path).map_err(|source| InputError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let prefs: Self = serde_json::from_str(&content).map_err(|e| InputError::JsonParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        debug!(path = %path.display(), ?prefs, "loaded preferences");
        Ok(prefs)
    }

    /// Load from `path` if given, else the empty preferences.
    pub fn load(path: Option<&str>) -> Result<Self, InputError> {
        match path {
            Some(p) => Self::from_file(Path::new(p)),
            None => Ok(Self::default()),
        }
    }
}

/// Selection as given on the command line, before defaults are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionArgs {
    pub root: Option<String>,
    pub mode: Option<Mode>,
    /// `Some(true)` for `--flats`, `Some(false)` for `--sharps`.
    pub use_flats: Option<bool>,
    pub prefs: Option<String>,
}

impl SelectionArgs {
    /// Load the preferences file (if any) and resolve.
    pub fn resolve(&self) -> Result<Selection, InputError> {
        let prefs = Preferences::load(self.prefs.as_deref())?;
        resolve_selection(self, &prefs)
    }
}

/// Merge arguments over preferences over defaults.
pub fn resolve_selection(
    args: &SelectionArgs,
    prefs: &Preferences,
) -> Result<Selection, InputError> {
    let root = args
        .root
        .as_deref()
        .or(prefs.root.as_deref())
        .unwrap_or(DEFAULT_ROOT);
    let root_index = parse_root(root)?;
    let mode = args.mode.or(prefs.mode).unwrap_or_default();
    let use_flats = args.use_flats.or(prefs.use_flats).unwrap_or(false);

    Ok(Selection::new(root_index, mode, use_flats)?)
}

/// Parse a root given as a note label (`"C#"`, `"db"`) or a table index (`"3"`).
///
/// Indices follow the A-based table order used for record ids.
pub fn parse_root(input: &str) -> Result<usize, TheoryError> {
    let trimmed = input.trim();
    if let Ok(index) = trimmed.parse::<usize>() {
        if index >= NOTE_COUNT {
            return Err(TheoryError::InvalidRootIndex { index });
        }
        return Ok(index);
    }
    trimmed.parse::<Note>().map(Note::slot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    #[test]
    fn parse_root_labels_and_indices() {
        assert_eq!(parse_root("A").unwrap(), 0);
        assert_eq!(parse_root("C").unwrap(), 3);
        assert_eq!(parse_root("db").unwrap(), 4);
        assert_eq!(parse_root("C#").unwrap(), 4);
        assert_eq!(parse_root(" 11 ").unwrap(), 11);
        assert_eq!(
            parse_root("12"),
            Err(TheoryError::InvalidRootIndex { index: 12 })
        );
        assert!(parse_root("H").is_err());
    }

    #[test]
    fn defaults_apply_without_args_or_prefs() {
        let selection =
            resolve_selection(&SelectionArgs::default(), &Preferences::default()).unwrap();
        assert_eq!(selection.root_index(), 3);
        assert_eq!(selection.mode(), Mode::Major);
        assert!(!selection.use_flats());
    }

    #[test]
    fn args_override_prefs() {
        let prefs = Preferences {
            root: Some("E".to_string()),
            mode: Some(Mode::Minor),
            use_flats: Some(true),
        };
        let args = SelectionArgs {
            root: Some("G".to_string()),
            use_flats: Some(false),
            ..Default::default()
        };
        let selection = resolve_selection(&args, &prefs).unwrap();
        assert_eq!(selection.root_index(), 10);
        assert_eq!(selection.mode(), Mode::Minor);
        assert!(!selection.use_flats());
    }

    #[test]
    fn prefs_file_round_trip() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("prefs.json");
        fs::write(&path, r#"{ "root": "Bb", "mode": "minor" }"#).unwrap();

        let args = SelectionArgs {
            prefs: Some(path.to_str().unwrap().to_string()),
            ..Default::default()
        };
        let selection = args.resolve().unwrap();
        assert_eq!(selection.root_index(), 1);
        assert_eq!(selection.mode(), Mode::Minor);
        assert!(!selection.use_flats());
    }

    #[test]
    fn prefs_file_rejects_unknown_fields() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("prefs.json");
        fs::write(&path, r#"{ "rooot": "C" }"#).unwrap();

        let err = Preferences::from_file(&path).unwrap_err();
        assert_eq!(err.code(), error_codes::JSON_PARSE);
    }

    #[test]
    fn missing_prefs_file_is_read_error() {
        let err = Preferences::load(Some("/nonexistent/prefs.json")).unwrap_err();
        assert!(matches!(err, InputError::FileRead { .. }));
        assert_eq!(err.code(), error_codes::FILE_READ);
    }

    #[test]
    fn theory_errors_keep_their_code() {
        let args = SelectionArgs {
            root: Some("X".to_string()),
            ..Default::default()
        };
        let err = resolve_selection(&args, &Preferences::default()).unwrap_err();
        assert_eq!(err.code(), "THEORY_001");
    }
}

//! Notes command implementation
//!
//! Prints the twelve-note chromatic table in the chosen spelling.

use anyhow::Result;
use diatonic_theory::{chromatic_sequence, ChromaticSequence, Spelling};
use serde::Serialize;
use std::process::ExitCode;

use super::print_success;
use super::render::render_notes;

/// One row of the `--json` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteEntry {
    pub index: usize,
    pub label: &'static str,
    pub natural: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotesResult {
    pub spelling: Spelling,
    pub notes: Vec<NoteEntry>,
}

impl NotesResult {
    pub fn from_sequence(sequence: &ChromaticSequence) -> Self {
        Self {
            spelling: sequence.spelling(),
            notes: sequence
                .iter()
                .enumerate()
                .map(|(index, note)| NoteEntry {
                    index,
                    label: note.label(),
                    natural: note.is_natural(),
                })
                .collect(),
        }
    }
}

/// Run the notes command
pub fn run(use_flats: bool, json: bool) -> Result<ExitCode> {
    let sequence = chromatic_sequence(use_flats);
    if json {
        print_success(&NotesResult::from_sequence(&sequence))
    } else {
        print!("{}", render_notes(&sequence)?);
        Ok(ExitCode::SUCCESS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_lists_twelve_notes() {
        let result = NotesResult::from_sequence(&chromatic_sequence(true));
        assert_eq!(result.spelling, Spelling::Flats);
        assert_eq!(result.notes.len(), 12);
        assert_eq!(
            result.notes[1],
            NoteEntry {
                index: 1,
                label: "Bb",
                natural: false
            }
        );
        assert_eq!(result.notes.iter().filter(|n| n.natural).count(), 7);
    }

    #[test]
    fn result_serializes_spelling_in_snake_case() {
        let result = NotesResult::from_sequence(&chromatic_sequence(false));
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["spelling"], "sharps");
        assert_eq!(json["notes"][4]["label"], "C#");
    }

    #[test]
    fn run_succeeds() {
        assert_eq!(run(false, false).unwrap(), ExitCode::SUCCESS);
        assert_eq!(run(true, true).unwrap(), ExitCode::SUCCESS);
    }
}

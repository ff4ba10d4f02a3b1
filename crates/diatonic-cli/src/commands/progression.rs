//! Progression command implementation
//!
//! Resolves a custom degree sequence (e.g. `2,5,1`) against one root and mode.

use anyhow::Result;
use diatonic_theory::{ChromaticSequence, Note, Progression, ScaleRecord, Selection, TheoryError};
use std::process::ExitCode;

use super::render::render_progression;
use super::{fail, print_success};
use crate::input::{InputError, SelectionArgs};

/// Resolve `degrees` against the record selected by `selection`.
///
/// Returns the selected root alongside the progression.
pub fn resolve(selection: Selection, degrees: &[u8]) -> Result<(Note, Progression), TheoryError> {
    let sequence = ChromaticSequence::new(selection.spelling());
    let record = ScaleRecord::derive(&sequence, selection.root_index())?;
    let progression = Progression::resolve(degrees, record.chords.get(selection.mode()))?;
    Ok((record.name, progression))
}

/// Run the progression command
///
/// # Arguments
/// * `args` - Root, mode, spelling and preferences file from the command line
/// * `degrees` - 1-based scale degrees
/// * `json` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(args: &SelectionArgs, degrees: &[u8], json: bool) -> Result<ExitCode> {
    let selection = match args.resolve() {
        Ok(selection) => selection,
        Err(e) => return fail(e, json),
    };

    let (root, progression) = match resolve(selection, degrees) {
        Ok(resolved) => resolved,
        Err(e) => return fail(InputError::Theory(e), json),
    };

    if json {
        print_success(&progression)
    } else {
        print!(
            "{}",
            render_progression(root, selection.mode(), &progression)?
        );
        Ok(ExitCode::SUCCESS)
    }
}

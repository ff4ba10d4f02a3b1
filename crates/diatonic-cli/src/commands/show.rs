//! Show command implementation
//!
//! Prints the scale, chords and progressions for one root and mode.

use anyhow::Result;
use diatonic_theory::Snapshot;
use std::process::ExitCode;
use tracing::debug;

use super::render::render_view;
use super::{fail, print_success};
use crate::input::{InputError, SelectionArgs};

/// Run the show command
///
/// # Arguments
/// * `args` - Root, mode, spelling and preferences file from the command line
/// * `json` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(args: &SelectionArgs, json: bool) -> Result<ExitCode> {
    let selection = match args.resolve() {
        Ok(selection) => selection,
        Err(e) => return fail(e, json),
    };
    debug!(?selection, "resolved selection");

    let snapshot = match Snapshot::compute(selection) {
        Ok(snapshot) => snapshot,
        Err(e) => return fail(InputError::Theory(e), json),
    };

    // No records means nothing to render; not an error.
    let Some(view) = snapshot.view() else {
        return Ok(ExitCode::SUCCESS);
    };

    if json {
        print_success(&view)
    } else {
        print!("{}", render_view(&view)?);
        Ok(ExitCode::SUCCESS)
    }
}

//! CLI command implementations

pub mod json_output;
pub mod notes;
pub mod progression;
pub mod render;
pub mod roman;
pub mod show;
pub mod table;

use anyhow::{Context, Result};
use serde::Serialize;
use std::process::ExitCode;

use crate::input::InputError;
use json_output::{CommandOutput, JsonError};

/// Print a successful `--json` result.
pub(crate) fn print_success(result: &impl Serialize) -> Result<ExitCode> {
    let value = serde_json::to_value(result).context("Failed to serialize result")?;
    let output = CommandOutput::success(value);
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(ExitCode::SUCCESS)
}

/// Print a failed `--json` result and return exit code 1.
pub(crate) fn print_failure(err: &InputError) -> Result<ExitCode> {
    let output = CommandOutput::failure(vec![JsonError::from(err)]);
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(ExitCode::from(1))
}

/// Report `err` as JSON when `json` is set, otherwise propagate it.
pub(crate) fn fail(err: InputError, json: bool) -> Result<ExitCode> {
    if json {
        print_failure(&err)
    } else {
        Err(err.into())
    }
}

//! Table command implementation
//!
//! Dumps all twelve scale records for one spelling as JSON.

use anyhow::{Context, Result};
use diatonic_theory::{build_records, chromatic_sequence, ScaleRecord};
use std::process::ExitCode;

/// Serialize every record for the chosen spelling.
pub fn records_json(use_flats: bool, pretty: bool) -> Result<String> {
    let records: Vec<ScaleRecord> = build_records(&chromatic_sequence(use_flats))?;
    let json = if pretty {
        serde_json::to_string_pretty(&records)
    } else {
        serde_json::to_string(&records)
    };
    json.context("Failed to serialize scale records")
}

/// Run the table command
pub fn run(use_flats: bool, compact: bool) -> Result<ExitCode> {
    println!("{}", records_json(use_flats, !compact)?);
    Ok(ExitCode::SUCCESS)
}

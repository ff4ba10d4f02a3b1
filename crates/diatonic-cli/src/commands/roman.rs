//! Roman command implementation
//!
//! Formats one value as a Roman numeral. Non-numeric input prints the
//! not-a-number sentinel and still exits successfully.

use anyhow::Result;
use diatonic_theory::romanize_str;
use std::process::ExitCode;
use tracing::debug;

/// Run the roman command
pub fn run(value: &str) -> Result<ExitCode> {
    let numeral = romanize_str(value);
    if !numeral.is_number() {
        debug!(input = value, "input is not a positive integer");
    }
    println!("{}", numeral);
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_is_not_an_error() {
        assert_eq!(run("seven").unwrap(), ExitCode::SUCCESS);
        assert_eq!(run("-1").unwrap(), ExitCode::SUCCESS);
        assert_eq!(run("7").unwrap(), ExitCode::SUCCESS);
    }
}

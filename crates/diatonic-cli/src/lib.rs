//! Diatonic CLI library.
//!
//! Resolves a root/mode/spelling selection from arguments and an optional
//! preferences file, runs the derivation in `diatonic-theory`, and renders
//! the result as colored text or JSON.

pub mod commands;
pub mod input;
pub mod logging;

//! CLI argument definitions for the diatonic command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined here,
//! keeping `main.rs` focused on dispatch logic.

use clap::{Args, Parser, Subcommand};
use diatonic_cli::input::SelectionArgs;
use diatonic_theory::Mode;

/// Diatonic - scales, triads and chord progressions for every root
#[derive(Parser)]
#[command(name = "diatonic")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    /// Log derivation steps to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Show the scale, chords and progressions for a root
    Show {
        /// Root note label (C, F#, Bb) or table index 0-11 (A = 0)
        root: Option<String>,

        #[command(flatten)]
        selection: SelectionFlags,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// List the twelve-note chromatic table
    Notes {
        /// Spell black keys with flats
        #[arg(long)]
        flats: bool,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Dump all twelve scale records as JSON
    Table {
        /// Spell black keys with flats
        #[arg(long)]
        flats: bool,

        /// Single-line JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },

    /// Format a number as a Roman numeral
    Roman {
        /// Value to format; non-numeric input prints NaN
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Resolve a custom degree sequence against a root
    Progression {
        /// Root note label (C, F#, Bb) or table index 0-11 (A = 0)
        root: String,

        /// Comma-separated scale degrees, 1-7 (e.g. 2,5,1)
        #[arg(value_delimiter = ',', required = true)]
        degrees: Vec<u8>,

        #[command(flatten)]
        selection: SelectionFlags,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

/// Mode and spelling flags shared by `show` and `progression`.
#[derive(Args, Debug, Clone, Default)]
pub(crate) struct SelectionFlags {
    /// Scale mode (major or minor)
    #[arg(short, long)]
    pub mode: Option<Mode>,

    /// Spell black keys with flats
    #[arg(long, conflicts_with = "sharps")]
    pub flats: bool,

    /// Spell black keys with sharps (overrides the preferences file)
    #[arg(long)]
    pub sharps: bool,

    /// JSON preferences file supplying defaults for root, mode and spelling
    #[arg(long)]
    pub prefs: Option<String>,
}

impl SelectionFlags {
    pub fn into_args(self, root: Option<String>) -> SelectionArgs {
        let use_flats = match (self.flats, self.sharps) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };
        SelectionArgs {
            root,
            mode: self.mode,
            use_flats,
            prefs: self.prefs,
        }
    }
}

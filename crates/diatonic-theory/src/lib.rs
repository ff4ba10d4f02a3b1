//! Diatonic Theory Library
//!
//! Derives, for every one of the twelve chromatic roots, the major and
//! natural-minor scales, the seven diatonic triads of each, and a fixed set of
//! chord progressions.
//!
//! # Pipeline
//!
//! 1. [`note`]: the twelve-note table in sharp or flat spelling
//! 2. [`scale`]: rotate the table to a root and sample the mode offsets
//! 3. [`chord`]: stack thirds on each degree and name the triad
//! 4. [`progression`]: resolve degree sequences against a chord set
//! 5. [`record`]: bundle the above per root and track the current selection
//!
//! Every stage is pure. Identical inputs always give structurally equal
//! output.
//!
//! # Example
//!
//! ```
//! use diatonic_theory::{Mode, Selection, Snapshot};
//!
//! let selection = Selection::new(3, Mode::Major, false).unwrap(); // C
//! let snapshot = Snapshot::compute(selection).unwrap();
//! let view = snapshot.view().unwrap();
//!
//! let names: Vec<_> = view.chords.iter().map(|c| c.name.as_str()).collect();
//! assert_eq!(names, ["C", "Dm", "Em", "F", "G", "Am", "Bdim"]);
//! assert_eq!(view.progressions[0].label(), "I-V-VI-IV");
//! ```

pub mod chord;
pub mod error;
pub mod mode;
pub mod note;
pub mod progression;
pub mod record;
pub mod roman;
pub mod scale;

// Re-export commonly used types at the crate root
pub use chord::{build_chord_set, build_chord_sets, build_triad, Quality, Triad};
pub use error::{ErrorCode, TheoryError};
pub use mode::{ByMode, Mode, SCALE_LEN};
pub use note::{chromatic_sequence, ChromaticSequence, Note, Spelling, NOTE_COUNT};
pub use progression::{build_progression_sets, standard_progressions, Progression, PROGRESSIONS};
pub use record::{build_records, ScaleRecord, ScaleView, Selection, Snapshot};
pub use roman::{romanize, romanize_str, RomanNumeral};
pub use scale::{derive_scale, derive_scale_at, RootedScale};

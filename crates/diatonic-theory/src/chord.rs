//! Diatonic triads built on each degree of a scale.

use serde::{Deserialize, Serialize};

use crate::mode::{ByMode, Mode, SCALE_LEN};
use crate::note::Note;
use crate::scale::RootedScale;

/// Triad quality, as shown by the chord-name suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quality {
    Major,
    Minor,
    Diminished,
}

impl Quality {
    /// Suffix appended to the root label: `""`, `"m"` or `"dim"`.
    pub fn suffix(self) -> &'static str {
        match self {
            Quality::Major => "",
            Quality::Minor => "m",
            Quality::Diminished => "dim",
        }
    }
}

/// A three-note chord stacked in thirds on one scale degree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Triad {
    /// Root label plus quality suffix, e.g. `"Am"` or `"Bdim"`.
    pub name: String,
    pub root: Note,
    pub quality: Quality,
    /// Root, third and fifth.
    pub notes: [Note; 3],
}

/// Build the triad on `degree` (0-based) of a seven-note scale.
///
/// The third and fifth are taken at `(degree + 2) % 7` and `(degree + 4) % 7`,
/// so degrees near the top of the scale wrap to its start.
///
/// # Panics
///
/// Panics if `degree >= 7`.
pub fn build_triad(scale: &[Note; SCALE_LEN], mode: Mode, degree: usize) -> Triad {
    let root = scale[degree];
    let quality = mode.qualities()[degree];
    Triad {
        name: format!("{}{}", root.label(), quality.suffix()),
        root,
        quality,
        notes: [
            root,
            scale[(degree + 2) % SCALE_LEN],
            scale[(degree + 4) % SCALE_LEN],
        ],
    }
}

/// The seven triads of one scale, in degree order.
pub fn build_chord_set(scale: &[Note; SCALE_LEN], mode: Mode) -> [Triad; SCALE_LEN] {
    std::array::from_fn(|degree| build_triad(scale, mode, degree))
}

/// Chord sets for both scales of a root.
pub fn build_chord_sets(scale: &RootedScale) -> ByMode<[Triad; SCALE_LEN]> {
    ByMode::from_fn(|mode| build_chord_set(scale.notes(mode), mode))
}

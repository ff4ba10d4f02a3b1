//! Scale derivation: rotate the chromatic table to a root and sample the
//! fixed major and natural-minor offsets.

use serde::{Deserialize, Serialize};

use crate::error::TheoryError;
use crate::mode::{Mode, SCALE_LEN};
use crate::note::{ChromaticSequence, Note, NOTE_COUNT};

/// The major and natural-minor scales built on one root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootedScale {
    pub root: Note,
    pub major: [Note; SCALE_LEN],
    pub minor: [Note; SCALE_LEN],
}

impl RootedScale {
    /// Derive both scales for the note at `root` in `sequence`.
    ///
    /// `root` wraps modulo 12; use [`derive_scale_at`] for a checked index.
    pub fn at(sequence: &ChromaticSequence, root: usize) -> Self {
        let rotated = sequence.rotated(root % NOTE_COUNT);
        let sample = |mode: Mode| -> [Note; SCALE_LEN] {
            let offsets = mode.offsets();
            std::array::from_fn(|degree| rotated[offsets[degree]])
        };
        Self {
            root: rotated[0],
            major: sample(Mode::Major),
            minor: sample(Mode::Minor),
        }
    }

    pub fn notes(&self, mode: Mode) -> &[Note; SCALE_LEN] {
        match mode {
            Mode::Major => &self.major,
            Mode::Minor => &self.minor,
        }
    }
}

/// Derive the scales for the note named `root` (either spelling).
///
/// # Example
///
/// ```
/// use diatonic_theory::{chromatic_sequence, derive_scale};
///
/// let scale = derive_scale(&chromatic_sequence(false), "C").unwrap();
/// let labels: Vec<_> = scale.major.iter().map(|n| n.label()).collect();
/// assert_eq!(labels, ["C", "D", "E", "F", "G", "A", "B"]);
/// ```
pub fn derive_scale(sequence: &ChromaticSequence, root: &str) -> Result<RootedScale, TheoryError> {
    let index = sequence
        .position_of(root)
        .ok_or_else(|| TheoryError::UnknownNote {
            label: root.to_string(),
        })?;
    Ok(RootedScale::at(sequence, index))
}

/// Derive the scales for the note at a checked index.
pub fn derive_scale_at(
    sequence: &ChromaticSequence,
    index: usize,
) -> Result<RootedScale, TheoryError> {
    if index >= NOTE_COUNT {
        return Err(TheoryError::InvalidRootIndex { index });
    }
    Ok(RootedScale::at(sequence, index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::note::chromatic_sequence;
    use pretty_assertions::assert_eq;

    fn labels(notes: &[Note]) -> Vec<&'static str> {
        notes.iter().map(|n| n.label()).collect()
    }

    #[test]
    fn c_major_sharps() {
        let scale = derive_scale(&chromatic_sequence(false), "C").unwrap();
        assert_eq!(labels(&scale.major), ["C", "D", "E", "F", "G", "A", "B"]);
    }

    #[test]
    fn c_minor_in_both_spellings() {
        let sharps = derive_scale(&chromatic_sequence(false), "C").unwrap();
        assert_eq!(labels(&sharps.minor), ["C", "D", "D#", "F", "G", "G#", "A#"]);

        let flats = derive_scale(&chromatic_sequence(true), "C").unwrap();
        assert_eq!(labels(&flats.minor), ["C", "D", "Eb", "F", "G", "Ab", "Bb"]);
    }

    #[test]
    fn root_wraps_past_end_of_table() {
        // G# sits at the last slot, so its scale wraps back through A.
        let scale = derive_scale(&chromatic_sequence(false), "G#").unwrap();
        assert_eq!(
            labels(&scale.major),
            ["G#", "A#", "C", "C#", "D#", "F", "G"]
        );
        assert_eq!(scale.root.label(), "G#");
    }

    #[test]
    fn flat_root_resolves_in_sharp_table() {
        let seq = chromatic_sequence(false);
        assert_eq!(
            derive_scale(&seq, "Eb").unwrap(),
            derive_scale(&seq, "D#").unwrap()
        );
    }

    #[test]
    fn a_minor_is_all_naturals() {
        let scale = derive_scale(&chromatic_sequence(true), "A").unwrap();
        assert!(scale.minor.iter().all(|n| n.is_natural()));
    }

    #[test]
    fn unknown_root_is_an_error() {
        assert_eq!(
            derive_scale(&chromatic_sequence(false), "H"),
            Err(TheoryError::UnknownNote {
                label: "H".to_string()
            })
        );
    }

    #[test]
    fn checked_index() {
        let seq = chromatic_sequence(false);
        assert_eq!(
            derive_scale_at(&seq, 12),
            Err(TheoryError::InvalidRootIndex { index: 12 })
        );
        assert_eq!(derive_scale_at(&seq, 3).unwrap().root.label(), "C");
    }
}

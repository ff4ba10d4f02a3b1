//! Chord progressions expressed as scale-degree sequences.

use serde::{Deserialize, Serialize};

use crate::chord::Triad;
use crate::error::TheoryError;
use crate::mode::{ByMode, SCALE_LEN};
use crate::roman::romanize;

/// Degree sequences shown for every root and mode.
pub const PROGRESSIONS: [&[u8]; 5] = [
    &[1, 5, 6, 4],
    &[1, 4, 5],
    &[2, 5, 1],
    &[1, 6, 4, 5],
    &[1, 5, 6, 3, 4, 1, 4, 5],
];

/// A degree sequence resolved against one chord set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progression {
    /// 1-based scale degrees.
    pub format: Vec<u8>,
    /// One triad per entry of `format`.
    pub chords: Vec<Triad>,
}

impl Progression {
    /// Resolve 1-based `format` degrees against a seven-triad chord set.
    pub fn resolve(format: &[u8], chords: &[Triad; SCALE_LEN]) -> Result<Self, TheoryError> {
        let chords = format
            .iter()
            .map(|&step| -> Result<Triad, TheoryError> {
                let index = usize::from(step)
                    .checked_sub(1)
                    .filter(|&i| i < SCALE_LEN)
                    .ok_or(TheoryError::DegreeOutOfRange {
                        degree: i64::from(step),
                    })?;
                Ok(chords[index].clone())
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            format: format.to_vec(),
            chords,
        })
    }

    /// Degree label such as `"I-V-VI-IV"`.
    pub fn label(&self) -> String {
        self.format
            .iter()
            .map(|&step| romanize(i64::from(step)).to_string())
            .collect::<Vec<_>>()
            .join("-")
    }

    pub fn chord_names(&self) -> Vec<&str> {
        self.chords.iter().map(|c| c.name.as_str()).collect()
    }
}

/// Resolve every entry of [`PROGRESSIONS`] against one chord set.
pub fn standard_progressions(
    chords: &[Triad; SCALE_LEN],
) -> Result<Vec<Progression>, TheoryError> {
    PROGRESSIONS
        .iter()
        .map(|format| Progression::resolve(format, chords))
        .collect()
}

/// Standard progressions for both modes of a root.
pub fn build_progression_sets(
    chords: &ByMode<[Triad; SCALE_LEN]>,
) -> Result<ByMode<Vec<Progression>>, TheoryError> {
    chords.map(|_, set| standard_progressions(set)).transpose()
}

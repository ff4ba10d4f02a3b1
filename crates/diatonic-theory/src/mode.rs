//! Major and natural-minor modes and the per-mode record wrapper.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::chord::Quality;
use crate::error::TheoryError;

/// Number of notes in a diatonic scale.
pub const SCALE_LEN: usize = 7;

/// Semitone offsets of the major scale from its root.
pub const MAJOR_OFFSETS: [usize; SCALE_LEN] = [0, 2, 4, 5, 7, 9, 11];

/// Semitone offsets of the natural-minor scale from its root.
pub const MINOR_OFFSETS: [usize; SCALE_LEN] = [0, 2, 3, 5, 7, 8, 10];

/// Triad qualities on degrees I-VII of a major scale.
pub const MAJOR_QUALITIES: [Quality; SCALE_LEN] = [
    Quality::Major,
    Quality::Minor,
    Quality::Minor,
    Quality::Major,
    Quality::Major,
    Quality::Minor,
    Quality::Diminished,
];

/// Triad qualities on degrees i-VII of a natural-minor scale.
pub const MINOR_QUALITIES: [Quality; SCALE_LEN] = [
    Quality::Minor,
    Quality::Diminished,
    Quality::Major,
    Quality::Minor,
    Quality::Minor,
    Quality::Major,
    Quality::Major,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    #[default]
    Major,
    Minor,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Major, Mode::Minor];

    /// Offsets sampled from the rotated chromatic table.
    pub fn offsets(self) -> &'static [usize; SCALE_LEN] {
        match self {
            Mode::Major => &MAJOR_OFFSETS,
            Mode::Minor => &MINOR_OFFSETS,
        }
    }

    /// Whole/half step pattern, for display.
    pub fn step_pattern(self) -> &'static str {
        match self {
            Mode::Major => "W-W-H-W-W-W-H",
            Mode::Minor => "W-H-W-W-H-W-W",
        }
    }

    pub fn qualities(self) -> &'static [Quality; SCALE_LEN] {
        match self {
            Mode::Major => &MAJOR_QUALITIES,
            Mode::Minor => &MINOR_QUALITIES,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Major => "major",
            Mode::Minor => "minor",
        }
    }

    /// Capitalized name used in headings.
    pub fn title(self) -> &'static str {
        match self {
            Mode::Major => "Major",
            Mode::Minor => "Minor",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "major" | "maj" | "ionian" => Ok(Mode::Major),
            "minor" | "min" | "aeolian" => Ok(Mode::Minor),
            _ => Err(TheoryError::UnknownMode {
                name: s.to_string(),
            }),
        }
    }
}

/// One value per mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ByMode<T> {
    pub major: T,
    pub minor: T,
}

impl<T> ByMode<T> {
    /// Build both halves from the same function.
    pub fn from_fn(mut f: impl FnMut(Mode) -> T) -> Self {
        Self {
            major: f(Mode::Major),
            minor: f(Mode::Minor),
        }
    }

    pub fn get(&self, mode: Mode) -> &T {
        match mode {
            Mode::Major => &self.major,
            Mode::Minor => &self.minor,
        }
    }

    pub fn map<U>(&self, mut f: impl FnMut(Mode, &T) -> U) -> ByMode<U> {
        ByMode {
            major: f(Mode::Major, &self.major),
            minor: f(Mode::Minor, &self.minor),
        }
    }
}

impl<T, E> ByMode<Result<T, E>> {
    /// Turn a pair of results into a result of a pair, failing on the first error.
    pub fn transpose(self) -> Result<ByMode<T>, E> {
        Ok(ByMode {
            major: self.major?,
            minor: self.minor?,
        })
    }
}

//! Note labels and the twelve-note chromatic table.
//!
//! Notes are stored as a slot in the A-based chromatic order plus a spelling
//! preference. The printed label is derived from those two values alone, so a
//! note never carries a spelling that disagrees with the table it came from.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TheoryError;

/// Number of pitch classes in the chromatic table.
pub const NOTE_COUNT: usize = 12;

/// Sharp and flat labels for each slot, starting from A.
///
/// Natural slots carry the same label in both columns.
const NOTE_TABLE: [(&str, &str); NOTE_COUNT] = [
    ("A", "A"),
    ("A#", "Bb"),
    ("B", "B"),
    ("C", "C"),
    ("C#", "Db"),
    ("D", "D"),
    ("D#", "Eb"),
    ("E", "E"),
    ("F", "F"),
    ("F#", "Gb"),
    ("G", "G"),
    ("G#", "Ab"),
];

/// Display preference for the five black-key slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Spelling {
    /// `C#`, `D#`, `F#`, `G#`, `A#`
    #[default]
    Sharps,
    /// `Db`, `Eb`, `Gb`, `Ab`, `Bb`
    Flats,
}

impl Spelling {
    /// Spelling for a `use_flats` toggle value.
    pub fn from_use_flats(use_flats: bool) -> Self {
        if use_flats {
            Spelling::Flats
        } else {
            Spelling::Sharps
        }
    }

    /// The other spelling.
    pub fn toggled(self) -> Self {
        match self {
            Spelling::Sharps => Spelling::Flats,
            Spelling::Flats => Spelling::Sharps,
        }
    }
}

/// One of the twelve pitch classes, as displayed under a given spelling.
///
/// Serializes as its label (`"C#"`, `"Db"`, `"E"`) and parses from any label in
/// either spelling. Naturals always carry [`Spelling::Sharps`], so two notes
/// are equal exactly when their labels are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Note {
    slot: u8,
    spelling: Spelling,
}

impl Note {
    /// Create a note from its slot in the A-based order.
    pub fn new(slot: usize, spelling: Spelling) -> Result<Self, TheoryError> {
        if slot >= NOTE_COUNT {
            return Err(TheoryError::InvalidRootIndex { index: slot });
        }
        Ok(Self::from_slot(slot, spelling))
    }

    /// Slot wraps modulo 12. Naturals ignore `spelling`.
    pub(crate) fn from_slot(slot: usize, spelling: Spelling) -> Self {
        let slot = slot % NOTE_COUNT;
        let (sharp, flat) = NOTE_TABLE[slot];
        let spelling = if sharp == flat {
            Spelling::Sharps
        } else {
            spelling
        };
        Self {
            slot: slot as u8,
            spelling,
        }
    }

    /// Position in the A-based chromatic order (A = 0, C = 3).
    pub fn slot(self) -> usize {
        self.slot as usize
    }

    pub fn spelling(self) -> Spelling {
        self.spelling
    }

    /// Display label under this note's spelling.
    pub fn label(self) -> &'static str {
        let (sharp, flat) = NOTE_TABLE[self.slot()];
        match self.spelling {
            Spelling::Sharps => sharp,
            Spelling::Flats => flat,
        }
    }

    /// True for A, B, C, D, E, F and G.
    pub fn is_natural(self) -> bool {
        let (sharp, flat) = NOTE_TABLE[self.slot()];
        sharp == flat
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Note {
    type Err = TheoryError;

    /// Parse a label such as `"C#"`, `"db"` or `"E♭"`.
    ///
    /// Only labels that appear in the chromatic table are accepted, so
    /// enharmonic spellings like `"E#"` or `"Cb"` are rejected. Naturals
    /// parse with the sharp spelling.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || TheoryError::UnknownNote {
            label: s.to_string(),
        };

        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let letter = chars.next().ok_or_else(unknown)?.to_ascii_uppercase();
        let accidental = match chars.as_str() {
            "" => "",
            "#" | "\u{266F}" => "#",
            "b" | "\u{266D}" => "b",
            _ => return Err(unknown()),
        };
        let canonical = format!("{}{}", letter, accidental);

        NOTE_TABLE
            .iter()
            .enumerate()
            .find_map(|(slot, (sharp, flat))| {
                if *sharp == canonical {
                    Some(Note::from_slot(slot, Spelling::Sharps))
                } else if *flat == canonical {
                    Some(Note::from_slot(slot, Spelling::Flats))
                } else {
                    None
                }
            })
            .ok_or_else(unknown)
    }
}

impl TryFrom<String> for Note {
    type Error = TheoryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Note> for String {
    fn from(note: Note) -> Self {
        note.label().to_string()
    }
}

/// The twelve notes in A-based order, all under one spelling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChromaticSequence {
    spelling: Spelling,
    notes: [Note; NOTE_COUNT],
}

impl ChromaticSequence {
    /// Build the table for a spelling.
    ///
    /// # Example
    ///
    /// ```
    /// use diatonic_theory::{ChromaticSequence, Spelling};
    ///
    /// let flats = ChromaticSequence::new(Spelling::Flats);
    /// assert_eq!(flats.labels()[..3], ["A", "Bb", "B"]);
    /// ```
    pub fn new(spelling: Spelling) -> Self {
        Self {
            spelling,
            notes: std::array::from_fn(|slot| Note::from_slot(slot, spelling)),
        }
    }

    pub fn spelling(&self) -> Spelling {
        self.spelling
    }

    pub fn notes(&self) -> &[Note; NOTE_COUNT] {
        &self.notes
    }

    pub fn get(&self, index: usize) -> Option<Note> {
        self.notes.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Note> + '_ {
        self.notes.iter().copied()
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.iter().map(Note::label).collect()
    }

    /// Index of `note` in this table, ignoring its spelling.
    ///
    /// Both spellings keep the same order, so this is the note's slot.
    pub fn position(&self, note: &Note) -> usize {
        note.slot()
    }

    /// Index of the note named by `label`, in either spelling.
    ///
    /// `"Db"` is found in a sharp table at the `C#` position.
    pub fn position_of(&self, label: &str) -> Option<usize> {
        let note: Note = label.parse().ok()?;
        Some(self.position(&note))
    }

    /// The table rotated so that `root` lands at index 0.
    pub fn rotated(&self, root: usize) -> [Note; NOTE_COUNT] {
        std::array::from_fn(|i| self.notes[(root + i) % NOTE_COUNT])
    }

    /// The same table under the other spelling.
    pub fn toggled(&self) -> Self {
        Self::new(self.spelling.toggled())
    }
}

/// Build the chromatic table for a `use_flats` toggle value.
pub fn chromatic_sequence(use_flats: bool) -> ChromaticSequence {
    ChromaticSequence::new(Spelling::from_use_flats(use_flats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn sharp_table_order() {
        assert_eq!(
            chromatic_sequence(false).labels(),
            vec!["A", "A#", "B", "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#"]
        );
    }

    #[test]
    fn flat_table_order() {
        assert_eq!(
            chromatic_sequence(true).labels(),
            vec!["A", "Bb", "B", "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab"]
        );
    }

    #[test]
    fn exactly_five_black_keys() {
        let seq = chromatic_sequence(false);
        assert_eq!(seq.iter().filter(|n| !n.is_natural()).count(), 5);
    }

    #[test]
    fn parse_accepts_both_spellings() {
        let sharp: Note = "C#".parse().unwrap();
        let flat: Note = "db".parse().unwrap();
        assert_eq!(sharp.slot(), flat.slot());
        assert_eq!(sharp.spelling(), Spelling::Sharps);
        assert_eq!(flat.spelling(), Spelling::Flats);
        assert_eq!(flat.label(), "Db");

        let glyph: Note = "E\u{266D}".parse().unwrap();
        assert_eq!(glyph.label(), "Eb");
    }

    #[test]
    fn parse_naturals_and_b() {
        let b: Note = "b".parse().unwrap();
        assert_eq!(b.label(), "B");
        let bb: Note = "bb".parse().unwrap();
        assert_eq!(bb.label(), "Bb");
    }

    #[test]
    fn parse_rejects_labels_outside_table() {
        for label in ["", "H", "E#", "Cb", "C##", "C#4"] {
            assert!(label.parse::<Note>().is_err(), "accepted {:?}", label);
        }
    }

    #[test]
    fn position_of_ignores_spelling() {
        let seq = chromatic_sequence(false);
        assert_eq!(seq.position_of("C"), Some(3));
        assert_eq!(seq.position_of("Db"), Some(4));
        assert_eq!(seq.position_of("C#"), Some(4));
        assert_eq!(seq.position_of("X"), None);

        let flat_e = Note::new(6, Spelling::Flats).unwrap();
        assert_eq!(chromatic_sequence(false).position(&flat_e), 6);
    }

    #[test]
    fn rotation_starts_at_root() {
        let seq = chromatic_sequence(false);
        let rotated = seq.rotated(3);
        assert_eq!(rotated[0].label(), "C");
        assert_eq!(rotated[11].label(), "B");
    }

    #[test]
    fn new_rejects_out_of_range_slot() {
        assert_eq!(
            Note::new(12, Spelling::Sharps),
            Err(TheoryError::InvalidRootIndex { index: 12 })
        );
    }

    #[test]
    fn naturals_compare_equal_across_tables() {
        let sharps = chromatic_sequence(false);
        let flats = chromatic_sequence(true);
        for (s, f) in sharps.iter().zip(flats.iter()) {
            assert_eq!(s == f, s.label() == f.label(), "{} vs {}", s, f);
        }
        let c: Note = "C".parse().unwrap();
        assert_eq!(flats.get(3), Some(c));
    }

    #[test]
    fn flat_table_round_trips_through_labels() {
        let flats = chromatic_sequence(true);
        for note in flats.iter() {
            let back: Note = serde_json::from_str(&serde_json::to_string(&note).unwrap()).unwrap();
            assert_eq!(back, note);
        }
    }

    #[test]
    fn note_serializes_as_label() {
        let note = Note::new(6, Spelling::Flats).unwrap();
        assert_eq!(serde_json::to_string(&note).unwrap(), "\"Eb\"");
        let back: Note = serde_json::from_str("\"Eb\"").unwrap();
        assert_eq!(back, note);
    }
}

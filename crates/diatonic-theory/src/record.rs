//! Per-root scale records and the selection-driven snapshot.
//!
//! A [`Snapshot`] holds everything derived for one [`Selection`]: the
//! chromatic table and one [`ScaleRecord`] per root. Changing the selection
//! produces a new snapshot. Records are rebuilt only when the spelling
//! changes, since root and mode merely pick among records already derived.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::chord::{build_chord_sets, Triad};
use crate::error::TheoryError;
use crate::mode::{ByMode, Mode, SCALE_LEN};
use crate::note::{ChromaticSequence, Note, Spelling, NOTE_COUNT};
use crate::progression::{build_progression_sets, Progression};
use crate::scale::derive_scale_at;

/// Everything derived for one root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleRecord {
    /// Position of the root in the chromatic table (A = 0).
    pub id: usize,
    pub name: Note,
    pub notes: ByMode<[Note; SCALE_LEN]>,
    pub chords: ByMode<[Triad; SCALE_LEN]>,
    pub progressions: ByMode<Vec<Progression>>,
}

impl ScaleRecord {
    pub fn derive(sequence: &ChromaticSequence, id: usize) -> Result<Self, TheoryError> {
        let scale = derive_scale_at(sequence, id)?;
        let chords = build_chord_sets(&scale);
        let progressions = build_progression_sets(&chords)?;
        trace!(id, root = %scale.root, "derived scale record");

        Ok(Self {
            id,
            name: scale.root,
            notes: ByMode {
                major: scale.major,
                minor: scale.minor,
            },
            chords,
            progressions,
        })
    }

    /// The parts of this record that belong to one mode.
    pub fn view(&self, mode: Mode) -> ScaleView<'_> {
        ScaleView {
            root: self.name,
            mode,
            notes: self.notes.get(mode),
            chords: self.chords.get(mode),
            progressions: self.progressions.get(mode),
        }
    }
}

/// Borrowed single-mode slice of a [`ScaleRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScaleView<'a> {
    pub root: Note,
    pub mode: Mode,
    pub notes: &'a [Note; SCALE_LEN],
    pub chords: &'a [Triad; SCALE_LEN],
    pub progressions: &'a [Progression],
}

/// Derive one record per note of `sequence`, in table order.
pub fn build_records(sequence: &ChromaticSequence) -> Result<Vec<ScaleRecord>, TheoryError> {
    (0..NOTE_COUNT)
        .map(|id| ScaleRecord::derive(sequence, id))
        .collect()
}

/// The user's current choice of root, mode and spelling.
///
/// Values are never mutated; each `with_*` call returns a new selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Selection {
    root_index: usize,
    mode: Mode,
    use_flats: bool,
}

impl Selection {
    pub fn new(root_index: usize, mode: Mode, use_flats: bool) -> Result<Self, TheoryError> {
        Selection::default()
            .with_root(root_index)
            .map(|s| s.with_mode(mode).with_flats(use_flats))
    }

    pub fn root_index(self) -> usize {
        self.root_index
    }

    pub fn mode(self) -> Mode {
        self.mode
    }

    pub fn use_flats(self) -> bool {
        self.use_flats
    }

    pub fn spelling(self) -> Spelling {
        Spelling::from_use_flats(self.use_flats)
    }

    pub fn with_root(self, root_index: usize) -> Result<Self, TheoryError> {
        if root_index >= NOTE_COUNT {
            return Err(TheoryError::InvalidRootIndex { index: root_index });
        }
        Ok(Self { root_index, ..self })
    }

    pub fn with_mode(self, mode: Mode) -> Self {
        Self { mode, ..self }
    }

    pub fn with_flats(self, use_flats: bool) -> Self {
        Self { use_flats, ..self }
    }

    pub fn toggle_flats(self) -> Self {
        self.with_flats(!self.use_flats)
    }
}

/// All derived state for one selection.
///
/// The default snapshot has no table and no records yet. Callers should treat
/// it as "nothing to show" rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Snapshot {
    selection: Selection,
    sequence: Option<ChromaticSequence>,
    records: Vec<ScaleRecord>,
}

impl Snapshot {
    /// Derive the table and all twelve records from scratch.
    pub fn compute(selection: Selection) -> Result<Self, TheoryError> {
        let sequence = ChromaticSequence::new(selection.spelling());
        let records = build_records(&sequence)?;
        debug!(
            spelling = ?sequence.spelling(),
            records = records.len(),
            "rebuilt scale records"
        );

        Ok(Self {
            selection,
            sequence: Some(sequence),
            records,
        })
    }

    /// Move to `next`, rebuilding records only if the spelling changed.
    pub fn apply(self, next: Selection) -> Result<Self, TheoryError> {
        let same_spelling = self
            .sequence
            .as_ref()
            .is_some_and(|seq| seq.spelling() == next.spelling());

        if same_spelling && !self.records.is_empty() {
            debug!(
                root_index = next.root_index(),
                mode = %next.mode(),
                "reusing scale records"
            );
            return Ok(Self {
                selection: next,
                ..self
            });
        }
        Self::compute(next)
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn sequence(&self) -> Option<&ChromaticSequence> {
        self.sequence.as_ref()
    }

    pub fn records(&self) -> &[ScaleRecord] {
        &self.records
    }

    /// The record for the selected root, if records have been built.
    pub fn current(&self) -> Option<&ScaleRecord> {
        self.records
            .iter()
            .find(|r| r.id == self.selection.root_index)
    }

    /// The selected record, restricted to the selected mode.
    pub fn view(&self) -> Option<ScaleView<'_>> {
        self.current().map(|r| r.view(self.selection.mode))
    }
}

//! Plain-text rendering of derived scales, chords and progressions.

use std::fmt::{self, Write};

use colored::Colorize;
use diatonic_theory::{ChromaticSequence, Mode, Note, Progression, ScaleView, Triad};

/// Width of the chord-name column.
const CHORD_COLUMN: usize = 6;

/// Heading such as `"C Major Chords"`.
pub fn heading(root: Note, mode: Mode, section: &str) -> String {
    format!("{} {} {}", root, mode.title(), section)
}

fn join_notes(notes: &[Note]) -> String {
    notes
        .iter()
        .map(|n| n.label())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn chord_line(triad: &Triad) -> String {
    format!(
        "{:<width$}{}",
        triad.name,
        join_notes(&triad.notes),
        width = CHORD_COLUMN
    )
}

/// Title line such as `"Progression #1 (I-V-VI-IV)"`; `index` is 0-based.
pub fn progression_title(index: usize, progression: &Progression) -> String {
    format!("Progression #{} ({})", index + 1, progression.label())
}

/// The scale, chord and progression sections for one root and mode.
pub fn render_view(view: &ScaleView<'_>) -> Result<String, fmt::Error> {
    let mut out = String::new();

    writeln!(out, "{}", heading(view.root, view.mode, "Scale").bold())?;
    writeln!(out, "  {}", join_notes(view.notes))?;
    writeln!(out, "  {}", view.mode.step_pattern().dimmed())?;
    out.push('\n');

    writeln!(out, "{}", heading(view.root, view.mode, "Chords").bold())?;
    for triad in view.chords {
        writeln!(out, "  {}", chord_line(triad))?;
    }
    out.push('\n');

    writeln!(
        out,
        "{}",
        heading(view.root, view.mode, "Progressions").bold()
    )?;
    for (index, progression) in view.progressions.iter().enumerate() {
        writeln!(out, "  {}", progression_title(index, progression).cyan())?;
        writeln!(out, "    {}", progression.chord_names().join("  "))?;
    }

    Ok(out)
}

/// A resolved custom progression with one chord per line.
pub fn render_progression(
    root: Note,
    mode: Mode,
    progression: &Progression,
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let title = format!("{} {} ({})", root, mode.title(), progression.label());
    writeln!(out, "{}", title.bold())?;
    for triad in &progression.chords {
        writeln!(out, "  {}", chord_line(triad))?;
    }
    Ok(out)
}

/// The chromatic table, one note per line, naturals marked.
pub fn render_notes(sequence: &ChromaticSequence) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "{}", "All Notes".bold())?;
    for (index, note) in sequence.iter().enumerate() {
        let marker = if note.is_natural() { "natural" } else { "" };
        writeln!(out, "  {:>2}  {:<3}{}", index, note.label(), marker.dimmed())?;
    }
    Ok(out)
}

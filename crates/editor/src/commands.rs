// Chunk: docs/chunks/text_commands - Case, sort, dedupe, join and statistics commands

//! Document-wide and selection-wide text commands.
//!
//! Case commands work on the selection, or the whole document when nothing
//! is selected. Line commands work on every line the selection touches,
//! whole lines included, and leave the rewritten block selected.

use std::collections::HashSet;

use lite_pad_buffer::{BufferError, DirtyLines, TextBuffer};
use tracing::debug;

use crate::collator::{simple_lowercase, Collator};

// ==================== Case ====================

/// Maps every character of the active range through `f`.
///
/// `f` maps one character to one character, so the document length and the
/// caret and anchor offsets are unchanged.
pub fn transform_case(
    buffer: &mut TextBuffer,
    f: impl Fn(char) -> char,
) -> Result<DirtyLines, BufferError> {
    let (caret, anchor) = (buffer.caret(), buffer.anchor());
    let (start, end) = if buffer.has_selection() {
        buffer.selection()
    } else {
        (0, buffer.len())
    };

    let original = match buffer.selected_text() {
        Some(text) => text,
        None => buffer.text(),
    };
    let transformed: String = original.chars().map(f).collect();
    if transformed == original {
        return Ok(DirtyLines::None);
    }

    let dirty = buffer.replace_range(start, end, &transformed)?;
    buffer.select(anchor, caret)?;
    Ok(dirty)
}

fn simple_uppercase(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Characters whose uppercase form is several characters (`ß`) are kept.
pub fn to_uppercase(buffer: &mut TextBuffer) -> Result<DirtyLines, BufferError> {
    transform_case(buffer, simple_uppercase)
}

pub fn to_lowercase(buffer: &mut TextBuffer) -> Result<DirtyLines, BufferError> {
    transform_case(buffer, simple_lowercase)
}

/// Lowercase becomes uppercase and everything else lowercase.
pub fn invert_case(buffer: &mut TextBuffer) -> Result<DirtyLines, BufferError> {
    transform_case(buffer, invert_char)
}

fn invert_char(c: char) -> char {
    if c.is_lowercase() {
        simple_uppercase(c)
    } else {
        simple_lowercase(c)
    }
}

// ==================== Lines ====================

/// Lines touched by the selection, inclusive.
fn selected_line_range(buffer: &TextBuffer) -> Result<(usize, usize), BufferError> {
    let caret_line = buffer.line_of_offset(buffer.caret())?;
    let anchor_line = buffer.line_of_offset(buffer.anchor())?;
    Ok((caret_line.min(anchor_line), caret_line.max(anchor_line)))
}

/// Replaces lines `first..=last` (terminator of `last` kept) with `lines`
/// and selects the new block.
fn replace_lines(
    buffer: &mut TextBuffer,
    first: usize,
    last: usize,
    lines: &[String],
) -> Result<DirtyLines, BufferError> {
    let start = buffer.line_start_offset(first)?;
    let end = buffer.line_content_end_offset(last)?;
    let replacement = lines.join("\n");

    let dirty = buffer.replace_range(start, end, &replacement)?;
    buffer.select(start, start + replacement.chars().count())?;
    Ok(dirty)
}

fn collect_lines(buffer: &TextBuffer, first: usize, last: usize) -> Result<Vec<String>, BufferError> {
    (first..=last).map(|line| buffer.line_text(line)).collect()
}

/// Sorts the selected lines with `collator`; descending is the exact reverse
/// of ascending.
pub fn sort_lines(
    buffer: &mut TextBuffer,
    ascending: bool,
    collator: &impl Collator,
) -> Result<DirtyLines, BufferError> {
    let (first, last) = selected_line_range(buffer)?;
    let mut lines = collect_lines(buffer, first, last)?;

    lines.sort_by(|a, b| collator.compare(a, b));
    if !ascending {
        lines.reverse();
    }

    debug!(first, last, ascending, "sorting lines");
    replace_lines(buffer, first, last, &lines)
}

/// Drops repeated selected lines, keeping each first occurrence in place.
pub fn deduplicate_lines(buffer: &mut TextBuffer) -> Result<DirtyLines, BufferError> {
    let (first, last) = selected_line_range(buffer)?;
    let lines = collect_lines(buffer, first, last)?;

    let mut seen = HashSet::with_capacity(lines.len());
    let unique: Vec<String> = lines
        .into_iter()
        .filter(|line| seen.insert(line.clone()))
        .collect();

    debug!(first, last, kept = unique.len(), "deduplicating lines");
    replace_lines(buffer, first, last, &unique)
}

/// Joins every line of the document with single spaces, ignoring the
/// selection.
pub fn join_lines(buffer: &mut TextBuffer) -> DirtyLines {
    let joined = buffer.lines().collect::<Vec<_>>().join(" ");
    buffer.set_text(&joined)
}

// ==================== Statistics ====================

/// Mean of the numbers found in a document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Average {
    pub mean: f64,
    /// How many tokens parsed as numbers.
    pub count: usize,
}

/// Averages every whitespace-separated token that parses as a number.
///
/// Other tokens are skipped. `NaN` and `Infinity` count, so they carry into
/// the mean. `None` when nothing parsed.
pub fn compute_average(buffer: &TextBuffer) -> Option<Average> {
    let text = buffer.text();
    let numbers: Vec<f64> = text.split_whitespace().filter_map(parse_number).collect();

    if numbers.is_empty() {
        return None;
    }
    let count = numbers.len();
    Some(Average {
        mean: numbers.iter().sum::<f64>() / count as f64,
        count,
    })
}

/// Decimal literals plus the spelled-out `NaN`, `Infinity`, `+Infinity` and
/// `-Infinity`. Shorthands like `inf` or `nan` are not numbers here.
fn parse_number(token: &str) -> Option<f64> {
    match token {
        "NaN" => Some(f64::NAN),
        "Infinity" | "+Infinity" => Some(f64::INFINITY),
        "-Infinity" => Some(f64::NEG_INFINITY),
        _ if token.chars().any(|c| c.is_alphabetic() && c != 'e' && c != 'E') => None,
        _ => token.parse().ok(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterCounts {
    /// Every character, newlines included.
    pub with_spaces: usize,
    /// Characters that are not whitespace.
    pub without_spaces: usize,
    pub lines: usize,
}

pub fn character_counts(buffer: &TextBuffer) -> CharacterCounts {
    let without_spaces = buffer
        .text()
        .chars()
        .filter(|c| !c.is_whitespace())
        .count();
    CharacterCounts {
        with_spaces: buffer.len(),
        without_spaces,
        lines: buffer.line_count(),
    }
}

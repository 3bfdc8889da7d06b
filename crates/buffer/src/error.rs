use thiserror::Error;

/// Errors raised by [`TextBuffer`](crate::TextBuffer) accessors and edits.
///
/// Offsets and lines are never clamped silently: a bad argument always comes
/// back as one of these so selection arithmetic cannot drift.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError {
    #[error("offset {offset} is outside the buffer (length {len})")]
    OffsetOutOfRange { offset: usize, len: usize },

    #[error("line {line} is outside the buffer ({line_count} lines)")]
    LineOutOfRange { line: usize, line_count: usize },

    #[error("range start {start} is after range end {end}")]
    InvalidRange { start: usize, end: usize },
}

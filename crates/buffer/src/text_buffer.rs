// Chunk: docs/chunks/text_buffer - Gap buffer backing store for documents
// Chunk: docs/chunks/text_selection_model - Caret/anchor selection over char offsets

//! TextBuffer is the public API for document text.
//!
//! It pairs a gap buffer (storage) with a line index (line lookups) and keeps
//! the selection as two absolute character offsets: the caret, which is the
//! active end, and the anchor. `caret == anchor` means nothing is selected.
//!
//! Every mutation reports the [`DirtyLines`] it touched.

use std::borrow::Cow;

use tracing::debug;

use crate::error::BufferError;
use crate::gap_buffer::GapBuffer;
use crate::line_index::LineIndex;
use crate::types::{DirtyLines, Position};

/// A document buffer with caret/anchor selection.
///
/// Offsets count Unicode scalar values. Lines are separated by `'\n'`;
/// carriage returns are normalized away on the way in.
#[derive(Debug)]
pub struct TextBuffer {
    buffer: GapBuffer,
    line_index: LineIndex,
    caret: usize,
    anchor: usize,
    /// Mutation counter for sampling debug assertions (debug builds only).
    #[cfg(debug_assertions)]
    debug_mutation_count: u64,
}

/// Converts `"\r\n"` and lone `'\r'` to `'\n'`.
fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

impl TextBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self {
            buffer: GapBuffer::new(),
            line_index: LineIndex::new(),
            caret: 0,
            anchor: 0,
            #[cfg(debug_assertions)]
            debug_mutation_count: 0,
        }
    }

    /// Creates a buffer holding `content`, caret at the start.
    ///
    /// Not `FromStr`: building a buffer from text cannot fail.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Self {
        let mut buf = Self::new();
        buf.set_text(content);
        buf
    }

    // ==================== Accessors ====================

    /// Total length in characters, newlines included.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Full content, lines joined by `'\n'`.
    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    /// Number of lines. Always at least 1; a trailing newline opens one more.
    pub fn line_count(&self) -> usize {
        self.line_index.line_count()
    }

    fn check_offset(&self, offset: usize) -> Result<(), BufferError> {
        if offset > self.len() {
            return Err(BufferError::OffsetOutOfRange {
                offset,
                len: self.len(),
            });
        }
        Ok(())
    }

    fn check_line(&self, line: usize) -> Result<(), BufferError> {
        if line >= self.line_count() {
            return Err(BufferError::LineOutOfRange {
                line,
                line_count: self.line_count(),
            });
        }
        Ok(())
    }

    /// Content of a line that is known to exist, without its newline.
    fn line_content(&self, line: usize) -> String {
        let total_len = self.len();
        match (
            self.line_index.line_start(line),
            self.line_index.line_content_end(line, total_len),
        ) {
            (Some(start), Some(end)) => self.buffer.slice(start, end),
            _ => String::new(),
        }
    }

    /// Text of line `line` without its terminator.
    pub fn line_text(&self, line: usize) -> Result<String, BufferError> {
        self.check_line(line)?;
        Ok(self.line_content(line))
    }

    /// Length of line `line` in characters, terminator excluded.
    pub fn line_len(&self, line: usize) -> Result<usize, BufferError> {
        self.check_line(line)?;
        Ok(self.line_index.line_len(line, self.len()).unwrap_or(0))
    }

    /// Line containing `offset`. `offset == len()` is valid and maps to the
    /// last line.
    pub fn line_of_offset(&self, offset: usize) -> Result<usize, BufferError> {
        self.check_offset(offset)?;
        Ok(self.line_index.line_at_offset(offset))
    }

    /// Offset of the first character of `line`.
    pub fn line_start_offset(&self, line: usize) -> Result<usize, BufferError> {
        self.check_line(line)?;
        Ok(self.line_index.line_start(line).unwrap_or(0))
    }

    /// Offset just past `line`, including its `'\n'` unless it is the last line.
    pub fn line_end_offset(&self, line: usize) -> Result<usize, BufferError> {
        self.check_line(line)?;
        Ok(self.line_index.line_end(line, self.len()).unwrap_or(self.len()))
    }

    /// Offset just past the content of `line`, before any `'\n'`.
    pub fn line_content_end_offset(&self, line: usize) -> Result<usize, BufferError> {
        self.check_line(line)?;
        Ok(self
            .line_index
            .line_content_end(line, self.len())
            .unwrap_or(self.len()))
    }

    /// Converts an offset to (line, column).
    pub fn position_of_offset(&self, offset: usize) -> Result<Position, BufferError> {
        let line = self.line_of_offset(offset)?;
        let start = self.line_index.line_start(line).unwrap_or(0);
        Ok(Position::new(line, offset - start))
    }

    /// Converts (line, column) to an offset. The column may sit at the end of
    /// the line but not past it.
    pub fn offset_of_position(&self, pos: Position) -> Result<usize, BufferError> {
        let start = self.line_start_offset(pos.line)?;
        let len = self.line_len(pos.line)?;
        if pos.col > len {
            return Err(BufferError::OffsetOutOfRange {
                offset: start + pos.col,
                len: self.len(),
            });
        }
        Ok(start + pos.col)
    }

    /// Iterates line texts from line 0 to the last line.
    ///
    /// Each call starts a fresh pass; the iterator holds nothing but its cursor.
    pub fn lines(&self) -> Lines<'_> {
        Lines {
            buffer: self,
            next: 0,
            end: self.line_count(),
        }
    }

    // ==================== Selection ====================

    /// The active end of the selection.
    pub fn caret(&self) -> usize {
        self.caret
    }

    /// The fixed end of the selection.
    pub fn anchor(&self) -> usize {
        self.anchor
    }

    /// Selection as `(start, end)` in document order. Empty when
    /// `start == end`.
    pub fn selection(&self) -> (usize, usize) {
        (self.caret.min(self.anchor), self.caret.max(self.anchor))
    }

    pub fn has_selection(&self) -> bool {
        self.caret != self.anchor
    }

    /// Selected text, or `None` when the selection is empty.
    pub fn selected_text(&self) -> Option<String> {
        if !self.has_selection() {
            return None;
        }
        let (start, end) = self.selection();
        Some(self.buffer.slice(start, end))
    }

    /// Sets both ends of the selection. The caret is the active end.
    pub fn select(&mut self, anchor: usize, caret: usize) -> Result<(), BufferError> {
        self.check_offset(anchor)?;
        self.check_offset(caret)?;
        self.anchor = anchor;
        self.caret = caret;
        Ok(())
    }

    /// Moves the caret and collapses the selection onto it.
    pub fn set_caret(&mut self, offset: usize) -> Result<(), BufferError> {
        self.select(offset, offset)
    }

    /// Selects the whole buffer, anchor at the start and caret at the end.
    pub fn select_all(&mut self) {
        self.anchor = 0;
        self.caret = self.len();
    }

    // ==================== Validation ====================

    /// Debug assertion: the incrementally maintained line index must match a
    /// fresh rebuild. Sampled every 64th mutation; compiled out in release.
    #[cfg(debug_assertions)]
    fn assert_line_index_consistent(&mut self) {
        self.debug_mutation_count += 1;
        if self.debug_mutation_count % 64 != 0 {
            return;
        }
        let mut expected = LineIndex::new();
        expected.rebuild(self.buffer.chars());
        assert_eq!(
            self.line_index.line_starts(),
            expected.line_starts(),
            "line_index drift detected after {} mutations",
            self.debug_mutation_count,
        );
    }

    #[cfg(not(debug_assertions))]
    fn assert_line_index_consistent(&mut self) {}

    // ==================== Mutations ====================

    /// Replaces the whole content and resets caret and anchor to 0.
    ///
    /// Dirty tracking is the caller's concern.
    pub fn set_text(&mut self, text: &str) -> DirtyLines {
        let text = normalize_newlines(text);
        self.buffer.set(&text);
        self.line_index.rebuild(text.chars());
        self.caret = 0;
        self.anchor = 0;
        debug!(
            chars = self.len(),
            lines = self.line_count(),
            "buffer content replaced"
        );
        DirtyLines::FromLineToEnd(0)
    }

    /// Removes `[start, end)` and inserts `replacement` at `start`.
    ///
    /// Caret and anchor keep their absolute values, clamped into the new
    /// length; callers reselect what they need afterwards.
    pub fn replace_range(
        &mut self,
        start: usize,
        end: usize,
        replacement: &str,
    ) -> Result<DirtyLines, BufferError> {
        if start > end {
            return Err(BufferError::InvalidRange { start, end });
        }
        self.check_offset(end)?;
        Ok(self.splice(start, end, replacement))
    }

    /// Range replacement on an already validated range.
    fn splice(&mut self, start: usize, end: usize, replacement: &str) -> DirtyLines {
        let replacement = normalize_newlines(replacement);
        if start == end && replacement.is_empty() {
            return DirtyLines::None;
        }

        let start_line = self.line_index.line_at_offset(start);
        let spans_lines = self.line_index.line_at_offset(end) != start_line;

        self.buffer.replace_range(start, end, &replacement);
        self.line_index.replace(start, end, &replacement);

        let len = self.len();
        self.caret = self.caret.min(len);
        self.anchor = self.anchor.min(len);

        self.assert_line_index_consistent();

        if spans_lines || replacement.contains('\n') {
            DirtyLines::FromLineToEnd(start_line)
        } else {
            DirtyLines::Single(start_line)
        }
    }

    /// Inserts `s` at the caret, replacing the selection if there is one.
    /// The caret ends up after the inserted text with nothing selected.
    pub fn insert_str(&mut self, s: &str) -> DirtyLines {
        let (start, end) = self.selection();
        let inserted = normalize_newlines(s).chars().count();
        let dirty = self.splice(start, end, s);
        self.caret = start + inserted;
        self.anchor = self.caret;
        dirty
    }

    /// Backspace: deletes the selection, or the character before the caret.
    pub fn delete_backward(&mut self) -> DirtyLines {
        let (start, end) = self.selection();
        let (start, end) = if start != end {
            (start, end)
        } else if start == 0 {
            return DirtyLines::None;
        } else {
            (start - 1, start)
        };

        let dirty = self.splice(start, end, "");
        self.caret = start;
        self.anchor = start;
        dirty
    }

    /// Delete key: deletes the selection, or the character after the caret.
    pub fn delete_forward(&mut self) -> DirtyLines {
        let (start, end) = self.selection();
        let (start, end) = if start != end {
            (start, end)
        } else if end >= self.len() {
            return DirtyLines::None;
        } else {
            (start, start + 1)
        };

        let dirty = self.splice(start, end, "");
        self.caret = start;
        self.anchor = start;
        dirty
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator returned by [`TextBuffer::lines`].
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    buffer: &'a TextBuffer,
    next: usize,
    end: usize,
}

impl Iterator for Lines<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.next >= self.end {
            return None;
        }
        let line = self.buffer.line_content(self.next);
        self.next += 1;
        Some(line)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Lines<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Basic Tests ====================

    #[test]
    fn test_new_empty() {
        let buf = TextBuffer::new();
        assert!(buf.is_empty());
        assert_eq!(buf.line_count(), 1);
        assert_eq!(buf.line_text(0), Ok(String::new()));
    }

    #[test]
    fn test_from_str_multiline() {
        let buf = TextBuffer::from_str("hello\nworld");
        assert_eq!(buf.len(), 11);
        assert_eq!(buf.line_count(), 2);
        assert_eq!(buf.text(), "hello\nworld");
    }

    #[test]
    fn test_trailing_newline_counts_as_line() {
        let buf = TextBuffer::from_str("a\nb\n");
        assert_eq!(buf.line_count(), 3);
        assert_eq!(buf.line_text(2), Ok(String::new()));
    }

    #[test]
    fn test_crlf_is_normalized() {
        let buf = TextBuffer::from_str("one\r\ntwo\rthree");
        assert_eq!(buf.text(), "one\ntwo\nthree");
        assert_eq!(buf.line_count(), 3);
    }

    #[test]
    fn test_set_text_resets_selection() {
        let mut buf = TextBuffer::from_str("hello");
        buf.select(1, 4).unwrap();
        let dirty = buf.set_text("bye");
        assert_eq!(dirty, DirtyLines::FromLineToEnd(0));
        assert_eq!((buf.anchor(), buf.caret()), (0, 0));
        assert_eq!(buf.text(), "bye");
    }

    // ==================== Line Lookup Tests ====================

    #[test]
    fn test_line_text_out_of_range() {
        let buf = TextBuffer::from_str("a\nb");
        assert_eq!(
            buf.line_text(2),
            Err(BufferError::LineOutOfRange {
                line: 2,
                line_count: 2
            })
        );
    }

    #[test]
    fn test_line_offsets() {
        let buf = TextBuffer::from_str("ab\ncde\nf");
        assert_eq!(buf.line_start_offset(1), Ok(3));
        assert_eq!(buf.line_end_offset(1), Ok(7)); // includes '\n'
        assert_eq!(buf.line_content_end_offset(1), Ok(6));
        assert_eq!(buf.line_end_offset(2), Ok(8)); // last line: no terminator
        assert!(buf.line_start_offset(3).is_err());
    }

    #[test]
    fn test_line_of_offset_bounds() {
        let buf = TextBuffer::from_str("ab\ncd");
        assert_eq!(buf.line_of_offset(0), Ok(0));
        assert_eq!(buf.line_of_offset(2), Ok(0));
        assert_eq!(buf.line_of_offset(3), Ok(1));
        assert_eq!(buf.line_of_offset(5), Ok(1));
        assert_eq!(
            buf.line_of_offset(6),
            Err(BufferError::OffsetOutOfRange { offset: 6, len: 5 })
        );
    }

    #[test]
    fn test_position_round_trip() {
        let buf = TextBuffer::from_str("hello\nworld");
        let pos = buf.position_of_offset(8).unwrap();
        assert_eq!(pos, Position::new(1, 2));
        assert_eq!(buf.offset_of_position(pos), Ok(8));
        assert!(buf.offset_of_position(Position::new(0, 6)).is_err());
    }

    #[test]
    fn test_lines_is_restartable() {
        let buf = TextBuffer::from_str("x\ny\nz");
        let first: Vec<String> = buf.lines().collect();
        let second: Vec<String> = buf.lines().collect();
        assert_eq!(first, vec!["x", "y", "z"]);
        assert_eq!(first, second);
        assert_eq!(buf.lines().len(), 3);
    }

    // ==================== Selection Tests ====================

    #[test]
    fn test_selection_is_document_ordered() {
        let mut buf = TextBuffer::from_str("hello");
        buf.select(4, 1).unwrap();
        assert_eq!(buf.selection(), (1, 4));
        assert_eq!(buf.caret(), 1);
        assert_eq!(buf.anchor(), 4);
        assert_eq!(buf.selected_text(), Some("ell".to_string()));
    }

    #[test]
    fn test_empty_selection() {
        let mut buf = TextBuffer::from_str("hello");
        buf.set_caret(3).unwrap();
        assert!(!buf.has_selection());
        assert_eq!(buf.selected_text(), None);
    }

    #[test]
    fn test_select_rejects_out_of_range() {
        let mut buf = TextBuffer::from_str("hi");
        assert_eq!(
            buf.select(0, 3),
            Err(BufferError::OffsetOutOfRange { offset: 3, len: 2 })
        );
        // Selection unchanged after a rejected call.
        assert_eq!((buf.anchor(), buf.caret()), (0, 0));
    }

    #[test]
    fn test_select_all_multiline() {
        let mut buf = TextBuffer::from_str("hello\nworld\ntest");
        buf.select_all();
        assert_eq!(buf.selection(), (0, 16));
        assert_eq!(buf.selected_text(), Some("hello\nworld\ntest".to_string()));
    }

    // ==================== Replace Range Tests ====================

    #[test]
    fn test_replace_range_within_line() {
        let mut buf = TextBuffer::from_str("hello world");
        let dirty = buf.replace_range(6, 11, "there").unwrap();
        assert_eq!(buf.text(), "hello there");
        assert_eq!(dirty, DirtyLines::Single(0));
    }

    #[test]
    fn test_replace_range_joining_lines() {
        let mut buf = TextBuffer::from_str("one\ntwo\nthree");
        let dirty = buf.replace_range(3, 8, " ").unwrap();
        assert_eq!(buf.text(), "one three");
        assert_eq!(buf.line_count(), 1);
        assert_eq!(dirty, DirtyLines::FromLineToEnd(0));
    }

    #[test]
    fn test_replace_range_splitting_lines() {
        let mut buf = TextBuffer::from_str("ab\ncd");
        let dirty = buf.replace_range(4, 4, "\n").unwrap();
        assert_eq!(buf.text(), "ab\nc\nd");
        assert_eq!(dirty, DirtyLines::FromLineToEnd(1));
        assert_eq!(buf.line_text(2), Ok("d".to_string()));
    }

    #[test]
    fn test_replace_range_noop() {
        let mut buf = TextBuffer::from_str("abc");
        assert_eq!(buf.replace_range(1, 1, ""), Ok(DirtyLines::None));
    }

    #[test]
    fn test_replace_range_rejects_bad_ranges() {
        let mut buf = TextBuffer::from_str("abc");
        assert_eq!(
            buf.replace_range(2, 1, "x"),
            Err(BufferError::InvalidRange { start: 2, end: 1 })
        );
        assert_eq!(
            buf.replace_range(1, 9, "x"),
            Err(BufferError::OffsetOutOfRange { offset: 9, len: 3 })
        );
        assert_eq!(buf.text(), "abc");
    }

    #[test]
    fn test_replace_range_clamps_stale_caret() {
        let mut buf = TextBuffer::from_str("hello world");
        buf.select(0, 11).unwrap();
        buf.replace_range(5, 11, "").unwrap();
        assert_eq!(buf.caret(), 5);
        assert_eq!(buf.anchor(), 0);
    }

    // ==================== Caret Editing Tests ====================

    #[test]
    fn test_insert_str_replaces_selection() {
        let mut buf = TextBuffer::from_str("hello world");
        buf.select(6, 11).unwrap();
        buf.insert_str("universe");
        assert_eq!(buf.text(), "hello universe");
        assert_eq!(buf.caret(), 14);
        assert!(!buf.has_selection());
    }

    #[test]
    fn test_delete_backward_joins_lines() {
        let mut buf = TextBuffer::from_str("hello\nworld");
        buf.set_caret(6).unwrap();
        let dirty = buf.delete_backward();
        assert_eq!(buf.text(), "helloworld");
        assert_eq!(buf.caret(), 5);
        assert_eq!(dirty, DirtyLines::FromLineToEnd(0));
    }

    #[test]
    fn test_delete_backward_at_start() {
        let mut buf = TextBuffer::from_str("hello");
        assert_eq!(buf.delete_backward(), DirtyLines::None);
        assert_eq!(buf.text(), "hello");
    }

    #[test]
    fn test_delete_forward_with_selection_deletes_only_selection() {
        let mut buf = TextBuffer::from_str("hello");
        buf.select(1, 4).unwrap();
        buf.delete_forward();
        assert_eq!(buf.text(), "ho");
        assert_eq!(buf.caret(), 1);
    }

    #[test]
    fn test_delete_forward_at_end() {
        let mut buf = TextBuffer::from_str("hi");
        buf.set_caret(2).unwrap();
        assert_eq!(buf.delete_forward(), DirtyLines::None);
    }
}

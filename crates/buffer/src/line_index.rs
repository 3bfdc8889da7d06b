// Chunk: docs/chunks/text_buffer - Gap buffer backing store for documents

//! Line start offsets for the text buffer.
//!
//! Keeps one entry per line so line count is O(1) and offset-to-line lookup is
//! a binary search. Range replacements update the table incrementally.

/// Character offsets where each line begins. `line_starts[0]` is always 0.
#[derive(Debug, Clone)]
pub struct LineIndex {
    line_starts: Vec<usize>,
}

impl LineIndex {
    /// Creates an index describing a single empty line.
    pub fn new() -> Self {
        Self {
            line_starts: vec![0],
        }
    }

    /// Rebuilds the index from scratch. O(n) in the content length.
    pub fn rebuild<I>(&mut self, content: I)
    where
        I: IntoIterator<Item = char>,
    {
        self.line_starts.clear();
        self.line_starts.push(0);

        let mut offset = 0;
        for ch in content {
            offset += 1;
            if ch == '\n' {
                self.line_starts.push(offset);
            }
        }
    }

    /// Number of lines; at least 1. A trailing newline opens one more (empty) line.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }

    /// Offset just past the line's content, before its `'\n'`.
    ///
    /// For the last line this is `total_len`.
    pub fn line_content_end(&self, line: usize, total_len: usize) -> Option<usize> {
        if line >= self.line_count() {
            return None;
        }
        match self.line_starts.get(line + 1) {
            Some(next) => Some(next - 1),
            None => Some(total_len),
        }
    }

    /// Offset just past the line including its terminator.
    ///
    /// Equal to the start of the next line, or `total_len` for the last line.
    pub fn line_end(&self, line: usize, total_len: usize) -> Option<usize> {
        if line >= self.line_count() {
            return None;
        }
        Some(self.line_starts.get(line + 1).copied().unwrap_or(total_len))
    }

    /// Length of the line's content, excluding the newline.
    pub fn line_len(&self, line: usize, total_len: usize) -> Option<usize> {
        let start = self.line_start(line)?;
        let end = self.line_content_end(line, total_len)?;
        Some(end - start)
    }

    /// Line containing `offset`. An offset sitting on a `'\n'` belongs to the
    /// line that newline terminates.
    pub fn line_at_offset(&self, offset: usize) -> usize {
        match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(line) => line.saturating_sub(1),
        }
    }

    /// Updates the index after `[start, end)` was replaced by `inserted`.
    ///
    /// Line starts that fell inside the removed range are dropped, those after
    /// it are shifted by the length delta, and every newline in `inserted`
    /// contributes a new line start.
    pub fn replace(&mut self, start: usize, end: usize, inserted: &str) {
        let inserted_len = inserted.chars().count();

        // Entries in (start, end] were opened by newlines inside the removed text.
        let first_removed = self.line_starts.partition_point(|&s| s <= start);
        let first_kept = self.line_starts.partition_point(|&s| s <= end);

        for s in &mut self.line_starts[first_kept..] {
            *s = *s - (end - start) + inserted_len;
        }

        let new_starts = inserted
            .chars()
            .enumerate()
            .filter(|&(_, ch)| ch == '\n')
            .map(|(i, _)| start + i + 1);
        self.line_starts.splice(first_removed..first_kept, new_starts);
    }

    #[cfg(any(debug_assertions, test))]
    pub fn line_starts(&self) -> &[usize] {
        &self.line_starts
    }
}

impl Default for LineIndex {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index_of(text: &str) -> LineIndex {
        let mut index = LineIndex::new();
        index.rebuild(text.chars());
        index
    }

    #[test]
    fn test_empty_text_has_one_line() {
        let index = index_of("");
        assert_eq!(index.line_count(), 1);
        assert_eq!(index.line_start(0), Some(0));
    }

    #[test]
    fn test_trailing_newline_opens_empty_line() {
        let index = index_of("hello\nworld\n");
        assert_eq!(index.line_starts(), &[0, 6, 12]);
        assert_eq!(index.line_len(2, 12), Some(0));
    }

    #[test]
    fn test_line_end_includes_terminator() {
        let index = index_of("hello\nworld");
        assert_eq!(index.line_content_end(0, 11), Some(5));
        assert_eq!(index.line_end(0, 11), Some(6));
        assert_eq!(index.line_end(1, 11), Some(11));
        assert_eq!(index.line_end(2, 11), None);
    }

    #[test]
    fn test_line_at_offset() {
        let index = index_of("hello\nworld\nfoo");
        assert_eq!(index.line_at_offset(0), 0);
        assert_eq!(index.line_at_offset(5), 0); // the '\n'
        assert_eq!(index.line_at_offset(6), 1);
        assert_eq!(index.line_at_offset(12), 2);
        assert_eq!(index.line_at_offset(15), 2);
    }

    #[test]
    fn test_replace_inserting_newlines() {
        let mut index = index_of("ab\ncd");
        // "ab\ncd" -> "a1\n2\n3b\ncd"
        index.replace(1, 1, "1\n2\n3");
        assert_eq!(index.line_starts(), &[0, 3, 5, 8]);
    }

    #[test]
    fn test_replace_removing_newlines() {
        let mut index = index_of("one\ntwo\nthree\nfour");
        // Remove "two\nthree\n" leaving "one\nfour"
        index.replace(4, 14, "");
        assert_eq!(index.line_starts(), &[0, 4]);
    }

    #[test]
    fn test_replace_matches_rebuild() {
        let before = "alpha\nbeta\ngamma\ndelta";
        let mut index = index_of(before);
        index.replace(6, 16, "x\ny\nz");

        let after = "alpha\nx\ny\nz\ndelta";
        assert_eq!(index.line_starts(), index_of(after).line_starts());
    }
}

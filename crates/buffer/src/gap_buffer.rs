// Chunk: docs/chunks/text_buffer - Gap buffer backing store for documents

//! Gap buffer storage for document text.
//!
//! Characters live in a `Vec<char>` with a movable gap. Edits at the gap are
//! O(1); moving the gap costs the distance moved, which stays small for the
//! localized edits an editor produces (typing, replacing a selection, swapping
//! a block of lines).

const INITIAL_GAP_SIZE: usize = 64;
const GAP_GROWTH_FACTOR: usize = 2;

/// Character storage with a movable gap.
///
/// Layout is `[pre-gap content | gap | post-gap content]`. All positions in the
/// public API are logical character offsets that ignore the gap.
#[derive(Debug)]
pub struct GapBuffer {
    data: Vec<char>,
    /// First unused slot.
    gap_start: usize,
    /// First used slot after the gap.
    gap_end: usize,
}

impl GapBuffer {
    /// Creates an empty gap buffer.
    pub fn new() -> Self {
        Self {
            data: vec!['\0'; INITIAL_GAP_SIZE],
            gap_start: 0,
            gap_end: INITIAL_GAP_SIZE,
        }
    }

    /// Creates a gap buffer holding `text`, with the gap at the end.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(text: &str) -> Self {
        let mut data: Vec<char> = text.chars().collect();
        let len = data.len();
        let capacity = len + INITIAL_GAP_SIZE;
        data.resize(capacity, '\0');

        Self {
            data,
            gap_start: len,
            gap_end: capacity,
        }
    }

    /// Logical length in characters.
    pub fn len(&self) -> usize {
        self.data.len() - self.gap_len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn gap_len(&self) -> usize {
        self.gap_end - self.gap_start
    }

    #[cfg(test)]
    fn gap_position(&self) -> usize {
        self.gap_start
    }

    /// Moves the gap so it starts at logical position `pos` (clamped to `len`).
    pub fn move_gap_to(&mut self, pos: usize) {
        let pos = pos.min(self.len());

        if pos < self.gap_start {
            let shift = self.gap_start - pos;
            self.data.copy_within(pos..self.gap_start, self.gap_end - shift);
            self.gap_start = pos;
            self.gap_end -= shift;
        } else if pos > self.gap_start {
            let shift = pos - self.gap_start;
            self.data
                .copy_within(self.gap_end..self.gap_end + shift, self.gap_start);
            self.gap_start += shift;
            self.gap_end += shift;
        }
    }

    /// Grows the gap in place to hold at least `min_size` characters.
    ///
    /// The gap start does not move: `insert` relies on the gap staying where
    /// `move_gap_to` put it.
    fn ensure_gap(&mut self, min_size: usize) {
        if self.gap_len() >= min_size {
            return;
        }

        let needed = min_size - self.gap_len();
        let growth = needed.max(self.data.len() * GAP_GROWTH_FACTOR);

        let old_gap_end = self.gap_end;
        let old_len = self.data.len();
        let post_gap_len = old_len - old_gap_end;

        let new_size = old_len + growth;
        self.data.resize(new_size, '\0');
        if post_gap_len > 0 {
            self.data
                .copy_within(old_gap_end..old_len, new_size - post_gap_len);
        }
        self.gap_end = new_size - post_gap_len;
    }

    /// Inserts a string at the gap, leaving the gap after it.
    fn insert_str(&mut self, s: &str) {
        self.ensure_gap(s.chars().count());
        for ch in s.chars() {
            self.data[self.gap_start] = ch;
            self.gap_start += 1;
        }
    }

    /// Replaces the logical range `[start, end)` with `replacement`.
    ///
    /// Both bounds are clamped to `len`; callers validate ranges beforehand.
    /// The gap ends up directly after the inserted text.
    pub fn replace_range(&mut self, start: usize, end: usize, replacement: &str) {
        let start = start.min(self.len());
        let end = end.clamp(start, self.len());

        self.move_gap_to(start);
        // Swallow the removed characters into the gap.
        self.gap_end += end - start;
        self.insert_str(replacement);
    }

    /// Clears the buffer and stores `text` instead.
    pub fn set(&mut self, text: &str) {
        *self = Self::from_str(text);
    }

    /// Iterates every character in logical order.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.data[..self.gap_start]
            .iter()
            .chain(self.data[self.gap_end..].iter())
            .copied()
    }

    /// Returns `[start, end)` as a `String`. Bounds are clamped to `len`.
    pub fn slice(&self, start: usize, end: usize) -> String {
        let start = start.min(self.len());
        let end = end.min(self.len());
        if start >= end {
            return String::new();
        }
        let pre = &self.data[..self.gap_start];
        let post = &self.data[self.gap_end..];

        let mut result = String::with_capacity(end - start);
        if start < pre.len() {
            result.extend(&pre[start..end.min(pre.len())]);
        }
        if end > pre.len() {
            let from = start.saturating_sub(pre.len());
            result.extend(&post[from..end - pre.len()]);
        }
        result
    }
}

impl Default for GapBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for GapBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for ch in self.chars() {
            write!(f, "{}", ch)?;
        }
        Ok(())
    }
}

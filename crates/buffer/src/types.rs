// Chunk: docs/chunks/text_buffer - Gap buffer backing store for documents

/// Position in the buffer as (line, column), both 0-indexed, column in chars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

/// Which lines a mutation touched.
///
/// Every buffer mutation reports one of these; it is the observable
/// "content changed" signal that dirty tracking and redraw hang off.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DirtyLines {
    /// Nothing changed.
    #[default]
    None,
    /// Only one line changed.
    Single(usize),
    /// Lines `[from, to)` changed.
    Range { from: usize, to: usize },
    /// Everything from the line to the end of the buffer changed
    /// (lines were split, joined, inserted or removed).
    FromLineToEnd(usize),
}

impl DirtyLines {
    pub fn is_none(&self) -> bool {
        matches!(self, DirtyLines::None)
    }

    pub fn start_line(&self) -> Option<usize> {
        match self {
            DirtyLines::None => None,
            DirtyLines::Single(line) => Some(*line),
            DirtyLines::Range { from, .. } => Some(*from),
            DirtyLines::FromLineToEnd(line) => Some(*line),
        }
    }

    /// Widens `self` to also cover `other`.
    pub fn merge(&mut self, other: DirtyLines) {
        *self = match (&*self, &other) {
            (DirtyLines::None, _) => other,
            (_, DirtyLines::None) => return,

            (DirtyLines::FromLineToEnd(a), DirtyLines::FromLineToEnd(b)) => {
                DirtyLines::FromLineToEnd((*a).min(*b))
            }
            (DirtyLines::FromLineToEnd(a), rest) | (rest, DirtyLines::FromLineToEnd(a)) => {
                let b = rest.start_line().unwrap_or(*a);
                DirtyLines::FromLineToEnd((*a).min(b))
            }

            (DirtyLines::Single(a), DirtyLines::Single(b)) if a == b => DirtyLines::Single(*a),
            (DirtyLines::Single(a), DirtyLines::Single(b)) => DirtyLines::Range {
                from: (*a).min(*b),
                to: (*a).max(*b) + 1,
            },

            (DirtyLines::Single(a), DirtyLines::Range { from, to })
            | (DirtyLines::Range { from, to }, DirtyLines::Single(a)) => DirtyLines::Range {
                from: (*from).min(*a),
                to: (*to).max(*a + 1),
            },

            (DirtyLines::Range { from: a, to: b }, DirtyLines::Range { from: c, to: d }) => {
                DirtyLines::Range {
                    from: (*a).min(*c),
                    to: (*b).max(*d),
                }
            }
        };
    }
}

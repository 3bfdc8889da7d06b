// Chunk: docs/chunks/text_buffer - Gap buffer backing store for documents
// Chunk: docs/chunks/text_selection_model - Caret/anchor selection over char offsets

//! lite-pad-buffer: the document buffer behind every lite-pad tab.
//!
//! The main type is [`TextBuffer`], which provides:
//! - Whole-document and range replacement
//! - Line lookups (line of offset, line start/end offsets, line text)
//! - A caret/anchor selection expressed as absolute character offsets
//!
//! # Example
//!
//! ```
//! use lite_pad_buffer::{DirtyLines, TextBuffer};
//!
//! let mut buffer = TextBuffer::from_str("banana\napple");
//! assert_eq!(buffer.line_count(), 2);
//! assert_eq!(buffer.line_text(1).unwrap(), "apple");
//!
//! let dirty = buffer.replace_range(0, 6, "cherry").unwrap();
//! assert_eq!(dirty, DirtyLines::Single(0));
//! assert_eq!(buffer.text(), "cherry\napple");
//! ```
//!
//! # Errors
//!
//! Line and offset arguments are validated, never clamped: anything outside
//! the buffer comes back as a [`BufferError`].
//!
//! # Dirty Line Tracking
//!
//! Each mutation returns a [`DirtyLines`] value naming the lines it touched:
//!
//! - `DirtyLines::None` - nothing changed
//! - `DirtyLines::Single(line)` - one line changed in place
//! - `DirtyLines::FromLineToEnd(line)` - lines were split, joined, added or removed

mod error;
mod gap_buffer;
mod line_index;
mod text_buffer;
mod types;

pub use error::BufferError;
pub use text_buffer::{Lines, TextBuffer};
pub use types::{DirtyLines, Position};

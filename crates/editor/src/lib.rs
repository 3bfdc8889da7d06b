// Chunk: docs/chunks/document_model - Documents, dirty tracking and tabs
//!
//! Editing core for lite-pad: text commands over a [`TextBuffer`], documents
//! with save state, tabs, and the status line.
//!
//! Rendering and input handling live outside this crate. Everything here is
//! plain data and functions a front end calls into.

pub mod clock;
pub mod collator;
pub mod commands;
mod dirty_tracker;
mod document;
mod error;
pub mod status;
pub mod workspace;

pub use clock::Clock;
pub use collator::{Collator, LocaleCollator, OrdinalCollator};
pub use commands::{Average, CharacterCounts};
pub use dirty_tracker::DocumentDirtyTracker;
pub use document::Document;
pub use error::EditorError;
pub use status::{CaretStatus, CommandAvailability};
pub use workspace::{CloseOutcome, Tab, TabId, Workspace};

pub use lite_pad_buffer::{BufferError, DirtyLines, Position, TextBuffer};
pub use lite_pad_i18n as i18n;

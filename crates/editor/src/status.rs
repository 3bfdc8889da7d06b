// Chunk: docs/chunks/status_line - Caret status and clock

//! Caret-derived status information and command availability.
//!
//! Both are pure snapshots of a buffer. A UI recomputes them whenever the
//! caret moves; nothing here mutates the buffer.

use lite_pad_buffer::{BufferError, TextBuffer};
use lite_pad_i18n::{I18nError, LocalizationProvider};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaretStatus {
    /// Document length in characters.
    pub length: usize,
    /// Caret line, 1-based.
    pub line: usize,
    /// Caret column, 0-based.
    pub column: usize,
    /// Selected characters.
    pub selection: usize,
    /// Caret offset.
    pub offset: usize,
}

impl CaretStatus {
    pub fn of(buffer: &TextBuffer) -> Result<Self, BufferError> {
        let caret = buffer.caret();
        let position = buffer.position_of_offset(caret)?;
        Ok(Self {
            length: buffer.len(),
            line: position.line + 1,
            column: position.col,
            selection: caret.abs_diff(buffer.anchor()),
            offset: caret,
        })
    }

    /// `"Length: 12  Ln: 2  Col: 3  Sel: 0  Off: 9"` in the current language.
    pub fn render(&self, provider: &dyn LocalizationProvider) -> Result<String, I18nError> {
        let fields = [
            ("length", self.length),
            ("ln", self.line),
            ("col", self.column),
            ("sel", self.selection),
            ("off", self.offset),
        ];
        let parts = fields
            .iter()
            .map(|(key, value)| Ok(format!("{}: {}", provider.get_string(key)?, value)))
            .collect::<Result<Vec<_>, I18nError>>()?;
        Ok(parts.join("  "))
    }
}

/// Which selection-dependent commands can run right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandAvailability {
    pub cut: bool,
    pub copy: bool,
    pub sort_ascending: bool,
    pub sort_descending: bool,
    pub unique: bool,
}

impl CommandAvailability {
    pub fn of(buffer: &TextBuffer) -> Self {
        let selected = buffer.has_selection();
        Self {
            cut: selected,
            copy: selected,
            sort_ascending: selected,
            sort_descending: selected,
            unique: selected,
        }
    }
}

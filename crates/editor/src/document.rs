// Chunk: docs/chunks/document_model - Documents, dirty tracking and tabs

//! A text buffer bound to an optional file, with save state.

use std::fs;
use std::path::{Path, PathBuf};

use lite_pad_buffer::{DirtyLines, TextBuffer};
use lite_pad_i18n::LocalizationProvider;
use tracing::{debug, info};

use crate::dirty_tracker::DocumentDirtyTracker;
use crate::EditorError;

/// Catalog key for documents that were never saved.
const UNTITLED_KEY: &str = "untitled";

#[derive(Debug, Default)]
pub struct Document {
    buffer: TextBuffer,
    tracker: DocumentDirtyTracker,
    path: Option<PathBuf>,
    /// Lines touched by `edit` since the last `take_changed_lines`.
    changed_lines: DirtyLines,
}

impl Document {
    /// An empty, clean, untitled document.
    pub fn new() -> Self {
        Self::default()
    }

    /// An untitled document holding `text`, considered saved.
    pub fn from_text(text: &str) -> Self {
        let buffer = TextBuffer::from_str(text);
        let tracker = DocumentDirtyTracker::new(buffer.text());
        Self {
            buffer,
            tracker,
            path: None,
            changed_lines: DirtyLines::None,
        }
    }

    /// Reads `path` as UTF-8.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, EditorError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| EditorError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let text = String::from_utf8(bytes).map_err(|_| EditorError::InvalidUtf8 {
            path: path.to_path_buf(),
        })?;

        let mut document = Self::from_text(&text);
        document.path = Some(path.to_path_buf());
        info!(path = %path.display(), lines = document.buffer.line_count(), "opened document");
        Ok(document)
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn is_dirty(&self) -> bool {
        self.tracker.is_dirty()
    }

    /// Runs `edit` against the buffer, then refreshes the dirty state.
    ///
    /// Every mutation goes through here so the tracker never misses one.
    pub fn apply<R>(&mut self, edit: impl FnOnce(&mut TextBuffer) -> R) -> R {
        let result = edit(&mut self.buffer);
        self.tracker.on_content_changed(&self.buffer.text());
        result
    }

    /// Like [`apply`](Self::apply) for commands that report the lines they
    /// touched; those lines accumulate until [`take_changed_lines`](Self::take_changed_lines).
    pub fn edit<E>(
        &mut self,
        command: impl FnOnce(&mut TextBuffer) -> Result<DirtyLines, E>,
    ) -> Result<DirtyLines, E> {
        let dirty = self.apply(command)?;
        self.changed_lines.merge(dirty.clone());
        Ok(dirty)
    }

    /// Lines changed since the previous call, for a front end to redraw.
    pub fn take_changed_lines(&mut self) -> DirtyLines {
        std::mem::take(&mut self.changed_lines)
    }

    /// Writes the buffer to its file.
    pub fn save(&mut self) -> Result<(), EditorError> {
        let path = self.path.clone().ok_or(EditorError::NoPath)?;
        self.write_to(&path)
    }

    /// Writes the buffer to `path` and binds the document to it.
    pub fn save_as(&mut self, path: impl Into<PathBuf>) -> Result<(), EditorError> {
        let path = path.into();
        self.write_to(&path)?;
        self.path = Some(path);
        Ok(())
    }

    /// Atomic write: temp file next to the target, then rename.
    fn write_to(&mut self, path: &Path) -> Result<(), EditorError> {
        let text = self.buffer.text();
        let temp_path = path.with_extension("lite-pad.tmp");
        let io_error = |source| EditorError::Io {
            path: path.to_path_buf(),
            source,
        };
        let written = fs::write(&temp_path, &text).and_then(|()| fs::rename(&temp_path, path));
        if let Err(source) = written {
            let _ = fs::remove_file(&temp_path);
            return Err(io_error(source));
        }

        self.tracker.mark_saved(&text);
        debug!(path = %path.display(), chars = self.buffer.len(), "saved document");
        Ok(())
    }

    /// File name, or the localized "untitled" label.
    pub fn display_name(&self, provider: &dyn LocalizationProvider) -> Result<String, EditorError> {
        match self.path.as_deref().and_then(Path::file_name) {
            Some(name) => Ok(name.to_string_lossy().into_owned()),
            None => Ok(provider.get_string(UNTITLED_KEY)?),
        }
    }
}

// Chunk: docs/chunks/document_model - Documents, dirty tracking and tabs

/// Tracks whether a document differs from what was last saved.
///
/// Dirtiness is a plain comparison with the saved snapshot, so editing back
/// to exactly the saved text clears it again even though edits happened.
#[derive(Debug, Clone, Default)]
pub struct DocumentDirtyTracker {
    saved: String,
    dirty: bool,
}

impl DocumentDirtyTracker {
    /// A clean tracker whose snapshot is `saved`.
    pub fn new(saved: impl Into<String>) -> Self {
        Self {
            saved: saved.into(),
            dirty: false,
        }
    }

    pub fn on_content_changed(&mut self, current: &str) {
        self.dirty = current != self.saved;
    }

    pub fn mark_saved(&mut self, current: &str) {
        self.saved.clear();
        self.saved.push_str(current);
        self.dirty = false;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn saved_snapshot(&self) -> &str {
        &self.saved
    }
}

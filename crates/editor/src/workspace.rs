// Chunk: docs/chunks/document_model - Documents, dirty tracking and tabs
//!
//! Open documents as a row of tabs.
//!
//! Opening a file that is already open activates its tab instead of loading
//! it twice. Closing a tab with unsaved changes is refused unless forced, so
//! the caller can ask the user first.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::document::Document;
use crate::EditorError;

/// Unique identifier for a tab within a workspace.
pub type TabId = u64;

#[derive(Debug)]
pub struct Tab {
    pub id: TabId,
    pub document: Document,
}

/// Result of [`Workspace::close_tab`].
#[derive(Debug)]
pub enum CloseOutcome {
    Closed(Tab),
    /// Nothing was closed; the document must be saved or the close forced.
    HasUnsavedChanges,
}

#[derive(Debug, Default)]
pub struct Workspace {
    tabs: Vec<Tab>,
    /// Index of the currently active tab
    active_tab: usize,
    next_tab_id: TabId,
}

/// Canonical form of `path` for identity checks, or `path` itself if it
/// cannot be resolved.
fn identity(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

impl Workspace {
    /// A workspace with no tabs.
    pub fn new() -> Self {
        Self::default()
    }

    fn gen_tab_id(&mut self) -> TabId {
        let id = self.next_tab_id;
        self.next_tab_id += 1;
        id
    }

    fn add_tab(&mut self, document: Document) -> TabId {
        let id = self.gen_tab_id();
        self.tabs.push(Tab { id, document });
        self.active_tab = self.tabs.len() - 1;
        id
    }

    /// Adds an empty untitled tab and activates it.
    pub fn new_tab(&mut self) -> TabId {
        self.add_tab(Document::new())
    }

    /// Activates the tab showing `path`, opening it if no tab does.
    pub fn open_tab(&mut self, path: impl AsRef<Path>) -> Result<TabId, EditorError> {
        let path = path.as_ref();
        let wanted = identity(path);
        if let Some(index) = self
            .tabs
            .iter()
            .position(|tab| tab.document.path().map(identity).as_ref() == Some(&wanted))
        {
            debug!(path = %path.display(), index, "file already open, switching tab");
            self.active_tab = index;
            return Ok(self.tabs[index].id);
        }

        let document = Document::open(path)?;
        Ok(self.add_tab(document))
    }

    /// Closes the tab at `index`.
    ///
    /// A dirty document is only closed when `force` is set. After closing,
    /// the active tab is adjusted to remain valid.
    pub fn close_tab(&mut self, index: usize, force: bool) -> Result<CloseOutcome, EditorError> {
        let tab = self.tabs.get(index).ok_or(EditorError::NoSuchTab(index))?;
        if tab.document.is_dirty() && !force {
            return Ok(CloseOutcome::HasUnsavedChanges);
        }

        let removed = self.tabs.remove(index);
        if self.tabs.is_empty() {
            self.active_tab = 0;
        } else if self.active_tab >= self.tabs.len() {
            self.active_tab = self.tabs.len() - 1;
        } else if self.active_tab > index {
            self.active_tab -= 1;
        }
        Ok(CloseOutcome::Closed(removed))
    }

    pub fn active(&self) -> Option<&Tab> {
        self.tabs.get(self.active_tab)
    }

    pub fn active_mut(&mut self) -> Option<&mut Tab> {
        self.tabs.get_mut(self.active_tab)
    }

    pub fn active_index(&self) -> usize {
        self.active_tab
    }

    pub fn switch_tab(&mut self, index: usize) -> Result<(), EditorError> {
        if index >= self.tabs.len() {
            return Err(EditorError::NoSuchTab(index));
        }
        self.active_tab = index;
        Ok(())
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    /// Indices of tabs with unsaved changes, e.g. to confirm before exit.
    pub fn unsaved_tabs(&self) -> Vec<usize> {
        self.tabs
            .iter()
            .enumerate()
            .filter(|(_, tab)| tab.document.is_dirty())
            .map(|(index, _)| index)
            .collect()
    }
}

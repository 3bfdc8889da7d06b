use std::io;
use std::path::PathBuf;

use lite_pad_buffer::BufferError;
use lite_pad_i18n::I18nError;
use thiserror::Error;

/// Errors at the document and workspace boundary.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error(transparent)]
    Buffer(#[from] BufferError),

    #[error(transparent)]
    I18n(#[from] I18nError),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not valid UTF-8", path.display())]
    InvalidUtf8 { path: PathBuf },

    #[error("document has no file path")]
    NoPath,

    #[error("no tab at index {0}")]
    NoSuchTab(usize),

    #[error("failed to start clock thread: {0}")]
    Spawn(#[source] io::Error),
}

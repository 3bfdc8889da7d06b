use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the localization layer.
#[derive(Debug, Error)]
pub enum I18nError {
    /// The key is absent from both the active catalog and the fallback.
    #[error("no string for key `{key}` in language `{language}` or fallback `{fallback}`")]
    MissingKey {
        key: String,
        language: String,
        fallback: String,
    },

    #[error("unknown language tag `{0}`")]
    UnknownLanguage(String),

    #[error("no catalog available for language `{0}`")]
    CatalogUnavailable(String),

    #[error("catalog for `{language}` is malformed: {source}")]
    CatalogParse {
        language: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("settings I/O failed at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode settings: {0}")]
    Json(#[from] serde_json::Error),
}

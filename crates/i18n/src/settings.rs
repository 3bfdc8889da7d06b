// Chunk: docs/chunks/startup_language - Persisted startup language

//! Persistence of the language the application starts in.
//!
//! The settings file lives at `<data dir>/lite-pad/settings.json`, e.g.
//! `~/.local/share/lite-pad/settings.json` on Linux. It carries a schema
//! version; a file with a different version, unreadable contents or an
//! unknown language is ignored and the default language is used.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{I18nError, Language, DEFAULT_LANGUAGE};

/// Increment on breaking changes to the settings format.
const SCHEMA_VERSION: u32 = 1;

const APP_NAME: &str = "lite-pad";

const SETTINGS_FILENAME: &str = "settings.json";

/// On-disk settings document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub schema_version: u32,
    /// Language tag, e.g. `"de"`.
    pub startup_language: String,
}

/// Reads and writes the settings file at a fixed path.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The store at the platform data directory, or `None` if the platform
    /// has no data directory.
    pub fn default_location() -> Option<Self> {
        let dir = dirs::data_dir()?.join(APP_NAME);
        Some(Self::new(dir.join(SETTINGS_FILENAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The persisted startup language, or the default language if there is
    /// none or it cannot be used.
    pub fn load_startup_language(&self) -> Language {
        self.load()
            .and_then(|settings| match Language::from_tag(&settings.startup_language) {
                Ok(language) => Some(language),
                Err(err) => {
                    warn!(%err, "ignoring persisted startup language");
                    None
                }
            })
            .unwrap_or(DEFAULT_LANGUAGE)
    }

    fn load(&self) -> Option<Settings> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return None,
            Err(err) => {
                warn!(path = %self.path.display(), %err, "failed to read settings");
                return None;
            }
        };

        let settings: Settings = match serde_json::from_str(&json) {
            Ok(settings) => settings,
            Err(err) => {
                warn!(path = %self.path.display(), %err, "failed to parse settings");
                return None;
            }
        };

        if settings.schema_version != SCHEMA_VERSION {
            warn!(
                found = settings.schema_version,
                expected = SCHEMA_VERSION,
                "settings schema version mismatch, ignoring"
            );
            return None;
        }
        Some(settings)
    }

    /// Persists `language` as the startup language.
    ///
    /// Writes a temporary file next to the target and renames it into place,
    /// so an interrupted write never leaves a truncated settings file.
    pub fn save_startup_language(&self, language: Language) -> Result<(), I18nError> {
        let settings = Settings {
            schema_version: SCHEMA_VERSION,
            startup_language: language.tag().to_string(),
        };
        let json = serde_json::to_string_pretty(&settings)?;

        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|source| self.io_error(dir, source))?;
        }
        let temp_path = self.path.with_extension("json.tmp");
        if let Err(source) = fs::write(&temp_path, json) {
            let _ = fs::remove_file(&temp_path);
            return Err(self.io_error(&temp_path, source));
        }
        if let Err(source) = fs::rename(&temp_path, &self.path) {
            let _ = fs::remove_file(&temp_path);
            return Err(self.io_error(&self.path, source));
        }

        debug!(path = %self.path.display(), language = language.tag(), "startup language saved");
        Ok(())
    }

    fn io_error(&self, path: &Path, source: std::io::Error) -> I18nError {
        I18nError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

// Chunk: docs/chunks/localization_store - Language catalogs and change notification

//! Key/value string catalogs, one per language.
//!
//! The bundled catalogs are flat JSON objects compiled into the binary. Other
//! sources (a directory on disk, a test fixture) plug in through
//! [`CatalogSource`].

use std::collections::HashMap;

use crate::{I18nError, Language};

/// Strings for a single language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    language: String,
    entries: HashMap<String, String>,
}

impl Catalog {
    pub fn new(language: impl Into<String>, entries: HashMap<String, String>) -> Self {
        Self {
            language: language.into(),
            entries,
        }
    }

    /// Parses a flat `{"key": "text"}` JSON object.
    pub fn from_json(language: &str, json: &str) -> Result<Self, I18nError> {
        let entries = serde_json::from_str(json).map_err(|source| I18nError::CatalogParse {
            language: language.to_string(),
            source,
        })?;
        Ok(Self::new(language, entries))
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Loads the catalog for a language tag.
pub trait CatalogSource: Send + Sync {
    fn load(&self, language: &str) -> Result<Catalog, I18nError>;
}

/// The catalogs shipped with the application.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledCatalogs;

impl BundledCatalogs {
    fn raw(language: Language) -> &'static str {
        match language {
            Language::En => include_str!("../catalogs/en.json"),
            Language::De => include_str!("../catalogs/de.json"),
            Language::Fr => include_str!("../catalogs/fr.json"),
            Language::Hr => include_str!("../catalogs/hr.json"),
            Language::Ja => include_str!("../catalogs/ja.json"),
            Language::Zh => include_str!("../catalogs/zh.json"),
        }
    }
}

impl CatalogSource for BundledCatalogs {
    fn load(&self, language: &str) -> Result<Catalog, I18nError> {
        let parsed = Language::from_tag(language)
            .map_err(|_| I18nError::CatalogUnavailable(language.to_string()))?;
        Catalog::from_json(parsed.tag(), Self::raw(parsed))
    }
}

// Chunk: docs/chunks/localization_store - Language catalogs and change notification
//!
//! Localization for lite-pad.
//!
//! A [`LocalizationStore`] owns the current language and resolves keys against
//! its catalog, falling back to English. Anything whose text depends on the
//! language registers a listener and re-reads its strings after a change.
//! Windows put a [`LocalizationBridge`] between themselves and the store so
//! they can detach all their listeners at once.
//!
//! ```
//! use std::sync::Arc;
//! use lite_pad_i18n::{Language, LocalizationBridge, LocalizationStore, LocalizedText};
//!
//! let store = LocalizationStore::shared(Language::En).unwrap();
//! let bridge = Arc::new(LocalizationBridge::new(store.clone()));
//! let label = LocalizedText::new("file", bridge.clone()).unwrap();
//! assert_eq!(label.text(), "File");
//!
//! store.set_language("hr");
//! assert_eq!(label.text(), "Datoteka");
//! ```

mod bridge;
mod catalog;
mod error;
mod language;
mod listeners;
mod localized;
mod provider;
mod settings;
mod store;

pub use bridge::LocalizationBridge;
pub use catalog::{BundledCatalogs, Catalog, CatalogSource};
pub use error::I18nError;
pub use language::{Language, DEFAULT_LANGUAGE};
pub use listeners::{Listener, ListenerId, ListenerList};
pub use localized::{LocalizableAction, LocalizedText, DESCRIPTION_SUFFIX};
pub use provider::LocalizationProvider;
pub use settings::{Settings, SettingsStore};
pub use store::LocalizationStore;

// Chunk: docs/chunks/localization_store - Language catalogs and change notification

//! The application-wide localization store.
//!
//! Holds the current language and its catalog, falls back to the default
//! language for keys a translation lacks, and notifies listeners after every
//! language change. The store is shared by `Arc`; there is no global instance.

use std::sync::{Arc, PoisonError, RwLock};

use tracing::{debug, error, info, warn};

use crate::catalog::{BundledCatalogs, Catalog, CatalogSource};
use crate::listeners::{Listener, ListenerId, ListenerList};
use crate::provider::LocalizationProvider;
use crate::{I18nError, Language, DEFAULT_LANGUAGE};

struct StoreState {
    language: String,
    catalog: Arc<Catalog>,
}

/// Current language, its catalog and the change listeners.
pub struct LocalizationStore {
    source: Box<dyn CatalogSource>,
    fallback: Arc<Catalog>,
    state: RwLock<StoreState>,
    listeners: ListenerList,
}

impl LocalizationStore {
    /// Creates a store over `source`, starting in `language`.
    ///
    /// The default-language catalog must load; a startup language whose
    /// catalog is unavailable falls back to it with a warning.
    pub fn new(source: impl CatalogSource + 'static, language: &str) -> Result<Self, I18nError> {
        let fallback = Arc::new(source.load(DEFAULT_LANGUAGE.tag())?);
        let catalog = if language == DEFAULT_LANGUAGE.tag() {
            Arc::clone(&fallback)
        } else {
            Self::load_or_fallback(&source, language, &fallback)
        };

        debug!(language, keys = catalog.len(), "localization store created");
        Ok(Self {
            source: Box::new(source),
            fallback,
            state: RwLock::new(StoreState {
                language: language.to_string(),
                catalog,
            }),
            listeners: ListenerList::new(),
        })
    }

    /// A store over the bundled catalogs, shared and ready to hand out.
    pub fn shared(language: Language) -> Result<Arc<Self>, I18nError> {
        Ok(Arc::new(Self::new(BundledCatalogs, language.tag())?))
    }

    fn load_or_fallback(
        source: &dyn CatalogSource,
        language: &str,
        fallback: &Arc<Catalog>,
    ) -> Arc<Catalog> {
        match source.load(language) {
            Ok(catalog) => Arc::new(catalog),
            Err(err) => {
                warn!(language, %err, "catalog unavailable, using {}", DEFAULT_LANGUAGE);
                Arc::clone(fallback)
            }
        }
    }

    /// Tag of the current language.
    pub fn language(&self) -> String {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .language
            .clone()
    }

    /// Switches to `language` and notifies every listener.
    ///
    /// Setting the current language again does nothing and notifies no one.
    /// Listeners run after the store has been updated and with no lock held,
    /// so they read the new strings and may themselves call back into the
    /// store. Returns whether the language changed.
    pub fn set_language(&self, language: &str) -> bool {
        if self.language() == language {
            return false;
        }

        let catalog = Self::load_or_fallback(self.source.as_ref(), language, &self.fallback);
        {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            if state.language == language {
                return false;
            }
            state.language = language.to_string();
            state.catalog = catalog;
        }

        info!(language, "language changed");
        let notified = self.listeners.fire();
        debug!(notified, "localization listeners notified");
        true
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl LocalizationProvider for LocalizationStore {
    fn get_string(&self, key: &str) -> Result<String, I18nError> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(text) = state.catalog.get(key).or_else(|| self.fallback.get(key)) {
            return Ok(text.to_string());
        }

        error!(key, language = %state.language, "missing localization key");
        Err(I18nError::MissingKey {
            key: key.to_string(),
            language: state.language.clone(),
            fallback: DEFAULT_LANGUAGE.tag().to_string(),
        })
    }

    fn add_listener(&self, listener: Listener) -> ListenerId {
        self.listeners.add(listener)
    }

    fn remove_listener(&self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }
}

impl std::fmt::Debug for LocalizationStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalizationStore")
            .field("language", &self.language())
            .field("listeners", &self.listeners)
            .finish_non_exhaustive()
    }
}

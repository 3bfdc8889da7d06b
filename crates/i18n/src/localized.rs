// Chunk: docs/chunks/localized_components - Labels and actions that follow the language

//! Components whose visible text tracks the current language.
//!
//! Each one subscribes to a provider on creation and re-resolves its key on
//! every notification. Dropping it unsubscribes. The provider is held weakly
//! inside the callback so a component never keeps its provider alive through
//! the provider's own listener list.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use tracing::error;

use crate::listeners::ListenerId;
use crate::provider::LocalizationProvider;
use crate::I18nError;

/// Suffix appended to an action's key to find its description.
pub const DESCRIPTION_SUFFIX: &str = "Desc";

#[derive(Debug)]
struct LabelState {
    key: String,
    text: String,
}

/// A piece of text shown to the user, such as a menu title or a label.
pub struct LocalizedText {
    provider: Arc<dyn LocalizationProvider>,
    state: Arc<Mutex<LabelState>>,
    subscription: ListenerId,
}

fn lock(state: &Mutex<LabelState>) -> MutexGuard<'_, LabelState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

impl LocalizedText {
    /// Resolves `key` now and keeps it current from then on.
    pub fn new(key: &str, provider: Arc<dyn LocalizationProvider>) -> Result<Self, I18nError> {
        let text = provider.get_string(key)?;
        let state = Arc::new(Mutex::new(LabelState {
            key: key.to_string(),
            text,
        }));

        let weak_provider: Weak<dyn LocalizationProvider> = Arc::downgrade(&provider);
        let weak_state = Arc::downgrade(&state);
        let subscription = provider.add_listener(Arc::new(move || {
            let (Some(provider), Some(state)) = (weak_provider.upgrade(), weak_state.upgrade())
            else {
                return;
            };
            let key = lock(&state).key.clone();
            match provider.get_string(&key) {
                Ok(text) => lock(&state).text = text,
                // Keep the previous text; the error is already loud in the log.
                Err(err) => error!(key, %err, "cannot refresh localized text"),
            }
        }));

        Ok(Self {
            provider,
            state,
            subscription,
        })
    }

    pub fn text(&self) -> String {
        lock(&self.state).text.clone()
    }

    pub fn key(&self) -> String {
        lock(&self.state).key.clone()
    }

    /// Rebinds to a different key. On error the component is unchanged.
    pub fn set_key(&self, key: &str) -> Result<(), I18nError> {
        let text = self.provider.get_string(key)?;
        let mut state = lock(&self.state);
        state.key = key.to_string();
        state.text = text;
        Ok(())
    }
}

impl Drop for LocalizedText {
    fn drop(&mut self) {
        self.provider.remove_listener(self.subscription);
    }
}

impl std::fmt::Debug for LocalizedText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = lock(&self.state);
        f.debug_struct("LocalizedText")
            .field("key", &state.key)
            .field("text", &state.text)
            .finish()
    }
}

/// A user-invokable command with a localized name and optional description.
///
/// The description is looked up under the name's key plus
/// [`DESCRIPTION_SUFFIX`], e.g. `"save"` and `"saveDesc"`.
#[derive(Debug)]
pub struct LocalizableAction {
    name: LocalizedText,
    description: Option<LocalizedText>,
}

impl LocalizableAction {
    pub fn new(
        key: &str,
        provider: Arc<dyn LocalizationProvider>,
        with_description: bool,
    ) -> Result<Self, I18nError> {
        let description = with_description
            .then(|| description_key(key))
            .map(|desc_key| LocalizedText::new(&desc_key, Arc::clone(&provider)))
            .transpose()?;
        Ok(Self {
            name: LocalizedText::new(key, provider)?,
            description,
        })
    }

    pub fn key(&self) -> String {
        self.name.key()
    }

    pub fn name(&self) -> String {
        self.name.text()
    }

    pub fn description(&self) -> Option<String> {
        self.description.as_ref().map(LocalizedText::text)
    }

    /// Rebinds name and description to `key`.
    pub fn set_key(&self, key: &str) -> Result<(), I18nError> {
        if let Some(description) = &self.description {
            description.set_key(&description_key(key))?;
        }
        self.name.set_key(key)
    }
}

fn description_key(key: &str) -> String {
    format!("{key}{DESCRIPTION_SUFFIX}")
}

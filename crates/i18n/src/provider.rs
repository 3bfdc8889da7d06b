use crate::listeners::{Listener, ListenerId};
use crate::I18nError;

/// Something that resolves keys to localized text and announces when the
/// answers change.
///
/// Implemented by [`LocalizationStore`](crate::LocalizationStore) and by
/// [`LocalizationBridge`](crate::LocalizationBridge), so localized components
/// can hang off either.
pub trait LocalizationProvider: Send + Sync {
    /// Text for `key` in the current language.
    ///
    /// A key that neither the current catalog nor the fallback defines is an
    /// error, never an empty or placeholder string.
    fn get_string(&self, key: &str) -> Result<String, I18nError>;

    /// Registers `listener` to run after every language change.
    fn add_listener(&self, listener: Listener) -> ListenerId;

    /// Unregisters a listener. Returns `false` if `id` was not registered.
    fn remove_listener(&self, id: ListenerId) -> bool;
}

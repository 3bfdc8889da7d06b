// Chunk: docs/chunks/localization_bridge - Per-window decoupling from the store

//! A detachable relay between a long-lived provider and short-lived listeners.
//!
//! A window registers its localized components with its own bridge instead of
//! the application store. When the window goes away the bridge disconnects
//! with a single call, and the store no longer references anything the window
//! owns. Reconnecting later resumes forwarding.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::listeners::{Listener, ListenerId, ListenerList};
use crate::provider::LocalizationProvider;
use crate::I18nError;

pub struct LocalizationBridge {
    parent: Arc<dyn LocalizationProvider>,
    listeners: Arc<ListenerList>,
    /// Registration with `parent` while connected.
    connection: Mutex<Option<ListenerId>>,
}

impl LocalizationBridge {
    /// Creates a bridge over `parent`, already connected.
    pub fn new(parent: Arc<dyn LocalizationProvider>) -> Self {
        let bridge = Self {
            parent,
            listeners: Arc::new(ListenerList::new()),
            connection: Mutex::new(None),
        };
        bridge.connect();
        bridge
    }

    fn connection(&self) -> MutexGuard<'_, Option<ListenerId>> {
        self.connection.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Starts forwarding the parent's notifications. Idempotent.
    pub fn connect(&self) {
        let mut connection = self.connection();
        if connection.is_some() {
            return;
        }
        let listeners = Arc::clone(&self.listeners);
        let id = self.parent.add_listener(Arc::new(move || {
            listeners.fire();
        }));
        *connection = Some(id);
        debug!(listeners = self.listeners.len(), "localization bridge connected");
    }

    /// Stops forwarding. Idempotent. Registered listeners are kept.
    pub fn disconnect(&self) {
        if let Some(id) = self.connection().take() {
            self.parent.remove_listener(id);
            debug!("localization bridge disconnected");
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connection().is_some()
    }

    /// Number of listeners registered on this bridge.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl LocalizationProvider for LocalizationBridge {
    /// Resolves through the parent whether or not the bridge is connected.
    fn get_string(&self, key: &str) -> Result<String, I18nError> {
        self.parent.get_string(key)
    }

    fn add_listener(&self, listener: Listener) -> ListenerId {
        self.listeners.add(listener)
    }

    fn remove_listener(&self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }
}

impl Drop for LocalizationBridge {
    fn drop(&mut self) {
        self.disconnect();
    }
}

impl std::fmt::Debug for LocalizationBridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalizationBridge")
            .field("connected", &self.is_connected())
            .field("listeners", &self.listeners)
            .finish_non_exhaustive()
    }
}

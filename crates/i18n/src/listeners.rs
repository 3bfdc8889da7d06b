// Chunk: docs/chunks/localization_store - Language catalogs and change notification

//! Copy-on-write listener registry.
//!
//! Registration and removal swap in a fresh `Arc<Vec<_>>`; [`ListenerList::fire`]
//! clones the current `Arc` and calls the listeners with no lock held. A
//! listener may therefore add or remove listeners (itself included) while it
//! runs. Additions take effect from the next notification; a removed listener
//! is skipped even if the running notification has not reached it yet.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A change callback. Shared so a snapshot can outlive its removal.
pub type Listener = Arc<dyn Fn() + Send + Sync>;

/// Handle returned on registration, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

struct Entry {
    id: ListenerId,
    listener: Listener,
    registered: AtomicBool,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Arc<Vec<Arc<Entry>>>,
}

/// Ordered set of listeners, notified in registration order.
#[derive(Default)]
pub struct ListenerList {
    registry: Mutex<Registry>,
}

impl ListenerList {
    pub fn new() -> Self {
        Self::default()
    }

    fn registry(&self) -> MutexGuard<'_, Registry> {
        // Listeners never run under this lock, so a poisoned guard still
        // holds a consistent list.
        self.registry.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Registers `listener` and returns its handle.
    ///
    /// Registering the same closure twice yields two entries that are both
    /// notified.
    pub fn add(&self, listener: Listener) -> ListenerId {
        let mut registry = self.registry();
        let id = ListenerId(registry.next_id);
        registry.next_id += 1;

        let mut listeners = Vec::clone(&registry.listeners);
        listeners.push(Arc::new(Entry {
            id,
            listener,
            registered: AtomicBool::new(true),
        }));
        registry.listeners = Arc::new(listeners);
        id
    }

    /// Unregisters the listener with handle `id`. Unknown handles are ignored.
    pub fn remove(&self, id: ListenerId) -> bool {
        let mut registry = self.registry();
        let Some(index) = registry.listeners.iter().position(|entry| entry.id == id) else {
            return false;
        };
        let mut listeners = Vec::clone(&registry.listeners);
        let entry = listeners.remove(index);
        entry.registered.store(false, Ordering::SeqCst);
        registry.listeners = Arc::new(listeners);
        true
    }

    pub fn len(&self) -> usize {
        self.registry().listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Calls every listener registered at the time of the call, in order,
    /// skipping any removed since.
    ///
    /// Returns how many listeners were called.
    pub fn fire(&self) -> usize {
        let snapshot = Arc::clone(&self.registry().listeners);
        let mut called = 0;
        for entry in snapshot.iter() {
            if entry.registered.load(Ordering::SeqCst) {
                (entry.listener)();
                called += 1;
            }
        }
        called
    }
}

impl std::fmt::Debug for ListenerList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerList")
            .field("len", &self.len())
            .finish()
    }
}

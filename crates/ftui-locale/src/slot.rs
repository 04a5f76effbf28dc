//! One-time initialization guard for a shared store.
//!
//! Applications that build their store lazily from several entry points put
//! a [`StoreSlot`] where those entry points can reach it (a field of the app
//! state, or a `static`). The first initializer to succeed wins; everyone
//! else gets the same `Arc`. A failing initializer leaves the slot empty.

use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use crate::error::Result;
use crate::store::LocaleStore;

/// Lazily-initialized, shared [`LocaleStore`].
///
/// ```
/// use ftui_locale::{LocaleStore, StoreSlot};
///
/// static LOCALES: StoreSlot = StoreSlot::new();
///
/// let store = LOCALES.get_or_try_init(LocaleStore::with_builtin).unwrap();
/// assert_eq!(store.text("gregorian", "da", "field-year").unwrap(), "år");
/// ```
#[derive(Debug, Default)]
pub struct StoreSlot {
    store: OnceLock<Arc<LocaleStore>>,
    init: Mutex<()>,
}

impl StoreSlot {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            store: OnceLock::new(),
            init: Mutex::new(()),
        }
    }

    /// The store, if initialized.
    #[must_use]
    pub fn get(&self) -> Option<Arc<LocaleStore>> {
        self.store.get().cloned()
    }

    /// Return the store, running `init` if no initializer has succeeded yet.
    ///
    /// Initializers are serialized: at most one runs at a time, and once one
    /// succeeds no other is called.
    pub fn get_or_try_init<F>(&self, init: F) -> Result<Arc<LocaleStore>>
    where
        F: FnOnce() -> Result<LocaleStore>,
    {
        if let Some(store) = self.store.get() {
            return Ok(Arc::clone(store));
        }

        // The guard protects no data, so a poisoned lock is still usable.
        let _guard = self.init.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(store) = self.store.get() {
            return Ok(Arc::clone(store));
        }

        let store = Arc::new(init()?);
        tracing::debug!(bundles = store.len(), "locale store slot initialized");
        Ok(Arc::clone(self.store.get_or_init(|| store)))
    }
}

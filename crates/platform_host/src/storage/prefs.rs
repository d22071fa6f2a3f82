//! Lightweight preference storage contracts and adapters.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
/// Failures reported by a [`PrefsStore`] backend.
pub enum PrefsError {
    /// The backing store does not exist in this environment (no window, storage disabled).
    #[error("preference storage unavailable")]
    Unavailable,
    /// The backend refused a write because its quota is exhausted.
    #[error("preference storage quota exceeded while writing `{key}`")]
    QuotaExceeded {
        /// Key whose write was rejected.
        key: String,
    },
    /// Any other backend failure.
    #[error("preference storage {operation} failed: {message}")]
    Backend {
        /// Backend operation name (`get_item`, `set_item`, ...).
        operation: &'static str,
        /// Backend-provided detail.
        message: String,
    },
    /// A typed value could not be encoded or decoded as JSON.
    #[error("preference value serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Host service for lightweight preference values (plain text stored per key).
///
/// Calls are synchronous; every write fully replaces the previous value for the key.
pub trait PrefsStore {
    /// Loads the raw text stored for a preference key.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend cannot be read.
    fn load_pref(&self, key: &str) -> Result<Option<String>, PrefsError>;

    /// Saves raw text for a preference key, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend rejects the write.
    fn save_pref(&self, key: &str, raw: &str) -> Result<(), PrefsError>;
}

impl<S: PrefsStore + ?Sized> PrefsStore for Rc<S> {
    fn load_pref(&self, key: &str) -> Result<Option<String>, PrefsError> {
        (**self).load_pref(key)
    }

    fn save_pref(&self, key: &str, raw: &str) -> Result<(), PrefsError> {
        (**self).save_pref(key, raw)
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op preference store for unsupported targets and baseline tests.
pub struct NoopPrefsStore;

impl PrefsStore for NoopPrefsStore {
    fn load_pref(&self, _key: &str) -> Result<Option<String>, PrefsError> {
        Ok(None)
    }

    fn save_pref(&self, _key: &str, _raw: &str) -> Result<(), PrefsError> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory preference store keyed by string.
///
/// Clones share the same map, so a clone handed to a state container can be inspected afterwards.
pub struct MemoryPrefsStore {
    inner: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryPrefsStore {
    /// Creates a store pre-populated with one raw value.
    pub fn with_entry(key: &str, raw: &str) -> Self {
        let store = Self::default();
        store
            .inner
            .borrow_mut()
            .insert(key.to_string(), raw.to_string());
        store
    }

    /// Returns the raw text currently held for `key`.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.inner.borrow().get(key).cloned()
    }
}

impl PrefsStore for MemoryPrefsStore {
    fn load_pref(&self, key: &str) -> Result<Option<String>, PrefsError> {
        Ok(self.raw(key))
    }

    fn save_pref(&self, key: &str, raw: &str) -> Result<(), PrefsError> {
        self.inner
            .borrow_mut()
            .insert(key.to_string(), raw.to_string());
        Ok(())
    }
}

/// Loads and deserializes a typed JSON preference value through a [`PrefsStore`] implementation.
///
/// # Errors
///
/// Returns an error when the store or JSON deserialization fails.
pub fn load_pref_with<S: PrefsStore + ?Sized, T: DeserializeOwned>(
    store: &S,
    key: &str,
) -> Result<Option<T>, PrefsError> {
    let Some(raw) = store.load_pref(key)? else {
        return Ok(None);
    };
    let value = serde_json::from_str(&raw)?;
    Ok(Some(value))
}

/// Serializes and saves a typed JSON preference value through a [`PrefsStore`] implementation.
///
/// # Errors
///
/// Returns an error when serialization or store save fails.
pub fn save_pref_with<S: PrefsStore + ?Sized, T: Serialize>(
    store: &S,
    key: &str,
    value: &T,
) -> Result<(), PrefsError> {
    let raw = serde_json::to_string(value)?;
    store.save_pref(key, &raw)
}

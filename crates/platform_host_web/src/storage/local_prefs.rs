//! `localStorage`-backed preference store implementation.
//!
//! The browser API is synchronous, so this adapter maps one-to-one onto
//! [`platform_host::PrefsStore`]. On non-wasm targets there is no `window`; reads return `None` and
//! writes succeed without effect so native builds and tests keep working.

use platform_host::{PrefsError, PrefsStore};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Clone, Copy, Default)]
/// Browser preference store backed by `window.localStorage`.
pub struct WebPrefsStore;

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Result<web_sys::Storage, PrefsError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(PrefsError::Unavailable)
}

#[cfg(target_arch = "wasm32")]
fn backend_error(operation: &'static str, key: &str, err: JsValue) -> PrefsError {
    match err.dyn_ref::<web_sys::DomException>() {
        Some(dom) if dom.name() == "QuotaExceededError" => PrefsError::QuotaExceeded {
            key: key.to_string(),
        },
        Some(dom) => PrefsError::Backend {
            operation,
            message: dom.message(),
        },
        None => PrefsError::Backend {
            operation,
            message: format!("{err:?}"),
        },
    }
}

impl WebPrefsStore {
    /// Loads the raw text stored for a preference key.
    ///
    /// # Errors
    ///
    /// Returns an error when localStorage is unavailable or the read throws.
    pub fn load_raw(self, key: &str) -> Result<Option<String>, PrefsError> {
        #[cfg(target_arch = "wasm32")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|e| backend_error("get_item", key, e))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    /// Saves raw text for a preference key.
    ///
    /// # Errors
    ///
    /// Returns [`PrefsError::QuotaExceeded`] when the browser rejects the write for size, and
    /// another variant when localStorage is unavailable or the write fails otherwise.
    pub fn save_raw(self, key: &str, raw: &str) -> Result<(), PrefsError> {
        #[cfg(target_arch = "wasm32")]
        {
            local_storage()?
                .set_item(key, raw)
                .map_err(|e| backend_error("set_item", key, e))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (key, raw);
            Ok(())
        }
    }
}

impl PrefsStore for WebPrefsStore {
    fn load_pref(&self, key: &str) -> Result<Option<String>, PrefsError> {
        self.load_raw(key)
    }

    fn save_pref(&self, key: &str, raw: &str) -> Result<(), PrefsError> {
        self.save_raw(key, raw)
    }
}

use platform_host::{NoopPrefsStore, PrefsError, PrefsStore};

use crate::WebPrefsStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Compile-time selected host strategy for `platform_host_web` adapters.
pub enum HostStrategy {
    /// Browser-backed adapters from `platform_host_web`.
    Browser,
    /// No-op adapters for hosts without browser storage.
    DesktopStub,
}

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "desktop-host-stub")]
    {
        HostStrategy::DesktopStub
    }

    #[cfg(not(feature = "desktop-host-stub"))]
    {
        HostStrategy::Browser
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    match selected_host_strategy() {
        HostStrategy::Browser => "browser",
        HostStrategy::DesktopStub => "desktop-stub",
    }
}

/// Adapter enum that erases the concrete preference backend behind [`PrefsStore`].
#[derive(Debug, Clone, Copy)]
pub enum PrefsStoreAdapter {
    /// Browser-backed preference storage.
    Browser(WebPrefsStore),
    /// No-op fallback used when browser storage is intentionally stubbed.
    DesktopStub(NoopPrefsStore),
}

impl PrefsStore for PrefsStoreAdapter {
    fn load_pref(&self, key: &str) -> Result<Option<String>, PrefsError> {
        match self {
            Self::Browser(store) => store.load_pref(key),
            Self::DesktopStub(store) => store.load_pref(key),
        }
    }

    fn save_pref(&self, key: &str, raw: &str) -> Result<(), PrefsError> {
        match self {
            Self::Browser(store) => store.save_pref(key, raw),
            Self::DesktopStub(store) => store.save_pref(key, raw),
        }
    }
}

/// Builds the preference store for the selected host strategy.
pub fn prefs_store() -> PrefsStoreAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => PrefsStoreAdapter::Browser(WebPrefsStore),
        HostStrategy::DesktopStub => PrefsStoreAdapter::DesktopStub(NoopPrefsStore),
    }
}

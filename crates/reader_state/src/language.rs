//! Two-valued reading language preference.

use std::rc::Rc;

use leptos::logging;
use platform_host::PrefsStore;

use crate::{
    listeners::{Listeners, SubscriptionId},
    model::{Language, LANGUAGE_KEY},
};

/// Holds the active [`Language`] and mirrors it into [`LANGUAGE_KEY`] as a raw token.
pub struct LanguagePreference {
    prefs: Rc<dyn PrefsStore>,
    language: Language,
    listeners: Listeners<Language>,
}

fn load_language(prefs: &dyn PrefsStore) -> Language {
    match prefs.load_pref(LANGUAGE_KEY) {
        Ok(stored) => stored
            .as_deref()
            .and_then(Language::from_token)
            .unwrap_or_default(),
        Err(err) => {
            logging::warn!("language preference load failed: {err}");
            Language::default()
        }
    }
}

impl LanguagePreference {
    /// Reads the stored token; unknown or missing values resolve to [`Language::English`].
    pub fn load(prefs: Rc<dyn PrefsStore>) -> Self {
        let language = load_language(prefs.as_ref());
        Self {
            prefs,
            language,
            listeners: Listeners::default(),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Flips the language. The new token is written before the in-memory value changes.
    pub fn toggle_language(&mut self) {
        let next = self.language.toggled();
        if let Err(err) = self.prefs.save_pref(LANGUAGE_KEY, next.as_str()) {
            logging::warn!("language preference save failed: {err}");
        }
        self.language = next;
        self.listeners.notify(&next);
    }

    pub fn subscribe(&mut self, callback: impl Fn(&Language) + 'static) -> SubscriptionId {
        self.listeners.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }
}

//! Leptos providers and consumer hooks for the reader state containers.
//!
//! Each provider owns its store in a [`StoredValue`]. The store's listener stages every committed
//! value, and the mutator publishes it to a signal once the store borrow is released, so effects
//! woken by the signal may call mutators again. Consumers get a `Copy` context handle exposing
//! reads and mutators only.

use std::rc::Rc;

use leptos::*;
use platform_host::PrefsStore;
use thiserror::Error;

use crate::{
    bookmarks::BookmarkStore,
    language::LanguagePreference,
    model::{contains_bookmark, Bookmark, Language},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
/// Wiring errors raised when a consumer runs outside its provider.
pub enum ContextError {
    /// No ancestor registered the requested context.
    #[error("{provider} not provided; wrap this component in <{provider}>")]
    ProviderMissing {
        /// Name of the provider component that must be an ancestor.
        provider: &'static str,
    },
}

fn default_prefs() -> Rc<dyn PrefsStore> {
    Rc::new(platform_host_web::prefs_store())
}

#[derive(Clone, Copy)]
/// Leptos context exposing the bookmark list and its mutators.
pub struct BookmarkContext {
    store: StoredValue<BookmarkStore>,
    staged: StoredValue<Option<Rc<Vec<Bookmark>>>>,
    bookmarks: ReadSignal<Rc<Vec<Bookmark>>>,
    set_bookmarks: WriteSignal<Rc<Vec<Bookmark>>>,
}

impl BookmarkContext {
    /// Current bookmark list (tracked).
    pub fn bookmarks(&self) -> Rc<Vec<Bookmark>> {
        self.bookmarks.get()
    }

    /// Whether `(chapter_id, verse_id)` is bookmarked (tracked).
    pub fn is_bookmarked(&self, chapter_id: u32, verse_id: u32) -> bool {
        self.bookmarks
            .with(|bookmarks| contains_bookmark(bookmarks, chapter_id, verse_id))
    }

    /// Adds or removes the bookmark for `(chapter_id, verse_id)`.
    pub fn toggle_bookmark(&self, chapter_id: u32, verse_id: u32, verse_number: u32) {
        self.store
            .update_value(|store| store.toggle_bookmark(chapter_id, verse_id, verse_number));
        if let Some(snapshot) = self.staged.get_value() {
            self.staged.set_value(None);
            self.set_bookmarks.set(snapshot);
        }
    }
}

#[derive(Clone, Copy)]
/// Leptos context exposing the reading language and its toggle.
pub struct LanguageContext {
    store: StoredValue<LanguagePreference>,
    staged: StoredValue<Option<Language>>,
    language: ReadSignal<Language>,
    set_language: WriteSignal<Language>,
}

impl LanguageContext {
    /// Current language (tracked).
    pub fn language(&self) -> Language {
        self.language.get()
    }

    /// Switches between English and Hindi.
    pub fn toggle_language(&self) {
        self.store.update_value(LanguagePreference::toggle_language);
        if let Some(language) = self.staged.get_value() {
            self.staged.set_value(None);
            self.set_language.set(language);
        }
    }
}

/// Loads bookmarks from `prefs` and registers a [`BookmarkContext`] on the current owner.
pub fn provide_bookmarks(prefs: Rc<dyn PrefsStore>) -> BookmarkContext {
    let mut store = BookmarkStore::load(prefs);
    let (bookmarks, set_bookmarks) = create_signal(store.snapshot());
    let staged = store_value(None);
    store.subscribe(move |snapshot| staged.set_value(Some(Rc::clone(snapshot))));

    let context = BookmarkContext {
        store: store_value(store),
        staged,
        bookmarks,
        set_bookmarks,
    };
    provide_context(context);
    context
}

/// Loads the language preference from `prefs` and registers a [`LanguageContext`].
pub fn provide_language(prefs: Rc<dyn PrefsStore>) -> LanguageContext {
    let mut store = LanguagePreference::load(prefs);
    let (language, set_language) = create_signal(store.language());
    let staged = store_value(None);
    store.subscribe(move |language| staged.set_value(Some(*language)));

    let context = LanguageContext {
        store: store_value(store),
        staged,
        language,
        set_language,
    };
    provide_context(context);
    context
}

#[component]
/// Provides [`BookmarkContext`] to descendant components.
pub fn BookmarkProvider(
    /// Persistence backend; defaults to the host-selected preference store.
    #[prop(optional)]
    prefs: Option<Rc<dyn PrefsStore>>,
    children: Children,
) -> impl IntoView {
    provide_bookmarks(prefs.unwrap_or_else(default_prefs));
    children().into_view()
}

#[component]
/// Provides [`LanguageContext`] to descendant components.
pub fn LanguageProvider(
    /// Persistence backend; defaults to the host-selected preference store.
    #[prop(optional)]
    prefs: Option<Rc<dyn PrefsStore>>,
    children: Children,
) -> impl IntoView {
    provide_language(prefs.unwrap_or_else(default_prefs));
    children().into_view()
}

/// Returns the nearest [`BookmarkContext`], or an error when no provider is an ancestor.
pub fn try_use_bookmarks() -> Result<BookmarkContext, ContextError> {
    use_context::<BookmarkContext>().ok_or(ContextError::ProviderMissing {
        provider: "BookmarkProvider",
    })
}

/// Returns the nearest [`LanguageContext`], or an error when no provider is an ancestor.
pub fn try_use_language() -> Result<LanguageContext, ContextError> {
    use_context::<LanguageContext>().ok_or(ContextError::ProviderMissing {
        provider: "LanguageProvider",
    })
}

/// Returns the current [`BookmarkContext`].
///
/// # Panics
///
/// Panics if called outside [`BookmarkProvider`].
pub fn use_bookmarks() -> BookmarkContext {
    try_use_bookmarks().unwrap_or_else(|err| panic!("{err}"))
}

/// Returns the current [`LanguageContext`].
///
/// # Panics
///
/// Panics if called outside [`LanguageProvider`].
pub fn use_language() -> LanguageContext {
    try_use_language().unwrap_or_else(|err| panic!("{err}"))
}

#[cfg(test)]
mod tests {
    use platform_host::MemoryPrefsStore;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{BOOKMARKS_KEY, LANGUAGE_KEY};

    #[test]
    fn bookmark_context_reflects_toggles() {
        let runtime = create_runtime();
        let prefs = MemoryPrefsStore::default();
        provide_bookmarks(Rc::new(prefs.clone()));

        let bookmarks = use_bookmarks();
        bookmarks.toggle_bookmark(2, 5, 5);
        assert_eq!(*bookmarks.bookmarks(), vec![Bookmark::new(2, 5, 5)]);
        assert!(bookmarks.is_bookmarked(2, 5));
        assert_eq!(
            prefs.raw(BOOKMARKS_KEY).as_deref(),
            Some(r#"[{"chapterId":2,"verseId":5,"verseNumber":5}]"#)
        );

        bookmarks.toggle_bookmark(2, 5, 5);
        assert!(bookmarks.bookmarks().is_empty());
        assert!(!bookmarks.is_bookmarked(2, 5));
        runtime.dispose();
    }

    #[test]
    fn effects_may_toggle_while_reacting_to_a_toggle() {
        let runtime = create_runtime();
        let prefs = MemoryPrefsStore::default();
        let bookmarks = provide_bookmarks(Rc::new(prefs.clone()));
        create_effect(move |_| {
            let current = bookmarks.bookmarks();
            if current.len() == 1 && current[0].matches(2, 5) {
                bookmarks.toggle_bookmark(2, 6, 6);
            }
        });

        bookmarks.toggle_bookmark(2, 5, 5);

        assert_eq!(
            *bookmarks.bookmarks(),
            vec![Bookmark::new(2, 5, 5), Bookmark::new(2, 6, 6)]
        );
        assert_eq!(
            prefs.raw(BOOKMARKS_KEY).as_deref(),
            Some(r#"[{"chapterId":2,"verseId":5,"verseNumber":5},{"chapterId":2,"verseId":6,"verseNumber":6}]"#)
        );
        runtime.dispose();
    }

    #[test]
    fn language_effect_may_toggle_back() {
        let runtime = create_runtime();
        let prefs = MemoryPrefsStore::default();
        let language = provide_language(Rc::new(prefs.clone()));
        create_effect(move |_| {
            if language.language() == Language::Hindi {
                language.toggle_language();
            }
        });

        language.toggle_language();

        assert_eq!(language.language(), Language::English);
        assert_eq!(prefs.raw(LANGUAGE_KEY).as_deref(), Some("english"));
        runtime.dispose();
    }

    #[test]
    fn bookmark_context_starts_from_stored_list() {
        let runtime = create_runtime();
        let prefs = MemoryPrefsStore::with_entry(
            BOOKMARKS_KEY,
            r#"[{"chapterId":18,"verseId":66,"verseNumber":66}]"#,
        );
        let bookmarks = provide_bookmarks(Rc::new(prefs));
        assert!(bookmarks.is_bookmarked(18, 66));
        runtime.dispose();
    }

    #[test]
    fn language_context_toggles_and_persists() {
        let runtime = create_runtime();
        let prefs = MemoryPrefsStore::with_entry(LANGUAGE_KEY, "french");
        provide_language(Rc::new(prefs.clone()));

        let language = use_language();
        assert_eq!(language.language(), Language::English);
        language.toggle_language();
        assert_eq!(language.language(), Language::Hindi);
        assert_eq!(prefs.raw(LANGUAGE_KEY).as_deref(), Some("hindi"));
        language.toggle_language();
        assert_eq!(language.language(), Language::English);
        runtime.dispose();
    }

    #[test]
    fn consumers_outside_provider_get_wiring_error() {
        let runtime = create_runtime();
        assert_eq!(
            try_use_bookmarks().err(),
            Some(ContextError::ProviderMissing {
                provider: "BookmarkProvider"
            })
        );
        assert_eq!(
            try_use_language().err(),
            Some(ContextError::ProviderMissing {
                provider: "LanguageProvider"
            })
        );
        runtime.dispose();
    }

    #[test]
    #[should_panic(expected = "BookmarkProvider not provided")]
    fn use_bookmarks_panics_outside_provider() {
        let _ = create_runtime();
        let _ = use_bookmarks();
    }

    #[test]
    #[should_panic(expected = "LanguageProvider not provided")]
    fn use_language_panics_outside_provider() {
        let _ = create_runtime();
        let _ = use_language();
    }
}

//! Persisted reader state for the Gita reader: verse bookmarks and the reading language.
//!
//! [`BookmarkStore`] and [`LanguagePreference`] are plain single-threaded containers over an
//! injected [`platform_host::PrefsStore`]; they notify listeners after each committed change and
//! never surface storage failures to callers. The [`context`] module wires them into Leptos as
//! providers with fail-fast consumer hooks.

pub mod bookmarks;
pub mod context;
pub mod language;
pub mod listeners;
pub mod model;

pub use bookmarks::BookmarkStore;
pub use context::{
    provide_bookmarks, provide_language, try_use_bookmarks, try_use_language, use_bookmarks,
    use_language, BookmarkContext, BookmarkProvider, ContextError, LanguageContext,
    LanguageProvider,
};
pub use language::LanguagePreference;
pub use listeners::{Listeners, SubscriptionId};
pub use model::{Bookmark, Language, BOOKMARKS_KEY, LANGUAGE_KEY};

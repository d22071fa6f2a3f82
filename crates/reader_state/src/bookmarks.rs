//! Bookmark collection with toggle semantics and write-through persistence.

use std::rc::Rc;

use leptos::logging;
use platform_host::{load_pref_with, save_pref_with, PrefsStore};

use crate::{
    listeners::{Listeners, SubscriptionId},
    model::{contains_bookmark, Bookmark, BOOKMARKS_KEY},
};

/// Owns the ordered bookmark list and keeps [`BOOKMARKS_KEY`] in sync with it.
///
/// Storage failures never reach callers: a bad load starts empty, a failed write leaves the
/// in-memory list authoritative. Both are logged.
pub struct BookmarkStore {
    prefs: Rc<dyn PrefsStore>,
    bookmarks: Rc<Vec<Bookmark>>,
    listeners: Listeners<Rc<Vec<Bookmark>>>,
}

fn load_bookmarks(prefs: &dyn PrefsStore) -> Vec<Bookmark> {
    match load_pref_with::<_, Vec<Bookmark>>(prefs, BOOKMARKS_KEY) {
        Ok(bookmarks) => bookmarks.unwrap_or_default(),
        Err(err) => {
            logging::warn!("bookmark load failed, starting empty: {err}");
            Vec::new()
        }
    }
}

impl BookmarkStore {
    pub fn load(prefs: Rc<dyn PrefsStore>) -> Self {
        let bookmarks = load_bookmarks(prefs.as_ref());
        Self {
            prefs,
            bookmarks: Rc::new(bookmarks),
            listeners: Listeners::default(),
        }
    }

    pub fn bookmarks(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    /// Shared view of the current list. The same allocation is returned until the next toggle.
    pub fn snapshot(&self) -> Rc<Vec<Bookmark>> {
        Rc::clone(&self.bookmarks)
    }

    pub fn is_bookmarked(&self, chapter_id: u32, verse_id: u32) -> bool {
        contains_bookmark(&self.bookmarks, chapter_id, verse_id)
    }

    /// Removes the bookmark for `(chapter_id, verse_id)` if present, otherwise appends one.
    pub fn toggle_bookmark(&mut self, chapter_id: u32, verse_id: u32, verse_number: u32) {
        let next = if self.is_bookmarked(chapter_id, verse_id) {
            self.bookmarks
                .iter()
                .filter(|b| !b.matches(chapter_id, verse_id))
                .copied()
                .collect()
        } else {
            let mut next = Vec::with_capacity(self.bookmarks.len() + 1);
            next.extend(self.bookmarks.iter().copied());
            next.push(Bookmark::new(chapter_id, verse_id, verse_number));
            next
        };
        self.bookmarks = Rc::new(next);
        self.listeners.notify(&self.bookmarks);
        self.persist();
    }

    pub fn subscribe(
        &mut self,
        callback: impl Fn(&Rc<Vec<Bookmark>>) + 'static,
    ) -> SubscriptionId {
        self.listeners.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    fn persist(&self) {
        if let Err(err) = save_pref_with(self.prefs.as_ref(), BOOKMARKS_KEY, &*self.bookmarks) {
            logging::warn!("bookmark save failed: {err}");
        }
    }
}

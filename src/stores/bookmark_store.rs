//! Bookmark store for PocketBrowser.
//!
//! Owns the saved-bookmark collection in insertion order. Bookmarks are
//! never deduplicated by URL; removal and update of unknown ids are silent
//! no-ops.

use uuid::Uuid;

use crate::stores::subscribers::{ChangeNotifier, SubscriptionId};
use crate::types::bookmark::{Bookmark, BookmarkPatch};
use crate::utils::time::now_ms;

/// Trait defining the bookmark store interface.
pub trait BookmarkStoreTrait {
    fn add_bookmark(&mut self, title: &str, url: &str, favicon: Option<&str>) -> String;
    fn remove_bookmark(&mut self, id: &str);
    fn update_bookmark(&mut self, id: &str, patch: BookmarkPatch);
    fn get_bookmark(&self, url: &str) -> Option<&Bookmark>;
    fn search_bookmarks(&self, query: &str) -> Vec<&Bookmark>;
    fn bookmarks(&self) -> &[Bookmark];
    fn hydrate(&mut self, bookmarks: Vec<Bookmark>);
}

/// In-memory bookmark store.
pub struct BookmarkStore {
    bookmarks: Vec<Bookmark>,
    notifier: ChangeNotifier,
}

impl BookmarkStore {
    pub fn new() -> Self {
        Self {
            bookmarks: Vec::new(),
            notifier: ChangeNotifier::new(),
        }
    }

    /// Registers a listener fired after every successful mutation.
    pub fn subscribe(&mut self, listener: impl FnMut() + Send + 'static) -> SubscriptionId {
        self.notifier.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }
}

impl Default for BookmarkStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BookmarkStoreTrait for BookmarkStore {
    /// Appends a new bookmark with a fresh ID and the current timestamp.
    /// Returns the new bookmark's ID. Always succeeds.
    fn add_bookmark(&mut self, title: &str, url: &str, favicon: Option<&str>) -> String {
        let id = Uuid::new_v4().to_string();
        self.bookmarks.push(Bookmark {
            id: id.clone(),
            title: title.to_string(),
            url: url.to_string(),
            favicon: favicon.map(str::to_string),
            created_at: now_ms(),
        });
        self.notifier.notify();
        id
    }

    /// Removes a bookmark; unknown ids leave state unchanged.
    fn remove_bookmark(&mut self, id: &str) {
        let before = self.bookmarks.len();
        self.bookmarks.retain(|b| b.id != id);
        if self.bookmarks.len() != before {
            self.notifier.notify();
        }
    }

    /// Merges `patch` into the matching bookmark; unknown ids leave state
    /// unchanged.
    fn update_bookmark(&mut self, id: &str, patch: BookmarkPatch) {
        let bookmark = match self.bookmarks.iter_mut().find(|b| b.id == id) {
            Some(bookmark) => bookmark,
            None => return,
        };
        patch.apply(bookmark);
        self.notifier.notify();
    }

    /// First bookmark whose URL equals `url` exactly.
    fn get_bookmark(&self, url: &str) -> Option<&Bookmark> {
        self.bookmarks.iter().find(|b| b.url == url)
    }

    /// Case-insensitive substring match against title or URL, in insertion
    /// order.
    fn search_bookmarks(&self, query: &str) -> Vec<&Bookmark> {
        let lower = query.to_lowercase();
        self.bookmarks
            .iter()
            .filter(|b| {
                b.title.to_lowercase().contains(&lower) || b.url.to_lowercase().contains(&lower)
            })
            .collect()
    }

    fn bookmarks(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    /// Replaces the entire collection with the persisted one.
    fn hydrate(&mut self, bookmarks: Vec<Bookmark>) {
        self.bookmarks = bookmarks;
        self.notifier.notify();
    }
}

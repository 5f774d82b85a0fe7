//! History store for PocketBrowser.
//!
//! Owns the visit log. At most one entry exists per URL: a repeat visit
//! increments the entry's count and refreshes its timestamp in place,
//! preserving its id and position in the collection.

use uuid::Uuid;

use crate::stores::subscribers::{ChangeNotifier, SubscriptionId};
use crate::types::history::HistoryEntry;
use crate::utils::time::now_ms;

/// Cap applied by the recent-history view when the caller has no preference.
pub const DEFAULT_RECENT_LIMIT: usize = 50;

/// Trait defining the history store interface.
pub trait HistoryStoreTrait {
    fn add_entry(&mut self, url: &str, title: &str, favicon: Option<&str>) -> String;
    fn remove_entry(&mut self, id: &str);
    fn clear_history(&mut self);
    fn get_history_for_url(&self, url: &str) -> Option<&HistoryEntry>;
    fn search_history(&self, query: &str) -> Vec<&HistoryEntry>;
    fn get_recent_history(&self, limit: usize) -> Vec<&HistoryEntry>;
    fn entries(&self) -> &[HistoryEntry];
    fn hydrate(&mut self, entries: Vec<HistoryEntry>);
}

/// In-memory history store.
pub struct HistoryStore {
    entries: Vec<HistoryEntry>,
    notifier: ChangeNotifier,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
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

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryStoreTrait for HistoryStore {
    /// Records a visit. An existing entry for `url` gets `count + 1` and a
    /// fresh `visited_at`, keeping its id, position, title and favicon;
    /// otherwise a new entry is appended with `count = 1`.
    /// Returns the entry's ID.
    fn add_entry(&mut self, url: &str, title: &str, favicon: Option<&str>) -> String {
        let id = match self.entries.iter_mut().find(|e| e.url == url) {
            Some(entry) => {
                entry.count += 1;
                entry.visited_at = now_ms();
                entry.id.clone()
            }
            None => {
                let id = Uuid::new_v4().to_string();
                self.entries.push(HistoryEntry {
                    id: id.clone(),
                    url: url.to_string(),
                    title: title.to_string(),
                    favicon: favicon.map(str::to_string),
                    visited_at: now_ms(),
                    count: 1,
                });
                id
            }
        };
        self.notifier.notify();
        id
    }

    /// Removes a single entry; unknown ids leave state unchanged.
    fn remove_entry(&mut self, id: &str) {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        if self.entries.len() != before {
            self.notifier.notify();
        }
    }

    /// Removes every entry.
    fn clear_history(&mut self) {
        self.entries.clear();
        self.notifier.notify();
    }

    /// First entry whose URL equals `url` exactly.
    fn get_history_for_url(&self, url: &str) -> Option<&HistoryEntry> {
        self.entries.iter().find(|e| e.url == url)
    }

    /// Case-insensitive substring match against title or URL.
    fn search_history(&self, query: &str) -> Vec<&HistoryEntry> {
        let lower = query.to_lowercase();
        self.entries
            .iter()
            .filter(|e| {
                e.title.to_lowercase().contains(&lower) || e.url.to_lowercase().contains(&lower)
            })
            .collect()
    }

    /// Up to `limit` entries, most recent first. The sort is stable, so
    /// entries sharing a timestamp keep their relative order, and it runs on
    /// a copy; the underlying collection is not reordered.
    fn get_recent_history(&self, limit: usize) -> Vec<&HistoryEntry> {
        let mut recent: Vec<&HistoryEntry> = self.entries.iter().collect();
        recent.sort_by(|a, b| b.visited_at.cmp(&a.visited_at));
        recent.truncate(limit);
        recent
    }

    fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Replaces the entire collection with the persisted one.
    fn hydrate(&mut self, entries: Vec<HistoryEntry>) {
        self.entries = entries;
        self.notifier.notify();
    }
}

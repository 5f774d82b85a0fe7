//! App core for PocketBrowser.
//!
//! Groups the four state stores and pairs them with the persistence service.
//! One `App` exists per process; tests construct their own over
//! `MemoryStorage`. The UI layer drives `startup` once, `save` on its
//! debounce/interval triggers, and `shutdown` when backgrounded.

use std::path::PathBuf;

use crate::services::persistence::PersistenceService;
use crate::services::storage::{FileStorage, StorageBackend};
use crate::stores::bookmark_store::{BookmarkStore, BookmarkStoreTrait};
use crate::stores::history_store::{HistoryStore, HistoryStoreTrait};
use crate::stores::settings_store::{SettingsStore, SettingsStoreTrait};
use crate::stores::tab_store::{TabStore, TabStoreTrait};

/// The four state stores, one instance each. Passed by reference to
/// consumers; no ambient singletons.
pub struct AppStores {
    pub tabs: TabStore,
    pub settings: SettingsStore,
    pub bookmarks: BookmarkStore,
    pub history: HistoryStore,
}

impl AppStores {
    pub fn new() -> Self {
        Self {
            tabs: TabStore::new(),
            settings: SettingsStore::new(),
            bookmarks: BookmarkStore::new(),
            history: HistoryStore::new(),
        }
    }

    /// Returns every store to its initial state: one default tab, default
    /// settings, no bookmarks, no history.
    pub fn reset(&mut self) {
        self.tabs = TabStore::new();
        self.settings.reset_settings();
        self.bookmarks.hydrate(Vec::new());
        self.history.clear_history();
    }
}

impl Default for AppStores {
    fn default() -> Self {
        Self::new()
    }
}

/// Central application struct: stores plus persistence.
pub struct App<S: StorageBackend> {
    pub stores: AppStores,
    pub persistence: PersistenceService<S>,
}

impl App<FileStorage> {
    /// Opens an app persisting under `data_dir`.
    pub fn open(data_dir: impl Into<PathBuf>) -> Self {
        Self::new(FileStorage::new(data_dir))
    }
}

impl<S: StorageBackend> App<S> {
    pub fn new(storage: S) -> Self {
        Self {
            stores: AppStores::new(),
            persistence: PersistenceService::new(storage),
        }
    }

    /// Startup sequence: hydrate all stores from storage.
    pub async fn startup(&mut self) {
        self.persistence.initialize_app(&mut self.stores).await;
    }

    /// Persists current snapshots of all four stores.
    pub async fn save(&self) {
        self.persistence.save_app_state(&self.stores).await;
    }

    /// Shutdown sequence: one final save.
    pub async fn shutdown(&self) {
        self.save().await;
    }

    /// Removes the persisted records and resets the in-memory stores, the
    /// combination the settings screen's "clear data" action performs.
    pub async fn clear_all_data(&mut self) {
        self.persistence.clear_app_data().await;
        self.stores.reset();
    }
}

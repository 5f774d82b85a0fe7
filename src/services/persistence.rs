//! Persistence service for PocketBrowser.
//!
//! Serializes the four store snapshots to durable key-value storage and
//! hydrates them back at startup. Each record is independent: a missing or
//! malformed record is logged and skipped without affecting the other three.
//! Nothing here surfaces an error to the caller; a save or load either
//! completes or is logged, and the app keeps running on in-memory state.

use serde::de::DeserializeOwned;

use crate::app::AppStores;
use crate::services::storage::StorageBackend;
use crate::stores::bookmark_store::BookmarkStoreTrait;
use crate::stores::history_store::HistoryStoreTrait;
use crate::stores::settings_store::SettingsStoreTrait;
use crate::stores::tab_store::TabStoreTrait;
use crate::types::errors::StorageError;

/// Storage keys for the four persisted records.
pub const KEY_BROWSER_STATE: &str = "browser_state";
pub const KEY_SETTINGS: &str = "browser_settings";
pub const KEY_BOOKMARKS: &str = "bookmarks";
pub const KEY_HISTORY: &str = "history";

/// Persistence service generic over the storage backend.
pub struct PersistenceService<S: StorageBackend> {
    storage: S,
}

impl<S: StorageBackend> PersistenceService<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Startup hydration: reads the four records concurrently and pushes
    /// each parsed payload into its store. Absent records are normal (first
    /// run); read and parse failures are logged per record and skipped.
    pub async fn initialize_app(&self, stores: &mut AppStores) {
        let (browser_state, settings, bookmarks, history) = tokio::join!(
            self.storage.get(KEY_BROWSER_STATE),
            self.storage.get(KEY_SETTINGS),
            self.storage.get(KEY_BOOKMARKS),
            self.storage.get(KEY_HISTORY),
        );

        if let Some(snapshot) = parse_record(KEY_BROWSER_STATE, browser_state) {
            stores.tabs.hydrate(snapshot);
        }
        if let Some(patch) = parse_record(KEY_SETTINGS, settings) {
            stores.settings.hydrate(patch);
        }
        if let Some(bookmarks) = parse_record(KEY_BOOKMARKS, bookmarks) {
            stores.bookmarks.hydrate(bookmarks);
        }
        if let Some(entries) = parse_record(KEY_HISTORY, history) {
            stores.history.hydrate(entries);
        }
    }

    /// Writes full snapshots of all four stores concurrently. Last write
    /// wins per key, so overlapping saves (periodic timer plus navigation
    /// debounce) are safe. Failures are logged, never returned.
    pub async fn save_app_state(&self, stores: &AppStores) {
        let browser_state = serde_json::to_string(&stores.tabs.snapshot());
        let settings = serde_json::to_string(stores.settings.settings());
        let bookmarks = serde_json::to_string(stores.bookmarks.bookmarks());
        let history = serde_json::to_string(stores.history.entries());

        let (a, b, c, d) = tokio::join!(
            self.write_record(KEY_BROWSER_STATE, browser_state),
            self.write_record(KEY_SETTINGS, settings),
            self.write_record(KEY_BOOKMARKS, bookmarks),
            self.write_record(KEY_HISTORY, history),
        );

        for result in [a, b, c, d] {
            if let Err(e) = result {
                log::error!("Failed to save app state: {}", e);
            }
        }
    }

    /// Removes all four persisted records. In-memory store state is not
    /// touched; callers combine this with explicit store resets.
    pub async fn clear_app_data(&self) {
        let (a, b, c, d) = tokio::join!(
            self.storage.remove(KEY_BROWSER_STATE),
            self.storage.remove(KEY_SETTINGS),
            self.storage.remove(KEY_BOOKMARKS),
            self.storage.remove(KEY_HISTORY),
        );

        for result in [a, b, c, d] {
            if let Err(e) = result {
                log::error!("Failed to clear app data: {}", e);
            }
        }
    }

    async fn write_record(
        &self,
        key: &str,
        payload: Result<String, serde_json::Error>,
    ) -> Result<(), StorageError> {
        let json = payload.map_err(|e| {
            StorageError::Serialization(format!("Failed to serialize record '{}': {}", key, e))
        })?;
        self.storage.set(key, &json).await
    }
}

/// Unwraps one record read: `None` when the record is absent, unreadable or
/// malformed, logging the latter two. Failure of one record must not block
/// the other three, so this never propagates.
fn parse_record<T: DeserializeOwned>(
    key: &str,
    read: Result<Option<String>, StorageError>,
) -> Option<T> {
    let raw = match read {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            log::warn!("Failed to read persisted record '{}': {}", key, e);
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Failed to restore record '{}': {}", key, e);
            None
        }
    }
}

// PocketBrowser state stores
// Each store exclusively owns one collection (tabs, bookmarks, history,
// settings) and is its sole mutator. Stores notify subscribers after every
// successful mutation; the UI layer re-renders from the new snapshot.

pub mod bookmark_store;
pub mod history_store;
pub mod settings_store;
pub mod subscribers;
pub mod tab_store;

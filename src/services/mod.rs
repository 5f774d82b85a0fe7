// PocketBrowser services
// Persistence of store snapshots to durable key-value storage.

pub mod persistence;
pub mod storage;

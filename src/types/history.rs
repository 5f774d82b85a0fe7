use serde::{Deserialize, Serialize};

/// Represents a single history entry for a visited URL.
///
/// The history store keeps at most one entry per URL; repeat visits bump
/// `count` and refresh `visited_at` (UNIX milliseconds) in place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: String,
    pub url: String,
    pub title: String,
    pub favicon: Option<String>,
    pub visited_at: i64,
    pub count: u32,
}

use serde::{Deserialize, Serialize};

/// Represents a saved bookmark.
///
/// `created_at` is a UNIX timestamp in milliseconds. Bookmarks are never
/// deduplicated; two bookmarks may point at the same URL.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub id: String,
    pub title: String,
    pub url: String,
    pub favicon: Option<String>,
    pub created_at: i64,
}

/// Partial update merged into a bookmark.
///
/// `favicon` is doubly optional so a patch can clear it.
#[derive(Debug, Clone, Default)]
pub struct BookmarkPatch {
    pub title: Option<String>,
    pub url: Option<String>,
    pub favicon: Option<Option<String>>,
}

impl BookmarkPatch {
    /// Copies every present field onto `bookmark`.
    pub fn apply(&self, bookmark: &mut Bookmark) {
        if let Some(title) = &self.title {
            bookmark.title = title.clone();
        }
        if let Some(url) = &self.url {
            bookmark.url = url.clone();
        }
        if let Some(favicon) = &self.favicon {
            bookmark.favicon = favicon.clone();
        }
    }
}

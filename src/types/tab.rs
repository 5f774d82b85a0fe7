use serde::{Deserialize, Serialize};

/// Title given to every freshly created tab until the page reports its own.
pub const DEFAULT_TAB_TITLE: &str = "New Tab";

/// Represents a browser tab with its current navigation state.
///
/// `can_go_back`, `can_go_forward`, `loading` and `error` mirror what the
/// platform web-view reports; the store never derives them itself.
/// Field names serialize in camelCase so records written by earlier builds
/// of the app hydrate unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Tab {
    pub id: String,
    pub url: String,
    pub title: String,
    pub can_go_back: bool,
    pub can_go_forward: bool,
    pub loading: bool,
    pub error: Option<String>,
}

/// Partial update merged into a tab, typically fed by web-view events.
///
/// `error` is doubly optional: `None` leaves the field alone, `Some(None)`
/// clears it (a new navigation wiping the previous failure).
#[derive(Debug, Clone, Default)]
pub struct TabPatch {
    pub url: Option<String>,
    pub title: Option<String>,
    pub can_go_back: Option<bool>,
    pub can_go_forward: Option<bool>,
    pub loading: Option<bool>,
    pub error: Option<Option<String>>,
}

impl TabPatch {
    /// Copies every present field onto `tab`, leaving absent fields untouched.
    pub fn apply(&self, tab: &mut Tab) {
        if let Some(url) = &self.url {
            tab.url = url.clone();
        }
        if let Some(title) = &self.title {
            tab.title = title.clone();
        }
        if let Some(back) = self.can_go_back {
            tab.can_go_back = back;
        }
        if let Some(forward) = self.can_go_forward {
            tab.can_go_forward = forward;
        }
        if let Some(loading) = self.loading {
            tab.loading = loading;
        }
        if let Some(error) = &self.error {
            tab.error = error.clone();
        }
    }
}

/// Persisted shape of the tab store: `{ tabs, activeTabId }`.
///
/// `tabs` is optional so a payload that omits the list leaves the current
/// tabs in place, while an explicitly empty list replaces them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BrowserStateSnapshot {
    #[serde(default)]
    pub tabs: Option<Vec<Tab>>,
    #[serde(default)]
    pub active_tab_id: Option<String>,
}

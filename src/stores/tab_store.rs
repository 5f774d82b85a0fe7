//! Tab store for PocketBrowser.
//!
//! Owns the ordered list of open tabs and the active-tab pointer. Two
//! invariants hold after every mutation: the list is never empty, and the
//! pointer, when set, references an existing tab. Unknown ids are silent
//! no-ops rather than errors, since a UI action can race tab removal from
//! another trigger.

use uuid::Uuid;

use crate::stores::subscribers::{ChangeNotifier, SubscriptionId};
use crate::types::settings::DEFAULT_HOME_URL;
use crate::types::tab::{BrowserStateSnapshot, Tab, TabPatch, DEFAULT_TAB_TITLE};

/// Trait defining the tab store interface.
pub trait TabStoreTrait {
    fn add_tab(&mut self, url: Option<&str>) -> String;
    fn remove_tab(&mut self, id: &str);
    fn set_active_tab(&mut self, id: &str);
    fn update_tab(&mut self, id: &str, patch: TabPatch);
    fn close_all_tabs(&mut self);
    fn hydrate(&mut self, snapshot: BrowserStateSnapshot);
    fn tabs(&self) -> &[Tab];
    fn get_tab(&self, id: &str) -> Option<&Tab>;
    fn active_tab_id(&self) -> Option<&str>;
    fn active_tab(&self) -> Option<&Tab>;
    fn tab_count(&self) -> usize;
    fn snapshot(&self) -> BrowserStateSnapshot;
}

/// In-memory tab store.
pub struct TabStore {
    tabs: Vec<Tab>,
    active_tab_id: Option<String>,
    home_url: String,
    notifier: ChangeNotifier,
}

impl TabStore {
    /// Creates a store holding one default tab, which is active.
    pub fn new() -> Self {
        Self::with_home_url(DEFAULT_HOME_URL)
    }

    /// Creates a store whose default tabs open `home_url`.
    pub fn with_home_url(home_url: &str) -> Self {
        let tab = Self::default_tab(home_url);
        let active = tab.id.clone();
        Self {
            tabs: vec![tab],
            active_tab_id: Some(active),
            home_url: home_url.to_string(),
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

    fn default_tab(url: &str) -> Tab {
        Tab {
            id: Uuid::new_v4().to_string(),
            url: url.to_string(),
            title: DEFAULT_TAB_TITLE.to_string(),
            can_go_back: false,
            can_go_forward: false,
            loading: false,
            error: None,
        }
    }

    fn new_default_tab(&self, url: Option<&str>) -> Tab {
        Self::default_tab(url.unwrap_or(&self.home_url))
    }

    fn find_tab_index(&self, id: &str) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == id)
    }

    /// Invariant check run at the end of every mutating operation: the tab
    /// list is non-empty and the active pointer, when set, resolves.
    fn check_invariants(&self) {
        debug_assert!(!self.tabs.is_empty(), "tab list must never be empty");
        if let Some(active) = &self.active_tab_id {
            debug_assert!(
                self.tabs.iter().any(|t| &t.id == active),
                "active tab pointer must reference an existing tab"
            );
        }
    }
}

impl Default for TabStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TabStoreTrait for TabStore {
    /// Creates a new tab at the end of the order and makes it active.
    /// Returns the new tab's ID. Never fails.
    fn add_tab(&mut self, url: Option<&str>) -> String {
        let tab = self.new_default_tab(url);
        let id = tab.id.clone();
        self.tabs.push(tab);
        self.active_tab_id = Some(id.clone());
        self.check_invariants();
        self.notifier.notify();
        id
    }

    /// Removes a tab. Closing the last tab replaces it with a fresh default
    /// tab; closing the active tab activates the last remaining tab in order.
    fn remove_tab(&mut self, id: &str) {
        let before = self.tabs.len();
        self.tabs.retain(|t| t.id != id);
        if self.tabs.len() == before {
            return;
        }

        if self.tabs.is_empty() {
            let tab = self.new_default_tab(None);
            self.active_tab_id = Some(tab.id.clone());
            self.tabs.push(tab);
        } else if self.active_tab_id.as_deref() == Some(id) {
            self.active_tab_id = self.tabs.last().map(|t| t.id.clone());
        }

        self.check_invariants();
        self.notifier.notify();
    }

    /// Activates the given tab if it exists; unknown ids leave state unchanged.
    fn set_active_tab(&mut self, id: &str) {
        if self.find_tab_index(id).is_none() {
            return;
        }
        self.active_tab_id = Some(id.to_string());
        self.check_invariants();
        self.notifier.notify();
    }

    /// Merges `patch` into the matching tab; unknown ids leave state unchanged.
    fn update_tab(&mut self, id: &str, patch: TabPatch) {
        let tab = match self.tabs.iter_mut().find(|t| t.id == id) {
            Some(tab) => tab,
            None => return,
        };
        patch.apply(tab);
        self.check_invariants();
        self.notifier.notify();
    }

    /// Replaces all tabs with one fresh default tab and clears the active
    /// pointer; readers fall back to the first tab until it is set again.
    fn close_all_tabs(&mut self) {
        self.tabs = vec![self.new_default_tab(None)];
        self.active_tab_id = None;
        self.check_invariants();
        self.notifier.notify();
    }

    /// Restores persisted state. An empty restored tab list is replaced with
    /// one default tab; a dangling active pointer resets to the first tab.
    fn hydrate(&mut self, snapshot: BrowserStateSnapshot) {
        if let Some(tabs) = snapshot.tabs {
            self.tabs = tabs;
        }
        if let Some(active) = snapshot.active_tab_id {
            self.active_tab_id = Some(active);
        }

        if self.tabs.is_empty() {
            self.tabs.push(self.new_default_tab(None));
        }
        let resolves = self
            .active_tab_id
            .as_ref()
            .is_some_and(|id| self.tabs.iter().any(|t| &t.id == id));
        if !resolves {
            self.active_tab_id = Some(self.tabs[0].id.clone());
        }

        self.check_invariants();
        self.notifier.notify();
    }

    fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    fn get_tab(&self, id: &str) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == id)
    }

    fn active_tab_id(&self) -> Option<&str> {
        self.active_tab_id.as_deref()
    }

    /// The tab the pointer resolves to, falling back to the first tab when
    /// the pointer is cleared.
    fn active_tab(&self) -> Option<&Tab> {
        self.active_tab_id
            .as_ref()
            .and_then(|id| self.tabs.iter().find(|t| &t.id == id))
            .or_else(|| self.tabs.first())
    }

    fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    /// The serializable subset written to durable storage.
    fn snapshot(&self) -> BrowserStateSnapshot {
        BrowserStateSnapshot {
            tabs: Some(self.tabs.clone()),
            active_tab_id: self.active_tab_id.clone(),
        }
    }
}

use serde::{Deserialize, Serialize};

/// Home page used for new tabs until the user configures their own.
pub const DEFAULT_HOME_URL: &str = "https://www.google.com";

/// Search providers the address bar can route queries to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SearchEngine {
    Google,
    DuckDuckGo,
    Bing,
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::Google
    }
}

impl SearchEngine {
    /// The provider's landing page.
    pub fn home_url(&self) -> &'static str {
        match self {
            Self::Google => "https://www.google.com",
            Self::DuckDuckGo => "https://duckduckgo.com",
            Self::Bing => "https://www.bing.com",
        }
    }

    /// Builds a search-results URL with `query` percent-encoded.
    pub fn query_url(&self, query: &str) -> String {
        let q = urlencoding::encode(query);
        match self {
            Self::Google => format!("https://www.google.com/search?q={}", q),
            Self::DuckDuckGo => format!("https://duckduckgo.com/?q={}", q),
            Self::Bing => format!("https://www.bing.com/search?q={}", q),
        }
    }
}

/// Browser configuration record. Exactly one instance exists per process;
/// it is never deleted, only updated or reset.
///
/// An empty `user_agent` means "use the platform default".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BrowserSettings {
    pub home_url: String,
    pub search_engine: SearchEngine,
    #[serde(rename = "enableJavaScript")]
    pub enable_javascript: bool,
    pub enable_cookies: bool,
    pub block_popups: bool,
    pub user_agent: String,
    pub dark_mode: bool,
}

impl Default for BrowserSettings {
    fn default() -> Self {
        Self {
            home_url: DEFAULT_HOME_URL.to_string(),
            search_engine: SearchEngine::default(),
            enable_javascript: true,
            enable_cookies: true,
            block_popups: true,
            user_agent: String::new(),
            dark_mode: true,
        }
    }
}

/// Partial settings record: present fields overwrite, absent fields keep
/// their current value. Deserializing a full persisted record through this
/// type is how hydration tolerates payloads written by older builds that
/// lack newer fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsPatch {
    pub home_url: Option<String>,
    pub search_engine: Option<SearchEngine>,
    #[serde(rename = "enableJavaScript")]
    pub enable_javascript: Option<bool>,
    pub enable_cookies: Option<bool>,
    pub block_popups: Option<bool>,
    pub user_agent: Option<String>,
    pub dark_mode: Option<bool>,
}

impl SettingsPatch {
    /// Copies every present field onto `settings`.
    pub fn apply(&self, settings: &mut BrowserSettings) {
        if let Some(home_url) = &self.home_url {
            settings.home_url = home_url.clone();
        }
        if let Some(engine) = self.search_engine {
            settings.search_engine = engine;
        }
        if let Some(js) = self.enable_javascript {
            settings.enable_javascript = js;
        }
        if let Some(cookies) = self.enable_cookies {
            settings.enable_cookies = cookies;
        }
        if let Some(popups) = self.block_popups {
            settings.block_popups = popups;
        }
        if let Some(agent) = &self.user_agent {
            settings.user_agent = agent.clone();
        }
        if let Some(dark) = self.dark_mode {
            settings.dark_mode = dark;
        }
    }
}

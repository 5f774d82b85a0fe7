use pocketbrowser::stores::settings_store::{SettingsStore, SettingsStoreTrait};
use pocketbrowser::types::settings::{BrowserSettings, SearchEngine, SettingsPatch};

#[test]
fn test_default_record() {
    let store = SettingsStore::new();
    let settings = store.settings();

    assert_eq!(settings.home_url, "https://www.google.com");
    assert_eq!(settings.search_engine, SearchEngine::Google);
    assert!(settings.enable_javascript);
    assert!(settings.enable_cookies);
    assert!(settings.block_popups);
    assert!(settings.dark_mode);
    assert_eq!(settings.user_agent, "");
}

#[test]
fn test_update_single_setting() {
    let mut store = SettingsStore::new();
    store
        .update_setting("darkMode", serde_json::Value::Bool(false))
        .unwrap();
    assert!(!store.settings().dark_mode);

    store
        .update_setting("searchEngine", serde_json::json!("duckduckgo"))
        .unwrap();
    assert_eq!(store.settings().search_engine, SearchEngine::DuckDuckGo);
}

#[test]
fn test_update_setting_unknown_key_is_error() {
    let mut store = SettingsStore::new();
    let result = store.update_setting("nonexistent", serde_json::Value::Bool(true));
    assert!(result.is_err());
    assert_eq!(*store.settings(), BrowserSettings::default());
}

#[test]
fn test_update_setting_wrong_type_is_error() {
    let mut store = SettingsStore::new();
    let result = store.update_setting("darkMode", serde_json::json!("not_a_bool"));
    assert!(result.is_err());
    // Failed update leaves the record untouched
    assert!(store.settings().dark_mode);
}

#[test]
fn test_update_setting_empty_key_is_error() {
    let mut store = SettingsStore::new();
    assert!(store.update_setting("", serde_json::Value::Bool(true)).is_err());
}

#[test]
fn test_update_settings_merges_multiple_fields() {
    let mut store = SettingsStore::new();
    store.update_settings(SettingsPatch {
        home_url: Some("https://duckduckgo.com".to_string()),
        search_engine: Some(SearchEngine::DuckDuckGo),
        dark_mode: Some(false),
        ..Default::default()
    });

    let settings = store.settings();
    assert_eq!(settings.home_url, "https://duckduckgo.com");
    assert_eq!(settings.search_engine, SearchEngine::DuckDuckGo);
    assert!(!settings.dark_mode);
    // Fields absent from the patch keep their values
    assert!(settings.enable_javascript);
}

#[test]
fn test_reset_restores_exact_defaults() {
    let mut store = SettingsStore::new();
    store
        .update_setting("homeUrl", serde_json::json!("https://example.com"))
        .unwrap();
    store
        .update_setting("enableCookies", serde_json::Value::Bool(false))
        .unwrap();
    store
        .update_setting("userAgent", serde_json::json!("CustomAgent/1.0"))
        .unwrap();

    store.reset_settings();
    assert_eq!(*store.settings(), BrowserSettings::default());
}

#[test]
fn test_hydrate_merges_onto_defaults() {
    let mut store = SettingsStore::new();
    store.hydrate(SettingsPatch {
        dark_mode: Some(false),
        user_agent: Some("SavedAgent/2.0".to_string()),
        ..Default::default()
    });

    let settings = store.settings();
    assert!(!settings.dark_mode);
    assert_eq!(settings.user_agent, "SavedAgent/2.0");
    // Fields missing from the persisted payload retain their defaults
    assert_eq!(settings.home_url, "https://www.google.com");
    assert!(settings.block_popups);
}

#[test]
fn test_patch_deserializes_from_partial_camel_case_payload() {
    // An older build only persisted two of the fields
    let patch: SettingsPatch =
        serde_json::from_str(r#"{"darkMode":false,"searchEngine":"bing"}"#).unwrap();
    assert_eq!(patch.dark_mode, Some(false));
    assert_eq!(patch.search_engine, Some(SearchEngine::Bing));
    assert!(patch.home_url.is_none());
}

#[test]
fn test_full_record_deserializes_as_patch() {
    let json = serde_json::to_string(&BrowserSettings::default()).unwrap();
    assert!(json.contains("\"enableJavaScript\""));

    let patch: SettingsPatch = serde_json::from_str(&json).unwrap();
    assert_eq!(patch.enable_javascript, Some(true));
    assert_eq!(patch.search_engine, Some(SearchEngine::Google));
}

#[test]
fn test_search_engine_urls() {
    assert_eq!(SearchEngine::Google.home_url(), "https://www.google.com");
    assert_eq!(
        SearchEngine::Google.query_url("hello world"),
        "https://www.google.com/search?q=hello%20world"
    );
    assert_eq!(
        SearchEngine::DuckDuckGo.query_url("rust"),
        "https://duckduckgo.com/?q=rust"
    );
    assert!(SearchEngine::Bing.query_url("a&b").contains("a%26b"));
}

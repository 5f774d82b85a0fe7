//! Settings store for PocketBrowser.
//!
//! Owns the single configuration record. The record always exists: it is
//! updated, merged onto, or reset, never deleted.

use crate::stores::subscribers::{ChangeNotifier, SubscriptionId};
use crate::types::errors::SettingsError;
use crate::types::settings::{BrowserSettings, SettingsPatch};

/// Trait defining the settings store interface.
pub trait SettingsStoreTrait {
    fn settings(&self) -> &BrowserSettings;
    fn update_setting(&mut self, key: &str, value: serde_json::Value)
        -> Result<(), SettingsError>;
    fn update_settings(&mut self, patch: SettingsPatch);
    fn reset_settings(&mut self);
    fn hydrate(&mut self, patch: SettingsPatch);
}

/// In-memory settings store, starting from the default record.
pub struct SettingsStore {
    settings: BrowserSettings,
    notifier: ChangeNotifier,
}

impl SettingsStore {
    pub fn new() -> Self {
        Self {
            settings: BrowserSettings::default(),
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
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsStoreTrait for SettingsStore {
    fn settings(&self) -> &BrowserSettings {
        &self.settings
    }

    /// Sets exactly one field by its wire name (e.g. `"darkMode"`).
    ///
    /// Serializes the current record to a JSON object, replaces the keyed
    /// entry, then deserializes back so the value is validated against the
    /// field's type.
    fn update_setting(
        &mut self,
        key: &str,
        value: serde_json::Value,
    ) -> Result<(), SettingsError> {
        if key.is_empty() {
            return Err(SettingsError::InvalidKey("Key cannot be empty".to_string()));
        }

        let mut json_value = serde_json::to_value(&self.settings).map_err(|e| {
            SettingsError::InvalidValue(format!("Failed to serialize settings: {}", e))
        })?;

        match json_value {
            serde_json::Value::Object(ref mut map) => {
                if !map.contains_key(key) {
                    return Err(SettingsError::InvalidKey(format!(
                        "Key '{}' not found in settings",
                        key
                    )));
                }
                map.insert(key.to_string(), value);
            }
            _ => {
                return Err(SettingsError::InvalidValue(
                    "Settings did not serialize to an object".to_string(),
                ));
            }
        }

        let new_settings: BrowserSettings = serde_json::from_value(json_value)
            .map_err(|e| SettingsError::InvalidValue(format!("Invalid value for key '{}': {}", key, e)))?;

        self.settings = new_settings;
        self.notifier.notify();
        Ok(())
    }

    /// Merges every present field of `patch` into the record.
    fn update_settings(&mut self, patch: SettingsPatch) {
        patch.apply(&mut self.settings);
        self.notifier.notify();
    }

    /// Replaces the record with the fixed default.
    fn reset_settings(&mut self) {
        self.settings = BrowserSettings::default();
        self.notifier.notify();
    }

    /// Merges persisted fields onto the current record; fields missing from
    /// the payload keep their current (default) values.
    fn hydrate(&mut self, patch: SettingsPatch) {
        patch.apply(&mut self.settings);
        self.notifier.notify();
    }
}

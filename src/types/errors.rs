use std::fmt;

// === StorageError ===

/// Errors produced by a storage backend.
#[derive(Debug)]
pub enum StorageError {
    /// An I/O error occurred while reading, writing or removing a record.
    Io(String),
    /// Failed to serialize or deserialize a persisted record.
    Serialization(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Io(msg) => write!(f, "Storage I/O error: {}", msg),
            StorageError::Serialization(msg) => {
                write!(f, "Storage serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for StorageError {}

// === SettingsError ===

/// Errors related to settings updates.
#[derive(Debug)]
pub enum SettingsError {
    /// The provided settings key does not name a field.
    InvalidKey(String),
    /// The provided value does not fit the field's type.
    InvalidValue(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::InvalidKey(key) => write!(f, "Invalid settings key: {}", key),
            SettingsError::InvalidValue(msg) => {
                write!(f, "Invalid settings value: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}

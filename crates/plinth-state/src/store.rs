//! Key-value persistence abstraction with fail-soft JSON hydration.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Missing key | first run | default value |
//! | Corrupt JSON | manual edits, version skew | default value, debug log |
//! | Serialize error | non-string map keys etc. | write skipped, warn log |

use std::collections::HashMap;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Storage key for the sidebar slice.
pub const SIDEBAR_STATE_KEY: &str = "sidebar_state";
/// Storage key for the theme slice.
pub const THEME_STATE_KEY: &str = "theme_state";

/// Host-provided key-value persistence (browser local storage, a file, or a
/// test map).
pub trait StateStore {
    /// Read the raw value for a key, if present.
    fn read(&self, key: &str) -> Option<String>;
    /// Write the raw value for a key.
    fn write(&mut self, key: &str, value: &str);
}

/// In-process store for tests and headless hosts.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// Read and decode a JSON payload, falling back to the default on any
/// failure.
pub fn load_or_default<T>(store: &dyn StateStore, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    match store.read(key) {
        Some(raw) => match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                debug!(key, %err, "corrupt persisted state, using default");
                T::default()
            }
        },
        None => T::default(),
    }
}

/// Encode and write a JSON payload; failures are logged, never propagated.
pub fn persist<T: Serialize>(store: &mut dyn StateStore, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => store.write(key, &raw),
        Err(err) => warn!(key, %err, "failed to encode persisted state"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Default, Serialize, Deserialize)]
    struct Payload {
        is_collapsed: bool,
    }

    #[test]
    fn round_trip() {
        let mut store = MemoryStore::new();
        persist(&mut store, SIDEBAR_STATE_KEY, &Payload { is_collapsed: true });
        let back: Payload = load_or_default(&store, SIDEBAR_STATE_KEY);
        assert!(back.is_collapsed);
    }

    #[test]
    fn missing_key_yields_default() {
        let store = MemoryStore::new();
        let payload: Payload = load_or_default(&store, SIDEBAR_STATE_KEY);
        assert_eq!(payload, Payload::default());
    }

    #[test]
    fn corrupt_json_yields_default() {
        let mut store = MemoryStore::new();
        store.write(SIDEBAR_STATE_KEY, "{not json");
        let payload: Payload = load_or_default(&store, SIDEBAR_STATE_KEY);
        assert_eq!(payload, Payload::default());
    }

    #[test]
    fn wrong_shape_yields_default() {
        let mut store = MemoryStore::new();
        store.write(SIDEBAR_STATE_KEY, "{\"is_collapsed\": \"yes\"}");
        let payload: Payload = load_or_default(&store, SIDEBAR_STATE_KEY);
        assert!(!payload.is_collapsed);
    }
}

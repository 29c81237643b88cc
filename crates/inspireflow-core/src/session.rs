//! Session-scoped key-value store.
//!
//! Stands in for browser sessionStorage: a string key-value store that
//! lives for the duration of the app session (the process) and is shared
//! by every page. The cooldown gate writes its unlock timestamp here on
//! trigger and reads it back on every page mount, so a lock started on
//! the random page is still honored after navigating away and back.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

/// Cloneable handle to a session-scoped string key-value store.
///
/// Clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl SessionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the value for `key`, if present
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    /// Set `key` to `value`, replacing any previous value
    pub fn set(&self, key: &str, value: impl Into<String>) {
        self.entries.write().insert(key.to_string(), value.into());
    }

    /// Remove `key` from the store
    pub fn remove(&self, key: &str) {
        self.entries.write().remove(key);
    }
}

//! In-memory client store double

use async_trait::async_trait;
use beacon_core::effects::ClientStoreEffects;
use beacon_core::{BeaconError, KEY_ACTIVE_ACCOUNT_ID};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Client store double backed by a hash map
#[derive(Clone, Default)]
pub struct MemoryClientStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
    fail_reads: bool,
}

impl MemoryClientStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store already holding the active account id.
    pub fn with_account(account_id: &str) -> Self {
        let store = Self::new();
        store.insert(KEY_ACTIVE_ACCOUNT_ID, account_id);
        store
    }

    /// A store whose reads always fail, for degradation tests.
    pub fn failing() -> Self {
        Self {
            entries: Arc::default(),
            fail_reads: true,
        }
    }

    /// Insert or replace a value.
    pub fn insert(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    /// Remove a value.
    pub fn remove(&self, key: &str) {
        self.entries.lock().unwrap().remove(key);
    }
}

#[async_trait]
impl ClientStoreEffects for MemoryClientStore {
    async fn get(&self, key: &str) -> Result<Option<String>, BeaconError> {
        if self.fail_reads {
            return Err(BeaconError::store("memory store set to fail"));
        }
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }
}

//! Filesystem-backed client store
//!
//! Read-only key lookup over files under a base directory, one value per
//! key. This is the desktop stand-in for the browser's local storage: the
//! wallet shell persists the active account id here and the façades re-read
//! it on every call.

use async_trait::async_trait;
use beacon_core::effects::ClientStoreEffects;
use beacon_core::BeaconError;
use std::path::PathBuf;
use tokio::fs;

/// Filesystem-based client store handler for production use
#[derive(Debug, Clone)]
pub struct FilesystemClientStore {
    /// Base directory holding one file per key
    base_path: PathBuf,
}

impl FilesystemClientStore {
    /// Create a store rooted at the given directory.
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        // Keys may contain separators (`wallet:active-account-id`); flatten
        // them so every key maps to a single file in the base directory.
        let name: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
            .collect();
        self.base_path.join(format!("{}.dat", name))
    }
}

#[async_trait]
impl ClientStoreEffects for FilesystemClientStore {
    async fn get(&self, key: &str) -> Result<Option<String>, BeaconError> {
        if key.is_empty() {
            return Err(BeaconError::invalid("Key cannot be empty"));
        }

        let path = self.path_for(key);
        match fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value.trim_end().to_string())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(BeaconError::store(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use beacon_core::KEY_ACTIVE_ACCOUNT_ID;

    #[tokio::test]
    async fn missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilesystemClientStore::new(dir.path().to_path_buf());
        assert_eq!(store.get(KEY_ACTIVE_ACCOUNT_ID).await.unwrap(), None);
    }

    #[tokio::test]
    async fn reads_persisted_value() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilesystemClientStore::new(dir.path().to_path_buf());
        let path = store.path_for(KEY_ACTIVE_ACCOUNT_ID);
        std::fs::write(&path, "alice.near\n").unwrap();
        assert_eq!(
            store.get(KEY_ACTIVE_ACCOUNT_ID).await.unwrap().as_deref(),
            Some("alice.near")
        );
    }

    #[tokio::test]
    async fn empty_key_is_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilesystemClientStore::new(dir.path().to_path_buf());
        assert!(store.get("").await.is_err());
    }
}

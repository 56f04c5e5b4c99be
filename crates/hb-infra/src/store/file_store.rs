//! File-based key-value store
//!
//! Durable implementation of the store port, persisting one JSON file per
//! key under the application data directory. This is the client-resident
//! medium that carries entity collections, the search handoff, and the
//! session across independent page loads.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use hb_core::ports::KeyValueStorePort;

pub const DEFAULT_STORE_DIR: &str = ".hotel_store";

pub struct FileKeyValueStore {
    base_dir: PathBuf,
}

impl FileKeyValueStore {
    /// Create a store rooted at `base_dir`.
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Create a store under the default directory name inside `parent`.
    pub fn with_defaults(parent: PathBuf) -> Self {
        Self {
            base_dir: parent.join(DEFAULT_STORE_DIR),
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{}.json", key))
    }

    async fn ensure_base_dir(&self) -> anyhow::Result<()> {
        fs::create_dir_all(&self.base_dir).await?;
        Ok(())
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

#[async_trait]
impl KeyValueStorePort for FileKeyValueStore {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path).await?;
        if content.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(content))
    }

    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.ensure_base_dir().await?;

        let path = self.path_for(key);
        let mut file = fs::File::create(&path)
            .await
            .map_err(|e| anyhow::anyhow!("failed to create store file for '{}': {}", key, e))?;

        file.write_all(value.as_bytes())
            .await
            .map_err(|e| anyhow::anyhow!("failed to write store file for '{}': {}", key, e))?;

        file.sync_all()
            .await
            .map_err(|e| anyhow::anyhow!("failed to sync store file for '{}': {}", key, e))?;

        debug!(key, bytes = value.len(), "store key written");
        Ok(())
    }

    async fn remove(&self, key: &str) -> anyhow::Result<()> {
        let path = self.path_for(key);
        if path.exists() {
            fs::remove_file(&path).await?;
            debug!(key, "store key removed");
        }
        Ok(())
    }
}

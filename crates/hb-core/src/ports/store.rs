//! Key-value store port - abstracts the durable client-local medium.
//!
//! The store survives independent page loads within the same client and
//! holds one JSON string per key. Keys are read and written independently;
//! there is no atomicity across a multi-key update.

use async_trait::async_trait;

#[async_trait]
pub trait KeyValueStorePort: Send + Sync {
    /// Read the raw value stored under `key`, if any.
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>>;

    /// Write `value` under `key`, overwriting any prior value.
    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;

    /// Remove `key` entirely. Removing an absent key is a no-op.
    async fn remove(&self, key: &str) -> anyhow::Result<()>;
}

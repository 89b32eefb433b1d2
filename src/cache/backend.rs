//! Cache Backend
//!
//! Contract the quote cache needs from a key-value store with tags.

use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::CacheStore;
use crate::error::Result;

/// Tagged key-value store holding serialized payloads.
#[async_trait]
pub trait CacheBackend: Send + Sync {
    /// Returns the payload stored under `key`, if any.
    async fn load(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`. `lifetime` of `None` keeps the entry until
    /// it is purged or evicted. Returns the store's success indicator.
    async fn save(
        &self,
        key: &str,
        value: String,
        tags: &[&str],
        lifetime: Option<Duration>,
    ) -> Result<bool>;

    /// Removes every entry carrying `tag`, returning how many were removed.
    async fn clean_by_tag(&self, tag: &str) -> Result<usize>;
}

#[async_trait]
impl CacheBackend for RwLock<CacheStore> {
    async fn load(&self, key: &str) -> Result<Option<String>> {
        // Write lock: a load touches LRU order and stats
        let mut store = self.write().await;
        Ok(store.get(key))
    }

    async fn save(
        &self,
        key: &str,
        value: String,
        tags: &[&str],
        lifetime: Option<Duration>,
    ) -> Result<bool> {
        let mut store = self.write().await;
        store.set(key.to_string(), value, tags, lifetime)?;
        Ok(true)
    }

    async fn clean_by_tag(&self, tag: &str) -> Result<usize> {
        let mut store = self.write().await;
        Ok(store.clean_by_tag(tag))
    }
}

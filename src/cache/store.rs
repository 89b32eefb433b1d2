//! Cache Store Module
//!
//! In-memory tagged store: HashMap storage with LRU capacity eviction,
//! optional per-entry lifetime and tag purges.

use std::collections::HashMap;
use std::time::Duration;

use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, LruTracker, MAX_KEY_LENGTH, MAX_VALUE_SIZE};
use crate::error::{CacheError, Result};

// == Cache Store ==
#[derive(Debug)]
pub struct CacheStore {
    entries: HashMap<String, CacheEntry>,
    lru: LruTracker,
    stats: CacheStats,
    max_entries: usize,
}

impl CacheStore {
    /// Creates a store holding at most `max_entries` entries.
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            stats: CacheStats::new(),
            max_entries,
        }
    }

    // == Set ==
    /// Stores a payload under `key`, replacing any previous entry and its tags.
    ///
    /// At capacity, the least recently used entry is evicted first.
    pub fn set(
        &mut self,
        key: String,
        value: String,
        tags: &[&str],
        lifetime: Option<Duration>,
    ) -> Result<()> {
        if key.is_empty() || key.len() > MAX_KEY_LENGTH {
            return Err(CacheError::InvalidRequest(format!(
                "Key must be between 1 and {} bytes",
                MAX_KEY_LENGTH
            )));
        }

        if value.len() > MAX_VALUE_SIZE {
            return Err(CacheError::InvalidRequest(format!(
                "Value exceeds maximum size of {} bytes",
                MAX_VALUE_SIZE
            )));
        }

        let is_overwrite = self.entries.contains_key(&key);
        if !is_overwrite && self.entries.len() >= self.max_entries {
            match self.lru.evict_oldest() {
                Some(evicted) => {
                    self.entries.remove(&evicted);
                    self.stats.record_eviction();
                }
                None => {
                    return Err(CacheError::CacheFull(
                        "Cache is full and eviction failed".to_string(),
                    ))
                }
            }
        }

        let entry = CacheEntry::new(value, tags.iter().copied(), lifetime);
        self.entries.insert(key.clone(), entry);
        self.lru.touch(&key);
        self.stats.set_total_entries(self.entries.len());

        Ok(())
    }

    // == Get ==
    /// Returns the payload under `key` if present and not expired.
    ///
    /// Expired entries are dropped and counted as misses.
    pub fn get(&mut self, key: &str) -> Option<String> {
        let live = match self.entries.get(key) {
            Some(entry) if entry.is_expired() => None,
            Some(entry) => Some(entry.value.clone()),
            None => {
                self.stats.record_miss();
                return None;
            }
        };

        match live {
            Some(value) => {
                self.stats.record_hit();
                self.lru.touch(key);
                Some(value)
            }
            None => {
                self.remove(key);
                self.stats.record_miss();
                None
            }
        }
    }

    // == Clean By Tag ==
    /// Removes every entry carrying `tag`. Returns the number removed.
    pub fn clean_by_tag(&mut self, tag: &str) -> usize {
        let tagged: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.has_tag(tag))
            .map(|(key, _)| key.clone())
            .collect();

        for key in &tagged {
            self.remove(key);
        }

        self.stats.record_purge(tagged.len());
        debug!(tag, removed = tagged.len(), "Purged tagged entries");
        tagged.len()
    }

    /// Returns current statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
        self.lru.remove(key);
        self.stats.set_total_entries(self.entries.len());
    }
}

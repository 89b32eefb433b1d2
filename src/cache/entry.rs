//! Cache Entry Module
//!
//! Stored payload with its invalidation tags and optional lifetime.

use std::collections::BTreeSet;
use std::time::Duration;

use chrono::Utc;

// == Cache Entry ==
/// A stored payload and its metadata.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// Serialized payload
    pub value: String,
    /// Invalidation tags
    pub tags: BTreeSet<String>,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: i64,
    /// Expiration timestamp (Unix milliseconds), None = lives until purged or evicted
    pub expires_at: Option<i64>,
}

impl CacheEntry {
    /// Creates an entry with the given tags and optional lifetime.
    pub fn new<I, S>(value: String, tags: I, lifetime: Option<Duration>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let now = current_timestamp_ms();
        let expires_at = lifetime
            .map(|ttl| now.saturating_add(i64::try_from(ttl.as_millis()).unwrap_or(i64::MAX)));

        Self {
            value,
            tags: tags.into_iter().map(Into::into).collect(),
            created_at: now,
            expires_at,
        }
    }

    /// Checks if the entry has expired.
    ///
    /// An entry is expired once the current time reaches its expiration time.
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires) => current_timestamp_ms() >= expires,
            None => false,
        }
    }

    /// Returns true if the entry carries `tag`.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}

/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> i64 {
    Utc::now().timestamp_millis()
}

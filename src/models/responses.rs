//! Response DTOs for the quote cache API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::{CacheStats, LoadOutcome, ServiceQuote};

/// Response body for `POST /quotes/lookup`
#[derive(Debug, Clone, Serialize)]
pub struct QuoteLookupResponse {
    /// `hit`, `miss` or `disabled`
    pub status: String,
    /// Cache key of the cart, absent when caching is disabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Cached quotes, empty unless `status` is `hit`
    pub services: Vec<ServiceQuote>,
}

impl QuoteLookupResponse {
    pub fn new(outcome: LoadOutcome, key: Option<String>) -> Self {
        let status = outcome.label().to_string();
        Self {
            status,
            key,
            services: outcome.into_services().unwrap_or_default(),
        }
    }
}

/// Response body for `PUT /quotes`
#[derive(Debug, Clone, Serialize)]
pub struct QuoteSaveResponse {
    /// False when caching is disabled
    pub saved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

/// Response body for `DELETE /cache`
#[derive(Debug, Clone, Serialize)]
pub struct PurgeResponse {
    pub tag: String,
    pub removed: usize,
}

/// Response body for `PUT /cache/state`
#[derive(Debug, Clone, Serialize)]
pub struct CacheStateResponse {
    pub cache_type: String,
    pub enabled: bool,
}

/// Response body for `GET /stats`
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub enabled: bool,
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub purged: u64,
    pub total_entries: usize,
    pub hit_rate: f64,
}

impl StatsResponse {
    pub fn new(enabled: bool, stats: &CacheStats) -> Self {
        Self {
            enabled,
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            purged: stats.purged,
            total_entries: stats.total_entries,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Response body for `GET /health`
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    /// Current timestamp in RFC 3339 format
    pub timestamp: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

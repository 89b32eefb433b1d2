//! Cache Module
//!
//! Key derivation, payload shaping and the tagged store behind the quote cache.

mod backend;
pub mod codec;
mod entry;
mod key;
mod lru;
mod manager;
mod service;
mod state;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use backend::CacheBackend;
pub use entry::CacheEntry;
pub use key::{CacheKey, CacheKeyGenerator, EligibleItemSet, MULTI_QUOTE_MARKER};
pub use lru::LruTracker;
pub use manager::{CacheManager, LoadOutcome, CACHE_TAG, CACHE_TYPE_IDENTIFIER};
pub use service::{ServiceQuote, RESERVED_ATTRIBUTES};
pub use state::{CacheStateOracle, CacheTypeState};
pub use stats::CacheStats;
pub use store::CacheStore;

// == Public Constants ==
/// Maximum allowed key length in bytes
pub const MAX_KEY_LENGTH: usize = 16 * 1024;

/// Maximum allowed value size in bytes
pub const MAX_VALUE_SIZE: usize = 1024 * 1024; // 1 MB

//! Error types for the shipping quote cache
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for key derivation, payload shaping and storage.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Key generation was attempted with an empty rate request context
    #[error("No active rate request in context")]
    NoActiveRateRequest,

    /// Key or payload could not be encoded
    #[error("Serialization failed: {0}")]
    Serialization(String),

    /// Stored payload could not be decoded into service quotes
    #[error("Corrupt cache entry: {0}")]
    CorruptEntry(String),

    /// The backing store could not be reached or refused the operation
    #[error("Cache store unavailable: {0}")]
    StoreUnavailable(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Store is full and eviction failed
    #[error("Cache full: {0}")]
    CacheFull(String),

    /// The live rate lookup failed
    #[error("Rate provider failed: {0}")]
    RateProvider(String),
}

impl CacheError {
    // == Bypass Classification ==
    /// Returns true when the caller should fall back to a live lookup
    /// instead of failing the shipping calculation.
    pub fn is_cache_bypass(&self) -> bool {
        !matches!(self, CacheError::RateProvider(_))
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = match &self {
            CacheError::NoActiveRateRequest | CacheError::InvalidRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            CacheError::CorruptEntry(_) | CacheError::Serialization(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            CacheError::StoreUnavailable(_) | CacheError::CacheFull(_) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            CacheError::RateProvider(_) => StatusCode::BAD_GATEWAY,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

impl From<serde_json::Error> for CacheError {
    fn from(err: serde_json::Error) -> Self {
        CacheError::Serialization(err.to_string())
    }
}

// == Result Type Alias ==
/// Convenience Result type for the shipping quote cache.
pub type Result<T> = std::result::Result<T, CacheError>;

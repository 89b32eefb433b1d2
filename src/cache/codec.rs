//! Payload Codec
//!
//! Encodes service quote sequences as the JSON array of attribute mappings
//! stored under a cache key.

use serde_json::{Map, Value};

use super::ServiceQuote;
use crate::error::{CacheError, Result};

/// Encodes quotes into a stored payload.
pub fn encode(services: &[ServiceQuote]) -> Result<String> {
    let attributes = services
        .iter()
        .map(ServiceQuote::to_attributes)
        .collect::<Result<Vec<_>>>()?;

    Ok(serde_json::to_string(&attributes)?)
}

/// Decodes a stored payload back into quotes.
///
/// Anything other than an array of objects, or any object failing
/// validation, is a [`CacheError::CorruptEntry`].
pub fn decode(payload: &str) -> Result<Vec<ServiceQuote>> {
    let raw: Vec<Map<String, Value>> =
        serde_json::from_str(payload).map_err(|e| CacheError::CorruptEntry(e.to_string()))?;

    raw.into_iter().map(ServiceQuote::from_attributes).collect()
}

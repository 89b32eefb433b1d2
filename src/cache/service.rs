//! Service Quote
//!
//! Snapshot of one carrier service quote as stored in the cache.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{CacheError, Result};

/// Attribute names owned by the named fields of [`ServiceQuote`].
pub const RESERVED_ATTRIBUTES: &[&str] = &[
    "carrier",
    "service_code",
    "service_description",
    "shipping_price",
    "delivery_time",
    "error",
    "message",
];

// == Service Quote ==
/// One shipping service quote returned by the rate API.
///
/// Attributes the cache does not interpret are kept in `attributes` and
/// survive a store round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceQuote {
    /// Carrier display name
    pub carrier: String,
    /// Carrier service code
    pub service_code: String,
    /// Human readable service name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_description: Option<String>,
    /// Quoted shipping price
    pub shipping_price: f64,
    /// Estimated delivery time in days
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_time: Option<u32>,
    /// Set when the carrier could not quote this service
    #[serde(default)]
    pub error: bool,
    /// Carrier message, usually the error reason
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Remaining carrier attributes
    #[serde(flatten)]
    pub attributes: BTreeMap<String, Value>,
}

impl ServiceQuote {
    pub fn new(carrier: impl Into<String>, service_code: impl Into<String>, shipping_price: f64) -> Self {
        Self {
            carrier: carrier.into(),
            service_code: service_code.into(),
            service_description: None,
            shipping_price,
            delivery_time: None,
            error: false,
            message: None,
            attributes: BTreeMap::new(),
        }
    }

    pub fn with_delivery_time(mut self, days: u32) -> Self {
        self.delivery_time = Some(days);
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Builds a quote from a stored attribute mapping.
    ///
    /// Missing required attributes, wrong attribute types and non-finite or
    /// negative prices are rejected as [`CacheError::CorruptEntry`].
    pub fn from_attributes(attributes: Map<String, Value>) -> Result<Self> {
        let quote: ServiceQuote = serde_json::from_value(Value::Object(attributes))
            .map_err(|e| CacheError::CorruptEntry(e.to_string()))?;

        quote.check().map_err(CacheError::CorruptEntry)?;
        Ok(quote)
    }

    /// Returns the quote as a plain attribute mapping.
    ///
    /// Quotes that could not be read back unchanged are refused with
    /// [`CacheError::Serialization`]: a non-finite or negative price, or an
    /// extra attribute shadowing a named field.
    pub fn to_attributes(&self) -> Result<Map<String, Value>> {
        self.check().map_err(CacheError::Serialization)?;

        if let Some(name) = self
            .attributes
            .keys()
            .find(|name| RESERVED_ATTRIBUTES.contains(&name.as_str()))
        {
            return Err(CacheError::Serialization(format!(
                "attribute {name} shadows a field of service {}",
                self.service_code
            )));
        }

        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            other => Err(CacheError::Serialization(format!(
                "service quote encoded as {other}"
            ))),
        }
    }

    fn check(&self) -> std::result::Result<(), String> {
        if self.shipping_price.is_finite() && self.shipping_price >= 0.0 {
            Ok(())
        } else {
            Err(format!(
                "invalid shipping price {} for service {}",
                self.shipping_price, self.service_code
            ))
        }
    }
}

//! Request DTOs for the quote cache API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

use crate::cache::ServiceQuote;
use crate::context::RateRequestContext;
use crate::quote::{AppliedCoupon, RateRequest};

/// Cart facts identifying one cache entry.
///
/// Body of `POST /quotes/lookup`; flattened into the save body.
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteLookupRequest {
    /// The rate request being estimated
    pub rate_request: RateRequest,
    /// Coupon applied to the cart
    #[serde(default)]
    pub coupon_code: Option<String>,
}

impl QuoteLookupRequest {
    /// Splits the body into a fresh per-request context and coupon.
    pub fn into_parts(self) -> (RateRequestContext, AppliedCoupon) {
        (
            RateRequestContext::with_request(self.rate_request),
            AppliedCoupon::new(self.coupon_code),
        )
    }
}

/// Request body for `PUT /quotes`.
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteSaveRequest {
    #[serde(flatten)]
    pub cart: QuoteLookupRequest,
    /// Quotes returned by the live carrier lookup
    pub services: Vec<ServiceQuote>,
}

/// Request body for `PUT /cache/state`.
#[derive(Debug, Clone, Deserialize)]
pub struct CacheStateRequest {
    pub enabled: bool,
}

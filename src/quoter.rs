//! Shipping Quoter
//!
//! Cache-aside flow around the live carrier lookup. Cache problems never
//! fail a calculation: they are logged and the quote is computed live.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::cache::{CacheManager, LoadOutcome, ServiceQuote};
use crate::context::RateRequestContext;
use crate::error::{CacheError, Result};
use crate::quote::{CouponReader, RateRequest};

/// Live rate lookup against the carrier API.
#[async_trait]
pub trait RateProvider: Send + Sync {
    async fn fetch(&self, request: &RateRequest) -> Result<Vec<ServiceQuote>>;
}

/// Where a quote came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteSource {
    Cache,
    Live,
}

/// Quotes for one calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct Quotes {
    pub services: Vec<ServiceQuote>,
    pub source: QuoteSource,
}

// == Shipping Quoter ==
#[derive(Clone)]
pub struct ShippingQuoter {
    cache: CacheManager,
    provider: Arc<dyn RateProvider>,
}

impl ShippingQuoter {
    pub fn new(cache: CacheManager, provider: Arc<dyn RateProvider>) -> Self {
        Self { cache, provider }
    }

    /// Returns cached quotes for the cart, or fetches and caches live ones.
    ///
    /// Only a failing live lookup or an empty context is an error. Quotes
    /// flagged with a carrier error are returned but not cached.
    pub async fn quote(
        &self,
        context: &RateRequestContext,
        coupon: &dyn CouponReader,
    ) -> Result<Quotes> {
        let request = context.get().ok_or(CacheError::NoActiveRateRequest)?;

        match self.cache.load(context, coupon).await {
            Ok(LoadOutcome::Hit(services)) => {
                return Ok(Quotes {
                    services,
                    source: QuoteSource::Cache,
                })
            }
            Ok(outcome) => debug!(outcome = outcome.label(), "Fetching live quotes"),
            Err(err) => warn!(error = %err, "Quote cache lookup bypassed"),
        }

        let services = self.provider.fetch(request).await?;

        if services.iter().any(|s| s.error) {
            debug!("Live quotes carry carrier errors, not caching");
        } else if let Err(err) = self.cache.save(context, coupon, &services).await {
            warn!(error = %err, "Quote cache save failed");
        }

        Ok(Quotes {
            services,
            source: QuoteSource::Live,
        })
    }
}

//! Cache Manager
//!
//! Loads and saves service quotes under the key derived from the current
//! cart. The manager owns key derivation and payload shaping; storage and
//! the on/off switch belong to the injected collaborators.

use std::sync::Arc;

use tracing::{debug, info};

use super::{codec, CacheBackend, CacheKey, CacheKeyGenerator, CacheStateOracle, ServiceQuote};
use crate::context::RateRequestContext;
use crate::error::Result;
use crate::quote::CouponReader;

/// Cache type identifier checked against the state oracle.
pub const CACHE_TYPE_IDENTIFIER: &str = "shipping_quotes";

/// Tag attached to every quote entry for bulk invalidation.
pub const CACHE_TAG: &str = "SHIPPING_QUOTES";

// == Load Outcome ==
/// Result of a cache lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// The quote cache type is switched off; the store was not consulted
    Disabled,
    /// Nothing stored for the current cart
    Miss,
    /// Quotes stored for the current cart, in saved order
    Hit(Vec<ServiceQuote>),
}

impl LoadOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            LoadOutcome::Disabled => "disabled",
            LoadOutcome::Miss => "miss",
            LoadOutcome::Hit(_) => "hit",
        }
    }

    pub fn into_services(self) -> Option<Vec<ServiceQuote>> {
        match self {
            LoadOutcome::Hit(services) => Some(services),
            LoadOutcome::Disabled | LoadOutcome::Miss => None,
        }
    }
}

// == Cache Manager ==
#[derive(Clone)]
pub struct CacheManager {
    state: Arc<dyn CacheStateOracle>,
    backend: Arc<dyn CacheBackend>,
    keys: CacheKeyGenerator,
}

impl CacheManager {
    pub fn new(
        state: Arc<dyn CacheStateOracle>,
        backend: Arc<dyn CacheBackend>,
        keys: CacheKeyGenerator,
    ) -> Self {
        Self {
            state,
            backend,
            keys,
        }
    }

    /// Returns true when the quote cache type is switched on.
    pub fn is_enabled(&self) -> bool {
        self.state.is_enabled(CACHE_TYPE_IDENTIFIER)
    }

    /// Derives the key for the current cart.
    pub fn key(&self, context: &RateRequestContext, coupon: &dyn CouponReader) -> Result<CacheKey> {
        self.keys.generate(context, coupon)
    }

    // == Load ==
    /// Looks up quotes for the current cart.
    ///
    /// A stored payload that fails to decode is reported as
    /// [`crate::error::CacheError::CorruptEntry`]; store failures propagate
    /// unchanged.
    pub async fn load(
        &self,
        context: &RateRequestContext,
        coupon: &dyn CouponReader,
    ) -> Result<LoadOutcome> {
        Ok(self.load_with_key(context, coupon).await?.0)
    }

    /// Same as [`CacheManager::load`], also returning the key that was looked
    /// up. The key is `None` only for [`LoadOutcome::Disabled`].
    pub async fn load_with_key(
        &self,
        context: &RateRequestContext,
        coupon: &dyn CouponReader,
    ) -> Result<(LoadOutcome, Option<CacheKey>)> {
        if !self.is_enabled() {
            return Ok((LoadOutcome::Disabled, None));
        }

        let key = self.key(context, coupon)?;
        let Some(payload) = self.backend.load(key.as_str()).await? else {
            debug!("Quote cache miss");
            return Ok((LoadOutcome::Miss, Some(key)));
        };

        let services = codec::decode(&payload)?;
        debug!(services = services.len(), "Quote cache hit");
        Ok((LoadOutcome::Hit(services), Some(key)))
    }

    // == Save ==
    /// Stores quotes for the current cart without expiry, tagged with
    /// [`CACHE_TAG`]. Returns `false` without touching the store when the
    /// cache type is disabled.
    ///
    /// Quotes that would not decode back unchanged are refused with
    /// [`crate::error::CacheError::Serialization`] before the store is touched.
    pub async fn save(
        &self,
        context: &RateRequestContext,
        coupon: &dyn CouponReader,
        services: &[ServiceQuote],
    ) -> Result<bool> {
        Ok(self.save_with_key(context, coupon, services).await?.is_some())
    }

    /// Same as [`CacheManager::save`], returning the key written to, or
    /// `None` when nothing was stored.
    pub async fn save_with_key(
        &self,
        context: &RateRequestContext,
        coupon: &dyn CouponReader,
        services: &[ServiceQuote],
    ) -> Result<Option<CacheKey>> {
        if !self.is_enabled() {
            return Ok(None);
        }

        let key = self.key(context, coupon)?;
        let payload = codec::encode(services)?;

        let saved = self
            .backend
            .save(key.as_str(), payload, &[CACHE_TAG], None)
            .await?;
        Ok(saved.then_some(key))
    }

    // == Clean ==
    /// Purges every quote entry. Returns the number of entries removed.
    pub async fn clean(&self) -> Result<usize> {
        let removed = self.backend.clean_by_tag(CACHE_TAG).await?;
        info!(removed, "Quote cache cleaned");
        Ok(removed)
    }
}

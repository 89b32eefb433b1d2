//! API Handlers
//!
//! HTTP request handlers for each quote cache endpoint. Every request builds
//! its own rate request context from the body.

use std::sync::Arc;

use axum::{extract::State, Json};
use tokio::sync::RwLock;
use tracing::info;

use crate::cache::{
    CacheKey, CacheKeyGenerator, CacheManager, CacheStateOracle, CacheStore, CacheTypeState,
    CACHE_TAG, CACHE_TYPE_IDENTIFIER,
};
use crate::config::Config;
use crate::error::Result;
use crate::models::{
    CacheStateRequest, CacheStateResponse, HealthResponse, PurgeResponse, QuoteLookupRequest,
    QuoteLookupResponse, QuoteSaveRequest, QuoteSaveResponse, StatsResponse,
};
use crate::quote::{ProductTypeQuantity, ProductTypeValidator};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Quote cache manager
    pub manager: CacheManager,
    /// Backing store, kept for stats
    pub store: Arc<RwLock<CacheStore>>,
    /// Cache type switch
    pub cache_state: Arc<CacheTypeState>,
}

impl AppState {
    /// Wires a manager over the given store using the default item rules.
    pub fn new(config: &Config, store: CacheStore) -> Self {
        let store = Arc::new(RwLock::new(store));
        let cache_state = Arc::new(CacheTypeState::new(config.cache_enabled));
        let keys = CacheKeyGenerator::new(
            config,
            Arc::new(ProductTypeValidator),
            Arc::new(ProductTypeQuantity),
        );
        let manager = CacheManager::new(cache_state.clone(), store.clone(), keys);

        Self {
            manager,
            store,
            cache_state,
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config, CacheStore::new(config.max_entries))
    }
}

/// Handler for POST /quotes/lookup
pub async fn lookup_handler(
    State(state): State<AppState>,
    Json(req): Json<QuoteLookupRequest>,
) -> Result<Json<QuoteLookupResponse>> {
    let (context, coupon) = req.into_parts();

    let (outcome, key) = state.manager.load_with_key(&context, &coupon).await?;

    Ok(Json(QuoteLookupResponse::new(outcome, key.map(CacheKey::into_string))))
}

/// Handler for PUT /quotes
pub async fn save_handler(
    State(state): State<AppState>,
    Json(req): Json<QuoteSaveRequest>,
) -> Result<Json<QuoteSaveResponse>> {
    let services = req.services;
    let (context, coupon) = req.cart.into_parts();

    let key = state
        .manager
        .save_with_key(&context, &coupon, &services)
        .await?
        .map(CacheKey::into_string);

    Ok(Json(QuoteSaveResponse {
        saved: key.is_some(),
        key,
    }))
}

/// Handler for DELETE /cache
pub async fn purge_handler(State(state): State<AppState>) -> Result<Json<PurgeResponse>> {
    let removed = state.manager.clean().await?;

    Ok(Json(PurgeResponse {
        tag: CACHE_TAG.to_string(),
        removed,
    }))
}

/// Handler for PUT /cache/state
pub async fn cache_state_handler(
    State(state): State<AppState>,
    Json(req): Json<CacheStateRequest>,
) -> Json<CacheStateResponse> {
    state.cache_state.set_enabled(CACHE_TYPE_IDENTIFIER, req.enabled);
    info!(enabled = req.enabled, "Quote cache state changed");

    Json(CacheStateResponse {
        cache_type: CACHE_TYPE_IDENTIFIER.to_string(),
        enabled: state.cache_state.is_enabled(CACHE_TYPE_IDENTIFIER),
    })
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.store.read().await.stats();
    Json(StatsResponse::new(state.manager.is_enabled(), &stats))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

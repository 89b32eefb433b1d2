//! Shipping Quote Cache
//!
//! Memoizes carrier rate quotes under a key derived from the shipping-relevant
//! facts of a cart, with tag-based bulk invalidation.

pub mod api;
pub mod cache;
pub mod config;
pub mod context;
pub mod error;
pub mod models;
pub mod postcode;
pub mod quote;
pub mod quoter;

pub use api::AppState;
pub use cache::{CacheManager, LoadOutcome, ServiceQuote};
pub use config::Config;
pub use context::RateRequestContext;
pub use error::{CacheError, Result};
pub use quoter::{QuoteSource, Quotes, RateProvider, ShippingQuoter};

//! API Module
//!
//! HTTP handlers and routing for the quote cache sidecar.
//!
//! # Endpoints
//! - `POST /quotes/lookup` - Load cached quotes for a cart
//! - `PUT /quotes` - Store quotes for a cart
//! - `DELETE /cache` - Purge every quote entry
//! - `PUT /cache/state` - Enable or disable the quote cache
//! - `GET /stats` - Store statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;

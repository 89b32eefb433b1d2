//! Request and Response models for the quote cache API
//!
//! This module defines the DTOs used for serializing/deserializing HTTP
//! request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{CacheStateRequest, QuoteLookupRequest, QuoteSaveRequest};
pub use responses::{
    CacheStateResponse, HealthResponse, PurgeResponse, QuoteLookupResponse, QuoteSaveResponse,
    StatsResponse,
};

//! Rate Request Context
//!
//! Holds the rate request of exactly one shipping calculation. A context is
//! owned by the task running that calculation and handed to key generation
//! by reference; it is never shared between calculations.

use crate::quote::RateRequest;

/// Single slot for the active rate request.
#[derive(Debug, Clone, Default)]
pub struct RateRequestContext {
    request: Option<RateRequest>,
}

impl RateRequestContext {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context already holding `request`.
    pub fn with_request(request: RateRequest) -> Self {
        Self {
            request: Some(request),
        }
    }

    /// Replaces the active request.
    pub fn set(&mut self, request: RateRequest) -> &mut Self {
        self.request = Some(request);
        self
    }

    /// Returns the active request, if any.
    pub fn get(&self) -> Option<&RateRequest> {
        self.request.as_ref()
    }

    /// Drops the active request.
    pub fn clear(&mut self) -> &mut Self {
        self.request = None;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_before_set_is_absent() {
        let ctx = RateRequestContext::new();
        assert!(ctx.get().is_none());
    }

    #[test]
    fn test_set_get_clear() {
        let mut ctx = RateRequestContext::new();
        ctx.set(RateRequest::new("01310-100"));
        assert_eq!(
            ctx.get().and_then(|r| r.dest_postcode.as_deref()),
            Some("01310-100")
        );

        ctx.clear();
        assert!(ctx.get().is_none());
    }

    #[test]
    fn test_set_replaces_previous() {
        let mut ctx = RateRequestContext::with_request(RateRequest::new("1"));
        ctx.set(RateRequest::new("2"));
        assert_eq!(ctx.get().and_then(|r| r.dest_postcode.as_deref()), Some("2"));
    }
}

//! Cache Key Generator
//!
//! Derives a key that changes if and only if the shipping-relevant facts of
//! the cart change.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::config::Config;
use crate::context::RateRequestContext;
use crate::error::{CacheError, Result};
use crate::postcode;
use crate::quote::{CouponReader, ItemQuantityCalculator, QuoteItemValidator};

/// Marker appended to keys generated in multi-quote mode.
pub const MULTI_QUOTE_MARKER: &str = "multi";

// == Cache Key ==
/// Serialized shipping facts of one cart.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Eligible rows keyed by effective product key, sorted ascending.
pub type EligibleItemSet = BTreeMap<String, f64>;

// == Generator ==
/// Builds [`CacheKey`]s from a rate request context.
#[derive(Clone)]
pub struct CacheKeyGenerator {
    origin_postcode: String,
    multi_quote_enabled: bool,
    validator: Arc<dyn QuoteItemValidator>,
    quantity: Arc<dyn ItemQuantityCalculator>,
}

impl CacheKeyGenerator {
    pub fn new(
        config: &Config,
        validator: Arc<dyn QuoteItemValidator>,
        quantity: Arc<dyn ItemQuantityCalculator>,
    ) -> Self {
        Self {
            origin_postcode: config.origin_postcode.clone(),
            multi_quote_enabled: config.multi_quote_enabled,
            validator,
            quantity,
        }
    }

    /// Collects eligible rows of the active request.
    ///
    /// Rows sharing an effective key collapse onto the last one seen.
    pub fn eligible_items(&self, context: &RateRequestContext) -> Result<EligibleItemSet> {
        let request = context.get().ok_or(CacheError::NoActiveRateRequest)?;

        let mut items = EligibleItemSet::new();
        for item in request.all_items() {
            if !self.validator.validate(item) {
                continue;
            }
            items.insert(item.effective_key(), self.quantity.calculate(item));
        }

        Ok(items)
    }

    /// Generates the key for the active request and applied coupon.
    ///
    /// Fails with [`CacheError::NoActiveRateRequest`] on an empty context.
    pub fn generate(
        &self,
        context: &RateRequestContext,
        coupon: &dyn CouponReader,
    ) -> Result<CacheKey> {
        let request = context.get().ok_or(CacheError::NoActiveRateRequest)?;
        let items = self.eligible_items(context)?;

        let multi = self.multi_quote_enabled.then_some(MULTI_QUOTE_MARKER);
        let facts = (
            postcode::format(Some(self.origin_postcode.as_str())),
            postcode::format(request.dest_postcode.as_deref()),
            &items,
            coupon.coupon_code(),
            multi,
        );

        let key = serde_json::to_string(&facts)?;
        debug!(eligible_items = items.len(), "Generated quote cache key");

        Ok(CacheKey(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quote::{
        AppliedCoupon, CartLineItem, ProductTypeQuantity, ProductTypeValidator, RateRequest,
    };

    fn generator(origin: &str, multi: bool) -> CacheKeyGenerator {
        let config = Config {
            origin_postcode: origin.to_string(),
            multi_quote_enabled: multi,
            ..Config::default()
        };
        CacheKeyGenerator::new(
            &config,
            Arc::new(ProductTypeValidator),
            Arc::new(ProductTypeQuantity),
        )
    }

    fn context(items: Vec<CartLineItem>) -> RateRequestContext {
        let mut request = RateRequest::new("04538-132");
        request.items = items;
        RateRequestContext::with_request(request)
    }

    #[test]
    fn test_key_layout() {
        let ctx = context(vec![
            CartLineItem::new(20, "simple", 1.0),
            CartLineItem::new(10, "simple", 2.0),
        ]);
        let key = generator("01310-100", false)
            .generate(&ctx, &AppliedCoupon::none())
            .unwrap();

        assert_eq!(
            key.as_str(),
            r#"["01310100","04538132",{"10":2.0,"20":1.0},null,null]"#
        );
    }

    #[test]
    fn test_key_includes_coupon_and_multi_marker() {
        let ctx = context(vec![CartLineItem::new(1, "simple", 1.0)]);
        let key = generator("1", true)
            .generate(&ctx, &AppliedCoupon::new(Some("SAVE10".into())))
            .unwrap();

        assert!(key.as_str().ends_with(r#""SAVE10","multi"]"#));
    }

    #[test]
    fn test_child_rows_use_composite_key() {
        let child = CartLineItem::new(7, "simple", 2.0)
            .with_parent(CartLineItem::new(3, "bundle", 2.0));
        let ctx = context(vec![CartLineItem::new(3, "bundle", 2.0), child]);

        let items = generator("1", false).eligible_items(&ctx).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items.get("3-7"), Some(&4.0));
    }

    #[test]
    fn test_duplicate_keys_last_write_wins() {
        let ctx = context(vec![
            CartLineItem::new(5, "simple", 1.0),
            CartLineItem::new(5, "simple", 3.0),
        ]);

        let items = generator("1", false).eligible_items(&ctx).unwrap();
        assert_eq!(items.get("5"), Some(&3.0));
    }

    #[test]
    fn test_order_independent() {
        let a = CartLineItem::new(1, "simple", 1.0);
        let b = CartLineItem::new(2, "simple", 2.0);
        let keys = generator("1", false);

        let first = keys
            .generate(&context(vec![a.clone(), b.clone()]), &AppliedCoupon::none())
            .unwrap();
        let second = keys
            .generate(&context(vec![b, a]), &AppliedCoupon::none())
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_ineligible_row_does_not_change_key() {
        let keys = generator("1", false);
        let base = vec![CartLineItem::new(1, "simple", 1.0)];
        let mut with_virtual = base.clone();
        with_virtual.push(CartLineItem::new(99, "virtual", 4.0));

        let first = keys.generate(&context(base), &AppliedCoupon::none()).unwrap();
        let second = keys
            .generate(&context(with_virtual), &AppliedCoupon::none())
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_context_fails_fast() {
        let result = generator("1", false).generate(&RateRequestContext::new(), &AppliedCoupon::none());
        assert!(matches!(result, Err(CacheError::NoActiveRateRequest)));
    }
}

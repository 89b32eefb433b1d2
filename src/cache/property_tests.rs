//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check key derivation and store behaviour over generated carts.

use std::collections::BTreeSet;
use std::sync::Arc;

use proptest::prelude::*;

use crate::cache::{codec, CacheKey, CacheKeyGenerator, CacheStore, ServiceQuote};
use crate::config::Config;
use crate::context::RateRequestContext;
use crate::postcode;
use crate::quote::{
    AppliedCoupon, CartLineItem, ProductTypeQuantity, ProductTypeValidator, RateRequest,
};

// == Test Configuration ==
const TEST_ORIGIN: &str = "01310-100";

// == Strategies ==
/// Carts of simple rows with distinct product ids and whole quantities
fn cart_strategy() -> impl Strategy<Value = Vec<CartLineItem>> {
    prop::collection::btree_set(1u64..10_000, 1..12).prop_flat_map(|ids| {
        let ids: Vec<u64> = ids.into_iter().collect();
        let len = ids.len();
        prop::collection::vec(1u32..20, len).prop_map(move |qtys| {
            ids.iter()
                .zip(qtys)
                .map(|(id, qty)| CartLineItem::new(*id, "simple", qty as f64))
                .collect()
        })
    })
}

fn postcode_strategy() -> impl Strategy<Value = String> {
    "[0-9]{5}-?[0-9]{3}"
}

fn service_strategy() -> impl Strategy<Value = ServiceQuote> {
    ("[A-Za-z]{1,12}", "[0-9]{5}", 0u32..100_000, 1u32..30).prop_map(
        |(carrier, code, cents, days)| {
            ServiceQuote::new(carrier, code, cents as f64 / 100.0).with_delivery_time(days)
        },
    )
}

fn keys(multi: bool) -> CacheKeyGenerator {
    let config = Config {
        origin_postcode: TEST_ORIGIN.to_string(),
        multi_quote_enabled: multi,
        ..Config::default()
    };
    CacheKeyGenerator::new(
        &config,
        Arc::new(ProductTypeValidator),
        Arc::new(ProductTypeQuantity),
    )
}

fn key_for(dest: &str, items: Vec<CartLineItem>, coupon: Option<&str>, multi: bool) -> CacheKey {
    let mut request = RateRequest::new(dest);
    request.items = items;
    let context = RateRequestContext::with_request(request);
    keys(multi)
        .generate(&context, &AppliedCoupon::new(coupon.map(str::to_string)))
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Normalized postcodes are always eight ASCII digits
    #[test]
    fn prop_postcode_shape(raw in any::<Option<String>>()) {
        let formatted = postcode::format(raw.as_deref());
        prop_assert_eq!(formatted.len(), postcode::POSTCODE_WIDTH);
        prop_assert!(formatted.chars().all(|c| c.is_ascii_digit()));
    }

    // Separators never matter
    #[test]
    fn prop_postcode_ignores_separators(raw in "[0-9]{8}") {
        let dashed = format!("{}-{}", &raw[..5], &raw[5..]);
        prop_assert_eq!(postcode::format(Some(dashed.as_str())), postcode::format(Some(raw.as_str())));
    }

    // Row order in the cart never changes the key
    #[test]
    fn prop_key_ignores_row_order(
        (items, shuffled) in cart_strategy().prop_flat_map(|items| {
            let shuffled = Just(items.clone()).prop_shuffle();
            (Just(items), shuffled)
        }),
        dest in postcode_strategy(),
    ) {
        prop_assert_eq!(
            key_for(&dest, items, None, false),
            key_for(&dest, shuffled, None, false)
        );
    }

    // Changing one row's quantity changes the key
    #[test]
    fn prop_key_tracks_quantity(
        items in cart_strategy(),
        index in any::<prop::sample::Index>(),
        dest in postcode_strategy(),
    ) {
        let mut changed = items.clone();
        let row = index.index(changed.len());
        changed[row].qty += 1.0;

        prop_assert_ne!(
            key_for(&dest, items, None, false),
            key_for(&dest, changed, None, false)
        );
    }

    // Destination, coupon and multi-quote mode are all part of the key
    #[test]
    fn prop_key_tracks_context_facts(
        items in cart_strategy(),
        dest in postcode_strategy(),
        other_dest in postcode_strategy(),
        coupon in "[A-Z0-9]{4,10}",
    ) {
        let base = key_for(&dest, items.clone(), None, false);

        if postcode::format(Some(dest.as_str())) != postcode::format(Some(other_dest.as_str())) {
            prop_assert_ne!(&base, &key_for(&other_dest, items.clone(), None, false));
        }
        prop_assert_ne!(&base, &key_for(&dest, items.clone(), Some(coupon.as_str()), false));
        prop_assert_ne!(&base, &key_for(&dest, items, None, true));
    }

    // Ineligible rows never change the key
    #[test]
    fn prop_key_ignores_ineligible_rows(
        items in cart_strategy(),
        extra_id in 10_000u64..20_000,
        kind in prop::sample::select(vec!["virtual", "downloadable", "configurable", "bundle"]),
    ) {
        let mut with_extra = items.clone();
        with_extra.push(CartLineItem::new(extra_id, kind, 2.0));

        prop_assert_eq!(
            key_for("04538132", items, None, false),
            key_for("04538132", with_extra, None, false)
        );
    }

    // Stored quote sequences decode to equal quotes in the same order
    #[test]
    fn prop_payload_round_trip(services in prop::collection::vec(service_strategy(), 0..8)) {
        let payload = codec::encode(&services).unwrap();
        prop_assert_eq!(codec::decode(&payload).unwrap(), services);
    }

    // The store never grows past its capacity and keeps the last write per key
    #[test]
    fn prop_store_capacity_and_overwrite(
        writes in prop::collection::vec(("[a-z]{1,4}", "[a-z]{1,8}"), 1..200)
    ) {
        let max_entries = 25;
        let mut store = CacheStore::new(max_entries);

        for (key, value) in &writes {
            store.set(key.clone(), value.clone(), &["QUOTES"], None).unwrap();
            prop_assert!(store.len() <= max_entries);
        }

        let (last_key, last_value) = writes.last().unwrap();
        prop_assert_eq!(store.get(last_key), Some(last_value.clone()));

        let distinct: BTreeSet<&String> = writes.iter().map(|(k, _)| k).collect();
        prop_assert_eq!(store.len(), distinct.len().min(max_entries));
    }
}

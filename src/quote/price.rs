//! Item Price Resolver
//!
//! Unit and final prices of cart rows as seen by the carrier, selected per
//! product type.

use std::sync::Arc;

use super::{CartLineItem, ItemQuantityCalculator, ProductType};

// == Price Strategy ==
/// Pricing rule for one family of product types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceStrategy {
    /// Simple, virtual, downloadable and unknown types: the row prices itself
    Simple,
    /// Configurable children: priced on the parent row
    Configurable,
    /// Bundle children: priced on the child row
    Bundle,
    /// Grouped members: priced on the member row
    Grouped,
}

impl PriceStrategy {
    /// Selects the strategy from the row's governing product type.
    pub fn for_item(item: &CartLineItem) -> Self {
        match item.governing_type() {
            ProductType::Configurable => PriceStrategy::Configurable,
            ProductType::Bundle => PriceStrategy::Bundle,
            ProductType::Grouped => PriceStrategy::Grouped,
            ProductType::Simple
            | ProductType::Virtual
            | ProductType::Downloadable
            | ProductType::Other(_) => PriceStrategy::Simple,
        }
    }

    fn priced_item<'a>(&self, item: &'a CartLineItem) -> &'a CartLineItem {
        match self {
            PriceStrategy::Configurable => item.real_item(),
            PriceStrategy::Simple | PriceStrategy::Bundle | PriceStrategy::Grouped => item,
        }
    }

    /// Unit price of the row.
    pub fn price(&self, item: &CartLineItem) -> f64 {
        self.priced_item(item).price
    }

    /// Row total spread over the shippable quantity of the priced row.
    pub fn final_price(&self, item: &CartLineItem, quantity: &dyn ItemQuantityCalculator) -> f64 {
        let priced = self.priced_item(item);
        let qty = quantity.calculate(priced);
        if qty <= 0.0 {
            return 0.0;
        }
        priced.row_total / qty
    }
}

// == Item Price Calculator ==
/// Resolves row prices through the matching [`PriceStrategy`].
#[derive(Clone)]
pub struct ItemPriceCalculator {
    quantity: Arc<dyn ItemQuantityCalculator>,
}

impl ItemPriceCalculator {
    pub fn new(quantity: Arc<dyn ItemQuantityCalculator>) -> Self {
        Self { quantity }
    }

    pub fn price(&self, item: &CartLineItem) -> f64 {
        PriceStrategy::for_item(item).price(item)
    }

    pub fn final_price(&self, item: &CartLineItem) -> f64 {
        PriceStrategy::for_item(item).final_price(item, self.quantity.as_ref())
    }
}

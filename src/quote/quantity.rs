//! Item Quantity Resolver
//!
//! Effective shippable quantity of a cart row, reconciling child and parent
//! multiplicities for composite products.

use super::{CartLineItem, ProductType};

/// Quantity policy for cart rows.
pub trait ItemQuantityCalculator: Send + Sync {
    /// Returns the number of units of this row that ship.
    fn calculate(&self, item: &CartLineItem) -> f64;
}

// == Product Type Quantity ==
/// Default policy dispatched on the row's governing product type.
///
/// | governing type | quantity                       |
/// |----------------|--------------------------------|
/// | bundle         | child qty x bundle qty         |
/// | configurable   | parent qty                     |
/// | anything else  | own qty                        |
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductTypeQuantity;

impl ItemQuantityCalculator for ProductTypeQuantity {
    fn calculate(&self, item: &CartLineItem) -> f64 {
        match (item.governing_type(), item.parent()) {
            (ProductType::Bundle, Some(bundle)) => item.qty * bundle.qty,
            (ProductType::Configurable, Some(parent)) => parent.qty,
            _ => item.qty,
        }
    }
}

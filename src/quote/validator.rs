//! Item Eligibility Filter
//!
//! Decides which cart rows count toward the shipping calculation.

use super::{CartLineItem, ProductType};

/// Eligibility policy for cart rows.
pub trait QuoteItemValidator: Send + Sync {
    /// Returns true when the row affects shipping.
    fn validate(&self, item: &CartLineItem) -> bool;
}

// == Product Type Validator ==
/// Default policy keyed on the catalog product type.
///
/// Excluded rows:
/// - virtual and downloadable products
/// - configurable and bundle parent rows (their children are counted)
/// - rows with a non-positive quantity
///
/// Everything else, including unknown types, is eligible.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductTypeValidator;

impl QuoteItemValidator for ProductTypeValidator {
    fn validate(&self, item: &CartLineItem) -> bool {
        if item.qty <= 0.0 {
            return false;
        }

        if item.product_type.is_virtual() {
            return false;
        }

        let is_parent_row = item.parent().is_none()
            && matches!(
                item.product_type,
                ProductType::Configurable | ProductType::Bundle
            );

        !is_parent_row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_is_eligible() {
        assert!(ProductTypeValidator.validate(&CartLineItem::new(1, "simple", 1.0)));
        assert!(ProductTypeValidator.validate(&CartLineItem::new(1, "grouped", 1.0)));
    }

    #[test]
    fn test_virtual_types_excluded() {
        assert!(!ProductTypeValidator.validate(&CartLineItem::new(1, "virtual", 1.0)));
        assert!(!ProductTypeValidator.validate(&CartLineItem::new(1, "downloadable", 1.0)));
    }

    #[test]
    fn test_composite_parent_rows_excluded() {
        assert!(!ProductTypeValidator.validate(&CartLineItem::new(1, "configurable", 1.0)));
        assert!(!ProductTypeValidator.validate(&CartLineItem::new(1, "bundle", 1.0)));
    }

    #[test]
    fn test_composite_children_eligible() {
        let child = CartLineItem::new(2, "simple", 1.0)
            .with_parent(CartLineItem::new(1, "bundle", 1.0));
        assert!(ProductTypeValidator.validate(&child));
    }

    #[test]
    fn test_unknown_type_eligible() {
        assert!(ProductTypeValidator.validate(&CartLineItem::new(1, "giftcard", 1.0)));
    }

    #[test]
    fn test_zero_qty_excluded() {
        assert!(!ProductTypeValidator.validate(&CartLineItem::new(1, "simple", 0.0)));
    }
}

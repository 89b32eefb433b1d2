//! Rate Request
//!
//! The cart facts a carrier needs to price a shipment.

use serde::{Deserialize, Serialize};

use super::CartLineItem;

/// Destination and ordered cart rows of one rate estimation.
///
/// The origin postcode is store configuration and is not part of the request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RateRequest {
    /// Destination postcode, raw as entered by the customer
    #[serde(default)]
    pub dest_postcode: Option<String>,
    /// Cart rows in cart order
    #[serde(default)]
    pub items: Vec<CartLineItem>,
}

impl RateRequest {
    /// Creates a request for the given destination.
    pub fn new(dest_postcode: impl Into<String>) -> Self {
        Self {
            dest_postcode: Some(dest_postcode.into()),
            items: Vec::new(),
        }
    }

    /// Appends a cart row.
    pub fn with_item(mut self, item: CartLineItem) -> Self {
        self.items.push(item);
        self
    }

    /// Returns all cart rows in cart order.
    pub fn all_items(&self) -> &[CartLineItem] {
        &self.items
    }
}

//! Cart Line Items
//!
//! Read-only view of the host cart rows that feed a rate request.

use std::fmt;

use serde::{Deserialize, Serialize};

// == Product Type ==
/// Catalog product type of a cart row.
///
/// The set of types with dedicated shipping rules is closed; any other tag
/// reported by the catalog is carried in [`ProductType::Other`] and handled
/// by the default rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProductType {
    Simple,
    Configurable,
    Bundle,
    Grouped,
    Virtual,
    Downloadable,
    Other(String),
}

impl ProductType {
    /// Returns the catalog type code.
    pub fn code(&self) -> &str {
        match self {
            ProductType::Simple => "simple",
            ProductType::Configurable => "configurable",
            ProductType::Bundle => "bundle",
            ProductType::Grouped => "grouped",
            ProductType::Virtual => "virtual",
            ProductType::Downloadable => "downloadable",
            ProductType::Other(code) => code,
        }
    }

    /// Returns true for types that never ship physically.
    pub fn is_virtual(&self) -> bool {
        matches!(self, ProductType::Virtual | ProductType::Downloadable)
    }

    /// Returns true for types whose rows only aggregate child rows.
    pub fn is_composite(&self) -> bool {
        matches!(self, ProductType::Configurable | ProductType::Bundle)
    }
}

impl From<&str> for ProductType {
    fn from(code: &str) -> Self {
        let code = code.trim();
        match code.to_ascii_lowercase().as_str() {
            "simple" => ProductType::Simple,
            "configurable" => ProductType::Configurable,
            "bundle" => ProductType::Bundle,
            "grouped" => ProductType::Grouped,
            "virtual" => ProductType::Virtual,
            "downloadable" => ProductType::Downloadable,
            _ => ProductType::Other(code.to_string()),
        }
    }
}

impl From<String> for ProductType {
    fn from(code: String) -> Self {
        ProductType::from(code.as_str())
    }
}

impl From<ProductType> for String {
    fn from(product_type: ProductType) -> Self {
        product_type.code().to_string()
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// == Cart Line Item ==
/// One cart row as exposed by the host cart model.
///
/// Child rows of configurable and bundle products carry their parent row,
/// which in turn carries the parent product and its quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    /// Catalog product identifier
    pub product_id: u64,
    /// Catalog product type
    pub product_type: ProductType,
    /// Row quantity
    pub qty: f64,
    /// Unit price
    #[serde(default)]
    pub price: f64,
    /// Row total after catalog price rules
    #[serde(default)]
    pub row_total: f64,
    /// Parent row for bundled or configurable children
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<Box<CartLineItem>>,
}

impl CartLineItem {
    /// Creates a parentless row with zero price.
    pub fn new(product_id: u64, product_type: impl Into<ProductType>, qty: f64) -> Self {
        Self {
            product_id,
            product_type: product_type.into(),
            qty,
            price: 0.0,
            row_total: 0.0,
            parent: None,
        }
    }

    /// Sets unit price and row total.
    pub fn with_price(mut self, price: f64, row_total: f64) -> Self {
        self.price = price;
        self.row_total = row_total;
        self
    }

    /// Attaches a parent row.
    pub fn with_parent(mut self, parent: CartLineItem) -> Self {
        self.parent = Some(Box::new(parent));
        self
    }

    /// Returns the parent row, if any.
    pub fn parent(&self) -> Option<&CartLineItem> {
        self.parent.as_deref()
    }

    /// Product type that drives shipping rules: the parent's when present.
    pub fn governing_type(&self) -> &ProductType {
        self.parent()
            .map(|parent| &parent.product_type)
            .unwrap_or(&self.product_type)
    }

    /// Key of this row in the eligible item set.
    ///
    /// `"<parentProductId>-<productId>"` for child rows, `"<productId>"` otherwise.
    pub fn effective_key(&self) -> String {
        match self.parent() {
            Some(parent) => format!("{}-{}", parent.product_id, self.product_id),
            None => self.product_id.to_string(),
        }
    }

    /// Row that carries the price relevant for shipping.
    ///
    /// Configurable children are priced on the parent row; every other
    /// type is priced on itself.
    pub fn real_item(&self) -> &CartLineItem {
        match (self.governing_type(), self.parent()) {
            (ProductType::Configurable, Some(parent)) => parent,
            _ => self,
        }
    }
}

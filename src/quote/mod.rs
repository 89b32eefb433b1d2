//! Quote Module
//!
//! Cart model view and the per-row shipping rules: eligibility, quantity,
//! price and the applied coupon.

mod coupon;
mod item;
mod price;
mod quantity;
mod request;
mod validator;

pub use coupon::{AppliedCoupon, CouponReader};
pub use item::{CartLineItem, ProductType};
pub use price::{ItemPriceCalculator, PriceStrategy};
pub use quantity::{ItemQuantityCalculator, ProductTypeQuantity};
pub use request::RateRequest;
pub use validator::{ProductTypeValidator, QuoteItemValidator};

//! Coupon Context Reader

/// Exposes the discount code applied to the cart being quoted.
pub trait CouponReader: Send + Sync {
    fn coupon_code(&self) -> Option<String>;
}

/// Coupon applied to one shipping calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppliedCoupon(Option<String>);

impl AppliedCoupon {
    /// Wraps a coupon code; blank codes count as no coupon.
    pub fn new(code: Option<String>) -> Self {
        Self(code.filter(|c| !c.trim().is_empty()))
    }

    pub fn none() -> Self {
        Self(None)
    }
}

impl CouponReader for AppliedCoupon {
    fn coupon_code(&self) -> Option<String> {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_code_is_none() {
        assert_eq!(AppliedCoupon::new(Some("  ".into())).coupon_code(), None);
        assert_eq!(AppliedCoupon::none().coupon_code(), None);
    }

    #[test]
    fn test_code_is_kept() {
        let coupon = AppliedCoupon::new(Some("FREESHIP".into()));
        assert_eq!(coupon.coupon_code().as_deref(), Some("FREESHIP"));
    }
}

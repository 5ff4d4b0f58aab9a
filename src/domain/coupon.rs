use super::money::Money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Discount kind of an order-level coupon.
///
/// `ORDER_*` coupons apply to every non-exempt line, `TYPE_*` coupons only to
/// lines in the coupon's eligible categories, and `THRESHOLD_*` coupons only
/// once the eligible subtotal reaches the coupon's minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CouponKind {
    OrderPercent,
    OrderFixed,
    TypePercent,
    TypeFixed,
    ThresholdPercent,
    ThresholdFixed,
}

impl CouponKind {
    pub fn is_percent(&self) -> bool {
        matches!(
            self,
            CouponKind::OrderPercent | CouponKind::TypePercent | CouponKind::ThresholdPercent
        )
    }

    pub fn is_type_scoped(&self) -> bool {
        matches!(self, CouponKind::TypePercent | CouponKind::TypeFixed)
    }

    pub fn is_threshold_gated(&self) -> bool {
        matches!(self, CouponKind::ThresholdPercent | CouponKind::ThresholdFixed)
    }
}

/// A validated coupon for one pricing call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coupon {
    pub code: String,
    pub kind: CouponKind,
    pub value: Decimal,
    #[serde(default)]
    pub min_subtotal: Option<Money>,
    #[serde(default)]
    pub max_discount: Option<Money>,
    #[serde(default)]
    pub eligible_categories: Option<BTreeSet<String>>,
}

impl Coupon {
    /// Whether a line of `category` falls inside this coupon's scope.
    ///
    /// Only `TYPE_*` coupons restrict by category, and for those a missing or
    /// empty category set admits nothing.
    pub fn covers_category(&self, category: &str) -> bool {
        if !self.kind.is_type_scoped() {
            return true;
        }
        self.eligible_categories
            .as_ref()
            .is_some_and(|categories| categories.contains(category))
    }
}

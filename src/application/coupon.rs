use crate::domain::coupon::Coupon;
use crate::domain::money::Money;
use crate::domain::pricing::PricedLine;

/// Sum of post-campaign line subtotals the coupon may discount.
pub fn eligible_subtotal(coupon: &Coupon, lines: &[PricedLine]) -> Money {
    lines
        .iter()
        .filter(|line| !line.exempt && coupon.covers_category(&line.category))
        .map(|line| line.line_subtotal_after_campaign)
        .sum()
}

/// Computes the order-level coupon discount for already campaign-priced
/// lines.
///
/// The result never exceeds the eligible subtotal or the coupon's
/// `max_discount`, and is zero whenever the coupon does not apply.
pub fn compute_coupon_discount(coupon: Option<&Coupon>, lines: &[PricedLine]) -> Money {
    let Some(coupon) = coupon else {
        return Money::ZERO;
    };
    if lines.is_empty() {
        return Money::ZERO;
    }

    let eligible = eligible_subtotal(coupon, lines);
    if !eligible.is_positive() {
        return Money::ZERO;
    }

    if coupon.kind.is_threshold_gated()
        && let Some(min_subtotal) = coupon.min_subtotal
        && eligible < min_subtotal
    {
        return Money::ZERO;
    }

    let raw = if coupon.kind.is_percent() {
        eligible.percent(coupon.value)
    } else {
        Money::new(coupon.value)
    };

    let mut discount = raw.min(eligible);
    if let Some(max_discount) = coupon.max_discount {
        discount = discount.min(max_discount);
    }
    discount.floor_zero()
}

use crate::domain::ids::SellerId;
use crate::domain::money::Money;
use crate::error::{PricingError, Result};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// How an order-level discount was split between sellers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Allocation {
    /// Seller subtotal minus its share of the discount, floored at zero.
    pub payable_by_seller: BTreeMap<SellerId, Money>,
    pub shares: BTreeMap<SellerId, Money>,
    /// Discount that could not be placed because a seller's share exceeded
    /// its subtotal.
    pub unallocated: Money,
}

impl Allocation {
    fn identity(seller_subtotals: &BTreeMap<SellerId, Money>) -> Self {
        Self {
            payable_by_seller: seller_subtotals.clone(),
            shares: seller_subtotals
                .keys()
                .map(|seller| (*seller, Money::ZERO))
                .collect(),
            unallocated: Money::ZERO,
        }
    }
}

/// Splits `coupon_discount` across sellers in proportion to their subtotals.
///
/// Sellers with a positive subtotal are visited in ascending id order. Every
/// seller but the last gets its proportional share rounded half-up, capped so
/// the running total never exceeds the discount; the last seller takes the
/// exact remainder, so the shares always sum to `coupon_discount`.
///
/// # Errors
///
/// Returns `PricingError::Validation` if any subtotal is negative.
pub fn allocate(
    seller_subtotals: &BTreeMap<SellerId, Money>,
    coupon_discount: Money,
) -> Result<Allocation> {
    if let Some((seller, subtotal)) = seller_subtotals
        .iter()
        .find(|(_, subtotal)| subtotal.is_negative())
    {
        return Err(PricingError::Validation(format!(
            "Seller {} has negative subtotal {}",
            seller, subtotal
        )));
    }

    let total: Money = seller_subtotals.values().sum();
    if !coupon_discount.is_positive() || seller_subtotals.is_empty() || !total.is_positive() {
        return Ok(Allocation::identity(seller_subtotals));
    }

    let shares = proportional_shares(seller_subtotals, total.value(), coupon_discount);

    let mut allocation = Allocation::default();
    for (seller, subtotal) in seller_subtotals {
        let share = shares.get(seller).copied().unwrap_or(Money::ZERO);
        allocation
            .payable_by_seller
            .insert(*seller, (*subtotal - share).floor_zero());
        allocation.unallocated += (share - *subtotal).floor_zero();
    }
    allocation.shares = shares;
    Ok(allocation)
}

fn proportional_shares(
    seller_subtotals: &BTreeMap<SellerId, Money>,
    total: Decimal,
    coupon_discount: Money,
) -> BTreeMap<SellerId, Money> {
    // sellers with nothing to discount take no part in the split
    let mut shares: BTreeMap<SellerId, Money> = seller_subtotals
        .keys()
        .map(|seller| (*seller, Money::ZERO))
        .collect();
    let participants: Vec<_> = seller_subtotals
        .iter()
        .filter(|(_, subtotal)| subtotal.is_positive())
        .collect();
    let last = participants.len().saturating_sub(1);
    let mut allocated = Money::ZERO;

    for (index, (seller, subtotal)) in participants.into_iter().enumerate() {
        let remaining = coupon_discount - allocated;
        let share = if index == last {
            remaining
        } else {
            proportional_share(coupon_discount.value(), subtotal.value(), total).min(remaining)
        };
        allocated += share;
        shares.insert(*seller, share);
    }
    shares
}

fn proportional_share(discount: Decimal, subtotal: Decimal, total: Decimal) -> Money {
    // divide first only when the exact product is out of range
    let share = match discount.checked_mul(subtotal) {
        Some(product) => product / total,
        None => discount * (subtotal / total),
    };
    Money::new(share)
}

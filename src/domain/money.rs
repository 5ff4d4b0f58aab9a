use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Number of decimal places every monetary value is kept at.
pub const MONEY_SCALE: u32 = 2;

/// A monetary value with 2 decimal places precision.
///
/// Wraps `rust_decimal::Decimal` and re-rounds half-up after every
/// arithmetic step, so totals never drift from what a cent-exact ledger
/// would show. Values are always stored at scale 2, which keeps the
/// serialized form stable (`"10.00"`, never `"10"`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(from = "Decimal", into = "Decimal")]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::from_parts(0, 0, 0, false, MONEY_SCALE));

    /// Creates a new amount, rounding half-up to 2 decimal places.
    pub fn new(value: Decimal) -> Self {
        Self(round_half_up(value))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Multiplies by a line quantity, rounding after the multiplication.
    pub fn times(self, quantity: u32) -> Self {
        Self::new(self.0 * Decimal::from(quantity))
    }

    /// Like [`Money::times`], but `None` when the product leaves `Decimal`'s
    /// range.
    pub fn checked_times(self, quantity: u32) -> Option<Self> {
        self.0.checked_mul(Decimal::from(quantity)).map(Self::new)
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self::new)
    }

    /// Returns `percent`% of this amount (e.g. `percent = 15` for 15%).
    ///
    /// Saturates at `Decimal`'s bounds instead of overflowing; callers clamp
    /// the result against a price or subtotal anyway.
    pub fn percent(self, percent: Decimal) -> Self {
        let value = match self.0.checked_mul(percent) {
            Some(product) => product / Decimal::ONE_HUNDRED,
            None => (self.0 / Decimal::ONE_HUNDRED).saturating_mul(percent),
        };
        Self::new(value)
    }

    /// Clamps negative amounts to zero.
    pub fn floor_zero(self) -> Self {
        self.max(Self::ZERO)
    }
}

/// Rounds to 2 decimal places, midpoints away from zero, and pins the scale.
pub fn round_half_up(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(MONEY_SCALE);
    rounded
}

impl Default for Money {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Self::new(value)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Money {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.0 - rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

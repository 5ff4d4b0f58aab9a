use super::ids::{ListingId, SellerId};
use super::money::Money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single line of the cart being priced.
///
/// `exempt` lines (e.g. real estate, vehicles) never receive campaign or
/// coupon discounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub listing_id: ListingId,
    pub seller_id: SellerId,
    pub category: String,
    pub quantity: u32,
    pub unit_price: Money,
    #[serde(default)]
    pub exempt: bool,
}

impl CartLine {
    pub fn line_total(&self) -> Money {
        self.unit_price.times(self.quantity)
    }
}

/// The negotiated price of an accepted offer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OfferPrice {
    UnitPrice(Money),
    LineTotal(Money),
}

impl OfferPrice {
    fn amount(&self) -> Money {
        match self {
            OfferPrice::UnitPrice(amount) | OfferPrice::LineTotal(amount) => *amount,
        }
    }
}

/// A negotiated quantity/price that replaces a cart line's own pricing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OfferOverride {
    pub listing_id: ListingId,
    pub quantity: u32,
    pub price: OfferPrice,
}

impl OfferOverride {
    /// Total for the overridden line.
    pub fn line_total(&self) -> Money {
        match self.price {
            OfferPrice::UnitPrice(unit) => unit.times(self.quantity),
            OfferPrice::LineTotal(total) => total,
        }
    }

    /// Like [`OfferOverride::line_total`], but `None` on overflow.
    pub fn checked_line_total(&self) -> Option<Money> {
        match self.price {
            OfferPrice::UnitPrice(unit) => unit.checked_times(self.quantity),
            OfferPrice::LineTotal(total) => Some(total),
        }
    }

    /// Effective unit price. When only a line total was negotiated it is
    /// spread evenly over the quantity.
    pub fn unit_price(&self) -> Money {
        match self.price {
            OfferPrice::UnitPrice(unit) => unit,
            OfferPrice::LineTotal(total) if self.quantity > 0 => {
                Money::new(total.value() / Decimal::from(self.quantity))
            }
            OfferPrice::LineTotal(total) => total,
        }
    }

    pub(crate) fn price_amount(&self) -> Money {
        self.price.amount()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_offer_with_unit_price() {
        let offer = OfferOverride {
            listing_id: ListingId(1),
            quantity: 2,
            price: OfferPrice::UnitPrice(Money::new(dec!(50.00))),
        };
        assert_eq!(offer.line_total(), Money::new(dec!(100.00)));
        assert_eq!(offer.unit_price(), Money::new(dec!(50.00)));
    }

    #[test]
    fn test_offer_with_line_total() {
        let offer = OfferOverride {
            listing_id: ListingId(1),
            quantity: 3,
            price: OfferPrice::LineTotal(Money::new(dec!(100.00))),
        };
        assert_eq!(offer.line_total(), Money::new(dec!(100.00)));
        assert_eq!(offer.unit_price(), Money::new(dec!(33.33)));
    }

    #[test]
    fn test_offer_price_deserialization() {
        let json = r#"{"listing_id": 7, "quantity": 1, "price": {"line_total": "12.5"}}"#;
        let offer: OfferOverride = serde_json::from_str(json).unwrap();
        assert_eq!(offer.listing_id, ListingId(7));
        assert_eq!(offer.price, OfferPrice::LineTotal(Money::new(dec!(12.50))));
    }

    #[test]
    fn test_line_total() {
        let line = CartLine {
            listing_id: ListingId(1),
            seller_id: SellerId(1),
            category: "books".to_string(),
            quantity: 3,
            unit_price: Money::new(dec!(19.99)),
            exempt: false,
        };
        assert_eq!(line.line_total(), Money::new(dec!(59.97)));
    }
}

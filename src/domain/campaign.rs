use super::ids::{CampaignId, ListingId, SellerId};
use super::money::Money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CampaignKind {
    /// `value` is a percentage of the unit price.
    Percent,
    /// `value` is an amount off the unit price.
    Fixed,
}

/// Which of the seller's listings a campaign applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampaignScope {
    Listings(BTreeSet<ListingId>),
    Categories(BTreeSet<String>),
    AllListings,
}

/// A seller-defined, always-on promotional discount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: CampaignId,
    pub seller_id: SellerId,
    pub kind: CampaignKind,
    pub value: Decimal,
    pub scope: CampaignScope,
}

impl Campaign {
    pub fn applies_to(&self, listing_id: ListingId, category: &str) -> bool {
        match &self.scope {
            CampaignScope::Listings(ids) => ids.contains(&listing_id),
            CampaignScope::Categories(categories) => categories.contains(category),
            CampaignScope::AllListings => true,
        }
    }

    /// Discount this campaign would take off a single unit.
    pub fn unit_discount(&self, unit_price: Money) -> Money {
        match self.kind {
            CampaignKind::Percent => unit_price.percent(self.value),
            CampaignKind::Fixed => Money::new(self.value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn campaign(kind: CampaignKind, value: Decimal, scope: CampaignScope) -> Campaign {
        Campaign {
            id: CampaignId(1),
            seller_id: SellerId(1),
            kind,
            value,
            scope,
        }
    }

    #[test]
    fn test_scope_matching() {
        let by_listing = campaign(
            CampaignKind::Fixed,
            dec!(1),
            CampaignScope::Listings(BTreeSet::from([ListingId(10)])),
        );
        assert!(by_listing.applies_to(ListingId(10), "books"));
        assert!(!by_listing.applies_to(ListingId(11), "books"));

        let by_category = campaign(
            CampaignKind::Fixed,
            dec!(1),
            CampaignScope::Categories(BTreeSet::from(["books".to_string()])),
        );
        assert!(by_category.applies_to(ListingId(99), "books"));
        assert!(!by_category.applies_to(ListingId(99), "toys"));

        let everything = campaign(CampaignKind::Fixed, dec!(1), CampaignScope::AllListings);
        assert!(everything.applies_to(ListingId(5), "anything"));
    }

    #[test]
    fn test_unit_discount() {
        let percent = campaign(CampaignKind::Percent, dec!(12.5), CampaignScope::AllListings);
        assert_eq!(
            percent.unit_discount(Money::new(dec!(19.99))),
            Money::new(dec!(2.50))
        );

        let fixed = campaign(CampaignKind::Fixed, dec!(3.333), CampaignScope::AllListings);
        assert_eq!(
            fixed.unit_discount(Money::new(dec!(19.99))),
            Money::new(dec!(3.33))
        );
    }

    #[test]
    fn test_campaign_deserialization() {
        let json = r#"{
            "id": 3,
            "seller_id": 2,
            "kind": "PERCENT",
            "value": "10",
            "scope": {"categories": ["garden"]}
        }"#;
        let parsed: Campaign = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.kind, CampaignKind::Percent);
        assert!(parsed.applies_to(ListingId(1), "garden"));

        let json = r#"{"id": 4, "seller_id": 2, "kind": "FIXED", "value": 1, "scope": "all_listings"}"#;
        let parsed: Campaign = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.scope, CampaignScope::AllListings);
    }
}

use super::in_memory::{
    InMemoryCampaignSource, InMemoryCouponSource, InMemoryListingCatalog, InMemoryOfferSource,
};
use crate::application::checkout::CheckoutService;
use crate::config::PricingConfig;
use crate::domain::campaign::Campaign;
use crate::domain::ports::{AcceptedOffer, CouponRecord, Listing};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::io::Read;

/// A JSON snapshot of everything the checkout collaborators serve: listings,
/// campaigns, coupons, accepted offers and the pricing policy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub config: Option<PricingConfig>,
    #[serde(default)]
    pub listings: Vec<Listing>,
    #[serde(default)]
    pub campaigns: Vec<Campaign>,
    #[serde(default)]
    pub coupons: Vec<CouponRecord>,
    #[serde(default)]
    pub offers: Vec<AcceptedOffer>,
}

impl Scenario {
    pub fn from_reader<R: Read>(source: R) -> Result<Self> {
        Ok(serde_json::from_reader(source)?)
    }

    /// Pricing policy of the scenario, or the default policy.
    pub fn pricing_config(&self) -> PricingConfig {
        self.config.clone().unwrap_or_default()
    }

    /// Seeds in-memory collaborators with this scenario and wires them into
    /// a checkout service.
    pub async fn into_service(self, config: PricingConfig) -> CheckoutService {
        let catalog = InMemoryListingCatalog::new();
        for listing in self.listings {
            catalog.insert(listing).await;
        }
        let campaigns = InMemoryCampaignSource::new();
        for campaign in self.campaigns {
            campaigns.insert(campaign).await;
        }
        let coupons = InMemoryCouponSource::new();
        for coupon in self.coupons {
            coupons.insert(coupon).await;
        }
        let offers = InMemoryOfferSource::new();
        for offer in self.offers {
            offers.insert(offer).await;
        }

        CheckoutService::new(
            Box::new(catalog),
            Box::new(campaigns),
            Box::new(coupons),
            Box::new(offers),
            config,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::coupon::CouponKind;

    const SCENARIO: &str = r#"{
        "config": {"exempt_categories": ["boats"]},
        "listings": [
            {"id": 1, "seller_id": 10, "category": "books", "unit_price": "12.00"}
        ],
        "campaigns": [
            {"id": 1, "seller_id": 10, "kind": "PERCENT", "value": "10", "scope": "all_listings"}
        ],
        "coupons": [
            {"code": "BOOKS5", "kind": "TYPE_FIXED", "value": "5",
             "eligible_categories": ["books"], "active": false}
        ],
        "offers": [
            {"id": 3, "listing_id": 1, "quantity": 2, "line_total": "20.00"}
        ]
    }"#;

    #[test]
    fn test_parse_scenario() {
        let scenario = Scenario::from_reader(SCENARIO.as_bytes()).unwrap();
        assert_eq!(scenario.listings.len(), 1);
        assert_eq!(scenario.campaigns.len(), 1);
        assert_eq!(scenario.coupons[0].coupon.kind, CouponKind::TypeFixed);
        assert!(!scenario.coupons[0].active);
        assert_eq!(scenario.offers[0].unit_price, None);
        assert!(scenario.pricing_config().is_exempt("boats"));
    }

    #[test]
    fn test_empty_scenario_uses_defaults() {
        let scenario = Scenario::from_reader("{}".as_bytes()).unwrap();
        assert!(scenario.listings.is_empty());
        assert_eq!(scenario.pricing_config(), PricingConfig::default());
    }

    #[test]
    fn test_coupon_active_by_default() {
        let json = r#"{"coupons": [{"code": "X", "kind": "ORDER_FIXED", "value": 1}]}"#;
        let scenario = Scenario::from_reader(json.as_bytes()).unwrap();
        assert!(scenario.coupons[0].active);
    }

    #[test]
    fn test_malformed_scenario() {
        assert!(Scenario::from_reader("{\"listings\": 3}".as_bytes()).is_err());
    }
}

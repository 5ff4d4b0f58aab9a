use crate::domain::campaign::Campaign;
use crate::domain::ids::{ListingId, OfferId, SellerId};
use crate::domain::ports::{
    AcceptedOffer, CampaignSource, CouponRecord, CouponSource, Listing, ListingCatalog,
    OfferSource,
};
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory listing catalog.
///
/// Uses `Arc<RwLock<HashMap<ListingId, Listing>>>` so clones share the same
/// listings.
#[derive(Default, Clone)]
pub struct InMemoryListingCatalog {
    listings: Arc<RwLock<HashMap<ListingId, Listing>>>,
}

impl InMemoryListingCatalog {
    /// Creates a new, empty in-memory listing catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a listing, keyed by its id.
    pub async fn insert(&self, listing: Listing) {
        let mut listings = self.listings.write().await;
        listings.insert(listing.id, listing);
    }
}

#[async_trait]
impl ListingCatalog for InMemoryListingCatalog {
    async fn get(&self, listing_id: ListingId) -> Result<Option<Listing>> {
        let listings = self.listings.read().await;
        Ok(listings.get(&listing_id).cloned())
    }
}

/// In-memory campaigns, grouped per seller in insertion order.
#[derive(Default, Clone)]
pub struct InMemoryCampaignSource {
    campaigns: Arc<RwLock<HashMap<SellerId, Vec<Campaign>>>>,
}

impl InMemoryCampaignSource {
    /// Creates a new, empty in-memory campaign source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a campaign to its seller's list.
    pub async fn insert(&self, campaign: Campaign) {
        let mut campaigns = self.campaigns.write().await;
        campaigns
            .entry(campaign.seller_id)
            .or_default()
            .push(campaign);
    }
}

#[async_trait]
impl CampaignSource for InMemoryCampaignSource {
    async fn active_campaigns(&self, seller_id: SellerId) -> Result<Vec<Campaign>> {
        let campaigns = self.campaigns.read().await;
        Ok(campaigns.get(&seller_id).cloned().unwrap_or_default())
    }
}

/// In-memory coupons keyed by code.
#[derive(Default, Clone)]
pub struct InMemoryCouponSource {
    coupons: Arc<RwLock<HashMap<String, CouponRecord>>>,
}

impl InMemoryCouponSource {
    /// Creates a new, empty in-memory coupon source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a coupon record, keyed by its code.
    pub async fn insert(&self, record: CouponRecord) {
        let mut coupons = self.coupons.write().await;
        coupons.insert(record.coupon.code.clone(), record);
    }
}

#[async_trait]
impl CouponSource for InMemoryCouponSource {
    async fn find(&self, code: &str) -> Result<Option<CouponRecord>> {
        let coupons = self.coupons.read().await;
        Ok(coupons.get(code).cloned())
    }
}

/// In-memory accepted offers keyed by offer id.
#[derive(Default, Clone)]
pub struct InMemoryOfferSource {
    offers: Arc<RwLock<HashMap<OfferId, AcceptedOffer>>>,
}

impl InMemoryOfferSource {
    /// Creates a new, empty in-memory offer source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces an accepted offer, keyed by its id.
    pub async fn insert(&self, offer: AcceptedOffer) {
        let mut offers = self.offers.write().await;
        offers.insert(offer.id, offer);
    }
}

#[async_trait]
impl OfferSource for InMemoryOfferSource {
    async fn accepted_offer(&self, offer_id: OfferId) -> Result<Option<AcceptedOffer>> {
        let offers = self.offers.read().await;
        Ok(offers.get(&offer_id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::campaign::{CampaignKind, CampaignScope};
    use crate::domain::coupon::{Coupon, CouponKind};
    use crate::domain::ids::CampaignId;
    use crate::domain::money::Money;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_in_memory_listing_catalog() {
        let catalog = InMemoryListingCatalog::new();
        let listing = Listing {
            id: ListingId(1),
            seller_id: SellerId(2),
            category: "books".to_string(),
            unit_price: Money::new(dec!(12.50)),
        };
        catalog.insert(listing.clone()).await;

        assert_eq!(catalog.get(ListingId(1)).await.unwrap(), Some(listing));
        assert!(catalog.get(ListingId(2)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_campaigns_keep_seller_order() {
        let source = InMemoryCampaignSource::new();
        for (id, seller) in [(3, 1), (1, 1), (2, 2)] {
            source
                .insert(Campaign {
                    id: CampaignId(id),
                    seller_id: SellerId(seller),
                    kind: CampaignKind::Fixed,
                    value: dec!(1),
                    scope: CampaignScope::AllListings,
                })
                .await;
        }

        let ids: Vec<_> = source
            .active_campaigns(SellerId(1))
            .await
            .unwrap()
            .iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec![CampaignId(3), CampaignId(1)]);
        assert!(source.active_campaigns(SellerId(9)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_in_memory_coupon_source() {
        let source = InMemoryCouponSource::new();
        source
            .insert(CouponRecord {
                coupon: Coupon {
                    code: "WELCOME".to_string(),
                    kind: CouponKind::OrderPercent,
                    value: dec!(5),
                    min_subtotal: None,
                    max_discount: None,
                    eligible_categories: None,
                },
                active: true,
            })
            .await;

        assert!(source.find("WELCOME").await.unwrap().is_some());
        assert!(source.find("welcome").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_in_memory_offer_source() {
        let source = InMemoryOfferSource::new();
        let offer = AcceptedOffer {
            id: OfferId(8),
            listing_id: ListingId(1),
            quantity: 1,
            unit_price: Some(Money::new(dec!(9))),
            line_total: None,
        };
        source.insert(offer.clone()).await;

        assert_eq!(source.accepted_offer(OfferId(8)).await.unwrap(), Some(offer));
        assert!(source.accepted_offer(OfferId(9)).await.unwrap().is_none());
    }
}

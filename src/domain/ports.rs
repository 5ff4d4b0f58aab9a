use super::campaign::Campaign;
use super::coupon::Coupon;
use super::ids::{ListingId, OfferId, SellerId};
use super::money::Money;
use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Catalog view of a listing, as needed for pricing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: ListingId,
    pub seller_id: SellerId,
    pub category: String,
    pub unit_price: Money,
}

/// A stored coupon together with its redemption state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CouponRecord {
    #[serde(flatten)]
    pub coupon: Coupon,
    #[serde(default = "active_by_default")]
    pub active: bool,
}

fn active_by_default() -> bool {
    true
}

/// A price negotiation the buyer and seller have agreed on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcceptedOffer {
    pub id: OfferId,
    pub listing_id: ListingId,
    pub quantity: u32,
    #[serde(default)]
    pub unit_price: Option<Money>,
    #[serde(default)]
    pub line_total: Option<Money>,
}

#[async_trait]
pub trait ListingCatalog: Send + Sync {
    async fn get(&self, listing_id: ListingId) -> Result<Option<Listing>>;
}

#[async_trait]
pub trait CampaignSource: Send + Sync {
    /// Active campaigns of `seller_id`, in the seller's own order.
    async fn active_campaigns(&self, seller_id: SellerId) -> Result<Vec<Campaign>>;
}

#[async_trait]
pub trait CouponSource: Send + Sync {
    async fn find(&self, code: &str) -> Result<Option<CouponRecord>>;
}

#[async_trait]
pub trait OfferSource: Send + Sync {
    async fn accepted_offer(&self, offer_id: OfferId) -> Result<Option<AcceptedOffer>>;
}

pub type ListingCatalogBox = Box<dyn ListingCatalog>;
pub type CampaignSourceBox = Box<dyn CampaignSource>;
pub type CouponSourceBox = Box<dyn CouponSource>;
pub type OfferSourceBox = Box<dyn OfferSource>;

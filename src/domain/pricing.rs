use super::ids::{CampaignId, ListingId, SellerId};
use super::money::Money;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A cart line after campaign pricing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricedLine {
    pub listing_id: ListingId,
    pub seller_id: SellerId,
    pub category: String,
    pub quantity: u32,
    pub original_unit_price: Money,
    pub unit_price_after_campaign: Money,
    pub line_subtotal_original: Money,
    pub line_subtotal_after_campaign: Money,
    pub applied_campaign: Option<CampaignId>,
    /// Excluded from campaign and coupon discounts. Offer-priced lines are
    /// always exempt.
    pub exempt: bool,
    pub offer_applied: bool,
}

/// The fully priced checkout breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingResult {
    pub original_subtotal: Money,
    pub subtotal_after_campaigns: Money,
    pub campaign_discount_total: Money,
    pub coupon_code: Option<String>,
    pub coupon_discount_total: Money,
    pub total_discount: Money,
    pub grand_total: Money,
    pub payable_by_seller: BTreeMap<SellerId, Money>,
    /// Part of the coupon discount the allocator could not place on any
    /// seller. Zero for every well-formed cart.
    pub unallocated_discount: Money,
    pub lines: Vec<PricedLine>,
}

impl PricingResult {
    pub fn total_payable(&self) -> Money {
        self.payable_by_seller.values().sum()
    }
}

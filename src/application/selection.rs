use crate::domain::campaign::Campaign;
use crate::domain::ids::ListingId;
use crate::domain::money::Money;

/// Outcome of picking a campaign for one cart line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CampaignSelection<'a> {
    pub campaign: Option<&'a Campaign>,
    /// Per-unit discount. May exceed the unit price; callers floor the
    /// discounted price at zero.
    pub discount: Money,
}

impl<'a> CampaignSelection<'a> {
    pub const NONE: Self = Self {
        campaign: None,
        discount: Money::ZERO,
    };
}

/// Decides which of a seller's campaigns discounts a cart line.
///
/// The engine calls this once per non-exempt, non-offer line with the
/// seller's campaigns in the order the campaign source returned them.
pub trait CampaignSelectionStrategy: Send + Sync {
    fn select<'a>(
        &self,
        campaigns: &'a [Campaign],
        listing_id: ListingId,
        category: &str,
        unit_price: Money,
    ) -> CampaignSelection<'a>;
}

/// Applies the single campaign with the largest per-unit discount. Campaigns
/// never stack.
#[derive(Debug, Clone, Copy, Default)]
pub struct BestSingleCampaign;

impl CampaignSelectionStrategy for BestSingleCampaign {
    fn select<'a>(
        &self,
        campaigns: &'a [Campaign],
        listing_id: ListingId,
        category: &str,
        unit_price: Money,
    ) -> CampaignSelection<'a> {
        select_best_campaign(campaigns, listing_id, category, unit_price)
    }
}

/// Picks the applicable campaign with the highest per-unit discount.
///
/// Ties go to the campaign listed first. Returns [`CampaignSelection::NONE`]
/// when no applicable campaign yields a positive discount.
pub fn select_best_campaign<'a>(
    campaigns: &'a [Campaign],
    listing_id: ListingId,
    category: &str,
    unit_price: Money,
) -> CampaignSelection<'a> {
    let mut best = CampaignSelection::NONE;
    for campaign in campaigns
        .iter()
        .filter(|campaign| campaign.applies_to(listing_id, category))
    {
        let discount = campaign.unit_discount(unit_price);
        // strictly greater: the earlier campaign keeps a tie
        if discount > best.discount {
            best = CampaignSelection {
                campaign: Some(campaign),
                discount,
            };
        }
    }
    best
}

use super::allocation::allocate;
use super::coupon::compute_coupon_discount;
use super::selection::{BestSingleCampaign, CampaignSelectionStrategy};
use crate::domain::campaign::Campaign;
use crate::domain::cart::{CartLine, OfferOverride};
use crate::domain::coupon::Coupon;
use crate::domain::ids::{ListingId, SellerId};
use crate::domain::money::Money;
use crate::domain::pricing::{PricedLine, PricingResult};
use crate::error::{PricingError, Result};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// Everything needed to price one cart.
#[derive(Debug, Clone, Default)]
pub struct PricingRequest {
    pub lines: Vec<CartLine>,
    /// Active campaigns per seller, in the seller's own order.
    pub campaigns: HashMap<SellerId, Vec<Campaign>>,
    pub coupon: Option<Coupon>,
    pub offer: Option<OfferOverride>,
}

/// Turns cart lines into a priced checkout breakdown.
///
/// The engine is stateless: every call to [`PricingEngine::price`] is a pure
/// function of the request, so one engine can be shared freely across
/// threads.
pub struct PricingEngine<S: CampaignSelectionStrategy = BestSingleCampaign> {
    strategy: S,
}

impl Default for PricingEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl PricingEngine {
    pub fn new() -> Self {
        Self {
            strategy: BestSingleCampaign,
        }
    }
}

#[derive(Default)]
struct Totals {
    original: Money,
    after_campaigns: Money,
    campaign_discount: Money,
    by_seller: BTreeMap<SellerId, Money>,
}

impl<S: CampaignSelectionStrategy> PricingEngine<S> {
    pub fn with_strategy(strategy: S) -> Self {
        Self { strategy }
    }

    /// Prices a cart.
    ///
    /// Lines are priced in input order. Campaigns are applied per line, then
    /// the coupon is evaluated against the post-campaign lines, and finally
    /// the coupon discount is split between sellers.
    ///
    /// # Errors
    ///
    /// Returns `PricingError::Validation` when a line has a zero quantity or
    /// a negative price, when the cart's amounts exceed `Decimal`'s range,
    /// or when the offer override is malformed or targets a listing that is
    /// not in the cart. Nothing is computed in that case.
    pub fn price(&self, request: &PricingRequest) -> Result<PricingResult> {
        validate(request)?;

        let mut totals = Totals::default();
        let mut lines = Vec::with_capacity(request.lines.len());
        // the override applies to the first line carrying its listing
        let mut offer = request.offer.as_ref();

        for line in &request.lines {
            let priced = match offer {
                Some(o) if o.listing_id == line.listing_id => {
                    offer = None;
                    price_offer_line(line, o)
                }
                _ => self.price_line(line, request),
            };

            totals.original += priced.line_subtotal_original;
            totals.after_campaigns += priced.line_subtotal_after_campaign;
            totals.campaign_discount +=
                priced.line_subtotal_original - priced.line_subtotal_after_campaign;
            *totals
                .by_seller
                .entry(priced.seller_id)
                .or_insert(Money::ZERO) += priced.line_subtotal_after_campaign;

            lines.push(priced);
        }

        let coupon_discount = compute_coupon_discount(request.coupon.as_ref(), &lines);
        let allocation = allocate(&totals.by_seller, coupon_discount)?;

        let coupon_code = request
            .coupon
            .as_ref()
            .filter(|_| coupon_discount.is_positive())
            .map(|coupon| coupon.code.clone());

        Ok(PricingResult {
            original_subtotal: totals.original,
            subtotal_after_campaigns: totals.after_campaigns,
            campaign_discount_total: totals.campaign_discount,
            coupon_code,
            coupon_discount_total: coupon_discount,
            total_discount: totals.campaign_discount + coupon_discount,
            grand_total: totals.after_campaigns - coupon_discount,
            payable_by_seller: allocation.payable_by_seller,
            unallocated_discount: allocation.unallocated,
            lines,
        })
    }

    fn price_line(&self, line: &CartLine, request: &PricingRequest) -> PricedLine {
        let line_original = line.line_total();
        let mut priced = PricedLine {
            listing_id: line.listing_id,
            seller_id: line.seller_id,
            category: line.category.clone(),
            quantity: line.quantity,
            original_unit_price: line.unit_price,
            unit_price_after_campaign: line.unit_price,
            line_subtotal_original: line_original,
            line_subtotal_after_campaign: line_original,
            applied_campaign: None,
            exempt: line.exempt,
            offer_applied: false,
        };
        if line.exempt {
            return priced;
        }

        let campaigns = request
            .campaigns
            .get(&line.seller_id)
            .map(Vec::as_slice)
            .unwrap_or_default();
        let selection =
            self.strategy
                .select(campaigns, line.listing_id, &line.category, line.unit_price);

        if let Some(campaign) = selection.campaign {
            let unit_price = (line.unit_price - selection.discount).floor_zero();
            debug!(
                listing = %line.listing_id,
                campaign = %campaign.id,
                discount = %selection.discount,
                "campaign applied"
            );
            priced.unit_price_after_campaign = unit_price;
            priced.line_subtotal_after_campaign = unit_price.times(line.quantity);
            priced.applied_campaign = Some(campaign.id);
        }
        priced
    }
}

fn price_offer_line(line: &CartLine, offer: &OfferOverride) -> PricedLine {
    let line_total = offer.line_total();
    let unit_price = offer.unit_price();
    debug!(listing = %line.listing_id, total = %line_total, "offer price applied");
    PricedLine {
        listing_id: line.listing_id,
        seller_id: line.seller_id,
        category: line.category.clone(),
        quantity: offer.quantity,
        original_unit_price: unit_price,
        unit_price_after_campaign: unit_price,
        line_subtotal_original: line_total,
        line_subtotal_after_campaign: line_total,
        applied_campaign: None,
        exempt: true,
        offer_applied: true,
    }
}

fn out_of_range(listing_id: ListingId) -> PricingError {
    PricingError::Validation(format!(
        "Amounts for listing {} exceed the representable range",
        listing_id
    ))
}

/// Rejects malformed input before any pricing happens.
///
/// Line totals and their running sum are computed with checked arithmetic
/// here; every later amount is bounded by that sum.
fn validate(request: &PricingRequest) -> Result<()> {
    let mut total = Money::ZERO;
    for line in &request.lines {
        if line.quantity == 0 {
            return Err(PricingError::Validation(format!(
                "Listing {} has quantity 0",
                line.listing_id
            )));
        }
        if line.unit_price.is_negative() {
            return Err(PricingError::Validation(format!(
                "Listing {} has negative unit price {}",
                line.listing_id, line.unit_price
            )));
        }
        total = line
            .unit_price
            .checked_times(line.quantity)
            .and_then(|line_total| total.checked_add(line_total))
            .ok_or_else(|| out_of_range(line.listing_id))?;
    }

    if let Some(offer) = &request.offer {
        if !request
            .lines
            .iter()
            .any(|line| line.listing_id == offer.listing_id)
        {
            return Err(PricingError::Validation(format!(
                "Offer targets listing {} which is not in the cart",
                offer.listing_id
            )));
        }
        if offer.quantity == 0 {
            return Err(PricingError::Validation(format!(
                "Offer for listing {} has quantity 0",
                offer.listing_id
            )));
        }
        if offer.price_amount().is_negative() {
            return Err(PricingError::Validation(format!(
                "Offer for listing {} has negative price",
                offer.listing_id
            )));
        }
        offer
            .checked_line_total()
            .and_then(|offer_total| total.checked_add(offer_total))
            .ok_or_else(|| out_of_range(offer.listing_id))?;
    }
    Ok(())
}

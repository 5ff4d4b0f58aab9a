use super::engine::{PricingEngine, PricingRequest};
use super::selection::{BestSingleCampaign, CampaignSelectionStrategy};
use crate::config::PricingConfig;
use crate::domain::cart::{CartLine, OfferOverride, OfferPrice};
use crate::domain::coupon::Coupon;
use crate::domain::ids::{ListingId, OfferId};
use crate::domain::ports::{
    AcceptedOffer, CampaignSourceBox, CouponSourceBox, ListingCatalogBox, OfferSourceBox,
};
use crate::domain::pricing::PricingResult;
use crate::error::{PricingError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{info, instrument, warn};

/// One requested cart item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub listing: ListingId,
    pub quantity: u32,
}

/// A checkout pricing request as the buyer sends it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckoutRequest {
    pub items: Vec<CartItem>,
    #[serde(default)]
    pub coupon_code: Option<String>,
    #[serde(default)]
    pub offer_id: Option<OfferId>,
}

/// Resolves a checkout request against its collaborators and prices it.
///
/// All fetching happens up front; the pricing itself is delegated to a
/// stateless [`PricingEngine`].
pub struct CheckoutService<S: CampaignSelectionStrategy = BestSingleCampaign> {
    catalog: ListingCatalogBox,
    campaigns: CampaignSourceBox,
    coupons: CouponSourceBox,
    offers: OfferSourceBox,
    config: PricingConfig,
    engine: PricingEngine<S>,
}

impl CheckoutService {
    pub fn new(
        catalog: ListingCatalogBox,
        campaigns: CampaignSourceBox,
        coupons: CouponSourceBox,
        offers: OfferSourceBox,
        config: PricingConfig,
    ) -> Self {
        Self::with_engine(catalog, campaigns, coupons, offers, config, PricingEngine::new())
    }
}

impl<S: CampaignSelectionStrategy> CheckoutService<S> {
    pub fn with_engine(
        catalog: ListingCatalogBox,
        campaigns: CampaignSourceBox,
        coupons: CouponSourceBox,
        offers: OfferSourceBox,
        config: PricingConfig,
        engine: PricingEngine<S>,
    ) -> Self {
        Self {
            catalog,
            campaigns,
            coupons,
            offers,
            config,
            engine,
        }
    }

    /// Prices a checkout request.
    ///
    /// # Errors
    ///
    /// Fails if a listing, the coupon code or the offer cannot be resolved,
    /// if the coupon is inactive, or if the engine rejects the assembled
    /// cart.
    #[instrument(skip_all, fields(items = request.items.len()))]
    pub async fn quote(&self, request: &CheckoutRequest) -> Result<PricingResult> {
        let lines = self.resolve_lines(&request.items).await?;

        let mut campaigns = HashMap::new();
        for line in &lines {
            if !campaigns.contains_key(&line.seller_id) {
                let active = self.campaigns.active_campaigns(line.seller_id).await?;
                campaigns.insert(line.seller_id, active);
            }
        }

        let coupon = match &request.coupon_code {
            Some(code) => Some(self.resolve_coupon(code).await?),
            None => None,
        };
        let offer = match request.offer_id {
            Some(offer_id) => Some(self.resolve_offer(offer_id).await?),
            None => None,
        };

        let result = self.engine.price(&PricingRequest {
            lines,
            campaigns,
            coupon,
            offer,
        })?;

        info!(
            grand_total = %result.grand_total,
            campaign_discount = %result.campaign_discount_total,
            coupon_discount = %result.coupon_discount_total,
            sellers = result.payable_by_seller.len(),
            "checkout priced"
        );
        if result.unallocated_discount.is_positive() {
            warn!(
                unallocated = %result.unallocated_discount,
                "coupon discount could not be fully allocated to sellers"
            );
        }
        Ok(result)
    }

    async fn resolve_lines(&self, items: &[CartItem]) -> Result<Vec<CartLine>> {
        let mut lines = Vec::with_capacity(items.len());
        for item in items {
            let listing = self
                .catalog
                .get(item.listing)
                .await?
                .ok_or(PricingError::UnknownListing(item.listing))?;
            let exempt = self.config.is_exempt(&listing.category);
            lines.push(CartLine {
                listing_id: listing.id,
                seller_id: listing.seller_id,
                category: listing.category,
                quantity: item.quantity,
                unit_price: listing.unit_price,
                exempt,
            });
        }
        Ok(lines)
    }

    async fn resolve_coupon(&self, code: &str) -> Result<Coupon> {
        let record = self
            .coupons
            .find(code)
            .await?
            .ok_or_else(|| PricingError::CouponNotFound(code.to_string()))?;
        if !record.active {
            return Err(PricingError::CouponInactive(code.to_string()));
        }
        Ok(record.coupon)
    }

    async fn resolve_offer(&self, offer_id: OfferId) -> Result<OfferOverride> {
        let offer = self
            .offers
            .accepted_offer(offer_id)
            .await?
            .ok_or(PricingError::OfferNotFound(offer_id))?;
        offer_override(offer)
    }
}

/// Converts an accepted offer into the override the engine understands. A
/// negotiated line total takes precedence over a unit price.
///
/// # Errors
///
/// Returns `PricingError::Validation` for an offer with a zero quantity or
/// without any price.
pub fn offer_override(offer: AcceptedOffer) -> Result<OfferOverride> {
    if offer.quantity == 0 {
        return Err(PricingError::Validation(format!(
            "Offer {} has quantity 0",
            offer.id
        )));
    }
    let price = match (offer.line_total, offer.unit_price) {
        (Some(total), _) => OfferPrice::LineTotal(total),
        (None, Some(unit)) => OfferPrice::UnitPrice(unit),
        (None, None) => {
            return Err(PricingError::Validation(format!(
                "Offer {} has neither a unit price nor a line total",
                offer.id
            )));
        }
    };
    Ok(OfferOverride {
        listing_id: offer.listing_id,
        quantity: offer.quantity,
        price,
    })
}

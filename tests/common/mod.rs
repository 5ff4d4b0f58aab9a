#![allow(dead_code)]

use cart_pricing::application::engine::PricingRequest;
use cart_pricing::domain::campaign::{Campaign, CampaignKind, CampaignScope};
use cart_pricing::domain::cart::{CartLine, OfferOverride, OfferPrice};
use cart_pricing::domain::coupon::{Coupon, CouponKind};
use cart_pricing::domain::ids::{CampaignId, ListingId, SellerId};
use cart_pricing::domain::money::Money;
use rand::Rng;
use rand::rngs::StdRng;
use rust_decimal::Decimal;
use std::collections::HashMap;

pub const CATEGORIES: [&str; 4] = ["books", "toys", "garden", "vehicles"];

pub fn line(listing: u64, seller: u64, category: &str, unit_price: Decimal, quantity: u32) -> CartLine {
    CartLine {
        listing_id: ListingId(listing),
        seller_id: SellerId(seller),
        category: category.to_string(),
        quantity,
        unit_price: Money::new(unit_price),
        exempt: category == "vehicles" || category == "real_estate",
    }
}

pub fn campaign(id: u64, seller: u64, kind: CampaignKind, value: Decimal) -> Campaign {
    Campaign {
        id: CampaignId(id),
        seller_id: SellerId(seller),
        kind,
        value,
        scope: CampaignScope::AllListings,
    }
}

pub fn coupon(kind: CouponKind, value: Decimal) -> Coupon {
    Coupon {
        code: "CHECKOUT".to_string(),
        kind,
        value,
        min_subtotal: None,
        max_discount: None,
        eligible_categories: None,
    }
}

/// Random price between 0.00 and 999.99.
pub fn random_price(rng: &mut StdRng) -> Decimal {
    Decimal::new(rng.gen_range(0..100_000), 2)
}

pub fn random_cart(rng: &mut StdRng, sellers: u64) -> Vec<CartLine> {
    let count = rng.gen_range(0..12);
    (0..count)
        .map(|listing| {
            let category = CATEGORIES[rng.gen_range(0..CATEGORIES.len())];
            line(
                listing,
                rng.gen_range(1..=sellers),
                category,
                random_price(rng),
                rng.gen_range(1..=5),
            )
        })
        .collect()
}

pub fn random_campaigns(rng: &mut StdRng, sellers: u64) -> HashMap<SellerId, Vec<Campaign>> {
    let mut next_id = 0;
    (1..=sellers)
        .map(|seller| {
            let campaigns = (0..rng.gen_range(0..4))
                .map(|_| {
                    next_id += 1;
                    if rng.gen_bool(0.5) {
                        campaign(
                            next_id,
                            seller,
                            CampaignKind::Percent,
                            Decimal::from(rng.gen_range(1..=90i64)),
                        )
                    } else {
                        campaign(next_id, seller, CampaignKind::Fixed, random_price(rng) / Decimal::TEN)
                    }
                })
                .collect();
            (SellerId(seller), campaigns)
        })
        .collect()
}

pub fn random_coupon(rng: &mut StdRng) -> Option<Coupon> {
    let kinds = [
        CouponKind::OrderPercent,
        CouponKind::OrderFixed,
        CouponKind::TypePercent,
        CouponKind::TypeFixed,
        CouponKind::ThresholdPercent,
        CouponKind::ThresholdFixed,
    ];
    if rng.gen_bool(0.2) {
        return None;
    }
    let kind = kinds[rng.gen_range(0..kinds.len())];
    let value = if kind.is_percent() {
        Decimal::from(rng.gen_range(1..=100i64))
    } else {
        random_price(rng)
    };
    let mut generated = coupon(kind, value);
    if rng.gen_bool(0.5) {
        generated.min_subtotal = Some(Money::new(random_price(rng)));
    }
    if rng.gen_bool(0.5) {
        generated.max_discount = Some(Money::new(random_price(rng) / Decimal::TEN));
    }
    if rng.gen_bool(0.7) {
        generated.eligible_categories = Some(
            CATEGORIES
                .iter()
                .filter(|_| rng.gen_bool(0.5))
                .map(|c| c.to_string())
                .collect(),
        );
    }
    Some(generated)
}

/// Accepted offer for one of the cart's lines, priced per unit or per line.
pub fn random_offer(rng: &mut StdRng, lines: &[CartLine]) -> Option<OfferOverride> {
    if lines.is_empty() || rng.gen_bool(0.6) {
        return None;
    }
    let target = &lines[rng.gen_range(0..lines.len())];
    let price = if rng.gen_bool(0.5) {
        OfferPrice::UnitPrice(Money::new(random_price(rng)))
    } else {
        OfferPrice::LineTotal(Money::new(random_price(rng)))
    };
    Some(OfferOverride {
        listing_id: target.listing_id,
        quantity: rng.gen_range(1..=5),
        price,
    })
}

pub fn random_request(rng: &mut StdRng) -> PricingRequest {
    let sellers = 4;
    let lines = random_cart(rng, sellers);
    let offer = random_offer(rng, &lines);
    PricingRequest {
        campaigns: random_campaigns(rng, sellers),
        coupon: random_coupon(rng),
        offer,
        lines,
    }
}

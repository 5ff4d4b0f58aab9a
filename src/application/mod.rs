//! Application layer containing the pricing algorithms and their orchestration.
//!
//! `PricingEngine` runs the single forward pass over cart lines (campaign
//! selection, then coupon evaluation, then seller allocation). `CheckoutService`
//! resolves a buyer's request through the collaborator ports and hands the
//! assembled snapshot to the engine.

pub mod allocation;
pub mod checkout;
pub mod coupon;
pub mod engine;
pub mod selection;

use crate::domain::ids::{ListingId, OfferId};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PricingError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Unknown listing: {0}")]
    UnknownListing(ListingId),
    #[error("Coupon not found: {0}")]
    CouponNotFound(String),
    #[error("Coupon is not active: {0}")]
    CouponInactive(String),
    #[error("Accepted offer not found: {0}")]
    OfferNotFound(OfferId),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PricingError>;

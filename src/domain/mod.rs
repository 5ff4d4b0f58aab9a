//! Domain types for cart pricing.
//!
//! Everything here is a request-scoped value: carts, campaigns, coupons and
//! offers are read-only snapshots handed to the engine, and the priced
//! breakdown is produced fresh for every call.

pub mod campaign;
pub mod cart;
pub mod coupon;
pub mod ids;
pub mod money;
pub mod ports;
pub mod pricing;

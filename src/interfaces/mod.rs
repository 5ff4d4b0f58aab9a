//! Adapters between files and the application layer: CSV carts in, JSON or
//! CSV breakdowns out.

pub mod csv;
pub mod json;

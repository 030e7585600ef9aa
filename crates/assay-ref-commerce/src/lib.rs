//! # assay-ref-commerce
//!
//! Commerce reference scenarios for the assay validation engine.
//!
//! Demonstrates three validation scenarios using mock data:
//!
//! 1. **User Profile**: flat fields plus a nested `address` schema.
//! 2. **Order Checkout**: date rules, slice rules over line items, and
//!    per-item nested schemas.
//! 3. **Registration**: a request body decoded from JSON, validated against
//!    limits loaded from TOML, and answered with a JSON response.
//!
//! All data is hardcoded and fictional.

pub mod limits;
pub mod mock_data;
pub mod records;
pub mod scenarios;

pub use limits::RegistrationLimits;

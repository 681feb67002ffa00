//! # ar-pricingengines
//!
//! Pricing of Libor payoffs paid at their natural date `T2` or in arrears at
//! the fixing date `T1`.
//!
//! ## Engines
//!
//! - [`ConvexityEngine`] derives the in-arrears price of *any*
//!   [`PricingKernel`](ar_instruments::PricingKernel) from its natural-unit
//!   price function
//! - [`closed_form`] holds instrument-specific Black formulas (caplet, floater,
//!   quanto caplet) the generic engine is checked against
//! - [`PricingRequest`] is a declarative, serde-backed description of one
//!   pricing request

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod closed_form;
pub mod convexity_engine;
pub mod pricing_request;

pub use convexity_engine::{ConvexityEngine, PriceResult};
pub use pricing_request::{PricingRequest, ProductSpec};

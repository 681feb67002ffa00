//! # ar-termstructures
//!
//! Market inputs for a single Libor period: the [`RateCurvePoint`] pairing
//! two zero-coupon bonds with the forward Libor they imply, and the flat
//! lognormal [`LiborVolatility`] of that Libor.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod libor_volatility;
pub mod rate_curve_point;

pub use libor_volatility::LiborVolatility;
pub use rate_curve_point::{FirstPeriodQuote, RateCurvePoint};

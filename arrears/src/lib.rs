//! # arrears
//!
//! Prices European payoffs on a lognormal forward Libor (caplets, digital
//! caplets, floaters), paid either at the Libor's natural payment date or in
//! arrears at its fixing date.
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on this crate rather than the individual
//! `ar-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use arrears::instruments::CapletKernel;
//! use arrears::pricingengines::ConvexityEngine;
//! use arrears::termstructures::{LiborVolatility, RateCurvePoint};
//!
//! let curve = RateCurvePoint::from_libor(1.0, 2.0, 0.05, 0.91)?;
//! let vol = LiborVolatility::new(0.3)?;
//! let caplet = CapletKernel::new(&curve, vol, 10_000.0, 0.044);
//!
//! let result = ConvexityEngine::new(curve, vol).calculate(&caplet)?;
//! assert!((result.convexity_adjustment - 5.7819).abs() < 1e-4);
//! # Ok::<(), arrears::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use ar_core as core;

/// Normal distribution and Black formulas.
pub use ar_math as math;

/// Curve points and Libor volatility.
pub use ar_termstructures as termstructures;

/// Payoff kernels.
pub use ar_instruments as instruments;

/// Convexity engine, closed forms, and pricing requests.
pub use ar_pricingengines as pricingengines;

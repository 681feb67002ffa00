//! # ar-math
//!
//! Mathematical building blocks: the standard normal distribution (via
//! `statrs`) and the closed-form Black call and digital-call formulas that
//! the payoff kernels are written against.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Closed-form Black-Scholes call and digital-call values.
pub mod black_formula;

/// Probability distributions.
pub mod distributions;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use black_formula::{black_scholes_digital_option_value, black_scholes_option_value};
pub use distributions::normal_cdf;

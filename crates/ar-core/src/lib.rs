//! # ar-core
//!
//! Core types and error definitions for the arrears pricing workspace.
//!
//! Every other crate in the workspace builds on the numeric aliases and the
//! single error enum defined here.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `ensure_formula!` macros.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the workspace.
pub type Real = f64;

/// A rate expressed as a decimal (e.g. 0.05 = 5 %).
pub type Rate = Real;

/// A zero-coupon bond price / discount factor.
pub type DiscountFactor = Real;

/// A price or value.
pub type Price = Real;

/// A lognormal volatility level expressed as a decimal.
pub type Volatility = Real;

/// A time measurement in years.
pub type Time = Real;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};

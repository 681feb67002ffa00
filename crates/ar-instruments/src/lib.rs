//! # ar-instruments
//!
//! Payoffs on a single forward Libor, each expressed as a [`PricingKernel`]:
//! a pure map from a hypothetical initial Libor value to the price of the
//! payoff in natural units (paid at `T2`).
//!
//! - [`CapletKernel`] prices `N P2 τ Black(L, K)`
//! - [`DigitalCapletKernel`] prices `N P2 τ Digital(L, K)`
//! - [`FloaterKernel`] prices `N P2 τ L`

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod caplet;
pub mod digital_caplet;
pub mod floater;
pub mod pricing_kernel;

pub use caplet::CapletKernel;
pub use digital_caplet::DigitalCapletKernel;
pub use floater::FloaterKernel;
pub use pricing_kernel::{AccrualLeg, PricingKernel};

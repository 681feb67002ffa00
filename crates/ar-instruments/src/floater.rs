//! Floating-rate payment `N τ L(T1)`.

use crate::pricing_kernel::{AccrualLeg, PricingKernel};
use ar_core::{errors::Result, Price, Rate, Real};
use ar_termstructures::RateCurvePoint;

/// Pays `N τ L(T1)` at `T2`.
///
/// Natural price: `N P2 τ L`, linear in the initial Libor. At the curve's
/// own forward this equals `N (P1 - P2)`, but the kernel is written in terms
/// of `L` so that it can be evaluated at a shifted Libor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloaterKernel {
    leg: AccrualLeg,
}

impl FloaterKernel {
    /// Floater on the period described by `curve`.
    pub fn new(curve: &RateCurvePoint, notional: Real) -> Self {
        Self {
            leg: AccrualLeg::new(curve, notional),
        }
    }
}

impl PricingKernel for FloaterKernel {
    fn natural_price(&self, initial_libor: Rate) -> Result<Price> {
        Ok(self.leg.scale() * initial_libor)
    }

    fn name(&self) -> &str {
        "Floater"
    }

    fn curve(&self) -> Option<&RateCurvePoint> {
        Some(self.leg.curve())
    }
}

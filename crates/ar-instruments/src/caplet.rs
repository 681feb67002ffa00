//! Caplet on a forward Libor under the Black model.

use crate::pricing_kernel::{AccrualLeg, PricingKernel};
use ar_core::{errors::Result, Price, Rate, Real};
use ar_math::black_scholes_option_value;
use ar_termstructures::{LiborVolatility, RateCurvePoint};

/// Pays `N τ max(L(T1) - K, 0)` at `T2`.
///
/// Natural price: `N P2 τ Black(L, 0, σ, T1, K)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapletKernel {
    leg: AccrualLeg,
    volatility: LiborVolatility,
    strike: Rate,
}

impl CapletKernel {
    /// Caplet struck at `strike` on the period described by `curve`.
    pub fn new(
        curve: &RateCurvePoint,
        volatility: LiborVolatility,
        notional: Real,
        strike: Rate,
    ) -> Self {
        Self {
            leg: AccrualLeg::new(curve, notional),
            volatility,
            strike,
        }
    }

    /// The strike rate.
    pub fn strike(&self) -> Rate {
        self.strike
    }
}

impl PricingKernel for CapletKernel {
    fn natural_price(&self, initial_libor: Rate) -> Result<Price> {
        let call = black_scholes_option_value(
            initial_libor,
            0.0,
            self.volatility.value(),
            self.leg.fixing_time(),
            self.strike,
        )?;
        Ok(self.leg.scale() * call)
    }

    fn name(&self) -> &str {
        "Caplet"
    }

    fn curve(&self) -> Option<&RateCurvePoint> {
        Some(self.leg.curve())
    }

    fn volatility(&self) -> Option<LiborVolatility> {
        Some(self.volatility)
    }
}

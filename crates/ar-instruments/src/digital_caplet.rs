//! Digital caplet on a forward Libor under the Black model.

use crate::pricing_kernel::{AccrualLeg, PricingKernel};
use ar_core::{errors::Result, Price, Rate, Real};
use ar_math::black_scholes_digital_option_value;
use ar_termstructures::{LiborVolatility, RateCurvePoint};

/// Pays `N τ` at `T2` if `L(T1) > K`, nothing otherwise.
///
/// Natural price: `N P2 τ Digital(L, 0, σ, T1, K)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DigitalCapletKernel {
    leg: AccrualLeg,
    volatility: LiborVolatility,
    strike: Rate,
}

impl DigitalCapletKernel {
    /// Digital caplet struck at `strike` on the period described by `curve`.
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

impl PricingKernel for DigitalCapletKernel {
    fn natural_price(&self, initial_libor: Rate) -> Result<Price> {
        let digital = black_scholes_digital_option_value(
            initial_libor,
            0.0,
            self.volatility.value(),
            self.leg.fixing_time(),
            self.strike,
        )?;
        Ok(self.leg.scale() * digital)
    }

    fn name(&self) -> &str {
        "DigitalCaplet"
    }

    fn curve(&self) -> Option<&RateCurvePoint> {
        Some(self.leg.curve())
    }

    fn volatility(&self) -> Option<LiborVolatility> {
        Some(self.volatility)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn natural_price_matches_reference() {
        let curve = RateCurvePoint::from_libor(1.0, 2.0, 0.05, 0.91).unwrap();
        let vol = LiborVolatility::new(0.3).unwrap();
        let digital = DigitalCapletKernel::new(&curve, vol, 10_000.0, 0.044);
        assert_relative_eq!(
            digital.natural_price(0.05).unwrap(),
            5_539.795_037_523_757,
            max_relative = 1e-9
        );
    }

    #[test]
    fn price_is_bounded_by_discounted_accrual() {
        let curve = RateCurvePoint::from_libor(1.0, 1.5, 0.03, 0.97).unwrap();
        let vol = LiborVolatility::new(0.4).unwrap();
        let digital = DigitalCapletKernel::new(&curve, vol, 100.0, 0.02);
        let bound = 100.0 * 0.97 * 0.5;
        for libor in [0.001, 0.02, 0.5, 10.0] {
            let price = digital.natural_price(libor).unwrap();
            assert!((0.0..=bound + 1e-12).contains(&price), "L={libor}: {price}");
        }
    }
}

//! Convexity adjustment for Libor payoffs paid in arrears.
//!
//! A payoff `f(L(T1))` paid at `T2` is priced under the `T2`-forward
//! measure, where the Libor is a driftless lognormal martingale. Paying the
//! same amount at `T1` instead is equivalent to paying
//! `f(L(T1)) (1 + τ L(T1))` at `T2`. Changing measure on the extra
//! `τ L(T1) f(L(T1))` term turns it into `τ L0` times the natural price of
//! `f` with the Libor started at `L0 exp(σ² T1)`:
//!
//! $$V^{arrears} = V(L_0) + \tau L_0\, V\!\left(L_0 e^{\sigma^2 T_1}\right)$$
//!
//! Nothing in the rule depends on `f`, so the engine works for every
//! [`PricingKernel`]. It does depend on the kernel pricing with the engine's
//! own `σ` and `T1`: kernels that report a different curve point or
//! volatility are rejected with [`Error::Configuration`].
//!
//! [`Error::Configuration`]: ar_core::Error::Configuration

use ar_core::{ensure, errors::Result, Price, Rate};
use ar_instruments::PricingKernel;
use ar_termstructures::{LiborVolatility, RateCurvePoint};
use serde::{Deserialize, Serialize};

/// Prices produced by [`ConvexityEngine::calculate`].
///
/// `arrears_price == natural_price + convexity_adjustment` exactly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceResult {
    /// Price of the payoff paid at `T2`.
    pub natural_price: Price,
    /// Extra value from paying at `T1` instead.
    pub convexity_adjustment: Price,
    /// Price of the payoff paid at `T1`.
    pub arrears_price: Price,
}

impl PriceResult {
    /// `false` when the convexity shift overflowed (or a kernel returned a
    /// non-finite value) somewhere along the way.
    pub fn is_finite(&self) -> bool {
        self.natural_price.is_finite()
            && self.convexity_adjustment.is_finite()
            && self.arrears_price.is_finite()
    }
}

/// Generic natural / in-arrears pricer for a single Libor period.
///
/// Holds only immutable market inputs, so one engine can price any number
/// of kernels, from any number of threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvexityEngine {
    curve: RateCurvePoint,
    volatility: LiborVolatility,
}

impl ConvexityEngine {
    /// Engine for the period described by `curve`, with Libor volatility
    /// `volatility`.
    pub fn new(curve: RateCurvePoint, volatility: LiborVolatility) -> Self {
        Self { curve, volatility }
    }

    /// The curve point.
    pub fn curve(&self) -> &RateCurvePoint {
        &self.curve
    }

    /// The Libor volatility.
    pub fn volatility(&self) -> LiborVolatility {
        self.volatility
    }

    /// The moment-matched Libor `L0 exp(σ² T1)` at which kernels are
    /// evaluated for the adjustment.
    ///
    /// Overflows to infinity for extreme `σ² T1`; the overflow is not
    /// intercepted.
    pub fn adjusted_libor(&self) -> Rate {
        self.curve.forward_libor() * self.volatility.variance(self.curve.first_time()).exp()
    }

    /// Fails unless the kernel was built on this engine's period and
    /// payment bond, with this engine's volatility.
    pub fn check_kernel<K>(&self, kernel: &K) -> Result<()>
    where
        K: PricingKernel + ?Sized,
    {
        if let Some(curve) = kernel.curve() {
            ensure!(
                curve.first_time() == self.curve.first_time()
                    && curve.second_time() == self.curve.second_time()
                    && curve.second_bond() == self.curve.second_bond(),
                "{} is on period [{}, {}] with P(T2;0)={}, engine is on [{}, {}] with P(T2;0)={}",
                kernel.name(),
                curve.first_time(),
                curve.second_time(),
                curve.second_bond(),
                self.curve.first_time(),
                self.curve.second_time(),
                self.curve.second_bond()
            );
        }
        if let Some(volatility) = kernel.volatility() {
            ensure!(
                volatility == self.volatility,
                "{} prices with sigma={}, engine has sigma={}",
                kernel.name(),
                volatility.value(),
                self.volatility.value()
            );
        }
        Ok(())
    }

    /// Natural-unit price: the kernel evaluated at the curve's forward Libor.
    pub fn natural_price<K>(&self, kernel: &K) -> Result<Price>
    where
        K: PricingKernel + ?Sized,
    {
        self.check_kernel(kernel)?;
        kernel.natural_price(self.curve.forward_libor())
    }

    /// `τ L0 V(L0 exp(σ² T1))`.
    pub fn convexity_adjustment<K>(&self, kernel: &K) -> Result<Price>
    where
        K: PricingKernel + ?Sized,
    {
        self.check_kernel(kernel)?;
        let shifted = kernel.natural_price(self.adjusted_libor())?;
        Ok(self.curve.forward_libor() * self.curve.period_length() * shifted)
    }

    /// Price of the payoff paid at the fixing date.
    pub fn arrears_price<K>(&self, kernel: &K) -> Result<Price>
    where
        K: PricingKernel + ?Sized,
    {
        Ok(self.calculate(kernel)?.arrears_price)
    }

    /// Natural price, convexity adjustment and arrears price in one pass.
    pub fn calculate<K>(&self, kernel: &K) -> Result<PriceResult>
    where
        K: PricingKernel + ?Sized,
    {
        let natural_price = self.natural_price(kernel)?;
        let convexity_adjustment = self.convexity_adjustment(kernel)?;
        let result = PriceResult {
            natural_price,
            convexity_adjustment,
            arrears_price: natural_price + convexity_adjustment,
        };

        log::debug!(
            "{}: natural={} adjusted_libor={} adjustment={} arrears={}",
            kernel.name(),
            result.natural_price,
            self.adjusted_libor(),
            result.convexity_adjustment,
            result.arrears_price
        );
        if !result.is_finite() {
            log::warn!(
                "{}: non-finite arrears price (sigma={}, T1={})",
                kernel.name(),
                self.volatility.value(),
                self.curve.first_time()
            );
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ar_core::Error;
    use ar_instruments::{CapletKernel, DigitalCapletKernel, FloaterKernel};

    fn engine(sigma: f64) -> ConvexityEngine {
        let curve = RateCurvePoint::from_libor(1.0, 2.0, 0.05, 0.91).unwrap();
        ConvexityEngine::new(curve, LiborVolatility::new(sigma).unwrap())
    }

    #[test]
    fn adjusted_libor_shifts_by_total_variance() {
        let engine = engine(0.3);
        assert_relative_eq!(
            engine.adjusted_libor(),
            0.05 * (0.09_f64).exp(),
            max_relative = 1e-15
        );
    }

    #[test]
    fn zero_volatility_leaves_libor_unchanged() {
        let engine = engine(0.0);
        assert_eq!(engine.adjusted_libor(), engine.curve().forward_libor());
    }

    #[test]
    fn caplet_adjustment_reference() {
        let engine = engine(0.3);
        let caplet = CapletKernel::new(engine.curve(), engine.volatility(), 10_000.0, 0.044);
        let adjustment = engine.convexity_adjustment(&caplet).unwrap();
        assert!((adjustment - 5.7819).abs() < 1e-4, "adjustment = {adjustment}");
    }

    #[test]
    fn arrears_price_is_sum_of_parts() {
        let engine = engine(0.25);
        let floater = FloaterKernel::new(engine.curve(), 1_000_000.0);
        let result = engine.calculate(&floater).unwrap();
        assert_eq!(
            result.arrears_price,
            result.natural_price + result.convexity_adjustment
        );
        assert_eq!(engine.arrears_price(&floater).unwrap(), result.arrears_price);
    }

    #[test]
    fn works_through_trait_objects() {
        let engine = engine(0.2);
        let kernel: Box<dyn PricingKernel> = Box::new(FloaterKernel::new(engine.curve(), 1.0));
        let result = engine.calculate(kernel.as_ref()).unwrap();
        assert!(result.is_finite());
        assert!(result.arrears_price > result.natural_price);
    }

    #[test]
    fn kernel_with_other_volatility_is_rejected() {
        let engine = engine(0.3);
        let caplet = CapletKernel::new(
            engine.curve(),
            LiborVolatility::new(0.2).unwrap(),
            10_000.0,
            0.044,
        );
        assert!(matches!(
            engine.calculate(&caplet),
            Err(Error::Configuration(_))
        ));
        assert!(matches!(
            engine.convexity_adjustment(&caplet),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn kernel_on_other_period_is_rejected() {
        let engine = engine(0.3);
        let later = RateCurvePoint::from_libor(3.0, 4.0, 0.05, 0.91).unwrap();
        let digital = DigitalCapletKernel::new(&later, engine.volatility(), 10_000.0, 0.044);
        assert!(matches!(
            engine.calculate(&digital),
            Err(Error::Configuration(_))
        ));

        let other_bond = RateCurvePoint::from_libor(1.0, 2.0, 0.05, 0.80).unwrap();
        let floater = FloaterKernel::new(&other_bond, 10_000.0);
        assert!(matches!(
            engine.natural_price(&floater),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn kernel_on_same_period_quoted_by_bonds_is_accepted() {
        let engine = engine(0.3);
        let curve = engine.curve();
        let requoted =
            RateCurvePoint::from_bonds(1.0, 2.0, curve.first_bond(), curve.second_bond()).unwrap();
        let caplet = CapletKernel::new(&requoted, engine.volatility(), 10_000.0, 0.044);
        assert!(engine.check_kernel(&caplet).is_ok());
    }

    #[test]
    fn price_result_serialises_field_names() {
        let result = PriceResult {
            natural_price: 1.0,
            convexity_adjustment: 0.5,
            arrears_price: 1.5,
        };
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(
            json,
            r#"{"natural_price":1.0,"convexity_adjustment":0.5,"arrears_price":1.5}"#
        );
    }
}

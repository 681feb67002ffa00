//! The `PricingKernel` capability shared by all Libor payoffs.

use ar_core::{errors::Result, Price, Rate, Real, Time};
use ar_termstructures::{LiborVolatility, RateCurvePoint};
use std::fmt;

/// Natural-unit price of a payoff `f(L(T1))` as a function of the Libor's
/// initial value.
///
/// Implementations capture every payoff parameter at construction and keep
/// no mutable state. `natural_price` must accept any non-negative argument,
/// including values above the curve's own forward Libor: the convexity
/// adjustment evaluates kernels at a shifted Libor.
pub trait PricingKernel: fmt::Debug + Send + Sync {
    /// Price in units of the `T2` bond, assuming the Libor starts at
    /// `initial_libor`.
    fn natural_price(&self, initial_libor: Rate) -> Result<Price>;

    /// Human-readable name.
    fn name(&self) -> &str;

    /// The curve point the kernel reads its period and payment bond from,
    /// if it is tied to one. An engine refuses kernels built on a different
    /// period.
    fn curve(&self) -> Option<&RateCurvePoint> {
        None
    }

    /// The Libor volatility the kernel prices with. `None` for payoffs
    /// whose natural price does not depend on it.
    fn volatility(&self) -> Option<LiborVolatility> {
        None
    }
}

/// The deterministic factor `N · P(T2; 0) · (T2 - T1)` every Libor payoff
/// paid at `T2` is scaled by.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccrualLeg {
    curve: RateCurvePoint,
    notional: Real,
}

impl AccrualLeg {
    /// Leg paying on the period described by `curve`.
    pub fn new(curve: &RateCurvePoint, notional: Real) -> Self {
        Self {
            curve: *curve,
            notional,
        }
    }

    /// The curve point the leg was built on.
    pub fn curve(&self) -> &RateCurvePoint {
        &self.curve
    }

    /// Fixing time `T1`.
    pub fn fixing_time(&self) -> Time {
        self.curve.first_time()
    }

    /// `N · P2 · τ`.
    pub fn scale(&self) -> Real {
        self.notional * self.curve.second_bond() * self.curve.period_length()
    }
}

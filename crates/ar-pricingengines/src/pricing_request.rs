//! Declarative pricing requests.
//!
//! A [`PricingRequest`] carries the raw numbers for one period and one
//! payoff, typically deserialised from JSON or another serde format:
//!
//! ```json
//! {
//!   "first_time": 1.0,
//!   "second_time": 2.0,
//!   "first_period": { "kind": "bond", "value": 0.95 },
//!   "second_bond": 0.91,
//!   "volatility": 0.2,
//!   "notional": 10000.0,
//!   "product": { "type": "caplet", "strike": 0.044 }
//! }
//! ```
//!
//! Nothing is validated until [`PricingRequest::price`] (or one of the
//! builder methods) runs; every failure comes back as an [`Error`].

use crate::convexity_engine::{ConvexityEngine, PriceResult};
use ar_core::{errors::Result, DiscountFactor, Error, Rate, Real, Time, Volatility};
use ar_instruments::{CapletKernel, DigitalCapletKernel, FloaterKernel, PricingKernel};
use ar_termstructures::{FirstPeriodQuote, LiborVolatility, RateCurvePoint};
use serde::{Deserialize, Serialize};

/// The payoff to price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProductSpec {
    /// `max(L - K, 0)`.
    Caplet {
        /// Strike rate.
        strike: Rate,
    },
    /// `1{L > K}`.
    DigitalCaplet {
        /// Strike rate.
        strike: Rate,
    },
    /// `L`.
    Floater,
}

/// Inputs for pricing one Libor payoff, naturally and in arrears.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingRequest {
    /// Fixing time `T1`.
    pub first_time: Time,
    /// Payment time `T2`.
    pub second_time: Time,
    /// `P(T1; 0)` or `L(T1, T2; 0)`.
    pub first_period: FirstPeriodQuote,
    /// `P(T2; 0)`.
    pub second_bond: DiscountFactor,
    /// Black volatility of the Libor.
    pub volatility: Volatility,
    /// Notional amount.
    pub notional: Real,
    /// Payoff.
    pub product: ProductSpec,
}

impl PricingRequest {
    /// Validated curve point.
    pub fn curve(&self) -> Result<RateCurvePoint> {
        RateCurvePoint::new(
            self.first_time,
            self.second_time,
            self.first_period,
            self.second_bond,
        )
    }

    /// Validated volatility.
    pub fn libor_volatility(&self) -> Result<LiborVolatility> {
        LiborVolatility::new(self.volatility)
    }

    /// Engine over the request's curve point and volatility.
    pub fn engine(&self) -> Result<ConvexityEngine> {
        Ok(ConvexityEngine::new(self.curve()?, self.libor_volatility()?))
    }

    /// Kernel for the requested product.
    pub fn kernel(&self) -> Result<Box<dyn PricingKernel>> {
        let curve = self.curve()?;
        let volatility = self.libor_volatility()?;
        self.build_kernel(&curve, volatility)
    }

    /// Natural price, convexity adjustment and arrears price.
    pub fn price(&self) -> Result<PriceResult> {
        let engine = self.engine()?;
        let kernel = self.build_kernel(engine.curve(), engine.volatility())?;
        engine.calculate(kernel.as_ref())
    }

    fn build_kernel(
        &self,
        curve: &RateCurvePoint,
        volatility: LiborVolatility,
    ) -> Result<Box<dyn PricingKernel>> {
        if !self.notional.is_finite() {
            return Err(Error::InvalidArgument(format!(
                "notional must be finite, got {}",
                self.notional
            )));
        }

        let kernel: Box<dyn PricingKernel> = match self.product {
            ProductSpec::Caplet { strike } => Box::new(CapletKernel::new(
                curve,
                volatility,
                self.notional,
                checked_strike(strike)?,
            )),
            ProductSpec::DigitalCaplet { strike } => Box::new(DigitalCapletKernel::new(
                curve,
                volatility,
                self.notional,
                checked_strike(strike)?,
            )),
            ProductSpec::Floater => Box::new(FloaterKernel::new(curve, self.notional)),
        };
        Ok(kernel)
    }
}

fn checked_strike(strike: Rate) -> Result<Rate> {
    if strike.is_finite() {
        Ok(strike)
    } else {
        Err(Error::InvalidArgument(format!(
            "strike must be finite, got {strike}"
        )))
    }
}

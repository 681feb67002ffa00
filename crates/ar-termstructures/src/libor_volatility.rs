//! Flat lognormal volatility of a forward Libor under the Black model.

use ar_core::{ensure, errors::Result, Real, Time, Volatility};
use serde::{Deserialize, Serialize};

/// Black volatility `σ` of the forward Libor.
///
/// Validated at construction: `σ` must be finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct LiborVolatility(Volatility);

impl LiborVolatility {
    /// Wrap `sigma`, rejecting negative or non-finite values.
    pub fn new(sigma: Volatility) -> Result<Self> {
        ensure!(
            sigma.is_finite() && sigma >= 0.0,
            "Libor volatility must be finite and non-negative, got {sigma}"
        );
        Ok(Self(sigma))
    }

    /// The volatility `σ`.
    pub fn value(self) -> Volatility {
        self.0
    }

    /// Total variance `σ² t` accumulated up to `t`.
    pub fn variance(self, t: Time) -> Real {
        self.0 * self.0 * t
    }
}

impl TryFrom<f64> for LiborVolatility {
    type Error = ar_core::Error;

    fn try_from(sigma: f64) -> Result<Self> {
        Self::new(sigma)
    }
}

impl From<LiborVolatility> for f64 {
    fn from(vol: LiborVolatility) -> Self {
        vol.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ar_core::Error;

    #[test]
    fn variance_scales_with_time() {
        let vol = LiborVolatility::new(0.2).unwrap();
        approx::assert_relative_eq!(vol.variance(1.5), 0.06, max_relative = 1e-15);
    }

    #[test]
    fn zero_volatility_is_allowed() {
        let vol = LiborVolatility::new(0.0).unwrap();
        assert_eq!(vol.variance(10.0), 0.0);
    }

    #[test]
    fn negative_and_nan_volatility_are_rejected() {
        for sigma in [-0.01, f64::NAN, f64::INFINITY] {
            let err = LiborVolatility::new(sigma).unwrap_err();
            assert!(matches!(err, Error::Configuration(_)), "sigma={sigma}");
        }
    }

    #[test]
    fn deserialisation_validates() {
        let vol: LiborVolatility = serde_json::from_str("0.25").unwrap();
        assert_eq!(vol.value(), 0.25);
        assert!(serde_json::from_str::<LiborVolatility>("-0.25").is_err());
    }
}

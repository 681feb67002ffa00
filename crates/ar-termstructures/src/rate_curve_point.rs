//! A two-date point on the discount curve and its forward Libor.
//!
//! For a period `[T1, T2]` with accrual `τ = T2 - T1` the zero-coupon bonds
//! and the forward Libor are tied together by
//!
//! $$L_0 = \frac{1}{\tau}\left(\frac{P_1}{P_2} - 1\right)
//! \quad\Longleftrightarrow\quad P_1 = P_2\,(1 + \tau L_0)$$
//!
//! A curve point is quoted with `P2` and *either* `P1` or `L0`; the missing
//! value is derived once, at construction, and the point is immutable
//! afterwards.

use ar_core::{ensure, errors::Result, DiscountFactor, Rate, Time};
use serde::{Deserialize, Serialize};

/// The quote supplied for the start of the period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum FirstPeriodQuote {
    /// The zero-coupon bond `P(T1; 0)`.
    Bond(DiscountFactor),
    /// The forward Libor `L(T1, T2; 0)`.
    Libor(Rate),
}

/// Bond prices and forward Libor for a single period `[T1, T2]`.
///
/// Invariants, established by [`RateCurvePoint::new`]:
/// - `T1 < T2`, all inputs finite;
/// - `P2 > 0`;
/// - `L0 = (P1/P2 - 1) / (T2 - T1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateCurvePoint {
    first_time: Time,
    second_time: Time,
    first_bond: DiscountFactor,
    second_bond: DiscountFactor,
    forward_libor: Rate,
}

impl RateCurvePoint {
    /// Build a curve point from `P2` and either `P1` or `L0`.
    ///
    /// Fails with [`Error::Configuration`](ar_core::Error::Configuration)
    /// when `second_time <= first_time`, when `second_bond <= 0`, or when any
    /// input is not finite.
    pub fn new(
        first_time: Time,
        second_time: Time,
        first_period: FirstPeriodQuote,
        second_bond: DiscountFactor,
    ) -> Result<Self> {
        ensure!(
            first_time.is_finite() && second_time.is_finite(),
            "fixing and payment times must be finite, got T1={first_time}, T2={second_time}"
        );
        ensure!(
            second_time > first_time,
            "payment time T2={second_time} must be after fixing time T1={first_time}"
        );
        ensure!(
            second_bond.is_finite() && second_bond > 0.0,
            "bond P(T2;0) must be positive, got {second_bond}"
        );

        let period_length = second_time - first_time;
        let (first_bond, forward_libor) = match first_period {
            FirstPeriodQuote::Bond(first_bond) => {
                ensure!(
                    first_bond.is_finite(),
                    "bond P(T1;0) must be finite, got {first_bond}"
                );
                let libor = (first_bond / second_bond - 1.0) / period_length;
                log::trace!("derived forward Libor {libor} from P(T1;0)={first_bond}");
                (first_bond, libor)
            }
            FirstPeriodQuote::Libor(libor) => {
                ensure!(libor.is_finite(), "forward Libor must be finite, got {libor}");
                let first_bond = second_bond * (libor * period_length + 1.0);
                log::trace!("derived P(T1;0)={first_bond} from forward Libor {libor}");
                (first_bond, libor)
            }
        };

        Ok(Self {
            first_time,
            second_time,
            first_bond,
            second_bond,
            forward_libor,
        })
    }

    /// Curve point quoted by both bonds.
    pub fn from_bonds(
        first_time: Time,
        second_time: Time,
        first_bond: DiscountFactor,
        second_bond: DiscountFactor,
    ) -> Result<Self> {
        Self::new(
            first_time,
            second_time,
            FirstPeriodQuote::Bond(first_bond),
            second_bond,
        )
    }

    /// Curve point quoted by the forward Libor and the payment-date bond.
    pub fn from_libor(
        first_time: Time,
        second_time: Time,
        forward_libor: Rate,
        second_bond: DiscountFactor,
    ) -> Result<Self> {
        Self::new(
            first_time,
            second_time,
            FirstPeriodQuote::Libor(forward_libor),
            second_bond,
        )
    }

    /// Fixing time `T1`.
    pub fn first_time(&self) -> Time {
        self.first_time
    }

    /// Payment time `T2`.
    pub fn second_time(&self) -> Time {
        self.second_time
    }

    /// `P(T1; 0)`.
    pub fn first_bond(&self) -> DiscountFactor {
        self.first_bond
    }

    /// `P(T2; 0)`.
    pub fn second_bond(&self) -> DiscountFactor {
        self.second_bond
    }

    /// `L(T1, T2; 0)`.
    pub fn forward_libor(&self) -> Rate {
        self.forward_libor
    }

    /// Accrual period `T2 - T1`.
    pub fn period_length(&self) -> Time {
        self.second_time - self.first_time
    }
}

//! Standard normal distribution.

use ar_core::Real;
use std::f64::consts::SQRT_2;

/// The standard normal cumulative distribution function Φ(x).
///
/// `Φ(x) = erfc(-x/√2) / 2`, using the complementary error function from
/// `statrs`. Its rational approximations carry an absolute error of order
/// `1e-11` near the centre; the lower tail keeps its relative accuracy since
/// no `1 - erf` cancellation occurs. Infinite arguments map to 0 and 1.
pub fn normal_cdf(x: Real) -> Real {
    0.5 * statrs::function::erf::erfc(-x / SQRT_2)
}

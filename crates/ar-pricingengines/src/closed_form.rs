//! Instrument-specific Black formulas for caplets, floaters and quanto
//! caplets, natural and in arrears.
//!
//! These are the per-product results that [`ConvexityEngine`] generalises;
//! they are kept as independent cross-checks of the engine.
//!
//! [`ConvexityEngine`]: crate::ConvexityEngine

use ar_core::{ensure, errors::Result, DiscountFactor, Price, Rate, Real, Time, Volatility};
use ar_math::black_scholes_option_value;

/// Caplet paid at `payment_time`:
/// `N P2 τ Black(L0, 0, σ, T1, K)`.
pub fn caplet_black(
    initial_libor: Rate,
    volatility: Volatility,
    strike: Rate,
    fixing_time: Time,
    payment_time: Time,
    payment_bond: DiscountFactor,
    notional: Real,
) -> Result<Price> {
    let period_length = payment_time - fixing_time;
    let call = black_scholes_option_value(initial_libor, 0.0, volatility, fixing_time, strike)?;
    Ok(notional * payment_bond * period_length * call)
}

/// Convexity adjustment of a caplet paid at the fixing date:
/// `N P2 τ² L0 Black(L0 e^{σ² T1}, 0, σ, T1, K)`.
pub fn caplet_in_arrears_convexity_adjustment(
    initial_libor: Rate,
    volatility: Volatility,
    strike: Rate,
    fixing_time: Time,
    payment_time: Time,
    payment_bond: DiscountFactor,
    notional: Real,
) -> Result<Price> {
    let period_length = payment_time - fixing_time;
    let shifted_libor = initial_libor * (volatility * volatility * fixing_time).exp();
    let call = black_scholes_option_value(shifted_libor, 0.0, volatility, fixing_time, strike)?;
    Ok(notional * payment_bond * period_length * period_length * initial_libor * call)
}

/// Caplet paid at the fixing date.
pub fn caplet_in_arrears_black(
    initial_libor: Rate,
    volatility: Volatility,
    strike: Rate,
    fixing_time: Time,
    payment_time: Time,
    payment_bond: DiscountFactor,
    notional: Real,
) -> Result<Price> {
    let natural = caplet_black(
        initial_libor,
        volatility,
        strike,
        fixing_time,
        payment_time,
        payment_bond,
        notional,
    )?;
    let adjustment = caplet_in_arrears_convexity_adjustment(
        initial_libor,
        volatility,
        strike,
        fixing_time,
        payment_time,
        payment_bond,
        notional,
    )?;
    Ok(natural + adjustment)
}

/// Floater paid at `T2`: `N (P1 - P2)`.
pub fn floater_natural(
    notional: Real,
    first_bond: DiscountFactor,
    second_bond: DiscountFactor,
) -> Price {
    notional * (first_bond - second_bond)
}

/// Convexity adjustment of a floater paid at the fixing date:
/// `N P2 L0² τ² e^{σ² T1}`.
pub fn floater_in_arrears_convexity_adjustment(
    initial_libor: Rate,
    volatility: Volatility,
    fixing_time: Time,
    payment_time: Time,
    payment_bond: DiscountFactor,
    notional: Real,
) -> Price {
    let period_length = payment_time - fixing_time;
    notional
        * payment_bond
        * initial_libor
        * initial_libor
        * period_length
        * period_length
        * (volatility * volatility * fixing_time).exp()
}

/// Floater paid at the fixing date, quoted by both bonds.
pub fn floater_in_arrears(
    first_bond: DiscountFactor,
    second_bond: DiscountFactor,
    volatility: Volatility,
    fixing_time: Time,
    payment_time: Time,
    notional: Real,
) -> Price {
    let period_length = payment_time - fixing_time;
    let initial_libor = (first_bond / second_bond - 1.0) / period_length;
    floater_natural(notional, first_bond, second_bond)
        + floater_in_arrears_convexity_adjustment(
            initial_libor,
            volatility,
            fixing_time,
            payment_time,
            second_bond,
            notional,
        )
}

/// Caplet on a foreign Libor, paid in domestic currency at the fixed
/// conversion rate `quanto_rate`.
///
/// With both the foreign Libor and the forward FX rate lognormal, the
/// foreign Libor picks up the drift `-ρ σ_L σ_FX` under the domestic
/// payment measure:
///
/// `quanto_rate · caplet_black(L0 e^{-ρ σ_L σ_FX T1}, ...)`
///
/// Natural units only; there is no arrears counterpart.
#[allow(clippy::too_many_arguments)]
pub fn quanto_caplet_black(
    initial_foreign_libor: Rate,
    foreign_libor_volatility: Volatility,
    fx_volatility: Volatility,
    correlation: Real,
    fixing_time: Time,
    payment_time: Time,
    strike: Rate,
    payment_bond: DiscountFactor,
    notional: Real,
    quanto_rate: Real,
) -> Result<Price> {
    ensure!(
        (-1.0..=1.0).contains(&correlation),
        "FX / Libor correlation must lie in [-1, 1], got {correlation}"
    );
    ensure!(
        fx_volatility.is_finite() && fx_volatility >= 0.0,
        "FX volatility must be finite and non-negative, got {fx_volatility}"
    );

    let drift_adjustment =
        (-correlation * foreign_libor_volatility * fx_volatility * fixing_time).exp();
    let caplet = caplet_black(
        initial_foreign_libor * drift_adjustment,
        foreign_libor_volatility,
        strike,
        fixing_time,
        payment_time,
        payment_bond,
        notional,
    )?;
    Ok(quanto_rate * caplet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ar_core::Error;

    #[test]
    fn caplet_reference_values() {
        let natural = caplet_black(0.05, 0.3, 0.044, 1.0, 2.0, 0.91, 10_000.0).unwrap();
        assert_relative_eq!(natural, 82.816_169_332_852, max_relative = 1e-9);

        let adjustment =
            caplet_in_arrears_convexity_adjustment(0.05, 0.3, 0.044, 1.0, 2.0, 0.91, 10_000.0)
                .unwrap();
        assert!((adjustment - 5.7819).abs() < 1e-4, "adjustment = {adjustment}");

        let arrears = caplet_in_arrears_black(0.05, 0.3, 0.044, 1.0, 2.0, 0.91, 10_000.0).unwrap();
        assert_relative_eq!(arrears, natural + adjustment, max_relative = 1e-15);
    }

    #[test]
    fn floater_reference_values() {
        assert_relative_eq!(floater_natural(10_000.0, 0.95, 0.90), 500.0, max_relative = 1e-12);

        let libor = 0.95 / 0.90 - 1.0;
        let adjustment = floater_in_arrears_convexity_adjustment(libor, 0.25, 1.0, 2.0, 0.90, 10_000.0);
        assert_relative_eq!(adjustment, 29.569_290_525_496, max_relative = 1e-9);
        assert_relative_eq!(
            floater_in_arrears(0.95, 0.90, 0.25, 1.0, 2.0, 10_000.0),
            500.0 + adjustment,
            max_relative = 1e-12
        );
    }

    #[test]
    fn uncorrelated_unit_quanto_is_plain_caplet() {
        let plain = caplet_black(0.05, 0.3, 0.044, 1.0, 2.0, 0.91, 10_000.0).unwrap();
        let quanto =
            quanto_caplet_black(0.05, 0.3, 0.15, 0.0, 1.0, 2.0, 0.044, 0.91, 10_000.0, 1.0)
                .unwrap();
        assert_eq!(quanto, plain);
    }

    #[test]
    fn positive_correlation_lowers_quanto_caplet() {
        let base =
            quanto_caplet_black(0.05, 0.3, 0.15, 0.0, 1.0, 2.0, 0.044, 0.91, 10_000.0, 1.2)
                .unwrap();
        let correlated =
            quanto_caplet_black(0.05, 0.3, 0.15, 0.6, 1.0, 2.0, 0.044, 0.91, 10_000.0, 1.2)
                .unwrap();
        assert!(correlated < base);
    }

    #[test]
    fn quanto_rejects_bad_correlation() {
        let err = quanto_caplet_black(0.05, 0.3, 0.15, 1.5, 1.0, 2.0, 0.044, 0.91, 1.0, 1.0)
            .unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }
}

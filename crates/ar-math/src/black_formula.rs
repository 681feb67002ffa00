//! Black-Scholes call and digital-call values.
//!
//! These are the analytic formulas the payoff kernels are written against.
//! Both take the *spot* value of the underlying together with a risk-free
//! rate; Libor kernels pass `risk_free_rate = 0`, which turns the spot into a
//! driftless forward.
//!
//! Arguments outside the formulas' domain (negative volatility or maturity,
//! NaN parameters) are rejected with [`Error::ExternalFormula`]. The
//! underlying value itself is never validated, so infinities produced
//! upstream flow through to the price.
//!
//! [`Error::ExternalFormula`]: ar_core::Error::ExternalFormula

use crate::distributions::normal_cdf;
use ar_core::{ensure_formula, errors::Result, Price, Rate, Real, Time, Volatility};

/// Value of a European call under lognormal dynamics.
///
/// $$C = e^{-rT}\left(F N(d_+) - K N(d_-)\right), \quad F = S e^{rT}$$
/// $$d_\pm = \frac{\ln(F/K) \pm \tfrac12\sigma^2 T}{\sigma\sqrt{T}}$$
///
/// Degenerate inputs fall back to the discounted intrinsic value
/// `e^{-rT} max(F - K, 0)`: zero underlying, non-positive strike, zero
/// volatility or zero maturity. A negative underlying is priced through
/// `max(X, 0) = X + max(-X, 0)`.
pub fn black_scholes_option_value(
    initial_value: Real,
    risk_free_rate: Rate,
    volatility: Volatility,
    maturity: Time,
    strike: Rate,
) -> Result<Price> {
    check_domain(risk_free_rate, volatility, maturity)?;

    let forward = initial_value * (risk_free_rate * maturity).exp();
    let payoff_unit = (-risk_free_rate * maturity).exp();
    Ok(generalized_call(forward, volatility, maturity, strike, payoff_unit))
}

/// Value of a digital call paying one unit when the underlying finishes
/// above `strike`.
///
/// $$D = e^{-rT} N(d_-)$$
///
/// A non-positive strike is always in the money; a non-positive underlying
/// can never finish above a positive strike. With zero standard deviation the
/// payout is the discounted indicator `F > K`.
pub fn black_scholes_digital_option_value(
    initial_value: Real,
    risk_free_rate: Rate,
    volatility: Volatility,
    maturity: Time,
    strike: Rate,
) -> Result<Price> {
    check_domain(risk_free_rate, volatility, maturity)?;

    let payoff_unit = (-risk_free_rate * maturity).exp();
    if strike <= 0.0 {
        return Ok(payoff_unit);
    }
    let forward = initial_value * (risk_free_rate * maturity).exp();
    if forward <= 0.0 {
        return Ok(0.0);
    }

    let std_dev = volatility * maturity.sqrt();
    if std_dev == 0.0 {
        let in_the_money = if forward > strike { 1.0 } else { 0.0 };
        return Ok(in_the_money * payoff_unit);
    }

    let d_minus = (forward / strike).ln() / std_dev - 0.5 * std_dev;
    Ok(payoff_unit * normal_cdf(d_minus))
}

fn check_domain(risk_free_rate: Rate, volatility: Volatility, maturity: Time) -> Result<()> {
    ensure_formula!(
        risk_free_rate.is_finite(),
        "risk-free rate must be finite, got {risk_free_rate}"
    );
    ensure_formula!(
        volatility >= 0.0,
        "volatility must be non-negative, got {volatility}"
    );
    ensure_formula!(
        maturity >= 0.0,
        "option maturity must be non-negative, got {maturity}"
    );
    Ok(())
}

/// Undiscounted-forward call value scaled by `payoff_unit`.
fn generalized_call(
    forward: Real,
    volatility: Volatility,
    maturity: Time,
    strike: Rate,
    payoff_unit: Real,
) -> Price {
    if forward < 0.0 {
        return (forward - strike) * payoff_unit
            + generalized_call(-forward, volatility, maturity, -strike, payoff_unit);
    }
    if forward == 0.0 || strike <= 0.0 || volatility == 0.0 || maturity == 0.0 {
        return (forward - strike).max(0.0) * payoff_unit;
    }

    let std_dev = volatility * maturity.sqrt();
    let d_plus = (forward / strike).ln() / std_dev + 0.5 * std_dev;
    let d_minus = d_plus - std_dev;
    (forward * normal_cdf(d_plus) - strike * normal_cdf(d_minus)) * payoff_unit
}

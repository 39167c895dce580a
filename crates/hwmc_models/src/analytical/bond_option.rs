//! Closed-form Hull-White options on zero-coupon bonds.
//!
//! Under the one-factor Hull-White model the zero bond `P(T, S)` is
//! log-normal under the `T`-forward measure, so European options on it have
//! Black-style closed forms. The bond-price volatility over the option's
//! life is
//!
//! ```text
//! sigma_p^2 = b(T, S)^2 * factor_variance(0, T)
//! b(T, S)   = (e^{-a T} - e^{-a S}) / a
//! ```
//!
//! which shares the piecewise variance integral with the simulation
//! engine, making these values an independent reference for Monte Carlo
//! results.

use hwmc_core::market_data::curves::YieldCurve;
use hwmc_core::MarketDataError;

use super::distributions::norm_cdf;
use crate::hullwhite::analytics::{factor_variance, maturity_loading};
use crate::hullwhite::HullWhiteParameters;

/// Deterministic-limit guard: below this total volatility the option is
/// valued at intrinsic.
const MIN_TOTAL_VOL: f64 = 1e-12;

fn bond_option_terms(
    params: &HullWhiteParameters,
    curve: &impl YieldCurve<f64>,
    expiry: f64,
    bond_maturity: f64,
    strike: f64,
) -> Result<(f64, f64, f64, f64, f64), MarketDataError> {
    let df_expiry = curve.discount_factor(expiry)?;
    let df_maturity = curve.discount_factor(bond_maturity)?;

    let b = maturity_loading(params, expiry, bond_maturity);
    let sigma_p = b.abs() * factor_variance(params, 0.0, expiry).sqrt();

    let (d1, d2) = if sigma_p < MIN_TOTAL_VOL {
        let sign = if df_maturity >= strike * df_expiry {
            f64::INFINITY
        } else {
            f64::NEG_INFINITY
        };
        (sign, sign)
    } else {
        let d1 = (df_maturity / (strike * df_expiry)).ln() / sigma_p + 0.5 * sigma_p;
        (d1, d1 - sigma_p)
    };

    Ok((df_expiry, df_maturity, sigma_p, d1, d2))
}

/// Value of a European call on a unit zero bond.
///
/// Pays `max(P(T, S) - K, 0)` at expiry `T`, where `S` is the bond
/// maturity. Returns the present value.
///
/// # Errors
///
/// Curve lookups propagate `MarketDataError`.
pub fn zero_bond_call(
    params: &HullWhiteParameters,
    curve: &impl YieldCurve<f64>,
    expiry: f64,
    bond_maturity: f64,
    strike: f64,
) -> Result<f64, MarketDataError> {
    let (df_expiry, df_maturity, _, d1, d2) =
        bond_option_terms(params, curve, expiry, bond_maturity, strike)?;
    Ok(df_maturity * norm_cdf(d1) - strike * df_expiry * norm_cdf(d2))
}

/// Value of a European put on a unit zero bond.
///
/// Pays `max(K - P(T, S), 0)` at expiry `T`.
///
/// # Errors
///
/// Curve lookups propagate `MarketDataError`.
pub fn zero_bond_put(
    params: &HullWhiteParameters,
    curve: &impl YieldCurve<f64>,
    expiry: f64,
    bond_maturity: f64,
    strike: f64,
) -> Result<f64, MarketDataError> {
    let (df_expiry, df_maturity, _, d1, d2) =
        bond_option_terms(params, curve, expiry, bond_maturity, strike)?;
    Ok(strike * df_expiry * norm_cdf(-d2) - df_maturity * norm_cdf(-d1))
}

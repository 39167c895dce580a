//! Pure analytic functions of the Hull-White parameter set.
//!
//! The simulation engine builds its covariance matrix and path update from
//! these three quantities:
//!
//! - [`factor_variance`]: the accumulated variance of the scaled factor
//!   `Y(t) = int_0^t e^{a u} sigma(u) dW(u)`, i.e.
//!   `int sigma(u)^2 e^{2 a u} du` over the piecewise-constant segments.
//!   For two decision times `s <= t` the factor covariance is
//!   `Cov(Y(s), Y(t)) = factor_variance(0, s)`: the variance accumulated
//!   to the earlier time is shared by all later times, which is exactly the
//!   engine's `Cov[i][j] = gamma_min(i,j)` rule.
//! - [`beta`]: its square root, so `gamma_i = beta(0, t_i)^2`.
//! - [`volatility_maturity_part`]: the deterministic loading
//!   `h = (e^{-a T_N} - e^{-a t}) / a` that maps the factor onto the log of
//!   a zero bond maturing at `t`, rebased by the numeraire bond at `T_N`.
//!
//! With these definitions the engine's update
//! `df = pDI * exp(h * y - h^2/2 * gamma)` has expectation `pDI` exactly
//! (log-normal, driftless under the numeraire measure).
//!
//! All functions are stateless; the parameter set is passed explicitly.

use super::parameters::HullWhiteParameters;

/// Below this magnitude the mean reversion is treated as zero and the
/// closed-form a -> 0 limits are used.
const MEAN_REVERSION_EPS: f64 = 1e-10;

/// Accumulated variance of the scaled factor over `[start, end]`.
///
/// Computes `int_start^end sigma(u)^2 e^{2 a u} du` segment by segment,
/// clipping each volatility segment against the integration bounds. The
/// infinite sentinel closing the last segment is only ever an upper clip
/// bound, so it is never evaluated.
///
/// Returns 0 when `end <= start`.
pub fn factor_variance(params: &HullWhiteParameters, start: f64, end: f64) -> f64 {
    let a = params.mean_reversion();
    let times = params.volatility_time();
    let vols = params.volatility();

    let mut acc = 0.0;
    for (j, &sigma) in vols.iter().enumerate() {
        let lo = times[j].max(start);
        let hi = times[j + 1].min(end);
        if hi <= lo {
            continue;
        }
        let segment = if a.abs() < MEAN_REVERSION_EPS {
            hi - lo
        } else {
            ((2.0 * a * hi).exp() - (2.0 * a * lo).exp()) / (2.0 * a)
        };
        acc += sigma * sigma * segment;
    }
    acc
}

/// Square root of the accumulated factor variance over `[start, end]`.
///
/// The engine's per-decision variance is `gamma_i = beta(0, t_i)^2`.
#[inline]
pub fn beta(params: &HullWhiteParameters, start: f64, end: f64) -> f64 {
    factor_variance(params, start, end).sqrt()
}

/// Factor loading of a rebased zero bond maturing at `t`.
///
/// `(e^{-a T_N} - e^{-a t}) / a`, with the a -> 0 limit `t - T_N`.
/// Negative for impact times before the numeraire date, zero at it.
#[inline]
pub fn maturity_loading(params: &HullWhiteParameters, numeraire_time: f64, t: f64) -> f64 {
    let a = params.mean_reversion();
    if a.abs() < MEAN_REVERSION_EPS {
        t - numeraire_time
    } else {
        ((-a * numeraire_time).exp() - (-a * t).exp()) / a
    }
}

/// Factor loadings for a full decision/impact grid.
///
/// `h[i][k] = maturity_loading(numeraire_time, impact_times[i][k])`,
/// matching the ragged shape of the schedule's impact times.
pub fn volatility_maturity_part(
    params: &HullWhiteParameters,
    numeraire_time: f64,
    impact_times: &[Vec<f64>],
) -> Vec<Vec<f64>> {
    impact_times
        .iter()
        .map(|row| {
            row.iter()
                .map(|&t| maturity_loading(params, numeraire_time, t))
                .collect()
        })
        .collect()
}

// src/analytics/gbm_moments.rs
//! Closed-form moments of the two growth models.
//!
//! # Mathematical Foundation
//!
//! Under either update rule the log-value is Gaussian:
//! ```text
//! ln(S_t / S_0) ~ N(log_drift * t, sigma^2 * t)
//! ```
//! so `S_t` is lognormal with mean `S_0 * exp(log_drift * t + sigma^2 t / 2)`
//! and median `S_0 * exp(log_drift * t)`. For the corrected model the mean
//! is `S_0 * exp(mu * t)` (the reference line); for the naive model it
//! overshoots by `exp(sigma^2 t / 2)`.

use crate::math_utils::norm_inv_cdf;
use crate::models::GrowthModel;

/// The volatility drag `sigma^2 / 2`: the per-year gap between the
/// arithmetic-mean growth rate and the realized geometric growth rate.
pub fn volatility_drag(volatility: f64) -> f64 {
    0.5 * volatility * volatility
}

/// Realized (geometric) growth rate: `mu - sigma^2 / 2`.
pub fn geometric_drift(drift: f64, volatility: f64) -> f64 {
    drift - volatility_drag(volatility)
}

/// Lognormal mean of the model value at time `t`.
pub fn expected_value(
    model: GrowthModel,
    initial_value: f64,
    drift: f64,
    volatility: f64,
    t: f64,
) -> f64 {
    let log_drift = model.log_drift(drift, volatility);
    initial_value * ((log_drift + 0.5 * volatility * volatility) * t).exp()
}

/// Lognormal median of the model value at time `t`. Coincides with the
/// geometric mean of the ensemble.
pub fn median_value(
    model: GrowthModel,
    initial_value: f64,
    drift: f64,
    volatility: f64,
    t: f64,
) -> f64 {
    initial_value * (model.log_drift(drift, volatility) * t).exp()
}

/// Lognormal quantile of the model value at time `t`, `q` in `(0, 1)`.
pub fn quantile_value(
    model: GrowthModel,
    initial_value: f64,
    drift: f64,
    volatility: f64,
    t: f64,
    q: f64,
) -> f64 {
    let z = norm_inv_cdf(q);
    initial_value * (model.log_drift(drift, volatility) * t + volatility * t.sqrt() * z).exp()
}

/// Mean and variance of `ln(S_t / S_0)`.
pub fn log_moments(model: GrowthModel, drift: f64, volatility: f64, t: f64) -> (f64, f64) {
    (
        model.log_drift(drift, volatility) * t,
        volatility * volatility * t,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volatility_drag() {
        assert!((volatility_drag(0.40) - 0.08).abs() < 1e-15);
        assert_eq!(volatility_drag(0.0), 0.0);
        assert!((geometric_drift(0.20, 0.40) - 0.12).abs() < 1e-15);
    }

    #[test]
    fn test_corrected_mean_is_reference_line() {
        // E[S_t] under the corrected model is S0 * exp(mu t), independent
        // of volatility.
        let e1 = expected_value(GrowthModel::ItoCorrected, 100.0, 0.20, 0.40, 1.0);
        let e2 = expected_value(GrowthModel::ItoCorrected, 100.0, 0.20, 0.80, 1.0);
        let reference = 100.0 * 0.20_f64.exp();
        assert!((e1 - reference).abs() < 1e-9);
        assert!((e2 - reference).abs() < 1e-9);
    }

    #[test]
    fn test_naive_mean_overshoots() {
        let naive = expected_value(GrowthModel::Naive, 100.0, 0.20, 0.40, 1.0);
        let reference = 100.0 * 0.20_f64.exp();
        assert!((naive - 100.0 * 0.28_f64.exp()).abs() < 1e-9);
        assert!(naive > reference);
    }

    #[test]
    fn test_median_below_mean() {
        let median = median_value(GrowthModel::ItoCorrected, 100.0, 0.20, 0.40, 1.0);
        let mean = expected_value(GrowthModel::ItoCorrected, 100.0, 0.20, 0.40, 1.0);
        assert!((median - 100.0 * 0.12_f64.exp()).abs() < 1e-9);
        assert!(median < mean);
    }

    #[test]
    fn test_quantiles() {
        let median = median_value(GrowthModel::ItoCorrected, 100.0, 0.20, 0.40, 1.0);
        let q50 = quantile_value(GrowthModel::ItoCorrected, 100.0, 0.20, 0.40, 1.0, 0.5);
        assert!((q50 - median).abs() < 1e-9);

        let q05 = quantile_value(GrowthModel::ItoCorrected, 100.0, 0.20, 0.40, 1.0, 0.05);
        let q95 = quantile_value(GrowthModel::ItoCorrected, 100.0, 0.20, 0.40, 1.0, 0.95);
        assert!(q05 < median && median < q95);
    }

    #[test]
    fn test_log_moments() {
        let (m, v) = log_moments(GrowthModel::ItoCorrected, 0.20, 0.40, 1.0);
        assert!((m - 0.12).abs() < 1e-15);
        assert!((v - 0.16).abs() < 1e-15);
    }
}

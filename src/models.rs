// src/models.rs
//! The two competing growth models for geometric Brownian motion.
//!
//! Both exponentiate the same Brownian path; they differ only in the
//! deterministic log-drift applied before exponentiation:
//!
//! ```text
//! Naive:        S_t = S_0 * exp(mu * t + sigma * W_t)
//! ItoCorrected: S_t = S_0 * exp((mu - sigma^2/2) * t + sigma * W_t)
//! ```
//!
//! The naive model applies the classical chain rule and overshoots; the
//! corrected model subtracts the volatility drag `sigma^2/2` that Ito's
//! Lemma identifies.

/// Closed enumeration of the supported update rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrowthModel {
    /// Classical chain rule, uncorrected drift.
    Naive,
    /// Ito-corrected drift: `mu - sigma^2/2`.
    ItoCorrected,
}

impl GrowthModel {
    /// Deterministic log-drift applied per unit time before exponentiation.
    pub fn log_drift(&self, drift: f64, volatility: f64) -> f64 {
        match self {
            GrowthModel::Naive => drift,
            GrowthModel::ItoCorrected => drift - 0.5 * volatility * volatility,
        }
    }

    /// Short display label for tables and CSV headers.
    pub fn label(&self) -> &'static str {
        match self {
            GrowthModel::Naive => "naive",
            GrowthModel::ItoCorrected => "corrected",
        }
    }
}

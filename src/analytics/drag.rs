// src/analytics/drag.rs
//! Final-step comparison of the two models against the reference line.

use std::fmt;

use crate::analytics::gbm_moments;
use crate::mc::engine::SimulationOutput;
use crate::mc::ensemble::PathStat;

/// Headline numbers of a simulation run: where each model's mean ended up
/// relative to the `S0 * exp(mu * T)` target, and the drag that explains
/// the gap.
#[derive(Debug, Clone)]
pub struct DragReport {
    /// Reference line at the horizon, `S0 * exp(mu * T)`.
    pub target: f64,
    /// Mean of the naive ensemble's final values.
    pub naive_mean: f64,
    /// Mean of the corrected ensemble's final values.
    pub corrected_mean: f64,
    /// `naive_mean - target`: the classical chain rule's systematic error.
    pub classical_error: f64,
    /// `corrected_mean - target`: Monte Carlo noise only.
    pub ito_error: f64,
    /// `sigma^2 / 2` per year.
    pub volatility_drag: f64,
    /// `mu - sigma^2 / 2` per year.
    pub geometric_drift: f64,
}

impl DragReport {
    pub fn new(output: &SimulationOutput) -> Self {
        let target = output.theoretical.final_value();
        let naive_mean = output.naive.reduce(PathStat::Mean).final_value();
        let corrected_mean = output.corrected.reduce(PathStat::Mean).final_value();

        let drift = output.params.drift();
        let volatility = output.params.volatility();

        DragReport {
            target,
            naive_mean,
            corrected_mean,
            classical_error: naive_mean - target,
            ito_error: corrected_mean - target,
            volatility_drag: gbm_moments::volatility_drag(volatility),
            geometric_drift: gbm_moments::geometric_drift(drift, volatility),
        }
    }
}

impl fmt::Display for DragReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Target (law):      {:>10.2}", self.target)?;
        writeln!(
            f,
            "Naive mean:        {:>10.2}  (classical error {:+.2})",
            self.naive_mean, self.classical_error
        )?;
        writeln!(
            f,
            "Corrected mean:    {:>10.2}  (ito error {:+.2})",
            self.corrected_mean, self.ito_error
        )?;
        writeln!(
            f,
            "Volatility drag:   {:>10.4} per year",
            self.volatility_drag
        )?;
        write!(
            f,
            "Geometric drift:   {:>10.4} per year",
            self.geometric_drift
        )
    }
}

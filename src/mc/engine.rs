// src/mc/engine.rs
//! The path simulator: one Brownian draw, two growth models.
//!
//! # Math Framework
//!
//! Per path `p`, Brownian increments `dW ~ N(0, sqrt(dt))` are drawn and
//! cumulative-summed into `W[i, p]`, then both grids are filled from the
//! same path:
//!
//! ```text
//! naive[i, p]     = S0 * exp(mu * t_i + sigma * W[i, p])
//! corrected[i, p] = S0 * exp((mu - sigma^2/2) * t_i + sigma * W[i, p])
//! theoretical[i]  = S0 * exp(mu * t_i)
//! ```
//!
//! Sharing the draws between the two models removes sampling noise from
//! their comparison; the gap between the ensembles is purely the drift
//! correction.
//!
//! Simulation is a total function: validated parameters cannot fail, and
//! every produced value is finite and strictly positive by the exponential
//! form.
//!
//! # Parallelism
//!
//! Paths are independent, so the fill is parallel over grid columns with
//! rayon. Each path draws from its own seeded stream (see [`crate::rng`]),
//! so a fixed seed gives bit-identical output for any thread count.

use ndarray::parallel::prelude::*;
use ndarray::{Array2, Axis};

use crate::mc::ensemble::{PathEnsemble, TheoreticalTrajectory};
use crate::models::GrowthModel;
use crate::params::SimulationParameters;
use crate::rng::{GaussianSource, NoiseFactory, RngFactory};

/// Result of one simulation run: both ensembles over shared draws plus
/// the closed-form reference line. Created fresh per run, discarded after
/// rendering; a superseding run simply replaces it.
pub struct SimulationOutput {
    pub params: SimulationParameters,
    pub naive: PathEnsemble,
    pub corrected: PathEnsemble,
    pub theoretical: TheoreticalTrajectory,
}

/// Run a simulation, resolving the noise source from `random_seed`:
/// a supplied seed is reproducible, `None` re-rolls fresh entropy once
/// per invocation.
pub fn simulate(params: &SimulationParameters) -> SimulationOutput {
    match params.random_seed() {
        Some(seed) => simulate_with(params, &RngFactory::new(seed)),
        None => simulate_with(params, &RngFactory::from_entropy()),
    }
}

/// Run a simulation against an injected noise factory.
pub fn simulate_with<F: NoiseFactory>(
    params: &SimulationParameters,
    factory: &F,
) -> SimulationOutput {
    let rows = params.total_steps() + 1;
    let cols = params.path_count();
    let times = params.time_grid();
    let s0 = params.initial_value();
    let mu = params.drift();
    let sigma = params.volatility();
    let sqrt_dt = params.dt().sqrt();

    let naive_drift = GrowthModel::Naive.log_drift(mu, sigma);
    let corrected_drift = GrowthModel::ItoCorrected.log_drift(mu, sigma);

    let mut naive_values: Array2<f64> = Array2::zeros((rows, cols));
    let mut corrected_values: Array2<f64> = Array2::zeros((rows, cols));

    naive_values
        .axis_iter_mut(Axis(1))
        .into_par_iter()
        .zip(corrected_values.axis_iter_mut(Axis(1)).into_par_iter())
        .enumerate()
        .for_each(|(path, (mut naive_col, mut corrected_col))| {
            let mut stream = factory.stream(path);
            let mut w = 0.0;

            // Row 0 is the initial value exactly, for every path.
            naive_col[0] = s0;
            corrected_col[0] = s0;

            for i in 1..rows {
                w += stream.next_gaussian(0.0, sqrt_dt);
                let t = times[i];
                naive_col[i] = s0 * (naive_drift * t + sigma * w).exp();
                corrected_col[i] = s0 * (corrected_drift * t + sigma * w).exp();
            }
        });

    let theoretical_values: Vec<f64> = times.iter().map(|&t| s0 * (mu * t).exp()).collect();

    SimulationOutput {
        params: *params,
        naive: PathEnsemble::new(GrowthModel::Naive, times.clone(), naive_values),
        corrected: PathEnsemble::new(GrowthModel::ItoCorrected, times.clone(), corrected_values),
        theoretical: TheoreticalTrajectory {
            times,
            values: theoretical_values,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::RngFactory;

    fn small_params(volatility: f64, path_count: usize) -> SimulationParameters {
        SimulationParameters::builder()
            .drift(0.10)
            .volatility(volatility)
            .steps_per_year(12)
            .path_count(path_count)
            .random_seed(7)
            .build()
            .unwrap()
    }

    #[test]
    fn test_output_shapes() {
        let params = small_params(0.3, 25);
        let output = simulate(&params);

        assert_eq!(output.naive.n_steps(), 12);
        assert_eq!(output.naive.path_count(), 25);
        assert_eq!(output.corrected.n_steps(), 12);
        assert_eq!(output.theoretical.values.len(), 13);
        assert_eq!(output.naive.times(), output.corrected.times());
    }

    #[test]
    fn test_initial_row_is_exact() {
        let params = small_params(0.3, 25);
        let output = simulate(&params);

        for p in 0..25 {
            assert_eq!(output.naive.values()[[0, p]], 100.0);
            assert_eq!(output.corrected.values()[[0, p]], 100.0);
        }
        assert_eq!(output.theoretical.values[0], 100.0);
    }

    #[test]
    fn test_zero_volatility_collapses_to_theoretical() {
        let params = small_params(0.0, 3);
        let output = simulate(&params);

        for i in 0..=12 {
            let expected = output.theoretical.values[i];
            for p in 0..3 {
                assert_eq!(output.naive.values()[[i, p]], expected);
                assert_eq!(output.corrected.values()[[i, p]], expected);
            }
        }
    }

    #[test]
    fn test_injected_factory_matches_seeded_run() {
        let params = small_params(0.3, 10);
        let seeded = simulate(&params);
        let injected = simulate_with(&params, &RngFactory::new(7));

        assert_eq!(seeded.naive.values(), injected.naive.values());
        assert_eq!(seeded.corrected.values(), injected.corrected.values());
    }
}

// src/params.rs
//! Simulation parameters and their construction boundary.
//!
//! All range checks happen in [`ParameterBuilder::build`]; a constructed
//! [`SimulationParameters`] is immutable and guarantees the simulator a
//! valid input domain, so everything downstream is a total function.
//!
//! # Day-count convention
//!
//! The horizon is cut into `total_steps = round(horizon_years * steps_per_year)`
//! equal steps, so `dt = horizon_years / total_steps` and the time grid runs
//! from exactly `0` to exactly `horizon_years`.

use crate::error::{validation::*, SimError, SimResult};

/// Immutable parameter set that fully determines a simulation run
/// (modulo unseeded randomness when `random_seed` is `None`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationParameters {
    initial_value: f64,
    drift: f64,
    volatility: f64,
    horizon_years: f64,
    steps_per_year: usize,
    path_count: usize,
    random_seed: Option<u64>,
}

impl SimulationParameters {
    /// Start building a parameter set. Defaults: S0 = 100, drift = 0.20,
    /// volatility = 0.40, 1 year horizon, 252 steps/year, 10,000 paths,
    /// unseeded.
    pub fn builder() -> ParameterBuilder {
        ParameterBuilder::default()
    }

    /// Crate-internal constructor for literals already known to be valid
    /// (scenario presets). Public construction goes through the builder.
    pub(crate) fn from_valid_parts(
        initial_value: f64,
        drift: f64,
        volatility: f64,
        horizon_years: f64,
        steps_per_year: usize,
        path_count: usize,
        random_seed: Option<u64>,
    ) -> Self {
        SimulationParameters {
            initial_value,
            drift,
            volatility,
            horizon_years,
            steps_per_year,
            path_count,
            random_seed,
        }
    }

    pub fn initial_value(&self) -> f64 {
        self.initial_value
    }

    pub fn drift(&self) -> f64 {
        self.drift
    }

    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    pub fn horizon_years(&self) -> f64 {
        self.horizon_years
    }

    pub fn steps_per_year(&self) -> usize {
        self.steps_per_year
    }

    pub fn path_count(&self) -> usize {
        self.path_count
    }

    pub fn random_seed(&self) -> Option<u64> {
        self.random_seed
    }

    /// Number of equal steps over the full horizon, at least 1.
    pub fn total_steps(&self) -> usize {
        let steps = (self.horizon_years * self.steps_per_year as f64).round() as usize;
        steps.max(1)
    }

    /// Step size in years.
    pub fn dt(&self) -> f64 {
        self.horizon_years / self.total_steps() as f64
    }

    /// Time grid `t_i = horizon_years * i / total_steps` for
    /// `i = 0..=total_steps`. Starts at exactly 0, ends at exactly
    /// `horizon_years`.
    pub fn time_grid(&self) -> Vec<f64> {
        let n = self.total_steps();
        (0..=n)
            .map(|i| self.horizon_years * i as f64 / n as f64)
            .collect()
    }

    /// Reseeded copy. Seeding cannot invalidate parameters, so no
    /// revalidation is needed.
    pub fn with_seed(&self, seed: u64) -> Self {
        SimulationParameters {
            random_seed: Some(seed),
            ..*self
        }
    }
}

/// Builder for [`SimulationParameters`] with validation in [`build`].
///
/// [`build`]: ParameterBuilder::build
#[derive(Debug, Clone)]
pub struct ParameterBuilder {
    initial_value: f64,
    drift: f64,
    volatility: f64,
    horizon_years: f64,
    steps_per_year: usize,
    path_count: usize,
    random_seed: Option<u64>,
}

impl Default for ParameterBuilder {
    fn default() -> Self {
        ParameterBuilder {
            initial_value: 100.0,
            drift: 0.20,
            volatility: 0.40,
            horizon_years: 1.0,
            steps_per_year: 252,
            path_count: 10_000,
            random_seed: None,
        }
    }
}

impl ParameterBuilder {
    pub fn initial_value(mut self, initial_value: f64) -> Self {
        self.initial_value = initial_value;
        self
    }

    pub fn drift(mut self, drift: f64) -> Self {
        self.drift = drift;
        self
    }

    pub fn volatility(mut self, volatility: f64) -> Self {
        self.volatility = volatility;
        self
    }

    pub fn horizon_years(mut self, horizon_years: f64) -> Self {
        self.horizon_years = horizon_years;
        self
    }

    pub fn steps_per_year(mut self, steps_per_year: usize) -> Self {
        self.steps_per_year = steps_per_year;
        self
    }

    pub fn path_count(mut self, path_count: usize) -> Self {
        self.path_count = path_count;
        self
    }

    pub fn random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    pub fn unseeded(mut self) -> Self {
        self.random_seed = None;
        self
    }

    /// Validate and freeze the parameter set.
    ///
    /// # Errors
    ///
    /// Returns `SimError` when a value is outside its contract: non-positive
    /// initial value or horizon, negative volatility, non-finite drift, or
    /// path/step counts outside their bounds.
    pub fn build(self) -> SimResult<SimulationParameters> {
        validate_positive("initial_value", self.initial_value)?;
        validate_finite("initial_value", self.initial_value)?;
        validate_finite("drift", self.drift)?;
        validate_non_negative("volatility", self.volatility)?;
        validate_finite("volatility", self.volatility)?;
        validate_positive("horizon_years", self.horizon_years)?;
        validate_finite("horizon_years", self.horizon_years)?;
        validate_path_count(self.path_count)?;

        if self.steps_per_year == 0 {
            return Err(SimError::InvalidCount {
                field: "steps_per_year".to_string(),
                reason: "must be greater than 0".to_string(),
            });
        }
        let total_steps = (self.horizon_years * self.steps_per_year as f64).round() as usize;
        validate_step_count(total_steps.max(1))?;

        Ok(SimulationParameters {
            initial_value: self.initial_value,
            drift: self.drift,
            volatility: self.volatility,
            horizon_years: self.horizon_years,
            steps_per_year: self.steps_per_year,
            path_count: self.path_count,
            random_seed: self.random_seed,
        })
    }
}

// src/scenarios.rs
//! Named market scenarios: a fixed mapping from preset name to a
//! parameter literal, resolved before the simulator is invoked.

use crate::params::SimulationParameters;

/// Preset drift/volatility pairs. The remaining parameters are the shared
/// defaults: S0 = 100, 1 year horizon, 252 steps/year, 10,000 paths,
/// unseeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    /// The presentation defaults: mu = 0.20, sigma = 0.40.
    Baseline,
    /// Low drift, low volatility.
    Calm,
    /// Strong trend buried under heavy noise.
    Turbulent,
    /// Negative drift, moderate volatility.
    Bear,
}

impl Scenario {
    pub const ALL: [Scenario; 4] = [
        Scenario::Baseline,
        Scenario::Calm,
        Scenario::Turbulent,
        Scenario::Bear,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Scenario::Baseline => "baseline",
            Scenario::Calm => "calm",
            Scenario::Turbulent => "turbulent",
            Scenario::Bear => "bear",
        }
    }

    pub fn drift(&self) -> f64 {
        match self {
            Scenario::Baseline => 0.20,
            Scenario::Calm => 0.05,
            Scenario::Turbulent => 0.20,
            Scenario::Bear => -0.10,
        }
    }

    pub fn volatility(&self) -> f64 {
        match self {
            Scenario::Baseline => 0.40,
            Scenario::Calm => 0.10,
            Scenario::Turbulent => 0.80,
            Scenario::Bear => 0.30,
        }
    }

    pub fn from_name(name: &str) -> Option<Scenario> {
        Scenario::ALL
            .iter()
            .copied()
            .find(|s| s.label().eq_ignore_ascii_case(name))
    }

    /// Parameter literal for this scenario. The literals are valid by
    /// construction, so no `Result` surfaces here.
    pub fn params(&self) -> SimulationParameters {
        SimulationParameters::from_valid_parts(
            100.0,
            self.drift(),
            self.volatility(),
            1.0,
            252,
            10_000,
            None,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(Scenario::from_name("baseline"), Some(Scenario::Baseline));
        assert_eq!(Scenario::from_name("Turbulent"), Some(Scenario::Turbulent));
        assert_eq!(Scenario::from_name("sideways"), None);
    }

    #[test]
    fn test_presets_are_valid_literals() {
        for scenario in Scenario::ALL {
            let params = scenario.params();
            assert_eq!(params.initial_value(), 100.0);
            assert_eq!(params.total_steps(), 252);
            assert_eq!(params.drift(), scenario.drift());
            assert_eq!(params.volatility(), scenario.volatility());
            assert!(params.random_seed().is_none());
        }
    }
}

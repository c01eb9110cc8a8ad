// src/mc/ensemble.rs
//! Path ensembles and their reductions across the path dimension.
//!
//! A [`PathEnsemble`] is a dense `(time_step, path_index)` grid produced
//! once per simulation and read-only thereafter. Reductions collapse the
//! path axis into a [`SummaryTrajectory`] per time step; which summaries
//! to compute is selected with [`StatsConfig`] flags.

use bitflags::bitflags;
use ndarray::parallel::prelude::*;
use ndarray::{Array2, Axis};
use statrs::statistics::{Data, OrderStatistics};

use crate::models::GrowthModel;

bitflags! {
    /// Selects which summaries [`PathEnsemble::summarize`] computes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct StatsConfig: u32 {
        const NONE     = 0;
        const MEAN     = 1 << 0;
        const MEDIAN   = 1 << 1;
        const GEO_MEAN = 1 << 2;
        const BAND     = 1 << 3;
    }
}

/// Per-time-step reduction across the path axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathStat {
    /// Arithmetic mean.
    Mean,
    /// Geometric mean, `exp(mean(ln x))`.
    GeometricMean,
    /// Median (50th percentile).
    Median,
    /// Percentile in `0..=100`.
    Percentile(f64),
}

impl PathStat {
    /// Reduce one cross-section (all paths at a single time step) to a
    /// scalar.
    pub fn reduce(&self, cross_section: &[f64]) -> f64 {
        match self {
            PathStat::Mean => {
                cross_section.iter().sum::<f64>() / cross_section.len() as f64
            }
            PathStat::GeometricMean => {
                let mean_log = cross_section.iter().map(|x| x.ln()).sum::<f64>()
                    / cross_section.len() as f64;
                mean_log.exp()
            }
            PathStat::Median => {
                let mut data = Data::new(cross_section.to_vec());
                data.median()
            }
            PathStat::Percentile(p) => {
                let mut data = Data::new(cross_section.to_vec());
                data.quantile(p / 100.0)
            }
        }
    }
}

/// Lower/upper percentile pair for uncertainty bands. Defaults to 5–95.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentileBand {
    pub lower: f64,
    pub upper: f64,
}

impl Default for PercentileBand {
    fn default() -> Self {
        PercentileBand {
            lower: 5.0,
            upper: 95.0,
        }
    }
}

/// Dense grid of simulated values indexed by `(time_step, path_index)`.
/// Produced once per parameter set, read-only thereafter.
pub struct PathEnsemble {
    model: GrowthModel,
    times: Vec<f64>,
    values: Array2<f64>,
}

impl PathEnsemble {
    pub(crate) fn new(model: GrowthModel, times: Vec<f64>, values: Array2<f64>) -> Self {
        debug_assert_eq!(times.len(), values.nrows());
        PathEnsemble {
            model,
            times,
            values,
        }
    }

    pub fn model(&self) -> GrowthModel {
        self.model
    }

    /// Number of time steps; the grid has `n_steps() + 1` rows including
    /// the initial row.
    pub fn n_steps(&self) -> usize {
        self.values.nrows() - 1
    }

    pub fn path_count(&self) -> usize {
        self.values.ncols()
    }

    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }

    /// Single path as a time series.
    pub fn path(&self, path: usize) -> Vec<f64> {
        self.values.column(path).to_vec()
    }

    /// Final-step cross-section across all paths.
    pub fn final_values(&self) -> Vec<f64> {
        self.values.row(self.values.nrows() - 1).to_vec()
    }

    /// First `k` paths for background-fan display. `k` is clamped to the
    /// ensemble's path count.
    pub fn sample_paths(&self, k: usize) -> Vec<Vec<f64>> {
        (0..k.min(self.path_count()))
            .map(|p| self.path(p))
            .collect()
    }

    /// Collapse the path dimension with `stat`, one value per time step.
    pub fn reduce(&self, stat: PathStat) -> SummaryTrajectory {
        let values = match stat {
            // ndarray has a fused mean along an axis; use it for the
            // common case.
            PathStat::Mean => self
                .values
                .mean_axis(Axis(1))
                .map(|a| a.to_vec())
                .unwrap_or_default(),
            _ => self
                .values
                .axis_iter(Axis(0))
                .into_par_iter()
                .map(|row| {
                    let cross_section = row.to_vec();
                    stat.reduce(&cross_section)
                })
                .collect(),
        };

        SummaryTrajectory {
            stat,
            times: self.times.clone(),
            values,
        }
    }

    /// Compute the summaries selected by `config` with the default 5–95
    /// percentile band.
    pub fn summarize(&self, config: StatsConfig) -> EnsembleSummary {
        self.summarize_with_band(config, PercentileBand::default())
    }

    pub fn summarize_with_band(&self, config: StatsConfig, band: PercentileBand) -> EnsembleSummary {
        EnsembleSummary {
            mean: config
                .contains(StatsConfig::MEAN)
                .then(|| self.reduce(PathStat::Mean)),
            median: config
                .contains(StatsConfig::MEDIAN)
                .then(|| self.reduce(PathStat::Median)),
            geometric_mean: config
                .contains(StatsConfig::GEO_MEAN)
                .then(|| self.reduce(PathStat::GeometricMean)),
            band: config.contains(StatsConfig::BAND).then(|| {
                (
                    self.reduce(PathStat::Percentile(band.lower)),
                    self.reduce(PathStat::Percentile(band.upper)),
                )
            }),
        }
    }
}

/// Per-time-step reduction of an ensemble; derived, never mutated.
#[derive(Debug, Clone)]
pub struct SummaryTrajectory {
    pub stat: PathStat,
    pub times: Vec<f64>,
    pub values: Vec<f64>,
}

impl SummaryTrajectory {
    pub fn final_value(&self) -> f64 {
        *self.values.last().unwrap_or(&f64::NAN)
    }
}

/// Closed-form expected-value curve, independent of any ensemble.
#[derive(Debug, Clone)]
pub struct TheoreticalTrajectory {
    pub times: Vec<f64>,
    pub values: Vec<f64>,
}

impl TheoreticalTrajectory {
    pub fn final_value(&self) -> f64 {
        *self.values.last().unwrap_or(&f64::NAN)
    }
}

/// Optional summaries selected via [`StatsConfig`]; `band` is the
/// (lower, upper) percentile pair.
pub struct EnsembleSummary {
    pub mean: Option<SummaryTrajectory>,
    pub median: Option<SummaryTrajectory>,
    pub geometric_mean: Option<SummaryTrajectory>,
    pub band: Option<(SummaryTrajectory, SummaryTrajectory)>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr2;

    fn fixture() -> PathEnsemble {
        let values = arr2(&[[100.0, 100.0, 100.0, 100.0], [80.0, 90.0, 110.0, 120.0]]);
        PathEnsemble::new(GrowthModel::ItoCorrected, vec![0.0, 1.0], values)
    }

    #[test]
    fn test_shape_accessors() {
        let ensemble = fixture();
        assert_eq!(ensemble.n_steps(), 1);
        assert_eq!(ensemble.path_count(), 4);
        assert_eq!(ensemble.final_values(), vec![80.0, 90.0, 110.0, 120.0]);
        assert_eq!(ensemble.path(2), vec![100.0, 110.0]);
        assert_eq!(ensemble.sample_paths(10).len(), 4);
    }

    #[test]
    fn test_mean_reduction() {
        let summary = fixture().reduce(PathStat::Mean);
        assert_eq!(summary.values, vec![100.0, 100.0]);
        assert_eq!(summary.final_value(), 100.0);
    }

    #[test]
    fn test_median_reduction() {
        let summary = fixture().reduce(PathStat::Median);
        assert!((summary.values[1] - 100.0).abs() < 1e-12);
    }

    #[test]
    fn test_geometric_mean_below_arithmetic() {
        let summary = fixture().reduce(PathStat::GeometricMean);
        // AM-GM: spread pulls the geometric mean below 100.
        assert!(summary.values[1] < 100.0);
        assert!(summary.values[1] > 80.0);
    }

    #[test]
    fn test_percentiles_bracket_median() {
        let ensemble = fixture();
        let lower = ensemble.reduce(PathStat::Percentile(5.0));
        let upper = ensemble.reduce(PathStat::Percentile(95.0));
        let median = ensemble.reduce(PathStat::Median);
        assert!(lower.values[1] <= median.values[1]);
        assert!(median.values[1] <= upper.values[1]);
    }

    #[test]
    fn test_summarize_respects_flags() {
        let summary = fixture().summarize(StatsConfig::MEAN | StatsConfig::BAND);
        assert!(summary.mean.is_some());
        assert!(summary.band.is_some());
        assert!(summary.median.is_none());
        assert!(summary.geometric_mean.is_none());
    }
}

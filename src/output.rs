// src/output.rs
//! CSV export: how results cross the boundary to whatever plots them.

use std::fs::File;
use std::io::{self, Write};

use crate::analytics::drag::DragReport;
use crate::mc::engine::SimulationOutput;
use crate::mc::ensemble::{PathEnsemble, PathStat};

/// Main comparison frame: time, naive mean, corrected mean, reference line.
pub fn write_comparison_csv(filename: &str, output: &SimulationOutput) -> io::Result<()> {
    let naive_mean = output.naive.reduce(PathStat::Mean);
    let corrected_mean = output.corrected.reduce(PathStat::Mean);

    let mut file = File::create(filename)?;
    writeln!(file, "time,naive_mean,corrected_mean,theoretical")?;
    for (i, &t) in output.theoretical.times.iter().enumerate() {
        writeln!(
            file,
            "{},{},{},{}",
            t, naive_mean.values[i], corrected_mean.values[i], output.theoretical.values[i]
        )?;
    }
    Ok(())
}

/// Background path fan: up to `max_paths` individual trajectories,
/// one column per path.
pub fn write_sample_paths_csv(
    filename: &str,
    ensemble: &PathEnsemble,
    max_paths: usize,
) -> io::Result<()> {
    let paths = ensemble.sample_paths(max_paths);

    let mut file = File::create(filename)?;
    let header: Vec<String> = (0..paths.len())
        .map(|p| format!("{}_{}", ensemble.model().label(), p))
        .collect();
    writeln!(file, "time,{}", header.join(","))?;

    for (i, &t) in ensemble.times().iter().enumerate() {
        let row: Vec<String> = paths.iter().map(|path| path[i].to_string()).collect();
        writeln!(file, "{},{}", t, row.join(","))?;
    }
    Ok(())
}

/// Key/value rows of the drag report, stamped with the generation time.
pub fn write_drag_summary_csv(filename: &str, report: &DragReport) -> io::Result<()> {
    let mut file = File::create(filename)?;
    writeln!(
        file,
        "# Generated: {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    )?;
    writeln!(file, "metric,value")?;
    writeln!(file, "target,{}", report.target)?;
    writeln!(file, "naive_mean,{}", report.naive_mean)?;
    writeln!(file, "corrected_mean,{}", report.corrected_mean)?;
    writeln!(file, "classical_error,{}", report.classical_error)?;
    writeln!(file, "ito_error,{}", report.ito_error)?;
    writeln!(file, "volatility_drag,{}", report.volatility_drag)?;
    writeln!(file, "geometric_drift,{}", report.geometric_drift)?;
    Ok(())
}

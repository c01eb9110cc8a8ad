// demos/microscope.rs
//
// The "microscope test": export one smooth curve and one rough one at
// very high tick density, for zooming in a plotting tool. The smooth
// curve flattens into a straight line under magnification; the simulated
// price path keeps producing new jitters at every zoom level.

use std::fs::File;
use std::io::{self, Write};

use ito_mc::mc::engine::simulate;
use ito_mc::params::SimulationParameters;

fn main() -> io::Result<()> {
    // 100,000 ticks over one year, a single path.
    let params = SimulationParameters::builder()
        .initial_value(100.0)
        .drift(0.0)
        .volatility(1.0)
        .horizon_years(1.0)
        .steps_per_year(100_000)
        .path_count(1)
        .random_seed(42)
        .build()
        .expect("valid parameters");

    println!("Simulating one rough path at {} ticks...", params.total_steps());
    let output = simulate(&params);
    let rough = output.naive.path(0);
    let times = output.naive.times();

    std::fs::create_dir_all("results").ok();
    let mut file = File::create("results/microscope.csv")?;
    writeln!(file, "time,smooth,rough")?;
    for (i, &t) in times.iter().enumerate() {
        let smooth = 100.0 + (5.0 * t).sin();
        writeln!(file, "{},{},{}", t, smooth, rough[i])?;
    }

    println!("Wrote results/microscope.csv");
    println!("Zoom into the smooth column: it straightens out.");
    println!("Zoom into the rough column: new jitters appear at every level.");
    Ok(())
}

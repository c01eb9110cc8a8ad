// demos/demo.rs
use ito_mc::analytics::drag::DragReport;
use ito_mc::analytics::gbm_moments;
use ito_mc::math_utils::Timer;
use ito_mc::mc::engine::simulate;
use ito_mc::mc::ensemble::{PathStat, StatsConfig};
use ito_mc::models::GrowthModel;
use ito_mc::output;
use ito_mc::scenarios::Scenario;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let scenario = args
        .get(1)
        .and_then(|name| Scenario::from_name(name))
        .unwrap_or(Scenario::Baseline);

    println!("Running ito-mc demo, scenario: {}\n", scenario.label());

    // Seeded so repeated demo runs print the same table.
    let params = scenario.params().with_seed(42);
    println!(
        "Parameters: S0 = {}, drift = {:.2}, volatility = {:.2}, {} steps, {} paths",
        params.initial_value(),
        params.drift(),
        params.volatility(),
        params.total_steps(),
        params.path_count()
    );

    let mut timer = Timer::new();
    timer.start();
    let output = simulate(&params);
    let elapsed = timer.elapsed_ms();
    println!(
        "Simulated {} paths x {} steps in {:.1} ms ({:.0} paths/sec)\n",
        params.path_count(),
        params.total_steps(),
        elapsed,
        params.path_count() as f64 / (elapsed / 1000.0)
    );

    // --- Comparison table at a few grid points ---
    let naive_mean = output.naive.reduce(PathStat::Mean);
    let corrected_mean = output.corrected.reduce(PathStat::Mean);
    println!(
        "{:>8} {:>12} {:>12} {:>12}",
        "time", "naive", "corrected", "target"
    );
    let n = output.theoretical.times.len() - 1;
    for i in [0, n / 4, n / 2, 3 * n / 4, n] {
        println!(
            "{:>8.3} {:>12.2} {:>12.2} {:>12.2}",
            output.theoretical.times[i],
            naive_mean.values[i],
            corrected_mean.values[i],
            output.theoretical.values[i]
        );
    }

    // --- Drag report ---
    let report = DragReport::new(&output);
    println!("\n{}\n", report);

    // --- Distributional summary of the corrected model at the horizon ---
    let summary = output
        .corrected
        .summarize(StatsConfig::MEDIAN | StatsConfig::GEO_MEAN | StatsConfig::BAND);
    let t = params.horizon_years();
    if let Some(median) = &summary.median {
        let closed_form = gbm_moments::median_value(
            GrowthModel::ItoCorrected,
            params.initial_value(),
            params.drift(),
            params.volatility(),
            t,
        );
        println!(
            "Corrected median at horizon:   {:.2} (closed form {:.2})",
            median.final_value(),
            closed_form
        );
    }
    if let Some(geo) = &summary.geometric_mean {
        println!("Corrected geometric mean:      {:.2}", geo.final_value());
    }
    if let Some((lower, upper)) = &summary.band {
        println!(
            "Corrected 5-95 band at horizon: [{:.2}, {:.2}]",
            lower.final_value(),
            upper.final_value()
        );
    }

    // --- CSV export ---
    std::fs::create_dir_all("results").ok();

    match output::write_comparison_csv("results/comparison.csv", &output) {
        Ok(_) => println!("\nComparison frame written to results/comparison.csv"),
        Err(e) => eprintln!("\nError writing comparison frame: {}", e),
    }

    // The chart's background fan uses 50 individual corrected paths.
    match output::write_sample_paths_csv("results/sample_paths.csv", &output.corrected, 50) {
        Ok(_) => println!("Sample paths written to results/sample_paths.csv"),
        Err(e) => eprintln!("Error writing sample paths: {}", e),
    }

    match output::write_drag_summary_csv("results/drag_summary.csv", &report) {
        Ok(_) => println!("Drag summary written to results/drag_summary.csv"),
        Err(e) => eprintln!("Error writing drag summary: {}", e),
    }
}

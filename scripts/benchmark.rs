// scripts/benchmark.rs
use std::env;
use std::fs::File;
use std::io::Write;
use std::process::Command;

use ito_mc::analytics::gbm_moments;
use ito_mc::math_utils::{mean, Timer};
use ito_mc::mc::engine::simulate;
use ito_mc::models::GrowthModel;
use ito_mc::scenarios::Scenario;

#[derive(Debug)]
struct SystemInfo {
    os: String,
    cpu_cores: usize,
    rust_version: String,
    rustc_flags: String,
    rayon_threads: usize,
}

impl SystemInfo {
    fn gather() -> Self {
        Self {
            os: env::consts::OS.to_string(),
            cpu_cores: num_cpus::get(),
            rust_version: Self::get_rust_version(),
            rustc_flags: env::var("RUSTFLAGS").unwrap_or_else(|_| "default".to_string()),
            rayon_threads: rayon::current_num_threads(),
        }
    }

    fn get_rust_version() -> String {
        Command::new("rustc")
            .arg("--version")
            .output()
            .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
            .unwrap_or_else(|_| "Unknown Rust version".to_string())
    }
}

#[derive(Debug)]
struct BenchmarkResult {
    name: String,
    paths: usize,
    time_ms: f64,
    throughput_paths_per_sec: f64,
    corrected_mean: f64,
    target: f64,
    relative_error: f64,
}

fn run_simulation_benchmarks() -> Vec<BenchmarkResult> {
    let mut results = Vec::new();

    let paths_configs = [1_000, 10_000, 100_000];

    for scenario in [Scenario::Baseline, Scenario::Turbulent] {
        for &paths in &paths_configs {
            println!(
                "Benchmarking scenario '{}' with {} paths...",
                scenario.label(),
                paths
            );

            let params = ito_mc::params::SimulationParameters::builder()
                .drift(scenario.drift())
                .volatility(scenario.volatility())
                .path_count(paths)
                .random_seed(42)
                .build()
                .expect("Valid scenario parameters");

            let mut timer = Timer::new();
            timer.start();
            let output = simulate(&params);
            let time_ms = timer.elapsed_ms();

            let corrected_mean = mean(&output.corrected.final_values());
            let target = gbm_moments::expected_value(
                GrowthModel::ItoCorrected,
                params.initial_value(),
                params.drift(),
                params.volatility(),
                params.horizon_years(),
            );

            results.push(BenchmarkResult {
                name: format!("{} ({}k paths)", scenario.label(), paths / 1000),
                paths,
                time_ms,
                throughput_paths_per_sec: paths as f64 / (time_ms / 1000.0),
                corrected_mean,
                target,
                relative_error: (corrected_mean - target).abs() / target,
            });
        }
    }

    results
}

fn write_results_to_csv(results: &[BenchmarkResult], system_info: &SystemInfo, filename: &str) {
    let mut file = File::create(filename).expect("Could not create CSV file");

    // Write system information as comments
    writeln!(file, "# System Information").unwrap();
    writeln!(file, "# OS: {}", system_info.os).unwrap();
    writeln!(file, "# CPU Cores: {}", system_info.cpu_cores).unwrap();
    writeln!(file, "# Rust Version: {}", system_info.rust_version).unwrap();
    writeln!(file, "# RUSTFLAGS: {}", system_info.rustc_flags).unwrap();
    writeln!(file, "# Rayon Threads: {}", system_info.rayon_threads).unwrap();
    writeln!(
        file,
        "# Benchmark Date: {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    )
    .unwrap();
    writeln!(file, "#").unwrap();

    writeln!(
        file,
        "Benchmark,Paths,Time_ms,Throughput_paths_per_sec,Corrected_Mean,Target,Relative_Error"
    )
    .unwrap();

    for result in results {
        writeln!(
            file,
            "{},{},{:.2},{:.0},{:.6},{:.6},{:.6}",
            result.name,
            result.paths,
            result.time_ms,
            result.throughput_paths_per_sec,
            result.corrected_mean,
            result.target,
            result.relative_error
        )
        .unwrap();
    }

    println!("Results written to {}", filename);
}

fn main() {
    println!("ito-mc Benchmark Suite");
    println!("======================\n");

    let system_info = SystemInfo::gather();
    println!("System Information:");
    println!("  OS: {}", system_info.os);
    println!("  CPU Cores: {}", system_info.cpu_cores);
    println!("  Rust Version: {}", system_info.rust_version);
    println!("  RUSTFLAGS: {}", system_info.rustc_flags);
    println!("  Rayon Threads: {}", system_info.rayon_threads);
    println!();

    let results = run_simulation_benchmarks();

    println!("\n{:=<90}", "");
    println!("BENCHMARK RESULTS");
    println!("{:=<90}", "");
    println!(
        "{:<25} {:>8} {:>12} {:>15} {:>12} {:>12}",
        "Benchmark", "Paths", "Time (ms)", "Throughput", "Corrected", "Rel Error"
    );
    println!("{:-<90}", "");

    for result in &results {
        println!(
            "{:<25} {:>8} {:>12.2} {:>15.0} {:>12.4} {:>11.2}%",
            result.name,
            result.paths,
            result.time_ms,
            result.throughput_paths_per_sec,
            result.corrected_mean,
            result.relative_error * 100.0
        );
    }

    println!("{:=<90}", "");

    let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
    let filename = format!("benchmark_results_{}.csv", timestamp);
    write_results_to_csv(&results, &system_info, &filename);

    println!("\nBenchmark complete!");
    println!("To reproduce: cargo run --bin benchmark --release");
}

// scripts/benchmark.rs
use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::process::Command;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vanilla_mc::analytics::closed_forms::bs_discounted_price;
use vanilla_mc::math_utils::Timer;
use vanilla_mc::mc::mc_engine::{McConfig, McEngine};
use vanilla_mc::models::gbm::BlackScholesModel;
use vanilla_mc::{SdeResult, VanillaPayoff};

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
            rust_version: Command::new("rustc")
                .arg("--version")
                .output()
                .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
                .unwrap_or_else(|_| "Unknown Rust version".to_string()),
            rustc_flags: env::var("RUSTFLAGS").unwrap_or_else(|_| "default".to_string()),
            rayon_threads: rayon::current_num_threads(),
        }
    }
}

#[derive(Debug)]
struct BenchmarkResult {
    name: String,
    paths: usize,
    steps: usize,
    time_ms: f64,
    throughput_paths_per_sec: f64,
    value: f64,
    analytic_value: f64,
    relative_error: f64,
}

fn run_simulation_benchmarks() -> SdeResult<Vec<BenchmarkResult>> {
    let mut results = Vec::new();

    let s0 = 100.0;
    let k = 100.0;
    let r = 0.05;
    let sigma = 0.2;
    let t = 1.0;
    let model = BlackScholesModel::new(r, sigma);

    for &paths in &[1_000, 10_000, 50_000] {
        for &parallel in &[false, true] {
            info!(paths, parallel, "running benchmark");

            let cfg = McConfig {
                seed: Some(42),
                parallel,
                ..Default::default()
            };
            let mut engine = McEngine::with_config(&model, cfg)?;

            let mut timer = Timer::new();
            timer.start();
            engine.run_simulation(s0, t, paths)?;
            let time_ms = timer.elapsed_ms();

            let grid = engine.time_grid()?;
            let horizon = grid[grid.len() - 1];
            let estimate = engine.price_vanilla(&VanillaPayoff::call(k, horizon), r)?;
            let analytic_value = bs_discounted_price(s0, k, sigma, horizon, r, true);

            results.push(BenchmarkResult {
                name: format!(
                    "Euler GBM call ({})",
                    if engine.config().parallel {
                        "parallel"
                    } else {
                        "sequential"
                    }
                ),
                paths,
                steps: grid.len(),
                time_ms,
                throughput_paths_per_sec: paths as f64 / (time_ms / 1000.0),
                value: estimate.price,
                analytic_value,
                relative_error: (estimate.price - analytic_value).abs() / analytic_value,
            });
        }
    }

    Ok(results)
}

fn write_results_to_csv(
    results: &[BenchmarkResult],
    system_info: &SystemInfo,
    filename: &str,
) -> std::io::Result<()> {
    let mut file = BufWriter::new(File::create(filename)?);

    writeln!(file, "# System Information")?;
    writeln!(file, "# OS: {}", system_info.os)?;
    writeln!(file, "# CPU Cores: {}", system_info.cpu_cores)?;
    writeln!(file, "# Rust Version: {}", system_info.rust_version)?;
    writeln!(file, "# RUSTFLAGS: {}", system_info.rustc_flags)?;
    writeln!(file, "# Rayon Threads: {}", system_info.rayon_threads)?;
    writeln!(
        file,
        "# Benchmark Date: {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    )?;
    writeln!(file, "#")?;

    writeln!(
        file,
        "Benchmark,Paths,Steps,Time_ms,Throughput_paths_per_sec,Value,Analytic_Value,Relative_Error"
    )?;
    for result in results {
        writeln!(
            file,
            "{},{},{},{:.2},{:.0},{:.6},{:.6},{:.6}",
            result.name,
            result.paths,
            result.steps,
            result.time_ms,
            result.throughput_paths_per_sec,
            result.value,
            result.analytic_value,
            result.relative_error
        )?;
    }
    file.flush()
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("vanilla-mc Path Simulation Benchmark");
    println!("====================================\n");

    let system_info = SystemInfo::gather();
    println!("System Information:");
    println!("  OS: {}", system_info.os);
    println!("  CPU Cores: {}", system_info.cpu_cores);
    println!("  Rust Version: {}", system_info.rust_version);
    println!("  RUSTFLAGS: {}", system_info.rustc_flags);
    println!("  Rayon Threads: {}", system_info.rayon_threads);
    println!();

    let results = match run_simulation_benchmarks() {
        Ok(results) => results,
        Err(e) => {
            eprintln!("Benchmark failed: {}", e);
            std::process::exit(1);
        }
    };

    println!("\n{:=<96}", "");
    println!("BENCHMARK RESULTS");
    println!("{:=<96}", "");
    println!(
        "{:<32} {:>8} {:>6} {:>12} {:>12} {:>10} {:>10} {:>10}",
        "Benchmark", "Paths", "Steps", "Time (ms)", "Throughput", "Value", "Analytic", "Rel Error"
    );
    println!("{:-<96}", "");
    for result in &results {
        println!(
            "{:<32} {:>8} {:>6} {:>12.2} {:>12.0} {:>10.4} {:>10.4} {:>9.2}%",
            result.name,
            result.paths,
            result.steps,
            result.time_ms,
            result.throughput_paths_per_sec,
            result.value,
            result.analytic_value,
            result.relative_error * 100.0
        );
    }
    println!("{:=<96}", "");

    let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
    let filename = format!("benchmark_results_{}.csv", timestamp);
    match write_results_to_csv(&results, &system_info, &filename) {
        Ok(()) => println!("\nResults saved to: {}", filename),
        Err(e) => warn!(error = %e, "could not write benchmark results"),
    }

    println!("\nTo reproduce these results:");
    println!("1. Use Rust version: {}", system_info.rust_version);
    println!("2. Set RUSTFLAGS: {}", system_info.rustc_flags);
    println!("3. Run: cargo run --bin benchmark --release");
}

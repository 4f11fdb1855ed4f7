// scripts/benchmark.rs
use bs_greeks::analytics::{bs_analytic, price_and_greeks};
use bs_greeks::config::PricingConfig;
use bs_greeks::math_utils::Timer;
use bs_greeks::scenario::{price_grid_over, ScenarioRange};
use std::env;
use std::fs::File;
use std::io::{self, Write};
use std::process::Command;
use tracing::info;

#[derive(Debug)]
struct SystemInfo {
    os: String,
    cpu_model: String,
    cpu_cores: usize,
    rust_version: String,
    rustc_flags: String,
    rayon_threads: usize,
}

impl SystemInfo {
    fn gather() -> Self {
        Self {
            os: env::consts::OS.to_string(),
            cpu_model: Self::get_cpu_model(),
            cpu_cores: num_cpus::get(),
            rust_version: Self::get_rust_version(),
            rustc_flags: env::var("RUSTFLAGS").unwrap_or_else(|_| "default".to_string()),
            rayon_threads: rayon::current_num_threads(),
        }
    }

    fn get_cpu_model() -> String {
        #[cfg(target_os = "linux")]
        {
            std::fs::read_to_string("/proc/cpuinfo")
                .ok()
                .and_then(|content| {
                    content
                        .lines()
                        .find(|line| line.starts_with("model name"))
                        .and_then(|line| line.split(':').nth(1))
                        .map(|s| s.trim().to_string())
                })
                .unwrap_or_else(|| "Unknown CPU".to_string())
        }

        #[cfg(target_os = "macos")]
        {
            Command::new("sysctl")
                .args(["-n", "machdep.cpu.brand_string"])
                .output()
                .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
                .unwrap_or_else(|_| "Unknown CPU".to_string())
        }

        #[cfg(not(any(target_os = "linux", target_os = "macos")))]
        {
            "Unknown CPU".to_string()
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
    evaluations: usize,
    time_ms: f64,
    throughput_per_sec: f64,
    checksum: f64,
}

impl BenchmarkResult {
    fn new(name: String, evaluations: usize, time_ms: f64, checksum: f64) -> Self {
        Self {
            name,
            evaluations,
            time_ms,
            throughput_per_sec: evaluations as f64 / (time_ms.max(1e-9) / 1000.0),
            checksum,
        }
    }
}

fn run_pointwise_benchmarks() -> Vec<BenchmarkResult> {
    let evaluations = 1_000_000;
    let mut results = Vec::new();

    // Spread spots so the optimizer cannot fold the loop
    let spot_at = |i: usize| 50.0 + (i % 1000) as f64 * 0.1;

    let mut timer = Timer::new();
    timer.start();
    let mut checksum = 0.0;
    for i in 0..evaluations {
        checksum += bs_analytic::bs_call_price(spot_at(i), 100.0, 0.05, 0.2, 1.0);
    }
    results.push(BenchmarkResult::new(
        "bs_call_price".to_string(),
        evaluations,
        timer.elapsed_ms(),
        checksum,
    ));

    timer.start();
    let mut checksum = 0.0;
    for i in 0..evaluations {
        let res = price_and_greeks(spot_at(i), 100.0, 1.0, 0.2, 0.05).expect("Valid inputs");
        checksum += res.call_price + res.delta_call + res.gamma;
    }
    results.push(BenchmarkResult::new(
        "price_and_greeks".to_string(),
        evaluations,
        timer.elapsed_ms(),
        checksum,
    ));

    results
}

fn run_grid_benchmarks() -> Vec<BenchmarkResult> {
    let mut results = Vec::new();

    for &points in &[20usize, 200, 1000] {
        info!(points, "benchmarking grid");
        let spots = ScenarioRange::around(100.0, 0.5, points).expect("Valid spot axis");
        let vols = ScenarioRange::new(0.05, 1.0, points).expect("Valid vol axis");

        for parallel in [false, true] {
            let cfg = PricingConfig {
                parallel_grid: parallel,
                ..Default::default()
            };

            let mut timer = Timer::new();
            timer.start();
            let grid = price_grid_over(&spots, &vols, 100.0, 1.0, 0.05, &cfg).expect("Valid grid");
            let time_ms = timer.elapsed_ms();

            results.push(BenchmarkResult::new(
                format!(
                    "Grid {}x{} ({})",
                    points,
                    points,
                    if parallel { "rayon" } else { "serial" }
                ),
                points * points,
                time_ms,
                grid.call.sum() + grid.put.sum(),
            ));
        }
    }

    results
}

fn write_results_to_csv(results: &[BenchmarkResult], system_info: &SystemInfo, filename: &str) -> io::Result<()> {
    let mut file = File::create(filename)?;

    writeln!(file, "# System Information")?;
    writeln!(file, "# OS: {}", system_info.os)?;
    writeln!(file, "# CPU: {}", system_info.cpu_model)?;
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

    writeln!(file, "Benchmark,Evaluations,Time_ms,Throughput_per_sec,Checksum")?;
    for result in results {
        writeln!(
            file,
            "{},{},{:.3},{:.0},{:.6}",
            result.name, result.evaluations, result.time_ms, result.throughput_per_sec, result.checksum
        )?;
    }

    Ok(())
}

fn main() {
    tracing_subscriber::fmt::init();

    println!("bs-greeks Benchmark Suite");
    println!("=========================\n");

    let system_info = SystemInfo::gather();

    println!("System Information:");
    println!("  OS: {}", system_info.os);
    println!("  CPU: {}", system_info.cpu_model);
    println!("  CPU Cores: {}", system_info.cpu_cores);
    println!("  Rust Version: {}", system_info.rust_version);
    println!("  RUSTFLAGS: {}", system_info.rustc_flags);
    println!("  Rayon Threads: {}", system_info.rayon_threads);
    println!();

    println!("Running pointwise benchmarks...");
    let mut all_results = run_pointwise_benchmarks();

    println!("Running grid benchmarks...");
    all_results.extend(run_grid_benchmarks());

    println!("\n{:=<80}", "");
    println!("BENCHMARK RESULTS");
    println!("{:=<80}", "");
    println!(
        "{:<28} {:>12} {:>12} {:>16} {:>8}",
        "Benchmark", "Evaluations", "Time (ms)", "Evals/sec", "Checksum"
    );
    println!("{:-<80}", "");
    for result in &all_results {
        println!(
            "{:<28} {:>12} {:>12.3} {:>16.0} {:>8.2e}",
            result.name, result.evaluations, result.time_ms, result.throughput_per_sec, result.checksum
        );
    }
    println!("{:=<80}", "");

    let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
    let filename = format!("benchmark_results_{}.csv", timestamp);
    match write_results_to_csv(&all_results, &system_info, &filename) {
        Ok(()) => println!("\nResults saved to: {}", filename),
        Err(e) => eprintln!("\nCould not write {}: {}", filename, e),
    }
}

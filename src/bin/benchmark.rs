//! Performance benchmark comparing sequential and parallel generations

use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;
use voxel_life::domain::{Algorithm, DEFAULT_LIVE_PROBABILITY, Lattice, engine};

#[derive(Parser, Debug)]
#[command(name = "voxel_life-benchmark", about = "Time generation steps across lattice sizes")]
struct Args {
    /// Lattice edge lengths to measure
    #[arg(long, value_delimiter = ',', default_value = "10,25,50,100,150")]
    sizes: Vec<i32>,

    /// Generations per measurement
    #[arg(long, default_value_t = 10)]
    iterations: u32,

    /// Seed for the initial lattice
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn benchmark(lattice: &Lattice, algorithm: Algorithm, iterations: u32) -> f64 {
    let mut current = lattice.clone();

    let start = Instant::now();
    for _ in 0..iterations {
        current = engine::advance_with(&current, algorithm);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations.max(1) as f64
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("voxel_life=warn")),
        )
        .init();

    let args = Args::parse();
    info!(?args, "running benchmark");

    println!("=== Voxel Life Performance Benchmark ===\n");
    println!(
        "{:>12} {:>14} {:>14} {:>10} {:>16}",
        "Size", "Sequential", "Parallel", "Speedup", "Cells/sec (par)"
    );
    println!("{:-<70}", "");

    for size in args.sizes {
        let mut rng = StdRng::seed_from_u64(args.seed);
        let lattice = Lattice::initialize(size, DEFAULT_LIVE_PROBABILITY, &mut rng);

        let sequential_ms = benchmark(&lattice, Algorithm::Sequential, args.iterations);
        let parallel_ms = benchmark(&lattice, Algorithm::Parallel, args.iterations);

        let speedup = if parallel_ms > 0.0 { sequential_ms / parallel_ms } else { 0.0 };
        let throughput = if parallel_ms > 0.0 {
            lattice.len() as f64 / (parallel_ms / 1000.0) / 1_000_000.0
        } else {
            0.0
        };

        println!(
            "{:>12} {:>11.2} ms {:>11.2} ms {:>9.1}x {:>14.1}M",
            format!("{0}x{0}x{0}", size.max(0)),
            sequential_ms,
            parallel_ms,
            speedup,
            throughput
        );
    }
}

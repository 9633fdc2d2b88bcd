//! Build closest-pair and spanning batches for a point file.
//!
//! Run with: cargo run --release --bin circuits -- boxes.txt
//!
//! Usage:
//!   circuits boxes.txt                 Both policies, reference sizes
//!   circuits boxes.txt --part spanning Spanning batches only
//!   circuits --random 2k --seed 7      Random points instead of a file
//!
//! Set RUST_LOG=debug for phase logging (add --features timing for durations).

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use box_circuits::input::read_points;
use box_circuits::summary::{circuit_sizes, closing_edge_product, largest_circuits_product};
use box_circuits::validation::validate;
use box_circuits::{
    compute_with, CircuitConfig, EdgeBatch, EdgeTag, Point3, DEFAULT_CLOSEST_BATCH_SIZE,
    DEFAULT_CLOSEST_K, DEFAULT_SPANNING_BATCH_SIZE, COORD_LIMIT,
};
use clap::{Parser, ValueEnum};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn parse_count(s: &str) -> Result<usize, String> {
    let s = s.to_lowercase();
    let (num_str, multiplier) = if let Some(stripped) = s.strip_suffix('k') {
        (stripped, 1_000)
    } else {
        (s.as_str(), 1)
    };

    num_str
        .parse::<f64>()
        .map(|n| (n * multiplier as f64) as usize)
        .map_err(|e| format!("Invalid number '{}': {}", s, e))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Part {
    /// The K globally shortest connections
    Closest,
    /// Minimum spanning tree connecting every point
    Spanning,
    /// Both policies over one ranking
    Both,
}

#[derive(Parser)]
#[command(name = "circuits")]
#[command(about = "Connect 3D points by closest pairs or a minimum spanning tree")]
struct Args {
    /// Point file with one `x,y,z` record per line
    #[arg(required_unless_present = "random", conflicts_with = "random")]
    input: Option<PathBuf>,

    /// Which policy to run
    #[arg(long, value_enum, default_value_t = Part::Both)]
    part: Part,

    /// Closest connections to take
    #[arg(short, long, default_value_t = DEFAULT_CLOSEST_K)]
    k: usize,

    /// Override both batch sizes
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    batch_size: Option<u32>,

    /// Generate this many random points (e.g., 1000, 2k)
    #[arg(long, value_parser = parse_count)]
    random: Option<usize>,

    /// Random seed
    #[arg(short, long, default_value_t = 12345)]
    seed: u64,

    /// Coordinate range for random points: [0, extent)
    #[arg(long, default_value_t = 100_000, value_parser = clap::value_parser!(i64).range(1..=COORD_LIMIT))]
    extent: i64,
}

fn random_points(n: usize, extent: i64, seed: u64) -> Vec<Point3> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            Point3::new(
                rng.gen_range(0..extent),
                rng.gen_range(0..extent),
                rng.gen_range(0..extent),
            )
        })
        .collect()
}

fn print_policy(points: &[Point3], batches: &[EdgeBatch], tag: EdgeTag, batch_size: usize) {
    let edges: usize = batches.iter().map(|b| b.len()).sum();
    println!(
        "{}: {} edges in {} batches (batch size {})",
        tag,
        edges,
        batches.len(),
        batch_size
    );
    let report = validate(points, batches, tag, batch_size);
    println!("  validation: {}", report.summary());
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let points = match (&args.input, args.random) {
        (_, Some(n)) => random_points(n, args.extent, args.seed),
        (Some(path), None) => match read_points(path) {
            Ok(points) => points,
            Err(e) => {
                eprintln!("error: {}", e);
                return ExitCode::FAILURE;
            }
        },
        (None, None) => unreachable!("clap requires an input or --random"),
    };

    let config = CircuitConfig {
        closest_k: args.k,
        closest_batch_size: args
            .batch_size
            .map_or(DEFAULT_CLOSEST_BATCH_SIZE, |b| b as usize),
        spanning_batch_size: args
            .batch_size
            .map_or(DEFAULT_SPANNING_BATCH_SIZE, |b| b as usize),
    };

    println!("points: {}", points.len());
    let t0 = Instant::now();
    let output = compute_with(&points, &config);
    let elapsed_ms = t0.elapsed().as_secs_f64() * 1000.0;
    println!("candidates: {} ({:.1}ms)", output.candidates, elapsed_ms);

    if matches!(args.part, Part::Closest | Part::Both) {
        print_policy(
            &points,
            &output.closest,
            EdgeTag::ClosestPair,
            config.closest_batch_size,
        );
        let sizes = circuit_sizes(points.len(), &output.closest);
        match largest_circuits_product(&sizes, 3) {
            Some(product) => println!(
                "  circuits: {}, largest three product: {}",
                sizes.len(),
                product
            ),
            None => println!(
                "  circuits: {}, largest three product overflows u128",
                sizes.len()
            ),
        }
    }

    if matches!(args.part, Part::Spanning | Part::Both) {
        print_policy(
            &points,
            &output.spanning,
            EdgeTag::Spanning,
            config.spanning_batch_size,
        );
        println!(
            "  evaluated {} candidates, {} components",
            output.tree.evaluated, output.tree.components
        );
        match closing_edge_product(&points, &output.tree) {
            Some(product) => println!("  closing edge x product: {}", product),
            None => println!("  closing edge x product: n/a"),
        }
    }

    ExitCode::SUCCESS
}

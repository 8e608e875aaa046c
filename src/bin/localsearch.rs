//! Compares local search strategies on a benchmark landscape.
//!
//! ```text
//! localsearch --benchmark eggholder --strategy all --iterations 10000
//! ```

use clap::{Parser, ValueEnum};
use tracing::Level;
use u_localsearch::hill::HillConfig;
use u_localsearch::restart::multi_start;
use u_localsearch::sa::SaConfig;
use u_localsearch::tabu::TabuConfig;
use u_localsearch::{AxisSteps, Benchmark, Objective, SearchError, Strategy, UniformSampler};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Which {
    Hill,
    Tabu,
    Annealing,
    All,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Landscape to minimize: sphere, holder-table, eggholder or mccormick
    #[arg(short, long, default_value = "eggholder")]
    benchmark: Benchmark,

    /// Strategy to run
    #[arg(short, long, value_enum, default_value_t = Which::All)]
    strategy: Which,

    /// Iteration budget per run
    #[arg(short, long, default_value_t = 10_000)]
    iterations: usize,

    /// Neighbor step along each axis
    #[arg(long, default_value_t = 1.0 / 128.0)]
    step: f64,

    /// Seed for starting points and annealing; OS entropy when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Independent restarts per strategy
    #[arg(short, long, default_value_t = 1)]
    restarts: usize,

    /// Keep only this many recent points tabu
    #[arg(long)]
    tenure: Option<usize>,

    /// Coordinate tolerance for the tabu visited test
    #[arg(long)]
    tolerance: Option<f64>,

    /// Sample starts from [-W, W] on every axis instead of the benchmark's box
    #[arg(long, value_name = "W")]
    half_width: Option<f64>,

    /// Log at DEBUG level
    #[arg(short, long)]
    verbose: bool,
}

fn strategies(args: &Args) -> Vec<Strategy> {
    let mut tabu = TabuConfig::default().with_max_iterations(args.iterations);
    if let Some(tenure) = args.tenure {
        tabu = tabu.with_tenure(tenure);
    }
    if let Some(tolerance) = args.tolerance {
        tabu = tabu.with_equality_tolerance(tolerance);
    }
    let mut annealing = SaConfig::default().with_max_iterations(args.iterations);
    if let Some(seed) = args.seed {
        annealing = annealing.with_seed(seed);
    }

    let all = [
        (Which::Tabu, Strategy::Tabu(tabu)),
        (
            Which::Hill,
            Strategy::HillClimbing(HillConfig::default().with_max_iterations(args.iterations)),
        ),
        (Which::Annealing, Strategy::Annealing(annealing)),
    ];
    all.into_iter()
        .filter(|(which, _)| args.strategy == Which::All || args.strategy == *which)
        .map(|(_, strategy)| strategy)
        .collect()
}

fn run(args: &Args) -> Result<(), SearchError> {
    let mut sampler = match args.half_width {
        Some(w) => UniformSampler::square(w, 2)?,
        None => UniformSampler::new(args.benchmark.bounds().to_vec())?,
    };
    if let Some(seed) = args.seed {
        sampler = sampler.with_seed(seed);
    }
    let neighborhood = AxisSteps::new(args.step);

    for strategy in strategies(args) {
        let result = multi_start(
            &strategy,
            &args.benchmark,
            &neighborhood,
            &mut sampler,
            args.restarts,
        )?;
        let best = result.best();
        println!("# {} x = {}", strategy, best.best);
        println!(
            "#   f = {} (start {} at f = {})",
            best.best_cost,
            best.start,
            args.benchmark.value(&best.start)
        );
    }

    let (at, value) = args.benchmark.known_minimum();
    println!("# known minimum x = {at} f = {value}");
    Ok(())
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(&args) {
        tracing::error!(%err, "search failed");
        std::process::exit(1);
    }
}

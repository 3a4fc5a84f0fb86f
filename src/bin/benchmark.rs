use std::path::PathBuf;

use bmssp_sssp::algorithm::bmssp::{BmsspConfig, PartitionScope, QueueKind};
use bmssp_sssp::harness::{run_directory, AlgorithmKind, HarnessConfig};
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Partition {
    ActiveSet,
    WholeGraph,
}

/// Times one shortest-path algorithm over every graph CSV in a directory
#[derive(Debug, Parser)]
#[command(name = "sssp-bench", version)]
struct Args {
    /// Algorithm to run
    #[arg(short, long, value_enum, default_value_t = AlgorithmKind::Bmssp)]
    algorithm: AlgorithmKind,

    /// Directory holding `u,v,w` graph files
    #[arg(short, long, default_value = "graphs")]
    graphs: PathBuf,

    /// Output directory, `results_<algorithm>` by default
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Source vertex
    #[arg(short, long, default_value_t = 0)]
    source: usize,

    /// BMSSP comparison tolerance
    #[arg(long, default_value_t = 1e-9)]
    epsilon: f64,

    /// BMSSP partition scope
    #[arg(long, value_enum, default_value_t = Partition::ActiveSet)]
    partition: Partition,

    /// Use delta-stepping buckets of this width instead of a binary heap
    #[arg(long)]
    delta: Option<f64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let bmssp = BmsspConfig::default()
        .with_epsilon(args.epsilon)
        .with_partition(match args.partition {
            Partition::ActiveSet => PartitionScope::ActiveSet,
            Partition::WholeGraph => PartitionScope::WholeGraph,
        })
        .with_queue(match args.delta {
            Some(delta) => QueueKind::Buckets { delta },
            None => QueueKind::BinaryHeap,
        });

    let config = HarnessConfig::default()
        .with_algorithm(args.algorithm)
        .with_graphs_dir(args.graphs)
        .with_out_dir(args.out.unwrap_or_else(|| args.algorithm.default_out_dir()))
        .with_source(args.source)
        .with_bmssp(bmssp);

    let outcomes = run_directory(&config)?;
    let total: f64 = outcomes.iter().map(|o| o.timing.seconds).sum();

    println!(
        "Done: {} graphs in {:.6}s. Results in {}",
        outcomes.len(),
        total,
        config.out_dir.display()
    );
    println!("Timings in {}", config.timings_path().display());

    Ok(())
}

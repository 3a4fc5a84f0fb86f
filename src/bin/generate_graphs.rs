use std::path::PathBuf;

use bmssp_sssp::graph::generators::{grid_edges, standard_suite};
use bmssp_sssp::io::write_graph_csv;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Writes the synthetic benchmark graphs as `u,v,w` CSV files
#[derive(Debug, Parser)]
#[command(name = "sssp-generate", version)]
struct Args {
    /// Output directory
    #[arg(short, long, default_value = "graphs")]
    out: PathBuf,

    /// Seed for edge weights and random topologies
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Also write one large right/down grid with this many rows and columns
    #[arg(long, num_args = 2, value_names = ["ROWS", "COLS"])]
    big_grid: Option<Vec<usize>>,

    /// Make the large grid bidirectional
    #[arg(long)]
    bidirectional: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let mut rng = StdRng::seed_from_u64(args.seed);

    let suite = standard_suite(&mut rng);
    for (name, edges) in &suite {
        write_graph_csv(args.out.join(name), edges)?;
        log::debug!("{}: {} edges", name, edges.len());
    }
    println!("{} graphs written to '{}'", suite.len(), args.out.display());

    if let Some(dims) = args.big_grid {
        let (rows, cols) = (dims[0], dims[1]);
        let edges = grid_edges(&mut rng, rows, cols, 10, args.bidirectional);
        let path = args.out.join(format!("grid_{}x{}.csv", rows, cols));
        println!("Graph generated: n={}, m={}", rows * cols, edges.len());
        write_graph_csv(&path, &edges)?;
        println!("Saved to {}", path.display());
    }

    Ok(())
}

use std::path::PathBuf;

use bmssp_sssp::io::timings::{compare_timings, read_optional_timings, read_timings, write_comparison};
use clap::Parser;

/// Joins timing files by graph name and writes time ratios between algorithms
#[derive(Debug, Parser)]
#[command(name = "sssp-compare", version)]
struct Args {
    /// Bellman-Ford timings
    #[arg(long, default_value = "results_bellman/timings_bellman.csv")]
    bellman: PathBuf,

    /// Dijkstra timings
    #[arg(long, default_value = "results_dijkstra/timings_dijkstra.csv")]
    dijkstra: PathBuf,

    /// BMSSP timings; its columns stay blank if the file is missing
    #[arg(long, default_value = "results_BMSSP/timings_BMSSP.csv")]
    bmssp: PathBuf,

    /// Comparison output
    #[arg(short, long, default_value = "timing_comparison.csv")]
    out: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let bellman = read_timings(&args.bellman)?;
    let dijkstra = read_timings(&args.dijkstra)?;
    let bmssp = read_optional_timings(&args.bmssp)?;
    if bmssp.is_empty() {
        log::warn!("No BMSSP timings in {}, leaving its columns blank", args.bmssp.display());
    }

    let rows = compare_timings(&bellman, &dijkstra, &bmssp);
    write_comparison(&args.out, &rows)?;

    println!("Comparison of {} graphs written to {}", rows.len(), args.out.display());
    Ok(())
}

//! BMSSP SSSP - Single-Source Shortest Paths by bounded divide-and-conquer
//!
//! This library computes shortest-path distances from one source on directed graphs
//! with non-negative edge weights, using three strategies:
//!
//! - Bellman-Ford, a plain relaxation baseline
//! - Dijkstra over a bounded priority queue (binary heap or delta-stepping buckets)
//! - BMSSP, which splits the active vertex set around a median-of-three pivot and
//!   works through the resulting (bound, set) frames on an explicit stack
//!
//! The `io` and `harness` modules load graphs from CSV, persist distance vectors and
//! timings, and compare timing runs.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod harness;
pub mod io;

pub use algorithm::{
    bellman_ford::BellmanFord,
    bmssp::{BmsspConfig, BMSSP},
    dijkstra::Dijkstra,
    ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::directed::DirectedGraph;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Vertex {vertex} out of range for graph with {vertex_count} vertices")]
    OutOfRange { vertex: usize, vertex_count: usize },

    #[error("Invalid edge: from {0} to {1}")]
    InvalidEdge(usize, usize),

    #[error("Source vertex {0} not found in graph")]
    SourceNotFound(usize),

    #[error("Line {line}: cannot parse {field} from {value:?}")]
    Parse {
        line: u64,
        field: &'static str,
        value: String,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Algorithm execution error: {0}")]
    AlgorithmError(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;

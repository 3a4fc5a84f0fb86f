//! Benchmark harness: runs one algorithm over every graph CSV in a directory, saving the
//! distance vector and the elapsed time of each run.

use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::algorithm::bmssp::{BmsspConfig, BMSSP};
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::{DirectedGraph, Graph};
use crate::io::{load_graph_csv, write_distances, TimingLog, TimingRecord};
use crate::{BellmanFord, Dijkstra, Result};

/// The algorithms the harness can time
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum AlgorithmKind {
    Bellman,
    Dijkstra,
    Bmssp,
}

impl AlgorithmKind {
    /// Prefix of output file names and suffix of the timing file name
    pub fn output_prefix(&self) -> &'static str {
        match self {
            AlgorithmKind::Bellman => "bellman",
            AlgorithmKind::Dijkstra => "dijkstra",
            AlgorithmKind::Bmssp => "BMSSP",
        }
    }

    /// Default output directory, `results_<prefix>`
    pub fn default_out_dir(&self) -> PathBuf {
        PathBuf::from(format!("results_{}", self.output_prefix()))
    }
}

/// Where the harness reads from, writes to, and what it runs
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    pub graphs_dir: PathBuf,
    pub out_dir: PathBuf,
    pub source: usize,
    pub algorithm: AlgorithmKind,
    pub bmssp: BmsspConfig,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        let algorithm = AlgorithmKind::Bmssp;
        Self {
            graphs_dir: PathBuf::from("graphs"),
            out_dir: algorithm.default_out_dir(),
            source: 0,
            algorithm,
            bmssp: BmsspConfig::default(),
        }
    }
}

impl HarnessConfig {
    pub fn with_graphs_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.graphs_dir = dir.into();
        self
    }

    pub fn with_out_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.out_dir = dir.into();
        self
    }

    pub fn with_source(mut self, source: usize) -> Self {
        self.source = source;
        self
    }

    pub fn with_algorithm(mut self, algorithm: AlgorithmKind) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_bmssp(mut self, bmssp: BmsspConfig) -> Self {
        self.bmssp = bmssp;
        self
    }

    /// Path of the timing file for the configured algorithm
    pub fn timings_path(&self) -> PathBuf {
        self.out_dir
            .join(format!("timings_{}.csv", self.algorithm.output_prefix()))
    }
}

/// What one processed graph produced
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub timing: TimingRecord,
    pub output: PathBuf,
    pub reachable: usize,
}

/// Runs the selected algorithm on a graph
pub fn run_algorithm(
    kind: AlgorithmKind,
    graph: &DirectedGraph<f64>,
    source: usize,
    bmssp: &BmsspConfig,
) -> Result<ShortestPathResult<f64>> {
    match kind {
        AlgorithmKind::Bellman => BellmanFord::new().compute_shortest_paths(graph, source),
        AlgorithmKind::Dijkstra => Dijkstra::new().compute_shortest_paths(graph, source),
        AlgorithmKind::Bmssp => {
            BMSSP::with_config(bmssp.clone()).compute_shortest_paths(graph, source)
        }
    }
}

/// Lists the `*.csv` files of a directory, sorted by path
pub fn list_graph_files<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().map_or(false, |ext| ext == "csv") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Processes every graph of `config.graphs_dir`.
///
/// Empty graphs, and graphs that do not contain the source vertex, are skipped with a
/// warning. Each processed graph gets `<out_dir>/<prefix>_<file name>` with its distances
/// and a row in the timing file.
///
/// The recorded time covers only the shortest-path computation on an already built
/// adjacency. CSV parsing, graph construction and writing the distance file are not
/// timed, for any algorithm, so the ratios compare the solvers alone.
pub fn run_directory(config: &HarnessConfig) -> Result<Vec<RunOutcome>> {
    let files = list_graph_files(&config.graphs_dir)?;
    if files.is_empty() {
        log::warn!("No CSV found in '{}'", config.graphs_dir.display());
        return Ok(Vec::new());
    }

    std::fs::create_dir_all(&config.out_dir)?;
    let mut timings = TimingLog::create(config.timings_path())?;
    let prefix = config.algorithm.output_prefix();
    let mut outcomes = Vec::with_capacity(files.len());

    log::info!("Processing {} graphs with {:?}", files.len(), config.algorithm);

    for path in files {
        let file = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        let loaded = load_graph_csv(&path)?;
        if loaded.is_empty() {
            log::warn!("Empty graph in {}, skipping", file);
            continue;
        }

        let graph = loaded.into_graph()?;
        if !graph.has_vertex(config.source) {
            log::warn!(
                "Source {} not in {} ({} vertices), skipping",
                config.source,
                file,
                graph.vertex_count()
            );
            continue;
        }
        if !graph.validate_non_negative() {
            log::warn!("{} has negative edge weights; results are not meaningful", file);
        }

        let start = Instant::now();
        let result = run_algorithm(config.algorithm, &graph, config.source, &config.bmssp)?;
        let elapsed = start.elapsed().as_secs_f64();

        let output = config.out_dir.join(format!("{}_{}", prefix, file));
        write_distances(&output, &result.distances)?;

        let timing = TimingRecord {
            file: file.clone(),
            n_vertices: graph.vertex_count(),
            n_edges: graph.edge_count(),
            seconds: elapsed,
        };
        timings.record(&timing)?;

        log::info!(
            "{}: {} vertices, {} edges, time={:.6}s -> {}",
            file,
            timing.n_vertices,
            timing.n_edges,
            elapsed,
            output.display()
        );

        outcomes.push(RunOutcome {
            timing,
            output,
            reachable: result.reachable_count(),
        });
    }

    Ok(outcomes)
}

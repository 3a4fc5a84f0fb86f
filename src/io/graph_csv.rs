use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::{ensure_parent_dir, parse_field, reader_builder};
use crate::graph::DirectedGraph;
use crate::Result;

/// A graph as read from a `u,v,w` CSV file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedGraph {
    /// `max(vertex id) + 1`, or 0 when the file had no edges
    pub vertex_count: usize,
    /// Edges in file order
    pub edges: Vec<(usize, usize, f64)>,
}

impl LoadedGraph {
    /// True when the file held no edges. Callers skip such graphs.
    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }

    /// Number of edges read
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Builds the adjacency view
    pub fn into_graph(self) -> Result<DirectedGraph<f64>> {
        DirectedGraph::new(self.vertex_count, self.edges)
    }
}

/// Loads a weighted directed graph from a CSV file with a header row and `u,v,w` rows
pub fn load_graph_csv<P: AsRef<Path>>(path: P) -> Result<LoadedGraph> {
    read_graph_csv(File::open(path)?)
}

/// Reads `u,v,w` rows after one header row.
///
/// Rows with fewer than three fields are skipped. Ids must be non-negative integers and
/// weights floating-point numbers; anything else fails the whole load.
pub fn read_graph_csv<R: Read>(reader: R) -> Result<LoadedGraph> {
    let mut rdr = reader_builder().from_reader(reader);
    let mut edges = Vec::new();
    let mut vertex_count = 0;

    for record in rdr.records() {
        let record = record?;
        if record.len() < 3 {
            continue;
        }

        let u: usize = parse_field(&record, 0, "u")?;
        let v: usize = parse_field(&record, 1, "v")?;
        let w: f64 = parse_field(&record, 2, "w")?;

        vertex_count = vertex_count.max(u + 1).max(v + 1);
        edges.push((u, v, w));
    }

    Ok(LoadedGraph { vertex_count, edges })
}

/// Writes edges as `u,v,w` rows under a header, creating parent directories as needed
pub fn write_graph_csv<P: AsRef<Path>>(path: P, edges: &[(usize, usize, f64)]) -> Result<()> {
    let path = path.as_ref();
    ensure_parent_dir(path)?;

    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(["u", "v", "w"])?;
    for &(u, v, w) in edges {
        wtr.write_record([u.to_string(), v.to_string(), w.to_string()])?;
    }
    wtr.flush()?;
    Ok(())
}

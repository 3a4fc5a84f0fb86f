use std::fmt::Debug;
use num_traits::{Float, Zero};
use crate::graph::Graph;
use crate::Result;

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone)]
pub struct ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Distances from source to each vertex, +inf for unreachable vertices
    pub distances: Vec<W>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: Vec<Option<usize>>,

    /// Source vertex ID
    pub source: usize,
}

impl<W> ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Distance to `vertex`, `None` when it is unreachable or not in the graph
    pub fn distance(&self, vertex: usize) -> Option<W> {
        self.distances.get(vertex).copied().filter(|d| d.is_finite())
    }

    /// Number of vertices with a finite distance, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_finite()).count()
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path(&self, result: &ShortestPathResult<W>, target: usize) -> Option<Vec<usize>> {
        result.distance(target)?;

        let mut path = vec![target];
        let mut current = target;

        while current != result.source {
            let pred = result.predecessors[current]?;

            // A well-formed tree never revisits a vertex
            if path.len() > result.predecessors.len() {
                log::warn!("Cycle detected in path reconstruction at vertex {}", current);
                return None;
            }

            path.push(pred);
            current = pred;
        }

        path.reverse();
        Some(path)
    }
}

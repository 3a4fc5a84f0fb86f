use crate::graph::traits::Graph;
use crate::{Error, Result};
use num_traits::{Float, Zero};
use std::fmt::Debug;

/// A directed graph implementation using adjacency lists.
///
/// The adjacency is derived once from the edge list and never changes afterwards.
#[derive(Debug, Clone)]
pub struct DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Number of vertices in the graph
    vertex_count: usize,

    /// Outgoing edges for each vertex: vertex_id -> [(target_vertex, weight)]
    adjacency: Vec<Vec<(usize, W)>>,

    /// Edges in load order, kept for edge-scanning algorithms
    edge_list: Vec<(usize, usize, W)>,
}

impl<W> DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Builds a graph with `vertex_count` vertices from `(source, target, weight)` triples.
    ///
    /// Both endpoints of every edge must be below `vertex_count`. Weights are expected to
    /// be non-negative; that is the caller's contract and is not checked here, see
    /// [`DirectedGraph::validate_non_negative`].
    pub fn new(vertex_count: usize, edges: Vec<(usize, usize, W)>) -> Result<Self> {
        let mut adjacency = vec![Vec::new(); vertex_count];

        for &(from, to, weight) in &edges {
            if from >= vertex_count || to >= vertex_count {
                return Err(Error::InvalidEdge(from, to));
            }
            adjacency[from].push((to, weight));
        }

        Ok(DirectedGraph {
            vertex_count,
            adjacency,
            edge_list: edges,
        })
    }

    /// Builds a graph sized to fit its edges: `max(endpoint) + 1` vertices, or none at all
    /// when the edge list is empty.
    pub fn from_edges(edges: Vec<(usize, usize, W)>) -> Self {
        let vertex_count = edges
            .iter()
            .map(|&(from, to, _)| from.max(to) + 1)
            .max()
            .unwrap_or(0);

        let mut adjacency = vec![Vec::new(); vertex_count];
        for &(from, to, weight) in &edges {
            adjacency[from].push((to, weight));
        }

        DirectedGraph {
            vertex_count,
            adjacency,
            edge_list: edges,
        }
    }

    /// True when the graph has no vertices
    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }

    /// Validate that the graph doesn't have negative weights
    pub fn validate_non_negative(&self) -> bool {
        self.edge_list.iter().all(|&(_, _, weight)| weight >= W::zero())
    }
}

impl<W> Graph<W> for DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edge_count(&self) -> usize {
        self.edge_list.len()
    }

    fn out_edges(&self, vertex: usize) -> Result<&[(usize, W)]> {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .ok_or(Error::OutOfRange {
                vertex,
                vertex_count: self.vertex_count,
            })
    }

    fn edges(&self) -> Box<dyn Iterator<Item = (usize, usize, W)> + '_> {
        Box::new(self.edge_list.iter().copied())
    }
}

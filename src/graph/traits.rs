use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::Result;

/// Trait representing an immutable weighted directed graph
pub trait Graph<W>: Debug
where
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns the outgoing `(target, weight)` pairs of a vertex.
    ///
    /// Fails with [`crate::Error::OutOfRange`] when `vertex` is not a vertex of the graph.
    fn out_edges(&self, vertex: usize) -> Result<&[(usize, W)]>;

    /// Returns an iterator over every edge as `(source, target, weight)`
    fn edges(&self) -> Box<dyn Iterator<Item = (usize, usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.get_edge_weight(from, to).is_some()
    }

    /// Gets the weight of an edge if it exists.
    /// With parallel edges the lightest one is returned.
    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.out_edges(from)
            .ok()?
            .iter()
            .filter(|(target, _)| *target == to)
            .map(|(_, weight)| *weight)
            .fold(None, |best, w| match best {
                Some(b) if b <= w => Some(b),
                _ => Some(w),
            })
    }
}

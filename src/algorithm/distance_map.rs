use num_traits::{Float, Zero};
use std::fmt::Debug;

use crate::algorithm::ShortestPathResult;
use crate::{Error, Result};

/// Tentative distances for one shortest-path computation.
///
/// Entries start at +inf and only ever go down: both mutators reject a candidate that is
/// not strictly smaller than the current value. Predecessors are recorded alongside every
/// accepted relaxation.
#[derive(Debug, Clone)]
pub struct DistanceMap<W>
where
    W: Float + Zero + Debug + Copy,
{
    distances: Vec<W>,
    predecessors: Vec<Option<usize>>,
}

impl<W> DistanceMap<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a map for `vertex_count` vertices, all at +inf
    pub fn new(vertex_count: usize) -> Self {
        DistanceMap {
            distances: vec![W::infinity(); vertex_count],
            predecessors: vec![None; vertex_count],
        }
    }

    /// Creates a map with `source` at zero and everything else at +inf
    pub fn with_source(vertex_count: usize, source: usize) -> Result<Self> {
        let mut map = Self::new(vertex_count);
        map.seed(source, W::zero())?;
        Ok(map)
    }

    /// Number of vertices covered by the map
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// True when the map covers no vertices
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Current tentative distance of `vertex`
    #[inline]
    pub fn get(&self, vertex: usize) -> W {
        self.distances[vertex]
    }

    /// Lowers the distance of a seed vertex without recording a predecessor.
    /// Returns whether the value changed.
    pub fn seed(&mut self, vertex: usize, distance: W) -> Result<bool> {
        let vertex_count = self.distances.len();
        let slot = self
            .distances
            .get_mut(vertex)
            .ok_or(Error::OutOfRange { vertex, vertex_count })?;

        if distance < *slot {
            *slot = distance;
            self.predecessors[vertex] = None;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Accepts `candidate` for `vertex` if it is strictly smaller than the current value,
    /// recording `from` as its predecessor.
    #[inline]
    pub fn relax(&mut self, vertex: usize, candidate: W, from: usize) -> bool {
        if candidate < self.distances[vertex] {
            self.distances[vertex] = candidate;
            self.predecessors[vertex] = Some(from);
            true
        } else {
            false
        }
    }

    /// Read-only view of all distances
    pub fn as_slice(&self) -> &[W] {
        &self.distances
    }

    /// Predecessor of `vertex` on its current best path
    pub fn predecessor(&self, vertex: usize) -> Option<usize> {
        self.predecessors[vertex]
    }

    /// Converts the map into a result rooted at `source`
    pub fn into_result(self, source: usize) -> ShortestPathResult<W> {
        ShortestPathResult {
            distances: self.distances,
            predecessors: self.predecessors,
            source,
        }
    }
}

use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::algorithm::distance_map::DistanceMap;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::{BinaryHeapQueue, BoundedPriorityQueue};
use crate::graph::Graph;
use crate::{Error, Result};

/// Dijkstra relaxation that never goes past a distance bound.
///
/// The runner owns its priority queue so that repeated runs (one per BMSSP frame)
/// reuse the same allocation. After each run, [`BoundedDijkstra::settled`] lists the
/// vertices that were extracted with a distance within the bound, in extraction order.
#[derive(Debug)]
pub struct BoundedDijkstra<Q> {
    queue: Q,
    settled: Vec<usize>,
}

impl<Q> BoundedDijkstra<Q> {
    /// Creates a runner around an empty queue
    pub fn new(queue: Q) -> Self {
        BoundedDijkstra {
            queue,
            settled: Vec::new(),
        }
    }

    /// Vertices settled by the last run
    pub fn settled(&self) -> &[usize] {
        &self.settled
    }

    /// Runs the bounded relaxation from `seeds`.
    ///
    /// Every seed with a finite distance no greater than `bound` is queued at its current
    /// distance. Extraction stops at the first live entry above `bound`. An edge `u -> v`
    /// updates `v` only when `d(u) + w` is strictly smaller than `d(v)` and no greater than
    /// `bound`. The distance map is updated in place.
    pub fn run<W, G>(
        &mut self,
        graph: &G,
        seeds: &[usize],
        bound: W,
        distances: &mut DistanceMap<W>,
    ) -> Result<()>
    where
        W: Float + Zero + Debug + Copy,
        G: Graph<W>,
        Q: BoundedPriorityQueue<W>,
    {
        self.queue.clear();
        self.settled.clear();

        for &s in seeds {
            if !graph.has_vertex(s) {
                return Err(Error::OutOfRange {
                    vertex: s,
                    vertex_count: graph.vertex_count(),
                });
            }
            let d = distances.get(s);
            if d.is_finite() && d <= bound {
                self.queue.decrease_key(s, d);
            }
        }

        while let Some((u, dist_u)) = self.queue.extract_min() {
            // Superseded by a later, smaller entry
            if dist_u > distances.get(u) {
                continue;
            }
            if dist_u > bound {
                break;
            }

            self.settled.push(u);

            for &(v, weight) in graph.out_edges(u)? {
                let candidate = dist_u + weight;
                if candidate <= bound && distances.relax(v, candidate, u) {
                    self.queue.decrease_key(v, candidate);
                }
            }
        }

        self.queue.clear();
        Ok(())
    }
}

/// One-shot bounded Dijkstra over a binary heap.
///
/// See [`BoundedDijkstra::run`] for the relaxation rules.
pub fn bounded_dijkstra<W, G>(
    graph: &G,
    seeds: &[usize],
    bound: W,
    distances: &mut DistanceMap<W>,
) -> Result<()>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    BoundedDijkstra::new(BinaryHeapQueue::new()).run(graph, seeds, bound, distances)
}

/// Classic Dijkstra's algorithm: the bounded relaxation with an infinite bound
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound(source));
        }

        let mut distances = DistanceMap::<W>::with_source(graph.vertex_count(), source)?;
        bounded_dijkstra(graph, &[source], W::infinity(), &mut distances)?;

        Ok(distances.into_result(source))
    }
}

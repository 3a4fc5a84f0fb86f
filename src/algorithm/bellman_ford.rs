use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::algorithm::distance_map::DistanceMap;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::Graph;
use crate::{Error, Result};

/// Bellman-Ford relaxation, used as a correctness reference.
///
/// Relaxes every edge up to `n - 1` times and stops early after a round without
/// updates. Negative cycles are out of scope and not detected.
#[derive(Debug, Default)]
pub struct BellmanFord;

impl BellmanFord {
    /// Creates a new Bellman-Ford algorithm instance
    pub fn new() -> Self {
        BellmanFord
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for BellmanFord
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Bellman-Ford"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound(source));
        }

        let n = graph.vertex_count();
        let mut distances = DistanceMap::<W>::with_source(n, source)?;

        let mut rounds = 0;
        for _ in 0..n.saturating_sub(1) {
            rounds += 1;
            let mut updated = false;

            for (u, v, weight) in graph.edges() {
                let dist_u = distances.get(u);
                if dist_u.is_finite() && distances.relax(v, dist_u + weight, u) {
                    updated = true;
                }
            }

            if !updated {
                break;
            }
        }

        log::debug!("Bellman-Ford finished after {} rounds on {} vertices", rounds, n);
        Ok(distances.into_result(source))
    }
}

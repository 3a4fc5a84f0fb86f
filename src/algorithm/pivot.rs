use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::algorithm::distance_map::DistanceMap;

/// Picks the pivot of an active set with the median-of-three rule.
///
/// For more than three vertices the candidates are the minimum-distance vertex, the
/// vertex at the middle position of `active` (in its stored order, not by distance) and
/// the maximum-distance vertex. The candidate holding the median of their three distances
/// wins; on equal distances the first of (min, middle, max) is taken. Sets of three or
/// fewer vertices return their middle element. Returns `None` for an empty set.
pub fn median_of_three_pivot<W>(active: &[usize], distances: &DistanceMap<W>) -> Option<usize>
where
    W: Float + Zero + Debug + Copy,
{
    if active.len() <= 3 {
        return active.get(active.len() / 2).copied();
    }

    let by_distance = |a: &&usize, b: &&usize| {
        distances
            .get(**a)
            .partial_cmp(&distances.get(**b))
            .unwrap_or(std::cmp::Ordering::Equal)
    };

    let lowest = *active.iter().min_by(by_distance)?;
    let middle = active[active.len() / 2];
    let highest = *active.iter().max_by(by_distance)?;

    let candidates = [lowest, middle, highest];
    let mut sorted = candidates.map(|v| distances.get(v));
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let median = sorted[1];

    candidates.into_iter().find(|&v| distances.get(v) == median)
}

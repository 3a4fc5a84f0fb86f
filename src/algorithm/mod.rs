pub mod traits;
pub mod distance_map;
pub mod dijkstra;
pub mod bellman_ford;
pub mod pivot;
pub mod bmssp;

pub use traits::{ShortestPathAlgorithm, ShortestPathResult};
pub use distance_map::DistanceMap;

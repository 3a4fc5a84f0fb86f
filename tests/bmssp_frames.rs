use bmssp_sssp::algorithm::bmssp::{BmsspConfig, PartitionScope, QueueKind, BMSSP};
use bmssp_sssp::algorithm::pivot::median_of_three_pivot;
use bmssp_sssp::algorithm::DistanceMap;
use bmssp_sssp::graph::generators::random_edges;
use bmssp_sssp::graph::Graph;
use bmssp_sssp::{DirectedGraph, ShortestPathAlgorithm};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn spread_seeds(rng: &mut StdRng, n: usize, count: usize) -> Vec<(usize, f64)> {
    let mut seeds: Vec<(usize, f64)> = Vec::new();
    while seeds.len() < count.min(n) {
        let v = rng.gen_range(0..n);
        if seeds.iter().all(|&(s, _)| s != v) {
            seeds.push((v, f64::from(rng.gen_range(0..30u32))));
        }
    }
    seeds
}

#[test]
fn test_distances_never_increase_between_steps() {
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let n = rng.gen_range(10..60);
        let graph = DirectedGraph::new(n, random_edges(&mut rng, n, n * 3, 10)).unwrap();
        let seeds = spread_seeds(&mut rng, n, 8);

        for partition in [PartitionScope::ActiveSet, PartitionScope::WholeGraph] {
            let bmssp = BMSSP::with_config(BmsspConfig::default().with_partition(partition));
            let mut run = bmssp.start(&graph, &seeds, f64::INFINITY).unwrap();
            let mut previous = run.distances().as_slice().to_vec();

            while run.step().unwrap() {
                let current = run.distances().as_slice();
                for (v, (before, after)) in previous.iter().zip(current).enumerate() {
                    assert!(after <= before, "vertex {} went from {} to {}", v, before, after);
                }
                previous = current.to_vec();
            }
            assert!(run.is_finished());
        }
    }
}

#[test]
fn test_frame_stack_empties() {
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(200 + seed);
        let n = rng.gen_range(20..120);
        let graph = DirectedGraph::new(n, random_edges(&mut rng, n, n * 4, 10)).unwrap();
        let seeds = spread_seeds(&mut rng, n, 15);

        let mut run = BMSSP::new().start(&graph, &seeds, f64::INFINITY).unwrap();
        assert_eq!(run.pending_frames(), 1);

        // Every push is strictly smaller than its parent, so the frame count is bounded
        // by the sum of set sizes along any chain of splits.
        let limit = 4 * n * n + 10;
        let mut steps = 0;
        while run.step().unwrap() {
            steps += 1;
            assert!(steps <= limit, "stack did not drain after {} steps", steps);
        }

        assert_eq!(run.pending_frames(), 0);
        assert_eq!(run.stats().frames_processed, steps);
        assert!(!run.step().unwrap(), "a finished run has nothing left to do");
    }
}

#[test]
fn test_single_source_is_a_base_case() {
    let graph = DirectedGraph::new(3, vec![(0, 1, 2.0), (1, 2, 3.0)]).unwrap();

    let (distances, stats) = BMSSP::new()
        .start(&graph, &[(0, 0.0)], f64::INFINITY)
        .unwrap()
        .finish()
        .unwrap();

    assert_eq!(distances.as_slice(), &[0.0, 2.0, 5.0]);
    assert_eq!(stats.frames_processed, 1);
    assert_eq!(stats.base_cases, 1);
    assert_eq!(stats.splits, 0);
}

#[test]
fn test_small_bound_is_solved_directly() {
    let graph = DirectedGraph::new(4, vec![(0, 2, 0.25), (1, 3, 0.5), (2, 3, 0.5)]).unwrap();

    let (distances, stats) = BMSSP::new()
        .start(&graph, &[(0, 0.0), (1, 0.0)], 1.0)
        .unwrap()
        .finish()
        .unwrap();

    assert_eq!(distances.as_slice(), &[0.0, 0.0, 0.25, 0.5]);
    assert_eq!(stats.base_cases, 1);
    assert_eq!(stats.splits, 0);
}

#[test]
fn test_pivot_at_bound_is_solved_directly() {
    // Both seeds sit at the frame bound, so the pivot cannot tighten it
    let graph = DirectedGraph::new(3, vec![(0, 2, 1.0), (1, 2, 2.0)]).unwrap();

    let (distances, stats) = BMSSP::new()
        .start(&graph, &[(0, 5.0), (1, 5.0)], 5.0)
        .unwrap()
        .finish()
        .unwrap();

    assert_eq!(distances.as_slice(), &[5.0, 5.0, f64::INFINITY]);
    assert_eq!(stats.unsplit_frames, 1);
    assert_eq!(stats.splits, 0);
}

#[test]
fn test_split_separates_near_and_far_seeds() {
    //  0 (d=0) -> 3 (w=1)
    //  1 (d=10) -> 4 (w=1)
    //  2 (d=20) -> 5 (w=1)
    let graph = DirectedGraph::new(
        6,
        vec![(0, 3, 1.0), (1, 4, 1.0), (2, 5, 1.0)],
    )
    .unwrap();

    let (distances, stats) = BMSSP::new()
        .start(&graph, &[(0, 0.0), (1, 10.0), (2, 20.0)], f64::INFINITY)
        .unwrap()
        .finish()
        .unwrap();

    assert_eq!(distances.as_slice(), &[0.0, 10.0, 20.0, 1.0, 11.0, 21.0]);
    assert!(stats.splits >= 1);
}

#[test]
fn test_oversized_far_half_falls_back() {
    // Seeds 0 and 1, with 0 fanning out to many vertices past the pivot bound:
    // the far half outgrows the two-vertex parent and must be solved in place.
    let mut edges = vec![(0, 1, 1.0)];
    for v in 2..12 {
        edges.push((1, v, 5.0));
        edges.push((0, v, 3.0));
    }
    let graph = DirectedGraph::new(12, edges).unwrap();

    let (distances, stats) = BMSSP::new()
        .start(&graph, &[(0, 0.0), (1, 2.0)], f64::INFINITY)
        .unwrap()
        .finish()
        .unwrap();

    let mut expected = vec![0.0, 1.0];
    expected.extend(std::iter::repeat(3.0).take(10));
    assert_eq!(distances.as_slice(), expected.as_slice());
    assert_eq!(stats.fallbacks, 1);
}

#[test]
fn test_huge_weights_with_narrow_buckets() {
    let graph = DirectedGraph::new(3, vec![(0, 1, 1e12), (1, 2, 1.0), (0, 2, 5e12)]).unwrap();
    let bmssp = BMSSP::with_config(BmsspConfig::default().with_queue(QueueKind::Buckets { delta: 1.0 }));

    let result = bmssp.compute_shortest_paths(&graph, 0).unwrap();
    assert_eq!(result.distances, vec![0.0, 1e12, 1e12 + 1.0]);

    let (distances, _) = bmssp
        .start(&graph, &[(0, 0.0), (2, 3e12)], f64::INFINITY)
        .unwrap()
        .finish()
        .unwrap();
    assert_eq!(distances.as_slice(), &[0.0, 1e12, 1e12 + 1.0]);
}

#[test]
fn test_predecessors_trace_back_to_nearest_seed() {
    //  0 (d=0) -> 2 (w=4) -> 3 (w=1)
    //  1 (d=1) -> 2 (w=1)
    let graph = DirectedGraph::new(4, vec![(0, 2, 4.0), (1, 2, 1.0), (2, 3, 1.0)]).unwrap();

    let distances = BMSSP::new()
        .solve_from(&graph, &[(0, 0.0), (1, 1.0)], f64::INFINITY)
        .unwrap();

    assert_eq!(distances.as_slice(), &[0.0, 1.0, 2.0, 3.0]);
    assert_eq!(distances.predecessor(0), None);
    assert_eq!(distances.predecessor(1), None);
    assert_eq!(distances.predecessor(2), Some(1));
    assert_eq!(distances.predecessor(3), Some(2));
}

#[test]
fn test_duplicate_seeds_keep_smallest_distance() {
    let graph = DirectedGraph::new(3, vec![(0, 1, 1.0), (1, 2, 1.0)]).unwrap();

    let distances = BMSSP::new()
        .solve_from(&graph, &[(0, 4.0), (0, 2.0), (0, 9.0)], f64::INFINITY)
        .unwrap();

    assert_eq!(distances.as_slice(), &[2.0, 3.0, 4.0]);
}

#[test]
fn test_invalid_configuration_is_rejected() {
    let graph = DirectedGraph::new(2, vec![(0, 1, 1.0)]).unwrap();

    let bad_epsilon = BMSSP::with_config(BmsspConfig::default().with_epsilon(-1.0));
    assert!(bad_epsilon.compute_shortest_paths(&graph, 0).is_err());

    let bad_delta = BMSSP::with_config(
        BmsspConfig::default().with_queue(QueueKind::Buckets { delta: 0.0 }),
    );
    assert!(bad_delta.compute_shortest_paths(&graph, 0).is_err());
}

#[test]
fn test_paths_follow_graph_edges() {
    let mut rng = StdRng::seed_from_u64(77);
    let n = 40;
    let graph = DirectedGraph::new(n, random_edges(&mut rng, n, 160, 10)).unwrap();
    let bmssp = BMSSP::new();
    let result = bmssp.compute_shortest_paths(&graph, 0).unwrap();

    for target in 0..n {
        let path = <BMSSP as ShortestPathAlgorithm<f64, DirectedGraph<f64>>>::get_path(
            &bmssp, &result, target,
        );
        match result.distance(target) {
            None => assert!(path.is_none()),
            Some(expected) => {
                let path = path.expect("reachable vertex must have a path");
                assert_eq!(path[0], 0);
                assert_eq!(*path.last().unwrap(), target);

                let mut length = 0.0;
                for pair in path.windows(2) {
                    length += graph.get_edge_weight(pair[0], pair[1]).expect("path edge exists");
                }
                assert_eq!(length, expected);
            }
        }
    }
}

mod pivot {
    use super::*;

    fn map_with(values: &[f64]) -> DistanceMap<f64> {
        let mut map = DistanceMap::new(values.len());
        for (v, &d) in values.iter().enumerate() {
            map.seed(v, d).unwrap();
        }
        map
    }

    #[test]
    fn test_small_sets_take_middle_element() {
        let map = map_with(&[5.0, 1.0, 3.0]);
        assert_eq!(median_of_three_pivot(&[], &map), None);
        assert_eq!(median_of_three_pivot(&[2], &map), Some(2));
        assert_eq!(median_of_three_pivot(&[0, 2], &map), Some(2));
        assert_eq!(median_of_three_pivot(&[0, 1, 2], &map), Some(1));
    }

    #[test]
    fn test_median_of_min_middle_max() {
        // min = 1 (d=0), middle of stored order = index 2 -> vertex 4 (d=7), max = 3 (d=9)
        let map = map_with(&[4.0, 0.0, 6.0, 9.0, 7.0]);
        assert_eq!(median_of_three_pivot(&[0, 1, 4, 3, 2], &map), Some(4));
    }

    #[test]
    fn test_ties_prefer_minimum() {
        // middle element shares the minimum distance
        let map = map_with(&[2.0, 2.0, 2.0, 8.0]);
        assert_eq!(median_of_three_pivot(&[0, 1, 2, 3], &map), Some(0));
    }
}

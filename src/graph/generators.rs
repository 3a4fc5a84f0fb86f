use rand::Rng;
use std::collections::HashSet;

/// An edge list as written to a graph CSV: `(source, target, weight)`
pub type EdgeList = Vec<(usize, usize, f64)>;

/// Generates a chain 0 -> 1 -> ... -> n-1 with integer weights in `1..=max_weight`
pub fn chain_edges<R: Rng + ?Sized>(rng: &mut R, n: usize, max_weight: u32) -> EdgeList {
    (1..n.max(1))
        .map(|v| (v - 1, v, random_weight(rng, max_weight)))
        .collect()
}

/// Generates a random directed graph with `m` edges, no self-loops and no duplicate
/// `(u, v)` pairs. `m` is clamped to the `n * (n - 1)` possible edges.
pub fn random_edges<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    m: usize,
    max_weight: u32,
) -> EdgeList {
    let max_possible = n.saturating_mul(n.saturating_sub(1));
    let m = m.min(max_possible);

    let mut seen = HashSet::with_capacity(m);
    let mut edges = Vec::with_capacity(m);

    while edges.len() < m {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u == v || !seen.insert((u, v)) {
            continue;
        }
        edges.push((u, v, random_weight(rng, max_weight)));
    }

    edges
}

/// Generates a rows x cols grid where cell (r, c) is vertex `r * cols + c`.
///
/// Every cell links right and down; with `bidirectional` the reverse edges are added
/// too, each with its own random weight.
pub fn grid_edges<R: Rng + ?Sized>(
    rng: &mut R,
    rows: usize,
    cols: usize,
    max_weight: u32,
    bidirectional: bool,
) -> EdgeList {
    let vid = |r: usize, c: usize| r * cols + c;
    let mut edges = Vec::new();

    for r in 0..rows {
        for c in 0..cols {
            let u = vid(r, c);
            let mut neighbours = Vec::with_capacity(2);
            if c + 1 < cols {
                neighbours.push(vid(r, c + 1));
            }
            if r + 1 < rows {
                neighbours.push(vid(r + 1, c));
            }

            for v in neighbours {
                edges.push((u, v, random_weight(rng, max_weight)));
                if bidirectional {
                    edges.push((v, u, random_weight(rng, max_weight)));
                }
            }
        }
    }

    edges
}

/// The standard benchmark suite: chains, sparse/medium/dense random graphs and
/// bidirectional grids, named by their shape.
pub fn standard_suite<R: Rng + ?Sized>(rng: &mut R) -> Vec<(String, EdgeList)> {
    let mut suite = Vec::new();

    for n in [10, 50, 100] {
        suite.push((format!("chain_n{}.csv", n), chain_edges(rng, n, 10)));
    }

    let random_configs = [
        ("sparse", 30, 60),
        ("sparse", 50, 100),
        ("sparse", 80, 160),
        ("medium", 30, 120),
        ("medium", 60, 240),
        ("medium", 100, 400),
        ("dense", 20, 200),
        ("dense", 40, 600),
        ("dense", 60, 1200),
    ];
    for (kind, n, m) in random_configs {
        suite.push((
            format!("{}_n{}_m{}.csv", kind, n, m),
            random_edges(rng, n, m, 10),
        ));
    }

    for side in [5, 8, 10] {
        suite.push((
            format!("grid_{}x{}.csv", side, side),
            grid_edges(rng, side, side, 10, true),
        ));
    }

    suite
}

fn random_weight<R: Rng + ?Sized>(rng: &mut R, max_weight: u32) -> f64 {
    f64::from(rng.gen_range(1..=max_weight.max(1)))
}

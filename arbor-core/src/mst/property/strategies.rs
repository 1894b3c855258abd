//! Graph generators for spanning forest property tests.
//!
//! Each generator is driven by a seeded [`SmallRng`] so that rstest cases
//! can replay a specific graph, while proptest samples the distribution and
//! seed together.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::types::{MstFixture, WeightDistribution};

const MIN_VERTICES: usize = 6;
const MAX_VERTICES: usize = 48;
/// Dense graphs stay small to bound the quadratic edge count.
const DENSE_MAX_VERTICES: usize = 24;

/// Samples a distribution and seed, then generates the matching fixture.
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates a fixture for an explicitly chosen distribution.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> MstFixture {
    let (vertex_count, edges) = match distribution {
        WeightDistribution::Unique => {
            random_pairs(rng, MAX_VERTICES, (0.15, 0.5), |r| r.gen_range(0.1..100.0))
        }
        WeightDistribution::ManyIdentical => {
            let pool: Vec<f64> = (0..rng.gen_range(1..=3))
                .map(|_| f64::from(rng.gen_range(1_u8..=10)))
                .collect();
            random_pairs(rng, MAX_VERTICES, (0.3, 0.7), move |r| {
                pool.choose(r).copied().unwrap_or(1.0)
            })
        }
        WeightDistribution::Sparse => sparse(rng),
        WeightDistribution::Dense => {
            random_pairs(rng, DENSE_MAX_VERTICES, (0.7, 0.95), |r| r.gen_range(0.1..100.0))
        }
        WeightDistribution::Disconnected => disconnected(rng),
        WeightDistribution::Signed => signed(rng),
    };
    MstFixture {
        vertex_count,
        edges,
        distribution,
    }
}

type EdgeList = Vec<(usize, usize, f64)>;

/// Adds each unordered pair with a sampled probability.
fn random_pairs(
    rng: &mut SmallRng,
    max_vertices: usize,
    probability: (f64, f64),
    mut weight: impl FnMut(&mut SmallRng) -> f64,
) -> (usize, EdgeList) {
    let vertex_count = rng.gen_range(MIN_VERTICES..=max_vertices);
    let probability = rng.gen_range(probability.0..=probability.1);
    let mut edges = Vec::new();
    for left in 0..vertex_count {
        for right in (left + 1)..vertex_count {
            if rng.gen_bool(probability) {
                let w = weight(rng);
                edges.push(oriented(rng, left, right, w));
            }
        }
    }
    if edges.is_empty() {
        let w = weight(rng);
        edges.push((0, 1, w));
    }
    (vertex_count, edges)
}

/// Random Hamiltonian path for connectivity, then `n/2..=n` extra edges.
fn sparse(rng: &mut SmallRng) -> (usize, EdgeList) {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut order: Vec<usize> = (0..vertex_count).collect();
    order.shuffle(rng);

    let mut edges: EdgeList = order
        .windows(2)
        .map(|pair| (pair[0], pair[1], rng.gen_range(0.1..100.0)))
        .collect();

    for _ in 0..rng.gen_range(vertex_count / 2..=vertex_count) {
        let left = rng.gen_range(0..vertex_count);
        let right = rng.gen_range(0..vertex_count);
        if left != right {
            edges.push((left, right, rng.gen_range(0.1..100.0)));
        }
    }
    (vertex_count, edges)
}

/// Two to five components of 3..=10 vertices each, every one internally
/// connected by a path before random chords are added.
fn disconnected(rng: &mut SmallRng) -> (usize, EdgeList) {
    let sizes: Vec<usize> = (0..rng.gen_range(2..=5))
        .map(|_| rng.gen_range(3..=10))
        .collect();
    let mut edges = Vec::new();
    let mut offset = 0;
    for size in sizes {
        for step in 1..size {
            edges.push((offset + step - 1, offset + step, rng.gen_range(0.1..100.0)));
        }
        for left in 0..size {
            for right in (left + 2)..size {
                if rng.gen_bool(0.3) {
                    edges.push((offset + left, offset + right, rng.gen_range(0.1..100.0)));
                }
            }
        }
        offset += size;
    }
    (offset, edges)
}

/// Weights in `[-50, 50)` with roughly one self-loop per ten edges.
fn signed(rng: &mut SmallRng) -> (usize, EdgeList) {
    let (vertex_count, mut edges) =
        random_pairs(rng, MAX_VERTICES, (0.2, 0.5), |r| r.gen_range(-50.0..50.0));
    let loops = edges.len() / 10;
    for _ in 0..loops {
        let vertex = rng.gen_range(0..vertex_count);
        edges.push((vertex, vertex, rng.gen_range(-50.0..50.0)));
    }
    (vertex_count, edges)
}

/// Randomises endpoint order so `source < target` is not assumed anywhere.
fn oriented(rng: &mut SmallRng, left: usize, right: usize, weight: f64) -> (usize, usize, f64) {
    if rng.gen_bool(0.5) {
        (left, right, weight)
    } else {
        (right, left, weight)
    }
}

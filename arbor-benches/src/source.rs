//! Seeded synthetic graphs for benchmarking.
//!
//! Generators are deterministic for a given [`SyntheticGraphConfig`], so
//! repeated benchmark runs measure identical inputs.

use arbor_core::{DirectedGraph, Edge, WeightedGraph};
use rand::{Rng, SeedableRng, rngs::SmallRng, seq::SliceRandom};

/// Upper bound (exclusive) for generated edge weights.
const MAX_WEIGHT: f64 = 100.0;

/// Errors that may occur during synthetic graph generation.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum SyntheticError {
    /// The requested vertex count was zero.
    #[error("vertex count must be greater than zero")]
    ZeroVertices,
}

/// Configuration for synthetic graph generation.
#[derive(Clone, Debug)]
pub struct SyntheticGraphConfig {
    /// Number of vertices to generate.
    pub vertex_count: usize,
    /// Random edges attempted per vertex on top of the backbone.
    pub extra_edges_per_vertex: usize,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

impl SyntheticGraphConfig {
    const fn validate(&self) -> Result<(), SyntheticError> {
        if self.vertex_count == 0 {
            return Err(SyntheticError::ZeroVertices);
        }
        Ok(())
    }

    const fn extra_edges(&self) -> usize {
        self.vertex_count.saturating_mul(self.extra_edges_per_vertex)
    }
}

/// Generates a connected weighted graph over vertices `0..vertex_count`.
///
/// A random spanning tree guarantees connectivity; extra edges (including
/// occasional parallel edges) make Kruskal discard cycle-forming candidates.
///
/// # Errors
///
/// Returns [`SyntheticError::ZeroVertices`] if `vertex_count` is zero.
///
/// # Examples
///
/// ```
/// use arbor_benches::source::{SyntheticGraphConfig, connected_weighted_graph};
///
/// let config = SyntheticGraphConfig { vertex_count: 10, extra_edges_per_vertex: 2, seed: 7 };
/// let graph = connected_weighted_graph(&config).expect("valid config");
/// assert_eq!(graph.vertex_count(), 10);
/// assert!(arbor_core::kruskal(&graph).is_tree());
/// ```
pub fn connected_weighted_graph(
    config: &SyntheticGraphConfig,
) -> Result<WeightedGraph<usize>, SyntheticError> {
    config.validate()?;
    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut order: Vec<usize> = (0..config.vertex_count).collect();
    order.shuffle(&mut rng);

    let mut graph =
        WeightedGraph::from_adjacency(order.first().map(|&first| (first, Vec::new())));
    for (placed, &vertex) in order.iter().enumerate().skip(1) {
        if let Some(&anchor) = order.get(..placed).and_then(|prefix| prefix.choose(&mut rng)) {
            graph.add_edge(Edge::new(anchor, vertex, rng.gen_range(0.0..MAX_WEIGHT)));
        }
    }

    for _ in 0..config.extra_edges() {
        let source = rng.gen_range(0..config.vertex_count);
        let target = rng.gen_range(0..config.vertex_count);
        if source != target {
            graph.add_edge(Edge::new(source, target, rng.gen_range(0.0..MAX_WEIGHT)));
        }
    }
    Ok(graph)
}

/// Generates a directed acyclic graph over vertices `0..vertex_count`.
///
/// Vertices are ranked by a seeded shuffle and every edge points from a
/// lower rank to a higher one.
///
/// # Errors
///
/// Returns [`SyntheticError::ZeroVertices`] if `vertex_count` is zero.
pub fn layered_dag(config: &SyntheticGraphConfig) -> Result<DirectedGraph<usize>, SyntheticError> {
    config.validate()?;
    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut ranked: Vec<usize> = (0..config.vertex_count).collect();
    ranked.shuffle(&mut rng);

    let mut dag = DirectedGraph::new();
    for &vertex in &ranked {
        dag.add_vertex(vertex);
    }
    for _ in 0..config.extra_edges() {
        let left = rng.gen_range(0..config.vertex_count);
        let right = rng.gen_range(0..config.vertex_count);
        if left == right {
            continue;
        }
        let (Some(&source), Some(&target)) =
            (ranked.get(left.min(right)), ranked.get(left.max(right)))
        else {
            continue;
        };
        dag.add_edge(source, target);
    }
    Ok(dag)
}

//! Type definitions for spanning forest property tests.

use test_strategy::Arbitrary;

use crate::{Edge, WeightedGraph};

/// Weight and topology profile for generated graphs.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum WeightDistribution {
    /// Each edge draws a weight from a continuous range.
    #[weight(2)]
    Unique,
    /// Edges share a small pool of integral weights, stressing tie order.
    #[weight(3)]
    ManyIdentical,
    /// Random spanning path plus a handful of extra, possibly parallel, edges.
    #[weight(2)]
    Sparse,
    /// Nearly complete graph on fewer vertices.
    #[weight(2)]
    Dense,
    /// Several components with no edges between them.
    #[weight(2)]
    Disconnected,
    /// Weights straddle zero, with occasional self-loops.
    #[weight(1)]
    Signed,
}

/// Generated input for a spanning forest property.
#[derive(Clone, Debug)]
pub(super) struct MstFixture {
    /// Number of vertex ids the generator drew from.
    pub vertex_count: usize,
    /// Edges as `(source, target, weight)` in insertion order.
    pub edges: Vec<(usize, usize, f64)>,
    /// Profile used during generation.
    pub distribution: WeightDistribution,
}

impl MstFixture {
    /// Builds the graph by inserting every edge in order.
    pub(super) fn graph(&self) -> WeightedGraph<usize> {
        self.edges
            .iter()
            .map(|&(source, target, weight)| Edge::new(source, target, weight))
            .collect()
    }

    /// Short context string for failure messages.
    pub(super) fn describe(&self) -> String {
        format!(
            "distribution={:?}, vertices={}, edges={}",
            self.distribution,
            self.vertex_count,
            self.edges.len(),
        )
    }
}

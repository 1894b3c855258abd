//! Minimum spanning forest construction.
//!
//! Kruskal's algorithm over a [`WeightedGraph`]: distinct edges are sorted by
//! ascending weight and accepted whenever they join two components of a
//! [`DisjointSet`] seeded with every vertex. A disconnected graph yields a
//! spanning forest rather than an error.

mod disjoint_set;

use std::{collections::HashSet, hash::Hash};

use tracing::{Span, debug, field, instrument, trace};

use crate::graph::{Edge, WeightedGraph};

pub use self::disjoint_set::DisjointSet;

/// The output of a minimum spanning forest computation.
///
/// When the input graph is connected, the forest is a minimum spanning tree.
/// Edges are kept in acceptance order, which is ascending weight.
#[derive(Clone, Debug, PartialEq)]
pub struct MinimumSpanningForest<V> {
    edges: Vec<Edge<V>>,
    component_count: usize,
}

impl<V> MinimumSpanningForest<V> {
    /// Returns the forest edges in acceptance order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge<V>] { &self.edges }

    /// Consumes the forest, returning its edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn into_edges(self) -> Vec<Edge<V>> { self.edges }

    /// Returns the number of forest edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` when the forest has no edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns the number of connected components spanned by the forest.
    ///
    /// Every vertex of the input graph belongs to exactly one component, so
    /// an empty graph has zero components and an isolated vertex forms its
    /// own.
    #[must_use]
    #[rustfmt::skip]
    pub const fn component_count(&self) -> usize { self.component_count }

    /// Returns `true` when the forest spans a single connected component.
    #[must_use]
    pub const fn is_tree(&self) -> bool {
        self.component_count == 1
    }

    /// Returns the sum of all forest edge weights.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.edges.iter().map(Edge::weight).sum()
    }
}

impl<V: Eq + Hash> MinimumSpanningForest<V> {
    /// Returns `true` when a value-equal edge was accepted.
    #[must_use]
    pub fn contains(&self, edge: &Edge<V>) -> bool {
        self.edges.contains(edge)
    }

    /// Returns the forest as an unordered set of edges.
    #[must_use]
    pub fn to_edge_set(&self) -> HashSet<Edge<V>>
    where
        V: Clone,
    {
        self.edges.iter().cloned().collect()
    }
}

impl<V> IntoIterator for MinimumSpanningForest<V> {
    type Item = Edge<V>;
    type IntoIter = std::vec::IntoIter<Edge<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.into_iter()
    }
}

impl<'a, V> IntoIterator for &'a MinimumSpanningForest<V> {
    type Item = &'a Edge<V>;
    type IntoIter = std::slice::Iter<'a, Edge<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}

/// Kruskal minimum spanning forest builder.
///
/// # Examples
/// ```
/// use arbor_core::{Edge, KruskalMst, WeightedGraph};
///
/// let graph: WeightedGraph<char> = [
///     Edge::new('A', 'B', 1.0),
///     Edge::new('B', 'C', 2.0),
///     Edge::new('C', 'D', 3.0),
///     Edge::new('A', 'D', 4.0),
///     Edge::new('A', 'C', 5.0),
/// ]
/// .into_iter()
/// .collect();
///
/// let forest = KruskalMst::new().mst(&graph);
/// assert!(forest.is_tree());
/// assert_eq!(forest.len(), 3);
/// assert_eq!(forest.total_weight(), 6.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KruskalMst;

impl KruskalMst {
    /// Creates a builder.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Computes a minimum spanning forest of `graph`.
    ///
    /// Distinct edges are stably sorted by [`f64::total_cmp`], so edges of
    /// equal weight are considered in [`WeightedGraph::edges`] order and the
    /// result is deterministic. Self-loops and edges closing a cycle are
    /// discarded. Selection stops once `vertex_count - 1` edges have been
    /// accepted.
    #[must_use]
    #[instrument(
        name = "mst.kruskal",
        skip_all,
        fields(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            accepted = field::Empty,
            components = field::Empty,
        ),
    )]
    pub fn mst<V>(&self, graph: &WeightedGraph<V>) -> MinimumSpanningForest<V>
    where
        V: Eq + Hash + Clone,
    {
        let mut sets = DisjointSet::from_elements(graph.vertices().iter().cloned());
        let vertex_count = sets.count();
        let target = vertex_count.saturating_sub(1);

        let mut candidates = graph.edges();
        candidates.sort_by(|left, right| left.weight().total_cmp(&right.weight()));

        let mut accepted = Vec::with_capacity(target);
        let mut examined = 0_usize;
        for edge in candidates {
            if accepted.len() >= target {
                break;
            }
            examined = examined.saturating_add(1);
            if sets.union(edge.source(), edge.target()) {
                accepted.push(edge.clone());
            } else {
                trace!(weight = edge.weight(), "discarded cycle-forming edge");
            }
        }

        let component_count = sets.count();
        let span = Span::current();
        span.record("accepted", accepted.len());
        span.record("components", component_count);
        debug!(
            examined,
            accepted = accepted.len(),
            components = component_count,
            "kruskal selection completed"
        );

        MinimumSpanningForest {
            edges: accepted,
            component_count,
        }
    }
}

/// Computes a minimum spanning forest with [`KruskalMst`].
///
/// # Examples
/// ```
/// use arbor_core::{Edge, WeightedGraph, kruskal};
///
/// let graph: WeightedGraph<u8> = [Edge::new(1, 2, 0.5), Edge::new(3, 4, 1.5)]
///     .into_iter()
///     .collect();
/// let forest = kruskal(&graph);
/// assert_eq!(forest.len(), 2);
/// assert_eq!(forest.component_count(), 2);
/// ```
#[must_use]
pub fn kruskal<V>(graph: &WeightedGraph<V>) -> MinimumSpanningForest<V>
where
    V: Eq + Hash + Clone,
{
    KruskalMst::new().mst(graph)
}

#[cfg(test)]
mod property;

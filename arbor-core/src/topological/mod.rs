//! Topological ordering of directed graphs.
//!
//! [`TopologicalSort::sort`] runs Kahn's algorithm and
//! [`TopologicalSort::is_topological_sort`] checks a caller-supplied ordering
//! against the graph's edges.

use std::{
    collections::{HashSet, VecDeque},
    hash::Hash,
};

use tracing::{Span, debug, field, instrument, warn};

use crate::{
    error::{GraphError, Result},
    graph::DirectedGraph,
};

/// Kahn's algorithm and ordering verification.
///
/// # Examples
/// ```
/// use arbor_core::{DirectedGraph, TopologicalSort};
///
/// let dag: DirectedGraph<&str> = [("shirt", "tie"), ("tie", "jacket"), ("trousers", "shoes")]
///     .into_iter()
///     .collect();
/// let sorter = TopologicalSort::new();
/// let order = sorter.sort(&dag)?;
/// assert_eq!(order, ["shirt", "trousers", "tie", "shoes", "jacket"]);
/// assert!(sorter.is_topological_sort(&dag, &order)?);
/// # Ok::<(), arbor_core::GraphError>(())
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TopologicalSort;

impl TopologicalSort {
    /// Creates a sorter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Returns the vertices of `dag` so that every edge's source precedes its
    /// target.
    ///
    /// The queue is seeded with zero-indegree vertices in vertex order and
    /// processed first-in first-out, so the result is deterministic. The
    /// graph is not modified.
    ///
    /// # Errors
    /// Returns [`GraphError::CycleDetected`] when some vertices never reach
    /// indegree zero, which includes any vertex with a self-loop.
    #[instrument(
        name = "topological.sort",
        skip_all,
        fields(vertices = dag.vertex_count(), edges = dag.edge_count(), emitted = field::Empty),
        err,
    )]
    pub fn sort<V>(&self, dag: &DirectedGraph<V>) -> Result<Vec<V>>
    where
        V: Eq + Hash + Clone,
    {
        let mut indegrees = dag.indegree_table();
        let mut queue: VecDeque<usize> = indegrees
            .iter()
            .enumerate()
            .filter_map(|(slot, &degree)| (degree == 0).then_some(slot))
            .collect();

        let mut ordering = Vec::with_capacity(dag.vertex_count());
        while let Some(slot) = queue.pop_front() {
            if let Some(vertex) = dag.vertex_at(slot) {
                ordering.push(vertex.clone());
            }
            for &next in dag.successor_slots(slot) {
                let Some(degree) = indegrees.get_mut(next) else {
                    continue;
                };
                *degree = degree.saturating_sub(1);
                if *degree == 0 {
                    queue.push_back(next);
                }
            }
        }

        Span::current().record("emitted", ordering.len());
        let unresolved = dag.vertex_count().saturating_sub(ordering.len());
        if unresolved > 0 {
            warn!(unresolved, "cycle prevents a complete ordering");
            return Err(GraphError::CycleDetected { unresolved });
        }
        debug!(vertices = ordering.len(), "topological ordering completed");
        Ok(ordering)
    }

    /// Checks whether `candidate` is a valid topological ordering of `dag`.
    ///
    /// Returns `Ok(false)` when some edge's target appears no later than its
    /// source; a self-loop therefore always fails.
    ///
    /// # Errors
    /// Returns [`GraphError::IncompatibleOrdering`] unless `candidate` lists
    /// every vertex of `dag` exactly once and nothing else.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::{DirectedGraph, GraphErrorCode, TopologicalSort};
    ///
    /// let dag: DirectedGraph<u8> = [(1, 2), (2, 3)].into_iter().collect();
    /// let sorter = TopologicalSort::new();
    /// assert!(sorter.is_topological_sort(&dag, &[1, 2, 3])?);
    /// assert!(!sorter.is_topological_sort(&dag, &[2, 1, 3])?);
    ///
    /// let err = sorter.is_topological_sort(&dag, &[1, 2]).unwrap_err();
    /// assert_eq!(err.code(), GraphErrorCode::IncompatibleOrdering);
    /// # Ok::<(), arbor_core::GraphError>(())
    /// ```
    #[instrument(
        name = "topological.verify",
        skip_all,
        fields(vertices = dag.vertex_count(), candidate = candidate.len(), valid = field::Empty),
        err,
    )]
    pub fn is_topological_sort<V>(&self, dag: &DirectedGraph<V>, candidate: &[V]) -> Result<bool>
    where
        V: Eq + Hash + Clone,
    {
        let positions = positions_of(dag, candidate)?;

        let valid = (0..dag.vertex_count()).all(|slot| {
            dag.successor_slots(slot)
                .iter()
                .all(|&next| positions[slot] < positions[next])
        });
        Span::current().record("valid", valid);
        Ok(valid)
    }
}

/// Maps each vertex slot to its index in `candidate`, rejecting anything that
/// is not a permutation of the graph's vertices.
fn positions_of<V>(dag: &DirectedGraph<V>, candidate: &[V]) -> Result<Vec<usize>>
where
    V: Eq + Hash + Clone,
{
    let vertices = dag.vertex_count();
    let incompatible = || GraphError::IncompatibleOrdering {
        vertices,
        candidate: candidate.len(),
        distinct: candidate.iter().collect::<HashSet<_>>().len(),
    };
    if candidate.len() != vertices {
        return Err(incompatible());
    }

    let mut positions = vec![usize::MAX; vertices];
    for (index, vertex) in candidate.iter().enumerate() {
        let slot = dag.position(vertex).ok_or_else(incompatible)?;
        if positions[slot] != usize::MAX {
            return Err(incompatible());
        }
        positions[slot] = index;
    }
    Ok(positions)
}

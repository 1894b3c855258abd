//! Directed graph used by topological ordering.

use std::{
    collections::{HashMap, hash_map::Entry},
    hash::Hash,
};

/// A directed graph stored as successor lists.
///
/// Both endpoints of every edge become vertices, and vertices are kept in
/// first-appearance order. Parallel edges are preserved.
///
/// # Examples
/// ```
/// use arbor_core::DirectedGraph;
///
/// let dag: DirectedGraph<u32> = [(5, 11), (11, 2), (7, 11)].into_iter().collect();
/// assert_eq!(dag.vertices(), &[5, 11, 2, 7]);
/// assert_eq!(dag.successors(&11).collect::<Vec<_>>(), vec![&2]);
/// assert_eq!(dag.indegrees().get(&&11), Some(&2));
/// ```
#[derive(Clone, Debug)]
pub struct DirectedGraph<V> {
    vertices: Vec<V>,
    index: HashMap<V, usize>,
    successors: Vec<Vec<usize>>,
    edge_count: usize,
}

impl<V> Default for DirectedGraph<V> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            index: HashMap::new(),
            successors: Vec::new(),
            edge_count: 0,
        }
    }
}

impl<V: Eq + Hash + Clone> DirectedGraph<V> {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the edge `source -> target`.
    pub fn add_edge(&mut self, source: V, target: V) {
        let from = self.slot(source);
        let to = self.slot(target);
        if let Some(list) = self.successors.get_mut(from) {
            list.push(to);
            self.edge_count = self.edge_count.saturating_add(1);
        }
    }

    /// Registers `vertex` without edges. Returns `true` if it was new.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        let known = self.vertices.len();
        self.slot(vertex) == known
    }

    /// Iterates over the direct successors of `vertex` in insertion order.
    pub fn successors<'a>(&'a self, vertex: &V) -> impl Iterator<Item = &'a V> + use<'a, V> {
        let targets = self
            .position(vertex)
            .map(|slot| self.successor_slots(slot))
            .unwrap_or_default();
        targets.iter().filter_map(move |&slot| self.vertices.get(slot))
    }

    /// Returns the indegree of every vertex; sources map to zero.
    #[must_use]
    pub fn indegrees(&self) -> HashMap<&V, usize> {
        self.vertices.iter().zip(self.indegree_table()).collect()
    }

    /// Returns `true` when `vertex` is part of the graph.
    #[must_use]
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }

    pub(crate) fn position(&self, vertex: &V) -> Option<usize> {
        self.index.get(vertex).copied()
    }

    fn slot(&mut self, vertex: V) -> usize {
        match self.index.entry(vertex) {
            Entry::Occupied(entry) => *entry.get(),
            Entry::Vacant(entry) => {
                let slot = self.vertices.len();
                self.vertices.push(entry.key().clone());
                self.successors.push(Vec::new());
                entry.insert(slot);
                slot
            }
        }
    }
}

impl<V> DirectedGraph<V> {
    /// Returns all vertices in first-appearance order.
    #[must_use]
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges, counting parallel edges separately.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edge_count(&self) -> usize { self.edge_count }

    /// Returns `true` when the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterates over all edges as `(source, target)` pairs, grouped by source
    /// in vertex order.
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V)> + '_ {
        self.vertices
            .iter()
            .zip(&self.successors)
            .flat_map(move |(source, targets)| {
                targets
                    .iter()
                    .filter_map(move |&slot| self.vertices.get(slot).map(|target| (source, target)))
            })
    }

    pub(crate) fn vertex_at(&self, slot: usize) -> Option<&V> {
        self.vertices.get(slot)
    }

    pub(crate) fn successor_slots(&self, slot: usize) -> &[usize] {
        self.successors.get(slot).map(Vec::as_slice).unwrap_or_default()
    }

    pub(crate) fn indegree_table(&self) -> Vec<usize> {
        let mut indegrees = vec![0_usize; self.vertices.len()];
        for &target in self.successors.iter().flatten() {
            if let Some(count) = indegrees.get_mut(target) {
                *count = count.saturating_add(1);
            }
        }
        indegrees
    }
}

impl<V: Eq + Hash + Clone> Extend<(V, V)> for DirectedGraph<V> {
    fn extend<I: IntoIterator<Item = (V, V)>>(&mut self, edges: I) {
        for (source, target) in edges {
            self.add_edge(source, target);
        }
    }
}

impl<V: Eq + Hash + Clone> FromIterator<(V, V)> for DirectedGraph<V> {
    fn from_iter<I: IntoIterator<Item = (V, V)>>(edges: I) -> Self {
        let mut graph = Self::new();
        graph.extend(edges);
        graph
    }
}

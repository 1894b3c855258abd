//! Undirected weighted graph stored as per-vertex adjacency lists.

use std::{
    collections::{HashMap, HashSet},
    hash::Hash,
};

use super::Edge;

/// An undirected graph whose adjacency lists hold weighted [`Edge`] values.
///
/// Every edge is stored under both endpoints, so an edge between `a` and `b`
/// appears once in `a`'s list and once in `b`'s list. Vertices are kept in
/// first-appearance order, which makes [`WeightedGraph::vertices`] and
/// [`WeightedGraph::edges`] deterministic.
///
/// Two edge metrics are tracked: [`WeightedGraph::edge_count`] counts
/// distinct edges, while [`WeightedGraph::insertion_count`] counts
/// [`WeightedGraph::add_edge`] calls.
///
/// # Examples
/// ```
/// use arbor_core::{Edge, WeightedGraph};
///
/// let mut graph = WeightedGraph::new();
/// graph.add_edge(Edge::new("a", "b", 1.0));
/// graph.add_edge(Edge::new("b", "c", 2.0));
/// graph.add_edge(Edge::new("a", "b", 1.0));
///
/// assert_eq!(graph.vertices(), &["a", "b", "c"]);
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.insertion_count(), 3);
/// assert_eq!(graph.incident_edges(&"b").len(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct WeightedGraph<V> {
    vertices: Vec<V>,
    index: HashMap<V, usize>,
    adjacency: Vec<Vec<Edge<V>>>,
    distinct: HashSet<Edge<V>>,
    insertions: usize,
}

impl<V> Default for WeightedGraph<V> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            index: HashMap::new(),
            adjacency: Vec::new(),
            distinct: HashSet::new(),
            insertions: 0,
        }
    }
}

impl<V: Eq + Hash + Clone> WeightedGraph<V> {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps caller-supplied adjacency lists.
    ///
    /// Lists are stored exactly as given; edges are not mirrored onto their
    /// other endpoint. Repeated keys have their lists concatenated. The
    /// distinct edge count is computed immediately and the insertion count
    /// starts at zero.
    #[must_use]
    pub fn from_adjacency(adjacency: impl IntoIterator<Item = (V, Vec<Edge<V>>)>) -> Self {
        let mut graph = Self::new();
        for (vertex, edges) in adjacency {
            let slot = graph.slot(&vertex);
            graph.distinct.extend(edges.iter().cloned());
            if let Some(list) = graph.adjacency.get_mut(slot) {
                list.extend(edges);
            }
        }
        graph
    }

    /// Adds `edge` to the adjacency lists of both endpoints.
    ///
    /// No deduplication happens on insert: adding an equal edge twice stores
    /// it twice, although [`WeightedGraph::edges`] and
    /// [`WeightedGraph::edge_count`] still report it once. A self-loop is
    /// stored twice in its vertex's list.
    pub fn add_edge(&mut self, edge: Edge<V>) {
        let source = self.slot(edge.source());
        let target = self.slot(edge.target());
        if let Some(list) = self.adjacency.get_mut(source) {
            list.push(edge.clone());
        }
        if let Some(list) = self.adjacency.get_mut(target) {
            list.push(edge.clone());
        }
        self.insertions = self.insertions.saturating_add(1);
        self.distinct.insert(edge);
    }

    /// Returns every distinct edge once.
    ///
    /// Adjacency lists are flattened in vertex order and value-equal
    /// duplicates are dropped, keeping first occurrences.
    #[must_use]
    pub fn edges(&self) -> Vec<&Edge<V>> {
        let mut seen = HashSet::new();
        self.adjacency
            .iter()
            .flatten()
            .filter(|edge| seen.insert(*edge))
            .collect()
    }

    /// Returns the stored adjacency list for `vertex`, or an empty slice when
    /// the vertex is unknown.
    #[must_use]
    pub fn incident_edges(&self, vertex: &V) -> &[Edge<V>] {
        self.index
            .get(vertex)
            .and_then(|&slot| self.adjacency.get(slot))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns `true` when `vertex` has an adjacency entry.
    #[must_use]
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }

    fn slot(&mut self, vertex: &V) -> usize {
        if let Some(&slot) = self.index.get(vertex) {
            return slot;
        }
        let slot = self.vertices.len();
        self.vertices.push(vertex.clone());
        self.index.insert(vertex.clone(), slot);
        self.adjacency.push(Vec::new());
        slot
    }
}

impl<V> WeightedGraph<V> {
    /// Returns all vertices in first-appearance order.
    ///
    /// Only vertices that appear in an edge (or were supplied as adjacency
    /// keys) are known to the graph.
    #[must_use]
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// Returns the number of known vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of distinct edges, across every adjacency list.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.distinct.len()
    }

    /// Returns how many times [`WeightedGraph::add_edge`] has been called.
    #[must_use]
    #[rustfmt::skip]
    pub const fn insertion_count(&self) -> usize { self.insertions }

    /// Returns `true` when the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

impl<V: Eq + Hash + Clone> Extend<Edge<V>> for WeightedGraph<V> {
    fn extend<I: IntoIterator<Item = Edge<V>>>(&mut self, edges: I) {
        for edge in edges {
            self.add_edge(edge);
        }
    }
}

impl<V: Eq + Hash + Clone> FromIterator<Edge<V>> for WeightedGraph<V> {
    fn from_iter<I: IntoIterator<Item = Edge<V>>>(edges: I) -> Self {
        let mut graph = Self::new();
        graph.extend(edges);
        graph
    }
}

//! Prim's algorithm as an independent oracle for spanning forest weights.
//!
//! Grows one tree per component from the first unvisited vertex using a
//! binary heap keyed on edge weight. It shares no code with the Kruskal
//! implementation beyond the graph's adjacency lists.

use std::{
    cmp::Ordering,
    collections::{BinaryHeap, HashSet},
};

use crate::WeightedGraph;

/// Summary of a Prim run.
#[derive(Clone, Debug)]
pub(super) struct PrimForest {
    /// Sum of accepted edge weights.
    pub total_weight: f64,
    /// Number of accepted edges.
    pub edge_count: usize,
    /// Number of trees grown, one per connected component.
    pub component_count: usize,
}

/// Heap entry ordered so the lightest edge pops first.
struct Frontier {
    weight: f64,
    vertex: usize,
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .total_cmp(&self.weight)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

/// Computes a minimum spanning forest of `graph` with Prim's algorithm.
pub(super) fn prim(graph: &WeightedGraph<usize>) -> PrimForest {
    let mut visited = HashSet::new();
    let mut result = PrimForest {
        total_weight: 0.0,
        edge_count: 0,
        component_count: 0,
    };

    for &start in graph.vertices() {
        if visited.contains(&start) {
            continue;
        }
        result.component_count += 1;
        let mut heap = BinaryHeap::new();
        heap.push(Frontier {
            weight: 0.0,
            vertex: start,
        });
        let mut root = true;

        while let Some(Frontier { weight, vertex }) = heap.pop() {
            if !visited.insert(vertex) {
                continue;
            }
            if root {
                root = false;
            } else {
                result.total_weight += weight;
                result.edge_count += 1;
            }
            for edge in graph.incident_edges(&vertex) {
                let Ok(&next) = edge.other(&vertex) else {
                    continue;
                };
                if !visited.contains(&next) {
                    heap.push(Frontier {
                        weight: edge.weight(),
                        vertex: next,
                    });
                }
            }
        }
    }

    result
}

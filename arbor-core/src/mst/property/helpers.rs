//! Shared helpers for spanning forest property tests.

use crate::Edge;

use super::types::MstFixture;

/// Path-halving find over a plain parent slice.
pub(super) fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}

/// Counts components among the vertices that appear in the fixture's edges.
///
/// Vertex ids missing from every edge are not part of the graph and are not
/// counted.
pub(super) fn input_component_count(fixture: &MstFixture) -> usize {
    let n = fixture.vertex_count;
    let mut parent: Vec<usize> = (0..n).collect();
    let mut present = vec![false; n];
    for &(source, target, _) in &fixture.edges {
        present[source] = true;
        present[target] = true;
        let left = find_root(&mut parent, source);
        let right = find_root(&mut parent, target);
        if left != right {
            parent[right] = left;
        }
    }
    let mut roots: Vec<usize> = (0..n)
        .filter(|&vertex| present[vertex])
        .map(|vertex| find_root(&mut parent, vertex))
        .collect();
    roots.sort_unstable();
    roots.dedup();
    roots.len()
}

/// Tolerant float comparison for sums accumulated in different orders.
pub(super) fn weights_match(left: f64, right: f64) -> bool {
    (left - right).abs() <= 1e-9 * left.abs().max(right.abs()).max(1.0)
}

/// Returns the maximum edge weight on the forest path between `from` and
/// `to`, or `None` when they are not connected by `forest`.
pub(super) fn max_weight_on_path(
    forest: &[Edge<usize>],
    vertex_count: usize,
    from: usize,
    to: usize,
) -> Option<f64> {
    let mut adjacency: Vec<Vec<(usize, f64)>> = vec![Vec::new(); vertex_count];
    for edge in forest {
        let (&source, &target) = edge.endpoints();
        adjacency[source].push((target, edge.weight()));
        adjacency[target].push((source, edge.weight()));
    }

    let mut best: Vec<Option<f64>> = vec![None; vertex_count];
    let mut visited = vec![false; vertex_count];
    let mut stack = vec![from];
    visited[from] = true;
    best[from] = Some(f64::NEG_INFINITY);
    while let Some(vertex) = stack.pop() {
        if vertex == to {
            return best[vertex];
        }
        let reached = best[vertex].unwrap_or(f64::NEG_INFINITY);
        for &(next, weight) in &adjacency[vertex] {
            if !visited[next] {
                visited[next] = true;
                best[next] = Some(reached.max(weight));
                stack.push(next);
            }
        }
    }
    None
}

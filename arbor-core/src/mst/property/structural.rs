//! Property: structural invariants of the spanning forest.
//!
//! - every forest edge is a distinct, non-loop edge of the input graph;
//! - the forest is acyclic with `V - C` edges for `C` components;
//! - components match those of the input graph;
//! - edges are accepted in ascending weight order;
//! - every non-forest edge weighs at least as much as the heaviest forest
//!   edge on the path between its endpoints (cycle property);
//! - repeated runs return the same forest.

use std::collections::HashSet;

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{Edge, MinimumSpanningForest, kruskal};

use super::helpers::{find_root, input_component_count, max_weight_on_path};
use super::types::MstFixture;

/// Runs the structural invariant property for `fixture`.
pub(super) fn run_structural_invariants_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = fixture.graph();
    let forest = kruskal(&graph);

    validate_membership(&graph.edges(), forest.edges())?;
    validate_acyclicity(fixture.vertex_count, forest.edges())?;
    validate_edge_count(graph.vertex_count(), &forest)?;
    validate_components(fixture, &forest)?;
    validate_ascending(forest.edges())?;
    validate_cycle_property(fixture.vertex_count, &graph.edges(), forest.edges())?;

    if kruskal(&graph) != forest {
        return Err(TestCaseError::fail(format!(
            "second run produced a different forest ({})",
            fixture.describe(),
        )));
    }
    Ok(())
}

fn validate_membership(graph_edges: &[&Edge<usize>], forest: &[Edge<usize>]) -> TestCaseResult {
    let known: HashSet<&Edge<usize>> = graph_edges.iter().copied().collect();
    let mut seen = HashSet::new();
    for (i, edge) in forest.iter().enumerate() {
        if !known.contains(edge) {
            return Err(TestCaseError::fail(format!("edge {i}: {edge} is not in the graph")));
        }
        if edge.is_self_loop() {
            return Err(TestCaseError::fail(format!("edge {i}: {edge} is a self-loop")));
        }
        if !seen.insert(edge) {
            return Err(TestCaseError::fail(format!("edge {i}: {edge} accepted twice")));
        }
    }
    Ok(())
}

fn validate_acyclicity(vertex_count: usize, forest: &[Edge<usize>]) -> TestCaseResult {
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    for (i, edge) in forest.iter().enumerate() {
        let left = find_root(&mut parent, *edge.source());
        let right = find_root(&mut parent, *edge.target());
        if left == right {
            return Err(TestCaseError::fail(format!("edge {i}: {edge} closes a cycle")));
        }
        parent[right] = left;
    }
    Ok(())
}

fn validate_edge_count(vertex_count: usize, forest: &MinimumSpanningForest<usize>) -> TestCaseResult {
    let expected = vertex_count.saturating_sub(forest.component_count());
    if forest.len() != expected {
        return Err(TestCaseError::fail(format!(
            "edge count {}, expected V - C = {expected} (V={vertex_count}, C={})",
            forest.len(),
            forest.component_count(),
        )));
    }
    Ok(())
}

fn validate_components(fixture: &MstFixture, forest: &MinimumSpanningForest<usize>) -> TestCaseResult {
    let expected = input_component_count(fixture);
    if forest.component_count() != expected {
        return Err(TestCaseError::fail(format!(
            "forest has {} components, input has {expected} ({})",
            forest.component_count(),
            fixture.describe(),
        )));
    }
    if expected == 1 && !forest.is_tree() {
        return Err(TestCaseError::fail("connected input did not yield a tree"));
    }
    Ok(())
}

fn validate_ascending(forest: &[Edge<usize>]) -> TestCaseResult {
    for (i, pair) in forest.windows(2).enumerate() {
        if pair[0].weight().total_cmp(&pair[1].weight()).is_gt() {
            return Err(TestCaseError::fail(format!(
                "edge {}: weight {} follows heavier {}",
                i + 1,
                pair[1].weight(),
                pair[0].weight(),
            )));
        }
    }
    Ok(())
}

fn validate_cycle_property(
    vertex_count: usize,
    graph_edges: &[&Edge<usize>],
    forest: &[Edge<usize>],
) -> TestCaseResult {
    let chosen: HashSet<&Edge<usize>> = forest.iter().collect();
    for edge in graph_edges {
        if edge.is_self_loop() || chosen.contains(*edge) {
            continue;
        }
        let (&source, &target) = edge.endpoints();
        let Some(heaviest) = max_weight_on_path(forest, vertex_count, source, target) else {
            return Err(TestCaseError::fail(format!(
                "{edge} connects vertices the forest leaves apart"
            )));
        };
        if edge.weight() < heaviest {
            return Err(TestCaseError::fail(format!(
                "{edge} is lighter than forest path maximum {heaviest}"
            )));
        }
    }
    Ok(())
}

//! Property: Kruskal agrees with the Prim oracle.
//!
//! Minimum spanning forests are not unique under tied weights, but their
//! total weight, edge count, and component count are.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::kruskal;

use super::helpers::weights_match;
use super::oracle::prim;
use super::types::MstFixture;

/// Runs the oracle equivalence property for `fixture`.
pub(super) fn run_oracle_equivalence_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = fixture.graph();
    let forest = kruskal(&graph);
    let oracle = prim(&graph);

    let weight = forest.total_weight();
    if !weights_match(weight, oracle.total_weight) {
        return Err(TestCaseError::fail(format!(
            "total weight mismatch: kruskal={weight}, prim={} ({})",
            oracle.total_weight,
            fixture.describe(),
        )));
    }
    if forest.len() != oracle.edge_count {
        return Err(TestCaseError::fail(format!(
            "edge count mismatch: kruskal={}, prim={} ({})",
            forest.len(),
            oracle.edge_count,
            fixture.describe(),
        )));
    }
    if forest.component_count() != oracle.component_count {
        return Err(TestCaseError::fail(format!(
            "component count mismatch: kruskal={}, prim={} ({})",
            forest.component_count(),
            oracle.component_count,
            fixture.describe(),
        )));
    }
    Ok(())
}

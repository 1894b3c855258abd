//! Benchmark parameter types.

use std::fmt;

/// Parameters identifying a graph benchmark run.
#[derive(Clone, Debug)]
pub struct GraphBenchParams {
    /// Number of vertices in the generated graph.
    pub vertex_count: usize,
    /// Number of distinct edges in the generated graph.
    pub edge_count: usize,
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v={},e={}", self.vertex_count, self.edge_count)
    }
}

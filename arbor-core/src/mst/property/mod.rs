//! Property-based tests for Kruskal's minimum spanning forest.
//!
//! Generated graphs are checked against a Prim oracle and against the
//! structural invariants of a minimum spanning forest, across weight
//! profiles that stress ties, sparsity, disconnection, and negative weights.

mod equivalence;
mod helpers;
mod oracle;
mod strategies;
mod structural;
mod types;

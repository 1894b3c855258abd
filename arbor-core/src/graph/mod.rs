//! Graph representations shared by the spanning-tree and ordering
//! algorithms.
//!
//! [`WeightedGraph`] is undirected and doubly indexed: each [`Edge`] is
//! stored under both of its endpoints. [`DirectedGraph`] keeps successor
//! lists only.

mod directed;
mod edge;
mod weighted;

pub use self::{directed::DirectedGraph, edge::Edge, weighted::WeightedGraph};

//! Arbor core library.
//!
//! Generic graph primitives for spanning forests and dependency ordering:
//! a disjoint-set forest, an undirected weighted graph with Kruskal's
//! minimum spanning forest, and a directed graph with Kahn's topological
//! sort and ordering verification.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod graph;
mod mst;
mod topological;

#[cfg(test)]
mod test_utils;

pub use crate::{
    error::{GraphError, GraphErrorCode, Result},
    graph::{DirectedGraph, Edge, WeightedGraph},
    mst::{DisjointSet, KruskalMst, MinimumSpanningForest, kruskal},
    topological::TopologicalSort,
};

//! Benchmark support crate for arbor.
//!
//! Provides seeded synthetic graphs and parameter types used by the
//! Criterion benchmarks for Kruskal selection and Kahn ordering.

pub mod error;
pub mod params;
pub mod source;

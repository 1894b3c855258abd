//! Command-line interface orchestration for arbor.
//!
//! `mst` reads a weighted edge list and prints its minimum spanning forest;
//! `topo-sort` reads a directed edge list and prints a verified topological
//! ordering.

mod commands;

pub use commands::{
    Cli, CliError, Command, EdgeListArgs, ExecutionSummary, LineIssue, MstSummary,
    TopoSortSummary, render_summary, run_cli,
};

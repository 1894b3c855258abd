//! Command implementations and argument parsing for the arbor CLI.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use arbor_core::{
    DirectedGraph, Edge, GraphError, KruskalMst, MinimumSpanningForest, TopologicalSort,
    WeightedGraph,
};
use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

const FALLBACK_SOURCE_NAME: &str = "edge_list";

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "arbor",
    about = "Compute spanning forests and topological orderings from edge lists."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Compute a minimum spanning forest of a weighted, undirected edge list.
    Mst(EdgeListArgs),
    /// Order the vertices of a directed edge list so every edge points forward.
    TopoSort(EdgeListArgs),
}

/// Arguments shared by commands that read an edge list file.
#[derive(Debug, Args, Clone)]
pub struct EdgeListArgs {
    /// Path to a whitespace-separated edge list; `#` starts a comment line.
    pub path: PathBuf,

    /// Override name for the edge list (defaults to the file stem).
    #[arg(long)]
    pub name: Option<String>,
}

/// Reasons an edge list line can be rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LineIssue {
    /// The line did not have the number of fields the format requires.
    #[error("expected {expected} fields, found {found}")]
    FieldCount {
        /// Fields required by the format.
        expected: usize,
        /// Fields present on the line.
        found: usize,
    },
    /// The weight column could not be parsed as a number.
    #[error("`{raw}` is not a valid weight")]
    InvalidWeight {
        /// Token supplied in the weight column.
        raw: String,
    },
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while reading an edge list.
    #[error("failed to read `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// An edge list line was malformed.
    #[error("{path}:{line}: {issue}")]
    Parse {
        /// File containing the malformed line.
        path: PathBuf,
        /// One-based line number.
        line: usize,
        /// What was wrong with the line.
        issue: LineIssue,
    },
    /// A graph operation failed.
    #[error(transparent)]
    Core(#[from] GraphError),
}

/// Outcome of the `mst` command.
#[derive(Debug, Clone)]
pub struct MstSummary {
    /// Name of the edge list.
    pub source: String,
    /// Number of vertices in the loaded graph.
    pub vertices: usize,
    /// Number of distinct edges in the loaded graph.
    pub edges: usize,
    /// The computed spanning forest.
    pub forest: MinimumSpanningForest<String>,
}

/// Outcome of the `topo-sort` command.
#[derive(Debug, Clone)]
pub struct TopoSortSummary {
    /// Name of the edge list.
    pub source: String,
    /// Number of vertices in the loaded graph.
    pub vertices: usize,
    /// Vertices in topological order.
    pub ordering: Vec<String>,
    /// Whether the ordering passed independent verification.
    pub verified: bool,
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub enum ExecutionSummary {
    /// Result of `mst`.
    Mst(MstSummary),
    /// Result of `topo-sort`.
    TopoSort(TopoSortSummary),
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the input cannot be read or parsed, or when the
/// graph operation fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use arbor_cli::cli::{Cli, Command, EdgeListArgs, ExecutionSummary, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "a b 1\nb c 2\na c 3\n")?;
/// let cli = Cli {
///     command: Command::Mst(EdgeListArgs {
///         path: file.path().to_path_buf(),
///         name: None,
///     }),
/// };
/// let ExecutionSummary::Mst(summary) = run_cli(cli)? else {
///     unreachable!("mst command yields an mst summary");
/// };
/// assert_eq!(summary.forest.len(), 2);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Mst(args) => {
            span.record("command", field::display("mst"));
            run_mst(args).map(ExecutionSummary::Mst)
        }
        Command::TopoSort(args) => {
            span.record("command", field::display("topo-sort"));
            run_topo_sort(args).map(ExecutionSummary::TopoSort)
        }
    }
}

#[instrument(
    name = "cli.mst",
    err,
    skip(args),
    fields(path = field::Empty, override_name = field::Empty),
)]
pub(super) fn run_mst(args: EdgeListArgs) -> Result<MstSummary, CliError> {
    let EdgeListArgs { path, name } = args;
    record_input(&path, name.as_deref());
    let source = derive_source_name(&path, name.as_deref());
    let graph = load_weighted(&path, open_edge_list(&path)?)?;
    let forest = KruskalMst::new().mst(&graph);
    info!(
        source = source.as_str(),
        forest_edges = forest.len(),
        components = forest.component_count(),
        "spanning forest computed"
    );
    Ok(MstSummary {
        source,
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        forest,
    })
}

#[instrument(
    name = "cli.topo_sort",
    err,
    skip(args),
    fields(path = field::Empty, override_name = field::Empty),
)]
pub(super) fn run_topo_sort(args: EdgeListArgs) -> Result<TopoSortSummary, CliError> {
    let EdgeListArgs { path, name } = args;
    record_input(&path, name.as_deref());
    let source = derive_source_name(&path, name.as_deref());
    let dag = load_directed(&path, open_edge_list(&path)?)?;
    let sorter = TopologicalSort::new();
    let ordering = sorter.sort(&dag)?;
    let verified = sorter.is_topological_sort(&dag, &ordering)?;
    info!(
        source = source.as_str(),
        vertices = ordering.len(),
        verified,
        "topological ordering computed"
    );
    Ok(TopoSortSummary {
        source,
        vertices: dag.vertex_count(),
        ordering,
        verified,
    })
}

fn record_input(path: &Path, override_name: Option<&str>) {
    let span = Span::current();
    span.record("path", field::display(path.display()));
    span.record(
        "override_name",
        field::display(override_name.unwrap_or("<derived>")),
    );
}

#[instrument(name = "cli.open_edge_list", err, fields(path = field::Empty))]
pub(super) fn open_edge_list(path: &Path) -> Result<BufReader<File>, CliError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

/// Parses `source target weight` lines into an undirected graph.
///
/// Weights that parse but are not finite (`nan`, `inf`) are rejected by
/// [`Edge::try_new`].
pub(super) fn load_weighted(
    path: &Path,
    reader: impl BufRead,
) -> Result<WeightedGraph<String>, CliError> {
    let records = parse_records(path, reader, |fields| {
        let [source, target, raw] = exact_fields::<3>(fields)?;
        let weight = raw.parse::<f64>().map_err(|_| LineIssue::InvalidWeight {
            raw: raw.to_owned(),
        })?;
        Ok((source.to_owned(), target.to_owned(), weight))
    })?;

    let mut graph = WeightedGraph::new();
    for (source, target, weight) in records {
        graph.add_edge(Edge::try_new(source, target, weight)?);
    }
    Ok(graph)
}

/// Parses `source target` lines into a directed graph.
pub(super) fn load_directed(
    path: &Path,
    reader: impl BufRead,
) -> Result<DirectedGraph<String>, CliError> {
    let pairs = parse_records(path, reader, |fields| {
        let [source, target] = exact_fields::<2>(fields)?;
        Ok((source.to_owned(), target.to_owned()))
    })?;
    Ok(pairs.into_iter().collect())
}

/// Splits every non-blank, non-comment line into whitespace-separated
/// fields and hands them to `parse`. Line numbers are one-based.
fn parse_records<T>(
    path: &Path,
    reader: impl BufRead,
    mut parse: impl FnMut(&[&str]) -> Result<T, LineIssue>,
) -> Result<Vec<T>, CliError> {
    let mut records = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = trimmed.split_whitespace().collect();
        let record = parse(&fields).map_err(|issue| CliError::Parse {
            path: path.to_path_buf(),
            line: index + 1,
            issue,
        })?;
        records.push(record);
    }
    Ok(records)
}

fn exact_fields<'a, const N: usize>(fields: &[&'a str]) -> Result<[&'a str; N], LineIssue> {
    <[&str; N]>::try_from(fields).map_err(|_| LineIssue::FieldCount {
        expected: N,
        found: fields.len(),
    })
}

pub(super) fn derive_source_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| FALLBACK_SOURCE_NAME.to_owned())
}

/// Renders `summary` to `writer` in a line-oriented text format.
///
/// Forest edges are written as `source<TAB>target<TAB>weight`; orderings as
/// one vertex per line.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use arbor_cli::cli::{ExecutionSummary, TopoSortSummary, render_summary};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = ExecutionSummary::TopoSort(TopoSortSummary {
///     source: "deps".into(),
///     vertices: 2,
///     ordering: vec!["core".into(), "cli".into()],
///     verified: true,
/// });
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(
///     String::from_utf8(buffer)?,
///     "source: deps\nvertices: 2\ncore\ncli\nverified: true\n"
/// );
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match summary {
        ExecutionSummary::Mst(mst) => {
            writeln!(writer, "source: {}", mst.source)?;
            writeln!(writer, "vertices: {}", mst.vertices)?;
            writeln!(writer, "edges: {}", mst.edges)?;
            writeln!(writer, "forest edges: {}", mst.forest.len())?;
            writeln!(writer, "components: {}", mst.forest.component_count())?;
            writeln!(writer, "total weight: {}", mst.forest.total_weight())?;
            for edge in &mst.forest {
                writeln!(writer, "{}\t{}\t{}", edge.source(), edge.target(), edge.weight())?;
            }
        }
        ExecutionSummary::TopoSort(topo) => {
            writeln!(writer, "source: {}", topo.source)?;
            writeln!(writer, "vertices: {}", topo.vertices)?;
            for vertex in &topo.ordering {
                writeln!(writer, "{vertex}")?;
            }
            writeln!(writer, "verified: {}", topo.verified)?;
        }
    }
    Ok(())
}

//! Error types for the arbor core library.
//!
//! Defines the error enum exposed by the public API, its stable codes, and a
//! convenient result alias.

use std::{fmt, sync::Arc};

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error produced by graph construction, edge queries, and topological
/// ordering.
///
/// Vertices are rendered with their `Debug` representation so the error type
/// stays independent of the caller's vertex type.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// A vertex was used to look up the opposite endpoint of an edge it does
    /// not touch.
    #[error("vertex {vertex} is not an endpoint of edge {edge}")]
    VertexNotOnEdge {
        /// The vertex supplied by the caller.
        vertex: Arc<str>,
        /// The queried edge.
        edge: Arc<str>,
    },
    /// An edge was constructed with a NaN or infinite weight.
    #[error("edge ({left}, {right}) has non-finite weight")]
    NonFiniteWeight {
        /// The source endpoint as provided.
        left: Arc<str>,
        /// The target endpoint as provided.
        right: Arc<str>,
    },
    /// A candidate topological ordering is not a permutation of the graph's
    /// vertices.
    #[error(
        "ordering is not compatible with the graph: graph has {vertices} vertices, \
         candidate lists {candidate} ({distinct} distinct)"
    )]
    IncompatibleOrdering {
        /// Number of vertices in the graph.
        vertices: usize,
        /// Number of entries in the candidate ordering.
        candidate: usize,
        /// Number of distinct entries in the candidate ordering.
        distinct: usize,
    },
    /// Kahn's algorithm ran out of zero-indegree vertices before emitting the
    /// whole graph.
    #[error("graph contains at least one cycle; {unresolved} vertices could not be ordered")]
    CycleDetected {
        /// Number of vertices left unordered when the queue drained.
        unresolved: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// A vertex is not an endpoint of the queried edge.
        VertexNotOnEdge => VertexNotOnEdge { .. } => "GRAPH_VERTEX_NOT_ON_EDGE",
        /// An edge weight was NaN or infinite.
        NonFiniteWeight => NonFiniteWeight { .. } => "GRAPH_NON_FINITE_WEIGHT",
        /// A candidate ordering did not match the graph's vertex set.
        IncompatibleOrdering => IncompatibleOrdering { .. } => "GRAPH_INCOMPATIBLE_ORDERING",
        /// The graph contains a cycle.
        CycleDetected => CycleDetected { .. } => "GRAPH_CYCLE_DETECTED",
    }
}

impl GraphError {
    /// Returns `true` for errors caused by an argument the operation cannot
    /// accept, as opposed to a property of the graph itself.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::VertexNotOnEdge { .. }
                | Self::NonFiniteWeight { .. }
                | Self::IncompatibleOrdering { .. }
        )
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GraphError>;

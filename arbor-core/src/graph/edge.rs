//! Weighted undirected edge value type.

use std::{
    fmt,
    hash::{Hash, Hasher},
    sync::Arc,
};

use crate::error::{GraphError, Result};

/// An immutable weighted edge between two vertices.
///
/// Equality and hashing cover all three fields. Weights compare by bit
/// pattern, so two edges with the same endpoints but different weights are
/// distinct, `0.0` and `-0.0` differ, and a `NaN` weight equals itself.
///
/// # Examples
/// ```
/// use arbor_core::Edge;
///
/// let edge = Edge::new("a", "b", 2.5);
/// assert_eq!(edge.other(&"a")?, &"b");
/// assert_ne!(edge, Edge::new("a", "b", 3.0));
/// # Ok::<(), arbor_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Edge<V> {
    source: V,
    target: V,
    weight: f64,
}

impl<V> Edge<V> {
    /// Creates an edge. Any `f64` weight is accepted; see [`Edge::try_new`]
    /// for a validating constructor.
    #[must_use]
    pub const fn new(source: V, target: V, weight: f64) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Creates an edge, rejecting NaN and infinite weights.
    ///
    /// # Errors
    /// Returns [`GraphError::NonFiniteWeight`] when `weight` is not finite.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::{Edge, GraphErrorCode};
    ///
    /// let err = Edge::try_new(1, 2, f64::NAN).unwrap_err();
    /// assert_eq!(err.code(), GraphErrorCode::NonFiniteWeight);
    /// ```
    pub fn try_new(source: V, target: V, weight: f64) -> Result<Self>
    where
        V: fmt::Debug,
    {
        if !weight.is_finite() {
            return Err(GraphError::NonFiniteWeight {
                left: render(&source),
                right: render(&target),
            });
        }
        Ok(Self::new(source, target, weight))
    }

    /// Returns the source endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> &V { &self.source }

    /// Returns the target endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> &V { &self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> f64 { self.weight }

    /// Returns both endpoints as `(source, target)`.
    #[must_use]
    pub const fn endpoints(&self) -> (&V, &V) {
        (&self.source, &self.target)
    }

    /// Returns the endpoint opposite `vertex`.
    ///
    /// For a self-loop the single endpoint is returned.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexNotOnEdge`] when `vertex` is neither
    /// endpoint.
    pub fn other(&self, vertex: &V) -> Result<&V>
    where
        V: PartialEq + fmt::Debug,
    {
        if self.source == *vertex {
            return Ok(&self.target);
        }
        if self.target == *vertex {
            return Ok(&self.source);
        }
        Err(GraphError::VertexNotOnEdge {
            vertex: render(vertex),
            edge: render(self),
        })
    }

    /// Returns `true` when both endpoints are the same vertex.
    #[must_use]
    pub fn is_self_loop(&self) -> bool
    where
        V: PartialEq,
    {
        self.source == self.target
    }
}

impl<V: PartialEq> PartialEq for Edge<V> {
    fn eq(&self, other: &Self) -> bool {
        self.weight.to_bits() == other.weight.to_bits()
            && self.source == other.source
            && self.target == other.target
    }
}

impl<V: Eq> Eq for Edge<V> {}

impl<V: Hash> Hash for Edge<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.source.hash(state);
        self.target.hash(state);
        self.weight.to_bits().hash(state);
    }
}

impl<V: fmt::Display> fmt::Display for Edge<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -- {} ({})", self.source, self.target, self.weight)
    }
}

fn render(value: &impl fmt::Debug) -> Arc<str> {
    Arc::from(format!("{value:?}"))
}

//! Edge traits and the concrete edge records stored by the containers.
//!
//! Two record kinds cover the four graph variants: [`DirectedEdge`] whose
//! equality and hash are sensitive to endpoint order, and [`UndirectedEdge`]
//! whose equality holds for `(a, b)` and `(b, a)` interchangeably and whose
//! hash is therefore computed symmetrically. Unweighted variants are the
//! `W = ()` instantiations of the same records.

use std::fmt;
use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A connection between two vertices.
///
/// In a directed graph the edge goes from [`source`](Edge::source) to
/// [`target`](Edge::target); in an undirected graph both vertices are simply
/// adjacent and the orientation of a record reflects which adjacency map it
/// is stored in.
pub trait Edge<V> {
    /// Vertex this edge leaves from.
    fn source(&self) -> &V;

    /// Vertex this edge arrives at.
    fn target(&self) -> &V;
}

/// An [`Edge`] that carries an opaque weight payload.
///
/// The weight is stored and returned but never compared, combined or ordered
/// by this crate.
pub trait WeightedEdge<V, W>: Edge<V> {
    /// Payload associated with this edge.
    fn weight(&self) -> &W;
}

/// Record-construction policy of a graph variant.
///
/// Implemented by the concrete edge records so that a single
/// [`AdjacencyGraph`](crate::graph::AdjacencyGraph) can express all four
/// variants instead of duplicating the container per kind.
pub trait EdgeRecord<V>: Edge<V> + Clone {
    /// Opaque weight payload; `()` for unweighted records.
    type Weight: Clone;

    /// Whether inserting an edge also materializes the mirrored twin record
    /// under the target vertex's adjacency map.
    const MIRRORED: bool;

    /// Builds the record connecting `source` to `target`.
    fn connect(source: V, target: V, weight: Self::Weight) -> Self;
}

/// An edge whose identity depends on the order of its endpoints:
/// `(a, b)` and `(b, a)` are distinct unless `a == b`.
///
/// The weight does not participate in equality or hashing; two directed
/// edges over the same ordered endpoint pair are the same edge.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DirectedEdge<V, W = ()> {
    source: V,
    target: V,
    weight: W,
}

impl<V, W> DirectedEdge<V, W> {
    /// Creates a directed edge from `source` to `target` with `weight`.
    pub fn new(source: V, target: V, weight: W) -> Self {
        DirectedEdge {
            source,
            target,
            weight,
        }
    }
}

impl<V> DirectedEdge<V> {
    /// Creates an unweighted directed edge from `source` to `target`.
    pub fn between(source: V, target: V) -> Self {
        DirectedEdge::new(source, target, ())
    }
}

impl<V, W> Edge<V> for DirectedEdge<V, W> {
    fn source(&self) -> &V {
        &self.source
    }

    fn target(&self) -> &V {
        &self.target
    }
}

impl<V, W> WeightedEdge<V, W> for DirectedEdge<V, W> {
    fn weight(&self) -> &W {
        &self.weight
    }
}

impl<V: PartialEq, W> PartialEq for DirectedEdge<V, W> {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.target == other.target
    }
}

impl<V: Eq, W> Eq for DirectedEdge<V, W> {}

impl<V: Hash, W> Hash for DirectedEdge<V, W> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.source.hash(state);
        self.target.hash(state);
    }
}

impl<V: Clone, W: Clone> EdgeRecord<V> for DirectedEdge<V, W> {
    type Weight = W;

    const MIRRORED: bool = false;

    fn connect(source: V, target: V, weight: W) -> Self {
        DirectedEdge::new(source, target, weight)
    }
}

impl<V: fmt::Display, W> fmt::Display for DirectedEdge<V, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}

/// An edge whose identity ignores the order of its endpoints:
/// `(a, b)` and `(b, a)` are the same edge.
///
/// The hash is a commutative combination of the two endpoint hashes, so the
/// equal-implies-same-hash contract holds for the mirrored pair a container
/// stores per undirected edge. The weight does not participate in equality
/// or hashing.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UndirectedEdge<V, W = ()> {
    source: V,
    target: V,
    weight: W,
}

impl<V, W> UndirectedEdge<V, W> {
    /// Creates an undirected edge between `source` and `target` with `weight`.
    pub fn new(source: V, target: V, weight: W) -> Self {
        UndirectedEdge {
            source,
            target,
            weight,
        }
    }
}

impl<V> UndirectedEdge<V> {
    /// Creates an unweighted undirected edge between `source` and `target`.
    pub fn between(source: V, target: V) -> Self {
        UndirectedEdge::new(source, target, ())
    }
}

impl<V, W> Edge<V> for UndirectedEdge<V, W> {
    fn source(&self) -> &V {
        &self.source
    }

    fn target(&self) -> &V {
        &self.target
    }
}

impl<V, W> WeightedEdge<V, W> for UndirectedEdge<V, W> {
    fn weight(&self) -> &W {
        &self.weight
    }
}

impl<V: PartialEq, W> PartialEq for UndirectedEdge<V, W> {
    fn eq(&self, other: &Self) -> bool {
        (self.source == other.source && self.target == other.target)
            || (self.source == other.target && self.target == other.source)
    }
}

impl<V: Eq, W> Eq for UndirectedEdge<V, W> {}

impl<V: Hash, W> Hash for UndirectedEdge<V, W> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Order-insensitive: addition commutes, so (a, b) and (b, a) agree.
        state.write_u64(endpoint_hash(&self.source).wrapping_add(endpoint_hash(&self.target)));
    }
}

impl<V: Clone, W: Clone> EdgeRecord<V> for UndirectedEdge<V, W> {
    type Weight = W;

    const MIRRORED: bool = true;

    fn connect(source: V, target: V, weight: W) -> Self {
        UndirectedEdge::new(source, target, weight)
    }
}

impl<V: fmt::Display, W> fmt::Display for UndirectedEdge<V, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -- {}", self.source, self.target)
    }
}

fn endpoint_hash<V: Hash>(vertex: &V) -> u64 {
    let mut hasher = FxHasher::default();
    vertex.hash(&mut hasher);
    hasher.finish()
}

//! Mutable graph containers and the capability traits they implement.
//!
//! The model is an adjacency map of adjacency maps: a concurrent map from
//! vertex to a concurrent map from neighbor to the edge record connecting
//! them. Membership tests and outgoing-edge retrieval are O(1). The
//! structure is append-only: nothing is ever removed, and re-inserting an
//! edge for the same ordered endpoint pair overwrites the previous record.

pub mod concurrent;
pub mod edge;
pub mod store;

use std::collections::HashSet;
use std::hash::Hash;

use thiserror::Error;

pub use concurrent::ConcurrentGraph;
pub use edge::{DirectedEdge, Edge, EdgeRecord, UndirectedEdge, WeightedEdge};
pub use store::{
    AdjacencyGraph, DirectedGraph, DirectedWeightedGraph, UndirectedGraph,
    UndirectedWeightedGraph,
};

/// Errors surfaced by graph queries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A query named a vertex the graph has never seen.
    #[error("vertex is not part of the graph")]
    VertexNotFound,
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Read capability over a graph.
///
/// Algorithms depend on this trait only, never on a concrete container, so
/// they run unchanged over any of the four variants and over the
/// [`ConcurrentGraph`] decorator.
pub trait Graph {
    /// Caller-supplied vertex value; only its identity is interpreted.
    type Vertex: Eq + Hash + Clone;

    /// Edge record connecting two vertices.
    type Edge: Edge<Self::Vertex> + Clone;

    /// All vertices currently known to the graph.
    fn vertices(&self) -> HashSet<Self::Vertex>;

    /// All edge records currently stored.
    ///
    /// Undirected graphs materialize each edge as a mirrored pair of
    /// records, and both directions are reported here; callers that want one
    /// record per undirected edge can collect into a set, which the
    /// symmetric equality/hash contract of
    /// [`UndirectedEdge`](edge::UndirectedEdge) makes correct.
    fn edges(&self) -> Vec<Self::Edge>;

    /// All edge records leaving `vertex`; empty if the vertex is unknown.
    fn outgoing_edges(&self, vertex: &Self::Vertex) -> Vec<Self::Edge>;

    /// Whether `vertex` is part of the graph.
    fn contains_vertex(&self, vertex: &Self::Vertex) -> bool;
}

/// Write capability over a graph.
///
/// Mutation goes through `&self`: the base containers rely on the interior
/// mutability of their concurrent maps and provide per-operation (not
/// cross-call) consistency. Wrap a container in
/// [`ConcurrentGraph`](concurrent::ConcurrentGraph) for call-level
/// atomicity.
pub trait MutableGraph: Graph {
    /// Opaque weight payload carried by the stored edges; `()` for the
    /// unweighted variants.
    type Weight: Clone;

    /// Adds `vertex` if absent. Idempotent: a vertex that already exists is
    /// left untouched.
    fn put_vertex(&self, vertex: Self::Vertex);

    /// Adds an edge between `a` and `b`, inserting either endpoint that is
    /// not yet part of the graph.
    ///
    /// Re-inserting an edge over the same ordered pair overwrites the
    /// previous record (last write wins). Undirected containers materialize
    /// the mirrored record under `b` as well.
    fn put_edge(&self, a: Self::Vertex, b: Self::Vertex, weight: Self::Weight);
}

//! The parametrized adjacency-map container behind all four graph variants.

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

use dashmap::DashMap;
use tracing::trace;

use super::edge::{DirectedEdge, EdgeRecord, UndirectedEdge};
use super::{Graph, MutableGraph};

/// A mutable graph stored as a concurrent map from vertex to a concurrent
/// map from neighbor to edge record.
///
/// The edge-record type `E` decides the variant: whether an insertion is
/// mirrored into both endpoints' adjacency maps and whether the record
/// carries a weight. See the four aliases: [`DirectedGraph`],
/// [`UndirectedGraph`], [`DirectedWeightedGraph`] and
/// [`UndirectedWeightedGraph`].
///
/// # Consistency
///
/// Individual map operations are atomic, but `put_edge`'s steps (ensure
/// both endpoints, then insert the record or records) are not transactional:
/// a concurrent reader may briefly observe a freshly added vertex with zero
/// outgoing edges. Writes are never lost. Callers that need call-level
/// atomicity should wrap the container in
/// [`ConcurrentGraph`](super::ConcurrentGraph).
pub struct AdjacencyGraph<V, E> {
    data: DashMap<V, DashMap<V, E>>,
}

impl<V, E> fmt::Debug for AdjacencyGraph<V, E>
where
    V: Eq + Hash + fmt::Debug,
    E: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdjacencyGraph")
            .field("data", &self.data)
            .finish()
    }
}

/// Directed, unweighted graph: edges are one-sided and carry no payload.
pub type DirectedGraph<V> = AdjacencyGraph<V, DirectedEdge<V>>;

/// Undirected, unweighted graph: edges materialize as mirrored record pairs.
pub type UndirectedGraph<V> = AdjacencyGraph<V, UndirectedEdge<V>>;

/// Directed graph whose edges carry an opaque weight payload.
pub type DirectedWeightedGraph<V, W> = AdjacencyGraph<V, DirectedEdge<V, W>>;

/// Undirected graph whose edges carry an opaque weight payload.
pub type UndirectedWeightedGraph<V, W> = AdjacencyGraph<V, UndirectedEdge<V, W>>;

impl<V, E> AdjacencyGraph<V, E>
where
    V: Eq + Hash + Clone,
    E: EdgeRecord<V>,
{
    /// Creates an empty graph.
    pub fn new() -> Self {
        AdjacencyGraph {
            data: DashMap::new(),
        }
    }
}

impl<V, E> AdjacencyGraph<V, E>
where
    V: Eq + Hash + Clone,
    E: EdgeRecord<V, Weight = ()>,
{
    /// Adds an unweighted edge between `a` and `b`.
    pub fn add_edge(&self, a: V, b: V) {
        self.put_edge(a, b, ());
    }
}

impl<V, E> Default for AdjacencyGraph<V, E>
where
    V: Eq + Hash + Clone,
    E: EdgeRecord<V>,
{
    fn default() -> Self {
        AdjacencyGraph::new()
    }
}

impl<V, E> Graph for AdjacencyGraph<V, E>
where
    V: Eq + Hash + Clone,
    E: EdgeRecord<V>,
{
    type Vertex = V;
    type Edge = E;

    fn vertices(&self) -> HashSet<V> {
        self.data.iter().map(|entry| entry.key().clone()).collect()
    }

    fn edges(&self) -> Vec<E> {
        self.data
            .iter()
            .flat_map(|adjacent| {
                adjacent
                    .value()
                    .iter()
                    .map(|edge| edge.value().clone())
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    fn outgoing_edges(&self, vertex: &V) -> Vec<E> {
        match self.data.get(vertex) {
            Some(adjacent) => adjacent.iter().map(|edge| edge.value().clone()).collect(),
            None => Vec::new(),
        }
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.data.contains_key(vertex)
    }
}

impl<V, E> MutableGraph for AdjacencyGraph<V, E>
where
    V: Eq + Hash + Clone,
    E: EdgeRecord<V>,
{
    type Weight = E::Weight;

    fn put_vertex(&self, vertex: V) {
        // Create-if-absent keeps repeated insertion idempotent.
        self.data.entry(vertex).or_insert_with(|| {
            trace!("vertex recorded");
            DashMap::new()
        });
    }

    fn put_edge(&self, a: V, b: V, weight: E::Weight) {
        self.put_vertex(a.clone());
        self.put_vertex(b.clone());
        if E::MIRRORED {
            if let Some(adjacent) = self.data.get(&b) {
                adjacent.insert(a.clone(), E::connect(b.clone(), a.clone(), weight.clone()));
            }
        }
        if let Some(adjacent) = self.data.get(&a) {
            adjacent.insert(b.clone(), E::connect(a, b, weight));
        }
        trace!(mirrored = E::MIRRORED, "edge recorded");
    }
}

//! Readers-writer-lock decorator upgrading a container to call-level
//! atomicity.

use std::collections::HashSet;

use parking_lot::RwLock;

use super::{Graph, MutableGraph};

/// A thread-safety decorator for any [`MutableGraph`].
///
/// Every write acquires the lock exclusively and every read acquires it in
/// shared mode, so any single method invocation is linearizable with respect
/// to any other while unlimited readers may proceed concurrently. Guards are
/// scoped: the lock is released on every exit path, including panics.
///
/// The decorator performs no coordination across multiple calls by the same
/// caller, and the lock is not reentrant: re-entering the same wrapped graph
/// from code running inside one of its calls deadlocks.
#[derive(Debug, Default)]
pub struct ConcurrentGraph<G> {
    inner: RwLock<G>,
}

impl<G> ConcurrentGraph<G> {
    /// Wraps `inner` behind one readers-writer lock.
    pub fn new(inner: G) -> Self {
        ConcurrentGraph {
            inner: RwLock::new(inner),
        }
    }

    /// Unwraps the decorator, returning the underlying graph.
    pub fn into_inner(self) -> G {
        self.inner.into_inner()
    }
}

impl<G: Graph> Graph for ConcurrentGraph<G> {
    type Vertex = G::Vertex;
    type Edge = G::Edge;

    fn vertices(&self) -> HashSet<G::Vertex> {
        self.inner.read().vertices()
    }

    fn edges(&self) -> Vec<G::Edge> {
        self.inner.read().edges()
    }

    fn outgoing_edges(&self, vertex: &G::Vertex) -> Vec<G::Edge> {
        self.inner.read().outgoing_edges(vertex)
    }

    fn contains_vertex(&self, vertex: &G::Vertex) -> bool {
        self.inner.read().contains_vertex(vertex)
    }
}

impl<G: MutableGraph> MutableGraph for ConcurrentGraph<G> {
    type Weight = G::Weight;

    fn put_vertex(&self, vertex: G::Vertex) {
        self.inner.write().put_vertex(vertex);
    }

    fn put_edge(&self, a: G::Vertex, b: G::Vertex, weight: G::Weight) {
        self.inner.write().put_edge(a, b, weight);
    }
}

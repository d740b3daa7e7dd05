//! Depth-first path search over any type exposing the read capability.

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, trace};

use crate::graph::{Edge, Graph, GraphError, GraphResult};

/// A path finder running a depth-first traversal over a borrowed graph.
///
/// The finder depends only on the [`Graph`] read capability, so it works
/// over all container variants and over the
/// [`ConcurrentGraph`](crate::graph::ConcurrentGraph) decorator. It never
/// reads edge weights: the returned path is the first one discovered in
/// depth-first expansion order, not the shortest or lowest-weight one.
pub struct DftPathFinder<'g, G> {
    graph: &'g G,
}

impl<'g, G: Graph> DftPathFinder<'g, G> {
    /// Creates a finder over `graph`.
    pub fn new(graph: &'g G) -> Self {
        DftPathFinder { graph }
    }

    /// Finds a path from `source` to `destination`, returned as the edge
    /// sequence in source-to-destination order.
    ///
    /// Returns [`GraphError::VertexNotFound`] if either endpoint is not part
    /// of the graph. An unreachable destination is not an error: the result
    /// is an empty sequence. Termination is guaranteed on any finite graph,
    /// including cyclic ones, because each vertex is expanded at most once.
    ///
    /// The destination is only matched against edge targets, never against
    /// the starting vertex itself, so `find_path(x, x)` returns an empty
    /// sequence: a vertex does not trivially reach itself, and even a
    /// self-loop unwinds to the empty path.
    pub fn find_path(
        &self,
        source: &G::Vertex,
        destination: &G::Vertex,
    ) -> GraphResult<Vec<G::Edge>> {
        if !self.graph.contains_vertex(source) || !self.graph.contains_vertex(destination) {
            return Err(GraphError::VertexNotFound);
        }
        let mut parent: FxHashMap<G::Vertex, G::Edge> = FxHashMap::default();
        let mut visited: FxHashSet<G::Vertex> = FxHashSet::default();
        let mut frontier = vec![source.clone()];
        while let Some(current) = frontier.pop() {
            if !visited.insert(current.clone()) {
                continue;
            }
            trace!(frontier = frontier.len(), "expanding vertex");
            for edge in self.graph.outgoing_edges(&current) {
                let next = edge.target().clone();
                frontier.push(next.clone());
                // First discovery wins: a later route to an already
                // discovered vertex never replaces its recorded parent.
                parent.entry(next.clone()).or_insert(edge);
                if next == *destination {
                    debug!(expanded = visited.len(), "destination discovered");
                    return Ok(Self::unwind(&parent, source, destination));
                }
            }
        }
        debug!(
            expanded = visited.len(),
            "frontier exhausted without reaching destination"
        );
        Ok(Vec::new())
    }

    /// Reconstructs the discovered path by walking parent records backward
    /// from `destination` to `source`.
    fn unwind(
        parent: &FxHashMap<G::Vertex, G::Edge>,
        source: &G::Vertex,
        destination: &G::Vertex,
    ) -> Vec<G::Edge> {
        let mut path = Vec::new();
        let mut current = destination.clone();
        while current != *source {
            let edge = parent
                .get(&current)
                .expect("every vertex past the source has a recorded parent")
                .clone();
            current = edge.source().clone();
            path.push(edge);
        }
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{DirectedGraph, Edge, MutableGraph};

    #[test]
    fn follows_a_chain() {
        // 1 -> 2 -> 3
        let graph: DirectedGraph<u32> = DirectedGraph::new();
        graph.add_edge(1, 2);
        graph.add_edge(2, 3);

        let finder = DftPathFinder::new(&graph);
        let path = finder.find_path(&1, &3).unwrap();
        assert_eq!(path.len(), 2);
        assert_eq!(*path[0].source(), 1);
        assert_eq!(*path[0].target(), 2);
        assert_eq!(*path[1].source(), 2);
        assert_eq!(*path[1].target(), 3);
    }

    #[test]
    fn terminates_on_cycles() {
        // 1 -> 2 -> 3 -> 1, with 4 unreachable from 1
        let graph: DirectedGraph<u32> = DirectedGraph::new();
        graph.add_edge(1, 2);
        graph.add_edge(2, 3);
        graph.add_edge(3, 1);
        graph.put_vertex(4);

        let finder = DftPathFinder::new(&graph);
        assert!(finder.find_path(&1, &4).unwrap().is_empty());
    }

    #[test]
    fn source_equal_to_destination_yields_empty_path() {
        let graph: DirectedGraph<u32> = DirectedGraph::new();
        graph.add_edge(1, 2);
        graph.add_edge(1, 1);

        let finder = DftPathFinder::new(&graph);
        // Even with a self-loop present, the unwind from destination back to
        // source covers zero edges.
        assert!(finder.find_path(&1, &1).unwrap().is_empty());
        assert!(finder.find_path(&2, &2).unwrap().is_empty());
    }

    #[test]
    fn unknown_endpoint_is_a_precondition_error() {
        let graph: DirectedGraph<u32> = DirectedGraph::new();
        graph.add_edge(1, 2);

        let finder = DftPathFinder::new(&graph);
        assert_eq!(finder.find_path(&1, &9), Err(GraphError::VertexNotFound));
        assert_eq!(finder.find_path(&9, &1), Err(GraphError::VertexNotFound));
    }

    #[test]
    fn first_discovered_parent_is_kept() {
        // Two routes into 3; whichever edge discovers 3 first stays its
        // parent, so the reconstructed path is always consistent.
        let graph: DirectedGraph<u32> = DirectedGraph::new();
        graph.add_edge(1, 2);
        graph.add_edge(1, 3);
        graph.add_edge(2, 3);
        graph.add_edge(3, 4);

        let finder = DftPathFinder::new(&graph);
        let path = finder.find_path(&1, &4).unwrap();
        assert_eq!(*path[0].source(), 1);
        assert_eq!(*path.last().unwrap().target(), 4);
        for pair in path.windows(2) {
            assert_eq!(pair[0].target(), pair[1].source());
        }
    }
}

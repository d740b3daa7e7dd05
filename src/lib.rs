//! Graphlet — a small in-process mutable graph toolkit.
//!
//! Four container variants (directed/undirected × weighted/unweighted)
//! share one adjacency-map implementation, exposed behind capability traits
//! so algorithms never depend on a concrete container. A readers-writer-lock
//! decorator upgrades any container from per-operation to call-level
//! atomicity, and a depth-first path finder runs over anything implementing
//! the read capability.
//!
//! # Example
//!
//! ```
//! use graphlet::graph::{DirectedWeightedGraph, Graph, MutableGraph};
//! use graphlet::algo::DftPathFinder;
//!
//! let graph: DirectedWeightedGraph<&str, u32> = DirectedWeightedGraph::new();
//! graph.put_edge("a", "b", 7);
//! graph.put_edge("b", "c", 3);
//! graph.put_vertex("d");
//!
//! assert_eq!(graph.vertices().len(), 4);
//! assert_eq!(graph.outgoing_edges(&"a").len(), 1);
//!
//! let finder = DftPathFinder::new(&graph);
//! let path = finder.find_path(&"a", &"c").unwrap();
//! assert_eq!(path.len(), 2);
//! assert!(finder.find_path(&"a", &"d").unwrap().is_empty());
//! ```
//!
//! # Concurrency
//!
//! The base containers are safe for unsynchronized concurrent use at the
//! granularity of individual map operations; wrap them in
//! [`graph::ConcurrentGraph`] when whole calls must be linearizable:
//!
//! ```
//! use graphlet::graph::{ConcurrentGraph, DirectedWeightedGraph, Graph, MutableGraph};
//!
//! let graph = ConcurrentGraph::new(DirectedWeightedGraph::<u32, u32>::new());
//! graph.put_edge(0, 1, 10);
//! assert!(graph.contains_vertex(&1));
//! ```

pub mod algo;
pub mod graph;

pub use algo::DftPathFinder;
pub use graph::{
    AdjacencyGraph, ConcurrentGraph, DirectedEdge, DirectedGraph, DirectedWeightedGraph, Edge,
    EdgeRecord, Graph, GraphError, GraphResult, MutableGraph, UndirectedEdge, UndirectedGraph,
    UndirectedWeightedGraph, WeightedEdge,
};

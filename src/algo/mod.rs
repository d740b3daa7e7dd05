//! Traversal algorithms over the graph read capability.

pub mod pathfinding;

pub use pathfinding::DftPathFinder;

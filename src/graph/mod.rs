//! In-memory graph operations: the core data structure and its traversals.

pub mod adjacency_graph;
pub mod builder;
pub mod shared;
pub mod traversal;

pub use adjacency_graph::{Graph, Neighbors};
pub use builder::GraphBuilder;
pub use shared::SharedGraph;
pub use traversal::{
    bfs, bfs_bounded, connected_component, connected_components, dfs, dfs_recursive,
    TraversalParams, TraversalResult,
};

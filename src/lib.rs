//! graph-walk: generic graphs, binary trees and memoized recursion.
//!
//! Builds undirected adjacency-list graphs over any `Eq + Hash + Clone`
//! vertex type and walks them breadth- and depth-first, walks binary trees in
//! pre/in/post/level order, and evaluates overlapping-subproblem recursion
//! with an explicit, caller-owned memo cache.

pub mod cli;
pub mod format;
pub mod graph;
pub mod recursion;
pub mod tree;
pub mod types;

// Re-export commonly used types at the crate root
pub use format::EdgeListReader;
pub use graph::{
    bfs, bfs_bounded, connected_component, connected_components, dfs, dfs_recursive, Graph,
    GraphBuilder, Neighbors, SharedGraph, TraversalParams, TraversalResult,
};
pub use recursion::{
    fib_iterative, fib_memoized, fib_memoized_shared, fib_recursive, fib_tabulated, subsets,
    MemoCache, SharedMemoCache,
};
pub use tree::{in_order, level_order, post_order, pre_order, TreeNode, TreeOrder, TreeWalk};
pub use types::{Vertex, WalkError, WalkResult, DEFAULT_MAX_RESULTS, MAX_FIB_INDEX};

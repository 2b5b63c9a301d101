//! Shared types for the graph-walk library.

pub mod error;
pub mod vertex;

pub use error::{WalkError, WalkResult};
pub use vertex::Vertex;

/// Largest Fibonacci index whose value fits in an `i64`.
pub const MAX_FIB_INDEX: u32 = 92;

/// Default cap on the number of vertices returned by a bounded BFS.
pub const DEFAULT_MAX_RESULTS: usize = 10_000;

//! Error types for the graph-walk library.
//!
//! The graph, tree and recursion cores are total and never fail. These errors
//! belong to the input layer (edge-list files, CLI arguments).

use thiserror::Error;

/// All errors that can occur while loading input or running CLI commands.
#[derive(Error, Debug)]
pub enum WalkError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed edge-list line.
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Requested start vertex is not part of the graph.
    #[error("Vertex {0:?} not found")]
    VertexNotFound(String),

    /// A level-order tree description could not be parsed.
    #[error("Invalid tree description: {0}")]
    InvalidTree(String),

    /// A command-line value was not recognised.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Convenience result type for graph-walk operations.
pub type WalkResult<T> = Result<T, WalkError>;

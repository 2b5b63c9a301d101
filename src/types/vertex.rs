//! The identity contract every vertex type must satisfy.

use std::hash::Hash;

/// A value usable as a graph vertex.
///
/// Vertices are map keys and set members, so they need value equality and a
/// stable hash. `Clone` lets traversals hand back owned visit sequences while
/// the graph keeps its own copies.
///
/// Implemented automatically for every `Eq + Hash + Clone` type.
pub trait Vertex: Eq + Hash + Clone {}

impl<T: Eq + Hash + Clone> Vertex for T {}

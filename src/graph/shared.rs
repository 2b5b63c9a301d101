//! Thread-safe wrapper around [`Graph`] for write-rarely, read-often use.

use std::collections::HashSet;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::types::Vertex;

use super::traversal::{bfs, dfs};
use super::Graph;

/// A [`Graph`] behind a single reader-writer lock.
///
/// Mutations take the write lock; queries and traversals share the read lock,
/// so a traversal always sees a graph that no writer is touching. Query
/// results are owned copies, never views into the locked adjacency map.
#[derive(Debug)]
pub struct SharedGraph<T: Vertex> {
    inner: RwLock<Graph<T>>,
}

impl<T: Vertex> SharedGraph<T> {
    /// Create a new empty shared graph.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Graph::new()),
        }
    }

    /// Wrap an existing graph.
    pub fn from_graph(graph: Graph<T>) -> Self {
        Self {
            inner: RwLock::new(graph),
        }
    }

    // A panicking reader or writer cannot leave the adjacency map half
    // updated, so a poisoned lock is still safe to use.
    fn read(&self) -> RwLockReadGuard<'_, Graph<T>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Graph<T>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add a vertex. No-op if it already exists.
    pub fn add_vertex(&self, vertex: T) {
        self.write().add_vertex(vertex);
    }

    /// Add an undirected edge.
    pub fn add_edge(&self, u: T, v: T) {
        self.write().add_edge(u, v);
    }

    /// Copy of `vertex`'s neighbor list.
    pub fn neighbors(&self, vertex: &T) -> Vec<T> {
        self.read().neighbors(vertex).to_vec()
    }

    /// Copy of the vertex set.
    pub fn vertices(&self) -> HashSet<T> {
        self.read().iter_vertices().cloned().collect()
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.read().vertex_count()
    }

    /// BFS under the read lock.
    pub fn bfs(&self, start: &T) -> Vec<T> {
        let graph = self.read();
        bfs(&*graph, start)
    }

    /// DFS under the read lock.
    pub fn dfs(&self, start: &T) -> Vec<T> {
        let graph = self.read();
        dfs(&*graph, start)
    }

    /// Run `f` against the graph while holding the read lock.
    pub fn with_graph<R>(&self, f: impl FnOnce(&Graph<T>) -> R) -> R {
        f(&self.read())
    }

    /// Clone the current graph state.
    pub fn snapshot(&self) -> Graph<T> {
        self.read().clone()
    }

    /// Consume the wrapper and return the graph.
    pub fn into_inner(self) -> Graph<T> {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: Vertex> Default for SharedGraph<T> {
    fn default() -> Self {
        Self::new()
    }
}

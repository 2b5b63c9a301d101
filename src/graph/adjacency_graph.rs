//! Core graph structure: an undirected adjacency list over generic vertices.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::types::Vertex;

/// Read-only neighbor queries. Traversals only ever see a graph through this.
pub trait Neighbors<T> {
    /// Neighbors of `vertex` in insertion order; empty for unknown vertices.
    fn neighbors(&self, vertex: &T) -> &[T];

    /// Whether `vertex` has been added to the graph.
    fn contains_vertex(&self, vertex: &T) -> bool;
}

/// An undirected graph stored as a map from each vertex to its neighbor list.
///
/// Every `add_edge(u, v)` appends `v` to `u`'s list and `u` to `v`'s list.
/// Duplicate edges and self-loops are kept as repeated entries.
#[derive(Debug, Clone)]
pub struct Graph<T: Vertex> {
    /// Vertex -> neighbors, in the order edges were added.
    adjacency: HashMap<T, Vec<T>>,
    /// Number of `add_edge` calls.
    edge_count: usize,
}

impl<T: Vertex> Graph<T> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            adjacency: HashMap::new(),
            edge_count: 0,
        }
    }

    /// Create an empty graph with room for `vertices` entries.
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            adjacency: HashMap::with_capacity(vertices),
            edge_count: 0,
        }
    }

    /// Add a vertex with no neighbors. No-op if it already exists.
    pub fn add_vertex(&mut self, vertex: T) {
        self.adjacency.entry(vertex).or_default();
    }

    /// Add an undirected edge, creating either endpoint if needed.
    pub fn add_edge(&mut self, u: T, v: T) {
        self.adjacency.entry(u.clone()).or_default().push(v.clone());
        self.adjacency.entry(v).or_default().push(u);
        self.edge_count += 1;
    }

    /// Neighbors of `vertex`, or an empty slice if it is unknown.
    pub fn neighbors(&self, vertex: &T) -> &[T] {
        self.adjacency
            .get(vertex)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// All known vertices. Order is unspecified.
    pub fn vertices(&self) -> HashSet<&T> {
        self.adjacency.keys().collect()
    }

    /// Iterate over all known vertices without collecting them.
    pub fn iter_vertices(&self) -> impl Iterator<Item = &T> {
        self.adjacency.keys()
    }

    /// Whether `vertex` has been added.
    pub fn contains_vertex(&self, vertex: &T) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges added, duplicates and self-loops included.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Number of entries in `vertex`'s neighbor list.
    pub fn degree(&self, vertex: &T) -> usize {
        self.neighbors(vertex).len()
    }

    /// True if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

impl<T: Vertex> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Vertex> Neighbors<T> for Graph<T> {
    fn neighbors(&self, vertex: &T) -> &[T] {
        Graph::neighbors(self, vertex)
    }

    fn contains_vertex(&self, vertex: &T) -> bool {
        Graph::contains_vertex(self, vertex)
    }
}

impl<T: Vertex> FromIterator<(T, T)> for Graph<T> {
    fn from_iter<I: IntoIterator<Item = (T, T)>>(iter: I) -> Self {
        let mut graph = Graph::new();
        for (u, v) in iter {
            graph.add_edge(u, v);
        }
        graph
    }
}

/// One line per vertex, `vertex: [n1, n2, ...]`, sorted by the vertex's text.
impl<T: Vertex + fmt::Display> fmt::Display for Graph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rows: Vec<(String, &Vec<T>)> = self
            .adjacency
            .iter()
            .map(|(v, ns)| (v.to_string(), ns))
            .collect();
        rows.sort_by(|a, b| a.0.cmp(&b.0));

        for (vertex, neighbors) in rows {
            let names: Vec<String> = neighbors.iter().map(|n| n.to_string()).collect();
            writeln!(f, "{}: [{}]", vertex, names.join(", "))?;
        }
        Ok(())
    }
}

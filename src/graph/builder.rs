//! Fluent API for building Graph instances.

use crate::types::Vertex;

use super::Graph;

/// Fluent builder for constructing a [`Graph`].
pub struct GraphBuilder<T: Vertex> {
    vertices: Vec<T>,
    edges: Vec<(T, T)>,
}

impl<T: Vertex> GraphBuilder<T> {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Declare a vertex, possibly isolated.
    pub fn vertex(&mut self, vertex: T) -> &mut Self {
        self.vertices.push(vertex);
        self
    }

    /// Add an undirected edge.
    pub fn edge(&mut self, u: T, v: T) -> &mut Self {
        self.edges.push((u, v));
        self
    }

    /// Add several undirected edges, in order.
    pub fn edges<I: IntoIterator<Item = (T, T)>>(&mut self, edges: I) -> &mut Self {
        self.edges.extend(edges);
        self
    }

    /// Build the final Graph. Vertices are inserted first, then edges in the
    /// order they were given, so neighbor order follows the builder calls.
    pub fn build(self) -> Graph<T> {
        let mut graph = Graph::with_capacity(self.vertices.len() + self.edges.len());
        for v in self.vertices {
            graph.add_vertex(v);
        }
        for (u, v) in self.edges {
            graph.add_edge(u, v);
        }
        graph
    }
}

impl<T: Vertex> Default for GraphBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

//! Graph traversal algorithms (BFS, DFS, components).
//!
//! Every traversal owns a fresh visited set for the duration of the call and
//! reaches the graph only through [`Neighbors`]. Starting from a vertex that
//! is not in the graph yields an empty result.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::types::{Vertex, DEFAULT_MAX_RESULTS};

use super::{Graph, Neighbors};

/// Breadth-first visit order from `start`.
///
/// Vertices come out in non-decreasing hop distance. Ties are broken by
/// discovery order, which follows neighbor insertion order.
pub fn bfs<'g, T, G>(graph: &'g G, start: &'g T) -> Vec<T>
where
    T: Vertex,
    G: Neighbors<T> + ?Sized,
{
    if !graph.contains_vertex(start) {
        return Vec::new();
    }

    let mut visited: HashSet<&T> = HashSet::new();
    let mut queue: VecDeque<&T> = VecDeque::new();
    let mut order: Vec<T> = Vec::new();

    visited.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        order.push(current.clone());
        for neighbor in graph.neighbors(current) {
            if visited.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }

    log::debug!("bfs visited {} vertices", order.len());
    order
}

/// Iterative depth-first visit order from `start`.
///
/// Neighbors are pushed in insertion order, so the most recently inserted
/// neighbor is explored first. The visited check happens at pop time: a vertex
/// may sit on the stack several times before it is emitted once.
pub fn dfs<'g, T, G>(graph: &'g G, start: &'g T) -> Vec<T>
where
    T: Vertex,
    G: Neighbors<T> + ?Sized,
{
    if !graph.contains_vertex(start) {
        return Vec::new();
    }

    let mut visited: HashSet<&T> = HashSet::new();
    let mut stack: Vec<&T> = vec![start];
    let mut order: Vec<T> = Vec::new();

    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }
        order.push(current.clone());
        for neighbor in graph.neighbors(current) {
            if !visited.contains(neighbor) {
                stack.push(neighbor);
            }
        }
    }

    log::debug!("dfs visited {} vertices", order.len());
    order
}

/// Recursive pre-order DFS that explores neighbors in insertion order.
///
/// Recursion depth grows with the longest path, so prefer [`dfs`] on large or
/// untrusted graphs.
pub fn dfs_recursive<'g, T, G>(graph: &'g G, start: &'g T) -> Vec<T>
where
    T: Vertex,
    G: Neighbors<T> + ?Sized,
{
    fn visit<'g, T: Vertex, G: Neighbors<T> + ?Sized>(
        graph: &'g G,
        vertex: &'g T,
        visited: &mut HashSet<&'g T>,
        order: &mut Vec<T>,
    ) {
        visited.insert(vertex);
        order.push(vertex.clone());
        for neighbor in graph.neighbors(vertex) {
            if !visited.contains(neighbor) {
                visit(graph, neighbor, visited, order);
            }
        }
    }

    let mut order = Vec::new();
    if graph.contains_vertex(start) {
        let mut visited = HashSet::new();
        visit(graph, start, &mut visited, &mut order);
    }
    order
}

/// Parameters for a bounded breadth-first traversal.
#[derive(Debug, Clone)]
pub struct TraversalParams<T> {
    /// Starting vertex.
    pub start: T,
    /// Maximum number of hops from `start`.
    pub max_depth: u32,
    /// Maximum number of vertices to return.
    pub max_results: usize,
}

impl<T> TraversalParams<T> {
    /// Unbounded depth, default result cap.
    pub fn new(start: T) -> Self {
        Self {
            start,
            max_depth: u32::MAX,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    /// Limit the traversal to `max_depth` hops.
    pub fn max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Stop after `max_results` vertices.
    pub fn max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }
}

/// Result of a bounded traversal.
#[derive(Debug, Clone)]
pub struct TraversalResult<T: Vertex> {
    /// Vertices in BFS order.
    pub visited: Vec<T>,
    /// Hop distance from the start for each visited vertex.
    pub depths: HashMap<T, u32>,
}

impl<T: Vertex> TraversalResult<T> {
    /// Hop distance of `vertex`, if it was visited.
    pub fn depth_of(&self, vertex: &T) -> Option<u32> {
        self.depths.get(vertex).copied()
    }
}

/// BFS from `params.start` that stops expanding at `max_depth` hops and stops
/// collecting after `max_results` vertices.
pub fn bfs_bounded<T, G>(graph: &G, params: TraversalParams<T>) -> TraversalResult<T>
where
    T: Vertex,
    G: Neighbors<T> + ?Sized,
{
    let mut visited_order: Vec<T> = Vec::new();
    let mut depths: HashMap<T, u32> = HashMap::new();

    if !graph.contains_vertex(&params.start) || params.max_results == 0 {
        return TraversalResult {
            visited: visited_order,
            depths,
        };
    }

    let mut visited: HashSet<&T> = HashSet::new();
    let mut queue: VecDeque<(&T, u32)> = VecDeque::new();

    visited.insert(&params.start);
    visited_order.push(params.start.clone());
    depths.insert(params.start.clone(), 0);
    queue.push_back((&params.start, 0));

    'outer: while let Some((current, depth)) = queue.pop_front() {
        if depth >= params.max_depth {
            continue;
        }
        for neighbor in graph.neighbors(current) {
            if visited_order.len() >= params.max_results {
                break 'outer;
            }
            if !visited.insert(neighbor) {
                continue;
            }
            visited_order.push(neighbor.clone());
            depths.insert(neighbor.clone(), depth + 1);
            queue.push_back((neighbor, depth + 1));
        }
    }

    log::debug!(
        "bounded bfs visited {} vertices (max_depth={}, max_results={})",
        visited_order.len(),
        params.max_depth,
        params.max_results
    );

    TraversalResult {
        visited: visited_order,
        depths,
    }
}

/// All vertices in the same connected component as `start`.
pub fn connected_component<'g, T, G>(graph: &'g G, start: &'g T) -> HashSet<T>
where
    T: Vertex,
    G: Neighbors<T> + ?Sized,
{
    bfs(graph, start).into_iter().collect()
}

/// Partition the graph into connected components.
///
/// Each component is listed in BFS order from its first-seen vertex. The
/// order of components follows the graph's (unspecified) vertex order.
pub fn connected_components<T: Vertex>(graph: &Graph<T>) -> Vec<Vec<T>> {
    let mut seen: HashSet<T> = HashSet::with_capacity(graph.vertex_count());
    let mut components = Vec::new();

    for vertex in graph.iter_vertices() {
        if seen.contains(vertex) {
            continue;
        }
        let component = bfs(graph, vertex);
        seen.extend(component.iter().cloned());
        components.push(component);
    }

    log::debug!("found {} connected components", components.len());
    components
}

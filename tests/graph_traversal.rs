//! Graph store and traversal tests.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::thread;

use graph_walk::graph::{
    bfs, bfs_bounded, connected_component, connected_components, dfs, dfs_recursive, Graph,
    GraphBuilder, SharedGraph, TraversalParams,
};

// ==================== Helper ====================

/// The six-person social network used throughout.
fn social_network() -> Graph<String> {
    let mut builder = GraphBuilder::new();
    for (u, v) in [
        ("Alice", "Bob"),
        ("Alice", "Charlie"),
        ("Bob", "David"),
        ("Charlie", "Eve"),
        ("David", "Eve"),
        ("Eve", "Frank"),
    ] {
        builder.edge(u.to_string(), v.to_string());
    }
    builder.build()
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// Hop distances from `start` computed independently of `bfs`.
fn distances(graph: &Graph<i32>, start: i32) -> HashMap<i32, usize> {
    let mut dist = HashMap::from([(start, 0usize)]);
    let mut frontier = vec![start];
    let mut d = 0;
    while !frontier.is_empty() {
        d += 1;
        let mut next = Vec::new();
        for v in frontier {
            for &n in graph.neighbors(&v) {
                if !dist.contains_key(&n) {
                    dist.insert(n, d);
                    next.push(n);
                }
            }
        }
        frontier = next;
    }
    dist
}

// ==================== Graph Store Tests ====================

#[test]
fn test_add_edge_is_symmetric() {
    let mut g = Graph::new();
    g.add_edge("u", "v");
    assert_eq!(g.neighbors(&"u"), &["v"]);
    assert_eq!(g.neighbors(&"v"), &["u"]);
    assert_eq!(g.vertex_count(), 2);
    assert_eq!(g.edge_count(), 1);
}

#[test]
fn test_neighbor_order_is_insertion_order() {
    let mut g = Graph::new();
    g.add_edge(1, 5);
    g.add_edge(1, 3);
    g.add_edge(1, 4);
    assert_eq!(g.neighbors(&1), &[5, 3, 4]);
}

#[test]
fn test_isolated_vertex_has_empty_neighbors() {
    let mut g: Graph<i32> = Graph::new();
    g.add_vertex(7);
    assert!(g.contains_vertex(&7));
    assert!(g.neighbors(&7).is_empty());
    assert_eq!(g.degree(&7), 0);
}

#[test]
fn test_unknown_vertex_neighbors_empty() {
    let g = social_network();
    assert!(g.neighbors(&"Zed".to_string()).is_empty());
    assert!(!g.contains_vertex(&"Zed".to_string()));
}

#[test]
fn test_vertices_returns_all() {
    let g = social_network();
    let vs: HashSet<&str> = g.vertices().into_iter().map(|s| s.as_str()).collect();
    let expected: HashSet<&str> = ["Alice", "Bob", "Charlie", "David", "Eve", "Frank"]
        .into_iter()
        .collect();
    assert_eq!(vs, expected);
}

#[test]
fn test_duplicate_edge_kept_twice() {
    let mut g = Graph::new();
    g.add_edge('a', 'b');
    g.add_edge('a', 'b');
    assert_eq!(g.neighbors(&'a'), &['b', 'b']);
    assert_eq!(g.neighbors(&'b'), &['a', 'a']);
    assert_eq!(g.edge_count(), 2);

    assert_eq!(bfs(&g, &'a'), vec!['a', 'b']);
    assert_eq!(dfs(&g, &'a'), vec!['a', 'b']);
}

#[test]
fn test_self_loop_traversal() {
    let mut g = Graph::new();
    g.add_edge(1, 1);
    g.add_edge(1, 2);
    assert_eq!(g.neighbors(&1), &[1, 1, 2]);
    assert_eq!(bfs(&g, &1), vec![1, 2]);
    assert_eq!(dfs(&g, &1), vec![1, 2]);
}

#[test]
fn test_builder_keeps_isolated_vertices() {
    let mut builder = GraphBuilder::new();
    builder.vertex(10).edge(1, 2).edges([(2, 3), (3, 1)]);
    let g = builder.build();
    assert_eq!(g.vertex_count(), 4);
    assert_eq!(g.edge_count(), 3);
    assert!(g.neighbors(&10).is_empty());
}

#[test]
fn test_graph_from_iterator() {
    let g: Graph<u8> = vec![(1, 2), (2, 3)].into_iter().collect();
    assert_eq!(g.neighbors(&2), &[1, 3]);
}

// ==================== BFS Tests ====================

#[test]
fn test_bfs_social_network() {
    let g = social_network();
    let order = bfs(&g, &"Alice".to_string());
    assert_eq!(
        order,
        names(&["Alice", "Bob", "Charlie", "David", "Eve", "Frank"])
    );
}

#[test]
fn test_bfs_unknown_start_is_empty() {
    let g = social_network();
    assert!(bfs(&g, &"Nobody".to_string()).is_empty());
}

#[test]
fn test_bfs_only_reaches_component() {
    let mut g = Graph::new();
    g.add_edge(1, 2);
    g.add_edge(2, 3);
    g.add_edge(10, 11);
    g.add_vertex(99);
    assert_eq!(bfs(&g, &1), vec![1, 2, 3]);
    assert_eq!(bfs(&g, &11), vec![11, 10]);
    assert_eq!(bfs(&g, &99), vec![99]);
}

#[test]
fn test_bfs_handles_cycles() {
    let mut g = Graph::new();
    for i in 0..5 {
        g.add_edge(i, (i + 1) % 5);
    }
    assert_eq!(bfs(&g, &0), vec![0, 1, 4, 2, 3]);
}

#[test]
fn test_bfs_distance_is_non_decreasing() {
    let mut g = Graph::new();
    for (u, v) in [(0, 1), (0, 2), (1, 3), (2, 3), (3, 4), (4, 5), (1, 5), (6, 2)] {
        g.add_edge(u, v);
    }
    let dist = distances(&g, 0);
    let order = bfs(&g, &0);
    let ds: Vec<usize> = order.iter().map(|v| dist[v]).collect();
    assert!(ds.windows(2).all(|w| w[0] <= w[1]), "{:?}", ds);
    assert_eq!(order.len(), dist.len());
}

// ==================== DFS Tests ====================

#[test]
fn test_dfs_social_network() {
    let g = social_network();
    let order = dfs(&g, &"Alice".to_string());
    assert_eq!(
        order,
        names(&["Alice", "Charlie", "Eve", "Frank", "David", "Bob"])
    );
}

#[test]
fn test_dfs_explores_last_inserted_neighbor_first() {
    let mut g = Graph::new();
    g.add_edge(0, 1);
    g.add_edge(0, 2);
    g.add_edge(0, 3);
    assert_eq!(dfs(&g, &0), vec![0, 3, 2, 1]);
}

#[test]
fn test_dfs_recursive_uses_store_order() {
    let g = social_network();
    let order = dfs_recursive(&g, &"Alice".to_string());
    assert_eq!(
        order,
        names(&["Alice", "Bob", "David", "Eve", "Charlie", "Frank"])
    );
}

#[test]
fn test_dfs_unknown_start_is_empty() {
    let g: Graph<i32> = Graph::new();
    assert!(dfs(&g, &1).is_empty());
    assert!(dfs_recursive(&g, &1).is_empty());
}

#[test]
fn test_dfs_long_path_does_not_overflow() {
    let mut g = Graph::new();
    for i in 0..100_000u32 {
        g.add_edge(i, i + 1);
    }
    let order = dfs(&g, &0);
    assert_eq!(order.len(), 100_001);
    assert_eq!(order[100_000], 100_000);
}

#[test]
fn test_bfs_and_dfs_agree_on_component_size() {
    let g = social_network();
    let start = "Eve".to_string();
    let b = bfs(&g, &start);
    let d = dfs(&g, &start);
    assert_eq!(b.len(), d.len());
    assert_eq!(
        b.iter().collect::<HashSet<_>>(),
        d.iter().collect::<HashSet<_>>()
    );
}

// ==================== Bounded BFS Tests ====================

#[test]
fn test_bfs_bounded_depths() {
    let g = social_network();
    let result = bfs_bounded(&g, TraversalParams::new("Alice".to_string()));
    assert_eq!(result.visited.len(), 6);
    assert_eq!(result.depth_of(&"Alice".to_string()), Some(0));
    assert_eq!(result.depth_of(&"Charlie".to_string()), Some(1));
    assert_eq!(result.depth_of(&"Eve".to_string()), Some(2));
    assert_eq!(result.depth_of(&"Frank".to_string()), Some(3));
}

#[test]
fn test_bfs_bounded_max_depth() {
    let g = social_network();
    let result = bfs_bounded(&g, TraversalParams::new("Alice".to_string()).max_depth(1));
    assert_eq!(result.visited, names(&["Alice", "Bob", "Charlie"]));
}

#[test]
fn test_bfs_bounded_max_results() {
    let g = social_network();
    let result = bfs_bounded(
        &g,
        TraversalParams::new("Alice".to_string()).max_results(4),
    );
    assert_eq!(result.visited, names(&["Alice", "Bob", "Charlie", "David"]));
    assert_eq!(result.depths.len(), 4);
}

#[test]
fn test_bfs_bounded_unknown_start() {
    let g = social_network();
    let result = bfs_bounded(&g, TraversalParams::new("Zed".to_string()));
    assert!(result.visited.is_empty());
    assert!(result.depths.is_empty());
}

// ==================== Component Tests ====================

#[test]
fn test_connected_component() {
    let mut g = Graph::new();
    g.add_edge(1, 2);
    g.add_edge(3, 4);
    assert_eq!(connected_component(&g, &2), HashSet::from([1, 2]));
    assert!(connected_component(&g, &9).is_empty());
}

#[test]
fn test_connected_components_partition() {
    let mut g = Graph::new();
    g.add_edge(1, 2);
    g.add_edge(2, 3);
    g.add_edge(4, 5);
    g.add_vertex(6);

    let mut sizes: Vec<usize> = connected_components(&g).iter().map(|c| c.len()).collect();
    sizes.sort_unstable();
    assert_eq!(sizes, vec![1, 2, 3]);

    let all: HashSet<i32> = connected_components(&g).into_iter().flatten().collect();
    assert_eq!(all.len(), g.vertex_count());
}

// ==================== Shared Graph Tests ====================

#[test]
fn test_shared_graph_concurrent_writers() {
    let shared = Arc::new(SharedGraph::new());
    let handles: Vec<_> = (0..4)
        .map(|t| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                for i in 0..100 {
                    shared.add_edge(0, t * 1000 + i + 1);
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    assert_eq!(shared.vertex_count(), 401);
    assert_eq!(shared.neighbors(&0).len(), 400);
    assert_eq!(shared.bfs(&0).len(), 401);
    assert_eq!(shared.dfs(&0).len(), 401);
}

#[test]
fn test_shared_graph_snapshot_is_independent() {
    let shared = SharedGraph::new();
    shared.add_edge("a", "b");
    let snapshot = shared.snapshot();
    shared.add_vertex("c");
    assert_eq!(snapshot.vertex_count(), 2);
    assert_eq!(shared.vertices().len(), 3);
    assert_eq!(shared.with_graph(|g| g.edge_count()), 1);
    assert_eq!(shared.into_inner().vertex_count(), 3);
}

//! CLI command implementations.

use std::path::Path;
use std::time::Instant;

use crate::format::{parse_level_order, parse_values, EdgeListReader};
use crate::graph::{bfs_bounded, connected_components, dfs, Graph, TraversalParams};
use crate::recursion::{fib_report, subsets};
use crate::tree::{in_order, level_order, post_order, pre_order, walk_all, TreeNode, TreeOrder};
use crate::types::{WalkError, WalkResult, MAX_FIB_INDEX};

/// Largest index `gwalk fib` accepts; the memoized run recurses `n` deep.
pub const MAX_CLI_FIB_INDEX: u32 = 10_000;

/// Longest list `gwalk subsets` accepts; output grows as `2^len`.
pub const MAX_CLI_SUBSET_LEN: usize = 20;

fn load_with_start(path: &Path, start: &str) -> WalkResult<Graph<String>> {
    let graph = EdgeListReader::read_from_file(path)?;
    if !graph.contains_vertex(&start.to_string()) {
        return Err(WalkError::VertexNotFound(start.to_string()));
    }
    Ok(graph)
}

/// Print the adjacency list of an edge-list file.
pub fn cmd_show(path: &Path, json: bool) -> WalkResult<()> {
    let graph = EdgeListReader::read_from_file(path)?;

    if json {
        let mut vertices: Vec<&String> = graph.iter_vertices().collect();
        vertices.sort();
        let adjacency: serde_json::Map<String, serde_json::Value> = vertices
            .into_iter()
            .map(|v| (v.clone(), serde_json::json!(graph.neighbors(v))))
            .collect();
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "vertices": graph.vertex_count(),
            "edges": graph.edge_count(),
            "adjacency": adjacency,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("File: {}", path.display());
        println!("Vertices: {}", graph.vertex_count());
        println!("Edges: {}", graph.edge_count());
        print!("{}", graph);
    }
    Ok(())
}

/// Breadth-first traversal, optionally bounded.
pub fn cmd_bfs(
    path: &Path,
    start: &str,
    max_depth: u32,
    max_results: usize,
    json: bool,
) -> WalkResult<()> {
    let graph = load_with_start(path, start)?;

    let result = bfs_bounded(
        &graph,
        TraversalParams::new(start.to_string())
            .max_depth(max_depth)
            .max_results(max_results),
    );

    if json {
        let visited: Vec<serde_json::Value> = result
            .visited
            .iter()
            .map(|v| serde_json::json!({"vertex": v, "depth": result.depth_of(v).unwrap_or(0)}))
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&visited).unwrap_or_default()
        );
    } else {
        println!("BFS starting from {}:", start);
        for v in &result.visited {
            let depth = result.depth_of(v).unwrap_or(0);
            println!("{}[depth {}] {}", "  ".repeat(depth as usize), depth, v);
        }
        println!("\n{} vertices", result.visited.len());
    }
    Ok(())
}

/// Iterative depth-first traversal.
pub fn cmd_dfs(path: &Path, start: &str, json: bool) -> WalkResult<()> {
    let graph = load_with_start(path, start)?;
    let start = start.to_string();
    let order = dfs(&graph, &start);

    if json {
        println!("{}", serde_json::json!({"start": start, "visited": order}));
    } else {
        println!("DFS starting from {}: {}", start, order.join(" "));
    }
    Ok(())
}

/// List connected components, largest first.
pub fn cmd_components(path: &Path, json: bool) -> WalkResult<()> {
    let graph = EdgeListReader::read_from_file(path)?;
    let mut components = connected_components(&graph);
    components.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&components).unwrap_or_default()
        );
    } else {
        for (i, component) in components.iter().enumerate() {
            println!(
                "Component {} ({} vertices): {}",
                i,
                component.len(),
                component.join(" ")
            );
        }
        println!("\n{} components", components.len());
    }
    Ok(())
}

/// Traverse a tree given as a level-order listing.
pub fn cmd_tree(values: &str, order: Option<TreeOrder>, json: bool) -> WalkResult<()> {
    let listing = parse_level_order(values)?;
    let root = TreeNode::from_level_order(&listing)?;
    let root = root.as_deref();

    if json {
        let value = match order {
            None => serde_json::to_value(walk_all(root)).unwrap_or_default(),
            Some(TreeOrder::LevelOrder) => serde_json::json!({"level": level_order(root)}),
            Some(o) => {
                let mut map = serde_json::Map::new();
                map.insert(o.name().to_string(), serde_json::json!(flat_order(root, o)));
                serde_json::Value::Object(map)
            }
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&value).unwrap_or_default()
        );
        return Ok(());
    }

    let orders: Vec<TreeOrder> = match order {
        Some(o) => vec![o],
        None => TreeOrder::ALL.to_vec(),
    };
    for o in orders {
        match o {
            TreeOrder::LevelOrder => println!("{:<6} {:?}", "level:", level_order(root)),
            _ => println!("{:<6} {:?}", format!("{}:", o), flat_order(root, o)),
        }
    }
    Ok(())
}

fn flat_order(root: Option<&TreeNode>, order: TreeOrder) -> Vec<i32> {
    match order {
        TreeOrder::PreOrder => pre_order(root),
        TreeOrder::InOrder => in_order(root),
        TreeOrder::PostOrder => post_order(root),
        TreeOrder::LevelOrder => level_order(root).into_iter().flatten().collect(),
    }
}

/// Compute `fib(n)` with each fast variant and report timings.
pub fn cmd_fib(n: u32, json: bool) -> WalkResult<()> {
    if n > MAX_CLI_FIB_INDEX {
        return Err(WalkError::InvalidArgument(format!(
            "n must be at most {}, got {}",
            MAX_CLI_FIB_INDEX, n
        )));
    }

    let started = Instant::now();
    let report = fib_report(n);
    let elapsed = started.elapsed();

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).unwrap_or_default()
        );
    } else {
        println!("fib({}) = {}", n, report.iterative);
        println!("  memoized:  {}", report.memoized);
        println!("  tabulated: {}", report.tabulated);
        println!("  iterative: {}", report.iterative);
        println!("  cache entries: {}", report.cache_entries);
        println!("  time: {:.3} ms", elapsed.as_secs_f64() * 1000.0);
        if !report.exact {
            println!(
                "  note: n > {} overflows i64; values have wrapped",
                MAX_FIB_INDEX
            );
        }
    }
    Ok(())
}

/// Print every subset of a comma-separated list.
pub fn cmd_subsets(values: &str, json: bool) -> WalkResult<()> {
    let values = parse_values(values)?;
    if values.len() > MAX_CLI_SUBSET_LEN {
        return Err(WalkError::InvalidArgument(format!(
            "at most {} values, got {}",
            MAX_CLI_SUBSET_LEN,
            values.len()
        )));
    }
    let all = subsets(&values);

    if json {
        println!("{}", serde_json::to_string(&all).unwrap_or_default());
    } else {
        for subset in &all {
            println!("{:?}", subset);
        }
        println!("\n{} subsets", all.len());
    }
    Ok(())
}

//! Build a small social network, walk it, then walk a tree and compute fib.

use graph_walk::*;

fn main() {
    // Build a sample graph (a simple social network)
    let mut builder = GraphBuilder::new();
    builder
        .edge("Alice", "Bob")
        .edge("Alice", "Charlie")
        .edge("Bob", "David")
        .edge("Charlie", "Eve")
        .edge("David", "Eve")
        .edge("Eve", "Frank");
    let network = builder.build();

    println!("Graph structure (adjacency list):");
    print!("{}", network);

    println!("\nBFS from Alice: {}", bfs(&network, &"Alice").join(" "));
    println!("DFS from Alice: {}", dfs(&network, &"Alice").join(" "));

    // Hop distances via the bounded traversal
    let result = bfs_bounded(&network, TraversalParams::new("Alice").max_depth(2));
    for v in &result.visited {
        println!("  [depth {}] {}", result.depth_of(v).unwrap_or(0), v);
    }

    //      4
    //     / \
    //    2   7
    //   / \ / \
    //  1  3 6  9
    let root = TreeNode::new(4)
        .with_left(TreeNode::new(2).with_left(TreeNode::new(1)).with_right(TreeNode::new(3)))
        .with_right(TreeNode::new(7).with_left(TreeNode::new(6)).with_right(TreeNode::new(9)));

    println!("\nPre-order:   {:?}", pre_order(Some(&root)));
    println!("In-order:    {:?}", in_order(Some(&root)));
    println!("Post-order:  {:?}", post_order(Some(&root)));
    println!("Level-order: {:?}", level_order(Some(&root)));

    let mut cache = MemoCache::new();
    println!(
        "\nfib(40) = {} (memoized, {} cache entries), {} (iterative)",
        fib_memoized(40, &mut cache),
        cache.len(),
        fib_iterative(40)
    );
}

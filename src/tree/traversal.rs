//! Binary tree traversals.
//!
//! The iterative walks use an explicit stack or queue and are safe on trees of
//! any depth. The `*_recursive` variants are kept as straightforward reference
//! implementations.

use std::collections::VecDeque;

use serde::Serialize;

use super::TreeNode;

/// Pre-order (node, left, right) values.
pub fn pre_order(root: Option<&TreeNode>) -> Vec<i32> {
    let mut result = Vec::new();
    let mut stack: Vec<&TreeNode> = root.into_iter().collect();

    while let Some(node) = stack.pop() {
        result.push(node.val);
        // Right goes on first so left is popped first.
        stack.extend(node.right.as_deref());
        stack.extend(node.left.as_deref());
    }
    result
}

/// In-order (left, node, right) values.
pub fn in_order(root: Option<&TreeNode>) -> Vec<i32> {
    let mut result = Vec::new();
    let mut stack: Vec<&TreeNode> = Vec::new();
    let mut current = root;

    while current.is_some() || !stack.is_empty() {
        while let Some(node) = current {
            stack.push(node);
            current = node.left.as_deref();
        }
        if let Some(node) = stack.pop() {
            result.push(node.val);
            current = node.right.as_deref();
        }
    }
    result
}

/// Post-order (left, right, node) values.
pub fn post_order(root: Option<&TreeNode>) -> Vec<i32> {
    // Node-right-left on one stack, reversed, is left-right-node.
    let mut result = Vec::new();
    let mut stack: Vec<&TreeNode> = root.into_iter().collect();

    while let Some(node) = stack.pop() {
        result.push(node.val);
        stack.extend(node.left.as_deref());
        stack.extend(node.right.as_deref());
    }
    result.reverse();
    result
}

/// Values grouped by depth, left to right within each level.
pub fn level_order(root: Option<&TreeNode>) -> Vec<Vec<i32>> {
    let mut levels = Vec::new();
    let mut queue: VecDeque<&TreeNode> = root.into_iter().collect();

    while !queue.is_empty() {
        let level_size = queue.len();
        let mut level = Vec::with_capacity(level_size);
        for _ in 0..level_size {
            let Some(node) = queue.pop_front() else { break };
            level.push(node.val);
            queue.extend(node.left.as_deref());
            queue.extend(node.right.as_deref());
        }
        levels.push(level);
    }
    levels
}

/// Recursive pre-order.
pub fn pre_order_recursive(root: Option<&TreeNode>) -> Vec<i32> {
    fn walk(node: Option<&TreeNode>, out: &mut Vec<i32>) {
        if let Some(node) = node {
            out.push(node.val);
            walk(node.left.as_deref(), out);
            walk(node.right.as_deref(), out);
        }
    }
    let mut out = Vec::new();
    walk(root, &mut out);
    out
}

/// Recursive in-order.
pub fn in_order_recursive(root: Option<&TreeNode>) -> Vec<i32> {
    fn walk(node: Option<&TreeNode>, out: &mut Vec<i32>) {
        if let Some(node) = node {
            walk(node.left.as_deref(), out);
            out.push(node.val);
            walk(node.right.as_deref(), out);
        }
    }
    let mut out = Vec::new();
    walk(root, &mut out);
    out
}

/// Recursive post-order.
pub fn post_order_recursive(root: Option<&TreeNode>) -> Vec<i32> {
    fn walk(node: Option<&TreeNode>, out: &mut Vec<i32>) {
        if let Some(node) = node {
            walk(node.left.as_deref(), out);
            walk(node.right.as_deref(), out);
            out.push(node.val);
        }
    }
    let mut out = Vec::new();
    walk(root, &mut out);
    out
}

/// Which traversal order to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeOrder {
    PreOrder,
    InOrder,
    PostOrder,
    LevelOrder,
}

impl TreeOrder {
    /// Every order, in the order the CLI prints them.
    pub const ALL: [TreeOrder; 4] = [
        TreeOrder::PreOrder,
        TreeOrder::InOrder,
        TreeOrder::PostOrder,
        TreeOrder::LevelOrder,
    ];

    /// Short name used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Self::PreOrder => "pre",
            Self::InOrder => "in",
            Self::PostOrder => "post",
            Self::LevelOrder => "level",
        }
    }

    /// Parse an order from its short or long name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "pre" | "preorder" | "pre-order" => Some(Self::PreOrder),
            "in" | "inorder" | "in-order" => Some(Self::InOrder),
            "post" | "postorder" | "post-order" => Some(Self::PostOrder),
            "level" | "levelorder" | "level-order" | "bfs" => Some(Self::LevelOrder),
            _ => None,
        }
    }
}

impl std::fmt::Display for TreeOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// All four traversals of one tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeWalk {
    pub pre_order: Vec<i32>,
    pub in_order: Vec<i32>,
    pub post_order: Vec<i32>,
    pub level_order: Vec<Vec<i32>>,
}

/// Run every traversal over `root`.
pub fn walk_all(root: Option<&TreeNode>) -> TreeWalk {
    TreeWalk {
        pre_order: pre_order(root),
        in_order: in_order(root),
        post_order: post_order(root),
        level_order: level_order(root),
    }
}

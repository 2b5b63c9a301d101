//! Binary trees and their depth-first and level-order walks.

pub mod node;
pub mod traversal;

pub use node::TreeNode;
pub use traversal::{
    in_order, in_order_recursive, level_order, post_order, post_order_recursive, pre_order,
    pre_order_recursive, walk_all, TreeOrder, TreeWalk,
};

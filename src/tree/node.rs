//! Binary tree node with single-owner children.

use std::collections::VecDeque;
use std::fmt;

use crate::types::{WalkError, WalkResult};

/// A node in a binary tree of `i32` values.
///
/// Children are boxed and owned by exactly one parent, so the structure is a
/// tree by construction: no sharing, no cycles.
pub struct TreeNode {
    pub val: i32,
    pub left: Option<Box<TreeNode>>,
    pub right: Option<Box<TreeNode>>,
}

impl TreeNode {
    /// A leaf holding `val`.
    pub fn new(val: i32) -> Self {
        Self {
            val,
            left: None,
            right: None,
        }
    }

    /// Attach a left child, replacing any existing one.
    pub fn with_left(mut self, left: TreeNode) -> Self {
        self.left = Some(Box::new(left));
        self
    }

    /// Attach a right child, replacing any existing one.
    pub fn with_right(mut self, right: TreeNode) -> Self {
        self.right = Some(Box::new(right));
        self
    }

    /// Build a tree from its level-order listing, `None` marking a missing
    /// child (`[4, 2, 7, None, 3]` puts 3 to the right of 2).
    ///
    /// Returns `Ok(None)` when the listing holds no values. A value with no
    /// parent slot left to hang from (such as `5` in `[1, None, None, 5]`) is
    /// an [`WalkError::InvalidTree`].
    pub fn from_level_order(values: &[Option<i32>]) -> WalkResult<Option<Box<TreeNode>>> {
        if !matches!(values.first(), Some(Some(_))) {
            return match values.iter().position(Option::is_some) {
                Some(i) => Err(unplaced(values, i)),
                None => Ok(None),
            };
        }

        // children[i] = (left, right) positions for the node at position i.
        let mut children: Vec<(Option<usize>, Option<usize>)> = vec![(None, None); values.len()];
        let mut parents: VecDeque<usize> = VecDeque::from([0]);
        let mut next = 1;

        while let Some(parent) = parents.pop_front() {
            for side in 0..2 {
                if next >= values.len() {
                    break;
                }
                if values[next].is_some() {
                    if side == 0 {
                        children[parent].0 = Some(next);
                    } else {
                        children[parent].1 = Some(next);
                    }
                    parents.push_back(next);
                }
                next += 1;
            }
        }

        if let Some(offset) = values[next..].iter().position(Option::is_some) {
            return Err(unplaced(values, next + offset));
        }

        // Children always sit after their parent, so assembling back to front
        // finds every subtree already built.
        let mut built: Vec<Option<Box<TreeNode>>> = Vec::with_capacity(values.len());
        built.resize_with(values.len(), || None);
        for i in (0..values.len()).rev() {
            let Some(val) = values[i] else { continue };
            let (l, r) = children[i];
            let left = l.and_then(|c| built[c].take());
            let right = r.and_then(|c| built[c].take());
            built[i] = Some(Box::new(TreeNode { val, left, right }));
        }
        Ok(built[0].take())
    }

    /// Level-order listing of this subtree, the inverse of
    /// [`from_level_order`](Self::from_level_order). Trailing `None`s are
    /// trimmed.
    pub fn to_level_order(&self) -> Vec<Option<i32>> {
        let mut listing = Vec::new();
        let mut queue: VecDeque<Option<&TreeNode>> = VecDeque::from([Some(self)]);
        while let Some(slot) = queue.pop_front() {
            match slot {
                Some(node) => {
                    listing.push(Some(node.val));
                    queue.push_back(node.left.as_deref());
                    queue.push_back(node.right.as_deref());
                }
                None => listing.push(None),
            }
        }
        while listing.last() == Some(&None) {
            listing.pop();
        }
        listing
    }

    /// Number of nodes in this subtree.
    pub fn size(&self) -> usize {
        let mut count = 0;
        let mut stack: Vec<&TreeNode> = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.left.as_deref());
            stack.extend(node.right.as_deref());
        }
        count
    }

    /// Number of levels in this subtree (a leaf has height 1).
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut level: Vec<&TreeNode> = vec![self];
        while !level.is_empty() {
            height += 1;
            level = level
                .iter()
                .flat_map(|n| n.left.as_deref().into_iter().chain(n.right.as_deref()))
                .collect();
        }
        height
    }
}

fn unplaced(values: &[Option<i32>], position: usize) -> WalkError {
    WalkError::InvalidTree(format!(
        "value {} at position {} has no parent slot",
        values[position].unwrap_or_default(),
        position
    ))
}

// Clone, equality, Debug and Drop all walk with a heap stack so list-shaped
// trees of any depth are safe.

impl Clone for TreeNode {
    fn clone(&self) -> Self {
        // Pre-order flattening: every child sits after its parent, so the
        // copy is assembled back to front like `from_level_order`.
        let mut flat: Vec<(i32, Option<usize>, Option<usize>)> = Vec::new();
        let mut stack: Vec<(&TreeNode, Option<(usize, bool)>)> = vec![(self, None)];
        while let Some((node, parent)) = stack.pop() {
            let index = flat.len();
            flat.push((node.val, None, None));
            match parent {
                Some((p, true)) => flat[p].1 = Some(index),
                Some((p, false)) => flat[p].2 = Some(index),
                None => {}
            }
            if let Some(right) = node.right.as_deref() {
                stack.push((right, Some((index, false))));
            }
            if let Some(left) = node.left.as_deref() {
                stack.push((left, Some((index, true))));
            }
        }

        let mut built: Vec<Option<Box<TreeNode>>> = Vec::with_capacity(flat.len());
        built.resize_with(flat.len(), || None);
        for i in (1..flat.len()).rev() {
            let (val, l, r) = flat[i];
            let left = l.and_then(|c| built[c].take());
            let right = r.and_then(|c| built[c].take());
            built[i] = Some(Box::new(TreeNode { val, left, right }));
        }
        let (val, l, r) = flat[0];
        TreeNode {
            val,
            left: l.and_then(|c| built[c].take()),
            right: r.and_then(|c| built[c].take()),
        }
    }
}

impl PartialEq for TreeNode {
    fn eq(&self, other: &Self) -> bool {
        let mut stack: Vec<(&TreeNode, &TreeNode)> = vec![(self, other)];
        while let Some((a, b)) = stack.pop() {
            if a.val != b.val {
                return false;
            }
            for (x, y) in [(&a.left, &b.left), (&a.right, &b.right)] {
                match (x.as_deref(), y.as_deref()) {
                    (Some(x), Some(y)) => stack.push((x, y)),
                    (None, None) => {}
                    _ => return false,
                }
            }
        }
        true
    }
}

impl Eq for TreeNode {}

/// Prints the level-order listing, e.g. `TreeNode([1, None, 2])`.
impl fmt::Debug for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TreeNode").field(&self.to_level_order()).finish()
    }
}

// The default drop recurses once per level; unlink children onto a heap stack
// so degenerate (list-shaped) trees drop without overflowing.
impl Drop for TreeNode {
    fn drop(&mut self) {
        let mut stack: Vec<Box<TreeNode>> = Vec::new();
        stack.extend(self.left.take());
        stack.extend(self.right.take());
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

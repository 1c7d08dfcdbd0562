//! Whole-tree checks outside the single pass
//!
//! Each check relates a node to an entire subtree (heights, value bounds,
//! mirrored positions), so none of them fits the breadth-first accumulator.
//! All three run on explicit stacks.

use std::collections::HashMap;

use crate::node::NodeRef;
use crate::traversal;

/// Height-balanced: at every node the subtree heights differ by at most one
///
/// Post-order: each subtree reports its height, or the unbalanced sentinel
/// (`None`) which fails the whole tree immediately.
pub fn is_balanced<'a, R: NodeRef<'a>>(root: R) -> bool {
    // Heights counted in nodes, so an absent subtree is 0
    let mut heights: HashMap<usize, usize> = HashMap::new();
    let height_of = |heights: &HashMap<usize, usize>, node: Option<R>| {
        node.map_or(0, |n| heights.get(&n.identity()).copied().unwrap_or(0))
    };

    for node in traversal::postorder(root) {
        match subtree_height(height_of(&heights, node.left()), height_of(&heights, node.right())) {
            Some(height) => {
                heights.insert(node.identity(), height);
            }
            None => return false,
        }
    }

    true
}

/// Height of a node from its children's heights, `None` when unbalanced
#[inline]
fn subtree_height(left: usize, right: usize) -> Option<usize> {
    if left.abs_diff(right) > 1 {
        None
    } else {
        Some(left.max(right) + 1)
    }
}

/// Binary search tree with strict ordering
///
/// Every node must lie inside the open interval inherited from its
/// ancestors, starting from (-inf, +inf). Duplicates therefore fail.
pub fn is_bst<'a, R: NodeRef<'a>>(root: R) -> bool {
    // (node, exclusive lower bound, exclusive upper bound); None = unbounded
    let mut stack: Vec<(R, Option<&'a R::Value>, Option<&'a R::Value>)> = vec![(root, None, None)];

    while let Some((node, lower, upper)) = stack.pop() {
        let value = node.value();
        let above_lower = lower.map_or(true, |bound| bound < value);
        let below_upper = upper.map_or(true, |bound| value < bound);
        if !(above_lower && below_upper) {
            return false;
        }
        if let Some(left) = node.left() {
            stack.push((left, lower, Some(value)));
        }
        if let Some(right) = node.right() {
            stack.push((right, Some(value), upper));
        }
    }

    true
}

/// Left subtree is the mirror image of the right subtree
pub fn is_symmetric<'a, R: NodeRef<'a>>(root: R) -> bool {
    let mut stack = vec![(root.left(), root.right())];

    while let Some(pair) = stack.pop() {
        match pair {
            (None, None) => {}
            (Some(a), Some(b)) => {
                if a.value() != b.value() {
                    return false;
                }
                stack.push((a.left(), b.right()));
                stack.push((a.right(), b.left()));
            }
            _ => return false,
        }
    }

    true
}

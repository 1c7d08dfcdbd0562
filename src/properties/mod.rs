//! Structural property inspection
//!
//! Key idea: one breadth-first pass, level by level, feeding a single set of
//! running accumulators. Height, size, leaf statistics, value range and the
//! complete/strict/heap predicates all fall out of that one walk.
//!
//! Completeness needs the single pass: once any node is seen with a missing
//! child, no later node in left-to-right, level-by-level order may have a
//! child. The flag is never reset between levels.
//!
//! Balance, BST ordering and symmetry are whole-subtree relations and are
//! checked separately.

mod checks;

pub use checks::{is_balanced, is_bst, is_symmetric};

use tracing::trace;

use crate::node::NodeRef;

/// Snapshot of the single-pass inspection
///
/// Computed fresh on every call; nodes carry no cached properties.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NodeProperties<T> {
    /// Edges on the longest root-to-leaf path
    pub height: usize,
    /// Total number of nodes
    pub size: usize,
    /// Number of childless nodes
    pub leaf_count: usize,
    /// Smallest value
    pub min_node_value: T,
    /// Largest value
    pub max_node_value: T,
    /// Depth of the first leaf met in level-order
    pub min_leaf_depth: usize,
    /// Depth of the deepest level (equals `height`)
    pub max_leaf_depth: usize,
    /// Complete and no child greater than its parent
    pub is_max_heap: bool,
    /// Complete and no child smaller than its parent
    pub is_min_heap: bool,
    /// `leaf_count == 2^height`
    pub is_perfect: bool,
    /// Every node has zero or two children
    pub is_strict: bool,
    /// Levels filled left to right with no gaps before the last node
    pub is_complete: bool,
}

/// Inspection result together with the separate whole-tree checks
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TreeProperties<T> {
    /// Single-pass inspection
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub structure: NodeProperties<T>,
    /// Height-balanced at every node
    pub is_balanced: bool,
    /// Strict binary search ordering
    pub is_bst: bool,
    /// Mirror-symmetric about the root
    pub is_symmetric: bool,
}

impl<T: Clone> TreeProperties<T> {
    /// Run the inspection and all three whole-tree checks
    pub fn of<'a, R>(root: R) -> Self
    where
        R: NodeRef<'a, Value = T>,
        T: 'a,
    {
        Self {
            structure: inspect(root),
            is_balanced: is_balanced(root),
            is_bst: is_bst(root),
            is_symmetric: is_symmetric(root),
        }
    }
}

/// Running aggregates of the breadth-first pass
struct Accumulator<'a, T> {
    size: usize,
    leaf_count: usize,
    min_value: &'a T,
    max_value: &'a T,
    depth: usize,
    min_leaf_depth: Option<usize>,
    is_strict: bool,
    is_complete: bool,
    is_descending: bool,
    is_ascending: bool,
    non_full_node_seen: bool,
}

impl<'a, T: PartialOrd + Clone> Accumulator<'a, T> {
    fn new(root_value: &'a T) -> Self {
        Self {
            size: 0,
            leaf_count: 0,
            min_value: root_value,
            max_value: root_value,
            depth: 0,
            min_leaf_depth: None,
            is_strict: true,
            is_complete: true,
            is_descending: true,
            is_ascending: true,
            non_full_node_seen: false,
        }
    }

    /// Fold one node in and queue its children for the next level
    fn visit<R: NodeRef<'a, Value = T>>(&mut self, node: R, next: &mut Vec<R>) {
        let value = node.value();
        self.size += 1;
        if value < self.min_value {
            self.min_value = value;
        }
        if value > self.max_value {
            self.max_value = value;
        }

        if node.is_leaf() {
            if self.min_leaf_depth.is_none() {
                self.min_leaf_depth = Some(self.depth);
            }
            self.leaf_count += 1;
        }

        for child in [node.left(), node.right()] {
            match child {
                Some(child) => {
                    let child_value = child.value();
                    if child_value > value {
                        self.is_descending = false;
                    } else if child_value < value {
                        self.is_ascending = false;
                    }
                    if self.non_full_node_seen {
                        self.is_complete = false;
                    }
                    next.push(child);
                }
                None => self.non_full_node_seen = true,
            }
        }

        self.is_strict &= node.left().is_some() == node.right().is_some();
    }

    fn finish(self) -> NodeProperties<T> {
        let height = self.depth;
        let is_perfect = u32::try_from(height)
            .ok()
            .and_then(|h| 1usize.checked_shl(h))
            .map_or(false, |full| full == self.leaf_count);

        NodeProperties {
            height,
            size: self.size,
            leaf_count: self.leaf_count,
            min_node_value: self.min_value.clone(),
            max_node_value: self.max_value.clone(),
            min_leaf_depth: self.min_leaf_depth.unwrap_or(0),
            max_leaf_depth: height,
            is_max_heap: self.is_complete && self.is_descending,
            is_min_heap: self.is_complete && self.is_ascending,
            is_perfect,
            is_strict: self.is_strict,
            is_complete: self.is_complete,
        }
    }
}

/// Inspect the tree rooted at `root` in one breadth-first pass
///
/// Assumes an acyclic tree; validate untrusted arena trees first.
pub fn inspect<'a, R>(root: R) -> NodeProperties<R::Value>
where
    R: NodeRef<'a>,
{
    let mut acc = Accumulator::new(root.value());
    let mut current = vec![root];

    loop {
        let mut next = Vec::new();
        for &node in &current {
            acc.visit(node, &mut next);
        }
        if next.is_empty() {
            break;
        }
        acc.depth += 1;
        current = next;
    }

    trace!(size = acc.size, height = acc.depth, "inspected tree");
    acc.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build;

    fn props(values: &[Option<i64>]) -> NodeProperties<i64> {
        let root = build(values).unwrap().unwrap();
        inspect(&root)
    }

    #[test]
    fn test_single_node() {
        let p = props(&[Some(1)]);
        assert_eq!(p.height, 0);
        assert_eq!(p.size, 1);
        assert_eq!(p.leaf_count, 1);
        assert_eq!(p.min_leaf_depth, 0);
        assert_eq!(p.max_leaf_depth, 0);
        assert!(p.is_perfect);
        assert!(p.is_strict);
        assert!(p.is_complete);
        assert!(p.is_max_heap);
        assert!(p.is_min_heap);
    }

    #[test]
    fn test_gap_before_child_breaks_completeness() {
        let p = props(&[Some(1), Some(2), Some(3), None, Some(5)]);
        assert_eq!(p.height, 2);
        assert_eq!(p.leaf_count, 2);
        assert_eq!(p.min_leaf_depth, 1);
        assert_eq!(p.max_leaf_depth, 2);
        assert!(!p.is_complete);
        assert!(!p.is_strict);
        assert!(!p.is_perfect);
    }

    #[test]
    fn test_completeness_flag_spans_levels() {
        // Children are allowed only before the first missing child slot
        assert!(props(&[Some(1), Some(2), Some(3), Some(4)]).is_complete);
        assert!(!props(&[Some(1), Some(2), Some(3), Some(4), None, Some(6)]).is_complete);
        // The gap at 2.right is seen before the level-2 child 4.left
        assert!(!props(&[Some(1), Some(2), Some(3), Some(4), None, None, None, Some(8)]).is_complete);
    }

    #[test]
    fn test_heap_predicates() {
        let max = props(&[Some(3), Some(1), Some(2)]);
        assert!(max.is_max_heap);
        assert!(!max.is_min_heap);

        let min = props(&[Some(1), Some(2), Some(3)]);
        assert!(min.is_min_heap);
        assert!(!min.is_max_heap);

        // Equal parent and child values satisfy both orderings
        let flat = props(&[Some(5), Some(5), Some(5)]);
        assert!(flat.is_max_heap && flat.is_min_heap);
    }

    #[test]
    fn test_value_range() {
        let p = props(&[Some(4), Some(9), Some(-2), None, Some(7)]);
        assert_eq!(p.min_node_value, -2);
        assert_eq!(p.max_node_value, 9);
    }

    #[test]
    fn test_perfect_tree() {
        let p = props(&(1..=7).map(Some).collect::<Vec<_>>());
        assert_eq!(p.height, 2);
        assert_eq!(p.leaf_count, 4);
        assert!(p.is_perfect);
        assert!(p.is_strict);
        assert!(p.is_complete);
    }
}

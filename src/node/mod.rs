//! Owned binary tree node
//!
//! A node exclusively owns its two optional subtrees. There are no parent
//! pointers: parents are recomputed on demand from level-order index
//! arithmetic or an identity search from the root, so ownership is always a
//! strict tree.
//!
//! Values are validated on every write (`new`, `set_value`); children can
//! only ever be `Node<T>`, so child type checks happen at compile time.

mod handle;
mod index;
mod value;

pub use handle::{NodeRef, Side};
pub use index::{left_index, level_index, node_at, parent_index, right_index};
pub use value::NodeValue;

use std::collections::VecDeque;
use std::fmt;

use crate::layout::{self, PrettyPrintOptions, SvgOptions};
use crate::properties::{self, NodeProperties, TreeProperties};
use crate::{list, traversal, validate, TreeError};

/// Binary tree node owning its subtrees
#[derive(Debug)]
pub struct Node<T> {
    value: T,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}

/// Flattened node used to assemble trees bottom-up
///
/// Child ids must be greater than the id of the node itself, which holds
/// for any breadth-first numbering.
#[derive(Debug)]
pub(crate) struct NodeParts<T> {
    pub value: T,
    pub left: Option<usize>,
    pub right: Option<usize>,
}

impl<T: NodeValue> Node<T> {
    /// Create a childless node, rejecting invalid values
    pub fn new(value: T) -> Result<Self, TreeError> {
        check_value(&value)?;
        Ok(Self::leaf(value))
    }

    /// Replace the value; the node is unchanged on failure
    pub fn set_value(&mut self, value: T) -> Result<T, TreeError> {
        check_value(&value)?;
        Ok(std::mem::replace(&mut self.value, value))
    }

    /// Attach `child` as left subtree (builder style)
    pub fn with_left(mut self, child: Node<T>) -> Self {
        self.set_left(Some(child));
        self
    }

    /// Attach `child` as right subtree (builder style)
    pub fn with_right(mut self, child: Node<T>) -> Self {
        self.set_right(Some(child));
        self
    }

    /// Single breadth-first inspection of the whole tree
    pub fn inspect(&self) -> NodeProperties<T> {
        properties::inspect(self)
    }

    /// Inspection plus the balanced, BST and symmetry checks
    pub fn properties(&self) -> TreeProperties<T> {
        properties::TreeProperties::of(self)
    }

    /// Edges on the longest root-to-leaf path (0 for a lone root)
    pub fn height(&self) -> usize {
        self.inspect().height
    }

    /// Number of nodes without children
    pub fn leaf_count(&self) -> usize {
        self.inspect().leaf_count
    }

    /// Smallest value in the tree
    pub fn min_node_value(&self) -> T {
        self.inspect().min_node_value
    }

    /// Largest value in the tree
    pub fn max_node_value(&self) -> T {
        self.inspect().max_node_value
    }

    /// Depth of the shallowest leaf
    pub fn min_leaf_depth(&self) -> usize {
        self.inspect().min_leaf_depth
    }

    /// Depth of the deepest leaf
    pub fn max_leaf_depth(&self) -> usize {
        self.inspect().max_leaf_depth
    }

    /// Every level filled except possibly a left-justified last one
    pub fn is_complete(&self) -> bool {
        self.inspect().is_complete
    }

    /// Every internal node has two children
    pub fn is_strict(&self) -> bool {
        self.inspect().is_strict
    }

    /// All levels completely filled
    pub fn is_perfect(&self) -> bool {
        self.inspect().is_perfect
    }

    /// Complete, and no child is greater than its parent
    pub fn is_max_heap(&self) -> bool {
        self.inspect().is_max_heap
    }

    /// Complete, and no child is smaller than its parent
    pub fn is_min_heap(&self) -> bool {
        self.inspect().is_min_heap
    }

    /// Subtree heights differ by at most one at every node
    pub fn is_balanced(&self) -> bool {
        properties::is_balanced(self)
    }

    /// Strict binary search ordering (duplicates are rejected)
    pub fn is_bst(&self) -> bool {
        properties::is_bst(self)
    }

    /// Left subtree mirrors the right subtree
    pub fn is_symmetric(&self) -> bool {
        properties::is_symmetric(self)
    }

    /// Pretty-print string (leading newline, right-trimmed lines)
    pub fn pretty(&self, options: &PrettyPrintOptions) -> String {
        layout::pretty_print(self, options)
    }

    /// SVG drawing of the tree
    pub fn svg(&self, options: &SvgOptions) -> String {
        layout::svg(self, options)
    }

    /// Graphviz DOT description of the tree
    pub fn to_dot(&self) -> String {
        layout::to_dot(self)
    }

    /// Level-order list representation, trailing gaps removed
    pub fn values(&self) -> Vec<Option<T>> {
        list::values(self)
    }

    /// Compact list representation (gaps only under present nodes)
    pub fn compact_values(&self) -> Vec<Option<T>> {
        list::compact_values(self)
    }

    /// Check for cyclic references and invalid values
    pub fn validate(&self) -> Result<(), TreeError> {
        validate::validate(self)
    }
}

impl<T> Node<T> {
    /// Build without value validation; callers guarantee validity
    pub(crate) fn leaf(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Node value
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Left subtree
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    /// Right subtree
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    /// Mutable left subtree
    pub fn left_mut(&mut self) -> Option<&mut Node<T>> {
        self.left.as_deref_mut()
    }

    /// Mutable right subtree
    pub fn right_mut(&mut self) -> Option<&mut Node<T>> {
        self.right.as_deref_mut()
    }

    /// Replace the left subtree, returning the previous one
    pub fn set_left(&mut self, child: Option<Node<T>>) -> Option<Node<T>> {
        self.set_child(Side::Left, child)
    }

    /// Replace the right subtree, returning the previous one
    pub fn set_right(&mut self, child: Option<Node<T>>) -> Option<Node<T>> {
        self.set_child(Side::Right, child)
    }

    /// Replace the subtree on `side`, returning the previous one
    pub fn set_child(&mut self, side: Side, child: Option<Node<T>>) -> Option<Node<T>> {
        std::mem::replace(self.slot_mut(side), child.map(Box::new)).map(|node| *node)
    }

    /// Node has no children
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub(crate) fn slot_mut(&mut self, side: Side) -> &mut Option<Box<Node<T>>> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Assemble a tree from breadth-first numbered parts; id 0 is the root
    pub(crate) fn assemble(parts: Vec<NodeParts<T>>) -> Option<Node<T>> {
        let mut built: Vec<Option<Node<T>>> = (0..parts.len()).map(|_| None).collect();

        for (id, part) in parts.into_iter().enumerate().rev() {
            let left = part.left.and_then(|child| built[child].take()).map(Box::new);
            let right = part.right.and_then(|child| built[child].take()).map(Box::new);
            built[id] = Some(Node {
                value: part.value,
                left,
                right,
            });
        }

        built.into_iter().next().flatten()
    }
}

impl<T: NodeValue> Node<T> {
    /// Nodes in pre-order (root, left, right)
    pub fn preorder(&self) -> Vec<&Node<T>> {
        traversal::preorder(self)
    }

    /// Nodes in in-order (left, root, right)
    pub fn inorder(&self) -> Vec<&Node<T>> {
        traversal::inorder(self)
    }

    /// Nodes in post-order (left, right, root)
    pub fn postorder(&self) -> Vec<&Node<T>> {
        traversal::postorder(self)
    }

    /// Nodes in level-order (breadth-first, left to right)
    pub fn levelorder(&self) -> Vec<&Node<T>> {
        traversal::levelorder(self)
    }

    /// Nodes grouped by depth
    pub fn levels(&self) -> Vec<Vec<&Node<T>>> {
        traversal::levels(self)
    }

    /// Childless nodes, left to right by level
    pub fn leaves(&self) -> Vec<&Node<T>> {
        traversal::leaves(self)
    }

    /// Total number of nodes
    pub fn size(&self) -> usize {
        traversal::levelorder(self).len()
    }

    /// Parent of `child` by identity, `None` for the root or a foreign node
    pub fn parent_of(&self, child: &Node<T>) -> Option<&Node<T>> {
        let target = child as *const Node<T>;
        let mut stack = vec![self];

        while let Some(node) = stack.pop() {
            let is_parent = [node.left(), node.right()]
                .into_iter()
                .flatten()
                .any(|c| std::ptr::eq(c, target));
            if is_parent {
                return Some(node);
            }
            stack.extend(node.right());
            stack.extend(node.left());
        }

        None
    }
}

fn check_value<T: NodeValue>(value: &T) -> Result<(), TreeError> {
    if value.is_valid() {
        Ok(())
    } else {
        Err(TreeError::InvalidValue(format!("{value:?}")))
    }
}

// Iterative so that dropping a deep, skewed tree cannot overflow the stack
impl<T> Drop for Node<T> {
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = Vec::new();
        stack.extend(self.left.take());
        stack.extend(self.right.take());

        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T: Clone> Clone for Node<T> {
    fn clone(&self) -> Self {
        let mut parts = Vec::new();
        let mut queue = VecDeque::from([self]);
        let mut next_id = 1;

        while let Some(node) = queue.pop_front() {
            let mut link = |present: bool| {
                present.then(|| {
                    next_id += 1;
                    next_id - 1
                })
            };
            let left = link(node.left.is_some());
            let right = link(node.right.is_some());
            queue.extend(node.left.as_deref());
            queue.extend(node.right.as_deref());

            parts.push(NodeParts {
                value: node.value.clone(),
                left,
                right,
            });
        }

        match Node::assemble(parts) {
            Some(root) => root,
            None => unreachable!("a tree always has a root"),
        }
    }
}

/// Structural equality: same shape and equal values at every position
impl<T: PartialEq> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];

        while let Some((a, b)) = stack.pop() {
            if a.value != b.value {
                return false;
            }
            for (x, y) in [(a.left(), b.left()), (a.right(), b.right())] {
                match (x, y) {
                    (Some(x), Some(y)) => stack.push((x, y)),
                    (None, None) => {}
                    _ => return false,
                }
            }
        }

        true
    }
}

impl<T: NodeValue> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pretty(&PrettyPrintOptions::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node<i64> {
        // 1 -> (2 -> (_, 4), 3)
        Node::leaf(1)
            .with_left(Node::leaf(2).with_right(Node::leaf(4)))
            .with_right(Node::leaf(3))
    }

    #[test]
    fn test_set_value_validates() {
        let mut node = Node::new(1.0f64).unwrap();
        assert!(Node::new(f64::NAN).is_err());

        let err = node.set_value(f64::NAN).unwrap_err();
        assert!(matches!(err, TreeError::InvalidValue(_)));
        assert_eq!(*node.value(), 1.0);

        assert_eq!(node.set_value(2.5).unwrap(), 1.0);
        assert_eq!(*node.value(), 2.5);
    }

    #[test]
    fn test_set_child_returns_previous_subtree() {
        let mut root = sample();
        let previous = root.set_left(Some(Node::leaf(9))).unwrap();
        assert_eq!(previous.values(), vec![Some(2), None, Some(4)]);
        assert_eq!(root.values(), vec![Some(1), Some(9), Some(3)]);

        assert!(root.set_right(None).is_some());
        assert!(root.right().is_none());
    }

    #[test]
    fn test_structural_equality() {
        let a = sample();
        let mut b = sample();
        assert_eq!(a, b);

        b.right_mut().unwrap().set_left(Some(Node::leaf(5)));
        assert_ne!(a, b);

        let mut c = sample();
        c.left_mut().unwrap().set_value(7).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_clone_is_deep_and_equal() {
        let root = sample();
        let mut copy = root.clone();
        assert_eq!(root, copy);
        assert_eq!(root.values(), copy.values());

        copy.left_mut().unwrap().set_right(None);
        assert_ne!(root, copy);
        assert_eq!(root.size(), 4);
    }

    #[test]
    fn test_parent_of() {
        let root = sample();
        let two = root.left().unwrap();
        let four = two.right().unwrap();
        let three = root.right().unwrap();

        assert!(std::ptr::eq(root.parent_of(four).unwrap(), two));
        assert!(std::ptr::eq(root.parent_of(two).unwrap(), &root));
        assert!(std::ptr::eq(root.parent_of(three).unwrap(), &root));
        assert!(root.parent_of(&root).is_none());

        let stranger = Node::leaf(4);
        assert!(root.parent_of(&stranger).is_none());
    }

    #[test]
    fn test_deep_tree_drop_and_clone() {
        // Skewed chain far deeper than the default thread stack tolerates
        let mut root = Node::leaf(0i64);
        for value in 1..200_000 {
            let previous = std::mem::replace(&mut root, Node::leaf(value));
            root.set_left(Some(previous));
        }
        let copy = root.clone();
        assert!(copy == root);
        assert_eq!(copy.size(), 200_000);
    }
}

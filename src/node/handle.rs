//! Read-only node handles
//!
//! The analyzer, layout engine, traversals and validator only need to read
//! a value and follow two child links. `NodeRef` captures exactly that, so
//! the same algorithms run over owned [`Node`] trees and over
//! [`NodeArena`](crate::NodeArena) slots.

use super::{Node, NodeValue};

/// Copyable handle to a node that can be read for the lifetime `'a`
pub trait NodeRef<'a>: Copy {
    /// Stored value type
    type Value: NodeValue + 'a;

    /// Value held by the node
    fn value(self) -> &'a Self::Value;

    /// Left child, if present
    fn left(self) -> Option<Self>;

    /// Right child, if present
    fn right(self) -> Option<Self>;

    /// Identity of the node (not its value); equal only for the same node
    fn identity(self) -> usize;

    /// Child on the given side
    #[inline]
    fn child(self, side: Side) -> Option<Self> {
        match side {
            Side::Left => self.left(),
            Side::Right => self.right(),
        }
    }

    /// Node without children
    #[inline]
    fn is_leaf(self) -> bool {
        self.left().is_none() && self.right().is_none()
    }
}

/// Which child link of a parent a slot occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Left child (odd level-order index)
    Left,
    /// Right child (even, non-zero level-order index)
    Right,
}

impl Side {
    /// Side occupied by the non-root level-order index `index`
    #[inline]
    pub fn of_index(index: usize) -> Self {
        if index % 2 == 1 {
            Side::Left
        } else {
            Side::Right
        }
    }
}

impl<'a, T: NodeValue + 'a> NodeRef<'a> for &'a Node<T> {
    type Value = T;

    #[inline]
    fn value(self) -> &'a T {
        &self.value
    }

    #[inline]
    fn left(self) -> Option<Self> {
        self.left.as_deref()
    }

    #[inline]
    fn right(self) -> Option<Self> {
        self.right.as_deref()
    }

    #[inline]
    fn identity(self) -> usize {
        self as *const Node<T> as usize
    }
}

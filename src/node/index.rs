//! Level-order index addressing
//!
//! Slot `i` (root = 0) has parent `(i - 1) / 2`, left child `2i + 1` and
//! right child `2i + 2`. Missing nodes still own their slots, so a slot is
//! reachable iff every ancestor slot on its path is occupied.
//!
//! The path from the root to slot `i` is recovered from the index alone by
//! walking parent indices upward, which costs O(log i) and never expands
//! the empty slots a breadth-first scan would have to enumerate.

use tracing::debug;

use super::{Node, NodeRef, NodeValue, Side};
use crate::TreeError;

/// Convert a raw signed index into a level-order slot
pub fn level_index(raw: i64) -> Result<usize, TreeError> {
    usize::try_from(raw).map_err(|_| TreeError::IndexOutOfRange(raw as i128))
}

/// Parent slot, `None` for the root
#[inline]
pub fn parent_index(index: usize) -> Option<usize> {
    index.checked_sub(1).map(|i| i / 2)
}

/// Left child slot, failing when it does not fit in `usize`
#[inline]
pub fn left_index(index: usize) -> Result<usize, TreeError> {
    index
        .checked_mul(2)
        .and_then(|i| i.checked_add(1))
        .ok_or(TreeError::IndexOutOfRange(index as i128 * 2 + 1))
}

/// Right child slot, failing when it does not fit in `usize`
#[inline]
pub fn right_index(index: usize) -> Result<usize, TreeError> {
    index
        .checked_mul(2)
        .and_then(|i| i.checked_add(2))
        .ok_or(TreeError::IndexOutOfRange(index as i128 * 2 + 2))
}

/// Sides to follow from the root to reach `index`
fn path_to(index: usize) -> Vec<Side> {
    let mut path = Vec::new();
    let mut current = index;
    while let Some(parent) = parent_index(current) {
        path.push(Side::of_index(current));
        current = parent;
    }
    path.reverse();
    path
}

/// Node at level-order slot `index` below `root`
pub fn node_at<'a, R: NodeRef<'a>>(root: R, index: usize) -> Result<R, TreeError> {
    let mut node = root;
    for side in path_to(index) {
        node = node.child(side).ok_or(TreeError::NodeNotFound { index })?;
    }
    Ok(node)
}

impl<T: NodeValue> Node<T> {
    /// Node (subtree) at level-order slot `index`
    pub fn get(&self, index: usize) -> Result<&Node<T>, TreeError> {
        node_at(self, index)
    }

    /// Mutable node (subtree) at level-order slot `index`
    pub fn get_mut(&mut self, index: usize) -> Result<&mut Node<T>, TreeError> {
        let mut node = self;
        for side in path_to(index) {
            node = node
                .slot_mut(side)
                .as_deref_mut()
                .ok_or(TreeError::NodeNotFound { index })?;
        }
        Ok(node)
    }

    /// Place `node` at slot `index`, returning the subtree it replaced
    ///
    /// The root cannot be replaced this way and the parent slot must be
    /// occupied.
    pub fn set(&mut self, index: usize, node: Node<T>) -> Result<Option<Node<T>>, TreeError> {
        let parent = parent_index(index).ok_or(TreeError::ModifyForbidden("modify"))?;
        let parent_node = self
            .get_mut(parent)
            .map_err(|_| TreeError::ParentMissing { index: parent })?;

        debug!(index, parent, "replacing subtree");
        Ok(parent_node.set_child(Side::of_index(index), Some(node)))
    }

    /// Detach and return the subtree at slot `index`
    pub fn delete(&mut self, index: usize) -> Result<Node<T>, TreeError> {
        let parent = parent_index(index).ok_or(TreeError::ModifyForbidden("delete"))?;
        let slot = self
            .get_mut(parent)
            .map_err(|_| TreeError::NothingToDelete { index })?
            .slot_mut(Side::of_index(index));

        let removed = slot.take().ok_or(TreeError::NothingToDelete { index })?;
        debug!(index, parent, "deleted subtree");
        Ok(*removed)
    }
}

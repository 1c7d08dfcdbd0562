//! Tree validation
//!
//! Breadth-first walk with a visited set keyed by node identity. A node that
//! is dequeued a second time closes a cycle (or is shared by two parents),
//! and the walk stops right there, so a rigged back-edge cannot make it
//! loop. Owned [`Node`](crate::Node) trees can never fail the identity check;
//! arena trees can.

use std::collections::{HashSet, VecDeque};

use tracing::{debug, trace};

use crate::node::{NodeRef, NodeValue};
use crate::TreeError;

/// Check the tree under `root` for repeated nodes and invalid values
///
/// Errors report the level-order index at which the problem was dequeued,
/// saturated at `usize::MAX` for nodes too deep to have a `usize` index.
pub fn validate<'a, R: NodeRef<'a>>(root: R) -> Result<(), TreeError> {
    let mut seen = HashSet::new();
    let mut queue = VecDeque::from([(root, 0usize)]);

    while let Some((node, index)) = queue.pop_front() {
        if !seen.insert(node.identity()) {
            let value = node.value().label();
            debug!(%value, index, "cyclic reference detected");
            return Err(TreeError::CyclicReference { value, index });
        }
        if !node.value().is_valid() {
            debug!(index, "invalid node value");
            return Err(TreeError::InvalidValue(format!("{:?} at index {index}", node.value())));
        }

        let left = index.saturating_mul(2).saturating_add(1);
        queue.extend(node.left().map(|child| (child, left)));
        queue.extend(node.right().map(|child| (child, left.saturating_add(1))));
    }

    trace!(nodes = seen.len(), "tree validated");
    Ok(())
}

//! Tree traversals
//!
//! All walks use explicit stacks or queues: user-built trees have no height
//! bound, so native recursion is not an option here. Results are
//! materialized `Vec`s and can be walked any number of times.
//!
//! Every function works on any [`NodeRef`], so the same code walks owned
//! trees and arena trees. Arena trees must be validated first; a cyclic
//! arena never terminates.

use crate::node::NodeRef;

/// Root, then left subtree, then right subtree
pub fn preorder<'a, R: NodeRef<'a>>(root: R) -> Vec<R> {
    let mut result = Vec::new();
    let mut stack = vec![root];

    while let Some(node) = stack.pop() {
        result.push(node);
        // Right first so that left is popped first
        stack.extend(node.right());
        stack.extend(node.left());
    }

    result
}

/// Left subtree, then root, then right subtree
pub fn inorder<'a, R: NodeRef<'a>>(root: R) -> Vec<R> {
    let mut result = Vec::new();
    // Ancestors whose right subtree is still pending
    let mut stack = Vec::new();
    let mut current = Some(root);

    loop {
        while let Some(node) = current {
            stack.push(node);
            current = node.left();
        }
        match stack.pop() {
            Some(node) => {
                result.push(node);
                current = node.right();
            }
            None => break,
        }
    }

    result
}

/// Left subtree, then right subtree, then root
///
/// Built as root-right-left pre-order and reversed.
pub fn postorder<'a, R: NodeRef<'a>>(root: R) -> Vec<R> {
    let mut result = Vec::new();
    let mut stack = vec![root];

    while let Some(node) = stack.pop() {
        result.push(node);
        stack.extend(node.left());
        stack.extend(node.right());
    }

    result.reverse();
    result
}

/// Nodes grouped by depth, each level left to right
pub fn levels<'a, R: NodeRef<'a>>(root: R) -> Vec<Vec<R>> {
    let mut levels = Vec::new();
    let mut current = vec![root];

    while !current.is_empty() {
        let next: Vec<R> = current
            .iter()
            .flat_map(|node| node.left().into_iter().chain(node.right()))
            .collect();
        levels.push(current);
        current = next;
    }

    levels
}

/// Breadth-first order (flattened [`levels`])
pub fn levelorder<'a, R: NodeRef<'a>>(root: R) -> Vec<R> {
    levels(root).into_iter().flatten().collect()
}

/// Childless nodes in level-order
pub fn leaves<'a, R: NodeRef<'a>>(root: R) -> Vec<R> {
    levelorder(root)
        .into_iter()
        .filter(|node| node.is_leaf())
        .collect()
}

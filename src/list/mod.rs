//! List representations
//!
//! Two flat encodings of a tree, both breadth-first:
//!
//! - **Level-order** (`build` / `values`): slot `i` has children at `2i + 1`
//!   and `2i + 2`. Gaps below a missing node still occupy slots, so the list
//!   length grows with `2^height` for sparse trees.
//! - **Compact** (`build_compact` / `compact_values`): only present nodes own
//!   child slots, the form used by most online judges.
//!
//! Trailing gaps are stripped on export in both encodings.

use std::collections::VecDeque;

use tracing::debug;

use crate::node::{left_index, parent_index, right_index, Node, NodeParts, NodeRef, NodeValue, Side};
use crate::TreeError;

/// Build a tree from its level-order list
///
/// An empty list (or a list of gaps) yields `Ok(None)`. Fails with
/// `ParentMissing` when a value sits below an empty slot.
pub fn build<T: NodeValue>(values: &[Option<T>]) -> Result<Option<Node<T>>, TreeError> {
    let mut ids = vec![None; values.len()];
    let mut next_id = 0;

    for (index, value) in values.iter().enumerate() {
        let Some(value) = value else { continue };
        check_entry(value, index)?;
        if let Some(parent) = parent_index(index) {
            if values[parent].is_none() {
                return Err(TreeError::ParentMissing { index: parent });
            }
        }
        ids[index] = Some(next_id);
        next_id += 1;
    }

    let child_id = |slot: Result<usize, TreeError>| slot.ok().and_then(|i| ids.get(i).copied().flatten());
    let parts: Vec<NodeParts<T>> = values
        .iter()
        .enumerate()
        .filter_map(|(index, value)| {
            value.as_ref().map(|value| NodeParts {
                value: value.clone(),
                left: child_id(left_index(index)),
                right: child_id(right_index(index)),
            })
        })
        .collect();

    debug!(slots = values.len(), nodes = parts.len(), "built tree from level-order list");
    Ok(Node::assemble(parts))
}

/// Level-order list of the tree under `root`, trailing gaps removed
pub fn values<'a, R: NodeRef<'a>>(root: R) -> Vec<Option<R::Value>> {
    let mut out = Vec::new();
    let mut current = vec![Some(root)];

    loop {
        let mut has_more = false;
        let mut next = Vec::with_capacity(current.len() * 2);
        for slot in &current {
            match slot {
                Some(node) => {
                    out.push(Some(node.value().clone()));
                    has_more |= !node.is_leaf();
                    next.push(node.left());
                    next.push(node.right());
                }
                None => {
                    out.push(None);
                    next.extend([None, None]);
                }
            }
        }
        if !has_more {
            break;
        }
        current = next;
    }

    strip_trailing(&mut out);
    out
}

/// Build a tree from its compact list
///
/// The first entry is the root; every present node then claims the next two
/// entries as its left and right child. An empty list yields `Ok(None)`.
pub fn build_compact<T: NodeValue>(values: &[Option<T>]) -> Result<Option<Node<T>>, TreeError> {
    let Some(first) = values.first() else {
        return Ok(None);
    };
    let root = first
        .as_ref()
        .ok_or_else(|| TreeError::InvalidValue("compact list must start with the root value".into()))?;
    check_entry(root, 0)?;

    let mut parts = vec![NodeParts { value: root.clone(), left: None, right: None }];
    let mut open_slots = VecDeque::from([(0, Side::Left), (0, Side::Right)]);

    for (position, value) in values.iter().enumerate().skip(1) {
        let (parent, side) = open_slots
            .pop_front()
            .ok_or(TreeError::OrphanValue { position })?;
        let Some(value) = value else { continue };
        check_entry(value, position)?;

        let id = parts.len();
        parts.push(NodeParts { value: value.clone(), left: None, right: None });
        match side {
            Side::Left => parts[parent].left = Some(id),
            Side::Right => parts[parent].right = Some(id),
        }
        open_slots.push_back((id, Side::Left));
        open_slots.push_back((id, Side::Right));
    }

    debug!(entries = values.len(), nodes = parts.len(), "built tree from compact list");
    Ok(Node::assemble(parts))
}

/// Compact list of the tree under `root`, trailing gaps removed
pub fn compact_values<'a, R: NodeRef<'a>>(root: R) -> Vec<Option<R::Value>> {
    let mut out = vec![Some(root.value().clone())];
    let mut queue = VecDeque::from([root]);

    while let Some(node) = queue.pop_front() {
        for child in [node.left(), node.right()] {
            out.push(child.map(|c| c.value().clone()));
            queue.extend(child);
        }
    }

    strip_trailing(&mut out);
    out
}

fn strip_trailing<T>(values: &mut Vec<Option<T>>) {
    while matches!(values.last(), Some(None)) {
        values.pop();
    }
}

fn check_entry<T: NodeValue>(value: &T, position: usize) -> Result<(), TreeError> {
    if value.is_valid() {
        Ok(())
    } else {
        Err(TreeError::InvalidValue(format!("{value:?} at position {position}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_and_values() {
        let values = vec![Some(1), Some(2), Some(3), None, Some(4)];
        let root = build(&values).unwrap().unwrap();
        assert_eq!(root.values(), values);
        assert_eq!(*root.left().unwrap().right().unwrap().value(), 4);
        assert!(root.left().unwrap().left().is_none());
    }

    #[test]
    fn test_build_empty_and_gaps() {
        assert!(build::<i64>(&[]).unwrap().is_none());
        assert!(build::<i64>(&[None]).unwrap().is_none());
        // Trailing gaps are accepted on input and dropped on output
        let root = build(&[Some(1), None, Some(2), None, None]).unwrap().unwrap();
        assert_eq!(root.values(), vec![Some(1), None, Some(2)]);
    }

    #[test]
    fn test_build_parent_missing() {
        assert_eq!(
            build(&[None, Some(1)]).unwrap_err(),
            TreeError::ParentMissing { index: 0 }
        );
        assert_eq!(
            build(&[Some(1), None, Some(2), Some(3)]).unwrap_err(),
            TreeError::ParentMissing { index: 1 }
        );
    }

    #[test]
    fn test_build_rejects_nan() {
        let err = build(&[Some(1.0), Some(f64::NAN)]).unwrap_err();
        assert!(matches!(err, TreeError::InvalidValue(msg) if msg.ends_with("at position 1")));
    }

    #[test]
    fn test_values_keep_inner_gaps() {
        // Gap under the missing left child of 2 spans two slots
        let root = build(&[Some(1), Some(2), None, None, Some(3), None, None, None, None, Some(4)])
            .unwrap()
            .unwrap();
        assert_eq!(root.size(), 4);
        assert_eq!(
            root.values(),
            vec![Some(1), Some(2), None, None, Some(3), None, None, None, None, Some(4)]
        );
    }

    #[test]
    fn test_compact_round_trip() {
        let compact = vec![Some(2), Some(5), None, Some(3), None, Some(1), Some(4)];
        let root = build_compact(&compact).unwrap().unwrap();
        assert_eq!(root.compact_values(), compact);
        assert_eq!(root.height(), 3);
        assert_eq!(
            root.values(),
            vec![
                Some(2),
                Some(5),
                None,
                Some(3),
                None,
                None,
                None,
                Some(1),
                Some(4)
            ]
        );
    }

    #[test]
    fn test_compact_errors() {
        assert!(build_compact::<i64>(&[]).unwrap().is_none());
        assert!(matches!(
            build_compact::<i64>(&[None, Some(1)]),
            Err(TreeError::InvalidValue(_))
        ));
        assert_eq!(
            build_compact(&[Some(1), None, None, Some(2)]).unwrap_err(),
            TreeError::OrphanValue { position: 3 }
        );
    }
}

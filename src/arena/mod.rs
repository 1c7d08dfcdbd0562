//! Index-linked node storage
//!
//! Nodes live in one `Vec` and refer to their children by slot id. Links are
//! plain ids, so nothing stops two parents from sharing a child or a
//! descendant from pointing back at an ancestor. Run
//! [`validate`](crate::validate) (or [`NodeArena::to_tree`]) before handing
//! an arena tree to a traversal, the analyzer or a renderer.

use std::collections::VecDeque;
use std::fmt;

use tracing::debug;

use crate::node::{Node, NodeParts, NodeRef, NodeValue, Side};
use crate::{validate, TreeError};

#[derive(Debug, Clone)]
struct Slot<T> {
    value: T,
    left: Option<usize>,
    right: Option<usize>,
}

/// Arena of nodes addressed by slot id
#[derive(Debug, Clone)]
pub struct NodeArena<T> {
    slots: Vec<Slot<T>>,
}

impl<T> Default for NodeArena<T> {
    fn default() -> Self {
        Self { slots: Vec::new() }
    }
}

impl<T: NodeValue> NodeArena<T> {
    /// Empty arena
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of slots
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// No slots allocated
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Add a childless node and return its id
    ///
    /// The value is stored as is; invalid values surface in `validate`.
    pub fn insert(&mut self, value: T) -> usize {
        self.slots.push(Slot {
            value,
            left: None,
            right: None,
        });
        self.slots.len() - 1
    }

    /// Handle to the node in slot `id`
    pub fn node(&self, id: usize) -> Result<ArenaNode<'_, T>, TreeError> {
        self.check_id(id)?;
        Ok(ArenaNode { arena: self, id })
    }

    /// Link `child` as the left child of `parent`, returning the old link
    pub fn set_left(&mut self, parent: usize, child: Option<usize>) -> Result<Option<usize>, TreeError> {
        self.set_child(parent, Side::Left, child)
    }

    /// Link `child` as the right child of `parent`, returning the old link
    pub fn set_right(&mut self, parent: usize, child: Option<usize>) -> Result<Option<usize>, TreeError> {
        self.set_child(parent, Side::Right, child)
    }

    /// Link `child` on `side` of `parent`; both ids must exist
    pub fn set_child(
        &mut self,
        parent: usize,
        side: Side,
        child: Option<usize>,
    ) -> Result<Option<usize>, TreeError> {
        self.check_id(parent)?;
        if let Some(child) = child {
            self.check_id(child)?;
        }
        let slot = &mut self.slots[parent];
        let link = match side {
            Side::Left => &mut slot.left,
            Side::Right => &mut slot.right,
        };
        Ok(std::mem::replace(link, child))
    }

    /// Replace a value with validation, returning the old one
    pub fn set_value(&mut self, id: usize, value: T) -> Result<T, TreeError> {
        self.check_id(id)?;
        if !value.is_valid() {
            return Err(TreeError::InvalidValue(format!("{value:?}")));
        }
        Ok(std::mem::replace(&mut self.slots[id].value, value))
    }

    /// Copy an owned tree into a fresh arena; returns the arena and root id
    ///
    /// Ids follow level-order, so the root is always slot 0.
    pub fn from_tree(root: &Node<T>) -> (Self, usize) {
        let mut arena = Self::new();
        let root_id = arena.insert(root.value().clone());
        let mut queue = VecDeque::from([(root, root_id)]);

        while let Some((node, id)) = queue.pop_front() {
            for side in [Side::Left, Side::Right] {
                if let Some(child) = NodeRef::child(node, side) {
                    let child_id = arena.insert(child.value().clone());
                    let link = match side {
                        Side::Left => &mut arena.slots[id].left,
                        Side::Right => &mut arena.slots[id].right,
                    };
                    *link = Some(child_id);
                    queue.push_back((child, child_id));
                }
            }
        }

        debug!(nodes = arena.len(), "copied tree into arena");
        (arena, root_id)
    }

    /// Validate the tree under `root` and copy it into an owned [`Node`]
    ///
    /// Fails with `CyclicReference` for back-edges or shared children and
    /// with `InvalidValue` for values that were inserted unchecked.
    pub fn to_tree(&self, root: usize) -> Result<Node<T>, TreeError> {
        let root = self.node(root)?;
        validate(root)?;

        let mut parts = Vec::new();
        let mut queue = VecDeque::from([root]);
        let mut next_id = 1;
        while let Some(node) = queue.pop_front() {
            let mut link = |child: Option<_>| {
                child.map(|c| {
                    queue.push_back(c);
                    next_id += 1;
                    next_id - 1
                })
            };
            let left = link(node.left());
            let right = link(node.right());
            parts.push(NodeParts {
                value: node.value().clone(),
                left,
                right,
            });
        }

        debug!(nodes = parts.len(), "converted arena tree to owned tree");
        // The root part is always present, so assembly cannot come back empty
        Node::assemble(parts).ok_or(TreeError::NodeNotFound { index: 0 })
    }

    fn check_id(&self, id: usize) -> Result<(), TreeError> {
        if id < self.slots.len() {
            Ok(())
        } else {
            Err(TreeError::NodeNotFound { index: id })
        }
    }
}

/// Read-only handle to one arena slot
pub struct ArenaNode<'a, T> {
    arena: &'a NodeArena<T>,
    id: usize,
}

impl<'a, T> ArenaNode<'a, T> {
    /// Slot id of this node
    pub fn id(&self) -> usize {
        self.id
    }

    fn slot(&self) -> &'a Slot<T> {
        &self.arena.slots[self.id]
    }

    fn follow(&self, link: Option<usize>) -> Option<Self> {
        link.map(|id| ArenaNode {
            arena: self.arena,
            id,
        })
    }
}

impl<T> Clone for ArenaNode<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ArenaNode<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for ArenaNode<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArenaNode")
            .field("id", &self.id)
            .field("value", &self.slot().value)
            .finish()
    }
}

impl<'a, T: NodeValue + 'a> NodeRef<'a> for ArenaNode<'a, T> {
    type Value = T;

    fn value(self) -> &'a T {
        &self.slot().value
    }

    fn left(self) -> Option<Self> {
        self.follow(self.slot().left)
    }

    fn right(self) -> Option<Self> {
        self.follow(self.slot().right)
    }

    fn identity(self) -> usize {
        self.id
    }
}

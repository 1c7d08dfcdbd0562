//! # Binary Tree Modeling and Analysis
//!
//! Toolkit for building, inspecting and drawing binary trees. Intended for
//! teaching and experimenting with binary-tree algorithms.
//!
//! ## Core Algorithms
//!
//! 1. **Single-pass inspection**: height, size, leaf statistics and the
//!    heap/complete/strict/perfect predicates from one breadth-first walk
//! 2. **Box layout**: recursive ASCII-art rendering where each subtree is a
//!    rectangle of equal-width lines merged under its parent label
//! 3. **Index addressing**: level-order slots (`2i + 1`, `2i + 2`) for get,
//!    set and delete without stored parent pointers
//! 4. **Validation**: breadth-first cycle and value checks over any node
//!    representation, including index-linked arenas
//!
//! ## Usage Example
//!
//! ```
//! use binarytree::build;
//!
//! let root = build(&[Some(1), Some(2), Some(3), None, Some(5)])?.expect("non-empty");
//! let props = root.inspect();
//! assert_eq!(props.height, 2);
//! assert!(!props.is_complete);
//! assert!(root.is_balanced());
//! println!("{root}");
//! # Ok::<(), binarytree::TreeError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod node;       // Owned node model, values and index addressing
pub mod traversal;  // Pre/in/post/level-order walks
pub mod properties; // Single-pass structural analyzer
pub mod layout;     // Pretty print, SVG and DOT rendering
pub mod list;       // List representations
pub mod validate;   // Cycle and value validation
pub mod arena;      // Index-linked node storage
pub mod generate;   // Random trees, BSTs and heaps

// Re-exports for convenience
pub use node::{level_index, Node, NodeRef, NodeValue, Side};
pub use properties::{NodeProperties, TreeProperties};
pub use layout::{PrettyPrintOptions, SvgOptions};
pub use list::{build, build_compact};
pub use arena::{ArenaNode, NodeArena};
pub use generate::{bst, heap, tree, GeneratorConfig, MAX_HEIGHT};
pub use validate::validate;

use thiserror::Error;

/// Errors raised by tree construction, addressing and validation
///
/// Every failing operation returns before touching the tree, so a caller
/// that receives an error still holds the tree it started with.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// Value rejected by [`NodeValue::is_valid`] (e.g. NaN)
    #[error("invalid node value: {0}")]
    InvalidValue(String),

    /// Index cannot address a level-order slot
    #[error("node index {0} is out of range")]
    IndexOutOfRange(i128),

    /// Addressed slot is unreachable or empty
    #[error("node missing at index {index}")]
    NodeNotFound {
        /// Level-order index that was requested.
        index: usize,
    },

    /// Slot to delete is unreachable or already empty
    #[error("no node to delete at index {index}")]
    NothingToDelete {
        /// Level-order index that was requested.
        index: usize,
    },

    /// Parent slot of a non-empty slot is empty
    #[error("parent node missing at index {index}")]
    ParentMissing {
        /// Level-order index of the missing parent.
        index: usize,
    },

    /// Attempt to replace or remove the root through indexed access
    #[error("cannot {0} the root node")]
    ModifyForbidden(&'static str),

    /// Node reached twice during a breadth-first walk
    #[error("cyclic reference at Node({value}) (level-order index {index})")]
    CyclicReference {
        /// Label of the node that was reached again.
        value: String,
        /// Level-order index at which it was reached the second time.
        /// Saturates at `usize::MAX` for nodes more than 63 levels deep.
        index: usize,
    },

    /// Generator height outside `0..=MAX_HEIGHT`
    #[error("height must be between 0 and {max}, got {height}")]
    InvalidHeight {
        /// Requested height.
        height: usize,
        /// Largest supported height.
        max: usize,
    },

    /// Compact list entry with no free child slot left to attach to
    #[error("value at position {position} has no parent slot")]
    OrphanValue {
        /// Position of the entry in the compact list.
        position: usize,
    },
}

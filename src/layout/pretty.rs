//! ASCII box layout
//!
//! Every subtree renders into a "box": lines padded to one common width,
//! plus the column span of the subtree root's label. A parent box is the
//! parent label with branch lines on top, followed by the left and right
//! child boxes side by side separated by a gap as wide as the label (one
//! extra column per present child).
//!
//! ```text
//!   __1        label row:   left underscores, label, right underscores
//!  /   \       branch row:  '/' above the left root, '\' above the right root
//! 2     3      child boxes: left + gap + right
//!  \
//!   5
//! ```
//!
//! Boxes are combined bottom-up with an explicit stack, so the nesting depth
//! of the tree does not grow the call stack.

use std::collections::HashMap;

use super::PrettyPrintOptions;
use crate::node::{NodeRef, NodeValue};

/// Rendered subtree
#[derive(Debug, Default)]
struct LayoutBox {
    lines: Vec<String>,
    /// Width in characters shared by every line
    width: usize,
    /// First column of the root label
    root_start: usize,
    /// Last column of the root label
    root_end: usize,
}

impl LayoutBox {
    fn line(&self, row: usize) -> String {
        match self.lines.get(row) {
            Some(line) => line.clone(),
            None => " ".repeat(self.width),
        }
    }
}

/// Pretty-print string: a leading newline, then the box lines with trailing
/// whitespace removed
pub fn pretty_print<'a, R: NodeRef<'a>>(root: R, options: &PrettyPrintOptions) -> String {
    let layout = layout_tree(root, options);
    let mut out = String::from("\n");
    let body: Vec<&str> = layout.lines.iter().map(|line| line.trim_end()).collect();
    out.push_str(&body.join("\n"));
    out
}

/// `index` is `None` once the level-order index no longer fits in `usize`
fn node_label<V: NodeValue>(value: &V, index: Option<usize>, options: &PrettyPrintOptions) -> String {
    if !options.show_index {
        return value.label();
    }
    match index {
        Some(index) => format!("{}{}{}", index, options.delimiter, value.label()),
        None => format!("?{}{}", options.delimiter, value.label()),
    }
}

fn layout_tree<'a, R: NodeRef<'a>>(root: R, options: &PrettyPrintOptions) -> LayoutBox {
    let mut boxes: HashMap<usize, LayoutBox> = HashMap::new();
    // (node, level-order index, children already laid out)
    let mut stack = vec![(root, Some(0usize), false)];

    while let Some((node, index, expanded)) = stack.pop() {
        if !expanded {
            stack.push((node, index, true));
            let left_index = index.and_then(|i| i.checked_mul(2)?.checked_add(1));
            if let Some(right) = node.right() {
                stack.push((right, left_index.and_then(|i| i.checked_add(1)), false));
            }
            if let Some(left) = node.left() {
                stack.push((left, left_index, false));
            }
            continue;
        }

        let mut take = |child: Option<R>| {
            child
                .and_then(|c| boxes.remove(&c.identity()))
                .unwrap_or_default()
        };
        let left = take(node.left());
        let right = take(node.right());
        let label = node_label(node.value(), index, options);
        boxes.insert(node.identity(), combine(&label, &left, &right));
    }

    boxes.remove(&root.identity()).unwrap_or_default()
}

/// Place `label` above its two child boxes
fn combine(label: &str, left: &LayoutBox, right: &LayoutBox) -> LayoutBox {
    let label_width = label.chars().count();
    let mut gap_size = label_width;
    let mut line1 = String::new();
    let mut line2 = String::new();

    let root_start = if left.width > 0 {
        let l_root = (left.root_start + left.root_end) / 2 + 1;
        line1.push_str(&" ".repeat(l_root + 1));
        line1.push_str(&"_".repeat(left.width - l_root));
        line2.push_str(&" ".repeat(l_root));
        line2.push('/');
        line2.push_str(&" ".repeat(left.width - l_root));
        gap_size += 1;
        left.width + 1
    } else {
        0
    };

    line1.push_str(label);
    line2.push_str(&" ".repeat(label_width));

    if right.width > 0 {
        let r_root = (right.root_start + right.root_end) / 2;
        line1.push_str(&"_".repeat(r_root));
        line1.push_str(&" ".repeat(right.width - r_root + 1));
        line2.push_str(&" ".repeat(r_root));
        line2.push('\\');
        line2.push_str(&" ".repeat(right.width - r_root));
        gap_size += 1;
    }

    let gap = " ".repeat(gap_size);
    let width = line1.chars().count();
    let mut lines = vec![line1, line2];
    for row in 0..left.lines.len().max(right.lines.len()) {
        lines.push(format!("{}{}{}", left.line(row), gap, right.line(row)));
    }

    LayoutBox {
        lines,
        width,
        root_start,
        root_end: root_start + label_width - 1,
    }
}

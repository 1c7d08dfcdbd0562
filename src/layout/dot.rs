//! Graphviz DOT export
//!
//! Each node is a record `<l>|<v> value|<r>`; edges leave from the `l`/`r`
//! port of the parent and enter the `v` port of the child. Node ids are
//! breadth-first positions (`n0` is the root).

use std::collections::HashMap;

use crate::node::{NodeRef, NodeValue};
use crate::traversal;

const NODE_ATTRS: &str =
    r#"shape=record, style="filled, rounded", color=lightgray, fillcolor=lightgray, fontcolor=black"#;

/// DOT digraph describing the tree
pub fn to_dot<'a, R: NodeRef<'a>>(root: R) -> String {
    let nodes = traversal::levelorder(root);
    let ids: HashMap<usize, usize> = nodes
        .iter()
        .enumerate()
        .map(|(id, node)| (node.identity(), id))
        .collect();

    let mut out = String::from("digraph {\n");
    out.push_str(&format!("    node [{NODE_ATTRS}];\n"));

    for (id, node) in nodes.iter().enumerate() {
        out.push_str(&format!(
            "    n{id} [label=\"<l>|<v> {}|<r>\"];\n",
            escape_record(&node.value().label())
        ));
        for (port, child) in [("l", node.left()), ("r", node.right())] {
            if let Some(child_id) = child.and_then(|c| ids.get(&c.identity())) {
                out.push_str(&format!("    n{id}:{port} -> n{child_id}:v;\n"));
            }
        }
    }

    out.push_str("}\n");
    out
}

/// Escape characters with meaning inside record labels or DOT strings
fn escape_record(label: &str) -> String {
    let mut escaped = String::with_capacity(label.len());
    for ch in label.chars() {
        if matches!(ch, '"' | '\\' | '{' | '}' | '|' | '<' | '>') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{build, Node};

    #[test]
    fn test_dot_records_and_edges() {
        let root = build(&[Some(1), Some(2), Some(3), None, Some(5)]).unwrap().unwrap();
        let dot = to_dot(&root);
        assert!(dot.starts_with("digraph {\n"));
        assert!(dot.contains("    n0 [label=\"<l>|<v> 1|<r>\"];"));
        assert!(dot.contains("    n0:l -> n1:v;"));
        assert!(dot.contains("    n0:r -> n2:v;"));
        assert!(dot.contains("    n1:r -> n3:v;"));
        assert!(!dot.contains("n1:l"));
        assert_eq!(dot.matches(" -> ").count(), 3);
        assert!(dot.ends_with("}\n"));
    }

    #[test]
    fn test_record_labels_are_escaped() {
        let root = Node::new("a|b").unwrap();
        assert!(to_dot(&root).contains(r#"<v> a\|b|<r>"#));
    }

    #[test]
    fn test_single_node_document() {
        let root = Node::new(7).unwrap();
        assert_eq!(
            to_dot(&root),
            format!("digraph {{\n    node [{NODE_ATTRS}];\n    n0 [label=\"<l>|<v> 7|<r>\"];\n}}\n")
        );
    }
}

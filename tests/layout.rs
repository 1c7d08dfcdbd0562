#[path = "common/mod.rs"]
mod common;

use binarytree::{build, Node, PrettyPrintOptions, SvgOptions};
use common::{assert_snapshot, pretty_lines, tree};
use test_case::test_case;

#[test_case(&[1], &["1"]; "single node")]
#[test_case(&[1, 2], &["  1", " /", "2"]; "left child only")]
#[test_case(&[1, -1, 3], &["1", " \\", "  3"]; "right child only")]
#[test_case(&[1, 2, 3], &["  1", " / \\", "2   3"]; "two children")]
#[test_case(&[1, 2, 3, -1, 5], &["  __1", " /   \\", "2     3", " \\", "  5"]; "gap on the left")]
#[test_case(&[1, 2, 3, -1, 5, 6], &["  __1__", " /     \\", "2       3", " \\     /", "  5   6"]; "inner grandchildren")]
#[test_case(
    &[1, 2, 3, -1, 5, 6, 7],
    &["  __1__", " /     \\", "2       3", " \\     / \\", "  5   6   7"];
    "three grandchildren"
)]
#[test_case(
    &[1, 2, 3, 8, 5, 6, 7],
    &["    __1__", "   /     \\", "  2       3", " / \\     / \\", "8   5   6   7"];
    "perfect"
)]
fn pretty_print_without_index(values: &[i64], expected: &[&str]) {
    let root = tree(values);
    assert_eq!(pretty_lines(&root, &PrettyPrintOptions::default()), expected);
    // Display is the same rendering
    assert_eq!(root.to_string(), root.pretty(&PrettyPrintOptions::default()));
}

#[test_case(&[1], &["0:1"]; "single node")]
#[test_case(&[1, 2], &["   _0:1", "  /", "1:2"]; "left child only")]
#[test_case(&[1, -1, 3], &["0:1_", "    \\", "    2:3"]; "right child only")]
#[test_case(&[1, 2, 3], &["   _0:1_", "  /     \\", "1:2     2:3"]; "two children")]
#[test_case(
    &[1, 2, 3, -1, 5, 6],
    &["   _____0:1_____", "  /             \\", "1:2_           _2:3", "    \\         /", "    4:5     5:6"];
    "inner grandchildren"
)]
#[test_case(
    &[1, 2, 3, 8, 5, 6, 7],
    &[
        "       _____0:1_____",
        "      /             \\",
        "   _1:2_           _2:3_",
        "  /     \\         /     \\",
        "3:8     4:5     5:6     6:7",
    ];
    "perfect"
)]
fn pretty_print_with_index(values: &[i64], expected: &[&str]) {
    let options = PrettyPrintOptions::default()
        .with_index(true)
        .with_delimiter(":");
    assert_eq!(pretty_lines(&tree(values), &options), expected);
}

#[test]
fn pretty_print_default_delimiter() {
    let options = PrettyPrintOptions::default().with_index(true);
    assert_eq!(pretty_lines(&tree(&[1, 2]), &options), ["   _0-1", "  /", "1-2"]);
}

#[test]
fn pretty_print_float_labels() {
    let root = build(&[Some(1.0), Some(2.0), Some(3.0), None, Some(5.0)])
        .unwrap()
        .unwrap();
    assert_eq!(
        pretty_lines(&root, &PrettyPrintOptions::default()),
        ["   _____1.0_", "  /         \\", "2.0_        3.0", "    \\", "    5.0"]
    );
}

#[test]
fn pretty_print_is_repeatable() {
    let root = tree(&[5, 3, 8, 1, -1, 7, 9, 0]);
    let first = root.to_string();
    assert_eq!(first, root.to_string());
    assert!(first.lines().all(|line| line == line.trim_end()));
}

#[test]
fn pretty_print_deep_chain() {
    let mut root = Node::new(0i64).unwrap();
    for value in 1..64 {
        let previous = std::mem::replace(&mut root, Node::new(value).unwrap());
        root.set_right(Some(previous));
    }
    let lines = pretty_lines(&root, &PrettyPrintOptions::default());
    // Label row and branch row per level, the last level has no branch row
    assert_eq!(lines.len(), 64 * 2 - 1);
    assert_eq!(lines.last().map(|line| line.trim()), Some("0"));
}

#[test]
fn svg_single_node_matches_snapshot() {
    let root = Node::new(0i64).unwrap();
    assert_snapshot("svg/single_node.svg", &root.svg(&SvgOptions::default()));
}

#[test]
fn svg_multiple_nodes_matches_snapshot() {
    let root = tree(&[0, 1, 2, 3, -1, -1, 4]);
    assert_snapshot("svg/multiple_nodes.svg", &root.svg(&SvgOptions::default()));
}

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use binarytree::{build, Node, NodeValue, PrettyPrintOptions};

fn snapshot_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("snapshots")
}

pub fn assert_snapshot(name: &str, actual: &str) {
    let path = snapshot_root().join(name);
    if std::env::var("BINARYTREE_UPDATE_SNAPSHOTS").is_ok() {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create snapshot directory");
        }
        fs::write(&path, actual).expect("write snapshot");
        return;
    }

    let expected =
        fs::read_to_string(&path).unwrap_or_else(|_| panic!("snapshot {:?} not found", path));
    if normalize(&expected) != normalize(actual) {
        panic!(
            "Snapshot mismatch for {:?}. Set BINARYTREE_UPDATE_SNAPSHOTS=1 to regenerate.\nExpected:\n{}\nActual:\n{}",
            path,
            expected,
            actual
        );
    }
}

fn normalize(input: &str) -> String {
    input.replace("\r\n", "\n")
}

/// Level-order list with `None` written as `-1`, for terse test tables
pub fn level_order(values: &[i64]) -> Vec<Option<i64>> {
    values
        .iter()
        .map(|&value| (value >= 0).then_some(value))
        .collect()
}

/// Build a non-empty tree from a `-1`-for-gap level-order list
pub fn tree(values: &[i64]) -> Node<i64> {
    build(&level_order(values))
        .expect("well-formed level-order list")
        .expect("non-empty tree")
}

/// Pretty-print lines without the leading blank line
pub fn pretty_lines<T: NodeValue>(root: &Node<T>, options: &PrettyPrintOptions) -> Vec<String> {
    let text = root.pretty(options);
    assert!(text.starts_with('\n'), "pretty print must start with a newline");
    text.lines().skip(1).map(str::to_string).collect()
}

/// Replace a level-order list's gaps under missing parents so that it
/// always builds
pub fn sanitize(values: Vec<Option<i64>>) -> Vec<Option<i64>> {
    let mut values = values;
    if let Some(first) = values.first_mut() {
        if first.is_none() {
            *first = Some(0);
        }
    }
    for index in 1..values.len() {
        if values[(index - 1) / 2].is_none() {
            values[index] = None;
        }
    }
    values
}

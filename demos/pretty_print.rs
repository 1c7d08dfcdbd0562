//! Build a few trees and print them with their properties.
//!
//! Run with `cargo run --example pretty_print`.

use binarytree::{build, bst, heap, Node, NodeArena, PrettyPrintOptions, TreeError};

fn main() -> Result<(), TreeError> {
    let Some(mut root) = build(&[Some(1), Some(2), Some(3), None, Some(4)])? else {
        return Ok(());
    };
    println!("{root}");
    let indexed = PrettyPrintOptions::default()
        .with_index(true)
        .with_delimiter(":");
    println!("{}", root.pretty(&indexed));

    root.set(6, Node::new(7)?)?;
    let props = root.properties();
    println!("{root}");
    println!(
        "height={} size={} complete={} balanced={} bst={}",
        props.structure.height,
        props.structure.size,
        props.structure.is_complete,
        props.is_balanced,
        props.is_bst,
    );

    println!("{}", bst(3, false)?);
    println!("{}", heap(2, true, true)?);

    // Arena links can express a cycle; validation catches it
    let mut arena = NodeArena::new();
    let a = arena.insert(1);
    let b = arena.insert(2);
    arena.set_left(a, Some(b))?;
    arena.set_right(b, Some(a))?;
    if let Err(err) = arena.to_tree(a) {
        println!("arena rejected: {err}");
    }

    Ok(())
}

//! Build a small tree, query it, and print its quadrant layout.
//!
//! Run with `RUST_LOG=debug cargo run --example getting_started` to see
//! every subdivision as it happens.

use quadspace::prelude::*;

fn main() -> Result<()> {
    env_logger::init();

    let mut tree = QuadTree::builder()
        .bounds(Point::new(0, 0), 5, 6)
        .capacity(1)
        .build()?;

    for x in 0..5 {
        for y in 0..6 {
            tree.insert(Point::new(x, y));
        }
    }
    println!("Indexed {} points", tree.len());

    let outside = Point::new(7, 2);
    println!("Insert {} outside the root: {}", outside, tree.insert(outside));

    let range = Boundary::from_xywh(1, 1, 2, 2);
    let mut found = tree.query(&range);
    found.sort();
    println!("Points in {}:", range);
    for p in &found {
        println!("  {}", p);
    }

    println!("\nQuadrant layout:");
    tree.root().walk(|node, depth| {
        if node.is_leaf() && node.points().is_empty() {
            return;
        }
        let held: Vec<String> = node.points().iter().map(ToString::to_string).collect();
        println!(
            "{:indent$}{} [{}]",
            "",
            node.boundary(),
            held.join(", "),
            indent = depth * 2
        );
    });

    let stats = tree.stats();
    println!(
        "\n{} nodes, {} leaves, depth {}, {} rejected",
        stats.nodes, stats.leaves, stats.depth, stats.rejected
    );

    Ok(())
}

//! Walkthrough of how malformed edge sets degrade.
//!
//! Real flow exports are not always a single clean chain. This demo shows
//! the documented behavior for each malformed shape.
//!
//! Run with: cargo run --example degraded_inputs

use flowchain::{find_head, order_stages, sequence, Edge, Stage};

fn show(label: &str, edges: &[Edge]) {
    let seq = sequence(edges);
    println!("{}", label);
    println!("   input edges:  {:?}", edges);
    match find_head(edges) {
        Some(head) => println!("   head:         {}", head),
        None => println!("   head:         (none)"),
    }
    println!("   ordered ids:  {:?}", seq.stage_ids());
    println!("   complete:     {}", seq.complete);
    if let Some(issue) = &seq.issue {
        println!("   issue:        {:?}", issue);
    }
    println!();
}

fn main() {
    println!("========================================");
    println!(" Flowchain Degraded-Input Walkthrough");
    println!("========================================\n");

    show("1. Well-formed chain (unordered input)", &[
        Edge::new(3, 4),
        Edge::new(1, 3),
        Edge::new(4, 2),
    ]);

    show("2. Pure cycle: no head, empty ordering", &[
        Edge::new(1, 2),
        Edge::new(2, 3),
        Edge::new(3, 1),
    ]);

    show("3. Cycle reachable from head: truncated, never loops", &[
        Edge::new(1, 2),
        Edge::new(2, 3),
        Edge::new(3, 2),
    ]);

    show("4. Two components: first head in input order wins", &[
        Edge::new(5, 6),
        Edge::new(1, 2),
    ]);

    // Orphan stages sort after every positioned stage.
    let stages = vec![
        Stage::new(9, "Archived"),
        Stage::new(1, "Intake"),
        Stage::new(3, "Review"),
    ];
    let edges = [Edge::new(1, 3)];
    let ordered = order_stages(&stages, &edges);
    println!("5. Orphan placement in order_stages");
    println!("   input stages: [Archived(9), Intake(1), Review(3)]");
    println!(
        "   rendered:     {:?}",
        ordered.iter().map(|s| s.name.as_str()).collect::<Vec<_>>()
    );
}

//! Stress test for chain ordering over large flows.
//!
//! Covers: ordering throughput on long chains and editing throughput on the
//! manager.
//!
//! Run with: cargo run --release --example stress_test

use std::time::Instant;

use flowchain::{order_stages, ordered_stage_ids, sequence, ChainManager, Edge, Stage, StageId};

fn main() {
    println!("========================================");
    println!(" Flowchain Stress Suite");
    println!("========================================\n");

    test_long_chain_ordering(10_000);
    test_manager_editing(2_000);
}

// -----------------------------------------------------------------------------
// 1. Long-chain ordering (reversed input, worst case for input-order riding)
// -----------------------------------------------------------------------------
fn test_long_chain_ordering(n: i64) {
    println!("Test: Ordering ({} edges, reversed input order)", n);

    let edges: Vec<Edge> = (0..n).rev().map(|i| Edge::new(i, i + 1)).collect();
    let stages: Vec<Stage> = (0..=n)
        .rev()
        .map(|i| Stage::new(i, format!("Stage {}", i)))
        .collect();

    let start = Instant::now();
    let ids = ordered_stage_ids(&edges);
    let id_time = start.elapsed();

    let start = Instant::now();
    let ordered = order_stages(&stages, &edges);
    let stage_time = start.elapsed();

    // Validate consistency
    assert_eq!(ids.len(), edges.len() + 1);
    assert_eq!(ids.first(), Some(&StageId::from(0i64)));
    assert_eq!(ids.last(), Some(&StageId::from(n)));
    assert_eq!(ordered.first().map(|s| s.name.as_str()), Some("Stage 0"));
    assert!(sequence(&edges).complete);

    println!("   ordered_stage_ids: {:?}", id_time);
    println!("   order_stages:      {:?}", stage_time);
    println!(
        "   Throughput:        {:.0} edges/sec\n",
        n as f64 / id_time.as_secs_f64()
    );
}

// -----------------------------------------------------------------------------
// 2. Manager editing (append + mid-chain splice)
// -----------------------------------------------------------------------------
fn test_manager_editing(n: i64) {
    println!("Test: Manager editing ({} appends + {} splices)", n, n / 10);

    let mut manager = ChainManager::new();

    let start = Instant::now();
    for i in 0..n {
        manager
            .create_and_link(Stage::new(i, format!("Stage {}", i)))
            .unwrap();
    }
    let append_time = start.elapsed();

    let anchor = StageId::from(n / 2);
    let start = Instant::now();
    for i in 0..n / 10 {
        manager
            .insert_after(&anchor, Stage::new(n + i, format!("Spliced {}", i)))
            .unwrap();
    }
    let splice_time = start.elapsed();

    let ids = manager.ordered_ids();
    assert_eq!(ids.len() as i64, n + n / 10);
    assert!(manager.sequencing().complete);

    println!("   Appends:  {:?} ({:.0} ops/sec)", append_time, n as f64 / append_time.as_secs_f64());
    println!(
        "   Splices:  {:?} ({:.0} ops/sec)",
        splice_time,
        (n / 10) as f64 / splice_time.as_secs_f64()
    );
    println!("   Final chain length: {}", ids.len());
}

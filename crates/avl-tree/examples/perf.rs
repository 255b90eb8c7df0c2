//! Throughput of the AVL tree against `std::collections::BTreeSet`.
//!
//! Run:  cargo run --example perf --release -p avl-tree

use std::collections::BTreeSet;
use std::time::Instant;

use avl_tree::AvlTree;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;

// ── harness ───────────────────────────────────────────────────────────────────

fn bench<F: FnMut()>(n: u32, mut f: F) -> u64 {
    let warmup = std::cmp::max(5, n / 10);
    for _ in 0..warmup {
        f();
    }
    let start = Instant::now();
    for _ in 0..n {
        f();
    }
    let elapsed = start.elapsed();
    (n as f64 / elapsed.as_secs_f64()) as u64
}

fn fmt(n: u64) -> String {
    // comma-grouped number
    let s = n.to_string();
    let mut out = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out.chars().rev().collect()
}

fn row(label: &str, ops: u64) {
    println!("  {:<24}  {:>16} op/s", label, fmt(ops));
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() {
    const N: u32 = 10_000;

    let mut rng = Xoshiro256StarStar::seed_from_u64(0x5eed);
    let sorted: Vec<u32> = (0..N).collect();
    let mut shuffled = sorted.clone();
    shuffled.shuffle(&mut rng);

    println!("\n  avl-tree  {N} keys per run\n");
    println!("  {:<24}  {:>16}", "operation", "runs/sec");
    println!("  {}", "-".repeat(46));

    row(
        "avl insert sorted",
        bench(50, || {
            let tree: AvlTree<u32> = sorted.iter().copied().collect();
            assert_eq!(tree.len(), N as usize);
        }),
    );
    row(
        "avl insert shuffled",
        bench(50, || {
            let tree: AvlTree<u32> = shuffled.iter().copied().collect();
            assert_eq!(tree.len(), N as usize);
        }),
    );
    row(
        "btreeset insert shuffled",
        bench(50, || {
            let set: BTreeSet<u32> = shuffled.iter().copied().collect();
            assert_eq!(set.len(), N as usize);
        }),
    );

    {
        let tree: AvlTree<u32> = shuffled.iter().copied().collect();
        row(
            "avl find shuffled",
            bench(50, || {
                assert!(shuffled.iter().all(|k| tree.find(k)));
            }),
        );
    }

    row(
        "avl insert+delete",
        bench(20, || {
            let mut tree: AvlTree<u32> = shuffled.iter().copied().collect();
            for k in &sorted {
                tree.delete(k);
            }
            assert!(tree.is_empty());
        }),
    );
}

//! LazyCell Usage Examples
//!
//! Demonstrates lazy computation, explicit overwrite, and invalidation.

use laze::LazyCell;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

fn main() {
    println!("LazyCell Usage Examples");
    println!("=======================");

    // Example 1: Basic lazy computation
    println!("\n1. Basic Lazy Computation:");
    let compute_count = AtomicUsize::new(0);

    let lazy_value = LazyCell::new(|| {
        compute_count.fetch_add(1, Ordering::SeqCst);
        println!("  Computing expensive value...");
        42 * 2
    });

    println!("  First access (triggers computation):");
    println!(
        "  Result: {}, Compute count: {}",
        lazy_value.get(),
        compute_count.load(Ordering::SeqCst)
    );

    println!("  Second access (uses cache):");
    println!(
        "  Result: {}, Compute count: {}",
        lazy_value.get(),
        compute_count.load(Ordering::SeqCst)
    );

    // Example 2: Overwrite and invalidation
    println!("\n2. Overwrite and Invalidation:");
    let lazy_list = LazyCell::new(|| vec!["one", "two", "three"]);

    println!("  Computed: {:?}", lazy_list.get());
    lazy_list.set(vec!["something", "else"]);
    println!("  After set: {:?}", lazy_list.get());
    lazy_list.clear();
    println!("  After clear (recomputed): {:?}", lazy_list.get());

    // Example 3: Concurrent first access
    println!("\n3. Concurrent First Access:");
    let race_count = Arc::new(AtomicUsize::new(0));
    let shared = {
        let race_count = race_count.clone();
        Arc::new(LazyCell::new(move || {
            race_count.fetch_add(1, Ordering::SeqCst);
            "built exactly once"
        }))
    };

    let mut handles = Vec::new();
    for i in 0..8 {
        let shared = shared.clone();
        handles.push(thread::spawn(move || {
            println!("  Thread {} observed: {:?}", i, shared.get());
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }
    println!(
        "  Constructions across 8 threads: {}",
        race_count.load(Ordering::SeqCst)
    );

    // Example 4: Diagnostics without construction
    println!("\n4. Diagnostics:");
    let diagnosed: LazyCell<String> = LazyCell::new(|| "hello".to_string());
    println!("  Before access: {diagnosed:?}");
    diagnosed.get();
    println!("  After access:  {diagnosed:?}");
}

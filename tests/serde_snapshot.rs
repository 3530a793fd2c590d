#![cfg(all(feature = "serde", not(loom)))]

use laze::LazyCell;
use std::sync::atomic::{AtomicUsize, Ordering};

#[test]
fn test_serialize_snapshot_without_constructing() {
    let runs = AtomicUsize::new(0);
    let cell = LazyCell::new(|| {
        runs.fetch_add(1, Ordering::SeqCst);
        vec![1u8, 2, 3]
    });

    // Absent cells serialize as null and stay absent.
    assert_eq!(serde_json::to_string(&cell).unwrap(), "null");
    assert_eq!(runs.load(Ordering::SeqCst), 0);

    cell.get();
    assert_eq!(serde_json::to_string(&cell).unwrap(), "[1,2,3]");

    cell.clear();
    assert_eq!(serde_json::to_string(&cell).unwrap(), "null");
}

#[test]
fn test_serialize_overwritten_value() {
    let cell = LazyCell::new(|| 0.0f64);
    cell.set(1.5);
    assert_eq!(serde_json::to_string(&cell).unwrap(), "1.5");
}

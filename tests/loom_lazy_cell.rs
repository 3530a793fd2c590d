// Interleaving models. Run with:
//
//     RUSTFLAGS="--cfg loom" cargo test --test loom_lazy_cell
//
// (Scoped to this target: doctests and the real-thread suites are not built
// for the loom configuration.)
#![cfg(loom)]

use laze::LazyCell;
use loom::sync::atomic::{AtomicUsize, Ordering};
use loom::sync::Arc;
use loom::thread;

#[test]
fn loom_concurrent_get_constructs_once() {
    loom::model(|| {
        let runs = Arc::new(AtomicUsize::new(0));
        let cell = {
            let runs = runs.clone();
            Arc::new(LazyCell::new(move || runs.fetch_add(1, Ordering::SeqCst) + 1))
        };

        let other = {
            let cell = cell.clone();
            thread::spawn(move || cell.get())
        };
        let here = cell.get();
        let there = other.join().unwrap();

        assert_eq!(here, 1);
        assert_eq!(there, 1);
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    });
}

#[test]
fn loom_get_races_set() {
    loom::model(|| {
        let cell = Arc::new(LazyCell::new(|| 1u8));

        let writer = {
            let cell = cell.clone();
            thread::spawn(move || cell.set(2))
        };
        let observed = cell.get();
        writer.join().unwrap();

        // Either order is a fully-formed value, and the overwrite wins once
        // both operations have completed.
        assert!(observed == 1 || observed == 2);
        assert_eq!(cell.get(), 2);
    });
}

#[test]
fn loom_clear_races_get() {
    loom::model(|| {
        let cell = Arc::new(LazyCell::new(|| 3u8));
        cell.set(9);

        let clearer = {
            let cell = cell.clone();
            thread::spawn(move || cell.clear())
        };
        let observed = cell.get();
        clearer.join().unwrap();

        // The reader sees the overwritten value or a fresh construction,
        // never anything in between.
        assert!(observed == 9 || observed == 3);
    });
}

//! # `laze` - Thread-Safe Resettable Lazy Cell
//!
//! A single primitive: [`LazyCell`], a mutex-guarded, lazily-initialized value
//! container. A construction closure is supplied at creation time; the value is
//! not computed until first access, after which it is cached and returned on
//! subsequent accesses. Unlike `std::sync::LazyLock`, the cached value can be
//! explicitly overwritten or cleared, forcing recomputation on the next access.
//!
//! ## Guarantees
//!
//! - **Single construction**: for any absent-to-present transition, exactly one
//!   thread runs the construction closure; every other accessor blocks until a
//!   fully-constructed value is available. No thread ever observes a partially
//!   constructed value.
//! - **Panic transparency**: a panic in the construction closure propagates to
//!   the caller that triggered it, leaves the cell absent, and does not poison
//!   it. The next access simply retries construction.
//! - **Explicit invalidation**: [`LazyCell::clear`] drops the cached value;
//!   [`LazyCell::set`] overwrites it without running the closure.
//!
//! ## Trade-off
//!
//! Construction runs inside the critical section. That serializes concurrent
//! first accesses (which is what makes the single-construction guarantee hold)
//! at the cost of blocking every other accessor for the duration of the
//! construction. Recomputation is expected to be rare, so correctness wins
//! over concurrency on that path.
//!
//! ## Example
//!
//! ```rust
//! use laze::LazyCell;
//!
//! let cell = LazyCell::new(|| "expensive".to_string());
//! assert!(!cell.is_cached());
//!
//! // First access runs the closure and caches the result.
//! assert_eq!(cell.get(), "expensive");
//! assert!(cell.is_cached());
//!
//! // Overwrite without running the closure.
//! cell.set("cheap".to_string());
//! assert_eq!(cell.get(), "cheap");
//!
//! // Clear; the next access recomputes.
//! cell.clear();
//! assert_eq!(cell.get(), "expensive");
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod lazy_cell;
mod sync;

pub use lazy_cell::LazyCell;

// Compile-time layout assertion.
//
// A `LazyCell` is a mutexed `Option<T>` plus the closure; it must stay small
// and allocation-free. The bound is intentionally loose to avoid platform
// brittleness while still catching accidental large regressions.
#[cfg(not(loom))]
const _: () = {
    use core::mem;

    assert!(
        mem::size_of::<LazyCell<u64>>()
            <= mem::size_of::<std::sync::Mutex<Option<u64>>>() + mem::size_of::<fn() -> u64>() * 2
    );
};

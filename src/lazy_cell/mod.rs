//! `LazyCell` — mutex-guarded recomputable lazy cache.
//!
//! Retains its initializer `F: Fn() -> T` so the cached value can be
//! invalidated and recomputed, unlike the set-once `std::sync::LazyLock`.

#[cfg(feature = "serde")]
mod serde;

use core::fmt;
use core::mem;

use crate::sync::{Mutex, MutexGuard, PoisonError, TryLockError};

/// A thread-safe, resettable lazy cell.
///
/// The cell stores a construction closure at creation time and an initially
/// absent value slot. The first access computes the value through the closure
/// and caches it; later accesses return the cached value. [`set`](Self::set)
/// overwrites the slot without running the closure, and [`clear`](Self::clear)
/// empties it so the next access recomputes.
///
/// All slot access goes through an internal mutex, so a `LazyCell` shared
/// across threads (e.g. in an `Arc` or a `static`) guarantees that the closure
/// runs exactly once per absent-to-present transition, no matter how many
/// threads race on first access.
///
/// # Reentrancy
///
/// The internal lock is not reentrant. Calling any locking method (`get`,
/// `with`, `set`, `clear`, ...) from inside the construction closure on the
/// *same* cell deadlocks. This is a caller obligation, not a detected error.
pub struct LazyCell<T, F = fn() -> T> {
    init: F,
    slot: Mutex<Option<T>>,
}

impl<T, F> LazyCell<T, F>
where
    F: Fn() -> T,
{
    /// Creates a new cell with a reusable initializer.
    ///
    /// The initializer is stored, not invoked; the cell starts absent.
    #[cfg(not(loom))]
    pub const fn new(init: F) -> Self {
        Self {
            init,
            slot: Mutex::new(None),
        }
    }

    /// Creates a new cell with a reusable initializer.
    ///
    /// Loom's mutex cannot be constructed in const context, so the model-checked
    /// build loses the `const` qualifier.
    #[cfg(loom)]
    pub fn new(init: F) -> Self {
        Self {
            init,
            slot: Mutex::new(None),
        }
    }

    /// Returns a clone of the cached value, computing and caching it first if
    /// the cell is absent.
    ///
    /// Exactly one thread runs the initializer for any absent-to-present
    /// transition; concurrent callers block until the value is available. A
    /// panic in the initializer propagates to the caller that triggered the
    /// construction, releases the lock, and leaves the cell absent, so a later
    /// call retries construction.
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.with(T::clone)
    }

    /// Borrows the cached value under the lock, computing it first if absent.
    ///
    /// This is [`get`](Self::get) without the `Clone` bound: the closure runs
    /// while the lock is held, so it must not touch this cell and should stay
    /// short to avoid stalling other accessors.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let mut slot = self.lock();
        f(slot.get_or_insert_with(|| self.construct()))
    }

    /// Returns `true` if a value is currently cached.
    ///
    /// Does not trigger construction.
    #[inline]
    pub fn is_cached(&self) -> bool {
        self.lock().is_some()
    }

    /// Overwrites the cached value without running the initializer.
    ///
    /// Later [`get`](Self::get) calls return `value` until the cell is cleared
    /// or overwritten again.
    #[inline]
    pub fn set(&self, value: T) {
        self.replace(Some(value));
    }

    /// Drops the cached value, if any. The next access recomputes.
    #[inline]
    pub fn clear(&self) {
        self.replace(None);
    }

    /// Replaces the whole slot, returning its previous state.
    ///
    /// `replace(None)` is [`clear`](Self::clear) that also hands back the old
    /// value. The initializer is not run. The previous value is dropped (or
    /// returned) outside the critical section.
    pub fn replace(&self, value: Option<T>) -> Option<T> {
        let mut slot = self.lock();
        // Emitted under the lock so the trace stream cannot misorder
        // relative to the slot transitions it reports.
        #[cfg(feature = "tracing")]
        tracing::trace!(
            value_type = core::any::type_name::<T>(),
            present = value.is_some(),
            "replacing cached value"
        );
        mem::replace(&mut *slot, value)
    }

    /// Moves the cached value out, leaving the cell absent.
    #[inline]
    pub fn take(&self) -> Option<T> {
        self.lock().take()
    }

    /// Returns a mutable reference to the cached value if present.
    ///
    /// Exclusive ownership stands in for the lock; the initializer is not run.
    #[cfg(not(loom))]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.slot
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .as_mut()
    }

    /// Consumes the cell, returning the cached value if present.
    #[cfg(not(loom))]
    pub fn into_inner(self) -> Option<T> {
        self.slot
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Acquires the slot, reclaiming a poisoned lock.
    ///
    /// Poisoning here means some closure panicked while the lock was held
    /// (typically the initializer). No method writes the slot before its
    /// closure has returned, so the protected state is consistent and the
    /// lock is safe to reclaim; reclaiming is what keeps a failed
    /// construction retryable instead of fatal.
    fn lock(&self) -> MutexGuard<'_, Option<T>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs the initializer. Called with the lock held.
    fn construct(&self) -> T {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            value_type = core::any::type_name::<T>(),
            "constructing value"
        );
        (self.init)()
    }
}

impl<T: Default> Default for LazyCell<T> {
    /// Creates an absent cell whose initializer is `T::default`.
    fn default() -> Self {
        Self::new(T::default)
    }
}

impl<T: fmt::Debug, F> fmt::Debug for LazyCell<T, F> {
    /// Renders the slot state without triggering construction.
    ///
    /// Produces `LazyCell { value: .. }` with the cached value's debug form,
    /// `<uncomputed>` when absent, or `<locked>` when another thread holds the
    /// lock (mirroring `std::sync::Mutex`'s non-blocking `Debug`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slot = match self.slot.try_lock() {
            Ok(slot) => slot,
            Err(TryLockError::Poisoned(err)) => err.into_inner(),
            Err(TryLockError::WouldBlock) => {
                return f
                    .debug_struct("LazyCell")
                    .field("value", &format_args!("<locked>"))
                    .finish();
            }
        };
        let mut d = f.debug_struct("LazyCell");
        match &*slot {
            Some(value) => d.field("value", value),
            None => d.field("value", &format_args!("<uncomputed>")),
        };
        d.finish()
    }
}

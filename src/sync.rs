//! Lock selection: `std::sync::Mutex` normally, `loom`'s model-checked mutex
//! when the test suite runs under `RUSTFLAGS="--cfg loom"`.
//!
//! Loom reuses the standard library's `PoisonError`/`TryLockError` types, so
//! the poison-recovery paths read identically under both locks.

#[cfg(loom)]
pub(crate) use loom::sync::{Mutex, MutexGuard};
#[cfg(not(loom))]
pub(crate) use std::sync::{Mutex, MutexGuard};

pub(crate) use std::sync::{PoisonError, TryLockError};

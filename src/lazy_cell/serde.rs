//! `Serialize` for the cached snapshot.
//!
//! A cell serializes as the `Option<T>` it currently holds; serialization
//! never triggers construction, so an absent cell serializes as `None`.
//! There is no `Deserialize` counterpart: a construction closure cannot be
//! reconstituted from data.

use serde::ser::{Serialize, Serializer};

use crate::sync::PoisonError;

use super::LazyCell;

impl<T: Serialize, F> Serialize for LazyCell<T, F> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        slot.serialize(serializer)
    }
}

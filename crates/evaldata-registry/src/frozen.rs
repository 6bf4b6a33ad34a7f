//! Read-only registry view for the parallel evaluation phase.

use std::fmt;
use std::sync::Arc;

use evaldata_core::{ExchangeMask, GlobalEvaluationData, LookupError, SharedEvaluationData};

use crate::entries::Entries;

/// Immutable snapshot of a [`GlobalEvaluationDataContainer`](crate::GlobalEvaluationDataContainer).
///
/// Produced by [`freeze`](crate::GlobalEvaluationDataContainer::freeze).
/// Cloning is an `Arc` bump; every clone sees the same bindings. No
/// binding can be added or replaced, so concurrent readers never race a
/// writer.
///
/// Lifecycle fan-out is still available: the hooks take `&self` on the
/// data objects, which synchronize their own state.
#[derive(Clone)]
pub struct FrozenEvaluationData {
    entries: Arc<Entries>,
}

impl FrozenEvaluationData {
    pub(crate) fn from_entries(entries: Entries) -> Self {
        Self {
            entries: Arc::new(entries),
        }
    }

    /// Whether any object is bound to `key`.
    pub fn contains_data_object(&self, key: &str) -> bool {
        self.entries.contains(key)
    }

    /// The handle bound to `key`.
    ///
    /// # Errors
    ///
    /// [`LookupError::MissingKey`] if nothing is bound to `key`.
    pub fn get_data_object(&self, key: &str) -> Result<SharedEvaluationData, LookupError> {
        self.entries.lookup(key).map(Arc::clone)
    }

    /// Borrow the object bound to `key` as its concrete type `T`.
    ///
    /// # Errors
    ///
    /// [`LookupError::MissingKey`] or [`LookupError::TypeMismatch`].
    pub fn get_data_object_as<T: GlobalEvaluationData>(&self, key: &str) -> Result<&T, LookupError> {
        self.entries.lookup_as::<T>(key)
    }

    /// Number of bound keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no key is bound.
    pub fn is_empty(&self) -> bool {
        self.entries.len() == 0
    }

    /// Bound keys in first-insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys()
    }

    /// `(key, handle)` pairs in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SharedEvaluationData)> {
        self.entries.iter()
    }

    /// Keys whose objects require boundary-condition adjustment.
    pub fn dirichlet_adjusted_keys(&self) -> impl Iterator<Item = &str> {
        self.entries.requiring_dirichlet_adjustment()
    }

    /// Initialize every bound object.
    pub fn initialize(&self) {
        self.entries.initialize();
    }

    /// Scatter owned values to ghosts on every bound object.
    pub fn global_to_ghost(&self, mask: ExchangeMask) {
        self.entries.global_to_ghost(mask);
    }

    /// Gather ghost contributions on every bound object.
    pub fn ghost_to_global(&self, mask: ExchangeMask) {
        self.entries.ghost_to_global(mask);
    }
}

impl fmt::Debug for FrozenEvaluationData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrozenEvaluationData")
            .field("keys", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

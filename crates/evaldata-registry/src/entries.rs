//! Read-side storage shared by the mutable container and the frozen view.

use evaldata_core::{ExchangeMask, GlobalEvaluationData, LookupError, SharedEvaluationData};
use indexmap::IndexMap;

/// Key-to-handle bindings in first-insertion order.
///
/// An overwrite keeps the key's original position, so lifecycle fan-out
/// order is stable across re-registration.
#[derive(Clone, Default)]
pub(crate) struct Entries {
    map: IndexMap<String, SharedEvaluationData>,
}

impl Entries {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            map: IndexMap::with_capacity(capacity),
        }
    }

    /// Bind `data` to `key`, returning the stored key and the handle it
    /// replaced.
    pub(crate) fn insert(
        &mut self,
        key: String,
        data: SharedEvaluationData,
    ) -> (&str, Option<SharedEvaluationData>) {
        let (index, replaced) = self.map.insert_full(key, data);
        let key = self
            .map
            .get_index(index)
            .map_or("", |(k, _)| k.as_str());
        (key, replaced)
    }

    pub(crate) fn contains(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    pub(crate) fn lookup(&self, key: &str) -> Result<&SharedEvaluationData, LookupError> {
        self.map.get(key).ok_or_else(|| {
            tracing::debug!(key, "global evaluation data lookup missed");
            LookupError::MissingKey {
                key: key.to_owned(),
            }
        })
    }

    pub(crate) fn lookup_as<T: GlobalEvaluationData>(&self, key: &str) -> Result<&T, LookupError> {
        self.lookup(key)?
            .downcast_ref::<T>()
            .ok_or_else(|| LookupError::TypeMismatch {
                key: key.to_owned(),
                expected: std::any::type_name::<T>(),
            })
    }

    pub(crate) fn len(&self) -> usize {
        self.map.len()
    }

    pub(crate) fn keys(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(String::as_str)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, &SharedEvaluationData)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub(crate) fn initialize(&self) {
        tracing::trace!(objects = self.map.len(), "initializing global evaluation data");
        for data in self.map.values() {
            data.initialize_data();
        }
    }

    pub(crate) fn global_to_ghost(&self, mask: ExchangeMask) {
        tracing::trace!(objects = self.map.len(), %mask, "global to ghost");
        for data in self.map.values() {
            data.global_to_ghost(mask);
        }
    }

    pub(crate) fn ghost_to_global(&self, mask: ExchangeMask) {
        tracing::trace!(objects = self.map.len(), %mask, "ghost to global");
        for data in self.map.values() {
            data.ghost_to_global(mask);
        }
    }

    pub(crate) fn requiring_dirichlet_adjustment(&self) -> impl Iterator<Item = &str> {
        self.map
            .iter()
            .filter(|(_, data)| data.requires_dirichlet_adjustment())
            .map(|(k, _)| k.as_str())
    }
}

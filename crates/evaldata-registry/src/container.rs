//! The mutable, setup-phase registry.

use std::fmt;
use std::sync::Arc;

use evaldata_core::{ExchangeMask, GlobalEvaluationData, LookupError, SharedEvaluationData};

use crate::config::ContainerConfig;
use crate::entries::Entries;
use crate::frozen::FrozenEvaluationData;

/// Keyed store of shared global evaluation data.
///
/// # Semantics
///
/// - At most one object per key. Adding under an existing key replaces
///   the binding; the replaced handle is returned and otherwise dropped.
/// - Reads return the exact handle most recently added: no copy of the
///   underlying object is made, and [`Arc::ptr_eq`] holds against the
///   caller's own handle.
/// - Reading a missing key is an error naming that key.
///
/// Mutation takes `&mut self`. Populate the container before the
/// evaluation loop starts; for a parallel read phase, hand out a
/// [`FrozenEvaluationData`] via [`freeze`](Self::freeze).
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use evaldata_core::{NoOpEvaluationData, SharedEvaluationData};
/// use evaldata_registry::GlobalEvaluationDataContainer;
///
/// let mut gedc = GlobalEvaluationDataContainer::new();
/// let h1: SharedEvaluationData = Arc::new(NoOpEvaluationData);
/// gedc.add_data_object("DOF Count", Arc::clone(&h1));
///
/// assert!(gedc.contains_data_object("DOF Count"));
/// assert!(Arc::ptr_eq(&gedc.get_data_object("DOF Count").unwrap(), &h1));
///
/// let err = gedc.get_data_object("Nonexistent").err().unwrap();
/// assert!(err.to_string().contains("Nonexistent"));
/// ```
#[derive(Clone, Default)]
pub struct GlobalEvaluationDataContainer {
    entries: Entries,
    config: ContainerConfig,
}

impl GlobalEvaluationDataContainer {
    /// Create an empty container with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty container with the given configuration.
    pub fn with_config(config: ContainerConfig) -> Self {
        Self {
            entries: Entries::with_capacity(config.capacity),
            config,
        }
    }

    /// The configuration this container was built with.
    pub fn config(&self) -> &ContainerConfig {
        &self.config
    }

    /// Bind `data` to `key`, replacing any previous binding.
    ///
    /// Never fails. Returns the handle that was replaced, if any; other
    /// holders of that handle are unaffected.
    pub fn add_data_object(
        &mut self,
        key: impl Into<String>,
        data: SharedEvaluationData,
    ) -> Option<SharedEvaluationData> {
        let warn_on_overwrite = self.config.warn_on_overwrite;
        let (key, replaced) = self.entries.insert(key.into(), data);
        match (&replaced, warn_on_overwrite) {
            (Some(_), true) => tracing::warn!(key = %key, "replacing global evaluation data"),
            _ => tracing::debug!(
                key = %key,
                replaced = replaced.is_some(),
                "registered global evaluation data"
            ),
        }
        replaced
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
    /// [`LookupError::MissingKey`] if nothing is bound to `key`, or
    /// [`LookupError::TypeMismatch`] if the bound object is not a `T`.
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

    /// Keys whose objects report
    /// [`requires_dirichlet_adjustment`](GlobalEvaluationData::requires_dirichlet_adjustment).
    pub fn dirichlet_adjusted_keys(&self) -> impl Iterator<Item = &str> {
        self.entries.requiring_dirichlet_adjustment()
    }

    /// Call [`initialize_data`](GlobalEvaluationData::initialize_data)
    /// on every bound object.
    pub fn initialize(&self) {
        self.entries.initialize();
    }

    /// Call [`global_to_ghost`](GlobalEvaluationData::global_to_ghost)
    /// on every bound object.
    pub fn global_to_ghost(&self, mask: ExchangeMask) {
        self.entries.global_to_ghost(mask);
    }

    /// Call [`ghost_to_global`](GlobalEvaluationData::ghost_to_global)
    /// on every bound object.
    pub fn ghost_to_global(&self, mask: ExchangeMask) {
        self.entries.ghost_to_global(mask);
    }

    /// End the setup phase.
    ///
    /// The returned view keeps every binding and handle identity, and is
    /// `Send + Sync` and cheap to clone.
    pub fn freeze(self) -> FrozenEvaluationData {
        tracing::debug!(objects = self.entries.len(), "froze global evaluation data");
        FrozenEvaluationData::from_entries(self.entries)
    }
}

impl fmt::Debug for GlobalEvaluationDataContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GlobalEvaluationDataContainer")
            .field("keys", &self.entries.keys().collect::<Vec<_>>())
            .field("config", &self.config)
            .finish()
    }
}

impl<K: Into<String>> FromIterator<(K, SharedEvaluationData)> for GlobalEvaluationDataContainer {
    fn from_iter<I: IntoIterator<Item = (K, SharedEvaluationData)>>(iter: I) -> Self {
        let mut gedc = Self::new();
        gedc.extend(iter);
        gedc
    }
}

impl<K: Into<String>> Extend<(K, SharedEvaluationData)> for GlobalEvaluationDataContainer {
    fn extend<I: IntoIterator<Item = (K, SharedEvaluationData)>>(&mut self, iter: I) {
        for (key, data) in iter {
            self.add_data_object(key, data);
        }
    }
}

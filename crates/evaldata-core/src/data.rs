//! The [`GlobalEvaluationData`] capability and `dyn` downcast support.
//!
//! Global evaluation data is auxiliary state shared by many evaluator
//! instances across one pass of an evaluation loop: ghosted solution
//! vectors, DOF counts, boundary-condition flags, and the like. The loop
//! driver only sees the trait object; evaluators that know the concrete
//! type recover it through [`downcast_ref`](dyn GlobalEvaluationData::downcast_ref).

use std::any::Any;
use std::sync::Arc;

use crate::mask::ExchangeMask;

/// Shared ownership handle to a type-erased data object.
///
/// The registry and any other holder keep the object alive; two handles
/// refer to the same object iff [`Arc::ptr_eq`] holds.
pub type SharedEvaluationData = Arc<dyn GlobalEvaluationData>;

/// Auxiliary state with a lifecycle driven by an evaluation loop.
///
/// # Contract
///
/// - Every hook takes `&self`. Objects are shared through
///   [`SharedEvaluationData`] handles and may be reached from several
///   threads during a parallel evaluation phase, so implementations that
///   mutate use interior mutability (atomics, `Mutex`, `RwLock`).
/// - Every hook has a no-op default. Implement only what the object
///   needs.
///
/// # Object safety
///
/// This trait is object-safe; registries store it as
/// `Arc<dyn GlobalEvaluationData>`.
///
/// # Examples
///
/// ```
/// use std::sync::atomic::{AtomicU64, Ordering};
/// use evaldata_core::{ExchangeMask, GlobalEvaluationData};
///
/// struct DofCount {
///     owned: u64,
///     ghosted: AtomicU64,
/// }
///
/// impl GlobalEvaluationData for DofCount {
///     fn global_to_ghost(&self, _mask: ExchangeMask) {
///         self.ghosted.store(self.owned, Ordering::Relaxed);
///     }
/// }
///
/// let data = DofCount { owned: 12, ghosted: AtomicU64::new(0) };
/// data.global_to_ghost(ExchangeMask::X);
/// assert_eq!(data.ghosted.load(Ordering::Relaxed), 12);
/// ```
pub trait GlobalEvaluationData: Any + Send + Sync + 'static {
    /// Prepare the object for a new evaluation pass.
    fn initialize_data(&self) {}

    /// Scatter owned values into the ghosted representation.
    ///
    /// Called before evaluators read the object.
    fn global_to_ghost(&self, mask: ExchangeMask) {
        let _ = mask;
    }

    /// Gather ghosted contributions back into owned storage.
    ///
    /// Called after evaluators have written to the object.
    fn ghost_to_global(&self, mask: ExchangeMask) {
        let _ = mask;
    }

    /// Whether this object takes part in boundary-condition adjustment.
    ///
    /// Default: `false`.
    fn requires_dirichlet_adjustment(&self) -> bool {
        false
    }
}

impl dyn GlobalEvaluationData {
    /// True if the underlying object is a `T`.
    pub fn is<T: GlobalEvaluationData>(&self) -> bool {
        (self as &dyn Any).is::<T>()
    }

    /// Attempt to downcast a trait object to a concrete data type.
    pub fn downcast_ref<T: GlobalEvaluationData>(&self) -> Option<&T> {
        (self as &dyn Any).downcast_ref::<T>()
    }
}

/// A data object with no state and no-op lifecycle hooks.
///
/// Useful as a placeholder binding when an evaluator only needs to know
/// that a key is present.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoOpEvaluationData;

impl GlobalEvaluationData for NoOpEvaluationData {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Counted {
        calls: AtomicUsize,
    }

    impl GlobalEvaluationData for Counted {
        fn initialize_data(&self) {
            self.calls.fetch_add(1, Ordering::Relaxed);
        }

        fn requires_dirichlet_adjustment(&self) -> bool {
            true
        }
    }

    #[test]
    fn defaults_are_no_ops() {
        let data = NoOpEvaluationData;
        data.initialize_data();
        data.global_to_ghost(ExchangeMask::ALL);
        data.ghost_to_global(ExchangeMask::ALL);
        assert!(!data.requires_dirichlet_adjustment());
    }

    #[test]
    fn downcast_through_shared_handle() {
        let handle: SharedEvaluationData = Arc::new(Counted {
            calls: AtomicUsize::new(0),
        });
        handle.initialize_data();

        assert!(handle.is::<Counted>());
        assert!(!handle.is::<NoOpEvaluationData>());
        let counted = handle.downcast_ref::<Counted>().unwrap();
        assert_eq!(counted.calls.load(Ordering::Relaxed), 1);
        assert!(handle.requires_dirichlet_adjustment());
        assert!(handle.downcast_ref::<NoOpEvaluationData>().is_none());
    }

    #[test]
    fn clones_share_identity() {
        let a: SharedEvaluationData = Arc::new(NoOpEvaluationData);
        let b = Arc::clone(&a);
        let c: SharedEvaluationData = Arc::new(NoOpEvaluationData);
        assert!(Arc::ptr_eq(&a, &b));
        assert!(!Arc::ptr_eq(&a, &c));
    }
}

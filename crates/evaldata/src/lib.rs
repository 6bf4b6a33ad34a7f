//! evaldata: a keyed registry of shared auxiliary state for numerical
//! evaluation loops.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the evaldata sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicU64, Ordering};
//! use evaldata::prelude::*;
//!
//! struct DofCount(AtomicU64);
//! impl GlobalEvaluationData for DofCount {
//!     fn initialize_data(&self) {
//!         self.0.store(0, Ordering::Relaxed);
//!     }
//! }
//!
//! let dofs = Arc::new(DofCount(AtomicU64::new(9)));
//! let mut gedc = GlobalEvaluationDataContainer::new();
//! gedc.add_data_object("DOF Count", dofs.clone());
//!
//! gedc.initialize();
//! assert_eq!(dofs.0.load(Ordering::Relaxed), 0);
//!
//! let frozen = gedc.freeze();
//! assert!(frozen.get_data_object_as::<DofCount>("DOF Count").is_ok());
//! assert!(matches!(
//!     frozen.get_data_object("Nonexistent"),
//!     Err(LookupError::MissingKey { .. })
//! ));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `evaldata-core` | `GlobalEvaluationData`, `ExchangeMask`, `LookupError` |
//! | [`registry`] | `evaldata-registry` | `GlobalEvaluationDataContainer`, `FrozenEvaluationData` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core trait, exchange mask, and error type (`evaldata-core`).
pub use evaldata_core as types;

/// The registry and its frozen view (`evaldata-registry`).
pub use evaldata_registry as registry;

/// Common imports for typical evaldata usage.
///
/// ```rust
/// use evaldata::prelude::*;
/// ```
pub mod prelude {
    pub use evaldata_core::{
        ExchangeMask, GlobalEvaluationData, LookupError, NoOpEvaluationData, SharedEvaluationData,
    };
    pub use evaldata_registry::{
        ContainerConfig, FrozenEvaluationData, GlobalEvaluationDataContainer,
    };
}

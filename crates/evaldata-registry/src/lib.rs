//! Keyed registry of shared global evaluation data.
//!
//! [`GlobalEvaluationDataContainer`] maps string keys to
//! [`SharedEvaluationData`](evaldata_core::SharedEvaluationData) handles.
//! An evaluation-loop driver populates it during setup, then either keeps
//! reading through it or calls [`freeze`](GlobalEvaluationDataContainer::freeze)
//! to obtain a [`FrozenEvaluationData`] that can be shared across threads.
//!
//! Reads are fail-fast: [`get_data_object`](GlobalEvaluationDataContainer::get_data_object)
//! on a missing key returns a [`LookupError`](evaldata_core::LookupError)
//! naming the key. Callers for whom absence is legitimate check
//! [`contains_data_object`](GlobalEvaluationDataContainer::contains_data_object)
//! first.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod container;
mod entries;
pub mod frozen;

pub use config::ContainerConfig;
pub use container::GlobalEvaluationDataContainer;
pub use frozen::FrozenEvaluationData;

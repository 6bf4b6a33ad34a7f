//! Benchmark profiles for the evaldata registry.
//!
//! - [`field_keys`]: deterministic key names shaped like field labels
//! - [`reference_container`]: a container populated with no-op objects

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::sync::Arc;

use evaldata_core::NoOpEvaluationData;
use evaldata_registry::{ContainerConfig, GlobalEvaluationDataContainer};

/// `count` distinct keys of the form `"Residual_<i>"`.
pub fn field_keys(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("Residual_{i}")).collect()
}

/// A container with one no-op object per key from [`field_keys`].
pub fn reference_container(count: usize) -> GlobalEvaluationDataContainer {
    let mut gedc =
        GlobalEvaluationDataContainer::with_config(ContainerConfig::default().with_capacity(count));
    for key in field_keys(count) {
        gedc.add_data_object(key, Arc::new(NoOpEvaluationData));
    }
    gedc
}

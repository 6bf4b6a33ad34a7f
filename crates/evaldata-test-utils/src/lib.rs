//! Test utilities and mock data objects for evaldata development.
//!
//! Provides a recording [`MockEvaluationData`] for lifecycle assertions
//! and the payload fixtures in [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{CounterData, GhostedVector};

use std::sync::atomic::{AtomicU8, AtomicUsize, Ordering};

use evaldata_core::{ExchangeMask, GlobalEvaluationData};

/// Mock implementation of [`GlobalEvaluationData`].
///
/// Counts every lifecycle call and remembers the most recent exchange
/// mask. Counters are atomic so the mock can be shared with a parallel
/// evaluation phase.
#[derive(Default)]
pub struct MockEvaluationData {
    initialize: AtomicUsize,
    global_to_ghost: AtomicUsize,
    ghost_to_global: AtomicUsize,
    last_mask: AtomicU8,
    dirichlet: bool,
}

impl MockEvaluationData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report `true` from `requires_dirichlet_adjustment`.
    pub fn with_dirichlet_adjustment(mut self) -> Self {
        self.dirichlet = true;
        self
    }

    pub fn initialize_calls(&self) -> usize {
        self.initialize.load(Ordering::SeqCst)
    }

    pub fn global_to_ghost_calls(&self) -> usize {
        self.global_to_ghost.load(Ordering::SeqCst)
    }

    pub fn ghost_to_global_calls(&self) -> usize {
        self.ghost_to_global.load(Ordering::SeqCst)
    }

    /// Mask passed to the most recent exchange, in either direction.
    pub fn last_mask(&self) -> ExchangeMask {
        ExchangeMask::from_bits_truncate(self.last_mask.load(Ordering::SeqCst))
    }
}

impl GlobalEvaluationData for MockEvaluationData {
    fn initialize_data(&self) {
        self.initialize.fetch_add(1, Ordering::SeqCst);
    }

    fn global_to_ghost(&self, mask: ExchangeMask) {
        self.global_to_ghost.fetch_add(1, Ordering::SeqCst);
        self.last_mask.store(mask.bits(), Ordering::SeqCst);
    }

    fn ghost_to_global(&self, mask: ExchangeMask) {
        self.ghost_to_global.fetch_add(1, Ordering::SeqCst);
        self.last_mask.store(mask.bits(), Ordering::SeqCst);
    }

    fn requires_dirichlet_adjustment(&self) -> bool {
        self.dirichlet
    }
}

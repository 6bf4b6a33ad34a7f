//! Reusable data-object fixtures.
//!
//! - [`CounterData`]: a read-only integer payload (e.g. a DOF count).
//! - [`GhostedVector`]: owned values plus a ghosted copy, exchanged
//!   through the lifecycle hooks.

use std::sync::{Mutex, MutexGuard, PoisonError};

use evaldata_core::{ExchangeMask, GlobalEvaluationData};

/// Read-only integer payload with no lifecycle behaviour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterData {
    value: u64,
}

impl CounterData {
    pub fn new(value: u64) -> Self {
        Self { value }
    }

    pub fn value(&self) -> u64 {
        self.value
    }
}

impl GlobalEvaluationData for CounterData {}

/// A vector with an owned part and a ghosted working copy.
///
/// - `initialize_data` zeroes the ghosted copy.
/// - `global_to_ghost` with [`ExchangeMask::X`] copies owned into ghosted.
/// - `ghost_to_global` with [`ExchangeMask::F`] adds ghosted into owned.
///
/// Other masks are ignored. Both exchanges lock `owned` before `ghosted`.
#[derive(Debug)]
pub struct GhostedVector {
    owned: Mutex<Vec<f64>>,
    ghosted: Mutex<Vec<f64>>,
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

impl GhostedVector {
    pub fn new(owned: Vec<f64>) -> Self {
        let len = owned.len();
        Self {
            owned: Mutex::new(owned),
            ghosted: Mutex::new(vec![0.0; len]),
        }
    }

    pub fn owned(&self) -> Vec<f64> {
        lock(&self.owned).clone()
    }

    pub fn ghosted(&self) -> Vec<f64> {
        lock(&self.ghosted).clone()
    }

    /// Add `value` to ghosted entry `index`, as an evaluator would.
    ///
    /// Returns `false` if `index` is out of range.
    pub fn accumulate(&self, index: usize, value: f64) -> bool {
        match lock(&self.ghosted).get_mut(index) {
            Some(slot) => {
                *slot += value;
                true
            }
            None => false,
        }
    }
}

impl GlobalEvaluationData for GhostedVector {
    fn initialize_data(&self) {
        lock(&self.ghosted).fill(0.0);
    }

    fn global_to_ghost(&self, mask: ExchangeMask) {
        if mask.contains(ExchangeMask::X) {
            let owned = lock(&self.owned);
            lock(&self.ghosted).copy_from_slice(&owned);
        }
    }

    fn ghost_to_global(&self, mask: ExchangeMask) {
        if mask.contains(ExchangeMask::F) {
            let mut owned = lock(&self.owned);
            let ghosted = lock(&self.ghosted);
            for (o, g) in owned.iter_mut().zip(ghosted.iter()) {
                *o += g;
            }
        }
    }
}

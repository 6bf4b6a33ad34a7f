//! A toy evaluation loop driven through the registry.
//!
//! Demonstrates:
//!   1. Implementing `GlobalEvaluationData` for a ghosted residual
//!   2. Populating a container during setup
//!   3. Freezing it and evaluating cells on worker threads
//!   4. Gathering ghost contributions and reporting a missing key
//!
//! Run with:
//!   RUST_LOG=debug cargo run --example evaluation_loop

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread;

use evaldata::prelude::*;
use tracing_subscriber::EnvFilter;

const CELLS: usize = 6;
const STEPS: usize = 3;

// ─── Data object: residual with a ghosted copy ──────────────────

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

struct Residual {
    owned: Mutex<Vec<f64>>,
    ghosted: Mutex<Vec<f64>>,
}

impl Residual {
    fn new(len: usize) -> Self {
        Self {
            owned: Mutex::new(vec![0.0; len]),
            ghosted: Mutex::new(vec![0.0; len]),
        }
    }

    /// Returns `false` if `cell` is out of range.
    fn contribute(&self, cell: usize, value: f64) -> bool {
        match lock(&self.ghosted).get_mut(cell) {
            Some(slot) => {
                *slot += value;
                true
            }
            None => false,
        }
    }

    fn norm(&self) -> f64 {
        lock(&self.owned).iter().map(|v| v * v).sum::<f64>().sqrt()
    }
}

impl GlobalEvaluationData for Residual {
    fn initialize_data(&self) {
        lock(&self.ghosted).fill(0.0);
    }

    fn ghost_to_global(&self, mask: ExchangeMask) {
        if !mask.contains(ExchangeMask::F) {
            return;
        }
        let mut owned = lock(&self.owned);
        let ghosted = lock(&self.ghosted);
        for (o, g) in owned.iter_mut().zip(ghosted.iter()) {
            *o += g;
        }
    }
}

// ─── Data object: step size shared by every evaluator ───────────

struct StepSize(f64);

impl GlobalEvaluationData for StepSize {}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let residual = Arc::new(Residual::new(CELLS));

    let mut gedc = GlobalEvaluationDataContainer::with_config(
        ContainerConfig::default().with_capacity(2).warn_on_overwrite(true),
    );
    gedc.add_data_object("Residual", residual.clone());
    gedc.add_data_object("Step Size", Arc::new(StepSize(0.5)));
    // Re-registering is legal; with warn_on_overwrite it is logged at warn.
    gedc.add_data_object("Step Size", Arc::new(StepSize(0.25)));

    let frozen = gedc.freeze();

    for step in 0..STEPS {
        frozen.initialize();
        frozen.global_to_ghost(ExchangeMask::X);

        thread::scope(|s| -> Result<(), Box<dyn std::error::Error>> {
            let evaluators: Vec<_> = (0..CELLS)
                .map(|cell| {
                    let view = frozen.clone();
                    s.spawn(move || -> Result<bool, LookupError> {
                        let dt = view.get_data_object_as::<StepSize>("Step Size")?.0;
                        let r = view.get_data_object_as::<Residual>("Residual")?;
                        Ok(r.contribute(cell, dt * (cell + 1) as f64))
                    })
                })
                .collect();
            for evaluator in evaluators {
                if !evaluator.join().map_err(|_| "evaluator panicked")?? {
                    return Err("evaluator wrote outside the residual".into());
                }
            }
            Ok(())
        })?;

        frozen.ghost_to_global(ExchangeMask::F);
        println!("step {step}: |R| = {:.4}", residual.norm());
    }

    if !frozen.contains_data_object("Jacobian") {
        println!("no Jacobian registered; skipping matrix assembly");
    }
    if let Err(e) = frozen.get_data_object("Jacobian") {
        println!("unchecked read fails: {e}");
    }

    Ok(())
}

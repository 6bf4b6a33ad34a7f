//! Integration test: a full evaluation pass driven through the registry.
//!
//! Setup populates a container, freezes it, and hands the frozen view to
//! several worker threads acting as per-cell evaluators. Each worker
//! resolves its data by key and accumulates into a ghosted vector; the
//! driver then gathers ghost contributions back into owned storage.

use std::sync::Arc;
use std::thread;

use evaldata_core::{ExchangeMask, LookupError, NoOpEvaluationData, SharedEvaluationData};
use evaldata_registry::{ContainerConfig, GlobalEvaluationDataContainer};
use evaldata_test_utils::{CounterData, GhostedVector, MockEvaluationData};

const CELLS: usize = 4;
const WORKERS: usize = 8;

fn populated() -> (GlobalEvaluationDataContainer, Arc<GhostedVector>, Arc<MockEvaluationData>) {
    let residual = Arc::new(GhostedVector::new(vec![1.0; CELLS]));
    let bc = Arc::new(MockEvaluationData::new().with_dirichlet_adjustment());

    let mut gedc = GlobalEvaluationDataContainer::with_config(ContainerConfig::default().with_capacity(3));
    gedc.add_data_object("DOF Count", Arc::new(CounterData::new(CELLS as u64)));
    gedc.add_data_object("Residual", residual.clone());
    gedc.add_data_object("Dirichlet Counter", bc.clone());
    (gedc, residual, bc)
}

#[test]
fn parallel_read_phase_over_frozen_view() {
    let (gedc, residual, bc) = populated();
    let frozen = gedc.freeze();

    frozen.initialize();
    frozen.global_to_ghost(ExchangeMask::X);
    assert_eq!(residual.ghosted(), vec![1.0; CELLS]);
    frozen.initialize();

    thread::scope(|s| {
        for worker in 0..WORKERS {
            let view = frozen.clone();
            s.spawn(move || {
                let cells = view.get_data_object_as::<CounterData>("DOF Count").unwrap().value();
                let vec = view.get_data_object_as::<GhostedVector>("Residual").unwrap();
                let cell = worker % cells as usize;
                assert!(vec.accumulate(cell, 0.5));
                assert!(!view.contains_data_object("Nonexistent"));
            });
        }
    });

    frozen.ghost_to_global(ExchangeMask::F);
    // Each cell was hit WORKERS / CELLS times with 0.5.
    let expected = 1.0 + 0.5 * (WORKERS / CELLS) as f64;
    assert_eq!(residual.owned(), vec![expected; CELLS]);

    assert_eq!(bc.initialize_calls(), 2);
    assert_eq!(bc.global_to_ghost_calls(), 1);
    assert_eq!(bc.ghost_to_global_calls(), 1);
    assert_eq!(
        frozen.dirichlet_adjusted_keys().collect::<Vec<_>>(),
        vec!["Dirichlet Counter"]
    );
}

#[test]
fn handles_outlive_the_registry() {
    let (gedc, residual, _) = populated();
    let handle = gedc.get_data_object("Residual").unwrap();
    let frozen = gedc.freeze();
    drop(frozen);

    let as_shared: SharedEvaluationData = residual;
    assert!(Arc::ptr_eq(&handle, &as_shared));
    assert_eq!(Arc::strong_count(&handle), 2);
}

#[test]
fn missing_key_surfaces_as_std_error() {
    fn read(gedc: &GlobalEvaluationDataContainer) -> Result<(), Box<dyn std::error::Error>> {
        gedc.get_data_object("Jacobian")?;
        Ok(())
    }

    let (gedc, _, _) = populated();
    let err = read(&gedc).unwrap_err();
    assert!(err.to_string().contains("'Jacobian'"));

    let lookup = err.downcast::<LookupError>().unwrap();
    assert_eq!(lookup.key(), "Jacobian");
}

#[test]
fn check_before_read_for_optional_data() {
    let (mut gedc, _, _) = populated();
    let optional = |g: &GlobalEvaluationDataContainer| {
        if g.contains_data_object("Mass Matrix") {
            Some(g.get_data_object("Mass Matrix").unwrap())
        } else {
            None
        }
    };
    assert!(optional(&gedc).is_none());

    gedc.add_data_object("Mass Matrix", Arc::new(NoOpEvaluationData));
    assert!(optional(&gedc).is_some());
}

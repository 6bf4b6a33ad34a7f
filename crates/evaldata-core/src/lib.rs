//! Core types and traits for global evaluation data.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the abstractions shared by the registry and by evaluation-loop code:
//! the [`GlobalEvaluationData`] capability, the [`ExchangeMask`] used by
//! ghost/global exchanges, and the [`LookupError`] type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod data;
pub mod error;
pub mod mask;

pub use data::{GlobalEvaluationData, NoOpEvaluationData, SharedEvaluationData};
pub use error::LookupError;
pub use mask::ExchangeMask;

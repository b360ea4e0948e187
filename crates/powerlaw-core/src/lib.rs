//! Core types for power-law estimation
//!
//! This crate holds what the fitting and bootstrap crates share:
//!
//! - **Errors**: a single [`Error`] enum and [`Result`] alias
//! - **Numeric elements**: the [`Numeric`] trait for observation types
//! - **Execution**: sequential or Rayon-backed batch engines
//! - **Resampling**: seeded sampling with replacement
//!
//! # Example
//!
//! ```rust
//! use powerlaw_core::{execution::sequential, ExecutionEngine, ResampleWorkspace};
//! use powerlaw_core::resample::iteration_rng;
//! use rand::rngs::StdRng;
//!
//! let data = vec![1.0, 2.0, 3.0, 4.0];
//! let engine = sequential();
//!
//! let lengths = engine.execute_batch(3, |i| {
//!     let mut rng: StdRng = iteration_rng(42, i);
//!     let mut workspace = ResampleWorkspace::new();
//!     workspace.resample(&mut rng, &data).len()
//! });
//! assert_eq!(lengths, vec![4, 4, 4]);
//! ```

pub mod error;
pub mod execution;
pub mod numeric;
pub mod resample;
pub mod utils;

// Re-export core types
pub use error::{Error, Result};

pub use execution::{auto_engine, sequential, ExecutionEngine, ExecutionStrategy, SequentialEngine};
#[cfg(feature = "parallel")]
pub use execution::{parallel, ParallelEngine};

pub use numeric::{widen, Numeric};
pub use resample::ResampleWorkspace;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::Error;
    pub use crate::{ExecutionEngine, ExecutionStrategy, Numeric, Result, SequentialEngine};

    #[cfg(feature = "parallel")]
    pub use crate::ParallelEngine;
}

//! Bootstrap uncertainty for power-law fits
//!
//! Resamples the observations with replacement, refits every resample with
//! the full cutoff search, and reports the mean and sample standard
//! deviation of alpha, xmin and the log-likelihood over the successful fits.
//!
//! Iterations are independent and run on an [`ExecutionEngine`]: sequential
//! by default, Rayon-backed with the `parallel` feature.
//!
//! # Examples
//!
//! ```rust
//! use powerlaw_bootstrap::BootstrapFit;
//! use powerlaw_core::execution::sequential;
//! use powerlaw_fit::{PowerLawFitter, XminGrid};
//!
//! let sample: Vec<f64> = (1..=200).map(|i| 1.0 + 200.0 / i as f64).collect();
//! let fitter = PowerLawFitter::continuous().with_grid(XminGrid::new(1.5, 0.1, 3.5).unwrap());
//!
//! let result = BootstrapFit::new(sequential(), fitter)
//!     .with_iterations(25)
//!     .with_seed(42)
//!     .run(&sample)
//!     .unwrap();
//!
//! assert_eq!(result.iterations, 25);
//! assert!(result.aggregate.alpha_sd >= 0.0);
//! ```
//!
//! [`ExecutionEngine`]: powerlaw_core::ExecutionEngine

pub mod api;
mod bootstrap;
pub mod progress;
mod types;

pub use api::{bootstrap, bootstrap_with};
pub use bootstrap::{BootstrapFit, DEFAULT_ITERATIONS};
pub use progress::{progress_fn, FnProgress, NullProgress, ProgressReporter, TracingProgress};
pub use types::{AggregateResult, BootstrapResult};

pub use powerlaw_core::{Error, Result};

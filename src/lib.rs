//! Power-law tail fitting with bootstrap uncertainty
//!
//! Umbrella crate re-exporting the workspace members:
//!
//! - [`powerlaw_core`]: errors, numeric element trait, execution engines, resampling
//! - [`powerlaw_fit`]: cutoff grid search with maximum-likelihood exponents and KS selection
//! - [`powerlaw_bootstrap`]: resampled refits aggregated into means and standard deviations
//!
//! # Examples
//!
//! ```rust
//! use powerlaw_stats::prelude::*;
//!
//! let sample = vec![1.0, 1.2, 1.5, 2.0, 2.5, 3.0, 4.0, 5.0, 8.0, 10.0];
//! let grid = XminGrid::new(1.0, 0.5, 3.0)?;
//!
//! let fit = single_fit(&sample, false, false, grid)?;
//! assert_eq!(fit.xmin, 2.0);
//!
//! let boot = BootstrapFit::new(sequential(), PowerLawFitter::continuous().with_grid(grid))
//!     .with_iterations(20)
//!     .with_seed(1)
//!     .run(&sample)?;
//! assert_eq!(boot.iterations, 20);
//! # Ok::<(), powerlaw_stats::Error>(())
//! ```

pub use powerlaw_bootstrap;
pub use powerlaw_core;
pub use powerlaw_fit;

pub use powerlaw_core::{Error, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use powerlaw_bootstrap::{
        bootstrap, AggregateResult, BootstrapFit, BootstrapResult, ProgressReporter,
    };
    pub use powerlaw_core::execution::sequential;
    pub use powerlaw_core::prelude::*;
    pub use powerlaw_fit::prelude::*;
}

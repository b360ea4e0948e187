//! Power-law fitting with automatic cutoff selection
//!
//! Fits `p(x) ∝ x^(-alpha)` to the tail `x >= xmin` of a sample. Every
//! candidate `xmin` on a regular grid is fitted by maximum likelihood, and the
//! candidate whose fit has the smallest Kolmogorov–Smirnov distance to the
//! empirical tail is selected.
//!
//! - **Continuous model** (default): closed-form exponent estimate
//! - **Discrete model**: Hurwitz-zeta normalised likelihood on integer cutoffs
//! - **Policies**: `no_small` truncates the scan once the exponent's standard
//!   error gets too large; `finite` applies the small-sample bias correction
//!
//! # Examples
//!
//! ```rust
//! use powerlaw_fit::{PowerLawFitter, XminGrid};
//!
//! let sample = vec![1.0, 1.2, 1.5, 2.0, 2.5, 3.0, 4.0, 5.0, 8.0, 10.0];
//! let fit = PowerLawFitter::continuous()
//!     .with_grid(XminGrid::new(1.0, 0.5, 3.0).unwrap())
//!     .fit(&sample)
//!     .unwrap();
//!
//! assert_eq!(fit.xmin, 2.0);
//! assert_eq!(fit.tail_len, 7);
//! ```

mod fit;
pub mod goodness;
mod grid;
pub mod mle;
mod model;
mod search;
mod types;
pub mod zeta;

#[cfg(feature = "test-utils")]
pub mod test_data;

pub use fit::{single_fit, PowerLawFitter};
pub use grid::{
    Candidates, XminGrid, DEFAULT_END_XMIN, DEFAULT_INCREMENT_XMIN, DEFAULT_START_XMIN,
    MAX_CANDIDATES,
};
pub use mle::Estimate;
pub use model::{Continuous, Discrete, ModelKind, PowerLawModel};
pub use search::{select_best, GridSearch};
pub use types::{
    CandidateScore, FitOptions, FitResult, FINITE_SIZE_WARNING_TAIL, NO_SMALL_MAX_STD_ERROR,
};

pub use powerlaw_core::{Error, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        single_fit, Continuous, Discrete, FitOptions, FitResult, ModelKind, PowerLawFitter,
        PowerLawModel, XminGrid,
    };
}

//! Single power-law fit
//!
//! [`PowerLawFitter`] holds the model, grid and policy flags and runs one
//! complete estimation. Identical inputs always give bit-identical output.

use crate::grid::XminGrid;
use crate::model::{Continuous, Discrete, PowerLawModel};
use crate::search::GridSearch;
use crate::types::{CandidateScore, FitOptions, FitResult, FINITE_SIZE_WARNING_TAIL};
use powerlaw_core::utils::sort_in_place;
use powerlaw_core::{widen, Error, Numeric, Result};
use tracing::{instrument, warn};

/// Builder-style configuration for a single fit
#[derive(Debug, Clone)]
pub struct PowerLawFitter<M = Continuous> {
    model: M,
    grid: XminGrid,
    options: FitOptions,
}

impl PowerLawFitter<Continuous> {
    /// Continuous model over the default grid
    pub fn continuous() -> Self {
        Self::new(Continuous)
    }
}

impl PowerLawFitter<Discrete> {
    /// Discrete model over the default grid
    pub fn discrete() -> Self {
        Self::new(Discrete)
    }
}

impl Default for PowerLawFitter<Continuous> {
    fn default() -> Self {
        Self::continuous()
    }
}

impl<M: PowerLawModel> PowerLawFitter<M> {
    /// Creates a fitter for `model` over [`XminGrid::default`] with no policies
    pub fn new(model: M) -> Self {
        Self {
            model,
            grid: XminGrid::default(),
            options: FitOptions::default(),
        }
    }

    /// Sets the candidate grid
    pub fn with_grid(mut self, grid: XminGrid) -> Self {
        self.grid = grid;
        self
    }

    /// Sets both policy flags at once
    pub fn with_options(mut self, options: FitOptions) -> Self {
        self.options = options;
        self
    }

    /// Truncates the scan before the finite-size bias dominates
    pub fn no_small(mut self, enabled: bool) -> Self {
        self.options.no_small = enabled;
        self
    }

    /// Applies the small-sample correction to the reported exponent
    pub fn finite(mut self, enabled: bool) -> Self {
        self.options.finite = enabled;
        self
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn grid(&self) -> &XminGrid {
        &self.grid
    }

    pub fn options(&self) -> FitOptions {
        self.options
    }

    /// Fit a sample
    ///
    /// Fails with [`Error::DegenerateFit`] when the grid is empty or no
    /// candidate yields a usable tail.
    #[instrument(level = "debug", skip(self, sample), fields(n = sample.len(), model = %self.model.kind()))]
    pub fn fit<T: Numeric>(&self, sample: &[T]) -> Result<FitResult> {
        if sample.is_empty() {
            return Err(Error::empty_input("power-law fit"));
        }
        self.grid.ensure_non_empty()?;

        let sorted = sorted_sample(sample);
        let result = self.fit_sorted(&sorted)?;

        if result.tail_len < FINITE_SIZE_WARNING_TAIL && !self.options.finite {
            warn!(
                tail_len = result.tail_len,
                "finite-size bias may be present; consider the finite-size correction"
            );
        }
        Ok(result)
    }

    /// Fit an ascending f64 sample without re-sorting or warnings
    pub fn fit_sorted(&self, sorted: &[f64]) -> Result<FitResult> {
        self.search().search(sorted)
    }

    /// Every scored candidate for a sample, in ascending xmin order
    pub fn evaluate<T: Numeric>(&self, sample: &[T]) -> Vec<CandidateScore> {
        self.search().evaluate(&sorted_sample(sample))
    }

    fn search(&self) -> GridSearch<&M> {
        GridSearch::new(&self.model, self.grid, self.options)
    }
}

fn sorted_sample<T: Numeric>(sample: &[T]) -> Vec<f64> {
    let mut data = widen(sample);
    sort_in_place(&mut data);
    data
}

/// Fit the continuous model with explicit policy flags
///
/// # Examples
///
/// ```rust
/// use powerlaw_fit::{single_fit, XminGrid};
///
/// let sample = [1.0, 1.2, 1.5, 2.0, 2.5, 3.0, 4.0, 5.0, 8.0, 10.0];
/// let grid = XminGrid::new(1.0, 0.5, 3.0).unwrap();
/// let fit = single_fit(&sample, false, false, grid).unwrap();
/// assert_eq!(fit.xmin, 2.0);
/// assert!(fit.alpha > 1.0);
/// ```
pub fn single_fit<T: Numeric>(
    sample: &[T],
    no_small: bool,
    finite: bool,
    grid: XminGrid,
) -> Result<FitResult> {
    PowerLawFitter::continuous()
        .with_grid(grid)
        .no_small(no_small)
        .finite(finite)
        .fit(sample)
}

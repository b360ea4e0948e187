//! High-level API for bootstrapped power-law fits

use crate::bootstrap::BootstrapFit;
use crate::progress::{NullProgress, ProgressReporter, TracingProgress};
use crate::types::BootstrapResult;
use powerlaw_core::execution::auto_engine;
use powerlaw_core::{ExecutionEngine, Numeric, Result};
use powerlaw_fit::{PowerLawFitter, PowerLawModel, XminGrid};

/// Bootstrap the continuous model with explicit policy flags
///
/// Runs on the default engine for the enabled features with a random base
/// seed. With `verbose` set, each iteration is reported through `tracing`
/// at `info` level.
///
/// # Arguments
/// * `sample` - Observations, all non-negative
/// * `no_small` - Truncate the cutoff scan once the tail gets too small
/// * `finite` - Apply the small-sample correction to every fitted exponent
/// * `grid` - Candidate cutoffs
/// * `iterations` - Number of resamples
/// * `verbose` - Report progress per iteration
///
/// # Example
/// ```rust
/// use powerlaw_bootstrap::bootstrap;
/// use powerlaw_fit::XminGrid;
///
/// let sample = vec![1.0, 1.2, 1.5, 2.0, 2.5, 3.0, 4.0, 5.0, 8.0, 10.0];
/// let grid = XminGrid::new(1.0, 0.5, 3.0).unwrap();
/// let result = bootstrap(&sample, false, false, grid, 50, false).unwrap();
/// assert!(result.successful > 0);
/// ```
pub fn bootstrap<T: Numeric>(
    sample: &[T],
    no_small: bool,
    finite: bool,
    grid: XminGrid,
    iterations: usize,
    verbose: bool,
) -> Result<BootstrapResult> {
    let fitter = PowerLawFitter::continuous()
        .with_grid(grid)
        .no_small(no_small)
        .finite(finite);
    bootstrap_with(auto_engine(), fitter, sample, iterations, None, verbose)
}

/// Bootstrap any model on a caller-supplied engine
///
/// `seed` fixes the base seed; `None` draws a random one.
pub fn bootstrap_with<E, M, T>(
    engine: E,
    fitter: PowerLawFitter<M>,
    sample: &[T],
    iterations: usize,
    seed: Option<u64>,
    verbose: bool,
) -> Result<BootstrapResult>
where
    E: ExecutionEngine,
    M: PowerLawModel,
    T: Numeric,
{
    if verbose {
        run(engine, fitter, sample, iterations, seed, TracingProgress)
    } else {
        run(engine, fitter, sample, iterations, seed, NullProgress)
    }
}

fn run<E, M, T, P>(
    engine: E,
    fitter: PowerLawFitter<M>,
    sample: &[T],
    iterations: usize,
    seed: Option<u64>,
    reporter: P,
) -> Result<BootstrapResult>
where
    E: ExecutionEngine,
    M: PowerLawModel,
    T: Numeric,
    P: ProgressReporter,
{
    let mut boot = BootstrapFit::new(engine, fitter)
        .with_iterations(iterations)
        .with_reporter(reporter);
    if let Some(seed) = seed {
        boot = boot.with_seed(seed);
    }
    boot.run(sample)
}

#[cfg(test)]
mod tests {
    use super::*;
    use powerlaw_core::execution::sequential;
    use powerlaw_core::Error;

    #[test]
    fn test_seeded_bootstrap_with_is_reproducible() {
        let sample = powerlaw_fit::test_data::quantile_mixed_sample(50, 0.5, 150, 2.5, 2.0);
        let grid = XminGrid::new(1.0, 0.1, 3.0).unwrap();
        let fitter = PowerLawFitter::continuous().with_grid(grid);

        let a = bootstrap_with(sequential(), fitter.clone(), &sample, 12, Some(7), false).unwrap();
        let b = bootstrap_with(sequential(), fitter, &sample, 12, Some(7), true).unwrap();
        assert_eq!(a.aggregate, b.aggregate);
        assert_eq!(a.iterations, 12);
    }

    #[test]
    fn test_bootstrap_empty_sample() {
        let err = bootstrap::<f64>(&[], false, false, XminGrid::default(), 10, false).unwrap_err();
        assert!(matches!(err, Error::InsufficientData { .. }));
    }
}

//! Bootstrap resampling over the complete fitting pipeline
//!
//! Each iteration draws a same-size resample with replacement and reruns the
//! whole grid search on it, so the spread of the ensemble includes the
//! uncertainty of the cutoff selection and not only of the exponent.
//!
//! Iteration `i` derives its generator from `base_seed + i`. A seeded run
//! therefore yields identical results on the sequential and parallel engines.

use crate::progress::{NullProgress, ProgressReporter};
use crate::types::{AggregateResult, BootstrapResult};
use powerlaw_core::resample::{iteration_rng, random_base_seed};
use powerlaw_core::utils::sort_in_place;
use powerlaw_core::{widen, Error, ExecutionEngine, Numeric, ResampleWorkspace, Result};
use powerlaw_fit::{Continuous, FitResult, PowerLawFitter, PowerLawModel};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::marker::PhantomData;
use std::time::Instant;
use tracing::{debug, instrument, warn};

/// Default number of bootstrap iterations
pub const DEFAULT_ITERATIONS: usize = 1000;

/// Bootstrap engine for power-law fits
///
/// Generic over the execution engine, the model family, the progress
/// reporter and the per-iteration RNG type.
#[derive(Clone)]
pub struct BootstrapFit<E, M = Continuous, P = NullProgress, R = StdRng> {
    engine: E,
    fitter: PowerLawFitter<M>,
    iterations: usize,
    seed: Option<u64>,
    reporter: P,
    _rng: PhantomData<fn() -> R>,
}

impl<E, M> BootstrapFit<E, M>
where
    E: ExecutionEngine,
    M: PowerLawModel,
{
    /// Create a bootstrap engine running `fitter` on every resample
    pub fn new(engine: E, fitter: PowerLawFitter<M>) -> Self {
        Self {
            engine,
            fitter,
            iterations: DEFAULT_ITERATIONS,
            seed: None,
            reporter: NullProgress,
            _rng: PhantomData,
        }
    }
}

impl<E, M, P, R> BootstrapFit<E, M, P, R>
where
    E: ExecutionEngine,
    M: PowerLawModel,
    P: ProgressReporter,
    R: SeedableRng + RngCore,
{
    /// Set the number of bootstrap iterations
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set random seed for reproducibility
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replace the progress reporter
    pub fn with_reporter<Q: ProgressReporter>(self, reporter: Q) -> BootstrapFit<E, M, Q, R> {
        BootstrapFit {
            engine: self.engine,
            fitter: self.fitter,
            iterations: self.iterations,
            seed: self.seed,
            reporter,
            _rng: PhantomData,
        }
    }

    /// Switch the generator type used for resampling
    pub fn with_rng<S: SeedableRng + RngCore>(self) -> BootstrapFit<E, M, P, S> {
        BootstrapFit {
            engine: self.engine,
            fitter: self.fitter,
            iterations: self.iterations,
            seed: self.seed,
            reporter: self.reporter,
            _rng: PhantomData,
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn fitter(&self) -> &PowerLawFitter<M> {
        &self.fitter
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Fit every resample and return the per-iteration outcomes
    ///
    /// Entry `i` is `None` when iteration `i` produced no fit. Without a
    /// configured seed a random base seed is drawn.
    pub fn ensemble<T: Numeric>(&self, sample: &[T]) -> Result<Vec<Option<FitResult>>> {
        self.check_inputs(sample.len())?;
        let base_seed = self.seed.unwrap_or_else(random_base_seed);
        Ok(self.run_iterations(&widen(sample), base_seed))
    }

    /// Run the bootstrap and aggregate the successful iterations
    ///
    /// Fails with [`Error::BootstrapFailed`] when no iteration produced a fit.
    #[instrument(
        skip(self, sample),
        fields(n = sample.len(), iterations = self.iterations, parallel = self.engine.is_parallel())
    )]
    pub fn run<T: Numeric>(&self, sample: &[T]) -> Result<BootstrapResult> {
        self.check_inputs(sample.len())?;

        let start_time = Instant::now();
        let base_seed = self.seed.unwrap_or_else(random_base_seed);
        debug!(base_seed, "running bootstrap");

        let outcomes = self.run_iterations(&widen(sample), base_seed);
        let fits: Vec<FitResult> = outcomes.into_iter().flatten().collect();
        let successful = fits.len();
        let failed = self.iterations - successful;
        self.reporter.finished(successful, failed);

        let aggregate = AggregateResult::from_ensemble(&fits).ok_or(Error::BootstrapFailed {
            iterations: self.iterations,
        })?;

        if failed > 0 {
            warn!(failed, successful, "bootstrap iterations without a fit were excluded");
        }

        let elapsed_ms = start_time.elapsed().as_millis() as u64;
        debug!(
            successful,
            alpha = aggregate.alpha,
            alpha_sd = aggregate.alpha_sd,
            elapsed_ms,
            "bootstrap complete"
        );

        Ok(BootstrapResult {
            aggregate,
            iterations: self.iterations,
            successful,
            failed,
            model: self.fitter.model().kind(),
            elapsed_ms,
        })
    }

    fn check_inputs(&self, n: usize) -> Result<()> {
        if self.iterations == 0 {
            return Err(Error::InvalidParameter(
                "bootstrap requires at least one iteration".to_string(),
            ));
        }
        if n == 0 {
            return Err(Error::empty_input("bootstrap"));
        }
        self.fitter.grid().ensure_non_empty()
    }

    fn run_iterations(&self, data: &[f64], base_seed: u64) -> Vec<Option<FitResult>> {
        let total = self.iterations;
        self.engine.execute_batch(total, |i| {
            let mut rng: R = iteration_rng(base_seed, i);
            let mut workspace = ResampleWorkspace::with_capacity(data.len());
            let resampled = workspace.resample(&mut rng, data);
            sort_in_place(resampled);

            let fit = match self.fitter.fit_sorted(resampled) {
                Ok(fit) => Some(fit),
                Err(err) => {
                    debug!(iteration = i, error = %err, "bootstrap iteration failed");
                    None
                }
            };
            self.reporter.iteration_complete(i, total, fit.as_ref());
            fit
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::progress_fn;
    use approx::assert_relative_eq;
    use powerlaw_core::execution::sequential;
    use powerlaw_fit::XminGrid;
    use rand_chacha::ChaCha8Rng;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn sample() -> Vec<f64> {
        powerlaw_fit::test_data::quantile_mixed_sample(100, 0.5, 300, 2.5, 2.0)
    }

    fn fitter() -> PowerLawFitter {
        PowerLawFitter::continuous().with_grid(XminGrid::new(1.0, 0.1, 3.0).unwrap())
    }

    #[test]
    fn test_seeded_run_is_reproducible() {
        let boot = BootstrapFit::new(sequential(), fitter())
            .with_iterations(20)
            .with_seed(42);
        let a = boot.run(&sample()).unwrap();
        let b = boot.run(&sample()).unwrap();

        assert_eq!(a.aggregate, b.aggregate);
        assert_eq!(a.successful, 20);
        assert_eq!(a.failed, 0);
        assert!(a.aggregate.alpha_sd > 0.0);
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = BootstrapFit::new(sequential(), fitter())
            .with_iterations(10)
            .with_seed(1)
            .run(&sample())
            .unwrap();
        let b = BootstrapFit::new(sequential(), fitter())
            .with_iterations(10)
            .with_seed(2)
            .run(&sample())
            .unwrap();
        assert_ne!(a.aggregate.alpha, b.aggregate.alpha);
    }

    #[test]
    fn test_ensemble_matches_aggregate() {
        let boot = BootstrapFit::new(sequential(), fitter())
            .with_iterations(15)
            .with_seed(9);
        let ensemble = boot.ensemble(&sample()).unwrap();
        assert_eq!(ensemble.len(), 15);

        let fits: Vec<FitResult> = ensemble.into_iter().flatten().collect();
        let expected = AggregateResult::from_ensemble(&fits).unwrap();
        assert_eq!(boot.run(&sample()).unwrap().aggregate, expected);
    }

    #[test]
    fn test_rng_type_is_pluggable() {
        let result = BootstrapFit::new(sequential(), fitter())
            .with_iterations(5)
            .with_seed(3)
            .with_rng::<ChaCha8Rng>()
            .run(&sample())
            .unwrap();
        assert_eq!(result.successful, 5);
        assert_relative_eq!(result.aggregate.alpha, 2.5, epsilon = 0.5);
    }

    #[test]
    fn test_reporter_sees_every_iteration() {
        let seen = AtomicUsize::new(0);
        let reporter = progress_fn(|_, total, _: Option<&FitResult>| {
            assert_eq!(total, 8);
            seen.fetch_add(1, Ordering::Relaxed);
        });

        BootstrapFit::new(sequential(), fitter())
            .with_iterations(8)
            .with_seed(5)
            .with_reporter(&reporter)
            .run(&sample())
            .unwrap();
        assert_eq!(seen.load(Ordering::Relaxed), 8);
    }

    #[test]
    fn test_zero_iterations_rejected() {
        let err = BootstrapFit::new(sequential(), fitter())
            .with_iterations(0)
            .run(&sample())
            .unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));
    }

    #[test]
    fn test_all_iterations_failing() {
        // Every resample of a constant sample has a single distinct value
        let err = BootstrapFit::new(sequential(), fitter())
            .with_iterations(4)
            .with_seed(0)
            .run(&[2.0; 30])
            .unwrap_err();
        assert!(matches!(err, Error::BootstrapFailed { iterations: 4 }));
    }

    #[test]
    fn test_inverted_grid_fails_before_resampling() {
        let inverted = PowerLawFitter::continuous().with_grid(XminGrid::new(3.0, 0.1, 1.0).unwrap());
        let err = BootstrapFit::new(sequential(), inverted)
            .with_seed(0)
            .run(&sample())
            .unwrap_err();
        assert!(matches!(err, Error::DegenerateFit(_)));
    }
}

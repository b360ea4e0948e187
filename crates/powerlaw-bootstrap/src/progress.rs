//! Progress reporting for bootstrap runs
//!
//! Reporters observe a run without influencing its result. With a parallel
//! engine the callbacks arrive from worker threads in no particular order.

use powerlaw_fit::FitResult;
use tracing::{info, warn};

/// Observer notified as bootstrap iterations complete
pub trait ProgressReporter: Send + Sync {
    /// Called once per iteration with its fit, or `None` if the fit failed
    fn iteration_complete(&self, iteration: usize, total: usize, fit: Option<&FitResult>);

    /// Called once after every iteration has completed
    fn finished(&self, _successful: usize, _failed: usize) {}

    /// Check if this reporter actually produces output
    fn is_enabled(&self) -> bool {
        true
    }
}

/// Reporter that does nothing (for when progress output is disabled)
#[derive(Debug, Default, Clone, Copy)]
pub struct NullProgress;

impl ProgressReporter for NullProgress {
    fn iteration_complete(&self, _iteration: usize, _total: usize, _fit: Option<&FitResult>) {}

    fn is_enabled(&self) -> bool {
        false
    }
}

/// Emits one `info` event per iteration through `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingProgress;

impl ProgressReporter for TracingProgress {
    fn iteration_complete(&self, iteration: usize, total: usize, fit: Option<&FitResult>) {
        match fit {
            Some(fit) => info!(
                iteration = iteration + 1,
                total,
                alpha = fit.alpha,
                xmin = fit.xmin,
                "bootstrap iteration complete"
            ),
            None => warn!(
                iteration = iteration + 1,
                total,
                "bootstrap iteration produced no fit"
            ),
        }
    }

    fn finished(&self, successful: usize, failed: usize) {
        info!(successful, failed, "bootstrap finished");
    }
}

/// Adapts a closure into a [`ProgressReporter`]
pub struct FnProgress<F>(F);

impl<F> ProgressReporter for FnProgress<F>
where
    F: Fn(usize, usize, Option<&FitResult>) + Send + Sync,
{
    fn iteration_complete(&self, iteration: usize, total: usize, fit: Option<&FitResult>) {
        (self.0)(iteration, total, fit)
    }
}

/// Wrap a closure `(iteration, total, fit)` as a reporter
pub fn progress_fn<F>(f: F) -> FnProgress<F>
where
    F: Fn(usize, usize, Option<&FitResult>) + Send + Sync,
{
    FnProgress(f)
}

impl<P: ProgressReporter + ?Sized> ProgressReporter for &P {
    fn iteration_complete(&self, iteration: usize, total: usize, fit: Option<&FitResult>) {
        (**self).iteration_complete(iteration, total, fit)
    }

    fn finished(&self, successful: usize, failed: usize) {
        (**self).finished(successful, failed)
    }

    fn is_enabled(&self) -> bool {
        (**self).is_enabled()
    }
}

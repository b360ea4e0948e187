//! Result types for bootstrap estimation

use powerlaw_fit::{FitResult, ModelKind};
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;
use std::fmt;

/// Means and sample standard deviations over a bootstrap ensemble
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AggregateResult {
    pub alpha: f64,
    pub xmin: f64,
    pub log_likelihood: f64,
    pub alpha_sd: f64,
    pub xmin_sd: f64,
    pub log_likelihood_sd: f64,
}

impl AggregateResult {
    /// Aggregate the successful fits of an ensemble
    ///
    /// Returns `None` for an empty ensemble. Standard deviations use the
    /// `n - 1` denominator and are zero when only one fit is present.
    pub fn from_ensemble(fits: &[FitResult]) -> Option<Self> {
        if fits.is_empty() {
            return None;
        }

        let alphas: Vec<f64> = fits.iter().map(|f| f.alpha).collect();
        let xmins: Vec<f64> = fits.iter().map(|f| f.xmin).collect();
        let log_likelihoods: Vec<f64> = fits.iter().map(|f| f.log_likelihood).collect();

        let (alpha, alpha_sd) = mean_and_sd(&alphas);
        let (xmin, xmin_sd) = mean_and_sd(&xmins);
        let (log_likelihood, log_likelihood_sd) = mean_and_sd(&log_likelihoods);

        Some(Self {
            alpha,
            xmin,
            log_likelihood,
            alpha_sd,
            xmin_sd,
            log_likelihood_sd,
        })
    }
}

fn mean_and_sd(values: &[f64]) -> (f64, f64) {
    let mean = values.iter().mean();
    let sd = if values.len() < 2 {
        0.0
    } else {
        values.iter().std_dev()
    };
    (mean, sd)
}

/// Outcome of a bootstrap run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BootstrapResult {
    /// Aggregate over the successful iterations
    #[serde(flatten)]
    pub aggregate: AggregateResult,
    /// Iterations requested
    pub iterations: usize,
    /// Iterations whose fit succeeded
    pub successful: usize,
    /// Iterations excluded because their fit failed
    pub failed: usize,
    /// Model family fitted in every iteration
    pub model: ModelKind,
    /// Wall-clock duration of the run
    pub elapsed_ms: u64,
}

impl BootstrapResult {
    /// Fraction of iterations that produced a fit
    pub fn success_rate(&self) -> f64 {
        if self.iterations == 0 {
            0.0
        } else {
            self.successful as f64 / self.iterations as f64
        }
    }
}

impl fmt::Display for BootstrapResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let a = &self.aggregate;
        write!(
            f,
            "Bootstrap({}, alpha={:.4}±{:.4}, xmin={:.4}±{:.4}, logL={:.4}±{:.4}, {}/{} ok)",
            self.model,
            a.alpha,
            a.alpha_sd,
            a.xmin,
            a.xmin_sd,
            a.log_likelihood,
            a.log_likelihood_sd,
            self.successful,
            self.iterations
        )
    }
}

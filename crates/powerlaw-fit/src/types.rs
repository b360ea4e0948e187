//! Core types for power-law fitting

use crate::model::ModelKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Policy flags applied by the grid search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FitOptions {
    /// Stop scanning larger cutoffs once the exponent's standard error
    /// `(alpha - 1)/sqrt(n)` exceeds [`NO_SMALL_MAX_STD_ERROR`]
    pub no_small: bool,
    /// Apply the small-sample correction to the winning exponent
    pub finite: bool,
}

impl FitOptions {
    pub fn new(no_small: bool, finite: bool) -> Self {
        Self { no_small, finite }
    }
}

/// Standard-error bound used by [`FitOptions::no_small`]
pub const NO_SMALL_MAX_STD_ERROR: f64 = 0.1;

/// Tail size below which an uncorrected fit is flagged as biased
pub const FINITE_SIZE_WARNING_TAIL: usize = 50;

/// Score of one evaluated xmin candidate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandidateScore {
    /// Cutoff evaluated
    pub xmin: f64,
    /// Raw (uncorrected) exponent estimate
    pub alpha: f64,
    /// Log-likelihood of the tail at the raw exponent
    pub log_likelihood: f64,
    /// KS distance of the fit
    pub ks_distance: f64,
    /// Observations at or above the cutoff
    pub tail_len: usize,
}

/// Best-supported power-law model for one sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitResult {
    /// Scaling exponent (finite-size corrected if requested)
    pub alpha: f64,
    /// Selected lower cutoff, always one of the grid candidates
    pub xmin: f64,
    /// Log-likelihood of the tail at the reported (alpha, xmin)
    pub log_likelihood: f64,
    /// KS distance that won the selection
    pub ks_distance: f64,
    /// Observations at or above xmin
    pub tail_len: usize,
    /// Model family that was fitted
    pub model: ModelKind,
}

impl fmt::Display for FitResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PowerLaw({}, alpha={:.4}, xmin={:.4}, logL={:.4}, D={:.4}, n_tail={})",
            self.model, self.alpha, self.xmin, self.log_likelihood, self.ks_distance, self.tail_len
        )
    }
}

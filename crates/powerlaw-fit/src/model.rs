//! Power-law model families
//!
//! The grid search is generic over [`PowerLawModel`], which bundles the
//! exponent estimator, the log-likelihood and the KS distance for one family.
//! [`Continuous`] is the default; [`Discrete`] is only used when explicitly
//! selected.

use crate::goodness::{continuous_ks_distance, discrete_ks_distance};
use crate::mle::{
    continuous_alpha, continuous_log_likelihood, discrete_alpha, discrete_log_likelihood,
    finite_size_correction, Estimate,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tolerance when deciding whether a grid candidate is an integer
const INTEGRAL_TOLERANCE: f64 = 1e-9;

/// A power-law family that can be fitted to a tail
pub trait PowerLawModel: Send + Sync {
    /// Which family this is
    fn kind(&self) -> ModelKind;

    /// Map a grid candidate to the cutoff actually used, or `None` to skip it
    fn cutoff(&self, candidate: f64) -> Option<f64>;

    /// Maximum-likelihood exponent for an ascending tail, `None` if degenerate
    fn alpha(&self, tail: &[f64], xmin: f64) -> Option<f64>;

    /// Log-likelihood of the tail under (alpha, xmin)
    fn log_likelihood(&self, tail: &[f64], alpha: f64, xmin: f64) -> f64;

    /// KS distance between the tail and the fitted model
    fn ks_distance(&self, tail: &[f64], alpha: f64, xmin: f64) -> f64;

    /// Bias-corrected exponent for a tail of `n` observations
    fn finite_size_correction(&self, alpha: f64, n: usize) -> f64 {
        finite_size_correction(alpha, n)
    }

    /// Exponent and log-likelihood for one cutoff
    fn estimate(&self, tail: &[f64], xmin: f64) -> Option<Estimate> {
        let alpha = self.alpha(tail, xmin)?;
        let log_likelihood = self.log_likelihood(tail, alpha, xmin);
        Some(Estimate {
            alpha,
            log_likelihood,
            tail_len: tail.len(),
        })
    }
}

/// Model family selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    #[default]
    Continuous,
    Discrete,
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Continuous => write!(f, "continuous"),
            Self::Discrete => write!(f, "discrete"),
        }
    }
}

/// Continuous power law with density `(alpha - 1)/xmin · (x/xmin)^(-alpha)`
#[derive(Debug, Clone, Copy, Default)]
pub struct Continuous;

impl PowerLawModel for Continuous {
    fn kind(&self) -> ModelKind {
        ModelKind::Continuous
    }

    fn cutoff(&self, candidate: f64) -> Option<f64> {
        (candidate > 0.0).then_some(candidate)
    }

    fn alpha(&self, tail: &[f64], xmin: f64) -> Option<f64> {
        continuous_alpha(tail, xmin)
    }

    fn log_likelihood(&self, tail: &[f64], alpha: f64, xmin: f64) -> f64 {
        continuous_log_likelihood(tail, alpha, xmin)
    }

    fn ks_distance(&self, tail: &[f64], alpha: f64, xmin: f64) -> f64 {
        continuous_ks_distance(tail, alpha, xmin)
    }
}

/// Discrete power law on the integers `>= xmin`, `P(x) = x^(-alpha) / ζ(alpha, xmin)`
///
/// Only integer cutoffs `>= 1` are evaluated; other grid candidates are
/// skipped. The exponent uses the `xmin - 1/2` approximation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Discrete;

impl PowerLawModel for Discrete {
    fn kind(&self) -> ModelKind {
        ModelKind::Discrete
    }

    fn cutoff(&self, candidate: f64) -> Option<f64> {
        let rounded = candidate.round();
        ((candidate - rounded).abs() <= INTEGRAL_TOLERANCE && rounded >= 1.0).then_some(rounded)
    }

    fn alpha(&self, tail: &[f64], xmin: f64) -> Option<f64> {
        discrete_alpha(tail, xmin)
    }

    fn log_likelihood(&self, tail: &[f64], alpha: f64, xmin: f64) -> f64 {
        discrete_log_likelihood(tail, alpha, xmin)
    }

    fn ks_distance(&self, tail: &[f64], alpha: f64, xmin: f64) -> f64 {
        discrete_ks_distance(tail, alpha, xmin)
    }
}

impl<M: PowerLawModel + ?Sized> PowerLawModel for &M {
    fn kind(&self) -> ModelKind {
        (**self).kind()
    }

    fn cutoff(&self, candidate: f64) -> Option<f64> {
        (**self).cutoff(candidate)
    }

    fn alpha(&self, tail: &[f64], xmin: f64) -> Option<f64> {
        (**self).alpha(tail, xmin)
    }

    fn log_likelihood(&self, tail: &[f64], alpha: f64, xmin: f64) -> f64 {
        (**self).log_likelihood(tail, alpha, xmin)
    }

    fn ks_distance(&self, tail: &[f64], alpha: f64, xmin: f64) -> f64 {
        (**self).ks_distance(tail, alpha, xmin)
    }

    fn finite_size_correction(&self, alpha: f64, n: usize) -> f64 {
        (**self).finite_size_correction(alpha, n)
    }
}

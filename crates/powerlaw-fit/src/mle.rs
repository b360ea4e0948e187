//! Maximum-likelihood estimation of the scaling exponent
//!
//! All functions take the tail as an ascending slice whose elements are all
//! `>= xmin`. A tail is only usable with at least two observations and at
//! least two distinct values; otherwise the exponent is undefined or
//! infinite and the estimators return `None`.

use crate::zeta::hurwitz_zeta;
use serde::{Deserialize, Serialize};

/// Exponent estimate for one candidate cutoff
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    /// Scaling exponent
    pub alpha: f64,
    /// Log-likelihood of the tail under (alpha, xmin)
    pub log_likelihood: f64,
    /// Number of observations in the tail
    pub tail_len: usize,
}

/// True if the ascending tail holds at least two distinct values
pub fn has_two_distinct(tail: &[f64]) -> bool {
    match (tail.first(), tail.last()) {
        (Some(first), Some(last)) => tail.len() >= 2 && first < last,
        _ => false,
    }
}

fn alpha_from_log_sum(n: usize, log_sum: f64) -> Option<f64> {
    if !(log_sum > 0.0) || !log_sum.is_finite() {
        return None;
    }
    let alpha = 1.0 + n as f64 / log_sum;
    (alpha.is_finite() && alpha > 1.0).then_some(alpha)
}

/// Closed-form continuous MLE: `alpha = 1 + n / Σ ln(x / xmin)`
pub fn continuous_alpha(tail: &[f64], xmin: f64) -> Option<f64> {
    if !(xmin > 0.0) || !has_two_distinct(tail) {
        return None;
    }
    let log_sum: f64 = tail.iter().map(|&x| (x / xmin).ln()).sum();
    alpha_from_log_sum(tail.len(), log_sum)
}

/// Continuous log-likelihood: `n ln((alpha - 1) / xmin) - alpha Σ ln(x / xmin)`
pub fn continuous_log_likelihood(tail: &[f64], alpha: f64, xmin: f64) -> f64 {
    let n = tail.len() as f64;
    let log_sum: f64 = tail.iter().map(|&x| (x / xmin).ln()).sum();
    n * ((alpha - 1.0) / xmin).ln() - alpha * log_sum
}

/// Approximate discrete MLE: `alpha = 1 + n / Σ ln(x / (xmin - 1/2))`
///
/// Requires `xmin >= 1`.
pub fn discrete_alpha(tail: &[f64], xmin: f64) -> Option<f64> {
    if !(xmin >= 1.0) || !has_two_distinct(tail) {
        return None;
    }
    let shifted = xmin - 0.5;
    let log_sum: f64 = tail.iter().map(|&x| (x / shifted).ln()).sum();
    alpha_from_log_sum(tail.len(), log_sum)
}

/// Discrete log-likelihood: `-n ln ζ(alpha, xmin) - alpha Σ ln x`
pub fn discrete_log_likelihood(tail: &[f64], alpha: f64, xmin: f64) -> f64 {
    let n = tail.len() as f64;
    let log_sum: f64 = tail.iter().map(|&x| x.ln()).sum();
    -n * hurwitz_zeta(alpha, xmin).ln() - alpha * log_sum
}

/// Small-sample bias correction `alpha (n - 1) / n + 1 / n`
///
/// The adjustment vanishes as `n` grows.
pub fn finite_size_correction(alpha: f64, n: usize) -> f64 {
    let n = n as f64;
    alpha * (n - 1.0) / n + 1.0 / n
}

/// Asymptotic standard error of the exponent, `(alpha - 1) / sqrt(n)`
pub fn alpha_standard_error(alpha: f64, n: usize) -> f64 {
    (alpha - 1.0) / (n as f64).sqrt()
}

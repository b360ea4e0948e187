//! Synthetic samples with known power-law parameters
//!
//! Random generators take an injected RNG; the `quantile_*` variants place
//! observations at evenly spaced quantiles and are fully deterministic.

use rand::Rng;
use rand_distr::{Distribution, Pareto, Uniform};

/// `n` draws from a continuous power law with exponent `alpha` above `xmin`
///
/// # Panics
/// Panics if `alpha <= 1` or `xmin <= 0`.
pub fn continuous_sample<R: Rng + ?Sized>(rng: &mut R, n: usize, alpha: f64, xmin: f64) -> Vec<f64> {
    let pareto = Pareto::new(xmin, alpha - 1.0).expect("alpha > 1 and xmin > 0");
    (0..n).map(|_| pareto.sample(rng)).collect()
}

/// `n` draws from the discrete power law on integers `>= xmin`
///
/// Uses the continuous approximation `floor((xmin - 1/2)(1 - u)^(-1/(alpha - 1)) + 1/2)`.
pub fn discrete_sample<R: Rng + ?Sized>(rng: &mut R, n: usize, alpha: f64, xmin: f64) -> Vec<f64> {
    let uniform = Uniform::new(0.0, 1.0);
    (0..n)
        .map(|_| {
            let u: f64 = uniform.sample(rng);
            ((xmin - 0.5) * (1.0 - u).powf(-1.0 / (alpha - 1.0)) + 0.5).floor()
        })
        .collect()
}

/// Power-law tail with a uniform body below the cutoff
///
/// `n_body` uniform draws on `[body_low, xmin)` followed by `n_tail` power-law
/// draws above `xmin`.
pub fn mixed_sample<R: Rng + ?Sized>(
    rng: &mut R,
    n_body: usize,
    body_low: f64,
    n_tail: usize,
    alpha: f64,
    xmin: f64,
) -> Vec<f64> {
    let body = Uniform::new(body_low, xmin);
    let mut data: Vec<f64> = (0..n_body).map(|_| body.sample(rng)).collect();
    data.extend(continuous_sample(rng, n_tail, alpha, xmin));
    data
}

/// Observations at the `(i + 1/2)/n` quantiles of a continuous power law
pub fn quantile_sample(n: usize, alpha: f64, xmin: f64) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let u = (i as f64 + 0.5) / n as f64;
            xmin * (1.0 - u).powf(-1.0 / (alpha - 1.0))
        })
        .collect()
}

/// Deterministic uniform body on `[body_low, xmin)` followed by [`quantile_sample`]
pub fn quantile_mixed_sample(
    n_body: usize,
    body_low: f64,
    n_tail: usize,
    alpha: f64,
    xmin: f64,
) -> Vec<f64> {
    let mut data: Vec<f64> = (0..n_body)
        .map(|i| body_low + (xmin - body_low) * (i as f64 + 0.5) / n_body as f64)
        .collect();
    data.extend(quantile_sample(n_tail, alpha, xmin));
    data
}

//! Kolmogorov–Smirnov distance between a tail and a fitted power law
//!
//! The distance is used only to rank xmin candidates against each other; no
//! p-value is attached to it.

use crate::zeta::hurwitz_zeta;

/// Continuous power-law CDF on `[xmin, ∞)`
pub fn continuous_cdf(x: f64, alpha: f64, xmin: f64) -> f64 {
    1.0 - (x / xmin).powf(1.0 - alpha)
}

/// One-sample KS statistic against the continuous model
///
/// `tail` must be ascending with every element `>= xmin`. Both sides of each
/// empirical step are compared:
/// `max_i max(i/n - F(x_i), F(x_i) - (i-1)/n)`.
pub fn continuous_ks_distance(tail: &[f64], alpha: f64, xmin: f64) -> f64 {
    let n = tail.len() as f64;
    tail.iter().enumerate().fold(0.0, |d: f64, (i, &x)| {
        let cdf = continuous_cdf(x, alpha, xmin);
        let above = (i + 1) as f64 / n - cdf;
        let below = cdf - i as f64 / n;
        d.max(above).max(below)
    })
}

/// Discrete power-law CDF `P(X <= x)` for integer `x >= xmin`, given `ζ(alpha, xmin)`
fn discrete_cdf(x: f64, alpha: f64, norm: f64) -> f64 {
    1.0 - hurwitz_zeta(alpha, x + 1.0) / norm
}

/// KS statistic against the discrete model
///
/// `tail` must be ascending, integer valued, and `>= xmin`. Between observed
/// values the empirical CDF is flat while the model CDF rises, so each gap
/// is checked at its right-most integer as well.
pub fn discrete_ks_distance(tail: &[f64], alpha: f64, xmin: f64) -> f64 {
    let n = tail.len() as f64;
    let norm = hurwitz_zeta(alpha, xmin);
    let mut d: f64 = 0.0;
    let mut below = 0.0; // empirical CDF just before the current value
    let mut prev_end = xmin - 1.0;

    let mut i = 0;
    while i < tail.len() {
        let value = tail[i];
        let mut j = i;
        while j < tail.len() && tail[j] == value {
            j += 1;
        }

        // Gap (prev_end, value): empirical CDF stays at `below`
        if value - 1.0 > prev_end {
            d = d.max((discrete_cdf(value - 1.0, alpha, norm) - below).abs());
        }

        let empirical = j as f64 / n;
        d = d.max((empirical - discrete_cdf(value, alpha, norm)).abs());

        below = empirical;
        prev_end = value;
        i = j;
    }
    d
}

//! Hurwitz zeta function for the discrete power-law normalisation
//!
//! ζ(s, q) = Σ_{k≥0} (q + k)^(-s), evaluated by summing the first terms
//! directly and closing the remainder with the Euler–Maclaurin formula.

/// Terms summed directly before the asymptotic tail
const DIRECT_TERMS: usize = 10;

/// B_2, B_4, ..., B_14
const BERNOULLI_EVEN: [f64; 7] = [
    1.0 / 6.0,
    -1.0 / 30.0,
    1.0 / 42.0,
    -1.0 / 30.0,
    5.0 / 66.0,
    -691.0 / 2730.0,
    7.0 / 6.0,
];

/// Hurwitz zeta ζ(s, q) for `s > 1`, `q > 0`
///
/// Returns NaN outside that domain.
///
/// # Examples
///
/// ```rust
/// use powerlaw_fit::zeta::hurwitz_zeta;
///
/// let z = hurwitz_zeta(2.0, 1.0);
/// assert!((z - std::f64::consts::PI.powi(2) / 6.0).abs() < 1e-14);
/// ```
pub fn hurwitz_zeta(s: f64, q: f64) -> f64 {
    if !(s > 1.0) || !(q > 0.0) || !s.is_finite() || !q.is_finite() {
        return f64::NAN;
    }

    let mut sum = 0.0;
    for k in 0..DIRECT_TERMS {
        sum += (q + k as f64).powf(-s);
    }

    let a = q + DIRECT_TERMS as f64;
    sum += a.powf(1.0 - s) / (s - 1.0);
    sum += 0.5 * a.powf(-s);

    // c_j = s(s+1)...(s+2j-2) a^(1-s-2j) / (2j)!
    let mut c = s * a.powf(-s - 1.0) / 2.0;
    for (idx, b) in BERNOULLI_EVEN.iter().enumerate() {
        let j = (idx + 1) as f64;
        sum += b * c;
        c *= (s + 2.0 * j - 1.0) * (s + 2.0 * j) / ((2.0 * j + 1.0) * (2.0 * j + 2.0) * a * a);
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_riemann_values() {
        assert_relative_eq!(hurwitz_zeta(2.0, 1.0), PI * PI / 6.0, epsilon = 1e-14);
        assert_relative_eq!(hurwitz_zeta(3.0, 1.0), 1.2020569031595942, epsilon = 1e-14);
        assert_relative_eq!(hurwitz_zeta(4.0, 1.0), PI.powi(4) / 90.0, epsilon = 1e-14);
        assert_relative_eq!(hurwitz_zeta(1.5, 1.0), 2.612375348685488, epsilon = 1e-12);
    }

    #[test]
    fn test_shift_identity() {
        // ζ(s, q) = q^(-s) + ζ(s, q + 1)
        for &(s, q) in &[(1.8, 1.0), (2.5, 3.0), (3.2, 0.5), (1.2, 40.0)] {
            assert_relative_eq!(
                hurwitz_zeta(s, q),
                q.powf(-s) + hurwitz_zeta(s, q + 1.0),
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn test_near_pole() {
        // ζ(1 + ε) ≈ 1/ε + γ
        let z = hurwitz_zeta(1.01, 1.0);
        assert!((z - 100.5779433).abs() < 1e-6);
    }

    #[test]
    fn test_outside_domain() {
        assert!(hurwitz_zeta(1.0, 1.0).is_nan());
        assert!(hurwitz_zeta(0.5, 1.0).is_nan());
        assert!(hurwitz_zeta(2.0, 0.0).is_nan());
        assert!(hurwitz_zeta(f64::NAN, 1.0).is_nan());
    }
}

//! Utility functions for working with data slices

use crate::{Error, Numeric, Result};

/// Sort data and return a new vector
///
/// Handles NaN values by placing them at the end.
///
/// # Examples
///
/// ```rust
/// use powerlaw_core::utils::sorted;
///
/// let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
/// assert_eq!(sorted(&data), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
/// ```
pub fn sorted(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sort_in_place(&mut sorted);
    sorted
}

/// Sort a buffer in place, NaN values last
pub fn sort_in_place(data: &mut [f64]) {
    data.sort_by(|a, b| a.total_cmp(b));
    // total_cmp puts negative NaN first; move any NaN run to the end
    let nan_prefix = data.iter().take_while(|x| x.is_nan()).count();
    if nan_prefix > 0 {
        data.rotate_left(nan_prefix);
    }
}

/// Index of the first element `>= threshold` in ascending data
///
/// # Examples
///
/// ```rust
/// use powerlaw_core::utils::tail_start;
///
/// let data = [1.0, 2.0, 2.0, 3.0];
/// assert_eq!(tail_start(&data, 2.0), 1);
/// assert_eq!(tail_start(&data, 4.0), 4);
/// ```
pub fn tail_start(sorted: &[f64], threshold: f64) -> usize {
    sorted.partition_point(|&x| x < threshold)
}

/// Check that a sample can be handed to the estimators
///
/// Rejects empty samples, non-finite values and negative values. Estimators
/// assume their input already passed this check.
pub fn validate_sample<T: Numeric>(sample: &[T]) -> Result<()> {
    if sample.is_empty() {
        return Err(Error::empty_input("sample validation"));
    }
    if sample.iter().any(|x| !x.is_finite()) {
        return Err(Error::non_finite("sample"));
    }
    if let Some((idx, value)) = sample
        .iter()
        .enumerate()
        .find(|(_, x)| x.to_f64() < 0.0)
    {
        return Err(Error::InvalidInput(format!(
            "negative value {value:?} at position {idx}; negative observations are not supported"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_basic() {
        let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
        assert_eq!(sorted(&data), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_sorted_empty() {
        assert_eq!(sorted(&[]), Vec::<f64>::new());
    }

    #[test]
    fn test_sorted_duplicates() {
        let data = vec![3.0, 1.0, 3.0, 2.0, 1.0];
        assert_eq!(sorted(&data), vec![1.0, 1.0, 2.0, 3.0, 3.0]);
    }

    #[test]
    fn test_sorted_with_nan() {
        let data = vec![3.0, f64::NAN, 1.0, -f64::NAN, 2.0];
        let sorted_data = sorted(&data);

        assert_eq!(&sorted_data[..3], &[1.0, 2.0, 3.0]);
        assert!(sorted_data[3].is_nan());
        assert!(sorted_data[4].is_nan());
    }

    #[test]
    fn test_sorted_preserves_original() {
        let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
        let original = data.clone();
        let _ = sorted(&data);
        assert_eq!(data, original);
    }

    #[test]
    fn test_tail_start() {
        let data = [0.0, 1.0, 1.5, 1.5, 2.0, 10.0];
        assert_eq!(tail_start(&data, -1.0), 0);
        assert_eq!(tail_start(&data, 0.0), 0);
        assert_eq!(tail_start(&data, 1.5), 2);
        assert_eq!(tail_start(&data, 1.6), 4);
        assert_eq!(tail_start(&data, 10.0), 5);
        assert_eq!(tail_start(&data, 11.0), 6);
        assert_eq!(tail_start(&[], 1.0), 0);
    }

    #[test]
    fn test_validate_sample() {
        assert!(validate_sample(&[0.0, 1.0, 2.5]).is_ok());
        assert!(validate_sample(&[3u32, 0, 9]).is_ok());

        assert!(matches!(
            validate_sample::<f64>(&[]),
            Err(Error::InsufficientData { .. })
        ));
        assert!(matches!(
            validate_sample(&[1.0, f64::NAN]),
            Err(Error::InvalidInput(_))
        ));

        let err = validate_sample(&[1.0, -0.5, 2.0]).unwrap_err();
        assert!(err.to_string().contains("position 1"));

        assert!(validate_sample(&[4i64, -2]).is_err());
    }
}

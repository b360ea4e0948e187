//! Property-based tests for the grid search
//!
//! These hold for any positive sample and any grid that fits inside it.

use powerlaw_fit::{FitOptions, PowerLawFitter, XminGrid};
use proptest::prelude::*;

fn positive_sample() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(1.0f64..100.0, 20..200)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_fit_is_deterministic(sample in positive_sample(), no_small: bool, finite: bool) {
        let fitter = PowerLawFitter::continuous().with_options(FitOptions::new(no_small, finite));
        let first = fitter.fit(&sample);
        let second = fitter.fit(&sample);
        match (first, second) {
            (Ok(a), Ok(b)) => prop_assert_eq!(a, b),
            (Err(a), Err(b)) => prop_assert_eq!(a.to_string(), b.to_string()),
            _ => prop_assert!(false, "repeated fits disagreed"),
        }
    }

    #[test]
    fn prop_result_is_within_bounds(sample in positive_sample()) {
        let grid = XminGrid::default();
        let fit = PowerLawFitter::continuous().fit(&sample).unwrap();

        prop_assert!(fit.alpha > 1.0);
        prop_assert!(fit.ks_distance >= 0.0 && fit.ks_distance <= 1.0);
        prop_assert!(fit.tail_len >= 2 && fit.tail_len <= sample.len());
        prop_assert!(grid.candidates().any(|c| c == fit.xmin));
        prop_assert_eq!(
            fit.tail_len,
            sample.iter().filter(|&&x| x >= fit.xmin).count()
        );
    }

    #[test]
    fn prop_tail_shrinks_along_grid(sample in positive_sample()) {
        let scores = PowerLawFitter::continuous().evaluate(&sample);
        prop_assert!(scores.windows(2).all(|w| w[0].xmin < w[1].xmin));
        prop_assert!(scores.windows(2).all(|w| w[0].tail_len >= w[1].tail_len));
    }

    #[test]
    fn prop_selected_candidate_minimises_ks(sample in positive_sample()) {
        let fitter = PowerLawFitter::continuous();
        let scores = fitter.evaluate(&sample);
        let fit = fitter.fit(&sample).unwrap();

        for score in &scores {
            prop_assert!(fit.ks_distance <= score.ks_distance);
            if score.ks_distance == fit.ks_distance {
                prop_assert!(fit.xmin <= score.xmin);
            }
        }
    }

    #[test]
    fn prop_no_small_only_drops_candidates(sample in positive_sample()) {
        let all = PowerLawFitter::continuous().evaluate(&sample);
        let truncated = PowerLawFitter::continuous().no_small(true).evaluate(&sample);

        prop_assert!(truncated.len() <= all.len());
        prop_assert_eq!(&all[..truncated.len()], &truncated[..]);
    }

    #[test]
    fn prop_input_order_is_irrelevant(mut sample in positive_sample()) {
        let fitter = PowerLawFitter::continuous();
        let before = fitter.fit(&sample).unwrap();
        sample.reverse();
        let after = fitter.fit(&sample).unwrap();
        prop_assert_eq!(before, after);
    }
}

#[test]
fn test_inverted_grid_always_degenerate() {
    let grid = XminGrid::new(3.5, 0.01, 1.5).unwrap();
    let err = PowerLawFitter::continuous()
        .with_grid(grid)
        .fit(&[1.0, 2.0, 3.0, 4.0, 5.0])
        .unwrap_err();
    assert!(err.is_degenerate_fit());
}

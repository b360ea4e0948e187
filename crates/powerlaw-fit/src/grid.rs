//! Candidate xmin grid
//!
//! A grid is the inclusive arithmetic sequence `start, start + increment, …`
//! up to `end`. Candidates are computed as `start + k * increment` rather
//! than by repeated addition so long grids do not drift, and the number of
//! candidates is fixed when the grid is built.

use powerlaw_core::{Error, Result};

/// Default first xmin candidate
pub const DEFAULT_START_XMIN: f64 = 1.5;

/// Default spacing between xmin candidates
pub const DEFAULT_INCREMENT_XMIN: f64 = 0.01;

/// Default last xmin candidate
pub const DEFAULT_END_XMIN: f64 = 3.5;

/// Upper bound on the number of candidates a grid may enumerate
pub const MAX_CANDIDATES: usize = 10_000_000;

/// Relative slack (in units of the increment) when comparing against `end`
const END_TOLERANCE: f64 = 1e-9;

/// Range of candidate cutoffs evaluated by the grid search
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XminGrid {
    start: f64,
    increment: f64,
    end: f64,
    count: usize,
}

impl XminGrid {
    /// Create a grid
    ///
    /// Rejects non-finite bounds, a non-positive increment, an increment
    /// too small to move between floats at the grid's magnitude, and grids
    /// with more than [`MAX_CANDIDATES`] candidates. An inverted range
    /// (`start > end`) is accepted here but yields no candidates, so fitting
    /// against it fails with [`Error::DegenerateFit`].
    pub fn new(start: f64, increment: f64, end: f64) -> Result<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(Error::InvalidParameter(format!(
                "xmin grid bounds must be finite, got start={start}, end={end}"
            )));
        }
        if !(increment > 0.0) || !increment.is_finite() {
            return Err(Error::InvalidParameter(format!(
                "xmin increment must be positive, got {increment}"
            )));
        }
        let magnitude = start.abs().max(end.abs());
        if magnitude + increment == magnitude {
            return Err(Error::InvalidParameter(format!(
                "xmin increment {increment} is below float resolution at {magnitude}"
            )));
        }

        let count = if start <= end {
            let steps = ((end - start) / increment + END_TOLERANCE).floor();
            if !(steps < MAX_CANDIDATES as f64) {
                return Err(Error::InvalidParameter(format!(
                    "xmin grid would enumerate more than {MAX_CANDIDATES} candidates"
                )));
            }
            steps as usize + 1
        } else {
            0
        };

        Ok(Self {
            start,
            increment,
            end,
            count,
        })
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn increment(&self) -> f64 {
        self.increment
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    /// Iterate the candidates in ascending order
    pub fn candidates(&self) -> Candidates {
        Candidates {
            grid: *self,
            next: 0,
        }
    }

    /// Number of candidates
    pub fn len(&self) -> usize {
        self.count
    }

    /// True for an inverted range
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Fail with [`Error::DegenerateFit`] if the grid has no candidates
    pub fn ensure_non_empty(&self) -> Result<()> {
        if self.is_empty() {
            return Err(Error::degenerate(format!(
                "xmin grid is empty (start {} > end {})",
                self.start, self.end
            )));
        }
        Ok(())
    }
}

impl Default for XminGrid {
    fn default() -> Self {
        Self {
            start: DEFAULT_START_XMIN,
            increment: DEFAULT_INCREMENT_XMIN,
            end: DEFAULT_END_XMIN,
            count: 201,
        }
    }
}

/// Iterator over the candidates of an [`XminGrid`]
#[derive(Debug, Clone)]
pub struct Candidates {
    grid: XminGrid,
    next: usize,
}

impl Iterator for Candidates {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.next >= self.grid.count {
            return None;
        }
        let value = self.grid.start + self.next as f64 * self.grid.increment;
        self.next += 1;
        Some(value.min(self.grid.end))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.grid.count.saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Candidates {}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_inclusive_enumeration() {
        let grid = XminGrid::new(1.0, 0.5, 3.0).unwrap();
        let candidates: Vec<f64> = grid.candidates().collect();
        assert_eq!(candidates, vec![1.0, 1.5, 2.0, 2.5, 3.0]);
        assert_eq!(grid.len(), 5);
        assert!(!grid.is_empty());
    }

    #[test]
    fn test_default_grid() {
        let grid = XminGrid::default();
        assert_eq!(grid.start(), 1.5);
        assert_eq!(grid.increment(), 0.01);
        assert_eq!(grid.end(), 3.5);
        // 1.5, 1.51, ..., 3.5
        assert_eq!(grid.len(), 201);
        let last = grid.candidates().last().unwrap();
        assert_relative_eq!(last, 3.5, epsilon = 1e-12);
    }

    #[test]
    fn test_end_not_on_step() {
        let grid = XminGrid::new(1.0, 0.3, 2.0).unwrap();
        let candidates: Vec<f64> = grid.candidates().collect();
        assert_eq!(candidates.len(), 4);
        assert!(candidates.iter().all(|&x| x <= 2.0));
    }

    #[test]
    fn test_single_point_grid() {
        let grid = XminGrid::new(2.0, 1.0, 2.0).unwrap();
        assert_eq!(grid.candidates().collect::<Vec<_>>(), vec![2.0]);
    }

    #[test]
    fn test_inverted_grid_is_empty() {
        let grid = XminGrid::new(3.0, 0.5, 1.0).unwrap();
        assert!(grid.is_empty());
        assert_eq!(grid.len(), 0);

        let err = grid.ensure_non_empty().unwrap_err();
        assert!(err.is_degenerate_fit());
    }

    #[test]
    fn test_invalid_increment() {
        assert!(matches!(
            XminGrid::new(1.0, 0.0, 2.0),
            Err(Error::InvalidParameter(_))
        ));
        assert!(matches!(
            XminGrid::new(1.0, -0.1, 2.0),
            Err(Error::InvalidParameter(_))
        ));
        assert!(XminGrid::new(1.0, f64::NAN, 2.0).is_err());
    }

    #[test]
    fn test_invalid_bounds() {
        assert!(XminGrid::new(f64::NAN, 0.1, 2.0).is_err());
        assert!(XminGrid::new(1.0, 0.1, f64::INFINITY).is_err());
    }

    #[test]
    fn test_too_many_candidates() {
        assert!(XminGrid::new(0.0, 1e-12, 1.0).is_err());
    }

    #[test]
    fn test_increment_below_float_resolution() {
        // 1e18 + 1e-6 == 1e18, so every candidate would repeat the start
        let err = XminGrid::new(1e18, 1e-6, 1e18).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));
        assert!(XminGrid::new(1e300, 1.0, 2e300).is_err());
        assert!(XminGrid::new(1.0, 1e-6, 1e18).is_err());
    }

    #[test]
    fn test_enumeration_is_bounded_by_len() {
        for grid in [
            XminGrid::default(),
            XminGrid::new(1.0, 0.3, 2.0).unwrap(),
            XminGrid::new(1e15, 0.5, 1e15 + 4.0).unwrap(),
            XminGrid::new(0.0, 1e-6, 1.0).unwrap(),
        ] {
            let candidates: Vec<f64> = grid.candidates().collect();
            assert_eq!(candidates.len(), grid.len());
            assert_eq!(grid.candidates().len(), grid.len());
            assert!(grid.len() <= MAX_CANDIDATES);
            assert!(candidates.windows(2).all(|w| w[0] < w[1]));
            assert!(candidates.iter().all(|&x| x >= grid.start() && x <= grid.end()));
        }
    }

    #[test]
    fn test_default_matches_constructed() {
        let built =
            XminGrid::new(DEFAULT_START_XMIN, DEFAULT_INCREMENT_XMIN, DEFAULT_END_XMIN).unwrap();
        assert_eq!(built, XminGrid::default());
    }
}

//! Grid search over candidate cutoffs
//!
//! Every candidate is fitted by maximum likelihood and scored by its KS
//! distance; the smallest distance wins, ties going to the smaller cutoff
//! (the larger tail). Candidates whose tail is degenerate are skipped. The
//! search only fails when no candidate survives.

use crate::grid::XminGrid;
use crate::mle::alpha_standard_error;
use crate::model::PowerLawModel;
use crate::types::{CandidateScore, FitOptions, FitResult, NO_SMALL_MAX_STD_ERROR};
use powerlaw_core::utils::tail_start;
use powerlaw_core::{Error, Result};
use tracing::{debug, instrument, trace};

/// Scores cutoffs from an [`XminGrid`] under one model and policy
#[derive(Debug, Clone)]
pub struct GridSearch<M> {
    model: M,
    grid: XminGrid,
    options: FitOptions,
}

impl<M: PowerLawModel> GridSearch<M> {
    pub fn new(model: M, grid: XminGrid, options: FitOptions) -> Self {
        Self {
            model,
            grid,
            options,
        }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn grid(&self) -> &XminGrid {
        &self.grid
    }

    pub fn options(&self) -> FitOptions {
        self.options
    }

    /// Score every surviving candidate in ascending cutoff order
    ///
    /// `sorted` must be ascending. With `no_small` set, the scan stops at the
    /// first candidate whose exponent standard error exceeds the bound, and
    /// that candidate and all larger ones are dropped.
    pub fn evaluate(&self, sorted: &[f64]) -> Vec<CandidateScore> {
        let mut scores = Vec::new();

        for candidate in self.grid.candidates() {
            let Some(xmin) = self.model.cutoff(candidate) else {
                trace!(candidate, "cutoff not admissible for model");
                continue;
            };

            let tail = &sorted[tail_start(sorted, xmin)..];
            let Some(estimate) = self.model.estimate(tail, xmin) else {
                trace!(xmin, tail_len = tail.len(), "degenerate tail");
                continue;
            };
            let alpha = estimate.alpha;

            if self.options.no_small
                && alpha_standard_error(alpha, tail.len()) > NO_SMALL_MAX_STD_ERROR
            {
                debug!(
                    xmin,
                    alpha,
                    tail_len = tail.len(),
                    "truncating xmin scan, tail too small"
                );
                break;
            }

            let ks_distance = self.model.ks_distance(tail, alpha, xmin);
            if !ks_distance.is_finite() {
                trace!(xmin, alpha, "non-finite KS distance");
                continue;
            }

            scores.push(CandidateScore {
                xmin,
                alpha,
                log_likelihood: estimate.log_likelihood,
                ks_distance,
                tail_len: estimate.tail_len,
            });
        }

        scores
    }

    /// Select the best cutoff for an ascending sample
    #[instrument(level = "debug", skip(self, sorted), fields(n = sorted.len()))]
    pub fn search(&self, sorted: &[f64]) -> Result<FitResult> {
        self.grid.ensure_non_empty()?;

        let scores = self.evaluate(sorted);
        let best = select_best(&scores).ok_or_else(|| {
            Error::degenerate(format!(
                "no xmin candidate in [{}, {}] produced a usable tail",
                self.grid.start(),
                self.grid.end()
            ))
        })?;

        let (alpha, log_likelihood) = if self.options.finite {
            let tail = &sorted[tail_start(sorted, best.xmin)..];
            let alpha = self.model.finite_size_correction(best.alpha, best.tail_len);
            (alpha, self.model.log_likelihood(tail, alpha, best.xmin))
        } else {
            (best.alpha, best.log_likelihood)
        };

        debug!(
            evaluated = scores.len(),
            xmin = best.xmin,
            alpha,
            ks = best.ks_distance,
            tail_len = best.tail_len,
            "grid search complete"
        );

        Ok(FitResult {
            alpha,
            xmin: best.xmin,
            log_likelihood,
            ks_distance: best.ks_distance,
            tail_len: best.tail_len,
            model: self.model.kind(),
        })
    }
}

/// Candidate with the smallest KS distance; the first (smallest xmin) wins ties
pub fn select_best(scores: &[CandidateScore]) -> Option<&CandidateScore> {
    scores.iter().fold(None, |best: Option<&CandidateScore>, score| match best {
        Some(current) if current.ks_distance <= score.ks_distance => Some(current),
        _ => Some(score),
    })
}

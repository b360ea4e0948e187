//! Sampling with replacement for bootstrap resampling
//!
//! Randomness is always injected: callers pass the RNG, or a base seed from
//! which each iteration derives its own generator. Iteration `i` uses
//! `base_seed + i`, so a run is reproducible no matter which thread executes
//! which iteration.

use rand::distributions::{Distribution, Uniform};
use rand::{Rng, SeedableRng};

/// Derive the generator for one bootstrap iteration
pub fn iteration_rng<R: SeedableRng>(base_seed: u64, iteration: usize) -> R {
    R::seed_from_u64(base_seed.wrapping_add(iteration as u64))
}

/// Draw a fresh base seed from the thread-local generator
pub fn random_base_seed() -> u64 {
    rand::thread_rng().gen()
}

/// Fill `indices` with `n_samples` uniform draws from `[0, n_samples)`
pub fn generate_indices<R: Rng + ?Sized>(rng: &mut R, n_samples: usize, indices: &mut Vec<usize>) {
    indices.clear();
    if n_samples == 0 {
        return;
    }
    let dist = Uniform::new(0, n_samples);
    indices.extend((0..n_samples).map(|_| dist.sample(rng)));
}

/// Reusable buffers for drawing resamples of one source sample
#[derive(Debug, Default, Clone)]
pub struct ResampleWorkspace {
    indices: Vec<usize>,
    values: Vec<f64>,
}

impl ResampleWorkspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a workspace with buffers sized for `n` observations
    pub fn with_capacity(n: usize) -> Self {
        Self {
            indices: Vec::with_capacity(n),
            values: Vec::with_capacity(n),
        }
    }

    /// Draw a same-size resample of `source` with replacement
    ///
    /// The returned buffer stays valid until the next call and may be
    /// reordered in place by the caller.
    pub fn resample<R: Rng + ?Sized>(&mut self, rng: &mut R, source: &[f64]) -> &mut [f64] {
        generate_indices(rng, source.len(), &mut self.indices);
        self.values.clear();
        self.values
            .extend(self.indices.iter().map(|&idx| source[idx]));
        &mut self.values
    }

    /// Indices used by the most recent resample
    pub fn last_indices(&self) -> &[usize] {
        &self.indices
    }
}

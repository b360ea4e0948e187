//! Reading observations from a text file

use anyhow::{bail, Context, Result};
use powerlaw_core::utils::validate_sample;
use std::fs;
use std::path::Path;

/// Read whitespace-separated values from `path`
///
/// Rejects malformed tokens, an empty file, non-finite and negative values,
/// and with `discrete` set any value that is not an integer.
pub fn read_sample(path: &Path, discrete: bool) -> Result<Vec<f64>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("unable to open {}", path.display()))?;
    let sample = parse_sample(&text).with_context(|| format!("invalid input in {}", path.display()))?;
    check_sample(&sample, discrete)?;
    Ok(sample)
}

/// Parse every whitespace-separated token as a number
pub fn parse_sample(text: &str) -> Result<Vec<f64>> {
    text.split_whitespace()
        .enumerate()
        .map(|(idx, token)| {
            token
                .parse::<f64>()
                .with_context(|| format!("malformed value '{token}' at token {}", idx + 1))
        })
        .collect()
}

fn check_sample(sample: &[f64], discrete: bool) -> Result<()> {
    validate_sample(sample)?;
    if discrete {
        if let Some(idx) = sample.iter().position(|x| x.fract() != 0.0) {
            bail!(
                "discrete model requires integer values, found {} at position {idx}",
                sample[idx]
            );
        }
    }
    Ok(())
}

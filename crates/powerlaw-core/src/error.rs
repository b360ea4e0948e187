//! Error types for power-law estimation
//!
//! Provides a unified error type for all powerlaw crates.

use thiserror::Error;

/// Core error type for power-law estimation
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// No xmin candidate produced a usable fit
    #[error("Degenerate fit: {0}")]
    DegenerateFit(String),

    /// Every bootstrap iteration failed to produce a fit
    #[error("Bootstrap failed: none of the {iterations} iterations produced a fit")]
    BootstrapFailed { iterations: usize },

    /// Threading or parallelization error
    #[error("Execution error: {0}")]
    Execution(String),

    /// IO error (for file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for empty input
    pub fn empty_input(_operation: &str) -> Self {
        Self::InsufficientData {
            expected: 1,
            actual: 0,
        }
    }

    /// Create a degenerate-fit error
    pub fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegenerateFit(reason.into())
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::InvalidInput(format!("{context} contains NaN or infinite values"))
    }

    /// True when the failure is a fit that could not be produced, as opposed
    /// to bad input or configuration.
    pub fn is_degenerate_fit(&self) -> bool {
        matches!(self, Self::DegenerateFit(_) | Self::BootstrapFailed { .. })
    }
}

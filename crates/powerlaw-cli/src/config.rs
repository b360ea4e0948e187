//! Validated run configuration
//!
//! Everything that can be checked without reading the input is checked here,
//! before any fitting starts.

use crate::cli::{Cli, OutputFormat};
use powerlaw_fit::{FitOptions, XminGrid};
use std::path::PathBuf;
use thiserror::Error;

/// Problems with the flags themselves
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("option '--input' is required")]
    MissingInput,

    #[error("invalid xmin grid: {0}")]
    Grid(#[from] powerlaw_core::Error),

    #[error("--bootstrap-iterations must be at least 1")]
    NoIterations,

    #[error("--threads must be at least 1")]
    NoThreads,
}

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input: PathBuf,
    pub grid: XminGrid,
    pub options: FitOptions,
    pub discrete: bool,
    pub bootstrap: Option<BootstrapConfig>,
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy)]
pub struct BootstrapConfig {
    pub iterations: usize,
    pub seed: Option<u64>,
    pub threads: Option<usize>,
    pub verbose: bool,
}

impl TryFrom<&Cli> for RunConfig {
    type Error = ConfigError;

    fn try_from(cli: &Cli) -> Result<Self, Self::Error> {
        let input = cli.input.clone().ok_or(ConfigError::MissingInput)?;
        let grid = XminGrid::new(cli.start_xmin, cli.increment_xmin, cli.end_xmin)?;

        let bootstrap = if cli.bootstrap {
            if cli.bootstrap_iterations == 0 {
                return Err(ConfigError::NoIterations);
            }
            if cli.threads == Some(0) {
                return Err(ConfigError::NoThreads);
            }
            Some(BootstrapConfig {
                iterations: cli.bootstrap_iterations,
                seed: cli.seed,
                threads: cli.threads,
                verbose: cli.verbose,
            })
        } else {
            None
        };

        Ok(Self {
            input,
            grid,
            options: FitOptions::new(cli.no_small, cli.finite),
            discrete: cli.discrete,
            bootstrap,
            format: cli.format,
        })
    }
}

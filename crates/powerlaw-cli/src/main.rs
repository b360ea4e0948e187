//! plfit - fit a power-law distributional model to data.

mod cli;
mod config;
mod input;
mod output;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use cli::Cli;
use config::{BootstrapConfig, RunConfig};
use output::Report;
use powerlaw_bootstrap::{bootstrap_with, BootstrapResult};
use powerlaw_core::execution::sequential;
use powerlaw_fit::{PowerLawFitter, PowerLawModel};
use std::io;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

const USAGE_HINT: &str = "Use \"plfit --help\" for information about application usage.";

fn setup_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };
    setup_logging(cli.verbose);

    let config = match RunConfig::try_from(&cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!("{USAGE_HINT}");
            return ExitCode::FAILURE;
        }
    };

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &RunConfig) -> Result<()> {
    let sample = input::read_sample(&config.input, config.discrete)?;
    info!(n = sample.len(), input = %config.input.display(), "read sample");

    let report = if config.discrete {
        estimate(config, PowerLawFitter::discrete(), &sample)?
    } else {
        estimate(config, PowerLawFitter::continuous(), &sample)?
    };

    output::write_report(io::stdout().lock(), &report, config.format)
}

fn estimate<M: PowerLawModel>(
    config: &RunConfig,
    fitter: PowerLawFitter<M>,
    sample: &[f64],
) -> Result<Report> {
    let fitter = fitter.with_grid(config.grid).with_options(config.options);

    match config.bootstrap {
        Some(boot) => {
            let result = run_bootstrap(boot, fitter, sample)
                .context("maximum likelihood bootstrap estimation failed, check input")?;
            info!(
                successful = result.successful,
                failed = result.failed,
                elapsed_ms = result.elapsed_ms,
                "bootstrap done"
            );
            Ok(Report::Bootstrap(result))
        }
        None => {
            let fit = fitter
                .fit(sample)
                .context("maximum likelihood single estimation failed, check input")?;
            Ok(Report::Single(fit))
        }
    }
}

fn run_bootstrap<M: PowerLawModel>(
    boot: BootstrapConfig,
    fitter: PowerLawFitter<M>,
    sample: &[f64],
) -> Result<BootstrapResult> {
    #[cfg(feature = "parallel")]
    {
        use powerlaw_core::ParallelEngine;

        if boot.threads != Some(1) {
            let engine = match boot.threads {
                Some(n) => ParallelEngine::with_num_threads(n)?,
                None => ParallelEngine::new(),
            };
            return Ok(bootstrap_with(
                engine,
                fitter,
                sample,
                boot.iterations,
                boot.seed,
                boot.verbose,
            )?);
        }
    }

    #[cfg(not(feature = "parallel"))]
    {
        if boot.threads.is_some_and(|n| n > 1) {
            tracing::warn!("built without parallel support, running bootstrap sequentially");
        }
    }

    Ok(bootstrap_with(
        sequential(),
        fitter,
        sample,
        boot.iterations,
        boot.seed,
        boot.verbose,
    )?)
}

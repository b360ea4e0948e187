//! Command-line flags

use clap::{Parser, ValueEnum};
use powerlaw_bootstrap::DEFAULT_ITERATIONS;
use powerlaw_fit::{DEFAULT_END_XMIN, DEFAULT_INCREMENT_XMIN, DEFAULT_START_XMIN};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "plfit")]
#[command(version)]
#[command(about = "Fits a power-law distributional model to data")]
#[command(
    long_about = "Fits a power-law distributional model to data.\n\n\
    Scans candidate lower cutoffs (xmin) on a regular grid, estimates the scaling \
    exponent (alpha) by maximum likelihood for each, and keeps the cutoff whose fit \
    has the smallest Kolmogorov-Smirnov distance. With --bootstrap the whole \
    procedure is repeated on resamples to estimate standard deviations."
)]
pub struct Cli {
    /// Input file with distribution values in column format
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Use the finite-size correction for the fitted exponent
    #[arg(short, long)]
    pub finite: bool,

    /// Print bootstrap status
    #[arg(short, long)]
    pub verbose: bool,

    /// Truncate the search over xmin values before the finite-size bias becomes significant
    #[arg(short = 's', long = "nosmall")]
    pub no_small: bool,

    /// Run non-parametric bootstrap instead of single estimation
    #[arg(short, long)]
    pub bootstrap: bool,

    /// Start value for the xmin scan
    #[arg(short = 'x', long, default_value_t = DEFAULT_START_XMIN, allow_negative_numbers = true)]
    pub start_xmin: f64,

    /// Increment value for the xmin scan
    #[arg(short = 'y', long, default_value_t = DEFAULT_INCREMENT_XMIN, allow_negative_numbers = true)]
    pub increment_xmin: f64,

    /// End value for the xmin scan
    #[arg(short = 'z', long, default_value_t = DEFAULT_END_XMIN, allow_negative_numbers = true)]
    pub end_xmin: f64,

    /// Bootstrap iterations
    #[arg(short = 'n', long, default_value_t = DEFAULT_ITERATIONS)]
    pub bootstrap_iterations: usize,

    /// Fit the discrete (integer-valued) model; only integer xmin candidates are used
    #[arg(short, long)]
    pub discrete: bool,

    /// Seed for bootstrap resampling
    #[arg(long)]
    pub seed: Option<u64>,

    /// Worker threads for bootstrap iterations (1 runs sequentially)
    #[arg(short, long)]
    pub threads: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    pub format: OutputFormat,
}

/// How results are written to standard output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `Key,Value` line per metric
    Csv,
    /// A single JSON object
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["plfit", "-i", "data.txt"]).unwrap();
        assert_eq!(cli.input, Some(PathBuf::from("data.txt")));
        assert_eq!(cli.start_xmin, 1.5);
        assert_eq!(cli.increment_xmin, 0.01);
        assert_eq!(cli.end_xmin, 3.5);
        assert_eq!(cli.bootstrap_iterations, 1000);
        assert!(!cli.finite && !cli.no_small && !cli.bootstrap && !cli.verbose);
        assert_eq!(cli.format, OutputFormat::Csv);
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::try_parse_from([
            "plfit", "-i", "in.txt", "-f", "-s", "-b", "-v", "-d", "-x", "1", "-y", "0.5", "-z", "4",
            "-n", "20", "-t", "2",
        ])
        .unwrap();
        assert!(cli.finite && cli.no_small && cli.bootstrap && cli.verbose && cli.discrete);
        assert_eq!((cli.start_xmin, cli.increment_xmin, cli.end_xmin), (1.0, 0.5, 4.0));
        assert_eq!(cli.bootstrap_iterations, 20);
        assert_eq!(cli.threads, Some(2));
    }

    #[test]
    fn test_long_flags() {
        let cli = Cli::try_parse_from([
            "plfit",
            "--input",
            "in.txt",
            "--nosmall",
            "--start-xmin",
            "-1",
            "--increment-xmin",
            "0.25",
            "--end-xmin",
            "2",
            "--bootstrap-iterations",
            "5",
            "--seed",
            "17",
            "--format",
            "json",
        ])
        .unwrap();
        assert!(cli.no_small);
        assert_eq!(cli.start_xmin, -1.0);
        assert_eq!(cli.seed, Some(17));
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_malformed_number_rejected() {
        assert!(Cli::try_parse_from(["plfit", "-i", "x", "-y", "abc"]).is_err());
        assert!(Cli::try_parse_from(["plfit", "-i", "x", "-n", "-3"]).is_err());
    }
}

//! Writing results to standard output

use crate::cli::OutputFormat;
use anyhow::Result;
use powerlaw_bootstrap::BootstrapResult;
use powerlaw_fit::FitResult;
use serde::Serialize;
use std::io::Write;

/// Result of one run
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(untagged)]
pub enum Report {
    Single(FitResult),
    Bootstrap(BootstrapResult),
}

impl Report {
    /// `Key,Value` pairs in output order
    pub fn metrics(&self) -> Vec<(&'static str, f64)> {
        match self {
            Self::Single(fit) => vec![
                ("Alpha", fit.alpha),
                ("Xmin", fit.xmin),
                ("Log-likelihood", fit.log_likelihood),
            ],
            Self::Bootstrap(result) => {
                let a = &result.aggregate;
                vec![
                    ("Alpha", a.alpha),
                    ("Xmin", a.xmin),
                    ("Log-likelihood", a.log_likelihood),
                    ("Alpha_sd", a.alpha_sd),
                    ("Xmin_sd", a.xmin_sd),
                    ("Log-likelihood_sd", a.log_likelihood_sd),
                ]
            }
        }
    }
}

pub fn write_report<W: Write>(writer: W, report: &Report, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Csv => write_csv(writer, report),
        OutputFormat::Json => write_json(writer, report),
    }
}

fn write_csv<W: Write>(writer: W, report: &Report) -> Result<()> {
    let mut out = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);
    for (key, value) in report.metrics() {
        out.write_record([key, value.to_string().as_str()])?;
    }
    out.flush()?;
    Ok(())
}

fn write_json<W: Write>(mut writer: W, report: &Report) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, report)?;
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use powerlaw_bootstrap::AggregateResult;
    use powerlaw_fit::ModelKind;

    fn fit() -> FitResult {
        FitResult {
            alpha: 2.5,
            xmin: 2.0,
            log_likelihood: -15.25,
            ks_distance: 0.125,
            tail_len: 7,
            model: ModelKind::Continuous,
        }
    }

    fn render(report: &Report, format: OutputFormat) -> String {
        let mut out = Vec::new();
        write_report(&mut out, report, format).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_single_fit_csv() {
        let text = render(&Report::Single(fit()), OutputFormat::Csv);
        assert_eq!(text, "Alpha,2.5\nXmin,2\nLog-likelihood,-15.25\n");
    }

    #[test]
    fn test_bootstrap_csv() {
        let report = Report::Bootstrap(BootstrapResult {
            aggregate: AggregateResult {
                alpha: 2.5,
                xmin: 1.75,
                log_likelihood: -20.0,
                alpha_sd: 0.125,
                xmin_sd: 0.5,
                log_likelihood_sd: 3.0,
            },
            iterations: 10,
            successful: 10,
            failed: 0,
            model: ModelKind::Continuous,
            elapsed_ms: 3,
        });
        let lines: Vec<String> = render(&report, OutputFormat::Csv)
            .lines()
            .map(str::to_owned)
            .collect();
        assert_eq!(
            lines,
            [
                "Alpha,2.5",
                "Xmin,1.75",
                "Log-likelihood,-20",
                "Alpha_sd,0.125",
                "Xmin_sd,0.5",
                "Log-likelihood_sd,3",
            ]
        );
    }

    #[test]
    fn test_json_carries_diagnostics() {
        let text = render(&Report::Single(fit()), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["alpha"], 2.5);
        assert_eq!(value["tail_len"], 7);
        assert_eq!(value["model"], "continuous");
    }
}

//! abix CLI
//!
//! Write the ABI of every compiled contract artifact to its own JSON file.
//!
//! ```bash
//! # build/contracts/*.json -> abis/*.json
//! abix
//!
//! # Custom directories, created if missing
//! abix --input out/artifacts --output web/src/abis --create-output
//! ```

use abix_exporter::{run, ExtractorConfig, RunReport};
use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "abix")]
#[command(version)]
#[command(about = "Extract standalone ABI files from contract build artifacts", long_about = None)]
struct Cli {
    /// Directory of build artifacts [default: build/contracts]
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Directory the ABI files are written to [default: abis]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON config file; flags given on the command line take precedence
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Create the output directory if it does not exist
    #[arg(long)]
    create_output: bool,

    /// Number of worker threads
    #[arg(short, long)]
    jobs: Option<usize>,

    /// Pretty-print the ABI files
    #[arg(long)]
    pretty: bool,

    /// Report format
    #[arg(long, value_enum, default_value = "text")]
    format: ReportFormat,

    /// Exit with an error if any artifact failed
    #[arg(long)]
    strict: bool,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ReportFormat {
    Text,
    Json,
}

impl Cli {
    /// Defaults, then the config file, then explicit flags
    fn extractor_config(&self) -> Result<ExtractorConfig> {
        let mut config = match &self.config {
            Some(path) => ExtractorConfig::from_file(path)
                .with_context(|| format!("Failed to load config file: {:?}", path))?,
            None => ExtractorConfig::default(),
        };

        if let Some(input) = &self.input {
            config.input_dir = input.clone();
        }
        if let Some(output) = &self.output {
            config.output_dir = output.clone();
        }
        if let Some(jobs) = self.jobs {
            config.jobs = Some(jobs);
        }
        config.create_output_dir |= self.create_output;
        config.pretty |= self.pretty;

        config.validate()?;
        Ok(config)
    }

    fn log_filter(&self) -> EnvFilter {
        let level = match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        };
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    }
}

/// Per-file failures are already reported by the `warn!` events, so the
/// text format only carries the summary line.
fn write_report(out: &mut impl Write, report: &RunReport, format: ReportFormat) -> Result<()> {
    match format {
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)
                .context("Failed to serialize report")?;
            writeln!(out)?;
        }
        ReportFormat::Text => {
            let mark = if report.is_success() { "✅" } else { "⚠️" };
            writeln!(out, "{} {}", mark, report.summary())?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(cli.log_filter())
        .with_writer(std::io::stderr)
        .init();

    let config = cli.extractor_config()?;
    let report = run(&config).with_context(|| {
        format!("Failed to extract ABIs from {:?} into {:?}", config.input_dir, config.output_dir)
    })?;

    write_report(&mut io::stdout().lock(), &report, cli.format)?;

    if cli.strict && !report.is_success() {
        anyhow::bail!("{} artifact(s) could not be extracted", report.failed());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use abix_exporter::{AbixError, FileOutcome};
    use tempfile::NamedTempFile;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("abix").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_no_args_uses_defaults() {
        let config = parse(&[]).extractor_config().unwrap();
        assert_eq!(config, ExtractorConfig::default());
    }

    #[test]
    fn test_flags_set_config() {
        let cli = parse(&[
            "-i",
            "out/artifacts",
            "-o",
            "web/abis",
            "--create-output",
            "-j",
            "2",
            "--pretty",
        ]);
        let config = cli.extractor_config().unwrap();

        assert_eq!(config.input_dir, PathBuf::from("out/artifacts"));
        assert_eq!(config.output_dir, PathBuf::from("web/abis"));
        assert!(config.create_output_dir);
        assert_eq!(config.jobs, Some(2));
        assert!(config.pretty);
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"input_dir": "from/file", "output_dir": "file/abis", "jobs": 8}}"#)
            .unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let config =
            parse(&["--config", &path, "--output", "cli/abis"]).extractor_config().unwrap();

        assert_eq!(config.input_dir, PathBuf::from("from/file"));
        assert_eq!(config.output_dir, PathBuf::from("cli/abis"));
        assert_eq!(config.jobs, Some(8));
    }

    #[test]
    fn test_bad_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not valid json").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let err = parse(&["-c", &path]).extractor_config().unwrap_err();
        assert!(err.to_string().contains("Failed to load config file"));
    }

    #[test]
    fn test_zero_jobs_rejected() {
        assert!(parse(&["--jobs", "0"]).extractor_config().is_err());
    }

    #[test]
    fn test_format_and_verbosity() {
        let cli = parse(&["--format", "json", "-vv", "--strict"]);
        assert_eq!(cli.format, ReportFormat::Json);
        assert_eq!(cli.verbose, 2);
        assert!(cli.strict);
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(Cli::try_parse_from(["abix", "--format", "yaml"]).is_err());
    }

    fn sample_report() -> RunReport {
        RunReport::new(vec![
            FileOutcome::written("A.json", 1),
            FileOutcome::failed("C.json", AbixError::parse("C.json", "expected value")),
        ])
    }

    #[test]
    fn test_text_report_is_summary_only() {
        let mut out = Vec::new();
        write_report(&mut out, &sample_report(), ReportFormat::Text).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.contains("2 artifacts: 1 written, 0 skipped, 1 failed"));
        assert!(!text.contains("expected value"));
    }

    #[test]
    fn test_json_report_content() {
        let mut out = Vec::new();
        write_report(&mut out, &sample_report(), ReportFormat::Json).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["written"], 1);
        assert_eq!(json["skipped"], 0);
        assert_eq!(json["failed"], 1);
        assert_eq!(json["outcomes"][0]["name"], "A.json");
        assert_eq!(json["outcomes"][0]["status"], "written");
        assert_eq!(json["outcomes"][0]["entries"], 1);
        assert_eq!(json["outcomes"][1]["name"], "C.json");
        assert_eq!(json["outcomes"][1]["status"], "failed");
        assert_eq!(json["outcomes"][1]["error"], "Parse error in C.json: expected value");
    }
}

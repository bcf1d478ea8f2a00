//! # STRATO3
//!
//! Decode a STRATO3 balloon telemetry line and print it.
//!
//! # Examples
//!
//! Decode the built-in sample line:
//! ```bash
//! cargo run --release
//! ```
//!
//! Decode a line as JSON:
//! ```bash
//! cargo run --release -- --format jsonl '$|00:05:13|19:36:26|...|66679'
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use strato3::config::{Config, OutputFormat};
use strato3::line::parse_str;
use strato3::telemetry::to_json_line;

/// Line decoded when none is given on the command line
const SAMPLE_LINE: &str = "$;00:05:13;19:36:26;13.09.2016;Y;04;40 40.68437 N;005 30.70415 E;0.432;0.800;;91.2;11.625;12.625;37.56;1009.809;8.6;66679";

/// Exit status for a line rejected before any field was decoded
const EXIT_REJECTED: u8 = 1;

/// Exit status for a line with one or more bad fields
const EXIT_PARTIAL: u8 = 2;

/// Command-line arguments
#[derive(Debug, Parser)]
#[command(name = "strato3", version, about = "Decode a STRATO3 balloon telemetry line")]
struct Args {
    /// TOML configuration file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Output format (overrides the configuration file)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Telemetry line; the built-in sample when omitted
    line: Option<String>,
}

/// Set up tracing to stderr, or to a file when `logging.log_dir` is set
///
/// `RUST_LOG` takes precedence over the configured level. The returned guard
/// must stay alive until exit so buffered file output is flushed.
fn init_logging(config: &Config) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    if config.logging.log_dir.is_empty() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
        return None;
    }

    let appender = tracing_appender::rolling::never(&config.logging.log_dir, &config.logging.file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Some(guard)
}

fn run(args: Args) -> Result<ExitCode> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(format) = args.format {
        config.output.format = format;
    }

    let _guard = init_logging(&config);
    info!("STRATO3 decoder v{} starting...", env!("CARGO_PKG_VERSION"));

    let line = args.line.as_deref().unwrap_or(SAMPLE_LINE);
    let line = line.trim_end_matches(['\r', '\n']);

    let decoded = parse_str(line).context("Rejected telemetry line")?;
    if !decoded.is_clean() {
        warn!(failures = decoded.failures, "line decoded with bad fields");
    }

    match config.output.format {
        OutputFormat::Text => println!("{}", decoded.record),
        OutputFormat::Jsonl => println!("{}", to_json_line(&decoded)?),
    }

    if decoded.is_clean() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(EXIT_PARTIAL))
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(EXIT_REJECTED)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from(["strato3", "--format", "jsonl", "$;x"]).unwrap();
        assert_eq!(args.format, Some(OutputFormat::Jsonl));
        assert_eq!(args.line.as_deref(), Some("$;x"));
        assert!(args.config.is_none());
    }

    #[test]
    fn test_args_reject_unknown_format() {
        assert!(Args::try_parse_from(["strato3", "--format", "csv"]).is_err());
    }

    #[test]
    fn test_sample_line_is_clean() {
        let decoded = parse_str(SAMPLE_LINE).unwrap();
        assert!(decoded.is_clean());
        assert_eq!(decoded.record.satellites, 4);
    }

    #[test]
    fn test_exit_codes_distinct() {
        assert_ne!(EXIT_REJECTED, EXIT_PARTIAL);
        assert_ne!(EXIT_REJECTED, 0);
    }
}

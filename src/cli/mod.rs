//! Command-line interface definitions.
//!
//! Uses `clap` derive macros for declarative argument parsing:
//! - `portprobe 10.0.0.1:22` - probe one endpoint
//! - `portprobe 10.0.0.1 -p 22,80,8000-8010` - probe a host across ports

mod probe;

pub use probe::ProbePlan;

use crate::config::AppSettings;
use crate::error::ConfigResult;
use clap::Parser;
use std::path::PathBuf;

/// portprobe - check whether TCP ports accept connections.
///
/// Each port gets one connect attempt, bounded by the timeout. Ports are
/// probed one after another, never in parallel.
#[derive(Parser, Debug)]
#[command(name = "portprobe")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Check whether TCP ports accept connections", long_about = None)]
pub struct Cli {
    /// Host to probe, or a host:port endpoint for a single probe
    ///
    /// Examples:
    ///   192.168.1.1          Host, probed on the configured ports
    ///   example.com:443      Single endpoint
    ///   [::1]:22             IPv6 endpoint
    #[arg(value_name = "TARGET")]
    pub target: String,

    /// Ports to probe (e.g., "80", "80,443", "1-1000", "22,80,443,8000-9000")
    #[arg(short, long)]
    pub ports: Option<String>,

    /// Per-probe timeout in milliseconds (-1 waits indefinitely)
    #[arg(short = 't', long, value_name = "MS", allow_negative_numbers = true)]
    pub timeout: Option<i64>,

    /// Output format for results
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Path to custom settings file
    #[arg(long, value_name = "PATH", env = "PORTPROBE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging of each probe
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress the progress header
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Load settings from `--config`, or the default location.
    pub fn load_settings(&self) -> ConfigResult<AppSettings> {
        match &self.config {
            Some(path) => AppSettings::load_from(path),
            None => AppSettings::load(),
        }
    }
}

/// Output format for results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable plain text
    #[default]
    Plain,
    /// JSON structured output
    Json,
    /// CSV format for data analysis
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ValueEnum;

    #[test]
    fn test_parse_args() {
        let cli = Cli::try_parse_from(["portprobe", "127.0.0.1", "-p", "80,443", "-t", "500", "-o", "json"])
            .unwrap();
        assert_eq!(cli.target, "127.0.0.1");
        assert_eq!(cli.ports.as_deref(), Some("80,443"));
        assert_eq!(cli.timeout, Some(500));
        assert_eq!(cli.output, Some(OutputFormat::Json));
    }

    #[test]
    fn test_negative_timeout_accepted() {
        let cli = Cli::try_parse_from(["portprobe", "example.com:80", "-t", "-1"]).unwrap();
        assert_eq!(cli.timeout, Some(-1));
    }

    #[test]
    fn test_output_format_names() {
        assert_eq!(OutputFormat::from_str("CSV", true).unwrap(), OutputFormat::Csv);
        assert_eq!(OutputFormat::default().to_string(), "plain");
    }

    #[test]
    fn test_missing_target_rejected() {
        assert!(Cli::try_parse_from(["portprobe"]).is_err());
    }
}

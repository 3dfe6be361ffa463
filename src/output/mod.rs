//! Output formatting module.
//!
//! Provides formatters for plain text, JSON, and CSV output of probe reports.

mod csv_format;
mod json_format;
mod plain;

pub use csv_format::{print_csv, write_csv};
pub use json_format::{print_json, to_json};
pub use plain::{print_error, print_plain, print_probe_header, print_warning, write_plain};

use crate::cli::OutputFormat;
use crate::prober::BatchResult;
use crate::types::ProbeTimeout;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io;
use std::time::Duration;

/// Everything a caller prints about one run.
#[derive(Debug, Clone, Serialize)]
pub struct ProbeReport {
    /// Host or endpoint as given by the user.
    pub target: String,
    /// Per-probe timeout in milliseconds; absent means none.
    pub timeout_ms: Option<u64>,
    /// When the first probe started.
    pub started_at: DateTime<Utc>,
    /// Wall-clock time for all probes.
    pub duration_ms: u64,
    pub ports_probed: usize,
    pub open_ports: usize,
    pub closed_ports: usize,
    /// Per-port results in probe order.
    pub results: BatchResult,
}

impl ProbeReport {
    /// Build a report from finished results.
    pub fn new(
        target: impl Into<String>,
        timeout: ProbeTimeout,
        started_at: DateTime<Utc>,
        duration: Duration,
        results: BatchResult,
    ) -> Self {
        let open_ports = results.open_ports().count();
        Self {
            target: target.into(),
            timeout_ms: timeout.as_millis(),
            started_at,
            duration_ms: u64::try_from(duration.as_millis()).unwrap_or(u64::MAX),
            ports_probed: results.len(),
            open_ports,
            closed_ports: results.len() - open_ports,
            results,
        }
    }
}

/// Format and print a report according to the specified format.
pub fn print_report(report: &ProbeReport, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Plain => plain::print_plain(report),
        OutputFormat::Json => json_format::print_json(report),
        OutputFormat::Csv => csv_format::print_csv(report),
    }
}

//! Probe command execution.
//!
//! Turns parsed arguments and settings into a probe run and prints the report.

use crate::cli::{Cli, OutputFormat};
use crate::config::AppSettings;
use crate::error::{CliError, CliResult, ProbeError};
use crate::output::{self, ProbeReport};
use crate::prober::{BatchResult, Prober};
use crate::types::{Host, PortSpec, ProbeTimeout, Target};
use chrono::Utc;
use clap::ValueEnum;
use std::time::Instant;
use tracing::debug;

/// What a command line asks to probe.
#[derive(Debug, Clone)]
pub enum ProbePlan {
    /// One endpoint.
    Single(Target),
    /// One host across a list of ports.
    Batch { host: Host, ports: PortSpec },
}

impl ProbePlan {
    /// Decide between a single probe and a batch.
    ///
    /// An explicit port list always means a batch. Otherwise a target that
    /// parses as an endpoint is probed alone, and a bare host falls back to
    /// the configured port list.
    pub fn from_args(target: &str, ports: Option<&str>, default_ports: &str) -> CliResult<Self> {
        if let Some(ports) = ports {
            return Ok(Self::Batch {
                host: Host::parse(target)?,
                ports: ports.parse()?,
            });
        }

        match Target::parse_endpoint(target) {
            Ok(target) => Ok(Self::Single(target)),
            Err(ProbeError::InvalidEndpoint(_)) => Ok(Self::Batch {
                host: Host::parse(target)?,
                ports: default_ports.parse()?,
            }),
            Err(e) => Err(e.into()),
        }
    }

    /// Number of probes this plan runs.
    pub fn probe_count(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Batch { ports, .. } => ports.count(),
        }
    }
}

impl Cli {
    /// Execute the command with already-loaded settings.
    pub async fn execute(&self, settings: AppSettings) -> CliResult<()> {
        let timeout = match self.timeout {
            Some(ms) => ProbeTimeout::from_millis(ms)?,
            None => settings.timeout()?,
        };
        let format = match self.output {
            Some(format) => format,
            None => OutputFormat::from_str(&settings.default_output_format, true)
                .map_err(|e| CliError::Other(format!("invalid default_output_format: {}", e)))?,
        };
        let plan = ProbePlan::from_args(&self.target, self.ports.as_deref(), &settings.default_ports)?;
        debug!(?plan, %timeout, %format, "resolved command");

        if timeout.is_indefinite() && !self.quiet {
            output::print_warning("no timeout set; a filtered port can stall the run");
        }
        if !self.quiet && format == OutputFormat::Plain {
            output::print_probe_header(&self.target, plan.probe_count(), &timeout.to_string());
        }

        let report = run(&plan, &self.target, timeout).await?;
        output::print_report(&report, format)?;

        Ok(())
    }
}

/// Run a plan and collect its report.
pub async fn run(plan: &ProbePlan, label: &str, timeout: ProbeTimeout) -> CliResult<ProbeReport> {
    let prober = Prober::new(timeout);
    let started_at = Utc::now();
    let start = Instant::now();

    let results = match plan {
        ProbePlan::Single(target) => {
            let open = prober.probe(target).await?;
            let mut results = BatchResult::with_capacity(1);
            results.insert(target.port, open);
            results
        }
        ProbePlan::Batch { host, ports } => prober.probe_many(host, ports.ports()).await?,
    };

    Ok(ProbeReport::new(
        label,
        timeout,
        started_at,
        start.elapsed(),
        results,
    ))
}

//! Plain text output formatting.
//!
//! Produces human-readable output with colors and formatting.

use super::ProbeReport;
use console::{style, Style};
use std::io::{self, Write};

const RULE: &str = "───────────────────────────────────────────";

/// Print a report in human-readable plain text format.
pub fn print_plain(report: &ProbeReport) -> io::Result<()> {
    write_plain(&mut io::stdout().lock(), report)
}

/// Write a report in human-readable plain text format.
pub fn write_plain<W: Write>(out: &mut W, report: &ProbeReport) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "  {} {}", style("Target:").bold(), report.target)?;
    writeln!(
        out,
        "  {} {}",
        style("Timeout:").bold(),
        report
            .timeout_ms
            .map_or_else(|| "none".to_string(), |ms| format!("{}ms", ms))
    )?;
    writeln!(
        out,
        "  {} {}",
        style("Started:").bold(),
        report.started_at.format("%Y-%m-%d %H:%M:%S UTC")
    )?;
    writeln!(
        out,
        "  {} {} ports probed in {:.2}s, {} open, {} closed",
        style("Statistics:").bold(),
        report.ports_probed,
        report.duration_ms as f64 / 1000.0,
        style(report.open_ports).green().bold(),
        style(report.closed_ports).red()
    )?;
    writeln!(out)?;

    if report.results.is_empty() {
        writeln!(out, "  {}", style("No ports to display.").dim())?;
        return Ok(());
    }

    writeln!(out, "  {}", style(RULE).dim())?;
    writeln!(out, "  {:>6}  {}", style("PORT").bold(), style("STATE").bold())?;
    writeln!(out, "  {}", style(RULE).dim())?;

    for (port, open) in report.results.iter() {
        let (state, state_style) = if open {
            ("open", Style::new().green().bold())
        } else {
            ("closed", Style::new().red())
        };
        writeln!(out, "  {:>6}  {}", port, state_style.apply_to(state))?;
    }

    writeln!(out, "  {}", style(RULE).dim())?;
    writeln!(out)?;

    Ok(())
}

/// Print a header before probing begins.
pub fn print_probe_header(target: &str, ports: usize, timeout: &str) {
    eprintln!();
    eprintln!(
        "{} {} v{}",
        style("Starting").cyan(),
        style("portprobe").cyan().bold(),
        env!("CARGO_PKG_VERSION")
    );
    eprintln!(
        "{} Target: {}",
        style("•").dim(),
        style(target).white().bold()
    );
    eprintln!(
        "{} Probing {} port(s), timeout {}...",
        style("•").dim(),
        style(ports).white().bold(),
        timeout
    );
}

/// Print an error message.
pub fn print_error(msg: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), msg);
}

/// Print a warning message.
pub fn print_warning(msg: &str) {
    eprintln!("{} {}", style("Warning:").yellow().bold(), msg);
}

//! CSV output formatting.

use super::ProbeReport;
use std::io::{self, Write};

/// Write one `port,state` row per probed port.
pub fn write_csv<W: Write>(writer: W, report: &ProbeReport) -> io::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(["port", "state"])?;

    for (port, open) in report.results.iter() {
        let state = if open { "open" } else { "closed" };
        wtr.write_record([port.to_string().as_str(), state])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Print a report in CSV format.
pub fn print_csv(report: &ProbeReport) -> io::Result<()> {
    write_csv(io::stdout().lock(), report)
}

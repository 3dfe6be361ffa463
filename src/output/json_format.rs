//! JSON output formatting.

use super::ProbeReport;
use std::io;

/// Render a report as pretty-printed JSON.
pub fn to_json(report: &ProbeReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

/// Print a report in JSON format.
pub fn print_json(report: &ProbeReport) -> io::Result<()> {
    let json = to_json(report).map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::tests::sample_report;

    #[test]
    fn test_json_shape() {
        let json = to_json(&sample_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["target"], "127.0.0.1");
        assert_eq!(value["timeout_ms"], 500);
        assert_eq!(value["open_ports"], 1);
        assert_eq!(value["results"][0]["port"], 9000);
        assert_eq!(value["results"][0]["open"], true);
        assert_eq!(value["results"][1]["open"], false);
    }
}

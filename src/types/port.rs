//! Port types with validation and parsing.
//!
//! `Port` covers the full TCP port space (0-65535). `ToPort` lets any
//! integer type stand in for a port, with range checking at the boundary.
//! `PortRange` and `PortSpec` handle textual port lists.

use crate::error::{ProbeError, ProbeResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A TCP port number (0-65535).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Port(u16);

impl Port {
    /// Minimum port number.
    pub const MIN: u16 = 0;
    /// Maximum port number.
    pub const MAX: u16 = 65535;

    /// Create a new Port.
    #[inline]
    pub const fn new(port: u16) -> Self {
        Self(port)
    }

    /// Get the raw port number.
    #[inline]
    pub const fn as_u16(self) -> u16 {
        self.0
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u16> for Port {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl From<Port> for u16 {
    fn from(port: Port) -> Self {
        port.0
    }
}

/// Conversion of caller-supplied integers into a checked [`Port`].
pub trait ToPort {
    fn to_port(self) -> ProbeResult<Port>;
}

impl ToPort for Port {
    fn to_port(self) -> ProbeResult<Port> {
        Ok(self)
    }
}

impl<T: ToPort + Copy> ToPort for &T {
    fn to_port(self) -> ProbeResult<Port> {
        (*self).to_port()
    }
}

macro_rules! impl_to_port {
    ($($t:ty),*) => {
        $(
            impl ToPort for $t {
                fn to_port(self) -> ProbeResult<Port> {
                    u16::try_from(self).map(Port).map_err(|_| {
                        ProbeError::PortOutOfRange(i128::try_from(self).unwrap_or(i128::MAX))
                    })
                }
            }
        )*
    };
}

impl_to_port!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// Error type for port specification parsing.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PortError {
    #[error("port {0} is out of valid range (0-65535)")]
    OutOfRange(String),
    #[error("invalid port number: {0}")]
    InvalidFormat(String),
    #[error("invalid port range: start ({0}) > end ({1})")]
    InvalidRange(u16, u16),
    #[error("empty port specification")]
    Empty,
}

/// A range of ports (inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortRange {
    start: Port,
    end: Port,
}

impl PortRange {
    /// Create a new port range.
    pub fn new(start: Port, end: Port) -> Result<Self, PortError> {
        if start.0 > end.0 {
            Err(PortError::InvalidRange(start.0, end.0))
        } else {
            Ok(Self { start, end })
        }
    }

    /// Create a range containing a single port.
    pub const fn single(port: Port) -> Self {
        Self {
            start: port,
            end: port,
        }
    }

    /// Get the number of ports in this range.
    pub const fn len(&self) -> usize {
        (self.end.0 - self.start.0) as usize + 1
    }

    /// A valid range always holds at least one port.
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Iterate over all ports in this range.
    pub fn iter(&self) -> impl Iterator<Item = Port> {
        (self.start.0..=self.end.0).map(Port)
    }
}

impl fmt::Display for PortRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// A port list as written by a user.
///
/// Supports formats like:
/// - Single port: "80"
/// - Comma-separated: "80,443,8080"
/// - Range: "1-1000"
/// - Mixed: "22,80,443,8000-9000"
///
/// Ports expand in the order written; repeats are kept.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PortSpec {
    ranges: Vec<PortRange>,
}

impl PortSpec {
    /// Create an empty port specification.
    pub const fn new() -> Self {
        Self { ranges: Vec::new() }
    }

    /// Add a port range to the specification.
    pub fn add_range(&mut self, range: PortRange) {
        self.ranges.push(range);
    }

    /// Add a single port to the specification.
    pub fn add_port(&mut self, port: Port) {
        self.ranges.push(PortRange::single(port));
    }

    /// Iterate over every port in written order.
    pub fn ports(&self) -> impl Iterator<Item = Port> + '_ {
        self.ranges.iter().flat_map(|r| r.iter())
    }

    /// Total number of ports, counting repeats.
    pub fn count(&self) -> usize {
        self.ranges.iter().map(PortRange::len).sum()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

fn parse_port(s: &str) -> Result<Port, PortError> {
    let s = s.trim();
    let value: u32 = s
        .parse()
        .map_err(|_| PortError::InvalidFormat(s.to_string()))?;
    u16::try_from(value)
        .map(Port)
        .map_err(|_| PortError::OutOfRange(s.to_string()))
}

impl FromStr for PortSpec {
    type Err = PortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(PortError::Empty);
        }

        let mut spec = Self::new();

        for part in s.split(',') {
            let part = part.trim();
            if let Some((start, end)) = part.split_once('-') {
                let range = PortRange::new(parse_port(start)?, parse_port(end)?)?;
                spec.add_range(range);
            } else {
                spec.add_port(parse_port(part)?);
            }
        }

        Ok(spec)
    }
}

impl fmt::Display for PortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.ranges.iter().map(|r| r.to_string()).collect();
        write!(f, "{}", parts.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_port_bounds() {
        assert_eq!(0u16.to_port().unwrap(), Port::new(0));
        assert_eq!(65535i32.to_port().unwrap(), Port::new(65535));
        assert!(matches!(
            70000i32.to_port(),
            Err(ProbeError::PortOutOfRange(70000))
        ));
        assert!(matches!((-1i64).to_port(), Err(ProbeError::PortOutOfRange(-1))));
        assert_eq!((&8080usize).to_port().unwrap().as_u16(), 8080);
    }

    #[test]
    fn test_port_range() {
        let range = PortRange::new(Port::new(1), Port::new(100)).unwrap();
        assert_eq!(range.len(), 100);
        assert!(PortRange::new(Port::new(10), Port::new(5)).is_err());
    }

    #[test]
    fn test_port_spec_parsing() {
        let spec: PortSpec = "80".parse().unwrap();
        assert_eq!(spec.count(), 1);

        let spec: PortSpec = "1-100".parse().unwrap();
        assert_eq!(spec.count(), 100);

        let spec: PortSpec = "22,80,443,8000-8010".parse().unwrap();
        assert_eq!(spec.count(), 14);
        assert_eq!(spec.to_string(), "22,80,443,8000-8010");
    }

    #[test]
    fn test_port_spec_keeps_written_order() {
        let spec: PortSpec = "443,80,443".parse().unwrap();
        let ports: Vec<u16> = spec.ports().map(Port::as_u16).collect();
        assert_eq!(ports, vec![443, 80, 443]);
    }

    #[test]
    fn test_port_spec_errors() {
        assert!(matches!("".parse::<PortSpec>(), Err(PortError::Empty)));
        assert!(matches!("http".parse::<PortSpec>(), Err(PortError::InvalidFormat(_))));
        assert!(matches!("70000".parse::<PortSpec>(), Err(PortError::OutOfRange(_))));
        assert!(matches!("90-80".parse::<PortSpec>(), Err(PortError::InvalidRange(90, 80))));
        assert!(matches!("80,,443".parse::<PortSpec>(), Err(PortError::InvalidFormat(_))));
    }
}

//! Probe target types.
//!
//! Accepts every shape a caller may hold a target in:
//! - Hostnames ("example.com", "localhost")
//! - Numeric addresses, as strings or `IpAddr` values ("10.0.0.1", "::1")
//! - Endpoints ("10.0.0.1:22", "[::1]:443", "example.com:80", `SocketAddr`)
//!
//! Validation happens here, before any socket exists.

use crate::error::{ProbeError, ProbeResult};
use crate::types::port::{Port, ToPort};
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, SocketAddrV4, SocketAddrV6};
use std::str::FromStr;

/// The host half of a target.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Host {
    /// A numeric address; no resolution needed.
    Ip(IpAddr),
    /// A hostname, resolved at probe time.
    Name(String),
}

impl Host {
    /// Parse a host string. IPv6 literals may be bracketed.
    pub fn parse(s: &str) -> ProbeResult<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ProbeError::EmptyHost);
        }

        let unbracketed = s
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .unwrap_or(s);
        if let Ok(ip) = unbracketed.parse::<IpAddr>() {
            return Ok(Self::Ip(ip));
        }

        if is_valid_hostname(s) {
            Ok(Self::Name(s.to_string()))
        } else {
            Err(ProbeError::InvalidHost(s.to_string()))
        }
    }

    /// The numeric address, if this host needs no resolution.
    pub fn ip(&self) -> Option<IpAddr> {
        match self {
            Self::Ip(ip) => Some(*ip),
            Self::Name(_) => None,
        }
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ip(ip) => write!(f, "{}", ip),
            Self::Name(name) => write!(f, "{}", name),
        }
    }
}

impl FromStr for Host {
    type Err = ProbeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A single (host, port) pair to probe.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Target {
    pub host: Host,
    pub port: Port,
}

impl Target {
    /// Create a new target.
    pub fn new(host: Host, port: Port) -> Self {
        Self { host, port }
    }

    /// Parse a `host:port` or `[v6]:port` endpoint.
    pub fn parse_endpoint(s: &str) -> ProbeResult<Self> {
        let s = s.trim();
        if let Ok(addr) = s.parse::<SocketAddr>() {
            return Ok(addr.into());
        }

        let invalid = || ProbeError::InvalidEndpoint(s.to_string());
        let (host, port) = s.rsplit_once(':').ok_or_else(invalid)?;
        // An unbracketed host with colons is an IPv6 literal missing its port.
        if host.contains(':') && !host.starts_with('[') {
            return Err(invalid());
        }
        let port: i64 = port.trim().parse().map_err(|_| invalid())?;

        Ok(Self::new(Host::parse(host)?, port.to_port()?))
    }

    /// The socket address, if the host is numeric.
    pub fn socket_addr(&self) -> Option<SocketAddr> {
        self.host
            .ip()
            .map(|ip| SocketAddr::new(ip, self.port.as_u16()))
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.host {
            Host::Ip(IpAddr::V6(ip)) => write!(f, "[{}]:{}", ip, self.port),
            host => write!(f, "{}:{}", host, self.port),
        }
    }
}

impl From<SocketAddr> for Target {
    fn from(addr: SocketAddr) -> Self {
        Self::new(Host::Ip(addr.ip()), Port::new(addr.port()))
    }
}

/// Anything that names a host.
pub trait ToHost {
    fn to_host(self) -> ProbeResult<Host>;
}

impl ToHost for Host {
    fn to_host(self) -> ProbeResult<Host> {
        Ok(self)
    }
}

impl ToHost for &Host {
    fn to_host(self) -> ProbeResult<Host> {
        Ok(self.clone())
    }
}

impl ToHost for &str {
    fn to_host(self) -> ProbeResult<Host> {
        Host::parse(self)
    }
}

impl ToHost for String {
    fn to_host(self) -> ProbeResult<Host> {
        Host::parse(&self)
    }
}

impl ToHost for &String {
    fn to_host(self) -> ProbeResult<Host> {
        Host::parse(self)
    }
}

impl ToHost for IpAddr {
    fn to_host(self) -> ProbeResult<Host> {
        Ok(Host::Ip(self))
    }
}

impl ToHost for Ipv4Addr {
    fn to_host(self) -> ProbeResult<Host> {
        Ok(Host::Ip(IpAddr::V4(self)))
    }
}

impl ToHost for Ipv6Addr {
    fn to_host(self) -> ProbeResult<Host> {
        Ok(Host::Ip(IpAddr::V6(self)))
    }
}

/// Anything that names a (host, port) pair.
///
/// Implemented for `(host, port)` tuples of any host-like and integer type,
/// socket addresses, and `host:port` endpoint strings.
pub trait ToTarget {
    fn to_target(self) -> ProbeResult<Target>;
}

impl ToTarget for Target {
    fn to_target(self) -> ProbeResult<Target> {
        Ok(self)
    }
}

impl ToTarget for &Target {
    fn to_target(self) -> ProbeResult<Target> {
        Ok(self.clone())
    }
}

impl<H: ToHost, P: ToPort> ToTarget for (H, P) {
    fn to_target(self) -> ProbeResult<Target> {
        let (host, port) = self;
        Ok(Target::new(host.to_host()?, port.to_port()?))
    }
}

impl ToTarget for SocketAddr {
    fn to_target(self) -> ProbeResult<Target> {
        Ok(self.into())
    }
}

impl ToTarget for SocketAddrV4 {
    fn to_target(self) -> ProbeResult<Target> {
        Ok(SocketAddr::V4(self).into())
    }
}

impl ToTarget for SocketAddrV6 {
    fn to_target(self) -> ProbeResult<Target> {
        Ok(SocketAddr::V6(self).into())
    }
}

impl ToTarget for &str {
    fn to_target(self) -> ProbeResult<Target> {
        Target::parse_endpoint(self)
    }
}

impl ToTarget for String {
    fn to_target(self) -> ProbeResult<Target> {
        Target::parse_endpoint(&self)
    }
}

impl ToTarget for &String {
    fn to_target(self) -> ProbeResult<Target> {
        Target::parse_endpoint(self)
    }
}

/// Check if a string is a valid hostname.
///
/// Accepts one trailing dot (fully qualified names) and underscores, which
/// resolvers and hosts files allow even though RFC 1123 does not.
fn is_valid_hostname(s: &str) -> bool {
    let s = s.strip_suffix('.').unwrap_or(s);
    if s.is_empty() || s.len() > 253 {
        return false;
    }

    // Each label must be 1-63 characters
    for label in s.split('.') {
        if label.is_empty() || label.len() > 63 {
            return false;
        }
        if label.starts_with('-') || label.ends_with('-') {
            return false;
        }
        if !label
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ipv4() {
        let host = Host::parse("192.168.1.1").unwrap();
        assert!(matches!(host, Host::Ip(IpAddr::V4(_))));
    }

    #[test]
    fn test_parse_ipv6() {
        assert!(matches!(Host::parse("::1").unwrap(), Host::Ip(IpAddr::V6(_))));
        assert!(matches!(Host::parse("[::1]").unwrap(), Host::Ip(IpAddr::V6(_))));
    }

    #[test]
    fn test_parse_hostname() {
        let host = Host::parse("example.com").unwrap();
        assert_eq!(host, Host::Name("example.com".to_string()));
        assert_eq!(host.ip(), None);
    }

    #[test]
    fn test_empty_host() {
        assert!(matches!(Host::parse(""), Err(ProbeError::EmptyHost)));
        assert!(matches!(Host::parse("   "), Err(ProbeError::EmptyHost)));
    }

    #[test]
    fn test_malformed_host() {
        assert!(matches!(Host::parse("bad host!"), Err(ProbeError::InvalidHost(_))));
        assert!(matches!(Host::parse("-invalid.com"), Err(ProbeError::InvalidHost(_))));
    }

    #[test]
    fn test_valid_hostname() {
        assert!(is_valid_hostname("example.com"));
        assert!(is_valid_hostname("sub.example.com"));
        assert!(is_valid_hostname("my-server"));
        assert!(!is_valid_hostname(""));
        assert!(!is_valid_hostname("a..b"));
        assert!(!is_valid_hostname(&"a".repeat(64)));
        assert!(!is_valid_hostname("."));
        assert!(!is_valid_hostname("example.com.."));
        assert!(!is_valid_hostname("bad*host"));
    }

    #[test]
    fn test_resolver_style_names() {
        assert!(is_valid_hostname("localhost."));
        assert!(is_valid_hostname("example.com."));
        assert!(is_valid_hostname("my_host"));
        assert!(is_valid_hostname("_sip._tcp.example.com"));

        assert_eq!(
            Host::parse("localhost.").unwrap(),
            Host::Name("localhost.".to_string())
        );
        assert_eq!(
            Host::parse("my_host").unwrap(),
            Host::Name("my_host".to_string())
        );
        let target = ("my_host", 8080).to_target().unwrap();
        assert_eq!(target.to_string(), "my_host:8080");
    }

    #[test]
    fn test_endpoint_parsing() {
        let target = Target::parse_endpoint("127.0.0.1:9000").unwrap();
        assert_eq!(target.socket_addr(), Some("127.0.0.1:9000".parse().unwrap()));

        let target = Target::parse_endpoint("[::1]:443").unwrap();
        assert_eq!(target.to_string(), "[::1]:443");

        let target = Target::parse_endpoint("example.com:80").unwrap();
        assert_eq!(target.host, Host::Name("example.com".to_string()));
        assert_eq!(target.port, Port::new(80));
    }

    #[test]
    fn test_malformed_endpoints() {
        assert!(matches!(
            Target::parse_endpoint("example.com"),
            Err(ProbeError::InvalidEndpoint(_))
        ));
        assert!(matches!(
            Target::parse_endpoint("::1"),
            Err(ProbeError::InvalidEndpoint(_))
        ));
        assert!(matches!(
            Target::parse_endpoint("host:http"),
            Err(ProbeError::InvalidEndpoint(_))
        ));
        assert!(matches!(
            Target::parse_endpoint("host:70000"),
            Err(ProbeError::PortOutOfRange(70000))
        ));
        assert!(matches!(Target::parse_endpoint(":80"), Err(ProbeError::EmptyHost)));
    }

    #[test]
    fn test_tuple_targets() {
        let ip: IpAddr = "10.0.0.1".parse().unwrap();
        let target = (ip, 22u16).to_target().unwrap();
        assert_eq!(target.to_string(), "10.0.0.1:22");

        let target = ("localhost", 8080i32).to_target().unwrap();
        assert_eq!(target.host, Host::Name("localhost".to_string()));

        assert!(matches!(("", 80).to_target(), Err(ProbeError::EmptyHost)));
        assert!(matches!(
            ("localhost", 70000).to_target(),
            Err(ProbeError::PortOutOfRange(70000))
        ));
    }
}

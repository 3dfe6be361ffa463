//! Terminal states of a single probe.

use std::fmt;
use std::io;

/// How a probe ended.
///
/// Only [`ProbeOutcome::Open`] counts as reachable. Timeouts and refusals are
/// kept apart here for logging, but callers of the boolean API see both as
/// `false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The TCP handshake completed.
    Open,
    /// The time budget ran out with the connect still pending.
    TimedOut,
    /// The connect failed (refused, unreachable, or the name did not resolve).
    Unreachable {
        kind: io::ErrorKind,
        reason: String,
    },
}

impl ProbeOutcome {
    /// Whether the port accepted the connection.
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }

    /// Whether the target actively refused the connection.
    pub fn is_refused(&self) -> bool {
        matches!(
            self,
            Self::Unreachable {
                kind: io::ErrorKind::ConnectionRefused,
                ..
            }
        )
    }
}

impl From<io::Error> for ProbeOutcome {
    fn from(err: io::Error) -> Self {
        Self::Unreachable {
            kind: err.kind(),
            reason: err.to_string(),
        }
    }
}

impl fmt::Display for ProbeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::TimedOut => write!(f, "timed out"),
            Self::Unreachable { reason, .. } => write!(f, "closed ({})", reason),
        }
    }
}

//! Per-probe time budget.

use crate::error::{ProbeError, ProbeResult};
use std::fmt;
use std::time::Duration;

/// How long a single probe may wait for its connection to complete.
///
/// `None` waits until the operating system resolves the connect on its own,
/// which on a filtered port can take minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProbeTimeout(Option<Duration>);

impl ProbeTimeout {
    /// Millisecond value meaning "no timeout".
    pub const INDEFINITE_MILLIS: i64 = -1;

    /// Wait indefinitely.
    pub const fn indefinite() -> Self {
        Self(None)
    }

    /// Wait at most `duration`.
    pub const fn bounded(duration: Duration) -> Self {
        Self(Some(duration))
    }

    /// Build from a millisecond count; `-1` means no timeout.
    pub fn from_millis(millis: i64) -> ProbeResult<Self> {
        match millis {
            Self::INDEFINITE_MILLIS => Ok(Self::indefinite()),
            ms if ms >= 0 => Ok(Self::bounded(Duration::from_millis(ms.unsigned_abs()))),
            ms => Err(ProbeError::InvalidTimeout(ms)),
        }
    }

    /// The bound, if any.
    pub const fn duration(self) -> Option<Duration> {
        self.0
    }

    /// The bound in whole milliseconds, if any.
    pub fn as_millis(self) -> Option<u64> {
        self.0.map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
    }

    /// Whether this timeout never elapses.
    pub const fn is_indefinite(self) -> bool {
        self.0.is_none()
    }
}

impl fmt::Display for ProbeTimeout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(d) => write!(f, "{}ms", d.as_millis()),
            None => write!(f, "none"),
        }
    }
}

impl From<Duration> for ProbeTimeout {
    fn from(duration: Duration) -> Self {
        Self::bounded(duration)
    }
}

impl From<Option<Duration>> for ProbeTimeout {
    fn from(duration: Option<Duration>) -> Self {
        Self(duration)
    }
}

impl TryFrom<i64> for ProbeTimeout {
    type Error = ProbeError;

    fn try_from(millis: i64) -> Result<Self, Self::Error> {
        Self::from_millis(millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_millis() {
        assert!(ProbeTimeout::from_millis(-1).unwrap().is_indefinite());
        assert_eq!(
            ProbeTimeout::from_millis(500).unwrap().duration(),
            Some(Duration::from_millis(500))
        );
        assert_eq!(
            ProbeTimeout::from_millis(0).unwrap().duration(),
            Some(Duration::ZERO)
        );
        assert!(matches!(
            ProbeTimeout::from_millis(-2),
            Err(ProbeError::InvalidTimeout(-2))
        ));
    }

    #[test]
    fn test_default_is_indefinite() {
        assert!(ProbeTimeout::default().is_indefinite());
        assert_eq!(ProbeTimeout::default().to_string(), "none");
        assert_eq!(ProbeTimeout::from(Duration::from_secs(2)).to_string(), "2000ms");
    }
}

//! Error types for portprobe.
//!
//! Uses `thiserror` for ergonomic error definitions. Connectivity failures
//! (refused, unreachable, timed out) are never errors here; they are probe
//! outcomes. Only bad input and local resource failures surface as errors.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Error raised by a probe or batch of probes.
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("host must not be empty")]
    EmptyHost,

    #[error("invalid host: {0}")]
    InvalidHost(String),

    #[error("port {0} is out of valid range (0-65535)")]
    PortOutOfRange(i128),

    #[error("invalid endpoint '{0}', expected host:port")]
    InvalidEndpoint(String),

    #[error("invalid timeout {0}ms (use -1 for no timeout)")]
    InvalidTimeout(i64),

    #[error("failed to open TCP socket")]
    Socket(#[source] io::Error),
}

impl ProbeError {
    /// Whether this error was caused by malformed input rather than the
    /// local network stack.
    pub fn is_validation(&self) -> bool {
        !matches!(self, Self::Socket(_))
    }
}

/// Result type alias for probe operations.
pub type ProbeResult<T> = Result<T, ProbeError>;

/// Errors from loading settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not determine a configuration directory")]
    DirectoryNotFound,

    #[error("failed to read {path}: {reason}")]
    ReadFailed { path: PathBuf, reason: String },

    #[error("invalid settings file: {0}")]
    InvalidFormat(String),
}

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Top-level error for command execution.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Probe(#[from] ProbeError),

    #[error(transparent)]
    Port(#[from] crate::types::PortError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("output failed: {0}")]
    Output(#[from] io::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

//! # portprobe - Bounded-Time TCP Port Probing
//!
//! portprobe answers one question: does this TCP port accept a connection
//! within a given time? It probes a single (host, port) pair, or one host
//! across an ordered list of ports.
//!
//! ## Behavior
//!
//! - **One attempt per probe**: no retries; the socket is always released
//! - **Bounded latency**: a probe returns by its timeout, whatever the network does
//! - **Sequential batches**: ports are probed one at a time, in order
//! - **Typed errors**: refused or timed-out ports are `false`; malformed
//!   input is an error, never a silent `false`
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use portprobe::{probe_many, probe_one};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), portprobe::ProbeError> {
//!     let timeout = Duration::from_millis(500);
//!
//!     let open = probe_one(("192.168.1.1", 22), timeout).await?;
//!     println!("ssh open: {}", open);
//!
//!     let results = probe_many("192.168.1.1", [22, 80, 443], timeout).await?;
//!     for (port, open) in results.iter() {
//!         println!("{}: {}", port, open);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Validated ports, hosts, targets and timeouts
//! - [`prober`] - The connect-with-timeout primitive and sequential batches
//! - [`error`] - Error types
//! - [`config`] - Settings for the command-line tool
//! - [`cli`] - Argument parsing and command execution
//! - [`output`] - Plain text, JSON and CSV reports

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod prober;
pub mod types;

// Re-export commonly used types
pub use error::{ProbeError, ProbeResult};
pub use prober::{probe_many, probe_one, BatchResult, ProbeOutcome, Prober};
pub use types::{Host, Port, ProbeTimeout, Target, ToHost, ToPort, ToTarget};

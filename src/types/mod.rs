//! Core type definitions using newtype patterns for type safety.
//!
//! Input validation lives in these conversions, so the prober only ever
//! sees well-formed targets.

mod port;
mod target;
mod timeout;

pub use port::{Port, PortError, PortRange, PortSpec, ToPort};
pub use target::{Host, Target, ToHost, ToTarget};
pub use timeout::ProbeTimeout;

//! Configuration management for portprobe.
//!
//! Provides XDG-compliant settings storage for CLI defaults.

mod settings;

pub use settings::{AppSettings, Paths};

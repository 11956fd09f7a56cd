//! Telemetry primitives shared across the boatsearch workspace.
//!
//! Centralises logging setup so the form and its hosts emit structured
//! `tracing` output in a consistent shape.

pub mod error;
pub mod init;

pub use error::{Result, TelemetryError};
pub use init::{DEFAULT_LOG_LEVEL, LogFormat, LoggingConfig, init_logging};

//! Error types for the inverter protocol and session.

use std::time::Duration;
use thiserror::Error;

/// Errors raised while generating identifiers, decoding responses, or
/// talking to the microinverter.
#[derive(Debug, Error)]
pub enum InverterError {
    /// Base identifier or panel count cannot be used.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Response shorter than the opening and closing segments combined.
    #[error("frame too short: {length} bytes (minimum {minimum})")]
    FrameTooShort { length: usize, minimum: usize },

    /// Panel block does not split evenly across the requested panels.
    #[error("malformed panel block: {block_length} bytes cannot be split across {panels} panel(s)")]
    MalformedPanelBlock { block_length: usize, panels: usize },

    /// TCP connect to the inverter failed.
    #[error("failed to connect to {addr}: {source}")]
    Connect {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// TCP connect did not complete in time.
    #[error("connection to {addr} timed out after {timeout:?}")]
    ConnectTimeout { addr: String, timeout: Duration },

    /// I/O error on an established connection.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, InverterError>;

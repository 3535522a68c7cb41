//! Error types for configuration handling.
//!
//! The display pipeline itself has no failure modes of its own; sink
//! errors come back through each sink's associated `Error` type.

/// Errors raised while reading a speedometer configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The display mode text did not name a known mode.
    #[error("unknown display mode (expected none, mps, kmh or mph)")]
    UnknownDisplayMode,

    /// The configuration JSON could not be parsed.
    #[error("invalid configuration JSON")]
    InvalidJson,
}

//! Error types for gate assembly and configuration.
//!
//! DESIGN
//! ======
//! A logged-out visitor is not an error: gates answer that case with a
//! redirect decision. Errors here are wiring or configuration defects that
//! should surface immediately at mount time.

use thiserror::Error;

/// Failures raised while assembling gates or loading their configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GateError {
    /// The state context a gate reads was never provided by an ancestor.
    #[error("{provider} is not provided; wrap the route tree in its provider")]
    MissingProvider { provider: &'static str },
    /// A configuration value could not be parsed.
    #[error("invalid value for {key}: {value:?}")]
    InvalidConfig { key: &'static str, value: String },
}

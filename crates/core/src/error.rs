//! Error types for accum
//!
//! This module defines all error types used throughout the workspace.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use thiserror::Error;

/// Result type alias for accum operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for accum
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Attempted to assign an attribute that only exposes a getter
    ///
    /// A tally changes through its increment operations, never by assignment.
    #[error("can't set attribute '{name}'")]
    ReadOnlyAttribute {
        /// Attribute that was targeted
        name: String,
    },

    /// Attribute name is not exposed by the target
    #[error("no attribute named '{name}'")]
    UnknownAttribute {
        /// Attribute that was requested
        name: String,
    },

    /// Division with a zero divisor
    #[error("division by zero")]
    DivisionByZero,

    /// Configuration could not be read, parsed or written
    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    /// Build a read-only violation for `name`
    pub fn read_only(name: impl Into<String>) -> Self {
        Error::ReadOnlyAttribute { name: name.into() }
    }

    /// Build an unknown-attribute error for `name`
    pub fn unknown_attribute(name: impl Into<String>) -> Self {
        Error::UnknownAttribute { name: name.into() }
    }

    /// Build a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config(message.into())
    }

    /// Stable, machine-readable code for this error
    pub fn reason_code(&self) -> &'static str {
        match self {
            Error::ReadOnlyAttribute { .. } => "read_only_attribute",
            Error::UnknownAttribute { .. } => "unknown_attribute",
            Error::DivisionByZero => "division_by_zero",
            Error::Config(_) => "config",
        }
    }
}

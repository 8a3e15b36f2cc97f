//! Error types for the virtual camera
//!
//! Every failure here is a programmer-error class failure (bad arguments,
//! missing pose, singular matrices). Nothing is retried.

use std::fmt;

/// Result type for virtual camera operations
pub type Result<T> = std::result::Result<T, Error>;

/// Virtual camera errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid construction or resize argument (intrinsics, clip planes, dimensions)
    InvalidArgument(String),

    /// Operation needs state that is not set (e.g. view matrix without a pose)
    InvalidState(String),

    /// Matrix arithmetic would produce non-finite results (singular pose)
    DegenerateGeometry(String),

    /// Camera configuration could not be parsed or serialized
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            Error::InvalidState(msg) => write!(f, "Invalid state: {}", msg),
            Error::DegenerateGeometry(msg) => write!(f, "Degenerate geometry: {}", msg),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(e: toml::ser::Error) -> Self {
        Error::Config(e.to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

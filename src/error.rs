//! Error types for the texture pool
//!
//! This module defines the error types used throughout the crate,
//! covering request validation, pool lifecycle misuse, and device failures.

use std::fmt;

/// Result type for texture pool operations
pub type Result<T> = std::result::Result<T, Error>;

/// Texture pool errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Degenerate texture request (zero dimension, inconsistent source data)
    InvalidRequest(String),

    /// Operation invoked on a pool (or through a handle of a pool) that has
    /// already been torn down. This is a programming error, not a runtime
    /// condition the caller should retry.
    UseAfterDestroy(String),

    /// `release()` called on a handle that is already sitting in a free list
    DoubleRelease,

    /// Device-collaborator error (allocation, pixel copy, teardown),
    /// propagated unmodified
    DeviceError(String),

    /// Device cannot satisfy an allocation
    OutOfMemory,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidRequest(msg) => write!(f, "Invalid texture request: {}", msg),
            Error::UseAfterDestroy(msg) => write!(f, "Use after destroy: {}", msg),
            Error::DoubleRelease => write!(f, "Texture handle released twice"),
            Error::DeviceError(msg) => write!(f, "Device error: {}", msg),
            Error::OutOfMemory => write!(f, "Out of GPU memory"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

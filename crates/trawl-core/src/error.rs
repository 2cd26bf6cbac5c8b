//! Error types for Trawl core operations.
//!
//! This module defines well-structured error types using `thiserror` for
//! library-level errors, while higher-level code can use `anyhow` for
//! convenient error handling.
//!
//! Matching itself is fail-closed and never returns an error: a malformed
//! pattern simply does not match. The only observable failures are path
//! resolution (which depends on the working directory) and configuration
//! loading.

use std::io;
use thiserror::Error;

/// Result type alias using TrawlError
pub type Result<T> = std::result::Result<T, TrawlError>;

/// Core error types for Trawl operations.
#[derive(Error, Debug)]
pub enum TrawlError {
    /// A relative pattern could not be resolved to an absolute path because
    /// the current working directory could not be determined.
    #[error("could not resolve pattern `{pattern}` to an absolute path")]
    AbsoluteResolution {
        pattern: String,
        #[source]
        source: io::Error,
    },

    /// Configuration file parsing or location failed
    #[error("configuration error: {reason}")]
    Config { reason: String },

    /// Generic I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl TrawlError {
    /// Create a configuration error
    pub fn config(reason: impl Into<String>) -> Self {
        TrawlError::Config {
            reason: reason.into(),
        }
    }
}

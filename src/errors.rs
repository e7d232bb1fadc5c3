/*!
 * Error types for the versum application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur while resolving a verse reference.
///
/// Every failure path of a resolver is converted into one of these variants
/// at the resolver boundary; none of them propagate as panics or untyped
/// errors. Each variant carries the normalized reference so the presenter
/// can echo what was looked up.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The verse API answered with a non-success status
    #[error("{message}")]
    Api {
        /// HTTP status code
        status_code: u16,
        /// Error message extracted from the API response
        message: String,
        /// The normalized reference that was looked up
        reference: String,
    },

    /// The request could not be sent or completed (connection, DNS, timeout)
    #[error("Network error: Unable to fetch verse. Please check your internet connection.")]
    Network {
        /// The normalized reference that was looked up
        reference: String,
    },

    /// The API answered with a success status but a body that could not be parsed
    #[error("Invalid response from the verse API. The verse reference may be invalid.")]
    InvalidResponse {
        /// The normalized reference that was looked up
        reference: String,
    },

    /// The API answered successfully but the verse text was empty
    #[error("No verse text found for the given reference.")]
    EmptyResult {
        /// The normalized reference that was looked up
        reference: String,
    },

    /// Any other failure
    #[error("Unexpected error: {message}")]
    Unexpected {
        /// Textual description of the failure
        message: String,
        /// The normalized reference that was looked up
        reference: String,
    },
}

impl LookupError {
    /// The normalized reference the failed lookup was for
    pub fn reference(&self) -> &str {
        match self {
            Self::Api { reference, .. }
            | Self::Network { reference }
            | Self::InvalidResponse { reference }
            | Self::EmptyResult { reference }
            | Self::Unexpected { reference, .. } => reference,
        }
    }
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a configuration operation
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from a verse lookup
    #[error("Lookup error: {0}")]
    Lookup(#[from] LookupError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

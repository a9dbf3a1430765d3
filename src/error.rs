//! Error types for kinesis-feeder
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! Nothing here is retried or caught internally: every error propagates to
//! the top level and terminates the run.

use thiserror::Error;

/// The main error type for kinesis-feeder
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    /// General configuration failure
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// A config field holds an out-of-range or empty value
    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    /// Config YAML could not be parsed
    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Inline JSON could not be parsed
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Secret Errors
    // ============================================================================
    /// Secret retrieval failed; fatal before any data is read
    #[error("Secret not found: scope '{scope}', key '{key}'")]
    MissingSecret { scope: String, key: String },

    // ============================================================================
    // Read Errors
    // ============================================================================
    /// The input document is missing, unreadable, or malformed
    #[error("Failed to read '{path}': {message}")]
    Read { path: String, message: String },

    // ============================================================================
    // Batching Errors
    // ============================================================================
    /// A record could not be converted to a textual payload
    #[error("Failed to serialize record {index}: {message}")]
    Serialization { index: usize, message: String },

    // ============================================================================
    // Submission Errors
    // ============================================================================
    /// The ingestion call failed.
    ///
    /// Batches already submitted stay submitted; `sent` counts only the
    /// records that made it before the failure.
    #[error("Submission to stream '{stream}' failed after {sent} records: {message}")]
    Submission {
        stream: String,
        sent: usize,
        message: String,
    },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    /// Catch-all for errors with no dedicated variant
    #[error("{0}")]
    Other(String),

    /// Wrapped error from the binary boundary
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a missing secret error
    pub fn missing_secret(scope: impl Into<String>, key: impl Into<String>) -> Self {
        Self::MissingSecret {
            scope: scope.into(),
            key: key.into(),
        }
    }

    /// Create a read error
    pub fn read(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Read {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(index: usize, message: impl Into<String>) -> Self {
        Self::Serialization {
            index,
            message: message.into(),
        }
    }

    /// Create a submission error
    ///
    /// `sent` is the number of records successfully submitted before the
    /// failure; batches already submitted stay submitted (no rollback).
    pub fn submission(stream: impl Into<String>, sent: usize, message: impl Into<String>) -> Self {
        Self::Submission {
            stream: stream.into(),
            sent,
            message: message.into(),
        }
    }
}

/// Result type alias for kinesis-feeder
pub type Result<T> = std::result::Result<T, Error>;

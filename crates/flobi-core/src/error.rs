//! Core error types for flobi-core.
//!
//! This module defines the error hierarchy using thiserror. Note that
//! mission retrieval failures are absorbed at the engine boundary (the
//! engine substitutes the fallback mission), so `ProviderError` only
//! surfaces to callers that talk to a provider directly.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for flobi-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Mission provider errors
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),

    /// Platform config directory could not be resolved
    #[error("Could not determine the configuration directory")]
    NoConfigDir,
}

/// Mission provider errors.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Transport-level failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status from the content API
    #[error("Content API returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Response arrived but did not have the expected shape
    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),

    /// Mission payload failed to parse as JSON
    #[error("Mission JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// No API key configured for the provider
    #[error("Provider is not configured (missing API key)")]
    NotConfigured,
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

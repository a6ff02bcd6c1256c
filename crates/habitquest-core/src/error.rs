//! Core error types for habitquest-core.
//!
//! This module defines the error hierarchy using thiserror. Validation
//! errors are reported before any mutation or persistence happens, so a
//! failed operation never leaves a half-updated profile behind.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for habitquest-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Malformed input at trial registration
    #[error("Registration error: {0}")]
    Registration(#[from] RegistrationError),

    /// Plan id outside the purchasable plan catalog
    #[error("Unknown plan '{0}'")]
    UnknownPlan(String),

    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Notification-related errors
    #[error("Notification error: {0}")]
    Notify(#[from] NotifyError),
}

/// Registration validation errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RegistrationError {
    /// Name shorter than three characters after trimming
    #[error("Name must be longer than 2 characters")]
    NameTooShort,

    /// Contact identifier shorter than eight characters
    #[error("Contact must be at least 8 characters")]
    ContactTooShort,
}

/// Storage-specific errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to read the profile record
    #[error("Failed to read profile at {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the profile record
    #[error("Failed to write profile at {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stored record failed to parse or validate
    #[error("Stored profile at {path} is malformed: {message}")]
    Malformed { path: PathBuf, message: String },

    /// Failed to serialize the profile record
    #[error("Failed to encode profile: {0}")]
    Encode(#[from] serde_json::Error),
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
}

/// Notification-specific errors.
///
/// These never fail an engine operation; the engine logs and continues.
#[derive(Error, Debug)]
pub enum NotifyError {
    /// Webhook endpoint could not be parsed
    #[error("Invalid webhook endpoint '{url}': {message}")]
    InvalidEndpoint { url: String, message: String },

    /// Event payload could not be serialized
    #[error("Failed to encode event payload: {0}")]
    Encode(#[from] serde_json::Error),

    /// Transport-level delivery failure
    #[error("Failed to deliver event: {0}")]
    Delivery(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

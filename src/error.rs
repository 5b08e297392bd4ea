//! Error types for formation-api
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for formation-api
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Parameter Decoding Errors
    // ============================================================================
    #[error("No value for parameter pair '{prefix}.member.{index}.{field}'")]
    MissingPairValue {
        prefix: String,
        index: u64,
        field: String,
    },

    #[error("Rename source key '{key}' not present in input")]
    MissingRenameSource { key: String },

    // ============================================================================
    // Deployment Errors
    // ============================================================================
    #[error("Unable to locate deployment descriptor: {message}")]
    DescriptorNotFound { message: String },

    #[error("Application '{app}' not defined in deployment descriptor")]
    AppNotFound { app: String },

    #[error("Filter '{filter}' referenced by pipeline '{pipeline}' is not defined")]
    FilterNotFound { filter: String, pipeline: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),

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

    /// Create a missing pair value error
    pub fn missing_pair_value(
        prefix: impl Into<String>,
        index: u64,
        field: impl Into<String>,
    ) -> Self {
        Self::MissingPairValue {
            prefix: prefix.into(),
            index,
            field: field.into(),
        }
    }

    /// Create a missing rename source error
    pub fn missing_rename_source(key: impl Into<String>) -> Self {
        Self::MissingRenameSource { key: key.into() }
    }

    /// Create a descriptor-not-found error
    pub fn descriptor_not_found(message: impl Into<String>) -> Self {
        Self::DescriptorNotFound {
            message: message.into(),
        }
    }

    /// Create an app-not-found error
    pub fn app_not_found(app: impl Into<String>) -> Self {
        Self::AppNotFound { app: app.into() }
    }
}

/// Result type alias for formation-api
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

//! Error types for the prepkit-features crate.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for feature registry and config operations.
#[derive(Debug, Error)]
pub enum FeatureError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Feature registry does not contain feature '{0}'")]
    NotFound(String),

    #[error("Column '{0}' not found in table")]
    Lookup(String),

    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("Config parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FeatureError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    pub fn lookup(name: impl Into<String>) -> Self {
        Self::Lookup(name.into())
    }

    /// Name of the missing feature or column, when the error carries one.
    pub fn missing_name(&self) -> Option<&str> {
        match self {
            Self::NotFound(name) | Self::Lookup(name) => Some(name),
            _ => None,
        }
    }
}

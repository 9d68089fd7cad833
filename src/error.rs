use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for recap operations.
///
/// Parsing release notes never produces one of these; they come from the
/// surrounding plumbing (configuration files, resource directories, output).
#[derive(Error, Debug)]
pub enum RecapError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to read resource '{name}' from {}: {source}", .path.display())]
    Resource {
        name: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in recap
pub type Result<T> = std::result::Result<T, RecapError>;

impl RecapError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        RecapError::Config(msg.into())
    }

    /// Create a resource error for the file backing `name`
    pub fn resource(name: impl Into<String>, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RecapError::Resource {
            name: name.into(),
            path: path.into(),
            source,
        }
    }
}

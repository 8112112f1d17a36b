use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file exists but could not be read.
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Configuration file is not valid TOML or has unknown keys.
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    /// A setting has a value that cannot be used.
    #[error("Invalid value for {key}: '{value}' ({reason})")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
    /// Config path could not be expanded (e.g. unknown `~` user, bad encoding).
    #[error("Invalid config path: {0}")]
    InvalidPath(PathBuf),
}

//! Error types for the getset CLI

use getset_gen::GenerateError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the getset CLI
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("no input given: pass -f/--file or set `file` in the config file")]
    MissingInput,

    #[error(transparent)]
    Generate(#[from] GenerateError),
}

/// Configuration file and setting errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid config format
    #[error("invalid config format in {}: {source}", path.display())]
    InvalidFormat {
        path: PathBuf,
        #[source]
        source: serde_yml::Error,
    },

    #[error(transparent)]
    Setting(#[from] getset_gen::ConfigError),
}

use getset_loader::{CollectError, LoadError};
use std::path::PathBuf;
use thiserror::Error;

/// Failure while flattening one record into accessors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeriveError {
    /// Two leaves collapse onto the same method-name stem.
    #[error(
        "record '{record}' derives '{method}' twice: from '{first}' and from '{second}' \
         (use --allow-duplicates to keep both)"
    )]
    DuplicateAccessor {
        record: String,
        method: String,
        first: String,
        second: String,
    },
}

/// Invalid generation settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid permission {value:?}: must be octal (e.g., 644, 600, 755)")]
    InvalidPermission { value: String },

    #[error("permission {value:?} exceeds valid range (0000-0777)")]
    PermissionOutOfRange { value: String },
}

/// Top-level errors of the generate command.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Collect(#[from] CollectError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// None of the requested records exist in the source unit.
    #[error("no valid records to process in {}", path.display())]
    NoRecords { path: PathBuf },

    #[error("failed to derive accessors in {}: {source}", path.display())]
    Derive {
        path: PathBuf,
        #[source]
        source: DeriveError,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

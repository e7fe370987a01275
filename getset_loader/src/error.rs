use std::path::PathBuf;
use thiserror::Error;

/// A character sequence that is not valid Go.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{line}:{column}: unexpected character sequence `{snippet}`")]
pub struct LexError {
    pub line: usize,
    pub column: usize,
    pub snippet: String,
}

/// Grammar violation while reading declarations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error("{line}:{column}: expected {expected}, found {found}")]
    Unexpected {
        line: usize,
        column: usize,
        expected: String,
        found: String,
    },

    #[error("unexpected end of file, expected {expected}")]
    UnexpectedEof { expected: String },

    #[error("{line}:{column}: unbalanced `{delimiter}`")]
    Unbalanced {
        line: usize,
        column: usize,
        delimiter: char,
    },
}

/// Failure to turn a path into a `SourceUnit`.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}

/// Failure while discovering Go source files.
#[derive(Debug, Error)]
pub enum CollectError {
    #[error("cannot resolve path {}: {source}", path.display())]
    Resolve {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("path {} does not exist or is not accessible: {source}", path.display())]
    Inaccessible {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not a .go file", path.display())]
    NotGoFile { path: PathBuf },

    #[error("failed to scan directory {}: {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("no .go files found under {}", path.display())]
    NoGoFiles { path: PathBuf },

    #[error("{} is neither a file nor a directory", path.display())]
    Unsupported { path: PathBuf },
}

//! Go Source Loading
//!
//! This crate turns Go source files into `SourceUnit`s: it discovers the
//! files to process, tokenizes them and parses their type declarations.

pub mod collect;
pub mod error;
pub mod file;
pub mod lexer;
pub mod parser;

// Re-export commonly used items at the crate root
pub use collect::collect_source_files;
pub use error::{CollectError, LexError, LoadError, ParseError};
pub use file::load_source_unit;
pub use parser::{parse_source, parse_type_expr};

// Re-export getset_types for convenience
pub use getset_types;

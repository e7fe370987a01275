//! Go accessor generation: flattens struct records into getter, setter and
//! interface source files.

pub mod cmds;
pub mod codegen;
pub mod error;
pub mod model;
pub mod naming;
pub mod options;
pub mod writer;

pub use cmds::generate::{resolve_targets, run, GenerateReport};
pub use codegen::{derive, AccessorEntry, DeriveOptions, GeneratedFiles, GoCodeGenerator, GoCodeGeneratorOptions, Output, TypeRenderer};
pub use error::{ConfigError, DeriveError, GenerateError};
pub use model::catalog::RecordCatalog;
pub use naming::{build_file_names, to_snake_case, FileSet};
pub use options::{parse_file_perm, parse_record_names, GenerateOptions, Suffixes, DEFAULT_FILE_PERM};
pub use writer::write_generated_file;

//! Output File Naming
//!
//! `Config` with the default suffixes becomes `config_getter.go`,
//! `config_setter.go` and `config_interface.go` next to the source file.

use std::path::{Path, PathBuf};

pub const GENERATED_EXTENSION: &str = ".go";

/* Destination paths for one record's generated files */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSet {
    pub getter: PathBuf,
    pub setter: PathBuf,
    pub interface: PathBuf,
    pub type_name: String,
}

/// `_` before every ASCII upper-case letter except the first character, then lower-case.
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() * 2);
    for (i, c) in s.char_indices() {
        if i > 0 && c.is_ascii_uppercase() {
            result.push('_');
        }
        result.push(c);
    }
    result.to_lowercase()
}

pub fn build_file_names(
    dir: &Path,
    record_name: &str,
    interface_file_suffix: &str,
    getter_file_suffix: &str,
    setter_file_suffix: &str,
) -> FileSet {
    let prefix = to_snake_case(record_name);
    let file = |suffix: &str| dir.join(format!("{}{}{}", prefix, to_snake_case(suffix), GENERATED_EXTENSION));

    FileSet {
        getter: file(getter_file_suffix),
        setter: file(setter_file_suffix),
        interface: file(interface_file_suffix),
        type_name: record_name.to_string(),
    }
}

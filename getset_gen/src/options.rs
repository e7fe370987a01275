use crate::codegen::go::DEFAULT_INTERFACE_NAME_SUFFIX;
use crate::error::ConfigError;
use std::path::PathBuf;

pub const DEFAULT_FILE_PERM: u32 = 0o600;
pub const DEFAULT_GETTER_FILE_SUFFIX: &str = "_getter";
pub const DEFAULT_SETTER_FILE_SUFFIX: &str = "_setter";
pub const DEFAULT_INTERFACE_FILE_SUFFIX: &str = "_interface";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suffixes {
    pub getter_file: String,
    pub setter_file: String,
    pub interface_file: String,
    pub interface_name: String,
}

impl Default for Suffixes {
    fn default() -> Self {
        Self {
            getter_file: DEFAULT_GETTER_FILE_SUFFIX.to_string(),
            setter_file: DEFAULT_SETTER_FILE_SUFFIX.to_string(),
            interface_file: DEFAULT_INTERFACE_FILE_SUFFIX.to_string(),
            interface_name: DEFAULT_INTERFACE_NAME_SUFFIX.to_string(),
        }
    }
}

/// Everything one generate run needs; built once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /* Go file, or directory scanned recursively */
    pub path: PathBuf,
    /* Empty means every record of each file */
    pub record_names: Vec<String>,
    pub generate_setters: bool,
    pub file_perm: u32,
    pub use_any_type: bool,
    pub allow_duplicates: bool,
    pub suffixes: Suffixes,
    pub quiet: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            path: PathBuf::from("."),
            record_names: Vec::new(),
            generate_setters: false,
            file_perm: DEFAULT_FILE_PERM,
            use_any_type: true,
            allow_duplicates: false,
            suffixes: Suffixes::default(),
            quiet: false,
        }
    }
}

/// Split `"Config, Redis"` into names; all whitespace is dropped first.
pub fn parse_record_names(s: &str) -> Vec<String> {
    let compact: String = s.split_whitespace().collect();
    compact
        .split(',')
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse an octal mode such as `0600`, `644` or `0o755`; an all-zero mode selects the default.
pub fn parse_file_perm(s: &str) -> Result<u32, ConfigError> {
    let digits = s.strip_prefix("0o").unwrap_or(s);
    let digits = digits.strip_prefix('0').unwrap_or(digits);

    let invalid = || ConfigError::InvalidPermission {
        value: s.to_string(),
    };
    /* A bare `0` leaves nothing to parse */
    if digits.is_empty() || digits.starts_with('+') {
        return Err(invalid());
    }
    let value = u32::from_str_radix(digits, 8).map_err(|_| invalid())?;

    if value > 0o777 {
        return Err(ConfigError::PermissionOutOfRange {
            value: s.to_string(),
        });
    }

    Ok(if value == 0 { DEFAULT_FILE_PERM } else { value })
}

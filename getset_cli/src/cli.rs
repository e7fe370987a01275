//! CLI argument parsing

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Generate getters, setters and interfaces for Go structs
#[derive(Parser, Debug)]
#[command(name = "getset")]
#[command(about = "Generate getters, setters and interfaces for Go structs")]
#[command(version)]
pub struct Cli {
    /// Go source file or directory (scanned recursively)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Comma-separated struct names; omitted means every struct
    #[arg(short = 's', long = "struct", value_name = "NAMES")]
    pub structs: Option<String>,

    /// Also generate setters
    #[arg(long)]
    pub setter: bool,

    /// Octal mode of generated files
    #[arg(long, value_name = "OCTAL")]
    pub perm: Option<String>,

    /// Write `any` instead of `interface{}` (default: true)
    #[arg(long, value_name = "BOOL", action = ArgAction::Set)]
    pub any: Option<bool>,

    /// Getter file name suffix (default: _getter)
    #[arg(long, alias = "getter_file_suffix", value_name = "SUFFIX")]
    pub getter_file_suffix: Option<String>,

    /// Setter file name suffix (default: _setter)
    #[arg(long, alias = "setter_file_suffix", value_name = "SUFFIX")]
    pub setter_file_suffix: Option<String>,

    /// Interface file name suffix (default: _interface)
    #[arg(long, alias = "interface_file_suffix", value_name = "SUFFIX")]
    pub interface_file_suffix: Option<String>,

    /// Interface type name suffix (default: Interface)
    #[arg(long, alias = "interface_name_suffix", value_name = "SUFFIX")]
    pub interface_name_suffix: Option<String>,

    /// Keep accessors whose names collide instead of failing
    #[arg(long)]
    pub allow_duplicates: bool,

    /// YAML file with default settings
    #[arg(short, long, env = "GETSET_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

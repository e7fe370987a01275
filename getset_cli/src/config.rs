//! Configuration file handling
//!
//! Every key is optional. A value given on the command line wins over the
//! same key in the file, which wins over the built-in default.
//!
//! ```yaml
//! file: ./internal/config
//! structs: [Config, Redis]
//! setter: true
//! perm: "0644"
//! any: false
//! interface-name-suffix: Accessors
//! ```

use crate::cli::Cli;
use crate::error::{CliError, ConfigError};
use getset_gen::{parse_file_perm, parse_record_names, GenerateOptions, Suffixes, DEFAULT_FILE_PERM};
use serde_derive::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileConfig {
    /* Relative paths are taken from the config file's directory */
    pub file: Option<PathBuf>,
    pub structs: Option<Vec<String>>,
    pub setter: Option<bool>,
    /* Quoted, so YAML does not read it as a number */
    pub perm: Option<String>,
    pub any: Option<bool>,
    pub getter_file_suffix: Option<String>,
    pub setter_file_suffix: Option<String>,
    pub interface_file_suffix: Option<String>,
    pub interface_name_suffix: Option<String>,
    pub allow_duplicates: Option<bool>,
    pub quiet: Option<bool>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config = Self::from_yaml(&content).map_err(|source| ConfigError::InvalidFormat {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(file) = config.file.take() {
            let base = path.parent().unwrap_or_else(|| Path::new(""));
            config.file = Some(if file.is_relative() { base.join(file) } else { file });
        }

        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yml::from_str(content)
    }
}

/// Merge command-line flags over the config file into generate options.
pub fn resolve(cli: &Cli, file: FileConfig) -> Result<GenerateOptions, CliError> {
    let path = cli.file.clone().or(file.file).ok_or(CliError::MissingInput)?;

    let record_names = match (&cli.structs, file.structs) {
        (Some(names), _) => parse_record_names(names),
        (None, Some(names)) => names.iter().flat_map(|n| parse_record_names(n)).collect(),
        (None, None) => Vec::new(),
    };

    let file_perm = cli
        .perm
        .clone()
        .or(file.perm)
        .map(|perm| parse_file_perm(&perm))
        .transpose()
        .map_err(ConfigError::from)?
        .unwrap_or(DEFAULT_FILE_PERM);

    let defaults = Suffixes::default();
    let suffixes = Suffixes {
        getter_file: pick(&cli.getter_file_suffix, file.getter_file_suffix, defaults.getter_file),
        setter_file: pick(&cli.setter_file_suffix, file.setter_file_suffix, defaults.setter_file),
        interface_file: pick(
            &cli.interface_file_suffix,
            file.interface_file_suffix,
            defaults.interface_file,
        ),
        interface_name: pick(
            &cli.interface_name_suffix,
            file.interface_name_suffix,
            defaults.interface_name,
        ),
    };

    Ok(GenerateOptions {
        path,
        record_names,
        generate_setters: cli.setter || file.setter.unwrap_or(false),
        file_perm,
        use_any_type: cli.any.or(file.any).unwrap_or(true),
        allow_duplicates: cli.allow_duplicates || file.allow_duplicates.unwrap_or(false),
        suffixes,
        quiet: cli.quiet || file.quiet.unwrap_or(false),
    })
}

fn pick(flag: &Option<String>, file: Option<String>, default: String) -> String {
    flag.clone().or(file).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("getset").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let options = resolve(&cli(&["-f", "config.go"]), FileConfig::default()).unwrap();

        assert_eq!(options.path, PathBuf::from("config.go"));
        assert!(options.record_names.is_empty());
        assert!(!options.generate_setters);
        assert_eq!(options.file_perm, 0o600);
        assert!(options.use_any_type);
        assert_eq!(options.suffixes, Suffixes::default());
        assert!(!options.quiet);
    }

    #[test]
    fn test_flags_override_file() {
        let file = FileConfig::from_yaml(
            "file: from_file.go\nstructs: [Redis]\nperm: \"0640\"\nany: true\ninterface-name-suffix: Accessors\n",
        )
        .unwrap();
        let options = resolve(
            &cli(&["-f", "flag.go", "-s", "Config, Logger", "--any", "false"]),
            file,
        )
        .unwrap();

        assert_eq!(options.path, PathBuf::from("flag.go"));
        assert_eq!(options.record_names, vec!["Config", "Logger"]);
        assert!(!options.use_any_type);
        assert_eq!(options.file_perm, 0o640);
        assert_eq!(options.suffixes.interface_name, "Accessors");
        assert_eq!(options.suffixes.getter_file, "_getter");
    }

    #[test]
    fn test_file_supplies_input() {
        let file = FileConfig::from_yaml("file: src\nsetter: true\nallow-duplicates: true\n").unwrap();
        let options = resolve(&cli(&[]), file).unwrap();

        assert_eq!(options.path, PathBuf::from("src"));
        assert!(options.generate_setters);
        assert!(options.allow_duplicates);
    }

    #[test]
    fn test_missing_input() {
        let err = resolve(&cli(&[]), FileConfig::default()).unwrap_err();
        assert!(matches!(err, CliError::MissingInput));
    }

    #[test]
    fn test_bad_perm() {
        let err = resolve(&cli(&["-f", "x.go", "--perm", "999"]), FileConfig::default()).unwrap_err();
        assert!(matches!(err, CliError::Config(ConfigError::Setting(_))));
        assert!(err.to_string().contains("999"));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        assert!(FileConfig::from_yaml("setters: true\n").is_err());
        assert_eq!(FileConfig::from_yaml("\n").unwrap(), FileConfig::default());
    }

    #[test]
    fn test_load_resolves_relative_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("getset.yaml");
        std::fs::write(&path, "file: models\nstructs:\n  - Config\n").unwrap();

        let config = FileConfig::load(&path).unwrap();
        assert_eq!(config.file, Some(dir.path().join("models")));
        assert_eq!(config.structs, Some(vec!["Config".to_string()]));

        let missing = FileConfig::load(&dir.path().join("missing.yaml")).unwrap_err();
        assert!(matches!(missing, ConfigError::Read { .. }));
    }
}

//! Settings loaded from `config.toml` in the OS config directory
//!
//! Every field is optional; a missing file means defaults throughout.

use crate::game::economy::{DEFAULT_REFRESH_COST, DEFAULT_STARTING_BALANCE};
use crate::game::EconomyRules;
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine config directory")]
    NoConfigDirectory,

    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    Invalid { field: String, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub starting_balance: u32,
    pub refresh_cost: u32,
    /// Word list file; the embedded list is used when unset.
    pub dictionary: Option<PathBuf>,
    /// Seed string; today's date seed when unset.
    pub seed: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            starting_balance: DEFAULT_STARTING_BALANCE,
            refresh_cost: DEFAULT_REFRESH_COST,
            dictionary: None,
            seed: None,
        }
    }
}

impl Config {
    pub fn rules(&self) -> EconomyRules {
        EconomyRules {
            starting_balance: self.starting_balance,
            refresh_cost: self.refresh_cost,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.refresh_cost == 0 {
            return Err(ConfigError::Invalid {
                field: "refresh_cost".into(),
                message: "must be greater than 0".into(),
            });
        }
        if matches!(&self.seed, Some(seed) if seed.trim().is_empty()) {
            return Err(ConfigError::Invalid {
                field: "seed".into(),
                message: "must not be blank".into(),
            });
        }
        Ok(())
    }
}

pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "wordshop")
}

/// Path of the config file:
/// - Linux: `$XDG_CONFIG_HOME/wordshop/config.toml` or `~/.config/wordshop/config.toml`
/// - macOS: `~/Library/Application Support/wordshop/config.toml`
pub fn config_path() -> Result<PathBuf, ConfigError> {
    project_dirs()
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .ok_or(ConfigError::NoConfigDirectory)
}

/// Load the config from its standard location.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path()?)
}

/// Load a config file, falling back to defaults when it does not exist.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&text).map_err(|e| match e {
        ConfigError::Parse { source, .. } => ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })?;
    Ok(config)
}

fn parse_config(text: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(text).map_err(|source| ConfigError::Parse {
        path: PathBuf::new(),
        source,
    })?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.rules(), EconomyRules::default());
    }

    #[test]
    fn test_partial_file() {
        let config = parse_config("refresh_cost = 5\nseed = \"practice\"\n").unwrap();
        assert_eq!(config.refresh_cost, 5);
        assert_eq!(config.starting_balance, DEFAULT_STARTING_BALANCE);
        assert_eq!(config.seed.as_deref(), Some("practice"));
        assert!(config.dictionary.is_none());
    }

    #[test]
    fn test_dictionary_path() {
        let config = parse_config("dictionary = \"/usr/share/dict/enable.txt\"").unwrap();
        assert_eq!(
            config.dictionary,
            Some(PathBuf::from("/usr/share/dict/enable.txt"))
        );
    }

    #[test]
    fn test_zero_refresh_cost_rejected() {
        let err = parse_config("refresh_cost = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { ref field, .. } if field == "refresh_cost"));
    }

    #[test]
    fn test_blank_seed_rejected() {
        assert!(matches!(
            parse_config("seed = \"  \""),
            Err(ConfigError::Invalid { .. })
        ));
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(matches!(
            parse_config("bank = 10"),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = load_config_from(Path::new("/no/such/wordshop/config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_parse_error_names_the_file() {
        let path = std::env::temp_dir().join(format!("wordshop-config-{}.toml", std::process::id()));
        std::fs::write(&path, "starting_balance = \"lots\"").unwrap();
        let err = load_config_from(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        match err {
            ConfigError::Parse { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("expected parse error, got {:?}", other),
        }
    }
}

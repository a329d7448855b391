//! Configuration management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::CliError;
use crate::formats::ShareFormat;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,

    #[serde(default)]
    pub policy: PolicyConfig,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Defaults {
    #[serde(default = "default_threshold")]
    pub threshold: usize,

    #[serde(default = "default_shares")]
    pub shares: usize,

    #[serde(default = "default_format")]
    pub format: ShareFormat,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PolicyConfig {
    /// Shortest secret accepted by `split`; recovery expects shares of at
    /// least this length plus one.
    #[serde(default = "default_min_secret_len")]
    pub min_secret_len: usize,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            shares: default_shares(),
            format: default_format(),
        }
    }
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            min_secret_len: default_min_secret_len(),
        }
    }
}

fn default_threshold() -> usize {
    3
}
fn default_shares() -> usize {
    5
}
fn default_format() -> ShareFormat {
    ShareFormat::Json
}
fn default_min_secret_len() -> usize {
    1
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = if let Some(config_path) = path {
            Self::load_from_file(config_path)?
        } else {
            Self::load_default()?
        };
        config.validate()?;
        Ok(config)
    }

    fn load_default() -> Result<Self> {
        // Try to load from standard locations
        let config_paths = [
            dirs::config_dir().map(|d| d.join("tss").join("config.toml")),
            Some(PathBuf::from("tss.toml")),
            Some(PathBuf::from(".tss.toml")),
        ];

        for config_path in config_paths.into_iter().flatten() {
            if config_path.exists() {
                return Self::load_from_file(&config_path);
            }
        }

        log::debug!("no configuration file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file(path: &Path) -> Result<Self> {
        log::debug!("loading configuration from {}", path.display());
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn validate(&self) -> Result<(), CliError> {
        if self.policy.min_secret_len == 0 || self.policy.min_secret_len > tss::MAX_SECRET_LEN {
            return Err(CliError::Config(format!(
                "policy.min_secret_len must be between 1 and {}",
                tss::MAX_SECRET_LEN
            )));
        }
        Ok(())
    }

    /// The sharing policy to apply; `strict` overrides the configured minimum.
    pub fn policy(&self, strict: bool) -> tss::Policy {
        if strict {
            tss::Policy::strict()
        } else {
            tss::Policy::new(self.policy.min_secret_len)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.defaults.threshold, 3);
        assert_eq!(config.defaults.shares, 5);
        assert_eq!(config.defaults.format, ShareFormat::Json);
        assert_eq!(config.policy(false), tss::Policy::default());
        assert_eq!(config.policy(true), tss::Policy::strict());
    }

    #[test]
    fn test_partial_file() {
        let config: Config = toml::from_str(
            r#"
            [defaults]
            format = "hex"

            [policy]
            min_secret_len = 32
            "#,
        )
        .unwrap();

        assert_eq!(config.defaults.format, ShareFormat::Hex);
        assert_eq!(config.defaults.threshold, 3);
        assert_eq!(config.policy(false), tss::Policy::strict());
    }

    #[test]
    fn test_load_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[defaults]\nshares = 7\nthreshold = 4\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.defaults.shares, 7);
        assert_eq!(config.defaults.threshold, 4);
    }

    #[test]
    fn test_rejects_bad_policy() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[policy]\nmin_secret_len = 0\n").unwrap();

        assert!(Config::load(Some(&path)).is_err());
        assert!(Config::load(Some(&dir.path().join("missing.toml"))).is_err());
    }
}

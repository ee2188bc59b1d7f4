//! CLI configuration
//!
//! Resolution order, lowest to highest: built-in defaults, the TOML file,
//! environment variables, command-line flags.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use hwinv_core::logging_facility::Profile;
use serde::Deserialize;

/// Config file looked up in the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "hwinv.toml";

pub const ENV_DATA_DIR: &str = "HWINV_DATA_DIR";
pub const ENV_LOG_PROFILE: &str = "HWINV_LOG_PROFILE";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory for the filesystem store
    pub data_dir: PathBuf,
    pub log_profile: Profile,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".hwinv"),
            log_profile: Profile::Development,
        }
    }
}

impl Config {
    /// Load configuration from `path` (or the default file) plus environment
    ///
    /// # Errors
    ///
    /// Fails if an explicitly given file cannot be read, if any file does not
    /// parse, or if an environment override is invalid.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Self::from_file(default)?
                } else {
                    Self::default()
                }
            }
        };
        config.apply_env(|name| std::env::var(name).ok())?;
        Ok(config)
    }

    /// Read a TOML config file
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&text)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Parse TOML config text; missing keys take their defaults
    ///
    /// # Errors
    ///
    /// Fails on malformed TOML, unknown keys or an unknown log profile.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Apply environment overrides through `lookup`
    ///
    /// Empty values are ignored.
    ///
    /// # Errors
    ///
    /// Fails if the log profile override is not a known profile.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(dir) = lookup(ENV_DATA_DIR).filter(|v| !v.is_empty()) {
            self.data_dir = PathBuf::from(dir);
        }
        if let Some(profile) = lookup(ENV_LOG_PROFILE).filter(|v| !v.is_empty()) {
            self.log_profile = profile
                .parse()
                .map_err(anyhow::Error::msg)
                .with_context(|| format!("Invalid {}", ENV_LOG_PROFILE))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_empty_toml_gives_defaults() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn test_toml_values() {
        let config = Config::from_toml(
            r#"
            data_dir = "/var/lib/hwinv"
            log_profile = "production"
            "#,
        )
        .unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/var/lib/hwinv"));
        assert_eq!(config.log_profile, Profile::Production);
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(Config::from_toml("data_directory = \"x\"").is_err());
        assert!(Config::from_toml("log_profile = \"loud\"").is_err());
    }

    #[test]
    fn test_env_overrides_file() {
        let mut config = Config::from_toml("data_dir = \"from-file\"").unwrap();

        config
            .apply_env(env(&[(ENV_DATA_DIR, "from-env"), (ENV_LOG_PROFILE, "prod")]))
            .unwrap();

        assert_eq!(config.data_dir, PathBuf::from("from-env"));
        assert_eq!(config.log_profile, Profile::Production);
    }

    #[test]
    fn test_empty_env_ignored() {
        let mut config = Config::default();

        config.apply_env(env(&[(ENV_DATA_DIR, "")])).unwrap();

        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_invalid_env_profile() {
        let mut config = Config::default();
        let err = config
            .apply_env(env(&[(ENV_LOG_PROFILE, "chatty")]))
            .unwrap_err();

        assert!(format!("{:#}", err).contains(ENV_LOG_PROFILE));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("hwinv.toml");
        std::fs::write(&path, "log_profile = \"test\"\n").unwrap();

        let config = Config::from_file(&path).unwrap();

        assert_eq!(config.log_profile, Profile::Test);
        assert!(Config::from_file(&dir.path().join("missing.toml")).is_err());
    }
}

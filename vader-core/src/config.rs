use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::provider::DEFAULT_BASE_URL;

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// base_url = "https://weather.lexlink.se"
/// default_location = "Stockholm"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Base URL of the forecast service. The public instance when unset.
    pub base_url: Option<String>,

    /// Location used by `vader show` when none is given on the command line.
    pub default_location: Option<String>,
}

impl Config {
    /// The effective base URL, falling back to the public instance.
    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// Store a base URL; blank input clears the override.
    pub fn set_base_url(&mut self, url: String) {
        let trimmed = url.trim().trim_end_matches('/');
        self.base_url = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
    }

    pub fn default_location(&self) -> Option<&str> {
        self.default_location.as_deref()
    }

    /// Store a default location; blank input clears it.
    pub fn set_default_location(&mut self, location: String) {
        let trimmed = location.trim();
        self.default_location = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("se", "lexlink", "vader")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_falls_back_to_the_public_instance() {
        let cfg = Config::default();
        assert_eq!(cfg.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn set_base_url_trims_whitespace_and_trailing_slashes() {
        let mut cfg = Config::default();

        cfg.set_base_url("  http://localhost:3000/  ".into());
        assert_eq!(cfg.base_url(), "http://localhost:3000");

        cfg.set_base_url("".into());
        assert_eq!(cfg.base_url(), DEFAULT_BASE_URL);
        assert!(cfg.base_url.is_none());
    }

    #[test]
    fn default_location_is_unset_initially() {
        let cfg = Config::default();
        assert_eq!(cfg.default_location(), None);
    }

    #[test]
    fn set_default_location_trims_and_clears() {
        let mut cfg = Config::default();

        cfg.set_default_location("  Luleå ".into());
        assert_eq!(cfg.default_location(), Some("Luleå"));

        cfg.set_default_location("   ".into());
        assert_eq!(cfg.default_location(), None);
    }

    #[test]
    fn config_round_trips_through_toml() {
        let mut cfg = Config::default();
        cfg.set_base_url("http://localhost:3000".into());
        cfg.set_default_location("Kiruna".into());

        let toml = toml::to_string_pretty(&cfg).expect("serialize");
        let parsed: Config = toml::from_str(&toml).expect("parse");

        assert_eq!(parsed.base_url(), "http://localhost:3000");
        assert_eq!(parsed.default_location(), Some("Kiruna"));
    }

    #[test]
    fn empty_toml_is_a_valid_config() {
        let parsed: Config = toml::from_str("").expect("parse");
        assert!(parsed.base_url.is_none());
        assert!(parsed.default_location.is_none());
    }
}

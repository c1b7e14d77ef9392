//! Configuration management for raidcard.
//!
//! Loads configuration from ${RAIDCARD_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::visibility::INITIAL_PAGE_SIZE;

pub mod paths {
    //! Path resolution for raidcard configuration and log directories.
    //!
    //! RAIDCARD_HOME resolution order:
    //! 1. RAIDCARD_HOME environment variable (if set)
    //! 2. ~/.config/raidcard (default)

    use std::path::PathBuf;

    /// Returns the raidcard home directory.
    ///
    /// Falls back to a relative `.raidcard` directory when no home directory exists.
    pub fn raidcard_home() -> PathBuf {
        if let Ok(home) = std::env::var("RAIDCARD_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".raidcard"),
            |h| h.join(".config").join("raidcard"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        raidcard_home().join("config.toml")
    }

    /// Returns the directory the TUI writes its log file to.
    pub fn logs_dir() -> PathBuf {
        raidcard_home().join("logs")
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Candidates shown per slot before expanding
    pub page_size: usize,

    /// How long the "copied" indicator stays up, in milliseconds
    pub copied_feedback_ms: u64,

    /// Default log filter (overridden by RAIDCARD_LOG)
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: INITIAL_PAGE_SIZE,
            copied_feedback_ms: Self::DEFAULT_COPIED_FEEDBACK_MS,
            log_level: Self::DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    const DEFAULT_COPIED_FEEDBACK_MS: u64 = 2000;
    const DEFAULT_LOG_LEVEL: &str = "info";

    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Writes the default config template to `path`.
    ///
    /// Fails if the file already exists.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, default_config_template())
            .with_context(|| format!("Failed to write config to {}", path.display()))
    }

    /// Page size clamped to at least one row.
    pub fn effective_page_size(&self) -> usize {
        self.page_size.max(1)
    }

    pub fn copied_feedback(&self) -> Duration {
        Duration::from_millis(self.copied_feedback_ms)
    }
}

fn default_config_template() -> &'static str {
    "# raidcard configuration\n\
     \n\
     # Candidates shown per searched player before \"show more\"\n\
     page_size = 3\n\
     \n\
     # How long the share button shows \"copied\" (milliseconds)\n\
     copied_feedback_ms = 2000\n\
     \n\
     # Log filter, e.g. \"debug\" or \"raidcard_tui=trace\"\n\
     # log_level = \"info\"\n"
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("nonexistent.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.page_size, 3);
        assert_eq!(config.copied_feedback(), Duration::from_secs(2));
    }

    #[test]
    fn test_load_partial_config_merges_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "page_size = 5\n").unwrap();

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.page_size, 5);
        assert_eq!(config.copied_feedback_ms, 2000);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_load_invalid_toml_reports_path() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "page_size = \"many\"\n").unwrap();

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(format!("{err:#}").contains("config.toml"));
    }

    #[test]
    fn test_init_creates_parseable_template() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("subdir").join("config.toml");

        Config::init(&config_path).unwrap();

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_init_fails_if_exists() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "").unwrap();

        assert!(Config::init(&config_path).is_err());
    }

    #[test]
    fn test_zero_page_size_clamped() {
        let config = Config {
            page_size: 0,
            ..Default::default()
        };
        assert_eq!(config.effective_page_size(), 1);
    }
}

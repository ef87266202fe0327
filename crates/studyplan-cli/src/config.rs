//! Configuration file management for studyplan.
//!
//! Provides a TOML-based config file at `~/.config/studyplan/config.toml` and
//! a resolution chain: CLI flag > env var > config file > default.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use studyplan_core::{Language, PlanMode};

/// Env var overriding the state file location.
pub const STATE_ENV: &str = "STUDYPLAN_STATE";
/// Env var overriding the default plan mode.
pub const MODE_ENV: &str = "STUDYPLAN_MODE";

// -----------------------------------------------------------------------
// Config file types
// -----------------------------------------------------------------------

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub defaults: DefaultsSection,
    #[serde(default)]
    pub storage: StorageSection,
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultsSection {
    /// Language for messages shown before any profile is stored.
    #[serde(default)]
    pub language: Language,
    /// Plan mode used when a profile is first stored.
    #[serde(default)]
    pub mode: PlanMode,
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageSection {
    /// Path of the state JSON file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_path: Option<PathBuf>,
}

// -----------------------------------------------------------------------
// Paths
// -----------------------------------------------------------------------

/// Return the studyplan config directory.
///
/// Always uses XDG layout: `$XDG_CONFIG_HOME/studyplan` or
/// `~/.config/studyplan`.
pub fn config_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join("studyplan");
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("studyplan")
}

/// Return the path to the studyplan config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Default location of the state file: the platform data dir.
pub fn default_state_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("studyplan")
        .join("state.json")
}

// -----------------------------------------------------------------------
// Read / write
// -----------------------------------------------------------------------

/// Load the config file at `path`. A missing file yields `None`; a file that
/// exists but does not parse is an error.
pub fn load_config_from(path: &Path) -> Result<Option<ConfigFile>> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file at {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&contents)
        .with_context(|| format!("failed to parse config file at {}", path.display()))?;
    Ok(Some(config))
}

/// Serialize and write the config file to `path`, creating parent dirs.
pub fn save_config_to(config: &ConfigFile, path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create config directory {}", dir.display()))?;
    }
    let contents = toml::to_string_pretty(config).context("failed to serialize config")?;
    std::fs::write(path, contents)
        .with_context(|| format!("failed to write config file at {}", path.display()))?;
    Ok(())
}

// -----------------------------------------------------------------------
// Resolved config
// -----------------------------------------------------------------------

/// Fully resolved configuration, ready for use.
#[derive(Debug, Clone, PartialEq)]
pub struct StudyplanConfig {
    pub state_path: PathBuf,
    pub default_mode: PlanMode,
    pub default_language: Language,
}

impl StudyplanConfig {
    /// Resolve configuration using the chain: CLI flag > env var > config file > default.
    ///
    /// - State path: `cli_state` > `STUDYPLAN_STATE` > `storage.state_path` > data dir
    /// - Mode: `STUDYPLAN_MODE` > `defaults.mode` > normal
    pub fn resolve(cli_state: Option<&Path>) -> Result<Self> {
        let file_config = load_config_from(&config_path())?.unwrap_or_default();

        let state_path = if let Some(path) = cli_state {
            path.to_path_buf()
        } else if let Ok(path) = std::env::var(STATE_ENV) {
            PathBuf::from(path)
        } else if let Some(path) = file_config.storage.state_path.clone() {
            path
        } else {
            default_state_path()
        };

        let default_mode = match std::env::var(MODE_ENV) {
            Ok(raw) => raw
                .parse::<PlanMode>()
                .with_context(|| format!("invalid {MODE_ENV}"))?,
            Err(_) => file_config.defaults.mode,
        };

        Ok(Self {
            state_path,
            default_mode,
            default_language: file_config.defaults.language,
        })
    }
}

// -----------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------

//! # clikit Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module implements the configuration system for clikit, handling loading,
//! merging, validation, and access to configuration data. It combines defaults,
//! user settings, and project-specific overrides.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Command-line flags (applied by `main.rs` after loading)
//! 2. Project-specific `.clikit.toml` in the current directory or its ancestors
//! 3. User-specific `config.toml` in the platform config directory
//! 4. Default values defined in the code
//!
//! A `CLIKIT_CONFIG` environment variable, when set, replaces the user config path.
//!
//! ```toml
//! [logging]
//! verbose = true
//! color = false
//!
//! [download]
//! user_agent = "my-tool/1.0"
//! connect_timeout_secs = 10
//!
//! [archive]
//! default_extract_dir = "~/unpacked"
//! ```
//!
//! The configuration is loaded once per command execution and passed to the
//! handlers that need it.
//!
use crate::core::error::{KitError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub download: DownloadConfig,
    #[serde(default)]
    pub archive: ArchiveConfig,
}

/// Console logger levels and styling.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Show `INFO:` lines from `vprint`.
    #[serde(default)]
    pub verbose: bool,
    /// Show `DEBUG:` lines.
    #[serde(default)]
    pub debug: bool,
    /// Show `TRACE:` lines.
    #[serde(default)]
    pub trace: bool,
    /// Emit ANSI colors. Colors are still suppressed when stdout is not a terminal.
    #[serde(default = "default_color")]
    pub color: bool,
}

/// Settings for the HTTP download helper.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DownloadConfig {
    /// `User-Agent` header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Optional TCP connect timeout. No overall request timeout is applied.
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
}

/// Settings for archive extraction.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ArchiveConfig {
    /// Directory used by `clikit unarchive` when no target is given (can use ~).
    /// When unset, archives are extracted into the current directory.
    pub default_extract_dir: Option<String>,
}

fn default_color() -> bool {
    true
}
fn default_user_agent() -> String {
    concat!("clikit/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            debug: false,
            trace: false,
            color: default_color(),
        }
    }
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            connect_timeout_secs: None,
        }
    }
}

const PROJECT_CONFIG_FILENAME: &str = ".clikit.toml";
const CONFIG_PATH_ENV: &str = "CLIKIT_CONFIG";

/// Loads, merges, expands, and validates the configuration for this invocation.
pub fn load_config() -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config()?;
    let mut merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    expand_config_paths(&mut merged_config).context("Failed to expand paths in configuration")?;
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn user_config_path() -> Option<PathBuf> {
    if let Some(explicit) = std::env::var_os(CONFIG_PATH_ENV) {
        return Some(PathBuf::from(explicit));
    }
    ProjectDirs::from("com", "clikit", "clikit").map(|dirs| dirs.config_dir().join("config.toml"))
}

fn load_user_config() -> Result<Option<Config>> {
    let Some(config_path) = user_config_path() else {
        warn!("Could not determine user config directory.");
        return Ok(None);
    };
    if config_path.exists() {
        info!("Loading user configuration from: {}", config_path.display());
        load_config_from_path(&config_path).map(Some)
    } else {
        debug!(
            "User configuration file not found at {}",
            config_path.display()
        );
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.clikit.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

/// Searches `start` and its ancestors for `.clikit.toml`, stopping at a `.git` directory.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Project values win wherever they differ from the defaults.
fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let Some(project_cfg) = project else {
        return user;
    };
    let defaults = Config::default();
    let mut merged = Config::default();

    merged.logging.verbose = project_cfg.logging.verbose || user.logging.verbose;
    merged.logging.debug = project_cfg.logging.debug || user.logging.debug;
    merged.logging.trace = project_cfg.logging.trace || user.logging.trace;
    merged.logging.color = if project_cfg.logging.color != defaults.logging.color {
        project_cfg.logging.color
    } else {
        user.logging.color
    };

    merged.download.user_agent = if project_cfg.download.user_agent != defaults.download.user_agent
    {
        project_cfg.download.user_agent
    } else {
        user.download.user_agent
    };
    merged.download.connect_timeout_secs = project_cfg
        .download
        .connect_timeout_secs
        .or(user.download.connect_timeout_secs);

    merged.archive.default_extract_dir = project_cfg
        .archive
        .default_extract_dir
        .or(user.archive.default_extract_dir);
    merged
}

fn expand_config_paths(config: &mut Config) -> Result<()> {
    if let Some(dir) = config.archive.default_extract_dir.as_mut() {
        *dir = shellexpand::tilde(dir).into_owned();
        debug!("Expanded default extract directory: {}", dir);
    }
    Ok(())
}

fn validate_config(config: &Config) -> Result<()> {
    debug!("Validating final configuration...");
    if config.download.user_agent.trim().is_empty() {
        return Err(anyhow!(KitError::Config(
            "download.user_agent cannot be empty.".to_string()
        )));
    }
    if config.download.connect_timeout_secs == Some(0) {
        return Err(anyhow!(KitError::Config(
            "download.connect_timeout_secs must be greater than zero.".to_string()
        )));
    }
    if let Some(dir) = &config.archive.default_extract_dir {
        let dir_path = PathBuf::from(dir);
        if dir.is_empty() {
            return Err(anyhow!(KitError::Config(
                "archive.default_extract_dir cannot be empty.".to_string()
            )));
        }
        if dir_path.exists() && !dir_path.is_dir() {
            return Err(anyhow!(KitError::Config(format!(
                "Configured extract path '{}' exists but is not a directory.",
                dir_path.display()
            ))));
        }
    }
    debug!("Configuration validation successful.");
    Ok(())
}

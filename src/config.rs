use crate::analyzer::Increment;
use crate::error::{Result, SemverTagError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory and the user config directory
pub const CONFIG_FILE_NAME: &str = "semver-tag.toml";

/// Represents the complete configuration for semver tag computation.
///
/// Contains the pre-release suffix, default increment, prefix handling, release branches and
/// collision handling options.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_prerelease_suffix")]
    pub prerelease_suffix: String,

    #[serde(default)]
    pub default_bump: Increment,

    #[serde(default)]
    pub with_v: bool,

    #[serde(default = "default_release_branches")]
    pub release_branches: Vec<String>,

    #[serde(default)]
    pub unique: UniqueConfig,
}

/// Returns the default pre-release suffix.
fn default_prerelease_suffix() -> String {
    "beta".to_string()
}

/// Returns the default list of branches that always produce releases.
fn default_release_branches() -> Vec<String> {
    vec!["main".to_string(), "master".to_string()]
}

fn default_max_attempts() -> usize {
    10_000
}

fn default_token_length() -> usize {
    5
}

fn default_regenerate() -> bool {
    true
}

/// Configuration for resolving tag name collisions.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct UniqueConfig {
    #[serde(default = "default_max_attempts")]
    pub max_attempts: usize,

    #[serde(default = "default_token_length")]
    pub token_length: usize,

    #[serde(default = "default_regenerate")]
    pub regenerate: bool,
}

impl Default for UniqueConfig {
    fn default() -> Self {
        UniqueConfig {
            max_attempts: default_max_attempts(),
            token_length: default_token_length(),
            regenerate: default_regenerate(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prerelease_suffix: default_prerelease_suffix(),
            default_bump: Increment::default(),
            with_v: false,
            release_branches: default_release_branches(),
            unique: UniqueConfig::default(),
        }
    }
}

/// True when `branch` is one of `release_branches`
pub fn is_release_branch(release_branches: &[String], branch: &str) -> bool {
    release_branches.iter().any(|b| b == branch)
}

impl Config {
    pub fn is_release_branch(&self, branch: &str) -> bool {
        is_release_branch(&self.release_branches, branch)
    }
}

impl UniqueConfig {
    /// Collision retries need at least one attempt and a non-empty token
    fn validate(&self) -> Result<()> {
        if self.max_attempts == 0 {
            return Err(SemverTagError::config("unique.max_attempts must be at least 1"));
        }
        if self.token_length == 0 {
            return Err(SemverTagError::config("unique.token_length must be at least 1"));
        }
        Ok(())
    }
}

/// Parse configuration from TOML text.
pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config =
        toml::from_str(content).map_err(|e| SemverTagError::config(e.to_string()))?;
    config.unique.validate()?;
    Ok(config)
}

/// Find the configuration file that would be loaded, if any.
fn locate_config(config_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = config_path {
        return Some(path.to_path_buf());
    }

    let local = Path::new(".").join(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .filter(|path| path.exists())
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `semver-tag.toml` in current directory
/// 3. `semver-tag.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match locate_config(config_path) {
        Some(path) => {
            log::debug!("loading configuration from {}", path.display());
            let content = fs::read_to_string(&path)?;
            parse_config(&content)
        }
        None => {
            log::debug!("no configuration file found, using defaults");
            Ok(Config::default())
        }
    }
}

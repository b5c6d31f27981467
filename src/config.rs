use crate::domain::SuffixPolicy;
use crate::error::{GitVersionError, Result};
use crate::git::ProcessRunner;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the current directory and the user config directory
pub const CONFIG_FILE_NAME: &str = "gitversion.toml";

/// Represents the complete configuration for gitversion.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    /// Write the local version suffix to this file
    #[serde(default)]
    pub version_file: Option<PathBuf>,

    #[serde(default)]
    pub policy: SuffixPolicy,

    #[serde(default)]
    pub git: GitConfig,
}

/// How the git executable is invoked.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct GitConfig {
    #[serde(default = "default_git_program")]
    pub program: String,

    /// Directory to run git in; the current directory when unset
    #[serde(default)]
    pub work_dir: Option<PathBuf>,
}

fn default_git_program() -> String {
    "git".to_string()
}

impl Default for GitConfig {
    fn default() -> Self {
        GitConfig {
            program: default_git_program(),
            work_dir: None,
        }
    }
}

impl GitConfig {
    /// Build the process runner described by this configuration
    pub fn runner(&self) -> ProcessRunner {
        let runner = ProcessRunner::new().with_program(self.program.clone());
        match &self.work_dir {
            Some(dir) => runner.with_work_dir(dir.clone()),
            None => runner,
        }
    }
}

/// Parse configuration from TOML text
pub fn parse_config(text: &str) -> Result<Config> {
    toml::from_str(text).map_err(|e| GitVersionError::config(format!("invalid configuration: {}", e)))
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `gitversion.toml` in current directory
/// 3. `gitversion.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed, or if the custom
///   path does not exist
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new(CONFIG_FILE_NAME).exists() {
        fs::read_to_string(CONFIG_FILE_NAME)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    parse_config(&config_str)
}

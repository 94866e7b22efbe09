use crate::domain::VersionBump;
use crate::error::{Result, TaggerError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable holding the GitHub access token
pub const ENV_GITHUB_TOKEN: &str = "GITHUB_TOKEN";

/// File name searched in the working directory and the user config directory
pub const CONFIG_FILE_NAME: &str = "gh-tagger.toml";

fn default_api_url() -> String {
    "https://api.github.com".to_string()
}

fn default_host() -> String {
    "github.com".to_string()
}

fn default_per_page() -> u8 {
    100
}

/// Represents the complete configuration for gh-tagger.
///
/// Every key is optional; missing keys fall back to the public GitHub defaults.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the REST API (GitHub Enterprise uses `https://HOST/api/v3`)
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Host prefix written in front of repository names in proposal lines
    #[serde(default = "default_host")]
    pub host: String,

    /// Bump applied when `--bump` is not given
    #[serde(default)]
    pub default_bump: VersionBump,

    /// Page size for list endpoints
    #[serde(default = "default_per_page")]
    pub per_page: u8,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: default_api_url(),
            host: default_host(),
            default_bump: VersionBump::default(),
            per_page: default_per_page(),
        }
    }
}

impl Config {
    /// Check value ranges that serde cannot express
    pub fn validate(&self) -> Result<()> {
        if !(1..=100).contains(&self.per_page) {
            return Err(TaggerError::config(format!(
                "per_page must be between 1 and 100, got: {}",
                self.per_page
            )));
        }
        if self.host.is_empty() || self.host.contains('/') {
            return Err(TaggerError::config(format!(
                "host must be a bare host name, got: '{}'",
                self.host
            )));
        }
        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            return Err(TaggerError::config(format!(
                "api_url must be an http(s) URL, got: '{}'",
                self.api_url
            )));
        }
        Ok(())
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `gh-tagger.toml` in current directory
/// 3. `gh-tagger.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded and validated configuration
/// * `Err` - If a file exists but cannot be read, parsed or validated
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let path = match config_path {
        Some(path) => Some(PathBuf::from(path)),
        None => find_config_file(),
    };

    let config = match path {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading configuration");
            parse_config(&fs::read_to_string(&path)?)?
        }
        None => Config::default(),
    };

    config.validate()?;
    Ok(config)
}

fn find_config_file() -> Option<PathBuf> {
    let local = Path::new(".").join(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .filter(|path| path.exists())
}

/// Parse configuration TOML text
pub fn parse_config(content: &str) -> Result<Config> {
    toml::from_str(content).map_err(|e| TaggerError::config(e.to_string()))
}

/// Read the API token from the environment.
///
/// # Returns
/// * `Err` - If the variable is unset or empty
pub fn read_token() -> Result<String> {
    match std::env::var(ENV_GITHUB_TOKEN) {
        Ok(token) if !token.trim().is_empty() => Ok(token.trim().to_string()),
        _ => Err(TaggerError::config(format!(
            "environment variable not set: {}",
            ENV_GITHUB_TOKEN
        ))),
    }
}

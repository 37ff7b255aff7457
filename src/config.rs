//! Configuration handling for the seat service client.
//!
//! Configuration lives in the user config directory (`roost/config.yaml`) and
//! covers:
//! - The seat service base URL
//! - The corporate domain used to validate entered identifiers

use std::env;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RoostError};

/// Default seat service endpoint (local development backend)
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Default corporate domain substring required in entered identifiers
pub const DEFAULT_DOMAIN: &str = "ibm.com";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Seat service connection settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Identity validation settings
    #[serde(default)]
    pub auth: AuthConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            auth: AuthConfig::default(),
        }
    }
}

/// Seat service connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the seat service
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Identity validation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Corporate domain substring an entered identifier must contain
    pub domain: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            domain: DEFAULT_DOMAIN.to_string(),
        }
    }
}

impl Config {
    /// Get the path to the config file
    ///
    /// `ROOST_CONFIG_DIR` overrides the platform config directory (used by
    /// tests and for portable setups).
    pub fn config_path() -> Result<PathBuf> {
        if let Ok(dir) = env::var("ROOST_CONFIG_DIR") {
            return Ok(PathBuf::from(dir).join("config.yaml"));
        }

        let dirs = directories::ProjectDirs::from("", "", "roost")
            .ok_or_else(|| RoostError::Config("could not determine config directory".into()))?;
        Ok(dirs.config_dir().join("config.yaml"))
    }

    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_yaml_ng::to_string(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    /// Get a configuration value by dot-notation key
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "api.base_url" => Ok(self.api.base_url.clone()),
            "auth.domain" => Ok(self.auth.domain.clone()),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a configuration value by dot-notation key
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "api.base_url" => {
                // Reject values reqwest could never use as a request base
                url::Url::parse(value)?;
                self.api.base_url = value.trim_end_matches('/').to_string();
            }
            "auth.domain" => {
                if value.trim().is_empty() {
                    return Err(RoostError::Config("auth.domain cannot be empty".into()));
                }
                self.auth.domain = value.trim().to_lowercase();
            }
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }

    /// All valid dot-notation config keys
    pub fn valid_keys() -> &'static [&'static str] {
        &["api.base_url", "auth.domain"]
    }
}

/// Build the error for an unrecognized config key, suggesting dot notation
/// when the key looks like it used underscores for the section separator.
fn unknown_key(key: &str) -> RoostError {
    if !key.contains('.')
        && let Some(pos) = key.find('_')
    {
        let dot_version = format!("{}.{}", &key[..pos], &key[pos + 1..]);
        return RoostError::Config(format!(
            "invalid config key '{key}'. Use dot notation: '{dot_version}'"
        ));
    }
    RoostError::Config(format!(
        "invalid config key '{key}'. Valid keys: {}",
        Config::valid_keys().join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.auth.domain, DEFAULT_DOMAIN);
    }

    #[test]
    fn test_get_known_keys() {
        let config = Config::default();
        assert_eq!(config.get("api.base_url").unwrap(), DEFAULT_BASE_URL);
        assert_eq!(config.get("auth.domain").unwrap(), DEFAULT_DOMAIN);
    }

    #[test]
    fn test_get_unknown_key() {
        let config = Config::default();
        assert!(config.get("api.timeout").is_err());
    }

    #[test]
    fn test_set_base_url_strips_trailing_slash() {
        let mut config = Config::default();
        config.set("api.base_url", "https://seats.example.com/").unwrap();
        assert_eq!(config.api.base_url, "https://seats.example.com");
    }

    #[test]
    fn test_set_base_url_rejects_garbage() {
        let mut config = Config::default();
        assert!(config.set("api.base_url", "not a url").is_err());
    }

    #[test]
    fn test_set_domain_lowercases() {
        let mut config = Config::default();
        config.set("auth.domain", "IBM.COM").unwrap();
        assert_eq!(config.auth.domain, "ibm.com");
    }

    #[test]
    fn test_underscore_key_suggests_dot_notation() {
        let mut config = Config::default();
        let err = config.set("api_base_url", "x").unwrap_err();
        assert!(err.to_string().contains("api.base_url"));
    }

    #[test]
    fn test_roundtrip_yaml() {
        let mut config = Config::default();
        config.set("auth.domain", "corp.example.com").unwrap();
        let yaml = serde_yaml_ng::to_string(&config).unwrap();
        let parsed: Config = serde_yaml_ng::from_str(&yaml).unwrap();
        assert_eq!(parsed.auth.domain, "corp.example.com");
    }
}

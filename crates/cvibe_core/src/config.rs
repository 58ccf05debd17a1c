use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::paths::config_toml_path;

const DEFAULT_API_BASE: &str = "http://localhost:8080/api";

/// Client configuration, loaded from config.toml with environment overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL prefix for every backend call, e.g. `http://localhost:8080/api`.
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Override for the credential/data directory. `None` means `~/.cvibe`.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn trim_trailing_slash(value: &str) -> String {
    value.trim_end_matches('/').to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Self {
        let mut config = Config {
            api_base: default_api_base(),
            data_dir: None,
        };

        let config_path = config_toml_path();
        if config_path.exists() {
            if let Ok(content) = std::fs::read_to_string(&config_path) {
                if let Ok(file_config) = toml::from_str::<Config>(&content) {
                    config = file_config;
                }
            }
        }

        // Override with environment variables if they exist
        if let Ok(api_base) = std::env::var("CVIBE_API_BASE") {
            config.api_base = api_base;
        }
        if let Ok(data_dir) = std::env::var("CVIBE_DATA_DIR") {
            config.data_dir = Some(PathBuf::from(data_dir));
        }

        config.api_base = trim_trailing_slash(&config.api_base);
        config
    }

    pub fn with_api_base(api_base: impl Into<String>) -> Self {
        Config {
            api_base: trim_trailing_slash(&api_base.into()),
            data_dir: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trim_trailing_slash_strips_all() {
        assert_eq!(trim_trailing_slash("http://x/api/"), "http://x/api");
        assert_eq!(trim_trailing_slash("http://x/api//"), "http://x/api");
        assert_eq!(trim_trailing_slash("http://x/api"), "http://x/api");
    }

    #[test]
    fn with_api_base_normalizes() {
        let config = Config::with_api_base("https://cvibe.example/api/");
        assert_eq!(config.api_base, "https://cvibe.example/api");
    }

    #[test]
    fn config_toml_round_trip() {
        let config = Config {
            api_base: "https://cvibe.example/api".to_string(),
            data_dir: Some(PathBuf::from("/tmp/cvibe")),
        };
        let serialized = toml::to_string(&config).expect("serialize");
        let parsed: Config = toml::from_str(&serialized).expect("parse");
        assert_eq!(parsed.api_base, config.api_base);
        assert_eq!(parsed.data_dir, config.data_dir);
    }
}

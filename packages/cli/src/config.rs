use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "shelf.config.json";

/// Shelf configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory holding stores, drafts and products
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// Undo levels kept per editing session (0 = unlimited)
    #[serde(default = "default_max_history")]
    pub max_history: usize,

    /// Log filter used when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Route `shelf render` uses when none is given
    #[serde(default = "default_route")]
    pub default_route: String,
}

fn default_data_dir() -> String {
    ".shelf".to_string()
}

fn default_max_history() -> usize {
    shelf_editor::MAX_HISTORY
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_route() -> String {
    "/".to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    /// Get absolute path to the data directory
    pub fn get_data_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.data_dir)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            max_history: default_max_history(),
            log_level: default_log_level(),
            default_route: default_route(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "dataDir": "storage",
            "maxHistory": 2,
            "logLevel": "debug"
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.data_dir, "storage");
        assert_eq!(config.max_history, 2);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.default_route, "/");
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.data_dir, ".shelf");
        assert_eq!(config.max_history, 50);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.default_route, "/");
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().display().to_string()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(
            config.get_data_dir(&dir.path().display().to_string()),
            dir.path().join(".shelf")
        );
    }
}

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const APP_DIR: &str = "salesbook";

/// Stores user-configurable front-end preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Directory holding the ledger slots. Defaults to the platform data dir.
    pub data_dir: Option<PathBuf>,
    #[serde(default = "Config::default_true")]
    pub ui_color_enabled: bool,
    #[serde(default = "Config::default_true")]
    pub confirm_deletes: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            ui_color_enabled: true,
            confirm_deletes: true,
        }
    }
}

impl Config {
    fn default_true() -> bool {
        true
    }

    pub fn resolve_data_dir(&self) -> PathBuf {
        if let Some(path) = &self.data_dir {
            return path.clone();
        }

        dirs::data_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    }

    /// Default location of the configuration file itself.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
            .join("config.json")
    }
}

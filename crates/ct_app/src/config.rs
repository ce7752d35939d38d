use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_TITLE: &str = "Contacts";
pub const ENV_TITLE: &str = "CONTACTS_TITLE";
pub const ENV_SEED: &str = "CONTACTS_SEED";
const CONFIG_DIR: &str = "contacts-rs";
const CONFIG_FILE: &str = "config.v1.json";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub title: String,
    pub seed_samples: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            seed_samples: true,
        }
    }
}

impl AppConfig {
    pub fn with_env_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(title) = lookup(ENV_TITLE) {
            self.title = title;
        }
        if let Some(seed) = lookup(ENV_SEED) {
            self.seed_samples = !matches!(
                seed.trim().to_ascii_lowercase().as_str(),
                "0" | "false" | "no" | "off"
            );
        }
        self
    }
}

pub fn config_path() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(dir).join(CONFIG_DIR).join(CONFIG_FILE));
    }
    if let Ok(home) = std::env::var("HOME") {
        return Some(
            PathBuf::from(home)
                .join(".config")
                .join(CONFIG_DIR)
                .join(CONFIG_FILE),
        );
    }
    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return Some(PathBuf::from(appdata).join(CONFIG_DIR).join(CONFIG_FILE));
        }
    }
    None
}

#[derive(Debug)]
pub struct StartupConfig {
    pub config: AppConfig,
    pub save_path: Option<PathBuf>,
    pub load_error: Option<ConfigError>,
}

pub fn load_config() -> StartupConfig {
    load_startup_config(config_path(), |key| std::env::var(key).ok())
}

// A file that fails to load is never handed out as a save target, so it is not
// overwritten. Env overrides apply either way.
pub fn load_startup_config(
    path: Option<PathBuf>,
    lookup: impl Fn(&str) -> Option<String>,
) -> StartupConfig {
    let Some(path) = path else {
        return StartupConfig {
            config: AppConfig::default().with_env_overrides(lookup),
            save_path: None,
            load_error: None,
        };
    };
    match load_config_from(&path) {
        Ok(base) => StartupConfig {
            config: base.with_env_overrides(lookup),
            save_path: Some(path),
            load_error: None,
        },
        Err(err) => StartupConfig {
            config: AppConfig::default().with_env_overrides(lookup),
            save_path: None,
            load_error: Some(err),
        },
    }
}

pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ConfigError::Json {
        path: path.to_path_buf(),
        source,
    })
}

pub fn save_config_to(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    let io_err = |source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    let body = serde_json::to_string_pretty(config).map_err(|source| ConfigError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, body).map_err(io_err)
}

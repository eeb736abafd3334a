use crate::error::AppError;
use match_client::ClientConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "reunite.toml";

/// Environment variable that overrides the configured service URL
pub const SERVICE_URL_ENV: &str = "REUNITE_SERVICE_URL";

/// App settings, stored as TOML in the app data directory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub service_url: String,
    pub user_agent: String,
    pub connect_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        let client = ClientConfig::default();
        Self {
            service_url: client.base_url,
            user_agent: client.user_agent,
            connect_timeout_secs: client.connect_timeout_secs,
        }
    }
}

impl AppConfig {
    pub fn to_client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.service_url.clone(),
            user_agent: self.user_agent.clone(),
            connect_timeout_secs: self.connect_timeout_secs,
        }
    }

    /// Replaces the service URL with `url` if it is set and non-blank
    pub fn with_service_url_override(mut self, url: Option<String>) -> Self {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            self.service_url = url.trim().to_string();
        }
        self
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }
}

/// Get the app data directory for the current platform
pub fn get_app_data_dir() -> PathBuf {
    #[cfg(target_os = "android")]
    {
        for d in [
            "/data/user/0/org.reunite.app/files",
            "/data/data/org.reunite.app/files",
        ] {
            let p = PathBuf::from(d);
            if p.exists() {
                return p;
            }
        }
        PathBuf::from("./data")
    }

    #[cfg(not(target_os = "android"))]
    {
        // On desktop, use ./data directory
        PathBuf::from("./data")
    }
}

pub fn get_config_path() -> PathBuf {
    get_app_data_dir().join(CONFIG_FILE)
}

/// Reads the config file; a missing file yields the defaults
pub fn load_from(path: &Path) -> Result<AppConfig, AppError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(AppConfig::from_toml(&content)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::debug!("No config at {}, using defaults", path.display());
            Ok(AppConfig::default())
        }
        Err(e) => Err(AppError::Config(format!(
            "Cannot read {}: {}",
            path.display(),
            e
        ))),
    }
}

pub fn save_to(path: &Path, config: &AppConfig) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, config.to_toml()?)?;
    log::info!("Saved config to {}", path.display());
    Ok(())
}

/// Loads the effective config: file (or defaults) plus environment override
pub fn load_config() -> Result<AppConfig, AppError> {
    let config = load_from(&get_config_path())?;
    Ok(config.with_service_url_override(std::env::var(SERVICE_URL_ENV).ok()))
}

pub fn save_config(config: &AppConfig) -> Result<(), AppError> {
    save_to(&get_config_path(), config)
}

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub use_json: bool,
    /// hourly | daily | never
    pub rotation: String,
    #[serde(default = "ServiceConfig::hospital_default")]
    pub hospital: ServiceConfig,
    #[serde(default = "ServiceConfig::library_default")]
    pub library: ServiceConfig,
}

/// Listener settings for one HTTP service
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServiceConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    pub host: String,
    pub port: u16,
}

fn default_enabled() -> bool {
    true
}

impl ServiceConfig {
    pub fn hospital_default() -> Self {
        Self {
            enabled: true,
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }

    pub fn library_default() -> Self {
        Self {
            enabled: true,
            host: "0.0.0.0".to_string(),
            port: 8001,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_dir: "./logs".to_string(),
            log_file: "hospital_library.log".to_string(),
            use_json: false,
            rotation: "daily".to_string(),
            hospital: ServiceConfig::hospital_default(),
            library: ServiceConfig::library_default(),
        }
    }
}

impl AppConfig {
    /// Load `config/{env}.yaml`
    pub fn load(env: &str) -> anyhow::Result<Self> {
        let config_path = format!("config/{}.yaml", env);
        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path))?;
        Self::from_yaml(&content).with_context(|| format!("Failed to parse {}", config_path))
    }

    pub fn from_yaml(content: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }
}

use anyhow::Context;
use serde::Deserialize;
use std::path::PathBuf;

/// Environment variable naming an optional YAML config file.
const CONFIG_ENV: &str = "TAGSERVE_CONFIG";

/// Environment override for the bind address.
const LISTEN_ENV: &str = "LISTEN";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Address the listener binds to.
    pub listen_addr: String,

    /// Identity string used for the `Server` header and the
    /// `<cs371server>` tag.
    pub server_name: String,

    /// Directory requested paths are resolved against.
    pub web_root: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8080".to_string(),
            server_name: "tagserve/0.1".to_string(),
            web_root: PathBuf::from("."),
        }
    }
}

impl Config {
    /// Loads the configuration.
    ///
    /// If `TAGSERVE_CONFIG` names a YAML file, it is loaded (missing keys
    /// fall back to defaults); otherwise defaults apply. A `LISTEN`
    /// environment variable overrides the bind address either way. An
    /// unreadable config file is logged and ignored rather than fatal.
    pub fn load() -> Self {
        let mut config = match std::env::var(CONFIG_ENV) {
            Ok(path) => Self::from_file(&path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {:#}", path, e);
                Self::default()
            }),
            Err(_) => Self::default(),
        };

        if let Ok(addr) = std::env::var(LISTEN_ENV) {
            config.listen_addr = addr;
        }

        config
    }

    /// Parses a YAML config file.
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path))?;

        let config = serde_yaml::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path))?;

        Ok(config)
    }
}

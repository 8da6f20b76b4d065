use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;
use system_capabilities::ListingMode;

type Result<T> = anyhow::Result<T>;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "DIRLIST_CONFIG";
/// Config file picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "dirlist.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_debug")]
    pub debug: bool,
    #[serde(default)]
    pub listing_mode: ListingMode,
    #[serde(default = "default_path")]
    pub default_path: String,
    #[serde(default = "default_cors")]
    pub cors: bool,
}

impl ServerConfig {
    /// Resolves which config file to load, if any.
    ///
    /// An explicit `DIRLIST_CONFIG` is returned even when the file is missing,
    /// so that a typo fails startup instead of silently using defaults.
    pub fn locate() -> Option<PathBuf> {
        if let Some(explicit) = std::env::var_os(CONFIG_ENV_VAR) {
            return Some(PathBuf::from(explicit));
        }
        let fallback = Path::new(DEFAULT_CONFIG_FILE);
        fallback.exists().then(|| fallback.to_path_buf())
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Self::from_str(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("failed to deserialize server config")
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Log filter used when `RUST_LOG` is not set.
    pub fn default_log_filter(&self) -> &'static str {
        if self.debug { "debug" } else { "info" }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            debug: default_debug(),
            listing_mode: ListingMode::default(),
            default_path: default_path(),
            cors: default_cors(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_debug() -> bool {
    true
}

fn default_path() -> String {
    "/".to_string()
}

fn default_cors() -> bool {
    true
}

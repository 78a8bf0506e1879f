//! Server configuration, read from a TOML file.
//!
//! ```toml
//! bind = "0.0.0.0:8080"
//! database_path = "/var/lib/pagecraft/pages.db"
//! public_base_url = "https://pages.example.com"
//! site_name = "Example Pages"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to.
    pub bind: String,
    pub database_path: PathBuf,
    /// Prefix for public page links returned by the API. Empty means
    /// relative links.
    pub public_base_url: String,
    pub site_name: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8080".to_string(),
            database_path: PathBuf::from("pagecraft.db"),
            public_base_url: String::new(),
            site_name: "Pagecraft".to_string(),
        }
    }
}

impl ServerConfig {
    /// Loads the config file at `path`.
    ///
    /// A missing file yields the defaults; an unreadable or malformed one is
    /// an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            info!("No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Loaded config from {:?}", path);
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Public URL of a page served under `/p/{slug}`.
    pub fn public_url(&self, slug: &str) -> String {
        format!("{}/p/{}", self.public_base_url.trim_end_matches('/'), slug)
    }
}

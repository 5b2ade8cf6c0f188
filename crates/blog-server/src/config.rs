use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ServerError, ServerResult};

/// Server settings, loadable from TOML.
///
/// Missing keys fall back to [`ServerConfig::default`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Path prefix every post route is mounted under.
    pub api_prefix: String,
    /// JSON file to load posts from at startup.
    pub seed_path: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            api_prefix: "/v1/api/blog".into(),
            seed_path: None,
        }
    }
}

impl ServerConfig {
    pub fn from_toml_str(s: &str) -> ServerResult<Self> {
        let config: Self = toml::from_str(s).map_err(|e| ServerError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> ServerResult<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::from_toml_str(&data)
    }

    pub fn validate(&self) -> ServerResult<()> {
        if !self.api_prefix.starts_with('/') {
            return Err(ServerError::Config(format!(
                "api_prefix must start with '/': {}",
                self.api_prefix
            )));
        }
        if self.api_prefix.len() > 1 && self.api_prefix.ends_with('/') {
            return Err(ServerError::Config(format!(
                "api_prefix must not end with '/': {}",
                self.api_prefix
            )));
        }
        Ok(())
    }
}

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use url::Url;

use crate::error::ConfigError;
use crate::prefix::Prefix;
use crate::rewrite::PathRewriter;

/// Interceptor configuration loaded from `~/.config/pathshim/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShimConfig {
    /// Path fragment prepended to intercepted targets (e.g. "/gw").
    pub prefix: String,
    /// Document base location used to resolve relative socket paths.
    pub base_url: String,
}

impl Default for ShimConfig {
    fn default() -> Self {
        Self {
            prefix: "/ingress".to_string(),
            base_url: "http://localhost/".to_string(),
        }
    }
}

impl ShimConfig {
    /// Parsed base location.
    pub fn base(&self) -> Result<Url, ConfigError> {
        Url::parse(&self.base_url).map_err(|source| ConfigError::InvalidBaseUrl {
            url: self.base_url.clone(),
            source,
        })
    }

    pub fn prefix(&self) -> Prefix {
        Prefix::new(self.prefix.as_str())
    }

    /// Builds the rewriter the interceptors share.
    ///
    /// A prefix that is empty once one trailing slash is dropped leaves
    /// nothing to rewrite into and is refused.
    pub fn rewriter(&self) -> Result<PathRewriter, ConfigError> {
        if Prefix::from_ingress_path(&self.prefix).is_none() {
            return Err(ConfigError::EmptyPrefix {
                prefix: self.prefix.clone(),
            });
        }
        Ok(PathRewriter::new(self.prefix(), self.base()?))
    }
}

/// Read configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<ShimConfig, ConfigError> {
    let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&data).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(not(target_arch = "wasm32"))]
pub fn config_path() -> anyhow::Result<std::path::PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("pathshim")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_or_init() -> anyhow::Result<ShimConfig> {
    let path = config_path()?;
    load_or_init_at(&path)
}

/// Same as [`load_or_init`] for a caller-chosen path.
pub fn load_or_init_at(path: &Path) -> anyhow::Result<ShimConfig> {
    if !path.exists() {
        let default_cfg = ShimConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    Ok(load_from(path)?)
}

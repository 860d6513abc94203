//! Error types for configuration and installation.
//!
//! Rewriting itself has no error type: every failure there degrades to the
//! unchanged input.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse config file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("prefix {prefix:?} is empty, nothing to install")]
    EmptyPrefix { prefix: String },
    #[error("invalid base url {url:?}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InstallError {
    /// Installation is one-shot; there is no reconfiguration path.
    #[error("interceptors are already installed")]
    AlreadyInstalled,
}

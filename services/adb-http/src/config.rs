//! Configuration loading
//!
//! Settings come from, highest precedence first: command-line flags,
//! environment variables, the `adb-http.toml` config file, then defaults.

use std::net::{Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::adb::runner::DEFAULT_ADB_PROGRAM;

/// Name of the config file looked up on disk
pub const CONFIG_FILE_NAME: &str = "adb-http.toml";

/// Default port
pub const DEFAULT_PORT: u16 = 8080;

/// Errors that can occur while loading the config file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Find a config file by walking up the directory tree, then checking global config.
///
/// Search order:
/// 1. `start` and its parent directories (walking up to root)
/// 2. Global config at `<config dir>/adb-http/`
fn find_config_file(start: &Path, filename: &str) -> Option<PathBuf> {
    let local = start
        .ancestors()
        .map(|dir| dir.join(filename))
        .find(|candidate| candidate.exists());
    if local.is_some() {
        return local;
    }

    dirs::config_dir()
        .map(|dir| dir.join("adb-http").join(filename))
        .filter(|path| path.exists())
}

/// Contents of `adb-http.toml`; every key is optional
///
/// ```toml
/// listen = "0.0.0.0:8080"
/// adb = "/opt/android-sdk/platform-tools/adb"
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub listen: Option<SocketAddr>,
    pub adb: Option<String>,
}

impl FileConfig {
    /// Load the config file
    ///
    /// An explicit path must exist. Without one, the file is searched for
    /// from the current directory upward, then in the global config dir;
    /// finding nothing is not an error.
    pub fn load(explicit: Option<&Path>) -> Result<Option<Self>, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from_path(path).map(Some);
        }

        let cwd = std::env::current_dir().unwrap_or_default();
        match find_config_file(&cwd, CONFIG_FILE_NAME) {
            Some(path) => {
                tracing::debug!("Loading config from: {}", path.display());
                Self::load_from_path(&path).map(Some)
            }
            None => {
                tracing::debug!("No {} found", CONFIG_FILE_NAME);
                Ok(None)
            }
        }
    }

    /// Load from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Resolved server settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to
    pub listen: SocketAddr,
    /// Program invoked as adb
    pub adb: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
            adb: DEFAULT_ADB_PROGRAM.to_string(),
        }
    }
}

impl ServerConfig {
    /// Layer explicit overrides (flags or environment) over the config file
    pub fn resolve(
        file: Option<FileConfig>,
        listen: Option<SocketAddr>,
        adb: Option<String>,
    ) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();
        Self {
            listen: listen.or(file.listen).unwrap_or(defaults.listen),
            adb: adb.or(file.adb).unwrap_or(defaults.adb),
        }
    }
}

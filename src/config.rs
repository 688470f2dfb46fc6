// File: src/config.rs
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::net::{Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

pub const CHAMPION_MAPPING_FILE_NAME: &str = "championmaps.txt";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_HEADER_READ_TIMEOUT_SECS: u64 = 10;

/// Service settings. Every field is optional in the JSON file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub bind: SocketAddr,
    /// Relative paths are resolved against the working directory.
    pub mapping_file: PathBuf,
    /// Idle clients that have not finished their request head are dropped after this.
    pub header_read_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from((Ipv4Addr::LOCALHOST, DEFAULT_PORT)),
            mapping_file: PathBuf::from(CHAMPION_MAPPING_FILE_NAME),
            header_read_timeout_secs: DEFAULT_HEADER_READ_TIMEOUT_SECS,
        }
    }
}

impl Config {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Defaults, or the given file when present.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => {
                log::debug!("Loading config from {}", path.display());
                Self::from_path(path)
            }
            None => Ok(Self::default()),
        }
    }
}

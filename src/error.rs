// src/error.rs
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to build the alias table at startup. Always fatal.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read champion mappings at {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    /// A record that is not exactly `<alias> <championID>`.
    #[error("Malformed record in {} at line {line}: expected 2 tokens, found {tokens}", path.display())]
    Malformed {
        path: PathBuf,
        line: usize,
        tokens: usize,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("Failed to parse config file at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        source: io::Error,
    },

    #[error("Connection error: {0}")]
    Io(#[from] io::Error),
}

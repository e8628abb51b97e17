//! Errors of the configuration and I/O surfaces.
//!
//! Formatting itself cannot fail; only loading configuration and reading or
//! writing files can.

use std::io;

/// Errors raised while loading configuration or moving text in and out.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading or writing a file (or stdin/stdout) failed.
    #[error("failed to access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The configuration file is not valid TOML or has unknown keys.
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

impl Error {
    pub fn io(path: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

//! Error type shared by the fallible construction paths (config, catalog,
//! audio output). Transport operations never return errors; they degrade
//! silently and log instead.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlayerError {
    /// A controller needs at least one track to keep its cursor valid.
    #[error("catalog has no tracks")]
    EmptyCatalog,

    #[error("failed to open {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {path:?}: {reason}")]
    Decode { path: PathBuf, reason: String },

    /// No usable audio output device.
    #[error("audio output unavailable: {0}")]
    Output(String),

    #[error("failed to load config: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

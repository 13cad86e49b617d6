//! Application errors

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Reading or writing the config file failed.
    #[error("Config I/O error at {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file exists but is not valid JSON for [`crate::config::Config`].
    #[error("Invalid config at {path}: {source}")]
    ConfigFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The home directory could not be determined.
    #[error("Could not determine home directory")]
    NoHomeDir,

    /// Terminal setup, drawing or event reading failed.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

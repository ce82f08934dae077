use std::path::PathBuf;

use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid size parameter: {size}. Must be WxH or a single positive integer")]
    InvalidSize { size: String },

    #[error("Size must be greater than 0, got: {size}")]
    ZeroSize { size: String },

    #[error("Could not load config {path:?}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: icon_resizer::Error,
    },
}

//! Crate-level error type and `Result` alias.
//! Converts underlying I/O, image codec, resizer and config errors, and
//! provides semantic variants for argument validation.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Resize error: {0}")]
    Resize(String),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("Size must be greater than 0, got: {width}x{height}")]
    ZeroSize { width: u32, height: u32 },

    #[error("Processing error: {0}")]
    Processing(String),
}

impl Error {
    pub fn resize<E: std::fmt::Display>(e: E) -> Self {
        Error::Resize(e.to_string())
    }
}

impl From<fast_image_resize::ResizeError> for Error {
    fn from(e: fast_image_resize::ResizeError) -> Self {
        Error::resize(e)
    }
}

impl From<fast_image_resize::ImageBufferError> for Error {
    fn from(e: fast_image_resize::ImageBufferError) -> Self {
        Error::resize(e)
    }
}

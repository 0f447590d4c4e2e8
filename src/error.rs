//! Crate-level error type and `Result` alias for structured error handling.
//! Converts underlying I/O, decoder/encoder, resize, and report errors.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot decode {path:?}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("PNG encode error: {0}")]
    Encode(#[source] image::ImageError),

    #[error("Image must be at least 1x1 pixels, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Resize error: {0}")]
    Resize(String),

    #[error("cannot move finished image into place at {path:?}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Report error: {0}")]
    Report(#[from] serde_json::Error),
}

impl Error {
    pub fn resize<E: std::fmt::Display>(e: E) -> Self {
        Error::Resize(e.to_string())
    }
}

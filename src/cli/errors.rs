use std::path::PathBuf;

use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Input image not found: {path:?}")]
    MissingInput { path: PathBuf },

    #[error(transparent)]
    Crop(#[from] ytcrop::Error),
}

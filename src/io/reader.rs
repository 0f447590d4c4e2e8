use std::path::Path;

use image::{DynamicImage, ImageError, ImageReader};
use tracing::info;

use crate::error::{Error, Result};

/// Decode the image at `path`. The format is sniffed from the file content,
/// so a misnamed extension still decodes. A missing or unreadable file is
/// reported as a decode failure for that path.
pub fn open_image(path: &Path) -> Result<DynamicImage> {
    let decode_err = |source: ImageError| Error::Decode {
        path: path.to_path_buf(),
        source,
    };

    let reader = ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|e| decode_err(ImageError::IoError(e)))?;
    let format = reader.format();
    let img = reader.decode().map_err(decode_err)?;

    info!(
        "Opened {:?} ({:?}, {:?}): {}x{}",
        path,
        format,
        img.color(),
        img.width(),
        img.height()
    );
    Ok(img)
}

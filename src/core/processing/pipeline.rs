use image::DynamicImage;
use tracing::info;

use crate::core::processing::crop::{calculate_crop_rect, crop_image};
use crate::core::processing::resize::resize_exact;
use crate::error::{Error, Result};
use crate::types::{CropRect, Size};

/// Center-crop `img` to the aspect ratio of `target`, then resample the
/// cropped region to exactly `target`. Returns the result and the rectangle
/// that was kept, in source coordinates.
pub fn crop_and_resize_pipeline(
    img: &DynamicImage,
    target: Size,
) -> Result<(DynamicImage, CropRect)> {
    let original = Size::new(img.width(), img.height());
    let rect = calculate_crop_rect(original, target)?;
    info!("Crop rectangle {} ({}) of {}", rect, rect.size(), original);

    let cropped = crop_image(img, rect)?;
    let resized = resize_exact(cropped, target).map_err(Error::resize)?;

    Ok((resized, rect))
}

//! High-level library API: crop an image file to channel art on disk, or
//! crop an already decoded image in memory. Prefer these entrypoints over the
//! low-level processing modules when embedding ytcrop.
use std::path::Path;

use image::DynamicImage;
use tracing::{info, warn};

use crate::core::params::CropParams;
use crate::core::processing::pipeline::crop_and_resize_pipeline;
use crate::core::processing::resize::pixel_layout;
use crate::error::Result;
use crate::io::reader::open_image;
use crate::io::writers::{StagedFile, stage_png, stage_report_sidecar};
use crate::types::{CropRect, CropReport, Size, TARGET_SIZE};

/// Center-crop and resize a decoded image to 1024x576 (no disk I/O).
pub fn crop_to_buffer(img: &DynamicImage) -> Result<(DynamicImage, CropRect)> {
    crop_and_resize_pipeline(img, TARGET_SIZE)
}

/// Decode, crop and encode without touching `output` yet.
fn crop_staged(input: &Path, output: &Path) -> Result<(CropReport, StagedFile)> {
    let source = open_image(input)?;
    let original = Size::new(source.width(), source.height());
    info!("Original image size: {}", original);

    let (art, crop) = crop_to_buffer(&source)?;
    drop(source);

    let png = stage_png(output, &art)?;

    let report = CropReport {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        original,
        crop,
        output_size: Size::new(art.width(), art.height()),
        layout: pixel_layout(&art),
    };
    Ok((report, png))
}

/// Crop `input` to YouTube channel art and write it to `output` as PNG.
///
/// Any existing file at `output` is replaced. On error the destination is
/// left as it was.
pub fn crop_for_youtube(input: &Path, output: &Path) -> Result<CropReport> {
    let (report, png) = crop_staged(input, output)?;
    png.commit()?;
    info!(
        "Cropped image saved as: {:?} ({})",
        report.output, report.output_size
    );
    Ok(report)
}

/// Run a crop described by `params`, writing the JSON sidecar when requested.
///
/// The PNG and the sidecar land together or not at all: both are fully
/// staged first, the sidecar is moved into place, then the PNG. If the PNG
/// cannot be moved into place the sidecar is removed again.
pub fn crop_with_params(params: &CropParams) -> Result<CropReport> {
    if !params.report {
        return crop_for_youtube(&params.input, &params.output);
    }

    let (report, png) = crop_staged(&params.input, &params.output)?;
    let sidecar = stage_report_sidecar(&report)?;
    let sidecar_path = sidecar.commit()?;

    if let Err(e) = png.commit() {
        if let Err(rm) = std::fs::remove_file(&sidecar_path) {
            warn!("Could not remove crop report {:?}: {}", sidecar_path, rm);
        }
        return Err(e);
    }

    info!(
        "Cropped image saved as: {:?} ({}), report {:?}",
        report.output, report.output_size, sidecar_path
    );
    Ok(report)
}

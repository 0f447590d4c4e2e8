use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::DynamicImage;
use image::codecs::png::PngEncoder;

use crate::error::{Error, Result};
use crate::io::writers::staged::StagedFile;

fn encode_png(file: &File, img: &DynamicImage) -> Result<()> {
    let mut writer = BufWriter::new(file);
    img.write_with_encoder(PngEncoder::new(&mut writer))
        .map_err(Error::Encode)?;
    writer.flush()?;
    Ok(())
}

/// Encode `img` as PNG into a temporary file beside `output`, replacing any
/// existing file once committed. Nothing appears at `output` until then, so a
/// failure never leaves a truncated PNG behind.
pub fn stage_png(output: &Path, img: &DynamicImage) -> Result<StagedFile> {
    StagedFile::stage(output, ".png.part", |file| encode_png(file, img))
}

use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use image::{DynamicImage, ImageBuffer};
use tracing::{debug, info};

use crate::types::{PixelLayout, Size};

fn lanczos_options() -> ResizeOptions {
    ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3))
}

pub fn resize_u8_image(
    data: Vec<u8>,
    pixel_type: PixelType,
    original: Size,
    target: Size,
) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(original.width, original.height, data, pixel_type)?;
    let mut dst_image = Image::new(target.width, target.height, pixel_type);
    resizer.resize(&src_image, &mut dst_image, &lanczos_options())?;

    Ok(dst_image.into_vec())
}

pub fn resize_u16_image(
    data: &[u16],
    pixel_type: PixelType,
    original: Size,
    target: Size,
) -> Result<Vec<u16>, Box<dyn std::error::Error>> {
    // fast_image_resize takes 16-bit samples as native-endian bytes
    let mut src_bytes = Vec::with_capacity(data.len() * 2);
    for &v in data {
        src_bytes.extend_from_slice(&v.to_ne_bytes());
    }

    let dst_bytes = resize_u8_image(src_bytes, pixel_type, original, target)?;
    let mut out = Vec::with_capacity(dst_bytes.len() / 2);
    for chunk in dst_bytes.chunks_exact(2) {
        out.push(u16::from_ne_bytes([chunk[0], chunk[1]]));
    }
    Ok(out)
}

/// Layout `resize_exact` will produce for `img`.
pub fn pixel_layout(img: &DynamicImage) -> PixelLayout {
    match img {
        DynamicImage::ImageLuma8(_) => PixelLayout::L8,
        DynamicImage::ImageLumaA8(_) => PixelLayout::La8,
        DynamicImage::ImageRgb8(_) => PixelLayout::Rgb8,
        DynamicImage::ImageRgba8(_) => PixelLayout::Rgba8,
        DynamicImage::ImageLuma16(_) => PixelLayout::L16,
        DynamicImage::ImageLumaA16(_) => PixelLayout::La16,
        DynamicImage::ImageRgb16(_) => PixelLayout::Rgb16,
        _ => PixelLayout::Rgba16,
    }
}

fn layout_pixel_type(layout: PixelLayout) -> PixelType {
    match layout {
        PixelLayout::L8 => PixelType::U8,
        PixelLayout::La8 => PixelType::U8x2,
        PixelLayout::Rgb8 => PixelType::U8x3,
        PixelLayout::Rgba8 => PixelType::U8x4,
        PixelLayout::L16 => PixelType::U16,
        PixelLayout::La16 => PixelType::U16x2,
        PixelLayout::Rgb16 => PixelType::U16x3,
        PixelLayout::Rgba16 => PixelType::U16x4,
    }
}

fn buffer_error(layout: PixelLayout, target: Size) -> Box<dyn std::error::Error> {
    format!("resized {layout} buffer does not fill {target}").into()
}

/// Resize `img` to exactly `target` with a Lanczos3 convolution, keeping its
/// pixel layout. Float images, which PNG cannot hold, come back as `Rgba16`.
pub fn resize_exact(
    img: DynamicImage,
    target: Size,
) -> Result<DynamicImage, Box<dyn std::error::Error>> {
    let original = Size::new(img.width(), img.height());
    let layout = pixel_layout(&img);
    let pixel_type = layout_pixel_type(layout);

    let is_float = matches!(
        img,
        DynamicImage::ImageRgb32F(_) | DynamicImage::ImageRgba32F(_)
    );
    if original == target && !is_float {
        debug!(size = %original, "Image already at target size, skipping resize");
        return Ok(img);
    }

    info!(
        "Resizing {} image from {} to {} (Lanczos3)",
        layout, original, target
    );

    let (w, h) = (target.width, target.height);
    let resized = match img {
        DynamicImage::ImageLuma8(buf) => {
            let out = resize_u8_image(buf.into_raw(), pixel_type, original, target)?;
            DynamicImage::ImageLuma8(
                ImageBuffer::from_raw(w, h, out).ok_or_else(|| buffer_error(layout, target))?,
            )
        }
        DynamicImage::ImageLumaA8(buf) => {
            let out = resize_u8_image(buf.into_raw(), pixel_type, original, target)?;
            DynamicImage::ImageLumaA8(
                ImageBuffer::from_raw(w, h, out).ok_or_else(|| buffer_error(layout, target))?,
            )
        }
        DynamicImage::ImageRgb8(buf) => {
            let out = resize_u8_image(buf.into_raw(), pixel_type, original, target)?;
            DynamicImage::ImageRgb8(
                ImageBuffer::from_raw(w, h, out).ok_or_else(|| buffer_error(layout, target))?,
            )
        }
        DynamicImage::ImageRgba8(buf) => {
            let out = resize_u8_image(buf.into_raw(), pixel_type, original, target)?;
            DynamicImage::ImageRgba8(
                ImageBuffer::from_raw(w, h, out).ok_or_else(|| buffer_error(layout, target))?,
            )
        }
        DynamicImage::ImageLuma16(buf) => {
            let out = resize_u16_image(buf.as_raw(), pixel_type, original, target)?;
            DynamicImage::ImageLuma16(
                ImageBuffer::from_raw(w, h, out).ok_or_else(|| buffer_error(layout, target))?,
            )
        }
        DynamicImage::ImageLumaA16(buf) => {
            let out = resize_u16_image(buf.as_raw(), pixel_type, original, target)?;
            DynamicImage::ImageLumaA16(
                ImageBuffer::from_raw(w, h, out).ok_or_else(|| buffer_error(layout, target))?,
            )
        }
        DynamicImage::ImageRgb16(buf) => {
            let out = resize_u16_image(buf.as_raw(), pixel_type, original, target)?;
            DynamicImage::ImageRgb16(
                ImageBuffer::from_raw(w, h, out).ok_or_else(|| buffer_error(layout, target))?,
            )
        }
        other => {
            if is_float {
                debug!("Converting {:?} source to Rgba16 for resize", other.color());
            }
            let rgba = other.to_rgba16();
            let out = resize_u16_image(rgba.as_raw(), pixel_type, original, target)?;
            DynamicImage::ImageRgba16(
                ImageBuffer::from_raw(w, h, out).ok_or_else(|| buffer_error(layout, target))?,
            )
        }
    };

    Ok(resized)
}

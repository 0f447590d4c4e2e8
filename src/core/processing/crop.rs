use image::DynamicImage;
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::{CropRect, Size, TARGET_SIZE};

/// Compute the centered crop of `source` whose aspect ratio matches `target`.
///
/// A source relatively wider than the target keeps its full height and loses
/// equal margins left and right; otherwise it keeps its full width and loses
/// equal margins top and bottom. Floors are taken on exact integer products so
/// large inputs never drift by a pixel through float rounding.
pub fn calculate_crop_rect(source: Size, target: Size) -> Result<CropRect> {
    if source.width == 0 || source.height == 0 {
        return Err(Error::InvalidDimensions {
            width: source.width,
            height: source.height,
        });
    }

    let (w, h) = (u64::from(source.width), u64::from(source.height));
    let (tw, th) = (u64::from(target.width), u64::from(target.height));

    // w / h > tw / th without dividing
    let rect = if w * th > h * tw {
        let new_width = ((h * tw / th) as u32).max(1);
        let left = (source.width - new_width) / 2;
        CropRect {
            left,
            top: 0,
            right: left + new_width,
            bottom: source.height,
        }
    } else {
        let new_height = ((w * th / tw) as u32).max(1);
        let top = (source.height - new_height) / 2;
        CropRect {
            left: 0,
            top,
            right: source.width,
            bottom: top + new_height,
        }
    };

    debug!(
        source = %source,
        target = %target,
        crop = %rect,
        "Computed centered crop rectangle"
    );
    Ok(rect)
}

/// Crop rectangle for the fixed channel-art target.
pub fn channel_art_crop_rect(source: Size) -> Result<CropRect> {
    calculate_crop_rect(source, TARGET_SIZE)
}

pub fn crop_image(img: &DynamicImage, rect: CropRect) -> Result<DynamicImage> {
    let bounds = Size::new(img.width(), img.height());
    if !rect.fits_within(bounds) {
        return Err(Error::InvalidDimensions {
            width: rect.right.saturating_sub(rect.left),
            height: rect.bottom.saturating_sub(rect.top),
        });
    }
    Ok(img.crop_imm(rect.left, rect.top, rect.width(), rect.height()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, Rgb, RgbImage};

    fn rect_for(width: u32, height: u32) -> CropRect {
        channel_art_crop_rect(Size::new(width, height)).unwrap()
    }

    #[test]
    fn test_wide_scenario() {
        // 2000x1000 has ratio 2.0, wider than 1024/576
        let rect = rect_for(2000, 1000);
        assert_eq!(
            rect,
            CropRect {
                left: 111,
                top: 0,
                right: 1888,
                bottom: 1000
            }
        );
        assert_eq!(rect.width(), 1777);
    }

    #[test]
    fn test_tall_scenario() {
        let rect = rect_for(800, 1000);
        assert_eq!(
            rect,
            CropRect {
                left: 0,
                top: 275,
                right: 800,
                bottom: 725
            }
        );
        assert_eq!(rect.height(), 450);
    }

    #[test]
    fn test_exact_ratio_keeps_everything() {
        let rect = rect_for(2048, 1152);
        assert_eq!(rect.size(), Size::new(2048, 1152));
        assert_eq!((rect.left, rect.top), (0, 0));

        let rect = rect_for(1024, 576);
        assert_eq!(rect.size(), TARGET_SIZE);
    }

    #[test]
    fn test_square_crops_vertically() {
        let rect = rect_for(1000, 1000);
        // 1000 * 576 / 1024 = 562.5
        assert_eq!(rect.height(), 562);
        assert_eq!(rect.top, 219);
        assert_eq!(rect.left, 0);
        assert_eq!(rect.right, 1000);
    }

    #[test]
    fn test_wide_offsets_match_formula() {
        for &(w, h) in &[(1920u32, 1000u32), (3000, 577), (1025, 576), (9999, 17), (5, 2)] {
            let rect = rect_for(w, h);
            let new_width = (u64::from(h) * 1024 / 576) as u32;
            assert_eq!(rect.left, (w - new_width) / 2, "{w}x{h}");
            assert_eq!(rect.top, 0, "{w}x{h}");
            assert_eq!(rect.bottom, h, "{w}x{h}");
        }
    }

    #[test]
    fn test_tall_offsets_match_formula() {
        for &(w, h) in &[(1024u32, 577u32), (800, 1000), (333, 4096), (1, 1), (640, 480)] {
            let rect = rect_for(w, h);
            let new_height = ((u64::from(w) * 576 / 1024) as u32).max(1);
            assert_eq!(rect.top, (h - new_height) / 2, "{w}x{h}");
            assert_eq!(rect.left, 0, "{w}x{h}");
            assert_eq!(rect.right, w, "{w}x{h}");
        }
    }

    #[test]
    fn test_rect_stays_in_bounds_and_keeps_ratio() {
        let target_ratio = f64::from(TARGET_SIZE.width) / f64::from(TARGET_SIZE.height);
        for w in (1..4000).step_by(97) {
            for h in (1..4000).step_by(89) {
                let rect = rect_for(w, h);
                assert!(rect.fits_within(Size::new(w, h)), "{w}x{h} -> {rect}");

                let (cw, ch) = (f64::from(rect.width()), f64::from(rect.height()));
                let width_off = (cw - ch * target_ratio).abs();
                let height_off = (ch - cw / target_ratio).abs();
                assert!(
                    width_off <= 1.0 || height_off <= 1.0,
                    "{w}x{h} -> {rect} is off ratio"
                );
            }
        }
    }

    #[test]
    fn test_degenerate_sources_yield_non_empty_rect() {
        assert_eq!(rect_for(1, 1).size(), Size::new(1, 1));
        assert_eq!(rect_for(1, 5000).size(), Size::new(1, 1));
        let rect = rect_for(5000, 1);
        assert_eq!(rect.size(), Size::new(1, 1));
        assert_eq!(rect.left, 2499);
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert!(matches!(
            channel_art_crop_rect(Size::new(0, 10)),
            Err(Error::InvalidDimensions { width: 0, height: 10 })
        ));
    }

    #[test]
    fn test_crop_image_takes_centered_region() {
        // Mark column 111, the first kept column for a 2000x1000 source
        let mut buf = RgbImage::from_pixel(2000, 1000, Rgb([0, 0, 0]));
        for y in 0..1000 {
            buf.put_pixel(111, y, Rgb([255, 0, 0]));
        }
        let img = DynamicImage::ImageRgb8(buf);
        let rect = rect_for(2000, 1000);

        let cropped = crop_image(&img, rect).unwrap();
        assert_eq!(cropped.dimensions(), (1777, 1000));
        assert_eq!(cropped.to_rgb8().get_pixel(0, 500), &Rgb([255, 0, 0]));
        assert_eq!(cropped.to_rgb8().get_pixel(1, 500), &Rgb([0, 0, 0]));
    }

    #[test]
    fn test_crop_image_rejects_out_of_bounds() {
        let img = DynamicImage::ImageRgb8(RgbImage::new(10, 10));
        let rect = CropRect {
            left: 5,
            top: 0,
            right: 11,
            bottom: 10,
        };
        assert!(crop_image(&img, rect).is_err());
    }
}

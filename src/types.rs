//! Shared types used across ytcrop.
//! Includes the fixed channel-art target (`TARGET_SIZE`), pixel `Size`,
//! the source-space `CropRect`, the `PixelLayout` carried through resize,
//! and the per-run `CropReport`.
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Width of YouTube channel art in pixels.
pub const TARGET_WIDTH: u32 = 1024;
/// Height of YouTube channel art in pixels.
pub const TARGET_HEIGHT: u32 = 576;
/// Output dimensions every successful run produces.
pub const TARGET_SIZE: Size = Size {
    width: TARGET_WIDTH,
    height: TARGET_HEIGHT,
};

#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Crop rectangle in source-image pixel coordinates, half-open on the
/// right and bottom edges.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct CropRect {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl CropRect {
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }

    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// True when the rectangle is non-empty and lies inside `bounds`.
    pub fn fits_within(&self, bounds: Size) -> bool {
        self.left < self.right
            && self.top < self.bottom
            && self.right <= bounds.width
            && self.bottom <= bounds.height
    }
}

impl std::fmt::Display for CropRect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.left, self.top, self.right, self.bottom
        )
    }
}

/// Pixel layouts the resize step handles natively. Anything else is
/// converted to `Rgba16` before resampling.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum PixelLayout {
    L8,
    La8,
    Rgb8,
    Rgba8,
    L16,
    La16,
    Rgb16,
    Rgba16,
}

impl std::fmt::Display for PixelLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PixelLayout::L8 => "L8",
            PixelLayout::La8 => "La8",
            PixelLayout::Rgb8 => "Rgb8",
            PixelLayout::Rgba8 => "Rgba8",
            PixelLayout::L16 => "L16",
            PixelLayout::La16 => "La16",
            PixelLayout::Rgb16 => "Rgb16",
            PixelLayout::Rgba16 => "Rgba16",
        };
        write!(f, "{}", s)
    }
}

/// Summary of one completed crop, returned by the API and written as the
/// optional JSON sidecar.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct CropReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub original: Size,
    pub crop: CropRect,
    pub output_size: Size,
    pub layout: PixelLayout,
}

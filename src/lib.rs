#![doc = r#"
ytcrop — crop any image to YouTube channel-art dimensions.

The crate center-crops a source image to the 1024:576 aspect ratio, resamples
the kept region to exactly 1024x576 with a Lanczos3 filter, and writes the
result as PNG. It powers the `ytcrop` CLI and can be embedded directly.

Crop a file
-----------
```rust,no_run
use std::path::Path;

fn main() -> ytcrop::Result<()> {
    let report = ytcrop::crop_for_youtube(
        Path::new("v3x_logo.png"),
        Path::new("v3x_logo_youtube_1024x576.png"),
    )?;
    println!("kept {} of {}", report.crop, report.original);
    Ok(())
}
```

Crop in memory
--------------
```rust
use image::{DynamicImage, RgbImage};

fn main() -> ytcrop::Result<()> {
    let img = DynamicImage::ImageRgb8(RgbImage::new(2000, 1000));
    let (art, rect) = ytcrop::crop_to_buffer(&img)?;
    assert_eq!((art.width(), art.height()), (1024, 576));
    assert_eq!((rect.left, rect.right), (111, 1888));
    Ok(())
}
```

Error handling
--------------
All public functions return `ytcrop::Result<T>`; match on `ytcrop::Error` to
tell a bad input apart from a failed write.

Useful modules
--------------
- [`api`] — high-level entry points.
- [`types`] — `Size`, `CropRect`, `PixelLayout`, `CropReport`, target constants.
- [`core`] — crop arithmetic, resize, and the in-memory pipeline.
- [`io`] — image decoding, atomic PNG writer, JSON report sidecar.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
pub use crate::core::params::{CropParams, DEFAULT_INPUT, DEFAULT_OUTPUT};
pub use crate::core::processing::crop::{calculate_crop_rect, channel_art_crop_rect};
pub use error::{Error, Result};
pub use types::{
    CropRect, CropReport, PixelLayout, Size, TARGET_HEIGHT, TARGET_SIZE, TARGET_WIDTH,
};

pub use api::{crop_for_youtube, crop_to_buffer, crop_with_params};

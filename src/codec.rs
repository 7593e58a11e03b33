//! Raster codec boundary between image files and the core pixel grid.
//!
//! The core pipeline only ever sees in-memory [`PixelGrid`] values; this
//! module converts to and from raster files in any format the `image` crate
//! recognizes. Images with an alpha channel are flattened to RGB on load
//! (alpha is not part of the pipeline's semantics).

use std::path::Path;

use cartoon_core::{PixelGrid, Rgb};
use image::RgbImage;
use thiserror::Error;

/// Error type for raster decode/encode operations.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("image error for {path}: {source}")]
    Image {
        path: String,
        #[source]
        source: image::ImageError,
    },
}

impl CodecError {
    fn new(path: &Path, source: image::ImageError) -> Self {
        CodecError::Image {
            path: path.display().to_string(),
            source,
        }
    }
}

/// Decode the raster file at `path` into a pixel grid.
pub fn load_grid(path: &Path) -> Result<PixelGrid, CodecError> {
    let rgb: RgbImage = image::open(path)
        .map_err(|e| CodecError::new(path, e))?
        .to_rgb8();
    let (width, height) = rgb.dimensions();
    let pixels = rgb
        .pixels()
        .map(|p| Rgb::new(p.0[0], p.0[1], p.0[2]))
        .collect();
    Ok(PixelGrid::from_pixels(width, height, pixels))
}

/// Encode `grid` to the raster file at `path`; the format is chosen from
/// the file extension.
pub fn save_grid(grid: &PixelGrid, path: &Path) -> Result<(), CodecError> {
    let mut rgb = RgbImage::new(grid.width(), grid.height());
    for (x, y, pixel) in rgb.enumerate_pixels_mut() {
        let p = grid.pixel(x, y);
        *pixel = image::Rgb([p.r, p.g, p.b]);
    }
    rgb.save(path).map_err(|e| CodecError::new(path, e))
}

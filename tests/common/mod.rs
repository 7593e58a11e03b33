//! Common test infrastructure for cartoonify integration tests.
//!
//! Each test file compiles its own copy of this module, so items may appear
//! unused from the perspective of a single test file even though they're
//! used elsewhere.

#![allow(dead_code)]

use std::path::PathBuf;

use cartoon_core::{PixelGrid, Rgb};
use tempfile::TempDir;

/// A deterministic photograph stand-in: smooth gradients with a
/// high-contrast square in the middle.
pub fn synthetic_photo(width: u32, height: u32) -> PixelGrid {
    let mut grid = PixelGrid::filled(width, height, Rgb::BLACK);
    for y in 0..height {
        for x in 0..width {
            let r = ((x * 255) / width.max(1)) as u8;
            let g = ((y * 255) / height.max(1)) as u8;
            grid.set_pixel(x, y, Rgb::new(r, g, 128));
        }
    }
    let (cx0, cx1) = (width / 3, 2 * width / 3);
    let (cy0, cy1) = (height / 3, 2 * height / 3);
    for y in cy0..cy1 {
        for x in cx0..cx1 {
            grid.set_pixel(x, y, Rgb::new(240, 240, 240));
        }
    }
    grid
}

/// Write `grid` as a PNG under `dir` and return its path.
pub fn write_png(dir: &TempDir, name: &str, grid: &PixelGrid) -> PathBuf {
    let path = dir.path().join(name);
    cartoonify::codec::save_grid(grid, &path).expect("failed to write test PNG");
    path
}

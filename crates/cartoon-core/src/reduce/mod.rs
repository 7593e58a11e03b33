//! Color reduction strategies.
//!
//! Two competing ways to shrink the color space of a composited image:
//!
//! - **Interval** ([`quantize_by_palette`]): build a uniform-grid palette
//!   and snap every pixel to its nearest entry. Pixel-independent.
//! - **Segmentation** ([`quantize_by_region`]): partition the image into
//!   connected regions of similar color and recolor each region to its
//!   average. Neighbor-aware.
//!
//! Exactly one strategy runs per pipeline pass, chosen by caller policy via
//! [`ReduceStrategy`]. Both operate in place on the grid they are handed.

mod error;
mod palette;
mod region;

pub use error::ReduceError;
pub use palette::{build_palette, quantize_by_palette, Palette};
pub use region::quantize_by_region;

use crate::grid::PixelGrid;

/// Caller-selected color reduction strategy.
///
/// Carries the strategy's configuration value, mirroring the two tail ends
/// of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReduceStrategy {
    /// Nearest-palette quantization with the given palette step.
    Interval { step: u32 },
    /// Region-growing segmentation with the given deviation threshold.
    Segmentation { deviation: u32 },
}

impl ReduceStrategy {
    /// Run the selected strategy in place on `grid`.
    ///
    /// # Errors
    ///
    /// [`ReduceError::StepOutOfRange`] if an interval step lies outside
    /// `1..=255`; rejected before any pixel is touched.
    pub fn apply(&self, grid: &mut PixelGrid) -> Result<(), ReduceError> {
        match *self {
            ReduceStrategy::Interval { step } => quantize_by_palette(grid, step),
            ReduceStrategy::Segmentation { deviation } => {
                quantize_by_region(grid, deviation);
                Ok(())
            }
        }
    }
}

//! Cartoonifier builder -- the primary ergonomic entry point for the crate.
//!
//! [`Cartoonifier`] wraps the full pipeline (edge detection, dilation,
//! overlay, color reduction) behind fluent configuration with the
//! recognized defaults.

use crate::edges::{detect_edges, dilate, overlay, OverlayMode};
use crate::grid::PixelGrid;
use crate::reduce::ReduceStrategy;

use super::CartoonError;

/// Default Sobel threshold.
pub const DEFAULT_THRESHOLD: u32 = 10;
/// Default edge stroke width.
pub const DEFAULT_EDGE_WIDTH: u32 = 3;
/// Default palette step for interval reduction.
pub const DEFAULT_PALETTE_STEP: u32 = 50;
/// Default deviation threshold for segmentation reduction.
pub const DEFAULT_DEVIATION: u32 = 50;

/// High-level cartoon rendering builder.
///
/// `Cartoonifier` is the recommended entry point for the crate. It runs the
/// complete pipeline -- detect edges, dilate, overlay, reduce colors --
/// behind a fluent builder API with sensible defaults.
///
/// # Design
///
/// - Configuration methods consume and return `self` (standard builder
///   pattern)
/// - [`cartoonify()`](Self::cartoonify) takes `&self` so the builder is
///   **reusable** across multiple images
/// - Configuration is validated when the pipeline runs, before any pixel
///   processing begins
///
/// # Example
///
/// ```
/// use cartoon_core::{Cartoonifier, PixelGrid, ReduceStrategy, Rgb};
///
/// let image = PixelGrid::filled(12, 12, Rgb::new(180, 60, 60));
///
/// let cartoonifier = Cartoonifier::new()
///     .threshold(12)
///     .edge_width(2)
///     .strategy(ReduceStrategy::Segmentation { deviation: 40 });
///
/// let result = cartoonifier.cartoonify(&image).unwrap();
/// assert_eq!(result.dimensions(), image.dimensions());
/// ```
#[derive(Debug, Clone)]
pub struct Cartoonifier {
    threshold: u32,
    edge_width: u32,
    overlay_mode: OverlayMode,
    strategy: ReduceStrategy,
}

impl Cartoonifier {
    /// Create a cartoonifier with the recognized defaults: threshold 10,
    /// edge width 3, hard black strokes, interval reduction with palette
    /// step 50.
    pub fn new() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            edge_width: DEFAULT_EDGE_WIDTH,
            overlay_mode: OverlayMode::Stroke,
            strategy: ReduceStrategy::Interval {
                step: DEFAULT_PALETTE_STEP,
            },
        }
    }

    /// Set the Sobel edge threshold.
    #[inline]
    pub fn threshold(mut self, threshold: u32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the edge stroke width.
    #[inline]
    pub fn edge_width(mut self, width: u32) -> Self {
        self.edge_width = width;
        self
    }

    /// Set how edges are composited onto the source image.
    #[inline]
    pub fn overlay_mode(mut self, mode: OverlayMode) -> Self {
        self.overlay_mode = mode;
        self
    }

    /// Set the color reduction strategy run at the pipeline tail.
    #[inline]
    pub fn strategy(mut self, strategy: ReduceStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Run the full pipeline on `image` and return the cartoonified grid.
    ///
    /// Stages, in order:
    /// 1. [`detect_edges`] with the configured threshold
    /// 2. [`dilate`] the mask by the configured edge width
    /// 3. [`overlay`] the mask onto the source
    /// 4. Apply the configured [`ReduceStrategy`]
    ///
    /// The source grid is never modified; the builder is reusable.
    ///
    /// # Errors
    ///
    /// [`CartoonError::Reduce`] if the configured palette step is outside
    /// `1..=255`. (The overlay stage cannot mismatch here: its mask is
    /// derived from the source image.)
    pub fn cartoonify(&self, image: &PixelGrid) -> Result<PixelGrid, CartoonError> {
        let mut mask = detect_edges(image, self.threshold);
        dilate(&mut mask, self.edge_width);
        let mut combined = overlay(&mask, image, self.overlay_mode)?;
        self.strategy.apply(&mut combined)?;
        Ok(combined)
    }
}

impl Default for Cartoonifier {
    fn default() -> Self {
        Self::new()
    }
}

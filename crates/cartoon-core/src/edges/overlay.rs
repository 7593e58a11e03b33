//! Overlay compositing of an edge mask onto a source image.

use crate::color::Rgb;
use crate::grid::PixelGrid;

use super::{EdgeMask, OverlayError};

/// How edge strokes are composited onto the source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayMode {
    /// Hard masking: every edge pixel becomes pure black, every other pixel
    /// keeps the source color unchanged.
    #[default]
    Stroke,

    /// Fixed-weight alpha compositing of the whole mask over the whole
    /// source, weight 0.3 toward the mask. Computed per channel as
    /// `(7 * source + 3 * mask) / 10` in integer arithmetic, which is the
    /// exact 0.3 weight with truncating division.
    Blend,
}

/// Composite `mask` onto `image`, producing a new grid.
///
/// Pure function: neither input is modified. The two inputs must have
/// identical dimensions; a mismatch is rejected before any pixel is
/// processed.
///
/// # Errors
///
/// [`OverlayError::DimensionMismatch`] if mask and image dimensions differ.
///
/// # Example
///
/// ```
/// use cartoon_core::{overlay, EdgeMask, OverlayMode, PixelGrid, Rgb};
///
/// let image = PixelGrid::filled(3, 3, Rgb::new(200, 100, 50));
/// let mut mask = EdgeMask::background(3, 3);
/// mask.mark(1, 1);
///
/// let combined = overlay(&mask, &image, OverlayMode::Stroke).unwrap();
/// assert_eq!(combined.pixel(1, 1), Rgb::BLACK);
/// assert_eq!(combined.pixel(0, 0), Rgb::new(200, 100, 50));
/// ```
pub fn overlay(
    mask: &EdgeMask,
    image: &PixelGrid,
    mode: OverlayMode,
) -> Result<PixelGrid, OverlayError> {
    if mask.dimensions() != image.dimensions() {
        let (mask_width, mask_height) = mask.dimensions();
        let (image_width, image_height) = image.dimensions();
        return Err(OverlayError::DimensionMismatch {
            mask_width,
            mask_height,
            image_width,
            image_height,
        });
    }

    let mut combined = image.clone();
    let (width, height) = image.dimensions();

    match mode {
        OverlayMode::Stroke => {
            for y in 0..height {
                for x in 0..width {
                    if mask.is_edge(x, y) {
                        combined.set_pixel(x, y, Rgb::BLACK);
                    }
                }
            }
        }
        OverlayMode::Blend => {
            for y in 0..height {
                for x in 0..width {
                    let mask_pixel = if mask.is_edge(x, y) {
                        Rgb::WHITE
                    } else {
                        Rgb::BLACK
                    };
                    combined.set_pixel(x, y, blend(image.pixel(x, y), mask_pixel));
                }
            }
        }
    }

    Ok(combined)
}

/// `0.7 * source + 0.3 * mask` per channel, truncating.
#[inline]
fn blend(source: Rgb, mask: Rgb) -> Rgb {
    let channel = |s: u8, m: u8| ((7 * s as u16 + 3 * m as u16) / 10) as u8;
    Rgb::new(
        channel(source.r, mask.r),
        channel(source.g, mask.g),
        channel(source.b, mask.b),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_image() -> PixelGrid {
        let mut image = PixelGrid::filled(4, 4, Rgb::new(100, 150, 200));
        image.set_pixel(2, 2, Rgb::new(10, 20, 30));
        image
    }

    #[test]
    fn test_stroke_blackens_edges_only() {
        let image = sample_image();
        let mut mask = EdgeMask::background(4, 4);
        mask.mark(0, 0);
        mask.mark(2, 2);

        let combined = overlay(&mask, &image, OverlayMode::Stroke).unwrap();
        assert_eq!(combined.pixel(0, 0), Rgb::BLACK);
        assert_eq!(combined.pixel(2, 2), Rgb::BLACK);
        assert_eq!(combined.pixel(1, 1), Rgb::new(100, 150, 200));
    }

    #[test]
    fn test_stroke_without_edges_is_source() {
        let image = sample_image();
        let mask = EdgeMask::background(4, 4);
        let combined = overlay(&mask, &image, OverlayMode::Stroke).unwrap();
        assert_eq!(combined, image);
    }

    #[test]
    fn test_blend_weights() {
        let image = PixelGrid::filled(1, 1, Rgb::new(100, 150, 200));
        let mut mask = EdgeMask::background(1, 1);
        mask.mark(0, 0);

        // (7 * c + 3 * 255) / 10, truncating.
        let combined = overlay(&mask, &image, OverlayMode::Blend).unwrap();
        assert_eq!(combined.pixel(0, 0), Rgb::new(146, 181, 216));
    }

    #[test]
    fn test_blend_darkens_background_toward_mask() {
        let image = PixelGrid::filled(1, 1, Rgb::new(100, 150, 200));
        let mask = EdgeMask::background(1, 1);

        // Background mask pixels are black, so the blend keeps 70%.
        let combined = overlay(&mask, &image, OverlayMode::Blend).unwrap();
        assert_eq!(combined.pixel(0, 0), Rgb::new(70, 105, 140));
    }

    #[test]
    fn test_dimension_mismatch_is_rejected() {
        let image = PixelGrid::filled(4, 4, Rgb::BLACK);
        let mask = EdgeMask::background(4, 5);
        let err = overlay(&mask, &image, OverlayMode::Stroke).unwrap_err();
        assert_eq!(
            err,
            OverlayError::DimensionMismatch {
                mask_width: 4,
                mask_height: 5,
                image_width: 4,
                image_height: 4,
            }
        );
    }

    #[test]
    fn test_inputs_are_untouched() {
        let image = sample_image();
        let image_before = image.clone();
        let mut mask = EdgeMask::background(4, 4);
        mask.mark(1, 1);
        let mask_before = mask.clone();

        overlay(&mask, &image, OverlayMode::Stroke).unwrap();
        assert_eq!(image, image_before);
        assert_eq!(mask, mask_before);
    }
}

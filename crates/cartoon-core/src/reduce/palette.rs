//! Uniform-grid palette generation and nearest-entry quantization.

use crate::color::Rgb;
use crate::grid::PixelGrid;

use super::ReduceError;

/// An ordered set of representative colors.
///
/// Built deterministically from a step parameter by [`build_palette`] and
/// immutable from then on. The palette is a value owned by the caller, not
/// shared state: two pipeline runs with different steps cannot observe each
/// other's palettes.
///
/// # Example
///
/// ```
/// use cartoon_core::{build_palette, Rgb};
///
/// // Step 255 covers the whole cube with a single cell.
/// let palette = build_palette(255).unwrap();
/// assert_eq!(palette.colors(), &[Rgb::new(127, 127, 127)]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    /// Number of palette entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The entries in insertion order.
    #[inline]
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// The nearest entry to `pixel` by Euclidean RGB distance.
    ///
    /// Scans the full palette in insertion order and keeps the first
    /// minimum found: exact ties resolve to the earlier entry. This is a
    /// deliberate brute-force search -- the palette is small (at most
    /// `ceil(255 / step)^3` entries), so no spatial index is warranted.
    pub fn nearest(&self, pixel: Rgb) -> Rgb {
        // build_palette never produces an empty palette.
        let mut best = self.colors[0];
        let mut best_distance = best.distance_sq(pixel);
        for &candidate in &self.colors[1..] {
            let distance = candidate.distance_sq(pixel);
            if distance < best_distance {
                best_distance = distance;
                best = candidate;
            }
        }
        best
    }

    /// Snap every pixel of `grid` to its nearest palette entry, in place.
    pub fn apply(&self, grid: &mut PixelGrid) {
        let (width, height) = grid.dimensions();
        for y in 0..height {
            for x in 0..width {
                grid.set_pixel(x, y, self.nearest(grid.pixel(x, y)));
            }
        }
    }
}

/// Build the uniform-grid palette for `step`.
///
/// For `i`, `j`, `k` each stepping from 0 to 254 in increments of `step`,
/// the entry `(i + step/2, j + step/2, k + step/2)` is added (integer
/// division, truncating): each cell of the RGB cube is represented by its
/// midpoint. Midpoint channels saturate at 255 so every entry is a valid
/// 8-bit color. The result has `ceil(255 / step)^3` entries.
///
/// # Errors
///
/// [`ReduceError::StepOutOfRange`] if `step` is outside `1..=255`.
pub fn build_palette(step: u32) -> Result<Palette, ReduceError> {
    if !(1..=255).contains(&step) {
        return Err(ReduceError::StepOutOfRange { step });
    }

    let half = step / 2;
    let midpoint = |cell: u32| (cell + half).min(255) as u8;

    let cells: Vec<u32> = (0..255).step_by(step as usize).collect();
    let mut colors = Vec::with_capacity(cells.len().pow(3));
    for &i in &cells {
        for &j in &cells {
            for &k in &cells {
                colors.push(Rgb::new(midpoint(i), midpoint(j), midpoint(k)));
            }
        }
    }

    Ok(Palette { colors })
}

/// Replace every pixel of `grid` with its nearest entry in the palette
/// generated for `step`, in place.
///
/// Equivalent to `build_palette(step)?` followed by [`Palette::apply`];
/// callers that want to inspect the palette (or reuse it across grids)
/// should call those two directly.
///
/// # Errors
///
/// [`ReduceError::StepOutOfRange`] if `step` is outside `1..=255`; the grid
/// is untouched in that case.
pub fn quantize_by_palette(grid: &mut PixelGrid, step: u32) -> Result<(), ReduceError> {
    let palette = build_palette(step)?;
    palette.apply(grid);
    Ok(())
}

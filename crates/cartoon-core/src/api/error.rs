//! Unified error type for the cartoon-core public API.

use thiserror::Error;

use crate::edges::OverlayError;
use crate::reduce::ReduceError;

/// Unified error type for the cartoon-core public API.
///
/// Wraps the per-stage error types into a single enum for convenient `?`
/// propagation in application code. Any failure aborts the call that raised
/// it; no stage ever hands a partially processed image forward.
///
/// # Example
///
/// ```
/// use cartoon_core::{CartoonError, Cartoonifier, PixelGrid, ReduceStrategy, Rgb};
///
/// fn reduce(grid: &PixelGrid, step: u32) -> Result<PixelGrid, CartoonError> {
///     let cartoonifier = Cartoonifier::new().strategy(ReduceStrategy::Interval { step });
///     cartoonifier.cartoonify(grid)
/// }
///
/// let grid = PixelGrid::filled(4, 4, Rgb::BLACK);
/// assert!(reduce(&grid, 50).is_ok());
/// assert!(reduce(&grid, 0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartoonError {
    /// Overlay compositing failed (mask/image dimension mismatch).
    #[error("overlay error: {0}")]
    Overlay(#[from] OverlayError),

    /// Color reduction configuration was rejected.
    #[error("color reduction error: {0}")]
    Reduce(#[from] ReduceError),
}

//! Error types for edge compositing.

use thiserror::Error;

/// Error type for [`overlay`](super::overlay).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OverlayError {
    /// Mask and image dimensions differ. The call is aborted before any
    /// pixel is written; no partially composited image is ever produced.
    #[error(
        "dimension mismatch: edge mask is {mask_width}x{mask_height}, \
         image is {image_width}x{image_height}"
    )]
    DimensionMismatch {
        mask_width: u32,
        mask_height: u32,
        image_width: u32,
        image_height: u32,
    },
}

//! cartoon-core: cartoon-style rendering of photographic pixel grids
//!
//! This library turns a photographic raster image into a stylized "cartoon"
//! rendering: gradient-based edge detection, edge dilation, overlay
//! compositing, and color reduction by either nearest-palette quantization
//! or connected-region color averaging.
//!
//! The crate is pure computation. It consumes and produces in-memory
//! [`PixelGrid`] values and plain integer configuration; decoding and
//! encoding raster files is the surrounding application's job.
//!
//! # Quick Start
//!
//! The [`Cartoonifier`] builder is the primary entry point:
//!
//! ```
//! use cartoon_core::{Cartoonifier, PixelGrid, ReduceStrategy, Rgb};
//!
//! let image = PixelGrid::filled(16, 16, Rgb::new(200, 120, 40));
//!
//! let cartoonifier = Cartoonifier::new()
//!     .threshold(10)
//!     .edge_width(3)
//!     .strategy(ReduceStrategy::Interval { step: 50 });
//!
//! let result = cartoonifier.cartoonify(&image).unwrap();
//! assert_eq!(result.width(), 16);
//! assert_eq!(result.height(), 16);
//! ```
//!
//! # Pipeline
//!
//! The stages compose left to right; the caller picks exactly one of the two
//! color reduction strategies at the tail:
//!
//! ```text
//! PixelGrid
//!     |
//!     v
//! detect_edges        (Sobel gradient magnitude, binary EdgeMask)
//!     |
//!     v
//! dilate              (in place: up/left cross strokes)
//!     |
//!     v
//! overlay             (black strokes or 0.3 alpha blend onto the source)
//!     |
//!     +---> quantize_by_palette   (nearest entry in a uniform-grid palette)
//!     |
//!     +---> quantize_by_region    (seed-anchored region growing + mean recolor)
//! ```
//!
//! Every stage is deterministic: the same grid and the same configuration
//! always produce the same output, bit for bit.

pub mod api;
pub mod color;
pub mod edges;
pub mod grid;
pub mod reduce;


pub use api::{CartoonError, Cartoonifier};
pub use color::Rgb;
pub use edges::{detect_edges, dilate, overlay, EdgeMask, OverlayError, OverlayMode};
pub use grid::PixelGrid;
pub use reduce::{
    build_palette, quantize_by_palette, quantize_by_region, Palette, ReduceError, ReduceStrategy,
};

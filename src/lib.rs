//! Cartoonify - cartoon-style rendering of photographs
//!
//! The algorithmic pipeline lives in the `cartoon-core` crate; this crate
//! owns everything around it: raster decoding/encoding, configuration,
//! output-directory management and the CLI. The library modules are exposed
//! for integration testing.

pub mod codec;
pub mod models;
pub mod output;

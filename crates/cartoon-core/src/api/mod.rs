//! Public API for the cartoon-core crate.
//!
//! This module provides the high-level API: [`Cartoonifier`] builder and
//! [`CartoonError`] unified error type.

mod builder;
mod error;

pub use builder::{
    Cartoonifier, DEFAULT_DEVIATION, DEFAULT_EDGE_WIDTH, DEFAULT_PALETTE_STEP, DEFAULT_THRESHOLD,
};
pub use error::CartoonError;

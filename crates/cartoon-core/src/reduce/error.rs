//! Error types for color reduction.

use thiserror::Error;

/// Error type for palette-based color reduction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReduceError {
    /// Palette step outside `1..=255`. A step of 0 would never advance
    /// through the color cube and a step above 255 is larger than the 8-bit
    /// channel range; both are rejected before any pixel processing begins.
    #[error("palette step {step} out of range (expected 1..=255)")]
    StepOutOfRange { step: u32 },
}

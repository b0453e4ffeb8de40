//! Stencil generation module
//!
//! Converts a raster photograph into a binary edge outline suitable for
//! tracing:
//!
//! # Pipeline
//!
//! 1. Decode as 8-bit grayscale
//! 2. Fixed 5x5 Gaussian blur (noise suppression)
//! 3. Canny edge detection (hysteresis thresholds 50/150)

mod generate;
mod types;

// Re-export public API
pub use generate::{StencilGenerator, StencilResult};
pub use types::{Result, StencilError};

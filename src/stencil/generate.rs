//! Stencil generation: photograph to traceable edge outline
//!
//! # Algorithm
//!
//! 1. Decode the input as 8-bit grayscale
//! 2. Smooth with a fixed 5x5 Gaussian kernel to suppress sensor noise
//! 3. Extract edges with the Canny detector (hysteresis thresholds 50/150)
//!
//! The blur runs before edge detection so that noise does not register as
//! spurious gradient maxima. Both stages preserve image dimensions.

use image::GrayImage;
use imageproc::edges::canny;
use imageproc::filter::separable_filter_equal;
use std::path::Path;
use tracing::debug;

use super::types::{Result, StencilError};

// ============================================================
// Constants
// ============================================================

/// Separable taps of the fixed 5x5 Gaussian kernel.
///
/// These are the binomial coefficients [1, 4, 6, 4, 1] / 16 — the standard
/// fixed-coefficient Gaussian for a 5-tap kernel with sigma derived from
/// the kernel size.
const GAUSSIAN_5_TAPS: [f32; 5] = [0.0625, 0.25, 0.375, 0.25, 0.0625];

/// Canny hysteresis low threshold (gradient magnitude)
const CANNY_LOW_THRESHOLD: f32 = 50.0;

/// Canny hysteresis high threshold (gradient magnitude)
const CANNY_HIGH_THRESHOLD: f32 = 150.0;

// ============================================================
// Types
// ============================================================

/// Result of a completed stencil conversion
#[derive(Debug, Clone)]
pub struct StencilResult {
    /// Output width in pixels (equals input width)
    pub width: u32,

    /// Output height in pixels (equals input height)
    pub height: u32,

    /// Number of edge pixels (value 255) in the output
    pub edge_pixels: u64,
}

// ============================================================
// Stencil Generator
// ============================================================

/// Photograph-to-stencil converter
///
/// Stateless: each call performs exactly one conversion. The output file is
/// created or overwritten; on failure no valid output file is produced.
pub struct StencilGenerator;

impl StencilGenerator {
    /// Convert the image at `input` into a stencil written to `output`.
    ///
    /// The output format is inferred from the extension of `output` and is
    /// written as 8-bit single-channel data.
    ///
    /// # Errors
    ///
    /// Returns [`StencilError::Decode`] if `input` is missing, unreadable,
    /// or not a decodable raster image. Returns [`StencilError::Encode`] if
    /// the output directory is missing or the extension is unsupported.
    pub fn generate(input: &Path, output: &Path) -> Result<StencilResult> {
        let gray = image::open(input)
            .map_err(|e| StencilError::Decode {
                path: input.to_path_buf(),
                source: e,
            })?
            .to_luma8();
        debug!(
            width = gray.width(),
            height = gray.height(),
            "decoded input as grayscale"
        );

        let stencil = Self::trace(&gray);
        let edge_pixels = Self::count_edge_pixels(&stencil);
        debug!(edge_pixels, "edge detection complete");

        stencil.save(output).map_err(|e| StencilError::Encode {
            path: output.to_path_buf(),
            source: e,
        })?;

        Ok(StencilResult {
            width: stencil.width(),
            height: stencil.height(),
            edge_pixels,
        })
    }

    /// Run the in-memory pipeline: blur, then Canny edge detection.
    ///
    /// The returned edge map has the same dimensions as `gray` and contains
    /// only the values 0 (background) and 255 (edge).
    pub fn trace(gray: &GrayImage) -> GrayImage {
        let blurred = Self::smooth(gray);
        canny(&blurred, CANNY_LOW_THRESHOLD, CANNY_HIGH_THRESHOLD)
    }

    /// Apply the fixed 5x5 Gaussian blur as two separable passes.
    fn smooth(gray: &GrayImage) -> GrayImage {
        separable_filter_equal(gray, &GAUSSIAN_5_TAPS)
    }

    /// Count pixels marked as edges (nonzero) in an edge map.
    pub fn count_edge_pixels(edges: &GrayImage) -> u64 {
        edges.pixels().filter(|p| p.0[0] != 0).count() as u64
    }
}

// ============================================================
// Tests
// ============================================================

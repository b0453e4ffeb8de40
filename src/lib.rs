//! stencil-gen - convert photographs into black-and-white stencil outlines
//!
//! A single-purpose conversion utility: decode a photograph as grayscale,
//! smooth it with a fixed 5x5 Gaussian kernel, extract edges with the Canny
//! detector (hysteresis thresholds 50/150), and write the resulting edge map
//! to disk. The output is a binary image (0 background, 255 edges) suitable
//! as a tracing template.
//!
//! # Example
//!
//! ```rust,no_run
//! use stencil_gen::StencilGenerator;
//! use std::path::Path;
//!
//! let result = StencilGenerator::generate(
//!     Path::new("photo.jpg"),
//!     Path::new("stencil.png"),
//! ).unwrap();
//!
//! println!("{}x{}, {} edge pixels", result.width, result.height, result.edge_pixels);
//! ```

pub mod cli;
pub mod stencil;

// Re-export public API
pub use cli::Cli;
pub use stencil::{StencilError, StencilGenerator, StencilResult};

/// Process exit codes used by the CLI
pub mod exit_codes {
    /// Conversion completed successfully
    pub const SUCCESS: i32 = 0;

    /// Decode or encode failure during conversion
    pub const GENERAL_ERROR: i32 = 1;

    /// Input path does not exist
    pub const INPUT_NOT_FOUND: i32 = 2;
}

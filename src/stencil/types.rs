//! Common types for the stencil module

use std::path::PathBuf;
use thiserror::Error;

/// Stencil generation error types
#[derive(Debug, Error)]
pub enum StencilError {
    /// The input file is missing, unreadable, or not a decodable raster image
    #[error("Failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The output destination is unwritable or its extension is unsupported
    #[error("Failed to encode {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

pub type Result<T> = std::result::Result<T, StencilError>;

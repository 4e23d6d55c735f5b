//! Error types for the rasterizer core.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`RasterError`].
pub type Result<T> = std::result::Result<T, RasterError>;

/// Errors that can occur while building or driving the rasterizer.
///
/// Per-pixel out-of-range coordinates are NOT errors: `set_pixel` and the
/// blit clip silently. Everything here is a recoverable condition the
/// caller must decide about.
#[derive(Error, Debug)]
pub enum RasterError {
    /// Pixel storage could not be reserved.
    #[error("failed to allocate {bytes} bytes of pixel storage")]
    Allocation {
        /// Requested size in bytes.
        bytes: usize,
    },

    /// An image file could not be decoded.
    #[error("failed to decode image {path:?}: {source}")]
    Decode {
        /// Path that was being loaded.
        path: PathBuf,
        /// Underlying decoder error.
        source: image::ImageError,
    },

    /// Grid overlay called with a non-positive step.
    #[error("grid step must be positive, got {step}")]
    DegenerateGrid {
        /// The rejected step value.
        step: i32,
    },

    /// Perspective projection of a point at z == 0.
    #[error("cannot perspective-project a point at z = 0")]
    ZeroDepth,

    /// Config (de)serialization error.
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    /// I/O error (config file operations).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_grid_display() {
        let err = RasterError::DegenerateGrid { step: 0 };
        assert!(err.to_string().contains("positive"));
        assert!(err.to_string().contains('0'));
    }

    #[test]
    fn test_allocation_display() {
        let err = RasterError::Allocation { bytes: 4096 };
        assert!(err.to_string().contains("4096"));
    }

    #[test]
    fn test_zero_depth_display() {
        let err = RasterError::ZeroDepth;
        assert!(err.to_string().contains("z = 0"));
    }
}

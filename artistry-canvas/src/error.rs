//! Error types for artistry-canvas.

use thiserror::Error;

/// Result type alias using SketchError.
pub type SketchResult<T> = Result<T, SketchError>;

/// Errors that can occur while configuring or drawing a sketch.
#[derive(Debug, Error)]
pub enum SketchError {
    /// Invalid canvas dimensions (must be positive and within limits).
    #[error("Invalid dimensions: width={width}, height={height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Unrecognized mode name for rect/ellipse/angle/color mode.
    #[error("Invalid {kind} '{value}'. Use {expected}.")]
    InvalidMode {
        kind: &'static str,
        value: String,
        expected: &'static str,
    },

    /// `pop()` was called without a matching `push()`.
    #[error("No state to pop. Make sure to call push() before pop().")]
    EmptyStateStack,

    /// Argument outside of its accepted domain.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngError(String),

    /// Animated image encoding error.
    #[error("Image encoding error: {0}")]
    ImageError(String),

    /// Failure writing output files or launching a viewer.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<png::EncodingError> for SketchError {
    fn from(err: png::EncodingError) -> Self {
        SketchError::PngError(err.to_string())
    }
}

impl From<image::ImageError> for SketchError {
    fn from(err: image::ImageError) -> Self {
        SketchError::ImageError(err.to_string())
    }
}

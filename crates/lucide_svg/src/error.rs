//! Rasterization error types

use std::io;

use thiserror::Error;

/// Errors that can occur when rasterizing an icon
#[derive(Error, Debug)]
pub enum SvgError {
    /// IO error when writing output
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// SVG parsing error
    #[error("SVG parsing error: {0}")]
    Parse(#[from] usvg::Error),

    /// Requested output has a zero dimension
    #[error("invalid dimensions {width}x{height}: width and height must be > 0")]
    InvalidSize { width: u32, height: u32 },

    /// The pixel buffer could not be allocated
    #[error("failed to create {width}x{height} pixmap")]
    Pixmap { width: u32, height: u32 },

    /// PNG encoding error
    #[error("image encoding error: {0}")]
    Encode(#[from] image::ImageError),
}

//! CPU raster backend.
//!
//! Draws [`Scene`](crate::scene::Scene)s into a tiny-skia pixmap (through the
//! copy re-exported by `resvg`) and encodes the result as PNG via `image`.

mod canvas;
pub mod convert;

pub use canvas::{text_placement, Canvas, TextPlacement};

use std::fmt;

/// Errors produced by the raster backend.
#[derive(Debug, Clone, PartialEq)]
pub enum RasterError {
    /// The pixmap could not be allocated (zero or oversized dimensions).
    Allocation { width: u32, height: u32 },
    /// The scene frame is empty, so it cannot be mapped onto the canvas.
    EmptyFrame,
    /// The scene contains text but no font was provided.
    NoFont,
    /// PNG encoding failed.
    Encode(String),
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RasterError::Allocation { width, height } => {
                write!(f, "cannot allocate a {}x{} canvas", width, height)
            }
            RasterError::EmptyFrame => f.write_str("scene frame is empty"),
            RasterError::NoFont => f.write_str("scene has text but no font is loaded"),
            RasterError::Encode(msg) => write!(f, "png encoding failed: {}", msg),
        }
    }
}

impl std::error::Error for RasterError {}

//! Atelier engine crate.
//!
//! Renderer-agnostic building blocks for the garment designer: geometry,
//! paints, paths, the scene draw stream, font loading, and the two output
//! backends (`svg` for vector previews, `raster` for PNG export).

pub mod coords;
pub mod input;
pub mod logging;
pub mod paint;
pub mod path;
pub mod scene;
pub mod text;

pub mod raster;
pub mod svg;

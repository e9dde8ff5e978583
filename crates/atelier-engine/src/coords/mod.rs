//! Coordinate and geometry types shared by the preview and export backends.
//!
//! Canonical space:
//! - design pixels (the 400×500 garment frame for the designer)
//! - origin top-left
//! - +X right, +Y down, positive angles rotate clockwise
//!
//! Backends map design space onto their own target (SVG user units, canvas pixels).

mod rect;
mod rotation;
mod vec2;

pub use rect::Rect;
pub use rotation::Rotation;
pub use vec2::Vec2;

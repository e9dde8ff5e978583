//! Font loading, measurement and CPU glyph rasterization (fontdue).

mod font_system;
mod mask;

pub use font_system::{FontId, FontLoadError, FontSystem, LineBox, SYSTEM_FONT_PATHS};
pub use mask::CoverageMask;

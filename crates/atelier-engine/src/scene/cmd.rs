use crate::coords::Vec2;
use crate::paint::{Color, Paint};
use crate::path::Path;

/// Filled outline.
#[derive(Debug, Clone, PartialEq)]
pub struct PathCmd {
    pub path: Path,
    pub paint: Paint,
}

/// Drop shadow drawn beneath a text run.
///
/// `blur` is the Gaussian standard deviation in design pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextShadow {
    pub offset: Vec2,
    pub blur: f32,
    pub color: Color,
}

/// Single-line text centered on `anchor` (horizontally and on the em box).
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    /// Font size in design pixels.
    pub size: f32,
    pub color: Color,
    pub anchor: Vec2,
    pub bold: bool,
    pub shadow: Option<TextShadow>,
}

/// Renderer-agnostic draw command.
///
/// Extending the scene: add a variant here, then teach each backend
/// (`svg`, `raster`) to draw it.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    FillPath(PathCmd),
    Text(TextCmd),
}

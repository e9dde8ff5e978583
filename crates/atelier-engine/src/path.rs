//! Vector outlines shared by every backend.
//!
//! A [`Path`] wraps a [`kurbo::BezPath`] in design pixels. SVG path data goes
//! through kurbo in both directions, so fixed shapes stay readable as literals
//! and the SVG writer emits them unchanged. Relative commands, smooth curves
//! and arcs are accepted; arcs are flattened to cubics at parse time.

use kurbo::{BezPath, PathEl, Point};

use crate::coords::{Rect, Vec2};

pub use kurbo::SvgParseError as PathParseError;

/// Absolute segment in design pixels, as seen by the backends.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Segment {
    MoveTo(Vec2),
    LineTo(Vec2),
    QuadTo { ctrl: Vec2, to: Vec2 },
    CubicTo { ctrl1: Vec2, ctrl2: Vec2, to: Vec2 },
    Close,
}

#[inline]
fn vec2(p: Point) -> Vec2 {
    Vec2::new(p.x as f32, p.y as f32)
}

impl From<PathEl> for Segment {
    fn from(el: PathEl) -> Self {
        match el {
            PathEl::MoveTo(p) => Segment::MoveTo(vec2(p)),
            PathEl::LineTo(p) => Segment::LineTo(vec2(p)),
            PathEl::QuadTo(c, p) => Segment::QuadTo { ctrl: vec2(c), to: vec2(p) },
            PathEl::CurveTo(c1, c2, p) => Segment::CubicTo { ctrl1: vec2(c1), ctrl2: vec2(c2), to: vec2(p) },
            PathEl::ClosePath => Segment::Close,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    inner: BezPath,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    /// Segments in draw order.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.inner.elements().iter().map(|&el| Segment::from(el))
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.elements().is_empty()
    }

    pub fn move_to(&mut self, x: f32, y: f32) -> &mut Self {
        self.inner.move_to((x as f64, y as f64));
        self
    }

    pub fn line_to(&mut self, x: f32, y: f32) -> &mut Self {
        self.inner.line_to((x as f64, y as f64));
        self
    }

    pub fn quad_to(&mut self, cx: f32, cy: f32, x: f32, y: f32) -> &mut Self {
        self.inner.quad_to((cx as f64, cy as f64), (x as f64, y as f64));
        self
    }

    pub fn cubic_to(&mut self, c1x: f32, c1y: f32, c2x: f32, c2y: f32, x: f32, y: f32) -> &mut Self {
        self.inner
            .curve_to((c1x as f64, c1y as f64), (c2x as f64, c2y as f64), (x as f64, y as f64));
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.inner.close_path();
        self
    }

    /// Bounding box of all on-curve and control points, `None` when empty.
    pub fn bounds(&self) -> Option<Rect> {
        if self.is_empty() {
            return None;
        }
        let b = self.inner.control_box();
        Some(Rect::new(b.x0 as f32, b.y0 as f32, b.width() as f32, b.height() as f32))
    }

    /// Absolute SVG path data (`M`, `L`, `Q`, `C`, `Z`).
    pub fn to_svg_data(&self) -> String {
        self.inner.to_svg()
    }

    /// Parses SVG path data.
    pub fn parse(data: &str) -> Result<Path, PathParseError> {
        BezPath::from_svg(data).map(|inner| Path { inner })
    }
}

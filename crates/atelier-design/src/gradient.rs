//! Gradient resolution shared by the preview and export renderers.

use atelier_engine::coords::{Rect, Vec2};
use atelier_engine::paint::{Color, ColorStop, Paint};

use crate::color_model::{ColorModel, GradientDirection};

/// Ordered `(color, position)` stops derived from the color model.
///
/// A single stop means a solid fill.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedGradient {
    pub stops: Vec<ColorStop>,
}

impl ResolvedGradient {
    #[inline]
    pub fn is_solid(&self) -> bool {
        self.stops.len() < 2
    }

    /// Paint for `frame`, with the gradient axis chosen by `direction`.
    pub fn to_paint(&self, frame: Rect, direction: GradientDirection, fallback: Color) -> Paint {
        let (start, end) = gradient_axis(frame, direction);
        Paint::linear_or_solid(start, end, self.stops.clone(), fallback)
    }
}

/// Resolves the active fill of `model` into stops.
///
/// - gradient off: the base color alone
/// - otherwise the enabled slots in slot order, spread evenly over `[0, 1]`
pub fn resolve(model: &ColorModel) -> ResolvedGradient {
    if !model.gradient_enabled() {
        return ResolvedGradient { stops: vec![ColorStop::new(0.0, model.base_color())] };
    }

    let colors: Vec<Color> = model.slots().iter().filter(|s| s.enabled).map(|s| s.color).collect();
    let stops = match colors.len() {
        0 => vec![ColorStop::new(0.0, model.base_color())],
        1 => vec![ColorStop::new(0.0, colors[0])],
        n => colors
            .iter()
            .enumerate()
            .map(|(i, &c)| ColorStop::new(i as f32 / (n - 1) as f32, c))
            .collect(),
    };
    ResolvedGradient { stops }
}

/// Start and end of the gradient axis inside `frame`.
pub fn gradient_axis(frame: Rect, direction: GradientDirection) -> (Vec2, Vec2) {
    let min = frame.min();
    let max = frame.max();
    match direction {
        GradientDirection::Horizontal => (min, Vec2::new(max.x, min.y)),
        GradientDirection::Vertical => (min, Vec2::new(min.x, max.y)),
        GradientDirection::Diagonal => (min, max),
    }
}

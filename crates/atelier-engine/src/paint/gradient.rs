use crate::coords::Vec2;

use super::Color;

/// A single gradient stop.
///
/// `t` is the position along the gradient axis, in `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: Color) -> Self {
        Self { t, color }
    }
}

/// Linear gradient in the same coordinate space as the geometry it fills.
///
/// Outside `[start, end]` both backends pad with the edge stops.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub stops: Vec<ColorStop>,
}

impl LinearGradient {
    pub fn new(start: Vec2, end: Vec2, stops: Vec<ColorStop>) -> Self {
        Self { start, end, stops }
    }

    /// True when the definition can be drawn as a gradient: at least two finite,
    /// non-decreasing stops and a non-degenerate axis.
    pub fn is_valid(&self) -> bool {
        self.start.is_finite()
            && self.end.is_finite()
            && self.stops.len() >= 2
            && self.stops.iter().all(|s| s.t.is_finite())
            && self.stops.windows(2).all(|w| w[0].t <= w[1].t)
            && (self.end.x != self.start.x || self.end.y != self.start.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stops(ts: &[f32]) -> Vec<ColorStop> {
        ts.iter().map(|&t| ColorStop::new(t, Color::BLACK)).collect()
    }

    #[test]
    fn two_stops_on_axis_are_valid() {
        let g = LinearGradient::new(Vec2::zero(), Vec2::new(400.0, 0.0), stops(&[0.0, 1.0]));
        assert!(g.is_valid());
    }

    #[test]
    fn single_stop_is_invalid() {
        let g = LinearGradient::new(Vec2::zero(), Vec2::new(400.0, 0.0), stops(&[0.0]));
        assert!(!g.is_valid());
    }

    #[test]
    fn degenerate_axis_is_invalid() {
        let g = LinearGradient::new(Vec2::new(1.0, 1.0), Vec2::new(1.0, 1.0), stops(&[0.0, 1.0]));
        assert!(!g.is_valid());
    }

    #[test]
    fn decreasing_stops_are_invalid() {
        let g = LinearGradient::new(Vec2::zero(), Vec2::new(0.0, 500.0), stops(&[0.0, 0.7, 0.5]));
        assert!(!g.is_valid());
    }
}

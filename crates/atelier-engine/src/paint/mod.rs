//! Paint model shared by the vector and raster backends.
//!
//! Scope:
//! - color representation (straight-alpha sRGB bytes)
//! - paint sources (solid, linear gradient)
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod gradient;

pub use color::{Color, ColorParseError};
pub use gradient::{ColorStop, LinearGradient};

use crate::coords::Vec2;

/// Paint source for filling geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    LinearGradient(LinearGradient),
}

impl Paint {
    #[inline]
    pub fn solid(color: Color) -> Self {
        Paint::Solid(color)
    }

    /// Builds a linear gradient along `start → end`, degrading to a solid fill
    /// when the definition is not drawable as a gradient.
    ///
    /// With fewer than two stops the first stop's color is used; with none at
    /// all, `fallback`.
    pub fn linear_or_solid(start: Vec2, end: Vec2, stops: Vec<ColorStop>, fallback: Color) -> Self {
        let gradient = LinearGradient::new(start, end, stops);
        if gradient.is_valid() {
            Paint::LinearGradient(gradient)
        } else {
            Paint::Solid(gradient.stops.first().map_or(fallback, |s| s.color))
        }
    }
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Paint::Solid(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_stop_degrades_to_solid() {
        let red = Color::rgb(255, 0, 0);
        let paint = Paint::linear_or_solid(
            Vec2::zero(),
            Vec2::new(10.0, 0.0),
            vec![ColorStop::new(0.0, red)],
            Color::BLACK,
        );
        assert_eq!(paint, Paint::Solid(red));
    }

    #[test]
    fn no_stops_uses_fallback() {
        let paint = Paint::linear_or_solid(Vec2::zero(), Vec2::new(10.0, 0.0), Vec::new(), Color::WHITE);
        assert_eq!(paint, Paint::Solid(Color::WHITE));
    }

    #[test]
    fn two_stops_stay_gradient() {
        let paint = Paint::linear_or_solid(
            Vec2::zero(),
            Vec2::new(10.0, 0.0),
            vec![ColorStop::new(0.0, Color::BLACK), ColorStop::new(1.0, Color::WHITE)],
            Color::BLACK,
        );
        assert!(matches!(paint, Paint::LinearGradient(_)));
    }
}

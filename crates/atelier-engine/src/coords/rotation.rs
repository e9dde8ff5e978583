use super::Vec2;

/// Whole-scene rotation about a pivot point.
///
/// Positive degrees rotate clockwise in the +Y-down space, matching both the SVG
/// `rotate()` transform and tiny-skia's `Transform::from_rotate_at`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rotation {
    pub degrees: f32,
    pub pivot: Vec2,
}

impl Rotation {
    #[inline]
    pub const fn new(degrees: f32, pivot: Vec2) -> Self {
        Self { degrees, pivot }
    }

    #[inline]
    pub fn is_identity(self) -> bool {
        self.degrees.rem_euclid(360.0) == 0.0
    }
}

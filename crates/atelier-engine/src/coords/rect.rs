use super::Vec2;

/// Axis-aligned rectangle in design pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn min(self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        self.origin + self.size * 0.5
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Point at `(px%, py%)` of this rectangle, percentages in `[0, 100]`.
    ///
    /// Values outside the range extrapolate; callers validate their inputs.
    #[inline]
    pub fn point_at_percent(self, px: f32, py: f32) -> Vec2 {
        Vec2::new(
            self.origin.x + self.size.x * px / 100.0,
            self.origin.y + self.size.y * py / 100.0,
        )
    }

    /// Per-axis factors that map this rectangle's size onto `target`.
    ///
    /// Returns `None` for empty rectangles.
    #[inline]
    pub fn scale_to(self, target: Vec2) -> Option<(f32, f32)> {
        if self.is_empty() {
            return None;
        }
        Some((target.x / self.size.x, target.y / self.size.y))
    }
}

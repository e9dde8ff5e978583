use atelier_engine::coords::Rect;
use atelier_engine::paint::Paint;

use crate::color_model::ColorModel;
use crate::gradient::{self, ResolvedGradient};
use crate::rotation::RotationModel;
use crate::text_model::TextModel;

/// Complete design configuration.
///
/// Mutated only through the named operations of its three models; both
/// renderers read it without modifying it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DesignState {
    pub color: ColorModel,
    pub text: TextModel,
    pub rotation: RotationModel,
}

impl DesignState {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn resolved_gradient(&self) -> ResolvedGradient {
        gradient::resolve(&self.color)
    }

    /// Garment fill for `frame`.
    pub fn fill_paint(&self, frame: Rect) -> Paint {
        self.resolved_gradient()
            .to_paint(frame, self.color.direction(), self.color.base_color())
    }

    /// Text on the face currently presented, if it is not blank.
    #[inline]
    pub fn visible_text(&self) -> Option<&str> {
        self.text.visible_text(self.rotation.face())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rotation::Face;

    #[test]
    fn visible_text_follows_face() {
        let mut s = DesignState::new();
        s.text.set_text(Face::Front, "FRONT").unwrap();
        s.text.set_text(Face::Back, "BACK").unwrap();
        assert_eq!(s.visible_text(), Some("FRONT"));
        s.rotation.rotate_to(7).unwrap();
        assert_eq!(s.visible_text(), Some("BACK"));
        s.rotation.show_face(Face::Front);
        assert_eq!(s.visible_text(), Some("FRONT"));
    }

    #[test]
    fn clone_is_independent_snapshot() {
        let mut s = DesignState::new();
        let snapshot = s.clone();
        s.color.add_palette_color(None);
        assert_eq!(snapshot.color.palette().len(), 1);
    }
}

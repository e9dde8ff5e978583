//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands in design space
//! - provide deterministic paint order (layer + insertion order)
//! - carry the whole-scene rotation applied by every backend

mod cmd;
mod list;

pub use cmd::{DrawCmd, PathCmd, TextCmd, TextShadow};
pub use list::{DrawItem, DrawList, Layer};

use crate::coords::{Rect, Rotation};

/// A complete frame: the design-space viewport, the rotation applied to all
/// content, and the draw stream.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub frame: Rect,
    pub rotation: Rotation,
    pub draw_list: DrawList,
}

impl Scene {
    pub fn new(frame: Rect, rotation: Rotation) -> Self {
        Self { frame, rotation, draw_list: DrawList::new() }
    }
}

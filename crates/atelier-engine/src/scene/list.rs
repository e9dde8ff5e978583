use crate::paint::{Color, Paint};
use crate::path::Path;

use super::{DrawCmd, PathCmd, TextCmd};

/// Paint layer. Lower layers are drawn first (further back).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Layer {
    Base,
    Overlay,
    Label,
}

/// A single draw item: layer + insertion order + command.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub layer: Layer,
    pub order: u32,
    pub cmd: DrawCmd,
}

/// Recorded draw stream for a scene.
///
/// Items may be pushed in any layer order; [`iter_in_paint_order`] yields them
/// back-to-front, keeping insertion order within a layer.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn push(&mut self, layer: Layer, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);
        self.items.push(DrawItem { layer, order, cmd });
    }

    pub fn push_path(&mut self, layer: Layer, path: Path, paint: impl Into<Paint>) {
        self.push(layer, DrawCmd::FillPath(PathCmd { path, paint: paint.into() }));
    }

    pub fn push_text(&mut self, layer: Layer, cmd: TextCmd) {
        self.push(layer, DrawCmd::Text(cmd));
    }

    /// Iterates items back-to-front without cloning draw commands.
    pub fn iter_in_paint_order(&self) -> impl Iterator<Item = &DrawItem> {
        let mut sorted: Vec<&DrawItem> = self.items.iter().collect();
        sorted.sort_by_key(|item| (item.layer, item.order));
        sorted.into_iter()
    }

    /// Iterates the text commands only, in paint order.
    pub fn texts(&self) -> impl Iterator<Item = &TextCmd> {
        self.iter_in_paint_order().filter_map(|item| match &item.cmd {
            DrawCmd::Text(t) => Some(t),
            DrawCmd::FillPath(_) => None,
        })
    }

    /// Solid colors used by path fills, in paint order. Handy for assertions.
    pub fn solid_fills(&self) -> Vec<Color> {
        self.iter_in_paint_order()
            .filter_map(|item| match &item.cmd {
                DrawCmd::FillPath(PathCmd { paint: Paint::Solid(c), .. }) => Some(*c),
                _ => None,
            })
            .collect()
    }
}

use std::io::Cursor;

use image::{ImageFormat, RgbaImage};
use resvg::tiny_skia::{FillRule, FilterQuality, Pixmap, PixmapPaint, Transform};

use crate::coords::{Rect, Vec2};
use crate::paint::{Color, Paint};
use crate::path::Path;
use crate::scene::{DrawCmd, Scene, TextCmd};
use crate::text::{CoverageMask, FontId, FontSystem};

use super::RasterError;
use super::convert::{scene_transform, to_skia_color, to_skia_paint, to_skia_path};

/// Where a text command lands on a canvas.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextPlacement {
    /// Center of the label in canvas pixels, before rotation.
    pub anchor: Vec2,
    /// Font size in canvas pixels.
    pub font_px: f32,
    /// Design → canvas factor applied to the shadow offset and blur.
    pub scale: f32,
}

/// Places `cmd` on a `width × height` canvas showing `frame`.
///
/// The font size follows the horizontal scale and is rounded to whole
/// pixels. Returns `None` when the frame is empty or the size rounds to zero.
pub fn text_placement(frame: Rect, cmd: &TextCmd, width: u32, height: u32) -> Option<TextPlacement> {
    let (sx, sy) = frame.scale_to(Vec2::new(width as f32, height as f32))?;
    let font_px = (cmd.size * sx).round();
    if font_px <= 0.0 {
        return None;
    }
    Some(TextPlacement { anchor: (cmd.anchor - frame.origin).scale(sx, sy), font_px, scale: sx })
}

/// Fixed-size RGBA drawing surface backed by a tiny-skia pixmap.
pub struct Canvas {
    pixmap: Pixmap,
}

impl Canvas {
    /// Allocates a transparent canvas. Zero-sized canvases are rejected.
    pub fn new(width: u32, height: u32) -> Result<Self, RasterError> {
        let pixmap = Pixmap::new(width, height).ok_or(RasterError::Allocation { width, height })?;
        Ok(Self { pixmap })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn clear(&mut self, color: Color) {
        self.pixmap.fill(to_skia_color(color));
    }

    /// Fills `path` under `transform`. Paths with no area draw nothing.
    pub fn fill_path(&mut self, path: &Path, paint: &Paint, transform: Transform) {
        let Some(sk_path) = to_skia_path(path) else {
            log::trace!("skipping empty path");
            return;
        };
        self.pixmap
            .fill_path(&sk_path, &to_skia_paint(paint), FillRule::Winding, transform, None);
    }

    /// Composites a coverage mask tinted with `color`.
    ///
    /// The mask's own origin is applied before `transform`.
    pub fn draw_mask(&mut self, mask: &CoverageMask, color: Color, transform: Transform) {
        let Some(mut layer) = Pixmap::new(mask.width, mask.height) else { return };
        for (px, &coverage) in layer.data_mut().chunks_exact_mut(4).zip(mask.data.iter()) {
            px.copy_from_slice(&color.premultiplied_with_coverage(coverage));
        }
        let paint = PixmapPaint { quality: FilterQuality::Bilinear, ..PixmapPaint::default() };
        self.pixmap.draw_pixmap(
            0,
            0,
            layer.as_ref(),
            &paint,
            transform.pre_translate(mask.origin.x, mask.origin.y),
            None,
        );
    }

    /// Draws a whole scene, stretching its frame over the canvas.
    ///
    /// Text needs `font`; a scene with text and no font fails with
    /// [`RasterError::NoFont`] before anything is drawn.
    pub fn draw_scene(
        &mut self,
        scene: &Scene,
        fonts: &FontSystem,
        font: Option<FontId>,
    ) -> Result<(), RasterError> {
        let (sx, sy) = scene
            .frame
            .scale_to(Vec2::new(self.width() as f32, self.height() as f32))
            .ok_or(RasterError::EmptyFrame)?;

        let has_text = scene.draw_list.texts().next().is_some();
        if has_text && font.is_none() {
            return Err(RasterError::NoFont);
        }

        let transform = scene_transform(scene.frame, scene.rotation, sx, sy);
        // Text masks are rasterized at canvas resolution, so they rotate in canvas space.
        let pivot = (scene.rotation.pivot - scene.frame.origin).scale(sx, sy);
        let text_transform = Transform::from_rotate_at(scene.rotation.degrees, pivot.x, pivot.y);

        for item in scene.draw_list.iter_in_paint_order() {
            match &item.cmd {
                DrawCmd::FillPath(cmd) => self.fill_path(&cmd.path, &cmd.paint, transform),
                DrawCmd::Text(cmd) => {
                    let placement = text_placement(scene.frame, cmd, self.width(), self.height());
                    if let (Some(id), Some(placement)) = (font, placement) {
                        self.draw_text(cmd, fonts, id, placement, text_transform);
                    }
                }
            }
        }
        Ok(())
    }

    fn draw_text(
        &mut self,
        cmd: &TextCmd,
        fonts: &FontSystem,
        font: FontId,
        placement: TextPlacement,
        transform: Transform,
    ) {
        let size = placement.font_px;
        let Some(line) = fonts.measure_line(&cmd.text, font, size) else { return };
        let Some(mask) = fonts.rasterize_line(&cmd.text, font, size) else { return };
        let top_left = line.top_left_for_center(placement.anchor);

        if let Some(shadow) = cmd.shadow {
            let soft = mask.blurred(shadow.blur * placement.scale);
            let at = top_left + shadow.offset * placement.scale;
            self.draw_mask(&soft, shadow.color, transform.pre_translate(at.x, at.y));
        }
        self.draw_mask(&mask, cmd.color, transform.pre_translate(top_left.x, top_left.y));
    }

    /// Straight-alpha color of one pixel, `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some(Color::rgba(c.red(), c.green(), c.blue(), c.alpha()))
    }

    /// Copies the canvas into a straight-alpha RGBA image.
    pub fn to_rgba_image(&self) -> Result<RgbaImage, RasterError> {
        let data: Vec<u8> = self
            .pixmap
            .pixels()
            .iter()
            .flat_map(|p| {
                let c = p.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .collect();
        RgbaImage::from_raw(self.width(), self.height(), data)
            .ok_or_else(|| RasterError::Encode("pixel buffer size mismatch".to_string()))
    }

    pub fn encode_png(&self) -> Result<Vec<u8>, RasterError> {
        let image = self.to_rgba_image()?;
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .map_err(|e| RasterError::Encode(e.to_string()))?;
        Ok(bytes)
    }
}

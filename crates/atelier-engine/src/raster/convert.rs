//! Conversions from engine types into tiny-skia types.

use resvg::tiny_skia;

use crate::coords::{Rect, Rotation};
use crate::paint::{Color, Paint};
use crate::path::{Path, Segment};

#[inline]
pub fn to_skia_color(color: Color) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(color.r, color.g, color.b, color.a)
}

/// Builds a tiny-skia path. Returns `None` for paths with no drawable area.
pub fn to_skia_path(path: &Path) -> Option<tiny_skia::Path> {
    let mut pb = tiny_skia::PathBuilder::new();
    for seg in path.segments() {
        match seg {
            Segment::MoveTo(p) => pb.move_to(p.x, p.y),
            Segment::LineTo(p) => pb.line_to(p.x, p.y),
            Segment::QuadTo { ctrl, to } => pb.quad_to(ctrl.x, ctrl.y, to.x, to.y),
            Segment::CubicTo { ctrl1, ctrl2, to } => {
                pb.cubic_to(ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y)
            }
            Segment::Close => pb.close(),
        }
    }
    pb.finish()
}

/// Anti-aliased tiny-skia paint for an engine paint source.
///
/// Gradients are padded at both ends. An undrawable gradient paints its first
/// stop; tiny-skia alone would pick the last stop for a zero-length axis.
pub fn to_skia_paint(paint: &Paint) -> tiny_skia::Paint<'static> {
    let mut out = tiny_skia::Paint::default();
    out.anti_alias = true;
    match paint {
        Paint::Solid(c) => out.set_color(to_skia_color(*c)),
        Paint::LinearGradient(g) if !g.is_valid() => {
            let fallback = g.stops.first().map_or(Color::transparent(), |s| s.color);
            out.set_color(to_skia_color(fallback));
        }
        Paint::LinearGradient(g) => {
            let stops = g
                .stops
                .iter()
                .map(|s| tiny_skia::GradientStop::new(s.t, to_skia_color(s.color)))
                .collect();
            match tiny_skia::LinearGradient::new(
                tiny_skia::Point::from_xy(g.start.x, g.start.y),
                tiny_skia::Point::from_xy(g.end.x, g.end.y),
                stops,
                tiny_skia::SpreadMode::Pad,
                tiny_skia::Transform::identity(),
            ) {
                Some(shader) => out.shader = shader,
                None => {
                    let fallback = g.stops.first().map_or(Color::transparent(), |s| s.color);
                    out.set_color(to_skia_color(fallback));
                }
            }
        }
    }
    out
}

/// Design space → canvas pixels: rotate about the pivot, move the frame to the
/// origin, then stretch the frame over `sx × sy`.
pub fn scene_transform(frame: Rect, rotation: Rotation, sx: f32, sy: f32) -> tiny_skia::Transform {
    tiny_skia::Transform::from_scale(sx, sy)
        .pre_translate(-frame.origin.x, -frame.origin.y)
        .pre_concat(tiny_skia::Transform::from_rotate_at(
            rotation.degrees,
            rotation.pivot.x,
            rotation.pivot.y,
        ))
}

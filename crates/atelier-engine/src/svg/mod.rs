//! Vector backend: serializes a [`Scene`] into a standalone SVG document.
//!
//! The document's `viewBox` is the scene frame, so it scales to any display
//! size. Gradients are emitted in user space, matching the raster backend.

use std::fmt::Write as _;

use crate::paint::{Color, Paint};
use crate::scene::{DrawCmd, Scene, TextCmd};

pub const DEFAULT_FONT_FAMILY: &str = "DejaVu Sans, Arial, sans-serif";

/// Output options for [`scene_to_svg`].
#[derive(Debug, Clone, PartialEq)]
pub struct SvgOptions {
    /// Intrinsic document size; `None` uses the frame size.
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub font_family: String,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self { width: None, height: None, font_family: DEFAULT_FONT_FAMILY.to_string() }
    }
}

/// Escapes text for use in XML character data and attribute values.
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

fn fill_attrs(color: Color) -> String {
    if color.is_opaque() {
        format!("fill=\"{}\"", color.to_rgb_hex())
    } else {
        format!("fill=\"{}\" fill-opacity=\"{}\"", color.to_rgb_hex(), color.alpha_f32())
    }
}

// ── document ───────────────────────────────────────────────────────────────

pub fn scene_to_svg(scene: &Scene, opts: &SvgOptions) -> String {
    let frame = scene.frame;
    let width = opts.width.unwrap_or(frame.size.x);
    let height = opts.height.unwrap_or(frame.size.y);

    let mut defs = String::new();
    let mut body = String::new();
    let mut gradients = 0usize;
    let mut filters = 0usize;

    for item in scene.draw_list.iter_in_paint_order() {
        match &item.cmd {
            DrawCmd::FillPath(cmd) => {
                let fill = match &cmd.paint {
                    Paint::Solid(c) => fill_attrs(*c),
                    Paint::LinearGradient(g) => {
                        let id = format!("gradient-{}", gradients);
                        gradients += 1;
                        let _ = write!(
                            defs,
                            "<linearGradient id=\"{}\" gradientUnits=\"userSpaceOnUse\" x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\">",
                            id, g.start.x, g.start.y, g.end.x, g.end.y
                        );
                        for stop in &g.stops {
                            let _ = write!(
                                defs,
                                "<stop offset=\"{}\" stop-color=\"{}\" stop-opacity=\"{}\"/>",
                                stop.t,
                                stop.color.to_rgb_hex(),
                                stop.color.alpha_f32()
                            );
                        }
                        defs.push_str("</linearGradient>");
                        format!("fill=\"url(#{})\"", id)
                    }
                };
                let _ = write!(body, "<path d=\"{}\" {}/>", cmd.path.to_svg_data(), fill);
            }
            DrawCmd::Text(cmd) => {
                let filter = cmd.shadow.map(|shadow| {
                    let id = format!("text-shadow-{}", filters);
                    filters += 1;
                    let _ = write!(
                        defs,
                        "<filter id=\"{}\" x=\"-50%\" y=\"-50%\" width=\"200%\" height=\"200%\">\
                         <feDropShadow dx=\"{}\" dy=\"{}\" stdDeviation=\"{}\" flood-color=\"{}\" flood-opacity=\"{}\"/>\
                         </filter>",
                        id,
                        shadow.offset.x,
                        shadow.offset.y,
                        shadow.blur,
                        shadow.color.to_rgb_hex(),
                        shadow.color.alpha_f32()
                    );
                    id
                });
                write_text(&mut body, cmd, &opts.font_family, filter.as_deref());
            }
        }
    }

    let mut out = String::new();
    let _ = write!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"{} {} {} {}\">",
        width, height, frame.origin.x, frame.origin.y, frame.size.x, frame.size.y
    );
    if !defs.is_empty() {
        let _ = write!(out, "<defs>{}</defs>", defs);
    }
    if scene.rotation.is_identity() {
        let _ = write!(out, "<g>{}</g>", body);
    } else {
        let _ = write!(
            out,
            "<g transform=\"rotate({} {} {})\">{}</g>",
            scene.rotation.degrees, scene.rotation.pivot.x, scene.rotation.pivot.y, body
        );
    }
    out.push_str("</svg>");
    out
}

fn write_text(out: &mut String, cmd: &TextCmd, family: &str, filter: Option<&str>) {
    let _ = write!(
        out,
        "<text x=\"{}\" y=\"{}\" text-anchor=\"middle\" dominant-baseline=\"central\" \
         font-family=\"{}\" font-size=\"{}\"",
        cmd.anchor.x,
        cmd.anchor.y,
        escape_xml(family),
        cmd.size
    );
    if cmd.bold {
        out.push_str(" font-weight=\"bold\"");
    }
    let _ = write!(out, " {}", fill_attrs(cmd.color));
    if let Some(id) = filter {
        let _ = write!(out, " filter=\"url(#{})\"", id);
    }
    let _ = write!(out, ">{}</text>", escape_xml(&cmd.text));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{Rect, Rotation, Vec2};
    use crate::paint::ColorStop;
    use crate::path::Path;
    use crate::scene::{Layer, TextShadow};
    use resvg::{tiny_skia, usvg};

    fn frame_scene(rotation: f32) -> Scene {
        Scene::new(Rect::new(0.0, 0.0, 40.0, 50.0), Rotation::new(rotation, Vec2::new(20.0, 25.0)))
    }

    fn full_frame() -> Path {
        Path::parse("M0 0 L40 0 L40 50 L0 50 Z").unwrap()
    }

    fn render(svg: &str, w: u32, h: u32) -> tiny_skia::Pixmap {
        let tree = usvg::Tree::from_data(svg.as_bytes(), &usvg::Options::default()).unwrap();
        let mut pixmap = tiny_skia::Pixmap::new(w, h).unwrap();
        let size = tree.size();
        let transform = tiny_skia::Transform::from_scale(w as f32 / size.width(), h as f32 / size.height());
        resvg::render(&tree, transform, &mut pixmap.as_mut());
        pixmap
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(escape_xml("a<b & \"c\""), "a&lt;b &amp; &quot;c&quot;");
    }

    #[test]
    fn identity_rotation_has_no_transform() {
        let svg = scene_to_svg(&frame_scene(0.0), &SvgOptions::default());
        assert!(svg.contains("viewBox=\"0 0 40 50\""));
        assert!(!svg.contains("rotate("));
        assert!(!svg.contains("<defs>"));
    }

    #[test]
    fn rotation_wraps_content() {
        let svg = scene_to_svg(&frame_scene(30.0), &SvgOptions::default());
        assert!(svg.contains("<g transform=\"rotate(30 20 25)\">"));
    }

    #[test]
    fn solid_fill_renders() {
        let mut scene = frame_scene(0.0);
        scene.draw_list.push_path(Layer::Base, full_frame(), Color::rgb(0x34, 0x98, 0xdb));
        let svg = scene_to_svg(&scene, &SvgOptions { width: Some(80.0), height: Some(100.0), ..SvgOptions::default() });
        assert!(svg.contains("fill=\"#3498db\""));
        let px = render(&svg, 80, 100).pixel(40, 50).unwrap().demultiply();
        assert_eq!((px.red(), px.green(), px.blue(), px.alpha()), (0x34, 0x98, 0xdb, 0xff));
    }

    #[test]
    fn translucent_fill_carries_opacity() {
        let mut scene = frame_scene(0.0);
        scene.draw_list.push_path(Layer::Overlay, full_frame(), Color::BLACK.with_alpha(0.1));
        let svg = scene_to_svg(&scene, &SvgOptions::default());
        assert!(svg.contains("fill=\"#000000\" fill-opacity=\"0.1"));
    }

    #[test]
    fn gradient_is_user_space_and_renders_ends() {
        let mut scene = frame_scene(0.0);
        let paint = Paint::linear_or_solid(
            Vec2::zero(),
            Vec2::new(40.0, 0.0),
            vec![ColorStop::new(0.0, Color::rgb(255, 0, 0)), ColorStop::new(1.0, Color::rgb(0, 0, 255))],
            Color::BLACK,
        );
        scene.draw_list.push_path(Layer::Base, full_frame(), paint);
        let svg = scene_to_svg(&scene, &SvgOptions::default());
        assert!(svg.contains("gradientUnits=\"userSpaceOnUse\""));
        assert!(svg.contains("fill=\"url(#gradient-0)\""));

        let pixmap = render(&svg, 40, 50);
        let left = pixmap.pixel(0, 25).unwrap().demultiply();
        let right = pixmap.pixel(39, 25).unwrap().demultiply();
        assert!(left.red() > 240 && left.blue() < 15);
        assert!(right.blue() > 240 && right.red() < 15);
    }

    #[test]
    fn text_is_escaped_and_shadowed() {
        let mut scene = frame_scene(0.0);
        scene.draw_list.push_text(Layer::Label, TextCmd {
            text: "R&D <1>".to_string(),
            size: 12.0,
            color: Color::WHITE,
            anchor: Vec2::new(20.0, 20.0),
            bold: true,
            shadow: Some(TextShadow {
                offset: Vec2::new(2.0, 2.0),
                blur: 2.0,
                color: Color::BLACK.with_alpha(0.3),
            }),
        });
        let svg = scene_to_svg(&scene, &SvgOptions::default());
        assert!(svg.contains(">R&amp;D &lt;1&gt;</text>"));
        assert!(svg.contains("text-anchor=\"middle\""));
        assert!(svg.contains("font-weight=\"bold\""));
        assert!(svg.contains("<feDropShadow dx=\"2\" dy=\"2\" stdDeviation=\"2\""));
        assert!(svg.contains("filter=\"url(#text-shadow-0)\""));
        // Well-formed even where no font is available for layout.
        assert!(usvg::Tree::from_data(svg.as_bytes(), &usvg::Options::default()).is_ok());
    }
}

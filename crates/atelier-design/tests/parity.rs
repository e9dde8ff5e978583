//! The PNG export must match the SVG preview rasterized at the same size.
//!
//! Garment geometry and fills are compared pixel by pixel. Text is compared by
//! the centroid of its pixels, with the same font file loaded on both sides,
//! since the two rasterizers anti-alias glyphs differently.

use std::path::PathBuf;

use atelier_design::prelude::*;
use image::{Rgba, RgbaImage};
use resvg::{tiny_skia, usvg};

const WIDTH: u32 = 800;
const HEIGHT: u32 = 1000;

/// Per-pixel differences above this count as mismatches (edge anti-aliasing stays below it).
const CHANNEL_TOLERANCE: u8 = 10;
/// Share of pixels allowed to exceed the tolerance.
const MAX_MISMATCH_RATIO: f64 = 0.002;

fn premultiply(p: &Rgba<u8>) -> [u8; 4] {
    let a = p[3] as u32;
    let mul = |c: u8| ((c as u32 * a + 127) / 255) as u8;
    [mul(p[0]), mul(p[1]), mul(p[2]), p[3]]
}

/// Maximum channel difference between two pixels, alpha included.
fn pixel_difference(a: [u8; 4], b: [u8; 4]) -> u8 {
    a.iter().zip(b.iter()).map(|(x, y)| x.abs_diff(*y)).max().unwrap_or(0)
}

fn rasterize_preview(state: &DesignState) -> tiny_skia::Pixmap {
    rasterize_preview_with(state, &SvgOptions::default(), &usvg::Options::default())
}

fn rasterize_preview_with(
    state: &DesignState,
    svg_options: &SvgOptions,
    options: &usvg::Options,
) -> tiny_skia::Pixmap {
    let svg = render_svg(state, svg_options);
    let tree = usvg::Tree::from_data(svg.as_bytes(), options).unwrap();
    let size = tree.size();
    let mut pixmap = tiny_skia::Pixmap::new(WIDTH, HEIGHT).unwrap();
    let transform = tiny_skia::Transform::from_scale(WIDTH as f32 / size.width(), HEIGHT as f32 / size.height());
    resvg::render(&tree, transform, &mut pixmap.as_mut());
    pixmap
}

fn export(state: &DesignState) -> RgbaImage {
    export_with(&ExportRenderer::without_font(ExportConfig::default()), state)
}

fn export_with(renderer: &ExportRenderer, state: &DesignState) -> RgbaImage {
    let png = renderer.export_png(state).unwrap();
    image::load_from_memory(&png).unwrap().to_rgba8()
}

fn assert_parity(name: &str, state: &DesignState) {
    let preview = rasterize_preview(state);
    let exported = export(state);
    assert_eq!(exported.dimensions(), (WIDTH, HEIGHT));

    let mut mismatches = 0usize;
    let mut painted = 0usize;
    for (x, y, px) in exported.enumerate_pixels() {
        let Some(sk) = preview.pixel(x, y) else { continue };
        let preview_px = [sk.red(), sk.green(), sk.blue(), sk.alpha()];
        if px[3] > 0 {
            painted += 1;
        }
        if pixel_difference(premultiply(px), preview_px) > CHANNEL_TOLERANCE {
            mismatches += 1;
        }
    }

    let ratio = mismatches as f64 / (WIDTH * HEIGHT) as f64;
    assert!(painted > 100_000, "{}: export looks empty ({} painted pixels)", name, painted);
    assert!(
        ratio <= MAX_MISMATCH_RATIO,
        "{}: {} mismatching pixels ({:.3}%)",
        name,
        mismatches,
        ratio * 100.0
    );
}

fn apply(state: &mut DesignState, events: &[ControlEvent]) {
    for e in events {
        e.apply(state).unwrap();
    }
}

#[test]
fn solid_default_matches() {
    assert_parity("default", &DesignState::new());
}

#[test]
fn preset_color_matches() {
    let mut state = DesignState::new();
    apply(&mut state, &[ControlEvent::SelectPreset { index: 3 }]);
    assert_parity("preset", &state);
}

#[test]
fn horizontal_two_stop_gradient_matches() {
    let mut state = DesignState::new();
    apply(&mut state, &[ControlEvent::SetGradientEnabled { enabled: true }]);
    assert_parity("horizontal gradient", &state);
}

#[test]
fn diagonal_four_stop_gradient_matches() {
    let mut state = DesignState::new();
    apply(&mut state, &[
        ControlEvent::SetGradientSlotEnabled { index: 2, enabled: true },
        ControlEvent::SetGradientSlotEnabled { index: 3, enabled: true },
        ControlEvent::SetGradientDirection { direction: "135deg".to_string() },
    ]);
    assert_parity("diagonal gradient", &state);
}

#[test]
fn rotated_vertical_gradient_matches() {
    let mut state = DesignState::new();
    apply(&mut state, &[
        ControlEvent::SetGradientDirection { direction: "vertical".to_string() },
        ControlEvent::Drag { from: 0.0, to: 41.0 },
    ]);
    assert_eq!(state.rotation.index(), 2);
    assert_parity("rotated 60°", &state);
}

#[test]
fn half_turn_matches() {
    let mut state = DesignState::new();
    apply(&mut state, &[ControlEvent::RotateTo { index: 6 }, ControlEvent::SetBaseColor { color: "#34495e".to_string() }]);
    assert_parity("half turn", &state);
}

// ── text ──────────────────────────────────────────────────────────────────

fn installed_font() -> Option<PathBuf> {
    let found = atelier_engine::text::SYSTEM_FONT_PATHS.iter().map(PathBuf::from).find(|p| p.is_file());
    if found.is_none() {
        eprintln!("no system font installed; skipping text parity");
    }
    found
}

fn is_label_red(rgba: [u8; 4]) -> bool {
    rgba[3] > 200 && rgba[0] > 200 && rgba[1] < 80 && rgba[2] < 80
}

/// Mean position of label-colored pixels, and how many there were.
fn red_centroid(pixels: impl Iterator<Item = (u32, u32, [u8; 4])>) -> (f32, f32, u32) {
    let (mut n, mut sx, mut sy) = (0u32, 0u64, 0u64);
    for (x, y, rgba) in pixels {
        if is_label_red(rgba) {
            n += 1;
            sx += x as u64;
            sy += y as u64;
        }
    }
    let n_f = n.max(1) as f32;
    (sx as f32 / n_f, sy as f32 / n_f, n)
}

#[test]
fn text_lands_in_the_same_place_at_several_rotations() {
    let Some(font_path) = installed_font() else { return };

    let mut options = usvg::Options::default();
    options.fontdb_mut().load_font_file(&font_path).unwrap();
    let family = options.fontdb.faces().next().unwrap().families[0].0.clone();
    let svg_options = SvgOptions { font_family: family, ..SvgOptions::default() };

    let renderer = ExportRenderer::new(ExportConfig { font_path: Some(font_path), ..ExportConfig::default() });
    assert!(renderer.has_font());

    for index in [0, 3, 6] {
        let mut state = DesignState::new();
        apply(&mut state, &[
            ControlEvent::SetFrontText { text: "HELLO".to_string() },
            ControlEvent::SetBackText { text: "HELLO".to_string() },
            ControlEvent::SetTextColor { color: "#ff0000".to_string() },
            ControlEvent::RotateTo { index },
        ]);

        let preview = rasterize_preview_with(&state, &svg_options, &options);
        let preview_pixels = (0..HEIGHT).flat_map(|y| (0..WIDTH).map(move |x| (x, y))).filter_map(|(x, y)| {
            let c = preview.pixel(x, y)?.demultiply();
            Some((x, y, [c.red(), c.green(), c.blue(), c.alpha()]))
        });
        let (px, py, pn) = red_centroid(preview_pixels);

        let exported = export_with(&renderer, &state);
        let (ex, ey, en) = red_centroid(exported.enumerate_pixels().map(|(x, y, p)| (x, y, p.0)));

        assert!(pn > 200 && en > 200, "index {}: too few text pixels (preview {}, export {})", index, pn, en);
        assert!(
            (px - ex).abs() < 3.0 && (py - ey).abs() < 3.0,
            "index {}: preview text at ({:.1}, {:.1}), export at ({:.1}, {:.1})",
            index, px, py, ex, ey
        );
    }
}

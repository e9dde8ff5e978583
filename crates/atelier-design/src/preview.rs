//! Vector preview: design state → scene → SVG.
//!
//! The scene built here is the single description of what the garment looks
//! like. The preview serializes it as SVG; the export rasterizes it.

use atelier_engine::coords::{Rotation, Vec2};
use atelier_engine::paint::Color;
use atelier_engine::scene::{Layer, Scene, TextCmd, TextShadow};
use atelier_engine::svg::{scene_to_svg, SvgOptions};

use crate::silhouette::{shading_color, Silhouette, DESIGN_FRAME};
use crate::state::DesignState;

/// Text drop shadow, in design pixels.
pub const TEXT_SHADOW_OFFSET: Vec2 = Vec2::new(2.0, 2.0);
pub const TEXT_SHADOW_BLUR: f32 = 2.0;
pub const TEXT_SHADOW_ALPHA: f32 = 0.3;

pub fn text_shadow() -> TextShadow {
    TextShadow {
        offset: TEXT_SHADOW_OFFSET,
        blur: TEXT_SHADOW_BLUR,
        color: Color::BLACK.with_alpha(TEXT_SHADOW_ALPHA),
    }
}

/// Builds the garment scene in the 400×500 design frame.
///
/// Back to front: outline in the resolved fill, shading overlays, then the
/// visible face's text. Everything turns with the view angle about the frame
/// center.
pub fn build_scene(state: &DesignState) -> Scene {
    let silhouette = Silhouette::get();
    let rotation = Rotation::new(state.rotation.angle_degrees(), Silhouette::pivot());
    let mut scene = Scene::new(DESIGN_FRAME, rotation);

    scene
        .draw_list
        .push_path(Layer::Base, silhouette.outline.clone(), state.fill_paint(DESIGN_FRAME));
    for overlay in &silhouette.overlays {
        scene.draw_list.push_path(Layer::Overlay, overlay.clone(), shading_color());
    }

    if let Some(text) = state.visible_text() {
        let (h, v) = state.text.position();
        scene.draw_list.push_text(Layer::Label, TextCmd {
            text: text.to_string(),
            size: state.text.size(),
            color: state.text.color(),
            anchor: DESIGN_FRAME.point_at_percent(h, v),
            bold: true,
            shadow: Some(text_shadow()),
        });
    }

    scene
}

/// Serializes the preview as a standalone SVG document.
pub fn render_svg(state: &DesignState, opts: &SvgOptions) -> String {
    scene_to_svg(&build_scene(state), opts)
}

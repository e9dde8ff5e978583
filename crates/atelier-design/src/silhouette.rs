//! Fixed garment outline and shading overlays, in the 400×500 design frame.

use std::sync::OnceLock;

use atelier_engine::coords::{Rect, Vec2};
use atelier_engine::paint::Color;
use atelier_engine::path::Path;

/// Design-space frame both renderers map from.
pub const DESIGN_FRAME: Rect = Rect::new(0.0, 0.0, 400.0, 500.0);

const OUTLINE: &str = "M70 110 C70 110 75 85 80 80 C85 75 95 70 105 70 L120 70 \
    C125 65 130 50 140 45 C150 40 160 35 170 35 L230 35 C240 35 250 40 260 45 \
    C270 50 275 65 280 70 L295 70 C305 70 315 75 320 80 C325 85 330 110 330 110 \
    L365 125 C370 127 375 130 378 135 C380 140 380 145 380 150 L380 175 \
    C380 180 378 185 375 187 C372 189 365 190 360 190 L330 190 L330 440 \
    C330 460 325 470 315 475 C305 480 295 480 285 480 L115 480 \
    C105 480 95 480 85 475 C75 470 70 460 70 440 L70 190 L40 190 \
    C35 190 28 189 25 187 C22 185 20 180 20 175 L20 150 C20 145 20 140 22 135 \
    C25 130 30 127 35 125 L70 110 Z";

const COLLAR: &str = "M140 45 C150 40 160 35 170 35 L230 35 C240 35 250 40 260 45 \
    C255 55 245 65 235 70 L165 70 C155 65 145 55 140 45 Z";

const LEFT_SLEEVE: &str = "M70 110 L35 125 C30 127 25 130 22 135 C25 130 30 127 35 125 \
    L70 110 L70 140 L40 140 L40 190 L70 190 L70 140 Z";

const RIGHT_SLEEVE: &str = "M330 110 L365 125 C370 127 375 130 378 135 C375 130 370 127 365 125 \
    L330 110 L330 140 L360 140 L360 190 L330 190 L330 140 Z";

/// Opacity of the black shading drawn over the collar and sleeves.
pub const SHADING_ALPHA: f32 = 0.1;

pub fn shading_color() -> Color {
    Color::BLACK.with_alpha(SHADING_ALPHA)
}

/// Parsed outline and overlays.
#[derive(Debug, Clone)]
pub struct Silhouette {
    pub outline: Path,
    pub overlays: [Path; 3],
}

impl Silhouette {
    /// The shared, lazily parsed silhouette.
    pub fn get() -> &'static Silhouette {
        static SILHOUETTE: OnceLock<Silhouette> = OnceLock::new();
        SILHOUETTE.get_or_init(|| Silhouette {
            outline: parse_or_empty("outline", OUTLINE),
            overlays: [
                parse_or_empty("collar", COLLAR),
                parse_or_empty("left sleeve", LEFT_SLEEVE),
                parse_or_empty("right sleeve", RIGHT_SLEEVE),
            ],
        })
    }

    /// Rotation pivot for the whole garment.
    #[inline]
    pub fn pivot() -> Vec2 {
        DESIGN_FRAME.center()
    }
}

fn parse_or_empty(name: &str, data: &str) -> Path {
    Path::parse(data).unwrap_or_else(|e| {
        log::error!("silhouette {} path is malformed: {}", name, e);
        Path::new()
    })
}

//! Raster export: design state → fixed-size canvas → PNG bytes.

use std::path::PathBuf;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use atelier_engine::raster::{Canvas, RasterError};
use atelier_engine::text::{FontId, FontSystem};

use crate::error::{DesignError, DesignResult};
use crate::preview::build_scene;
use crate::state::DesignState;

pub const DEFAULT_EXPORT_WIDTH: u32 = 800;
pub const DEFAULT_EXPORT_HEIGHT: u32 = 1000;

#[derive(Debug, Clone, PartialEq)]
pub struct ExportConfig {
    pub width: u32,
    pub height: u32,
    /// Font file for text; `None` searches the usual system locations.
    pub font_path: Option<PathBuf>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self { width: DEFAULT_EXPORT_WIDTH, height: DEFAULT_EXPORT_HEIGHT, font_path: None }
    }
}

/// `design-<unix millis>.png`.
pub fn default_export_file_name() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    format!("design-{}.png", millis)
}

fn unavailable(err: RasterError) -> DesignError {
    DesignError::RenderUnavailable(err.to_string())
}

/// Renders designs onto a canvas of the configured size.
///
/// Owns the font used for text. The font is resolved once, at construction.
pub struct ExportRenderer {
    config: ExportConfig,
    fonts: FontSystem,
    font: Option<FontId>,
}

impl ExportRenderer {
    /// Loads the configured font, falling back to the system search.
    ///
    /// A missing font is not an error here; exporting a design that shows
    /// text is.
    pub fn new(config: ExportConfig) -> Self {
        let mut fonts = FontSystem::new();
        let configured = config.font_path.as_ref().and_then(|path| {
            fonts
                .load_font_file(path)
                .map_err(|e| log::warn!("{}; falling back to system fonts", e))
                .ok()
        });
        let font = configured.or_else(|| fonts.load_system_font());
        if font.is_none() {
            log::warn!("no font available; designs with text cannot be exported");
        }
        Self { config, fonts, font }
    }

    /// A renderer that never loads a font.
    pub fn without_font(config: ExportConfig) -> Self {
        Self { config, fonts: FontSystem::new(), font: None }
    }

    #[inline]
    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    #[inline]
    pub fn has_font(&self) -> bool {
        self.font.is_some()
    }

    /// Draws `state` onto a fresh transparent canvas.
    pub fn render(&self, state: &DesignState) -> DesignResult<Canvas> {
        let mut canvas = Canvas::new(self.config.width, self.config.height).map_err(unavailable)?;
        canvas
            .draw_scene(&build_scene(state), &self.fonts, self.font)
            .map_err(unavailable)?;
        Ok(canvas)
    }

    /// Renders and encodes `state` as PNG.
    pub fn export_png(&self, state: &DesignState) -> DesignResult<Vec<u8>> {
        let started = Instant::now();
        let bytes = self.render(state)?.encode_png().map_err(unavailable)?;
        log::info!(
            "exported {}x{} png ({} bytes) in {:?}",
            self.config.width,
            self.config.height,
            bytes.len(),
            started.elapsed()
        );
        Ok(bytes)
    }
}

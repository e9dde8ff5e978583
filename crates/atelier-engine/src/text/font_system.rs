use std::fmt;
use std::path::Path;

use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};

use crate::coords::Vec2;

use super::CoverageMask;

/// Well-known locations of a bold sans-serif face, tried in order by
/// [`FontSystem::load_system_font`]. Regular weights come last as a fallback.
pub const SYSTEM_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/usr/share/fonts/noto/NotoSans-Bold.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Bold.ttf",
    "/Library/Fonts/Arial Bold.ttf",
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    "C:\\Windows\\Fonts\\arialbd.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
];

/// Error returned by [`FontSystem::load_font`] and friends.
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Opaque handle to a font loaded into a [`FontSystem`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(pub(crate) usize);

/// Vertical metrics of one laid-out line, in pixels at the requested size.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LineBox {
    /// Advance width of the whole run.
    pub width: f32,
    /// Distance from the top of the line box to the baseline.
    pub ascent: f32,
    /// Distance from the baseline to the bottom of the line box (positive).
    pub descent: f32,
}

impl LineBox {
    #[inline]
    pub fn height(&self) -> f32 {
        self.ascent + self.descent
    }

    /// Top-left of a line box whose center (horizontal middle, em-box middle)
    /// sits on `anchor`.
    #[inline]
    pub fn top_left_for_center(&self, anchor: Vec2) -> Vec2 {
        Vec2::new(anchor.x - self.width * 0.5, anchor.y - self.height() * 0.5)
    }
}

/// Owns a collection of loaded fonts.
///
/// Fonts are immutable after loading.
pub struct FontSystem {
    fonts: Vec<fontdue::Font>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self { fonts: Vec::new() }
    }

    /// Parses and stores a TrueType or OpenType font from raw bytes.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        let id = FontId(self.fonts.len());
        self.fonts.push(font);
        Ok(id)
    }

    pub fn load_font_file(&mut self, path: &Path) -> Result<FontId, FontLoadError> {
        let bytes = std::fs::read(path)
            .map_err(|e| FontLoadError(format!("{}: {}", path.display(), e)))?;
        self.load_font(&bytes)
    }

    /// Loads the first readable font from [`SYSTEM_FONT_PATHS`].
    pub fn load_system_font(&mut self) -> Option<FontId> {
        SYSTEM_FONT_PATHS.iter().find_map(|p| {
            let id = self.load_font_file(Path::new(p)).ok()?;
            log::debug!("loaded system font {}", p);
            Some(id)
        })
    }

    pub(crate) fn get(&self, id: FontId) -> Option<&fontdue::Font> {
        self.fonts.get(id.0)
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    /// Lays out a single line at `size` px and returns its box.
    ///
    /// Width is the pen position after the last glyph; ascent/descent come from
    /// the font's horizontal line metrics so the box is independent of which
    /// glyphs the text contains.
    pub fn measure_line(&self, text: &str, id: FontId, size: f32) -> Option<LineBox> {
        let font = self.get(id)?;
        let metrics = font.horizontal_line_metrics(size)?;

        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings::default());
        layout.append(&[font], &TextStyle::new(text, size, 0));

        let width = layout
            .glyphs()
            .iter()
            .map(|g| {
                let m = font.metrics_indexed(g.key.glyph_index, size);
                (g.x - m.xmin as f32 + m.advance_width).max(0.0)
            })
            .fold(0.0f32, f32::max);

        Some(LineBox { width, ascent: metrics.ascent, descent: -metrics.descent })
    }

    /// Rasterizes a single line into a coverage mask.
    ///
    /// The mask origin is relative to the top-left of the line box reported by
    /// [`measure_line`](Self::measure_line). Returns `None` for unknown fonts or
    /// text without visible glyphs.
    pub fn rasterize_line(&self, text: &str, id: FontId, size: f32) -> Option<CoverageMask> {
        let font = self.get(id)?;

        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings::default());
        layout.append(&[font], &TextStyle::new(text, size, 0));

        let glyphs: Vec<_> = layout
            .glyphs()
            .iter()
            .filter(|g| g.char_data.rasterize() && g.width > 0 && g.height > 0)
            .map(|g| (g.key, g.x, g.y, g.width, g.height))
            .collect();
        if glyphs.is_empty() {
            return None;
        }

        let min_x = glyphs.iter().map(|g| g.1.floor()).fold(f32::INFINITY, f32::min);
        let min_y = glyphs.iter().map(|g| g.2.floor()).fold(f32::INFINITY, f32::min);
        let max_x = glyphs.iter().map(|g| g.1 + g.3 as f32).fold(f32::NEG_INFINITY, f32::max);
        let max_y = glyphs.iter().map(|g| g.2 + g.4 as f32).fold(f32::NEG_INFINITY, f32::max);

        let mut mask = CoverageMask::new(
            (max_x - min_x).ceil() as u32,
            (max_y - min_y).ceil() as u32,
            Vec2::new(min_x, min_y),
        );

        for (key, x, y, _, _) in glyphs {
            let (metrics, bitmap) = font.rasterize_config(key);
            if metrics.width == 0 || metrics.height == 0 {
                continue;
            }
            mask.blit(
                (x - min_x).round() as i32,
                (y - min_y).round() as i32,
                metrics.width,
                metrics.height,
                &bitmap,
            );
        }

        Some(mask)
    }
}

impl Default for FontSystem {
    fn default() -> Self {
        Self::new()
    }
}
